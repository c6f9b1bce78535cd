use super::*;

#[test]
fn defaults_cover_both_algorithms() {
    let config = Config::default();
    let slugs: Vec<_> = config.algorithms.keys().map(String::as_str).collect();
    assert_eq!(slugs, vec!["shellsort", "cyclesort"]);

    let shell = &config.algorithms["shellsort"];
    assert_eq!(shell.name, "Shell Sort");
    assert_eq!(shell.scenario_colors["crescente"], "steelblue");

    let cycle = &config.algorithms["cyclesort"];
    assert_eq!(cycle.scenario_colors["decrescente"], "crimson");
}

#[test]
fn empty_file_parses_to_defaults() {
    let config: Config = toml::from_str("").unwrap();
    assert_eq!(config.paths, PathsConfig::default());
    assert_eq!(config.algorithms.len(), 2);
    assert!(config.version.is_none());
}

#[test]
fn algorithms_table_replaces_defaults() {
    let config: Config = toml::from_str(
        r#"
[algorithms.heapsort]
name = "Heap Sort"

[algorithms.heapsort.scenario_colors]
aleatorio = "teal"
"#,
    )
    .unwrap();
    assert_eq!(config.algorithms.len(), 1);
    let heap = &config.algorithms["heapsort"];
    assert_eq!(heap.input_key("heapsort"), "heapsort");
    assert_eq!(heap.scenario_colors["aleatorio"], "teal");
}

#[test]
fn paths_resolve_per_algorithm() {
    let config = Config::default();
    let shell = &config.algorithms["shellsort"];
    let root = Path::new("/project");
    assert_eq!(
        config.paths.input_dir(root, "shellsort", shell),
        PathBuf::from("/project/results/files/shellSort")
    );
    assert_eq!(
        config.paths.output_dir(root, "shellsort", shell),
        PathBuf::from("/project/results/graphics/shellSort")
    );
}

#[test]
fn default_config_round_trips_through_toml() {
    let config = Config::default();
    let text = toml::to_string_pretty(&config).unwrap();
    let parsed: Config = toml::from_str(&text).unwrap();
    assert_eq!(parsed, config);
}
