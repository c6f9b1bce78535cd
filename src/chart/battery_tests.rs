use indexmap::IndexMap;

use super::*;
use crate::chart::figure::AxisScale;
use crate::chart::style::ChartColor;
use crate::stats::ScenarioStats;

fn row(scenario: &str, size: u64, time: f64) -> ScenarioStats {
    ScenarioStats {
        algorithm: "shellsort".to_string(),
        scenario: scenario.to_string(),
        size,
        mean_time_ms: Some(time),
        stddev_time_ms: Some(time / 10.0),
        mean_comparisons: Some(size as f64 * 4.0),
        mean_swaps: Some(size as f64 * 2.0),
    }
}

fn two_scenarios() -> StatsTable {
    StatsTable::from_rows([
        row("crescente", 100, 0.5),
        row("crescente", 1000, 6.0),
        row("aleatorio", 100, 1.0),
        row("aleatorio", 1000, 15.0),
    ])
    .0
}

fn palette() -> ScenarioPalette {
    let colors: IndexMap<String, ChartColor> = [
        ("crescente", "steelblue"),
        ("decrescente", "darkorange"),
        ("aleatorio", "forestgreen"),
    ]
    .into_iter()
    .map(|(s, c)| (s.to_string(), ChartColor::named(c).unwrap()))
    .collect();
    ScenarioPalette::new(colors, ChartColor::gray())
}

fn plan(table: &StatsTable, palette: &ScenarioPalette) -> Vec<ChartArtifact> {
    let subject = ChartSubject {
        slug: "shellsort",
        display_name: "Shell Sort",
        palette,
    };
    plan_battery(table, &subject, &ChartTheme::default())
}

#[test]
fn two_scenarios_yield_ten_distinct_artifacts() {
    let artifacts = plan(&two_scenarios(), &palette());
    assert_eq!(artifacts.len(), 10);

    let names: Vec<String> = artifacts
        .iter()
        .map(|a| a.file_name(ImageFormat::Png))
        .collect();
    assert_eq!(
        names,
        vec![
            "shellsort_crescente_individual.png",
            "shellsort_aleatorio_individual.png",
            "shellsort_comparacao_tempo_cenarios.png",
            "shellsort_comparacao_comparacoes.png",
            "shellsort_consistencia_cenarios.png",
            "shellsort_eficiencia_comparacoes.png",
            "shellsort_trocas_por_elemento.png",
            "shellsort_comparacao_trocas_cenarios.png",
            "shellsort_analise_complexidade.png",
            "shellsort_resumo_geral.png",
        ]
    );
    let unique: HashSet<_> = names.iter().collect();
    assert_eq!(unique.len(), names.len());
}

#[test]
fn svg_format_keeps_stems() {
    let artifacts = plan(&two_scenarios(), &palette());
    assert_eq!(
        artifacts[0].file_name(ImageFormat::Svg),
        "shellsort_crescente_individual.svg"
    );
}

#[test]
fn empty_table_plans_nothing() {
    assert!(plan(&StatsTable::default(), &palette()).is_empty());
}

#[test]
fn individual_figure_has_six_panels_in_theme_colors() {
    let artifacts = plan(&two_scenarios(), &palette());
    let individual = &artifacts[0];
    assert_eq!(individual.kind, ChartKind::Individual);
    assert_eq!(individual.scenario.as_deref(), Some("crescente"));

    let figure = &individual.figure;
    assert_eq!(figure.grid, (2, 3));
    assert_eq!(figure.panels.len(), 6);
    assert_eq!(figure.title.as_deref(), Some("Shell Sort - Cenário: Crescente"));

    let theme = ChartTheme::default();
    for (i, panel) in figure.panels.iter().enumerate() {
        assert_eq!(panel.series.len(), 1);
        assert_eq!(panel.series[0].color, theme.panel_color(i));
        assert!(!panel.show_legend);
        assert!(panel.title.is_some());
    }

    // only the mean time panel labels its points
    let labels: Vec<_> = figure.panels[0]
        .annotations
        .iter()
        .map(|a| a.text.as_str())
        .collect();
    assert_eq!(labels, vec!["0.50", "6.00"]);
    assert!(figure.panels[1..].iter().all(|p| p.annotations.is_empty()));
}

#[test]
fn overlays_draw_one_line_per_scenario() {
    let artifacts = plan(&two_scenarios(), &palette());
    let overlay = artifacts
        .iter()
        .find(|a| a.kind == ChartKind::TimeComparison)
        .unwrap();
    let panel = &overlay.figure.panels[0];
    let labels: Vec<_> = panel.series.iter().map(|s| s.label.as_str()).collect();
    assert_eq!(labels, vec!["Crescente", "Aleatorio"]);
    assert_eq!(panel.series[1].color.to_string(), "forestgreen");
    assert!(panel.show_legend);
    assert_eq!(
        overlay.figure.title.as_deref(),
        Some("Comparação de Tempo Médio de Execução - Shell Sort")
    );
}

#[test]
fn unmapped_scenario_falls_back_to_gray_with_raw_label() {
    let (table, _) = StatsTable::from_rows([row("quase_ordenado", 100, 1.0)]);
    let artifacts = plan(&table, &palette());
    assert_eq!(artifacts.len(), 9);

    for artifact in artifacts.iter().filter(|a| a.kind != ChartKind::Individual) {
        for panel in &artifact.figure.panels {
            assert_eq!(panel.series[0].color, ChartColor::gray());
            assert_eq!(panel.series[0].label, "quase_ordenado");
        }
    }
}

#[test]
fn complexity_chart_is_log_log_with_references() {
    let artifacts = plan(&two_scenarios(), &palette());
    let complexity = artifacts
        .iter()
        .find(|a| a.kind == ChartKind::Complexity)
        .unwrap();
    let panel = &complexity.figure.panels[0];
    assert_eq!(panel.scale, AxisScale::LogLog);
    assert_eq!(panel.references.len(), 2);
    assert_eq!(panel.annotations.len(), 2);
    assert!(panel.annotations.iter().all(|a| a.text.starts_with("α ≈ ")));
}

#[test]
fn swaps_overlay_annotates_last_points() {
    let artifacts = plan(&two_scenarios(), &palette());
    let swaps = artifacts
        .iter()
        .find(|a| a.kind == ChartKind::SwapsComparison)
        .unwrap();
    let texts: Vec<_> = swaps.figure.panels[0]
        .annotations
        .iter()
        .map(|a| a.text.as_str())
        .collect();
    assert_eq!(texts, vec!["2,000", "2,000"]);
}

#[test]
fn summary_is_a_two_by_two_grid() {
    let artifacts = plan(&two_scenarios(), &palette());
    let summary = artifacts.last().unwrap();
    assert_eq!(summary.kind, ChartKind::Summary);
    assert_eq!(summary.figure.grid, (2, 2));
    assert_eq!(summary.figure.panels.len(), 4);
    assert!(summary.figure.panels.iter().all(|p| p.series.len() == 2));
}

#[test]
fn colliding_scenario_names_get_numbered() {
    let stems = scenario_file_stems(&["quase ordenado", "quase/ordenado", "quase_ordenado"]);
    assert_eq!(stems, vec!["quase_ordenado", "quase_ordenado_2", "quase_ordenado_3"]);
}

#[test]
fn sanitize_keeps_safe_characters() {
    assert_eq!(sanitize_file_component("meio-ordenado_1"), "meio-ordenado_1");
    assert_eq!(sanitize_file_component("a.b c"), "a_b_c");
}

#[test]
fn chart_kind_suffixes_are_unique() {
    let suffixes: HashSet<_> = ChartKind::ALGORITHM_WIDE
        .iter()
        .map(|k| k.suffix())
        .chain(std::iter::once(ChartKind::Individual.suffix()))
        .collect();
    assert_eq!(suffixes.len(), 9);
}
