use super::*;
use crate::stats::ScenarioStats;

fn stats(scenario: &str, size: u64, mean: f64) -> ScenarioStats {
    stats_for("cyclesort", scenario, size, mean)
}

fn stats_for(algorithm: &str, scenario: &str, size: u64, mean: f64) -> ScenarioStats {
    ScenarioStats {
        algorithm: algorithm.to_string(),
        scenario: scenario.to_string(),
        size,
        mean_time_ms: Some(mean),
        stddev_time_ms: Some(0.1),
        mean_comparisons: Some(size as f64 * 2.0),
        mean_swaps: Some(size as f64),
    }
}

#[test]
fn summary_uses_largest_size() {
    let (table, _) = StatsTable::from_rows([
        stats("decrescente", 1000, 40.0),
        stats("decrescente", 100, 4.0),
    ]);
    let summaries = summarize(&table);
    assert_eq!(summaries.len(), 1);

    let summary = &summaries[0];
    assert_eq!(summary.sizes, vec![100, 1000]);
    assert_eq!(summary.largest_size, 1000);
    assert_eq!(summary.mean_time_ms, Some(40.0));
    assert_eq!(summary.comparisons_per_element, Some(2.0));
    assert_eq!(summary.swaps_per_element, Some(1.0));
    assert!((summary.complexity_exponent.unwrap() - 1.0).abs() < 1e-9);
}

#[test]
fn summaries_sorted_by_scenario_name() {
    let (table, _) = StatsTable::from_rows([
        stats("decrescente", 10, 1.0),
        stats("aleatorio", 10, 1.0),
        stats("crescente", 10, 1.0),
    ]);
    let names: Vec<_> = summarize(&table).into_iter().map(|s| s.scenario).collect();
    assert_eq!(names, vec!["aleatorio", "crescente", "decrescente"]);
}

#[test]
fn single_size_has_no_exponent() {
    let (table, _) = StatsTable::from_rows([stats("crescente", 10, 1.0)]);
    let summary = &summarize(&table)[0];
    assert_eq!(summary.complexity_exponent, None);

    let json = serde_json::to_string(summary).unwrap();
    assert!(!json.contains("complexity_exponent"));
}

#[test]
fn algorithms_are_summarized_separately() {
    let (table, _) = StatsTable::from_rows([
        stats_for("shellsort", "crescente", 100, 1.0),
        stats_for("shellsort", "crescente", 1000, 10.0),
        stats_for("cyclesort", "crescente", 100, 50.0),
        stats_for("cyclesort", "crescente", 1000, 5000.0),
    ]);
    let summaries = summarize(&table);
    assert_eq!(summaries.len(), 2);

    let cycle = &summaries[0];
    assert_eq!(cycle.algorithm, "cyclesort");
    assert_eq!(cycle.sizes, vec![100, 1000]);
    assert_eq!(cycle.mean_time_ms, Some(5000.0));
    assert!((cycle.complexity_exponent.unwrap() - 2.0).abs() < 1e-9);

    let shell = &summaries[1];
    assert_eq!(shell.algorithm, "shellsort");
    assert_eq!(shell.sizes, vec![100, 1000]);
    assert_eq!(shell.mean_time_ms, Some(10.0));
    assert!((shell.complexity_exponent.unwrap() - 1.0).abs() < 1e-9);
}
