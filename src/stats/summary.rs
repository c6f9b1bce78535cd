use serde::Serialize;

use super::metrics::{comparisons_per_element, complexity_exponent, swaps_per_element};
use super::table::StatsTable;

/// Headline numbers for one (algorithm, scenario) pair, taken at its largest size.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScenarioSummary {
    pub algorithm: String,
    pub scenario: String,
    pub sizes: Vec<u64>,
    pub largest_size: u64,
    pub mean_time_ms: Option<f64>,
    pub comparisons_per_element: Option<f64>,
    pub swaps_per_element: Option<f64>,
    /// Omitted when fewer than two sizes have a positive mean time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub complexity_exponent: Option<f64>,
}

/// Summaries for every (algorithm, scenario) pair, ordered by algorithm then
/// scenario name.
#[must_use]
pub fn summarize(table: &StatsTable) -> Vec<ScenarioSummary> {
    let mut summaries: Vec<ScenarioSummary> = table
        .scenario_groups()
        .into_iter()
        .filter_map(|group| {
            let last = group.last()?;
            Some(ScenarioSummary {
                algorithm: group.algorithm.to_string(),
                scenario: group.scenario.to_string(),
                sizes: group.sizes(),
                largest_size: last.size,
                mean_time_ms: last.mean_time_ms,
                comparisons_per_element: comparisons_per_element(last),
                swaps_per_element: swaps_per_element(last),
                complexity_exponent: complexity_exponent(group.rows.iter().copied()),
            })
        })
        .collect();
    summaries.sort_by(|a, b| {
        a.algorithm
            .cmp(&b.algorithm)
            .then_with(|| a.scenario.cmp(&b.scenario))
    });
    summaries
}

#[cfg(test)]
#[path = "summary_tests.rs"]
mod tests;
