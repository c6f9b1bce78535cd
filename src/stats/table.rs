use std::collections::BTreeMap;

use indexmap::IndexMap;
use serde::Serialize;

/// Canonical statistics for one (algorithm, scenario, size) triple.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScenarioStats {
    pub algorithm: String,
    pub scenario: String,
    pub size: u64,
    pub mean_time_ms: Option<f64>,
    pub stddev_time_ms: Option<f64>,
    pub mean_comparisons: Option<f64>,
    pub mean_swaps: Option<f64>,
}

/// All rows of one (algorithm, scenario) pair, ascending by size.
#[derive(Debug, Clone)]
pub struct ScenarioGroup<'a> {
    pub algorithm: &'a str,
    pub scenario: &'a str,
    pub rows: Vec<&'a ScenarioStats>,
}

impl ScenarioGroup<'_> {
    /// Sizes in ascending order.
    #[must_use]
    pub fn sizes(&self) -> Vec<u64> {
        self.rows.iter().map(|r| r.size).collect()
    }

    /// Row with the largest size.
    #[must_use]
    pub fn last(&self) -> Option<&ScenarioStats> {
        self.rows.last().copied()
    }
}

/// The reconciled statistics table.
///
/// Built once, then only read. (algorithm, scenario, size) is unique; rows are
/// grouped by (algorithm, scenario) in first-appearance order and sorted by
/// size inside each group.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct StatsTable {
    rows: Vec<ScenarioStats>,
}

impl StatsTable {
    /// Build a table, keeping the first row of every duplicated key.
    ///
    /// Returns the table and the number of discarded duplicates.
    #[must_use]
    pub fn from_rows(rows: impl IntoIterator<Item = ScenarioStats>) -> (Self, usize) {
        let mut groups: IndexMap<(String, String), BTreeMap<u64, ScenarioStats>> = IndexMap::new();
        let mut duplicates = 0;

        for row in rows {
            let sizes = groups
                .entry((row.algorithm.clone(), row.scenario.clone()))
                .or_default();
            if sizes.contains_key(&row.size) {
                duplicates += 1;
                continue;
            }
            sizes.insert(row.size, row);
        }

        let rows = groups
            .into_values()
            .flat_map(BTreeMap::into_values)
            .collect();
        (Self { rows }, duplicates)
    }

    #[must_use]
    pub fn rows(&self) -> &[ScenarioStats] {
        &self.rows
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Distinct algorithm names in first-appearance order.
    #[must_use]
    pub fn algorithms(&self) -> Vec<&str> {
        distinct(self.rows.iter().map(|r| r.algorithm.as_str()))
    }

    /// Distinct scenario names in first-appearance order.
    #[must_use]
    pub fn scenarios(&self) -> Vec<&str> {
        distinct(self.rows.iter().map(|r| r.scenario.as_str()))
    }

    /// Rows of one algorithm as a new table.
    #[must_use]
    pub fn for_algorithm(&self, algorithm: &str) -> Self {
        Self {
            rows: self
                .rows
                .iter()
                .filter(|r| r.algorithm == algorithm)
                .cloned()
                .collect(),
        }
    }

    /// Rows grouped by (algorithm, scenario), each group re-sorted by size.
    ///
    /// Sorting is repeated here so callers never rely on construction order.
    /// Scenarios without rows do not appear. A table holding several
    /// algorithms yields one group per algorithm for the same scenario.
    #[must_use]
    pub fn scenario_groups(&self) -> Vec<ScenarioGroup<'_>> {
        let mut groups: IndexMap<(&str, &str), Vec<&ScenarioStats>> = IndexMap::new();
        for row in &self.rows {
            groups
                .entry((row.algorithm.as_str(), row.scenario.as_str()))
                .or_default()
                .push(row);
        }
        groups
            .into_iter()
            .map(|((algorithm, scenario), mut rows)| {
                rows.sort_by_key(|r| r.size);
                ScenarioGroup {
                    algorithm,
                    scenario,
                    rows,
                }
            })
            .collect()
    }

    /// Distinct sizes across the whole table, ascending.
    #[must_use]
    pub fn distinct_sizes(&self) -> Vec<u64> {
        let mut sizes: Vec<u64> = self.rows.iter().map(|r| r.size).collect();
        sizes.sort_unstable();
        sizes.dedup();
        sizes
    }
}

fn distinct<'a>(names: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    let mut seen = indexmap::IndexSet::new();
    for name in names {
        seen.insert(name);
    }
    seen.into_iter().collect()
}

#[cfg(test)]
#[path = "table_tests.rs"]
mod tests;
