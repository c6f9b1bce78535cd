use std::collections::BTreeMap;

use serde::Serialize;

use crate::error::{Result, SortbenchError};
use crate::measurement::{MeasurementSet, RawMeasurement, SummaryRow};

use super::descriptive::{mean, sample_std_dev};
use super::table::{ScenarioStats, StatsTable};

/// Which reconciliation path produced the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReconcilePath {
    /// Summary rows were present and reinterpreted.
    Precomputed,
    /// Statistics were aggregated from raw trials.
    ComputedFromRaw,
}

impl std::fmt::Display for ReconcilePath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Precomputed => write!(f, "precomputed summaries"),
            Self::ComputedFromRaw => write!(f, "computed from raw trials"),
        }
    }
}

/// Output of reconciliation.
#[derive(Debug, Clone)]
pub struct Reconciled {
    pub path: ReconcilePath,
    pub table: StatsTable,
    /// Raw trials of the same file. Not merged into `table` on the
    /// precomputed path.
    pub raw: Vec<RawMeasurement>,
    /// Rows excluded because scenario or size was missing.
    pub dropped_rows: usize,
    /// Rows excluded because their key was already present.
    pub duplicate_rows: usize,
}

/// Produce the canonical statistics table from a classified input.
///
/// # Errors
/// Returns [`SortbenchError::NoStatistics`] when no row survives.
pub fn reconcile(set: MeasurementSet) -> Result<Reconciled> {
    let (path, candidates, raw, dropped_rows) = match set {
        MeasurementSet::Precomputed { summaries, raw } => {
            let total = summaries.len();
            let rows: Vec<ScenarioStats> = summaries.into_iter().filter_map(from_summary).collect();
            let dropped = total - rows.len();
            (ReconcilePath::Precomputed, rows, raw, dropped)
        }
        MeasurementSet::Raw(raw) => {
            let (rows, dropped) = aggregate_raw(&raw);
            (ReconcilePath::ComputedFromRaw, rows, raw, dropped)
        }
    };

    let (table, duplicate_rows) = StatsTable::from_rows(candidates);

    if dropped_rows > 0 {
        tracing::warn!(
            dropped_rows,
            "excluded rows with missing scenario or size"
        );
    }
    if duplicate_rows > 0 {
        tracing::warn!(duplicate_rows, "excluded rows with a duplicated key");
    }

    if table.is_empty() {
        return Err(SortbenchError::NoStatistics(format!(
            "measurement table ({path})"
        )));
    }

    tracing::info!(%path, rows = table.len(), "reconciled statistics");
    Ok(Reconciled {
        path,
        table,
        raw,
        dropped_rows,
        duplicate_rows,
    })
}

fn from_summary(row: SummaryRow) -> Option<ScenarioStats> {
    Some(ScenarioStats {
        algorithm: row.algorithm,
        scenario: row.scenario?,
        size: row.size?,
        mean_time_ms: row.mean_time_ms,
        stddev_time_ms: row.stddev_time_ms,
        mean_comparisons: row.mean_comparisons,
        mean_swaps: row.mean_swaps,
    })
}

#[derive(Default)]
struct TrialAccumulator {
    times: Vec<f64>,
    comparisons: Vec<f64>,
    swaps: Vec<f64>,
}

/// Group raw trials by key and aggregate them. Missing cells are skipped.
///
/// Groups come out in key order, so the resulting table is ordered by
/// algorithm, then scenario, then size.
fn aggregate_raw(raw: &[RawMeasurement]) -> (Vec<ScenarioStats>, usize) {
    let mut groups: BTreeMap<(String, String, u64), TrialAccumulator> = BTreeMap::new();
    let mut dropped = 0;

    for trial in raw {
        let (Some(scenario), Some(size)) = (&trial.scenario, trial.size) else {
            dropped += 1;
            continue;
        };
        let acc = groups
            .entry((trial.algorithm.clone(), scenario.clone(), size))
            .or_default();
        acc.times.extend(trial.time_ms);
        acc.comparisons.extend(trial.comparisons);
        acc.swaps.extend(trial.swaps);
    }

    let rows = groups
        .into_iter()
        .map(|((algorithm, scenario, size), acc)| ScenarioStats {
            algorithm,
            scenario,
            size,
            mean_time_ms: mean(&acc.times),
            stddev_time_ms: sample_std_dev(&acc.times),
            mean_comparisons: mean(&acc.comparisons),
            mean_swaps: mean(&acc.swaps),
        })
        .collect();
    (rows, dropped)
}

#[cfg(test)]
#[path = "reconcile_tests.rs"]
mod tests;
