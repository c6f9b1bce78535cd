//! Derived metrics. Pure functions of the canonical table; nothing is stored.
//!
//! A point whose denominator is zero, whose log argument is not positive, or
//! whose inputs are missing yields `None` for that point only.

use indexmap::IndexMap;
use serde::Serialize;

use super::table::{ScenarioStats, StatsTable};

/// Per-row derived metrics.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DerivedMetrics {
    pub comparisons_per_element: Option<f64>,
    pub swaps_per_element: Option<f64>,
    pub coefficient_of_variation_pct: Option<f64>,
}

impl DerivedMetrics {
    #[must_use]
    pub fn of(row: &ScenarioStats) -> Self {
        Self {
            comparisons_per_element: comparisons_per_element(row),
            swaps_per_element: swaps_per_element(row),
            coefficient_of_variation_pct: coefficient_of_variation_pct(row),
        }
    }
}

#[allow(clippy::cast_precision_loss)]
fn per_element(value: Option<f64>, size: u64) -> Option<f64> {
    if size == 0 {
        return None;
    }
    value.map(|v| v / size as f64)
}

/// `mean_comparisons / size`.
#[must_use]
pub fn comparisons_per_element(row: &ScenarioStats) -> Option<f64> {
    per_element(row.mean_comparisons, row.size)
}

/// `mean_swaps / size`.
#[must_use]
pub fn swaps_per_element(row: &ScenarioStats) -> Option<f64> {
    per_element(row.mean_swaps, row.size)
}

/// `stddev / mean * 100`. Requires a positive mean and a known stddev.
#[must_use]
pub fn coefficient_of_variation_pct(row: &ScenarioStats) -> Option<f64> {
    let mean = row.mean_time_ms.filter(|m| *m > 0.0)?;
    let stddev = row.stddev_time_ms?;
    Some(stddev / mean * 100.0)
}

/// Least-squares slope of `log10(mean_time_ms)` against `log10(size)`.
///
/// Only points with a positive mean time take part. With fewer than two
/// distinct sizes the exponent is undefined and `None` is returned.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn complexity_exponent<'a>(rows: impl IntoIterator<Item = &'a ScenarioStats>) -> Option<f64> {
    let mut sizes = Vec::new();
    let points: Vec<(f64, f64)> = rows
        .into_iter()
        .filter(|r| r.size > 0)
        .filter_map(|r| {
            let time = r.mean_time_ms.filter(|t| *t > 0.0)?;
            sizes.push(r.size);
            Some(((r.size as f64).log10(), time.log10()))
        })
        .collect();

    sizes.sort_unstable();
    sizes.dedup();
    if sizes.len() < 2 {
        return None;
    }

    let n = points.len() as f64;
    let mean_x = points.iter().map(|(x, _)| x).sum::<f64>() / n;
    let mean_y = points.iter().map(|(_, y)| y).sum::<f64>() / n;
    let (sxy, sxx) = points.iter().fold((0.0, 0.0), |(sxy, sxx), (x, y)| {
        let dx = x - mean_x;
        (dx.mul_add(y - mean_y, sxy), dx.mul_add(dx, sxx))
    });
    // two distinct sizes guarantee sxx > 0
    Some(sxy / sxx)
}

/// Complexity exponent for every (algorithm, scenario) group.
///
/// Groups without a defined exponent are omitted, never reported as zero.
#[must_use]
pub fn complexity_exponents(table: &StatsTable) -> IndexMap<(String, String), f64> {
    let mut groups: IndexMap<(&str, &str), Vec<&ScenarioStats>> = IndexMap::new();
    for row in table.rows() {
        groups
            .entry((row.algorithm.as_str(), row.scenario.as_str()))
            .or_default()
            .push(row);
    }

    groups
        .into_iter()
        .filter_map(|((algorithm, scenario), rows)| {
            let exponent = complexity_exponent(rows)?;
            Some(((algorithm.to_string(), scenario.to_string()), exponent))
        })
        .collect()
}

/// A plottable quantity of a statistics row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    MeanTime,
    StdDevTime,
    MeanComparisons,
    MeanSwaps,
    ComparisonsPerElement,
    SwapsPerElement,
    CoefficientOfVariation,
}

impl Metric {
    /// Extract this metric from a row.
    #[must_use]
    pub fn value(self, row: &ScenarioStats) -> Option<f64> {
        match self {
            Self::MeanTime => row.mean_time_ms,
            Self::StdDevTime => row.stddev_time_ms,
            Self::MeanComparisons => row.mean_comparisons,
            Self::MeanSwaps => row.mean_swaps,
            Self::ComparisonsPerElement => comparisons_per_element(row),
            Self::SwapsPerElement => swaps_per_element(row),
            Self::CoefficientOfVariation => coefficient_of_variation_pct(row),
        }
    }
}

#[cfg(test)]
#[path = "metrics_tests.rs"]
mod tests;
