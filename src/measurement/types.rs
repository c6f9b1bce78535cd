use serde::Serialize;

use super::numeric::{coerce_f64, coerce_scenario, coerce_size};

/// One physical row of the input table, cells kept as the literal text.
///
/// Empty cells are empty strings; no cell is interpreted before classification.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputRow {
    /// 1-based line number in the source file (header is line 1).
    pub line: u64,
    pub algorithm: String,
    pub scenario: String,
    pub size: String,
    pub repetition: String,
    pub time_ms: String,
    pub comparisons: String,
    pub swaps: String,
}

impl InputRow {
    /// Build a row from the seven cells in column order.
    #[must_use]
    pub fn from_cells(line: u64, cells: [&str; 7]) -> Self {
        let [algorithm, scenario, size, repetition, time_ms, comparisons, swaps] = cells;
        Self {
            line,
            algorithm: algorithm.to_string(),
            scenario: scenario.to_string(),
            size: size.to_string(),
            repetition: repetition.to_string(),
            time_ms: time_ms.to_string(),
            comparisons: comparisons.to_string(),
            swaps: swaps.to_string(),
        }
    }
}

/// A single executed trial.
///
/// `scenario` and `size` are `None` when their cells failed coercion; such
/// trials are dropped by the reconciler, not here.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RawMeasurement {
    pub line: u64,
    pub algorithm: String,
    pub scenario: Option<String>,
    pub size: Option<u64>,
    pub repetition: i64,
    pub time_ms: Option<f64>,
    pub comparisons: Option<f64>,
    pub swaps: Option<f64>,
}

impl RawMeasurement {
    #[must_use]
    pub fn from_row(row: &InputRow, repetition: i64) -> Self {
        Self {
            line: row.line,
            algorithm: row.algorithm.trim().to_string(),
            scenario: coerce_scenario(&row.scenario),
            size: coerce_size(&row.size),
            repetition,
            time_ms: coerce_f64(&row.time_ms),
            comparisons: coerce_f64(&row.comparisons),
            swaps: coerce_f64(&row.swaps),
        }
    }
}

/// A precomputed aggregate row sharing the raw table's physical columns.
///
/// Column mapping is fixed by the producer of these files:
/// `repeticao` holds the mean time, `tempo_ms` the standard deviation of the
/// time, `comparacoes` and `trocas` the mean counts.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryRow {
    pub line: u64,
    pub algorithm: String,
    pub scenario: Option<String>,
    pub size: Option<u64>,
    pub mean_time_ms: Option<f64>,
    pub stddev_time_ms: Option<f64>,
    pub mean_comparisons: Option<f64>,
    pub mean_swaps: Option<f64>,
}

impl SummaryRow {
    #[must_use]
    pub fn from_row(row: &InputRow) -> Self {
        Self {
            line: row.line,
            algorithm: row.algorithm.trim().to_string(),
            scenario: coerce_scenario(&row.scenario),
            size: coerce_size(&row.size),
            mean_time_ms: coerce_f64(&row.repetition),
            stddev_time_ms: coerce_f64(&row.time_ms),
            mean_comparisons: coerce_f64(&row.comparisons),
            mean_swaps: coerce_f64(&row.swaps),
        }
    }
}
