//! Measurement input: reading the semicolon-delimited benchmark table and
//! splitting its rows into raw trials and precomputed summaries.

mod classify;
mod numeric;
mod reader;
mod types;

pub use classify::{MeasurementSet, RowKind, classify, partition};
pub use numeric::{coerce_f64, coerce_scenario, coerce_size};
pub use reader::{COLUMNS, read_table, read_table_from};
pub use types::{InputRow, RawMeasurement, SummaryRow};
