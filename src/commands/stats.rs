use std::path::Path;

use crate::cli::StatsArgs;
use crate::measurement::{partition, read_table};
use crate::output::StatsReport;
use crate::stats::reconcile;
use crate::{EXIT_CONFIG_ERROR, EXIT_PARTIAL_FAILURE, EXIT_SUCCESS, Result};

#[must_use]
pub fn run_stats(args: &StatsArgs) -> i32 {
    match run_stats_impl(args) {
        Ok(output) => {
            print!("{output}");
            EXIT_SUCCESS
        }
        Err(e) if e.is_empty_result() => {
            eprintln!("{e}");
            EXIT_PARTIAL_FAILURE
        }
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

/// Reconcile a measurement file and format the report.
///
/// # Errors
/// Returns an error if the file cannot be read or yields no statistics.
pub fn run_stats_impl(args: &StatsArgs) -> Result<String> {
    let report = build_report(&args.file)?;
    args.format.formatter().format(&report)
}

/// # Errors
/// Returns an error if the file cannot be read or yields no statistics.
pub fn build_report(path: &Path) -> Result<StatsReport> {
    let rows = read_table(path)?;
    let set = partition(&rows);
    let summary_rows = set.summary_count();
    tracing::info!(
        rows = rows.len(),
        raw = set.raw().len(),
        summaries = summary_rows,
        "partitioned measurement rows"
    );
    let reconciled = reconcile(set)?;
    Ok(StatsReport::new(path.to_path_buf(), summary_rows, reconciled))
}

#[cfg(test)]
#[path = "stats_tests.rs"]
mod tests;
