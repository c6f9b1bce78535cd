use std::fmt::Write;
use std::path::PathBuf;

use serde::Serialize;

use crate::chart::{fixed, with_thousands};
use crate::error::Result;
use crate::stats::{
    DerivedMetrics, ReconcilePath, Reconciled, ScenarioStats, ScenarioSummary, StatsTable,
    summarize,
};

/// Everything the `stats` command reports about one measurement file.
#[derive(Debug, Clone)]
pub struct StatsReport {
    pub source: PathBuf,
    pub path: ReconcilePath,
    pub raw_rows: usize,
    pub summary_rows: usize,
    pub dropped_rows: usize,
    pub duplicate_rows: usize,
    pub table: StatsTable,
    pub scenarios: Vec<ScenarioSummary>,
}

impl StatsReport {
    #[must_use]
    pub fn new(source: PathBuf, summary_rows: usize, reconciled: Reconciled) -> Self {
        let scenarios = summarize(&reconciled.table);
        Self {
            source,
            path: reconciled.path,
            raw_rows: reconciled.raw.len(),
            summary_rows,
            dropped_rows: reconciled.dropped_rows,
            duplicate_rows: reconciled.duplicate_rows,
            table: reconciled.table,
            scenarios,
        }
    }
}

pub trait StatsFormatter {
    /// Format a statistics report into a string.
    ///
    /// # Errors
    /// Returns an error if the formatting fails.
    fn format(&self, report: &StatsReport) -> Result<String>;
}

fn cell(value: Option<f64>, decimals: usize) -> String {
    value.map_or_else(|| "-".to_string(), |v| fixed(v, decimals))
}

pub struct StatsTextFormatter;

impl StatsTextFormatter {
    fn write_table(output: &mut String, table: &StatsTable) {
        writeln!(
            output,
            "{:<14} {:<14} {:>10} {:>14} {:>14} {:>16} {:>14}",
            "algoritmo",
            "cenario",
            "tamanho",
            "media_tempo_ms",
            "desvio_tempo_ms",
            "media_comparacoes",
            "media_trocas"
        )
        .ok();
        for row in table.rows() {
            writeln!(
                output,
                "{:<14} {:<14} {:>10} {:>14} {:>14} {:>16} {:>14}",
                row.algorithm,
                row.scenario,
                row.size,
                cell(row.mean_time_ms, 3),
                cell(row.stddev_time_ms, 3),
                cell(row.mean_comparisons, 1),
                cell(row.mean_swaps, 1)
            )
            .ok();
        }
    }

    #[allow(clippy::cast_precision_loss)]
    fn write_scenario(output: &mut String, summary: &ScenarioSummary) {
        let sizes: Vec<String> = summary.sizes.iter().map(u64::to_string).collect();
        writeln!(output).ok();
        writeln!(output, "Cenário: {}", summary.scenario.to_uppercase()).ok();
        writeln!(output, "  Tamanhos analisados: {}", sizes.join(", ")).ok();
        writeln!(
            output,
            "  Tempo para {} elementos: {} ms",
            with_thousands(summary.largest_size as f64),
            cell(summary.mean_time_ms, 2)
        )
        .ok();
        writeln!(
            output,
            "  Comparações por elemento: {}",
            cell(summary.comparisons_per_element, 1)
        )
        .ok();
        writeln!(
            output,
            "  Trocas por elemento: {}",
            cell(summary.swaps_per_element, 1)
        )
        .ok();
        if let Some(alpha) = summary.complexity_exponent {
            writeln!(output, "  Expoente de complexidade (α): {alpha:.2}").ok();
        }
    }
}

impl StatsFormatter for StatsTextFormatter {
    fn format(&self, report: &StatsReport) -> Result<String> {
        let mut output = String::new();

        writeln!(output, "Source: {}", report.source.display()).ok();
        writeln!(
            output,
            "Rows: {} raw, {} summary; statistics {}",
            report.raw_rows, report.summary_rows, report.path
        )
        .ok();
        if report.dropped_rows > 0 || report.duplicate_rows > 0 {
            writeln!(
                output,
                "Excluded: {} without scenario or size, {} duplicated",
                report.dropped_rows, report.duplicate_rows
            )
            .ok();
        }
        writeln!(output).ok();

        Self::write_table(&mut output, &report.table);

        if !report.scenarios.is_empty() {
            writeln!(output).ok();
            writeln!(output, "Estatísticas por Cenário:").ok();
            writeln!(output, "{}", "-".repeat(60)).ok();
            let several = report.table.algorithms().len() > 1;
            let mut current: Option<&str> = None;
            for summary in &report.scenarios {
                if several && current != Some(summary.algorithm.as_str()) {
                    writeln!(output).ok();
                    writeln!(output, "Algoritmo: {}", summary.algorithm).ok();
                    current = Some(summary.algorithm.as_str());
                }
                Self::write_scenario(&mut output, summary);
            }
        }

        Ok(output)
    }
}

pub struct StatsJsonFormatter;

#[derive(Serialize)]
struct JsonStatsOutput<'a> {
    source: String,
    path: ReconcilePath,
    raw_rows: usize,
    summary_rows: usize,
    dropped_rows: usize,
    duplicate_rows: usize,
    rows: Vec<JsonRow<'a>>,
    scenarios: &'a [ScenarioSummary],
}

#[derive(Serialize)]
struct JsonRow<'a> {
    #[serde(flatten)]
    stats: &'a ScenarioStats,
    #[serde(flatten)]
    derived: DerivedMetrics,
}

impl StatsFormatter for StatsJsonFormatter {
    fn format(&self, report: &StatsReport) -> Result<String> {
        let output = JsonStatsOutput {
            source: report.source.display().to_string(),
            path: report.path,
            raw_rows: report.raw_rows,
            summary_rows: report.summary_rows,
            dropped_rows: report.dropped_rows,
            duplicate_rows: report.duplicate_rows,
            rows: report
                .table
                .rows()
                .iter()
                .map(|stats| JsonRow {
                    stats,
                    derived: DerivedMetrics::of(stats),
                })
                .collect(),
            scenarios: &report.scenarios,
        };
        Ok(serde_json::to_string_pretty(&output)?)
    }
}

#[cfg(test)]
#[path = "stats_tests.rs"]
mod tests;
