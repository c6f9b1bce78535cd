//! Per-algorithm orchestration: find the input, reconcile it, and write the
//! chart battery.

use std::fs;
use std::path::{Path, PathBuf};

use crate::chart::{ChartSubject, ChartTheme, FigureWriter, ScenarioPalette, plan_battery};
use crate::config::{AlgorithmConfig, Config};
use crate::error::{Result, SortbenchError};
use crate::measurement::{partition, read_table};
use crate::output::ChartProgress;
use crate::stats::{ReconcilePath, StatsTable, reconcile};

use super::discovery::newest_csv;

/// Where an algorithm's measurements come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// Use the newest CSV directly inside this directory.
    Directory(PathBuf),
    /// Use this file as is.
    File(PathBuf),
}

/// Everything needed to render one algorithm.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlgorithmJob {
    pub slug: String,
    pub algorithm: AlgorithmConfig,
    pub input: InputSource,
    pub output_dir: PathBuf,
}

impl AlgorithmJob {
    /// Job for a configured algorithm, with directories resolved under `root`.
    #[must_use]
    pub fn from_config(config: &Config, root: &Path, slug: &str, algorithm: &AlgorithmConfig) -> Self {
        Self {
            slug: slug.to_string(),
            algorithm: algorithm.clone(),
            input: InputSource::Directory(config.paths.input_dir(root, slug, algorithm)),
            output_dir: config.paths.output_dir(root, slug, algorithm),
        }
    }
}

/// Result of rendering one algorithm.
#[derive(Debug)]
pub enum AlgorithmOutcome {
    Rendered {
        input: PathBuf,
        path: ReconcilePath,
        charts: Vec<PathBuf>,
    },
    /// Nothing to render; not an error.
    Skipped { reason: String },
    Failed { error: SortbenchError },
}

#[derive(Debug)]
pub struct AlgorithmReport {
    pub slug: String,
    pub outcome: AlgorithmOutcome,
}

/// Outcomes of a batch run, in job order.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub reports: Vec<AlgorithmReport>,
}

impl BatchReport {
    #[must_use]
    pub fn rendered(&self) -> usize {
        self.count(|o| matches!(o, AlgorithmOutcome::Rendered { .. }))
    }

    #[must_use]
    pub fn skipped(&self) -> usize {
        self.count(|o| matches!(o, AlgorithmOutcome::Skipped { .. }))
    }

    #[must_use]
    pub fn failed(&self) -> usize {
        self.count(|o| matches!(o, AlgorithmOutcome::Failed { .. }))
    }

    /// Total charts written across all algorithms.
    #[must_use]
    pub fn chart_count(&self) -> usize {
        self.reports
            .iter()
            .map(|r| match &r.outcome {
                AlgorithmOutcome::Rendered { charts, .. } => charts.len(),
                _ => 0,
            })
            .sum()
    }

    /// True when no algorithm failed. Skipped algorithms do not count as failures.
    #[must_use]
    pub fn all_succeeded(&self) -> bool {
        self.failed() == 0
    }

    fn count(&self, pred: impl Fn(&AlgorithmOutcome) -> bool) -> usize {
        self.reports.iter().filter(|r| pred(&r.outcome)).count()
    }
}

/// Render every job in order, continuing past failures.
pub fn run_batch(
    jobs: &[AlgorithmJob],
    theme: &ChartTheme,
    writer: &mut dyn FigureWriter,
    quiet: bool,
) -> BatchReport {
    let reports = jobs
        .iter()
        .map(|job| AlgorithmReport {
            slug: job.slug.clone(),
            outcome: run_algorithm(job, theme, writer, quiet),
        })
        .collect();
    BatchReport { reports }
}

/// Render the chart battery of one algorithm.
///
/// Missing input and empty statistics are reported as skipped. Any other
/// error is logged and returned as a failure so a batch can carry on.
pub fn run_algorithm(
    job: &AlgorithmJob,
    theme: &ChartTheme,
    writer: &mut dyn FigureWriter,
    quiet: bool,
) -> AlgorithmOutcome {
    let input = match resolve_input(&job.input) {
        Ok(input) => input,
        Err(reason) => {
            tracing::warn!(algorithm = %job.slug, "{reason}");
            return AlgorithmOutcome::Skipped { reason };
        }
    };
    tracing::info!(algorithm = %job.slug, file = %input.display(), "selected measurement file");

    match render_from(job, &input, theme, writer, quiet) {
        Ok((path, charts)) => {
            tracing::info!(
                algorithm = %job.slug,
                charts = charts.len(),
                dir = %job.output_dir.display(),
                "charts written"
            );
            AlgorithmOutcome::Rendered { input, path, charts }
        }
        Err(error) if error.is_empty_result() => {
            tracing::warn!(algorithm = %job.slug, "{error}");
            AlgorithmOutcome::Skipped {
                reason: error.to_string(),
            }
        }
        Err(error) => {
            tracing::error!(algorithm = %job.slug, error = %error, "rendering failed");
            AlgorithmOutcome::Failed { error }
        }
    }
}

fn resolve_input(source: &InputSource) -> std::result::Result<PathBuf, String> {
    match source {
        InputSource::File(path) if path.is_file() => Ok(path.clone()),
        InputSource::File(path) => Err(format!("input file {} does not exist", path.display())),
        InputSource::Directory(dir) if !dir.is_dir() => Err(format!(
            "input directory {} does not exist",
            dir.display()
        )),
        InputSource::Directory(dir) => {
            newest_csv(dir).ok_or_else(|| format!("no CSV file in {}", dir.display()))
        }
    }
}

fn render_from(
    job: &AlgorithmJob,
    input: &Path,
    theme: &ChartTheme,
    writer: &mut dyn FigureWriter,
    quiet: bool,
) -> Result<(ReconcilePath, Vec<PathBuf>)> {
    let rows = read_table(input)?;
    let set = partition(&rows);
    tracing::info!(
        rows = rows.len(),
        raw = set.raw().len(),
        summaries = set.summary_count(),
        "partitioned measurement rows"
    );
    let reconciled = reconcile(set)?;
    let table = select_algorithm(reconciled.table, &job.slug, &job.algorithm.name)?;

    let palette = ScenarioPalette::from_names(&job.algorithm.scenario_colors, theme.fallback_color)
        .map_err(|e| SortbenchError::Config(format!("algorithms.{}.scenario_colors: {e}", job.slug)))?;
    let subject = ChartSubject {
        slug: &job.slug,
        display_name: &job.algorithm.name,
        palette: &palette,
    };
    let artifacts = plan_battery(&table, &subject, theme);

    fs::create_dir_all(&job.output_dir)?;

    let progress = ChartProgress::new(artifacts.len() as u64, &job.algorithm.name, quiet);
    let format = writer.format();
    let mut charts = Vec::with_capacity(artifacts.len());
    for artifact in &artifacts {
        let path = job.output_dir.join(artifact.file_name(format));
        if let Err(e) = writer.write(&artifact.figure, &path) {
            progress.finish();
            discard_charts(&charts);
            return Err(e);
        }
        tracing::debug!(kind = %artifact.kind, chart = %path.display(), "chart written");
        progress.inc();
        charts.push(path);
    }
    progress.finish();

    Ok((reconciled.path, charts))
}

/// Remove the charts of a battery that failed partway, so an algorithm's
/// output is either complete or absent.
fn discard_charts(charts: &[PathBuf]) {
    for chart in charts {
        if let Err(e) = fs::remove_file(chart) {
            tracing::warn!(chart = %chart.display(), error = %e, "could not remove partial chart");
        }
    }
}

/// Lowercase alphanumerics only, so "Shell Sort", "shell_sort" and
/// "shellsort" compare equal.
fn normalize(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Restrict a table to the job's algorithm.
///
/// A table naming a single algorithm is used whole. With several, the one
/// whose name matches the slug or display name is kept.
fn select_algorithm(table: StatsTable, slug: &str, display_name: &str) -> Result<StatsTable> {
    let algorithms: Vec<String> = table.algorithms().into_iter().map(str::to_string).collect();
    if algorithms.len() <= 1 {
        return Ok(table);
    }
    let wanted = [normalize(slug), normalize(display_name)];
    match algorithms.iter().find(|a| wanted.contains(&normalize(a))) {
        Some(algorithm) => {
            tracing::debug!(%algorithm, "selected algorithm from multi-algorithm table");
            Ok(table.for_algorithm(algorithm))
        }
        None => Err(SortbenchError::NoStatistics(format!(
            "algorithm '{display_name}' (table holds {})",
            algorithms.join(", ")
        ))),
    }
}

#[cfg(test)]
#[path = "coordinator_tests.rs"]
mod tests;
