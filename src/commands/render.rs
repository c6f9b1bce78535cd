use std::fmt::Write;
use std::path::Path;

use crate::chart::{FigureWriter, PlottersWriter};
use crate::cli::{Cli, RenderArgs};
use crate::config::{Config, LoadResult};
use crate::pipeline::{AlgorithmJob, AlgorithmOutcome, BatchReport, InputSource, run_batch};
use crate::{EXIT_CONFIG_ERROR, EXIT_PARTIAL_FAILURE, EXIT_SUCCESS, Result, SortbenchError};

use super::context::{load_config, resolve_root};

#[must_use]
pub fn run_render(args: &RenderArgs, cli: &Cli) -> i32 {
    match run_render_impl(args, cli) {
        Ok(report) => {
            print!("{}", format_batch_report(&report, cli.quiet));
            if report.all_succeeded() {
                EXIT_SUCCESS
            } else {
                EXIT_PARTIAL_FAILURE
            }
        }
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

fn run_render_impl(args: &RenderArgs, cli: &Cli) -> Result<BatchReport> {
    let loaded = load_config(cli.config.as_deref(), cli.no_config)?;
    let cwd = std::env::current_dir()?;
    let mut writer = PlottersWriter::new(loaded.config.theme.clone(), args.format);
    render_with(args, &loaded, &cwd, &mut writer, cli.quiet)
}

/// Resolve the requested jobs and render them with `writer`.
///
/// # Errors
/// Returns an error when the selection does not match the configuration.
/// Per-algorithm failures are reported in the batch, not as errors.
pub fn render_with(
    args: &RenderArgs,
    loaded: &LoadResult,
    cwd: &Path,
    writer: &mut dyn FigureWriter,
    quiet: bool,
) -> Result<BatchReport> {
    let root = resolve_root(args.root.as_deref(), loaded, cwd);
    let jobs = select_jobs(&loaded.config, &root, args)?;
    tracing::debug!(root = %root.display(), jobs = jobs.len(), "starting render");
    Ok(run_batch(&jobs, &loaded.config.theme, writer, quiet))
}

/// Jobs for the requested algorithms, in request order.
///
/// No names (or `--all`) selects every configured algorithm in config order.
/// `--input` and `--output` apply only when exactly one algorithm is selected.
///
/// # Errors
/// Returns a config error for unknown names or misplaced overrides.
pub fn select_jobs(config: &Config, root: &Path, args: &RenderArgs) -> Result<Vec<AlgorithmJob>> {
    let mut slugs: Vec<&str> = Vec::new();
    if args.all || args.algorithms.is_empty() {
        slugs.extend(config.algorithms.keys().map(String::as_str));
    } else {
        for name in &args.algorithms {
            if !slugs.contains(&name.as_str()) {
                slugs.push(name);
            }
        }
    }

    let mut jobs = slugs
        .into_iter()
        .map(|slug| {
            config
                .algorithms
                .get(slug)
                .map(|algorithm| AlgorithmJob::from_config(config, root, slug, algorithm))
                .ok_or_else(|| {
                    let known: Vec<&str> = config.algorithms.keys().map(String::as_str).collect();
                    SortbenchError::Config(format!(
                        "Unknown algorithm '{slug}'. Configured: {}",
                        known.join(", ")
                    ))
                })
        })
        .collect::<Result<Vec<_>>>()?;

    if args.input.is_none() && args.output.is_none() {
        return Ok(jobs);
    }
    let selected = jobs.len();
    let [job] = jobs.as_mut_slice() else {
        return Err(SortbenchError::Config(format!(
            "--input and --output need exactly one algorithm, {selected} selected"
        )));
    };
    if let Some(input) = &args.input {
        job.input = InputSource::File(input.clone());
    }
    if let Some(output) = &args.output {
        job.output_dir.clone_from(output);
    }
    Ok(jobs)
}

/// One line per algorithm plus a totals line.
///
/// Quiet mode keeps only failures.
#[must_use]
pub fn format_batch_report(report: &BatchReport, quiet: bool) -> String {
    let mut output = String::new();
    for entry in &report.reports {
        match &entry.outcome {
            AlgorithmOutcome::Rendered {
                input,
                path,
                charts,
            } if !quiet => {
                let dir = charts
                    .first()
                    .and_then(|c| c.parent())
                    .map_or_else(String::new, |d| format!(" to {}", d.display()));
                writeln!(
                    output,
                    "{}: {} charts written{dir} (from {}, {path})",
                    entry.slug,
                    charts.len(),
                    input.display()
                )
                .ok();
            }
            AlgorithmOutcome::Skipped { reason } if !quiet => {
                writeln!(output, "{}: skipped, {reason}", entry.slug).ok();
            }
            AlgorithmOutcome::Failed { error } => {
                writeln!(output, "{}: failed, {error}", entry.slug).ok();
            }
            _ => {}
        }
    }
    if !quiet {
        writeln!(
            output,
            "\nRendered {}, skipped {}, failed {} ({} charts)",
            report.rendered(),
            report.skipped(),
            report.failed(),
            report.chart_count()
        )
        .ok();
    }
    output
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod tests;
