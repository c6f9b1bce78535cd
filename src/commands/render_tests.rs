use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

use super::*;
use crate::chart::{Figure, ImageFormat};
use crate::stats::ReconcilePath;

#[derive(Default)]
struct RecordingWriter {
    paths: Vec<PathBuf>,
}

impl FigureWriter for RecordingWriter {
    fn format(&self) -> ImageFormat {
        ImageFormat::Svg
    }

    fn write(&mut self, _figure: &Figure, path: &Path) -> Result<()> {
        self.paths.push(path.to_path_buf());
        Ok(())
    }
}

fn args(algorithms: &[&str]) -> RenderArgs {
    RenderArgs {
        algorithms: algorithms.iter().map(ToString::to_string).collect(),
        all: false,
        root: None,
        input: None,
        output: None,
        format: ImageFormat::Svg,
    }
}

fn defaults() -> LoadResult {
    LoadResult {
        config: Config::default(),
        source: None,
    }
}

#[test]
fn no_names_selects_every_configured_algorithm() {
    let jobs = select_jobs(&Config::default(), Path::new("/p"), &args(&[])).unwrap();
    let slugs: Vec<_> = jobs.iter().map(|j| j.slug.as_str()).collect();
    assert_eq!(slugs, vec!["shellsort", "cyclesort"]);
}

#[test]
fn named_algorithms_keep_request_order_without_duplicates() {
    let jobs = select_jobs(
        &Config::default(),
        Path::new("/p"),
        &args(&["cyclesort", "shellsort", "cyclesort"]),
    )
    .unwrap();
    let slugs: Vec<_> = jobs.iter().map(|j| j.slug.as_str()).collect();
    assert_eq!(slugs, vec!["cyclesort", "shellsort"]);
}

#[test]
fn unknown_algorithm_is_a_config_error() {
    let err = select_jobs(&Config::default(), Path::new("/p"), &args(&["bogosort"])).unwrap_err();
    assert!(matches!(err, SortbenchError::Config(_)));
    assert!(err.to_string().contains("bogosort"));
    assert!(err.to_string().contains("shellsort, cyclesort"));
}

#[test]
fn overrides_apply_to_a_single_algorithm() {
    let mut request = args(&["shellsort"]);
    request.input = Some(PathBuf::from("run.csv"));
    request.output = Some(PathBuf::from("charts"));

    let jobs = select_jobs(&Config::default(), Path::new("/p"), &request).unwrap();
    assert_eq!(jobs[0].input, InputSource::File(PathBuf::from("run.csv")));
    assert_eq!(jobs[0].output_dir, PathBuf::from("charts"));
}

#[test]
fn overrides_with_several_algorithms_are_rejected() {
    let mut request = args(&[]);
    request.input = Some(PathBuf::from("run.csv"));
    let err = select_jobs(&Config::default(), Path::new("/p"), &request).unwrap_err();
    assert!(err.to_string().contains("exactly one algorithm, 2 selected"));
}

#[test]
fn render_without_data_skips_everything() {
    let dir = TempDir::new().unwrap();
    let mut writer = RecordingWriter::default();

    let report = render_with(&args(&[]), &defaults(), dir.path(), &mut writer, true).unwrap();

    assert_eq!(report.skipped(), 2);
    assert!(report.all_succeeded());
    assert!(writer.paths.is_empty());
}

#[test]
fn render_writes_into_configured_tree() {
    let dir = TempDir::new().unwrap();
    let input_dir = dir.path().join("results/files/shellSort");
    fs::create_dir_all(&input_dir).unwrap();
    fs::write(
        input_dir.join("bench.csv"),
        "algoritmo;cenario;tamanho;repeticao;tempo_ms;comparacoes;trocas\n\
         shellsort;crescente;100;1;5.0;300;50\n\
         shellsort;crescente;1000;1;60.0;4500;700\n",
    )
    .unwrap();
    let mut writer = RecordingWriter::default();

    let report =
        render_with(&args(&["shellsort"]), &defaults(), dir.path(), &mut writer, true).unwrap();

    assert_eq!(report.rendered(), 1);
    assert_eq!(writer.paths.len(), 9);
    let out_dir = dir.path().join("results/graphics/shellSort");
    assert!(out_dir.is_dir());
    assert!(writer.paths.contains(&out_dir.join("shellsort_crescente_individual.svg")));
    assert!(writer.paths.contains(&out_dir.join("shellsort_resumo_geral.svg")));
}

fn sample_report() -> BatchReport {
    BatchReport {
        reports: vec![
            crate::pipeline::AlgorithmReport {
                slug: "shellsort".to_string(),
                outcome: AlgorithmOutcome::Rendered {
                    input: PathBuf::from("in/run.csv"),
                    path: ReconcilePath::ComputedFromRaw,
                    charts: vec![PathBuf::from("out/a.png"), PathBuf::from("out/b.png")],
                },
            },
            crate::pipeline::AlgorithmReport {
                slug: "cyclesort".to_string(),
                outcome: AlgorithmOutcome::Skipped {
                    reason: "no CSV file in in2".to_string(),
                },
            },
            crate::pipeline::AlgorithmReport {
                slug: "heapsort".to_string(),
                outcome: AlgorithmOutcome::Failed {
                    error: SortbenchError::NoStatistics("x".to_string()),
                },
            },
        ],
    }
}

#[test]
fn report_lists_every_algorithm() {
    let text = format_batch_report(&sample_report(), false);
    assert!(text.contains("shellsort: 2 charts written to out (from in/run.csv, computed from raw trials)"));
    assert!(text.contains("cyclesort: skipped, no CSV file in in2"));
    assert!(text.contains("heapsort: failed, No statistics available for x"));
    assert!(text.contains("Rendered 1, skipped 1, failed 1 (2 charts)"));
}

#[test]
fn quiet_report_keeps_failures_only() {
    let text = format_batch_report(&sample_report(), true);
    assert_eq!(text, "heapsort: failed, No statistics available for x\n");
}
