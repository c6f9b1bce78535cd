#![allow(dead_code)]

use std::fmt::Write;
use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the sortbench binary.
#[macro_export]
macro_rules! sortbench {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("sortbench"))
    };
}

pub const HEADER: &str = "algoritmo;cenario;tamanho;repeticao;tempo_ms;comparacoes;trocas";

/// Creates a temporary directory with test fixtures for integration tests.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    /// Creates a new test fixture with an empty temp directory.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Creates a file with the given content in the temp directory.
    pub fn create_file(&self, relative_path: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
        path
    }

    /// Creates a directory in the temp directory.
    pub fn create_dir(&self, relative_path: &str) {
        let path = self.dir.path().join(relative_path);
        fs::create_dir_all(&path).expect("Failed to create directory");
    }

    /// Returns the path to the temp directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Creates a local `.sortbench.toml`.
    pub fn create_config(&self, content: &str) {
        self.create_file(".sortbench.toml", content);
    }

    /// Writes a measurement table with the standard header.
    pub fn create_measurements(&self, relative_path: &str, rows: &[&str]) -> PathBuf {
        let mut content = String::new();
        let _ = writeln!(content, "{HEADER}");
        for row in rows {
            let _ = writeln!(content, "{row}");
        }
        self.create_file(relative_path, &content)
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// Raw trials for two scenarios and two sizes.
pub const RAW_ROWS: &[&str] = &[
    "shellsort;crescente;100;1;5.0;300;50",
    "shellsort;crescente;100;2;7.0;320;60",
    "shellsort;crescente;1000;1;60.0;4500;700",
    "shellsort;aleatorio;100;1;10.0;900;400",
    "shellsort;aleatorio;1000;1;150.0;14000;6000",
];

/// Raw trials followed by a precomputed summary row.
pub const PRECOMPUTED_ROWS: &[&str] = &[
    "cyclesort;decrescente;1000;1;11.0;4400;0",
    "cyclesort;decrescente;1000;12.5;4500;999;0",
];

/// A single algorithm with a custom directory layout.
pub const HEAPSORT_CONFIG: &str = r#"
version = "1"

[paths]
files_dir = "data"
graphics_dir = "charts"

[algorithms.heapsort]
name = "Heap Sort"

[algorithms.heapsort.scenario_colors]
aleatorio = "teal"
"#;
