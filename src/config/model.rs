use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::chart::ChartTheme;

/// Supported config version.
pub const CONFIG_VERSION: &str = "1";

/// Root configuration.
///
/// Every section has defaults. An `[algorithms]` table in a config file
/// replaces the built-in algorithm list as a whole.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    #[serde(default)]
    pub paths: PathsConfig,

    #[serde(default)]
    pub theme: ChartTheme,

    /// Algorithms keyed by slug, the prefix of every chart file name.
    #[serde(default = "default_algorithms")]
    pub algorithms: IndexMap<String, AlgorithmConfig>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: Some(CONFIG_VERSION.to_string()),
            paths: PathsConfig::default(),
            theme: ChartTheme::default(),
            algorithms: default_algorithms(),
        }
    }
}

/// Where measurement files are read from and charts are written to.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PathsConfig {
    /// Project root the other two directories are relative to.
    #[serde(default = "default_results_root")]
    pub results_root: PathBuf,

    /// Parent of the per-algorithm input directories.
    #[serde(default = "default_files_dir")]
    pub files_dir: PathBuf,

    /// Parent of the per-algorithm chart directories.
    #[serde(default = "default_graphics_dir")]
    pub graphics_dir: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            results_root: default_results_root(),
            files_dir: default_files_dir(),
            graphics_dir: default_graphics_dir(),
        }
    }
}

impl PathsConfig {
    /// Directory searched for the newest measurement file of an algorithm.
    #[must_use]
    pub fn input_dir(&self, root: &Path, slug: &str, algorithm: &AlgorithmConfig) -> PathBuf {
        root.join(&self.files_dir).join(algorithm.input_key(slug))
    }

    /// Directory the charts of an algorithm are written to.
    #[must_use]
    pub fn output_dir(&self, root: &Path, slug: &str, algorithm: &AlgorithmConfig) -> PathBuf {
        root.join(&self.graphics_dir).join(algorithm.output_key(slug))
    }
}

/// One benchmarked algorithm.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AlgorithmConfig {
    /// Display name used in chart titles.
    pub name: String,

    /// Input subdirectory under `paths.files_dir`. Defaults to the slug.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_dir: Option<String>,

    /// Output subdirectory under `paths.graphics_dir`. Defaults to the slug.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_dir: Option<String>,

    /// Scenario name to color (`steelblue`, `#4682b4`, ...).
    #[serde(default)]
    pub scenario_colors: IndexMap<String, String>,
}

impl AlgorithmConfig {
    #[must_use]
    pub fn input_key<'a>(&'a self, slug: &'a str) -> &'a str {
        self.input_dir.as_deref().unwrap_or(slug)
    }

    #[must_use]
    pub fn output_key<'a>(&'a self, slug: &'a str) -> &'a str {
        self.output_dir.as_deref().unwrap_or(slug)
    }
}

fn default_results_root() -> PathBuf {
    PathBuf::from(".")
}

fn default_files_dir() -> PathBuf {
    PathBuf::from("results/files")
}

fn default_graphics_dir() -> PathBuf {
    PathBuf::from("results/graphics")
}

fn algorithm(name: &str, dir: &str, colors: [(&str, &str); 3]) -> AlgorithmConfig {
    AlgorithmConfig {
        name: name.to_string(),
        input_dir: Some(dir.to_string()),
        output_dir: Some(dir.to_string()),
        scenario_colors: colors
            .into_iter()
            .map(|(scenario, color)| (scenario.to_string(), color.to_string()))
            .collect(),
    }
}

fn default_algorithms() -> IndexMap<String, AlgorithmConfig> {
    IndexMap::from([
        (
            "shellsort".to_string(),
            algorithm(
                "Shell Sort",
                "shellSort",
                [
                    ("crescente", "steelblue"),
                    ("decrescente", "darkorange"),
                    ("aleatorio", "forestgreen"),
                ],
            ),
        ),
        (
            "cyclesort".to_string(),
            algorithm(
                "Cycle Sort",
                "cycleSort",
                [
                    ("crescente", "mediumpurple"),
                    ("decrescente", "crimson"),
                    ("aleatorio", "darkcyan"),
                ],
            ),
        ),
    ])
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
