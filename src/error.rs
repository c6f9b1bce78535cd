use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SortbenchError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed measurement table {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("Measurement table {path} is missing required column '{column}'")]
    MissingColumn { path: PathBuf, column: String },

    #[error("No statistics available for {0}")]
    NoStatistics(String),

    #[error("Failed to render chart {path}: {message}")]
    Render { path: PathBuf, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[from] serde_json::Error),
}

impl SortbenchError {
    /// Short category name used in error summaries.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::Config(_) => "Config",
            Self::FileRead { .. } => "FileRead",
            Self::Csv { .. } | Self::MissingColumn { .. } => "Input",
            Self::NoStatistics(_) => "NoStatistics",
            Self::Render { .. } => "Render",
            Self::Io(_) => "IO",
            Self::TomlParse(_) => "TOML",
            Self::JsonSerialize(_) => "JSON",
        }
    }

    /// True when the error means "nothing to do" rather than a failure.
    #[must_use]
    pub const fn is_empty_result(&self) -> bool {
        matches!(self, Self::NoStatistics(_))
    }
}

pub type Result<T> = std::result::Result<T, SortbenchError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
