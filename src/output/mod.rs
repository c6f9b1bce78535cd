mod progress;
mod stats;

pub use progress::ChartProgress;
pub use stats::{StatsFormatter, StatsJsonFormatter, StatsReport, StatsTextFormatter};

/// Format of the `stats` report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    /// Formatter producing this format.
    #[must_use]
    pub fn formatter(self) -> Box<dyn StatsFormatter> {
        match self {
            Self::Text => Box::new(StatsTextFormatter),
            Self::Json => Box::new(StatsJsonFormatter),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!("Unknown output format: {s}")),
        }
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
