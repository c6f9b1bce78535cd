//! Configuration semantic validation.

use crate::chart::ChartColor;
use crate::config::Config;
use crate::{Result, SortbenchError};

/// Validates semantic correctness of a configuration.
///
/// # Errors
/// Returns an error if the theme has zero sizes, an algorithm has an empty
/// name or slug, or a scenario color is not recognised.
pub fn validate_config_semantics(config: &Config) -> Result<()> {
    config.theme.validate().map_err(SortbenchError::Config)?;
    validate_algorithms(config)
}

fn validate_algorithms(config: &Config) -> Result<()> {
    if config.algorithms.is_empty() {
        return Err(SortbenchError::Config(
            "at least one algorithm must be configured".to_string(),
        ));
    }

    for (slug, algorithm) in &config.algorithms {
        if slug.trim().is_empty() {
            return Err(SortbenchError::Config(
                "algorithm keys must not be empty".to_string(),
            ));
        }
        if algorithm.name.trim().is_empty() {
            return Err(SortbenchError::Config(format!(
                "algorithms.{slug}.name must not be empty"
            )));
        }
        for (scenario, color) in &algorithm.scenario_colors {
            if let Err(e) = color.parse::<ChartColor>() {
                return Err(SortbenchError::Config(format!(
                    "algorithms.{slug}.scenario_colors.{scenario}: {e}"
                )));
            }
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "validation_tests.rs"]
mod tests;
