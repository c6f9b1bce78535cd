use indexmap::IndexMap;

use super::format::capitalize;
use super::style::ChartColor;

/// Scenario to color mapping of one algorithm.
///
/// Lookups are exact on the (trimmed) scenario name. Mapped scenarios get a
/// capitalized legend label; anything else keeps its raw name and the
/// fallback color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScenarioPalette {
    colors: IndexMap<String, ChartColor>,
    fallback: ChartColor,
}

impl ScenarioPalette {
    #[must_use]
    pub fn new(colors: IndexMap<String, ChartColor>, fallback: ChartColor) -> Self {
        Self { colors, fallback }
    }

    /// Parse a configured name-to-color table.
    ///
    /// # Errors
    /// Returns a message naming the scenario whose color is not recognised.
    pub fn from_names(
        names: &IndexMap<String, String>,
        fallback: ChartColor,
    ) -> Result<Self, String> {
        let colors = names
            .iter()
            .map(|(scenario, color)| {
                color
                    .parse::<ChartColor>()
                    .map(|c| (scenario.trim().to_string(), c))
                    .map_err(|e| format!("scenario '{scenario}': {e}"))
            })
            .collect::<Result<_, _>>()?;
        Ok(Self::new(colors, fallback))
    }

    /// Every scenario drawn in one color with raw labels.
    #[must_use]
    pub fn uniform(color: ChartColor) -> Self {
        Self::new(IndexMap::new(), color)
    }

    #[must_use]
    pub fn is_mapped(&self, scenario: &str) -> bool {
        self.colors.contains_key(scenario)
    }

    #[must_use]
    pub fn color(&self, scenario: &str) -> ChartColor {
        self.colors.get(scenario).copied().unwrap_or(self.fallback)
    }

    /// Legend label for a scenario.
    #[must_use]
    pub fn label(&self, scenario: &str) -> String {
        if self.is_mapped(scenario) {
            capitalize(scenario)
        } else {
            scenario.to_string()
        }
    }
}

#[cfg(test)]
#[path = "palette_tests.rs"]
mod tests;
