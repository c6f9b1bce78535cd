use serde::{Deserialize, Serialize};

use super::style::ChartColor;

/// Visual theme for every figure of a run.
///
/// Passed explicitly to the chart generator and the writer; there is no
/// process-wide style state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartTheme {
    pub font_family: String,
    pub title_font_size: u32,
    pub caption_font_size: u32,
    pub label_font_size: u32,
    pub annotation_font_size: u32,
    pub line_width: u32,
    pub marker_size: u32,
    pub grid: bool,
    pub background: ChartColor,
    /// Color of scenarios missing from an algorithm's palette.
    pub fallback_color: ChartColor,
    /// Colors of the six panels of a per-scenario figure, in panel order.
    pub panel_colors: Vec<ChartColor>,
    /// Pixel size of single-panel overlay charts.
    pub overlay_size: [u32; 2],
    /// Pixel size of the 2x3 per-scenario figure.
    pub individual_size: [u32; 2],
    /// Pixel size of the 2x2 summary figure.
    pub summary_size: [u32; 2],
}

impl Default for ChartTheme {
    fn default() -> Self {
        let named = |name: &str| ChartColor::named(name).unwrap_or_else(ChartColor::gray);
        Self {
            font_family: "sans-serif".to_string(),
            title_font_size: 30,
            caption_font_size: 22,
            label_font_size: 16,
            annotation_font_size: 14,
            line_width: 2,
            marker_size: 5,
            grid: true,
            background: ChartColor::white(),
            fallback_color: ChartColor::gray(),
            panel_colors: [
                "steelblue",
                "darkorange",
                "forestgreen",
                "firebrick",
                "rebeccapurple",
                "saddlebrown",
            ]
            .into_iter()
            .map(named)
            .collect(),
            overlay_size: [1200, 800],
            individual_size: [1800, 1000],
            summary_size: [1500, 1200],
        }
    }
}

impl ChartTheme {
    /// Color for the panel at `index`, cycling through `panel_colors`.
    #[must_use]
    pub fn panel_color(&self, index: usize) -> ChartColor {
        if self.panel_colors.is_empty() {
            return self.fallback_color;
        }
        self.panel_colors[index % self.panel_colors.len()]
    }

    /// Reject sizes that cannot produce an image.
    ///
    /// # Errors
    /// Returns a description of the first invalid field.
    pub fn validate(&self) -> Result<(), String> {
        for (name, [w, h]) in [
            ("overlay_size", self.overlay_size),
            ("individual_size", self.individual_size),
            ("summary_size", self.summary_size),
        ] {
            if w == 0 || h == 0 {
                return Err(format!("theme.{name} must be non-zero, got [{w}, {h}]"));
            }
        }
        if self.font_family.trim().is_empty() {
            return Err("theme.font_family must not be empty".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "theme_tests.rs"]
mod tests;
