//! The parametrized overlay chart: one line per scenario of a metric against
//! array size.

use crate::stats::{Metric, ScenarioGroup, ScenarioStats, complexity_exponent};

use super::figure::{Annotation, AxisScale, LineDash, Marker, Panel, ReferenceCurve, Series};
use super::format::{fixed, with_thousands};
use super::palette::ScenarioPalette;
use super::style::TextAnchor;

pub const SIZE_LABEL: &str = "Tamanho do Array";

/// Reference complexity curves for log-log panels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reference {
    /// `n * log10(n)`, dashed.
    NLogN,
    /// `n^1.5`, dotted.
    NPow15,
}

impl Reference {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::NLogN => "O(n log n)",
            Self::NPow15 => "O(n^1.5)",
        }
    }

    #[allow(clippy::cast_precision_loss)]
    fn eval(self, n: u64) -> f64 {
        let n = n as f64;
        match self {
            Self::NLogN => n * n.log10(),
            Self::NPow15 => n.powf(1.5),
        }
    }

    /// The curve over the given sorted distinct sizes.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn curve(self, sizes: &[u64]) -> ReferenceCurve {
        ReferenceCurve {
            label: self.label().to_string(),
            dash: match self {
                Self::NLogN => LineDash::Dashed,
                Self::NPow15 => LineDash::Dotted,
            },
            points: sizes.iter().map(|&n| (n as f64, self.eval(n))).collect(),
        }
    }
}

/// Text attached to the lines of an overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Annotator {
    /// Every point labelled with its value.
    EveryPointValue { decimals: usize },
    /// The largest-size point labelled with its value, thousands separated.
    LastPointValue,
    /// `α ≈ x.xx` next to the last positive point of each line.
    ComplexityExponent,
}

impl Annotator {
    fn annotate(self, group: &ScenarioGroup<'_>, metric: Metric) -> Vec<Annotation> {
        let value_at = |row: &ScenarioStats| metric.value(row).map(|y| (size_of(row), y));
        match self {
            Self::EveryPointValue { decimals } => group
                .rows
                .iter()
                .filter_map(|row| value_at(row))
                .map(|(x, y)| Annotation {
                    x,
                    y,
                    text: fixed(y, decimals),
                    anchor: TextAnchor::Middle,
                    offset: (0, -6),
                    boxed: false,
                })
                .collect(),
            Self::LastPointValue => group
                .last()
                .and_then(value_at)
                .map(|(x, y)| Annotation {
                    x,
                    y,
                    text: with_thousands(y),
                    anchor: TextAnchor::Middle,
                    offset: (0, -10),
                    boxed: true,
                })
                .into_iter()
                .collect(),
            Self::ComplexityExponent => {
                let Some(alpha) = complexity_exponent(group.rows.iter().copied()) else {
                    return Vec::new();
                };
                group
                    .rows
                    .iter()
                    .rev()
                    .filter_map(|row| value_at(row))
                    .find(|&(_, y)| y > 0.0)
                    .map(|(x, y)| Annotation {
                        x,
                        y,
                        text: format!("α ≈ {}", fixed(alpha, 2)),
                        anchor: TextAnchor::Start,
                        offset: (10, 0),
                        boxed: true,
                    })
                    .into_iter()
                    .collect()
            }
        }
    }
}

#[allow(clippy::cast_precision_loss)]
fn size_of(row: &ScenarioStats) -> f64 {
    row.size as f64
}

/// One overlay chart definition.
///
/// Every comparative chart of the battery is an instance of this template;
/// they differ only in metric, labels, marker, scale and decorations.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayTemplate {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub metric: Metric,
    pub marker: Marker,
    pub scale: AxisScale,
    pub references: Vec<Reference>,
    pub annotator: Option<Annotator>,
    pub show_legend: bool,
}

impl OverlayTemplate {
    /// Linear overlay with a legend and no decorations.
    #[must_use]
    pub fn new(metric: Metric, title: impl Into<String>, y_label: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            x_label: SIZE_LABEL.to_string(),
            y_label: y_label.into(),
            metric,
            marker: Marker::Circle,
            scale: AxisScale::Linear,
            references: Vec::new(),
            annotator: None,
            show_legend: true,
        }
    }

    #[must_use]
    pub fn marker(mut self, marker: Marker) -> Self {
        self.marker = marker;
        self
    }

    #[must_use]
    pub fn x_label(mut self, label: impl Into<String>) -> Self {
        self.x_label = label.into();
        self
    }

    #[must_use]
    pub fn log_log(mut self) -> Self {
        self.scale = AxisScale::LogLog;
        self
    }

    #[must_use]
    pub fn reference(mut self, reference: Reference) -> Self {
        self.references.push(reference);
        self
    }

    #[must_use]
    pub fn annotate(mut self, annotator: Annotator) -> Self {
        self.annotator = Some(annotator);
        self
    }

    #[must_use]
    pub fn without_legend(mut self) -> Self {
        self.show_legend = false;
        self
    }

    /// Build the panel for the given scenario groups.
    ///
    /// `sizes` are the sorted distinct sizes the reference curves span.
    /// Groups are drawn in the order given; each group's rows must already be
    /// ascending by size.
    #[must_use]
    pub fn panel(
        &self,
        groups: &[ScenarioGroup<'_>],
        palette: &ScenarioPalette,
        sizes: &[u64],
    ) -> Panel {
        let series = groups
            .iter()
            .map(|group| Series {
                label: palette.label(group.scenario),
                color: palette.color(group.scenario),
                marker: self.marker,
                points: group
                    .rows
                    .iter()
                    .map(|row| (size_of(row), self.metric.value(row)))
                    .collect(),
            })
            .collect();

        let annotations = self
            .annotator
            .map(|annotator| {
                groups
                    .iter()
                    .flat_map(|group| annotator.annotate(group, self.metric))
                    .collect()
            })
            .unwrap_or_default();

        let references = if sizes.is_empty() {
            Vec::new()
        } else {
            self.references.iter().map(|r| r.curve(sizes)).collect()
        };

        Panel {
            title: None,
            x_label: self.x_label.clone(),
            y_label: self.y_label.clone(),
            scale: self.scale,
            series,
            references,
            annotations,
            show_legend: self.show_legend,
        }
    }

    /// Like [`panel`](Self::panel), captioned with the template title.
    #[must_use]
    pub fn captioned_panel(
        &self,
        groups: &[ScenarioGroup<'_>],
        palette: &ScenarioPalette,
        sizes: &[u64],
    ) -> Panel {
        Panel {
            title: Some(self.title.clone()),
            ..self.panel(groups, palette, sizes)
        }
    }
}

#[cfg(test)]
#[path = "template_tests.rs"]
mod tests;
