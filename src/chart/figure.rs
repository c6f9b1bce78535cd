//! Backend-independent figure description.
//!
//! A [`Figure`] is plain data: the battery builds it, a [`FigureWriter`]
//! turns it into an image. Keeping the two apart lets the battery be tested
//! without fonts or a drawing backend.
//!
//! [`FigureWriter`]: super::FigureWriter

use std::ops::Range;

use super::style::{ChartColor, TextAnchor};

/// Axis scaling of a panel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AxisScale {
    #[default]
    Linear,
    /// Both axes logarithmic. Non-positive values cannot be placed.
    LogLog,
}

impl AxisScale {
    /// Whether a point can be placed on this scale.
    #[must_use]
    pub fn accepts(self, (x, y): (f64, f64)) -> bool {
        match self {
            Self::Linear => x.is_finite() && y.is_finite(),
            Self::LogLog => x.is_finite() && y.is_finite() && x > 0.0 && y > 0.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    Circle,
    Square,
    Triangle,
    Diamond,
    Cross,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineDash {
    Dashed,
    Dotted,
}

/// One line of a panel.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub label: String,
    pub color: ChartColor,
    pub marker: Marker,
    /// Points in ascending x order. A missing y breaks the line.
    pub points: Vec<(f64, Option<f64>)>,
}

impl Series {
    /// Contiguous runs of plottable points.
    ///
    /// Missing values and points the scale cannot place split the line, so a
    /// gap never gets bridged by a straight segment.
    #[must_use]
    pub fn segments(&self, scale: AxisScale) -> Vec<Vec<(f64, f64)>> {
        let mut segments = Vec::new();
        let mut current = Vec::new();
        for &(x, y) in &self.points {
            match y.map(|y| (x, y)).filter(|p| scale.accepts(*p)) {
                Some(point) => current.push(point),
                None if !current.is_empty() => segments.push(std::mem::take(&mut current)),
                None => {}
            }
        }
        if !current.is_empty() {
            segments.push(current);
        }
        segments
    }

    /// Number of points with a value.
    #[must_use]
    pub fn defined_points(&self) -> usize {
        self.points.iter().filter(|(_, y)| y.is_some()).count()
    }
}

/// A reference complexity curve drawn in black behind the data.
#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceCurve {
    pub label: String,
    pub dash: LineDash,
    pub points: Vec<(f64, f64)>,
}

/// Text attached to a data point.
#[derive(Debug, Clone, PartialEq)]
pub struct Annotation {
    pub x: f64,
    pub y: f64,
    pub text: String,
    pub anchor: TextAnchor,
    /// Pixel offset from the point; y grows downward. Text shifted upward
    /// sits above the point, otherwise it is centred vertically on it.
    pub offset: (i32, i32),
    /// Draw the text on a translucent white box.
    pub boxed: bool,
}

/// Data ranges of a panel.
#[derive(Debug, Clone, PartialEq)]
pub struct Bounds {
    pub x: Range<f64>,
    pub y: Range<f64>,
}

/// One set of axes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Panel {
    pub title: Option<String>,
    pub x_label: String,
    pub y_label: String,
    pub scale: AxisScale,
    pub series: Vec<Series>,
    pub references: Vec<ReferenceCurve>,
    pub annotations: Vec<Annotation>,
    pub show_legend: bool,
}

impl Panel {
    /// Every point the writer will place, across series, references and
    /// annotations.
    fn placed_points(&self) -> Vec<(f64, f64)> {
        let series = self
            .series
            .iter()
            .flat_map(|s| s.segments(self.scale))
            .flatten();
        let references = self.references.iter().flat_map(|r| r.points.iter().copied());
        let annotations = self.annotations.iter().map(|a| (a.x, a.y));
        series
            .chain(references)
            .chain(annotations)
            .filter(|p| self.scale.accepts(*p))
            .collect()
    }

    /// Axis ranges with some padding around the data.
    ///
    /// A panel with nothing to place gets a unit range so its axes can still
    /// be drawn.
    #[must_use]
    pub fn bounds(&self) -> Bounds {
        let points = self.placed_points();
        let xs = points.iter().map(|p| p.0);
        let ys = points.iter().map(|p| p.1);
        let head_room = !self.annotations.is_empty();
        match self.scale {
            AxisScale::Linear => Bounds {
                x: linear_range(xs, false),
                y: linear_range(ys, head_room),
            },
            AxisScale::LogLog => Bounds {
                x: log_range(xs, false),
                y: log_range(ys, head_room),
            },
        }
    }
}

fn min_max(values: impl Iterator<Item = f64>) -> Option<(f64, f64)> {
    values.fold(None, |acc, v| match acc {
        None => Some((v, v)),
        Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
    })
}

fn linear_range(values: impl Iterator<Item = f64>, head_room: bool) -> Range<f64> {
    let Some((lo, hi)) = min_max(values) else {
        return 0.0..1.0;
    };
    let span = if hi > lo {
        hi - lo
    } else if lo == 0.0 {
        1.0
    } else {
        lo.abs() * 0.1
    };
    let top = if head_room { 0.15 } else { 0.05 };
    (lo - span * 0.05)..(hi + span * top)
}

fn log_range(values: impl Iterator<Item = f64>, head_room: bool) -> Range<f64> {
    let Some((lo, hi)) = min_max(values) else {
        return 1.0..10.0;
    };
    let top = if head_room { 2.0 } else { 1.5 };
    (lo / 1.5)..(hi * top)
}

/// A complete image: optional title over a grid of panels.
#[derive(Debug, Clone, PartialEq)]
pub struct Figure {
    pub title: Option<String>,
    /// Pixel width and height.
    pub size: (u32, u32),
    /// Rows and columns of the panel grid.
    pub grid: (usize, usize),
    /// Panels in row-major order.
    pub panels: Vec<Panel>,
}

impl Figure {
    /// A figure holding a single panel.
    #[must_use]
    pub fn single(title: impl Into<String>, size: (u32, u32), panel: Panel) -> Self {
        Self {
            title: Some(title.into()),
            size,
            grid: (1, 1),
            panels: vec![panel],
        }
    }
}

#[cfg(test)]
#[path = "figure_tests.rs"]
mod tests;
