//! Image writers for [`Figure`]s.

use std::error::Error;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use plotters::coord::Shift;
use plotters::coord::cartesian::Cartesian2d;
use plotters::coord::ranged1d::{Ranged, ValueFormatter};
use plotters::prelude::*;
use plotters::series::DashedLineSeries;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use crate::error::{Result, SortbenchError};

use super::figure::{Annotation, AxisScale, Figure, LineDash, Marker, Panel};
use super::style::{ChartColor, TextAnchor};
use super::theme::ChartTheme;

/// Image file format written by [`PlottersWriter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImageFormat {
    #[default]
    Png,
    Svg,
}

impl ImageFormat {
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Svg => "svg",
        }
    }
}

impl FromStr for ImageFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "png" => Ok(Self::Png),
            "svg" => Ok(Self::Svg),
            _ => Err(format!("Unknown image format: {s}")),
        }
    }
}

impl fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// Sink for rendered figures.
pub trait FigureWriter {
    /// Format of the files this writer produces.
    fn format(&self) -> ImageFormat;

    /// Write one figure to `path`.
    ///
    /// # Errors
    /// Returns an error if the image cannot be drawn or saved.
    fn write(&mut self, figure: &Figure, path: &Path) -> Result<()>;
}

/// Writes figures with `plotters`, one drawing surface per call.
#[derive(Debug, Clone)]
pub struct PlottersWriter {
    theme: ChartTheme,
    format: ImageFormat,
}

impl PlottersWriter {
    #[must_use]
    pub const fn new(theme: ChartTheme, format: ImageFormat) -> Self {
        Self { theme, format }
    }
}

impl FigureWriter for PlottersWriter {
    fn format(&self) -> ImageFormat {
        self.format
    }

    fn write(&mut self, figure: &Figure, path: &Path) -> Result<()> {
        let drawn = match self.format {
            ImageFormat::Png => draw_figure(
                BitMapBackend::new(path, figure.size).into_drawing_area(),
                figure,
                &self.theme,
            ),
            ImageFormat::Svg => draw_figure(
                SVGBackend::new(path, figure.size).into_drawing_area(),
                figure,
                &self.theme,
            ),
        };
        drawn.map_err(|e| SortbenchError::Render {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }
}

type DrawResult = std::result::Result<(), Box<dyn Error>>;

const fn rgb(color: ChartColor) -> RGBColor {
    let (r, g, b) = color.rgb;
    RGBColor(r, g, b)
}

fn draw_figure<DB>(root: DrawingArea<DB, Shift>, figure: &Figure, theme: &ChartTheme) -> DrawResult
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    root.fill(&rgb(theme.background))?;
    let body = match &figure.title {
        Some(title) => root.titled(
            title,
            (theme.font_family.as_str(), theme.title_font_size)
                .into_font()
                .style(FontStyle::Bold),
        )?,
        None => root.clone(),
    };

    let (rows, cols) = figure.grid;
    let areas = body.split_evenly((rows.max(1), cols.max(1)));
    for (panel, area) in figure.panels.iter().zip(&areas) {
        draw_panel(area, panel, theme)?;
    }
    root.present()?;
    Ok(())
}

fn draw_panel<DB>(area: &DrawingArea<DB, Shift>, panel: &Panel, theme: &ChartTheme) -> DrawResult
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    let bounds = panel.bounds();
    let mut builder = ChartBuilder::on(area);
    builder
        .margin(15)
        .x_label_area_size(55)
        .y_label_area_size(85);
    if let Some(title) = &panel.title {
        builder.caption(title, (theme.font_family.as_str(), theme.caption_font_size));
    }

    match panel.scale {
        AxisScale::Linear => {
            let mut chart = builder.build_cartesian_2d(bounds.x, bounds.y)?;
            draw_axes_and_content(&mut chart, panel, theme)
        }
        AxisScale::LogLog => {
            let mut chart =
                builder.build_cartesian_2d(bounds.x.log_scale(), bounds.y.log_scale())?;
            draw_axes_and_content(&mut chart, panel, theme)
        }
    }
}

fn draw_axes_and_content<'a, DB, X, Y>(
    chart: &mut ChartContext<'a, DB, Cartesian2d<X, Y>>,
    panel: &Panel,
    theme: &ChartTheme,
) -> DrawResult
where
    DB: DrawingBackend + 'a,
    DB::ErrorType: 'static,
    X: Ranged<ValueType = f64> + ValueFormatter<f64>,
    Y: Ranged<ValueType = f64> + ValueFormatter<f64>,
{
    let font = theme.font_family.as_str();
    let label_style = (font, theme.label_font_size);
    let size_format = |x: &f64| format!("{x:.0}");

    {
        let mut mesh = chart.configure_mesh();
        mesh.x_desc(panel.x_label.as_str())
            .y_desc(panel.y_label.as_str())
            .label_style(label_style)
            .axis_desc_style(label_style)
            .x_label_formatter(&size_format);
        if theme.grid {
            mesh.light_line_style(BLACK.mix(0.04))
                .bold_line_style(BLACK.mix(0.12));
        } else {
            mesh.disable_mesh();
        }
        mesh.draw()?;
    }

    for reference in &panel.references {
        let style = BLACK.mix(0.5).stroke_width(1);
        let (dash, spacing) = match reference.dash {
            LineDash::Dashed => (8, 5),
            LineDash::Dotted => (2, 4),
        };
        let points: Vec<(f64, f64)> = reference
            .points
            .iter()
            .copied()
            .filter(|p| panel.scale.accepts(*p))
            .collect();
        chart
            .draw_series(DashedLineSeries::new(points, dash, spacing, style))?
            .label(reference.label.as_str())
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], style));
    }

    let marker_size = i32::try_from(theme.marker_size).unwrap_or(5);
    for series in &panel.series {
        let color = rgb(series.color);
        let style = color.stroke_width(theme.line_width);
        let segments = series.segments(panel.scale);

        // the legend entry hangs off the first segment, or an empty one
        let first = segments.first().cloned().unwrap_or_default();
        chart
            .draw_series(LineSeries::new(first, style))?
            .label(series.label.as_str())
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], style));
        for segment in segments.iter().skip(1) {
            chart.draw_series(LineSeries::new(segment.iter().copied(), style))?;
        }
        for segment in &segments {
            draw_markers(chart, segment, series.marker, color, marker_size)?;
        }
    }

    for annotation in &panel.annotations {
        if panel.scale.accepts((annotation.x, annotation.y)) {
            draw_annotation(chart, annotation, font, theme.annotation_font_size)?;
        }
    }

    if panel.show_legend && !(panel.series.is_empty() && panel.references.is_empty()) {
        chart
            .configure_series_labels()
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK.mix(0.4))
            .label_font(label_style)
            .position(SeriesLabelPosition::UpperLeft)
            .draw()?;
    }
    Ok(())
}

fn draw_markers<'a, DB, X, Y>(
    chart: &mut ChartContext<'a, DB, Cartesian2d<X, Y>>,
    points: &[(f64, f64)],
    marker: Marker,
    color: RGBColor,
    s: i32,
) -> DrawResult
where
    DB: DrawingBackend + 'a,
    DB::ErrorType: 'static,
    X: Ranged<ValueType = f64>,
    Y: Ranged<ValueType = f64>,
{
    let fill = color.filled();
    match marker {
        Marker::Circle => chart.draw_series(points.iter().map(|&p| Circle::new(p, s, fill)))?,
        Marker::Square => chart.draw_series(
            points
                .iter()
                .map(|&p| EmptyElement::at(p) + Rectangle::new([(-s, -s), (s, s)], fill)),
        )?,
        Marker::Triangle => {
            chart.draw_series(points.iter().map(|&p| TriangleMarker::new(p, s, fill)))?
        }
        Marker::Diamond => chart.draw_series(points.iter().map(|&p| {
            EmptyElement::at(p) + Polygon::new(vec![(0, -s), (s, 0), (0, s), (-s, 0)], fill)
        }))?,
        Marker::Cross => chart.draw_series(
            points
                .iter()
                .map(|&p| Cross::new(p, s, color.stroke_width(2))),
        )?,
    };
    Ok(())
}

#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
fn draw_annotation<'a, DB, X, Y>(
    chart: &mut ChartContext<'a, DB, Cartesian2d<X, Y>>,
    annotation: &Annotation,
    font: &str,
    font_size: u32,
) -> DrawResult
where
    DB: DrawingBackend + 'a,
    DB::ErrorType: 'static,
    X: Ranged<ValueType = f64>,
    Y: Ranged<ValueType = f64>,
{
    let h_pos = match annotation.anchor {
        TextAnchor::Start => HPos::Left,
        TextAnchor::Middle => HPos::Center,
        TextAnchor::End => HPos::Right,
    };
    let above = annotation.offset.1 < 0;
    let v_pos = if above { VPos::Bottom } else { VPos::Center };
    let style = (font, font_size)
        .into_font()
        .color(&BLACK)
        .pos(Pos::new(h_pos, v_pos));
    let at = (annotation.x, annotation.y);
    let text = Text::new(annotation.text.clone(), annotation.offset, style);

    if !annotation.boxed {
        chart.draw_series(std::iter::once(EmptyElement::at(at) + text))?;
        return Ok(());
    }

    // text metrics are not known before drawing, approximate the box
    let width = (annotation.text.chars().count() as f64 * f64::from(font_size) * 0.55) as i32;
    let height = font_size as i32;
    let (dx, dy) = annotation.offset;
    let (left, right) = match h_pos {
        HPos::Left => (dx, dx + width),
        HPos::Right => (dx - width, dx),
        HPos::Center => (dx - width / 2, dx + width / 2),
    };
    let (top, bottom) = if above {
        (dy - height, dy)
    } else {
        (dy - height / 2, dy + height / 2)
    };
    let corners = [(left - 4, top - 3), (right + 4, bottom + 3)];
    chart.draw_series(std::iter::once(
        EmptyElement::at(at)
            + Rectangle::new(corners, WHITE.mix(0.8).filled())
            + Rectangle::new(corners, BLACK.mix(0.3))
            + text,
    ))?;
    Ok(())
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod tests;
