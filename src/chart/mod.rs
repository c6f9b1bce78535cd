//! Chart battery: the figure model, the overlay template, and writers that
//! turn figures into image files.

mod battery;
mod figure;
mod format;
mod palette;
mod render;
mod style;
mod template;
mod theme;

pub use battery::{
    ChartArtifact, ChartKind, ChartSubject, plan_battery, sanitize_file_component,
    scenario_file_stems,
};
pub use figure::{Annotation, AxisScale, Bounds, Figure, LineDash, Marker, Panel, ReferenceCurve, Series};
pub use format::{capitalize, fixed, with_thousands};
pub use palette::ScenarioPalette;
pub use render::{FigureWriter, ImageFormat, PlottersWriter};
pub use style::{ChartColor, TextAnchor};
pub use template::{Annotator, OverlayTemplate, Reference, SIZE_LABEL};
pub use theme::ChartTheme;
