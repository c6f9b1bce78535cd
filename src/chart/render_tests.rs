use super::*;

#[test]
fn image_format_parses_case_insensitively() {
    assert_eq!("PNG".parse::<ImageFormat>().unwrap(), ImageFormat::Png);
    assert_eq!("svg".parse::<ImageFormat>().unwrap(), ImageFormat::Svg);
    assert!("jpeg".parse::<ImageFormat>().is_err());
}

#[test]
fn image_format_extension_and_display() {
    assert_eq!(ImageFormat::default(), ImageFormat::Png);
    assert_eq!(ImageFormat::Svg.extension(), "svg");
    assert_eq!(ImageFormat::Png.to_string(), "png");
}

#[test]
fn chart_colors_map_to_plotters_rgb() {
    let color = ChartColor::named("steelblue").unwrap();
    let RGBColor(r, g, b) = rgb(color);
    assert_eq!((r, g, b), (70, 130, 180));
}

#[test]
fn writer_reports_its_format() {
    let writer = PlottersWriter::new(ChartTheme::default(), ImageFormat::Svg);
    assert_eq!(writer.format(), ImageFormat::Svg);
}
