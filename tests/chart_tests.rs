//! End-to-end checks over the rendered SVG text and PNG bytes.

use vaastu::{ChartParams, RenderOptions, render_png, render_svg};

fn params() -> ChartParams {
    ChartParams::new(40.0, 30.0, 0.0).unwrap()
}

fn options() -> RenderOptions {
    RenderOptions {
        px_per_meter: 10.0,
        show_boundary: false,
    }
}

#[test]
fn svg_draws_sixteen_zone_lines() {
    let svg = render_svg(&params(), &options()).unwrap();
    // Zone lines are the only green strokes in the document.
    assert_eq!(svg.matches("stroke=\"rgb(0,128,0)\"").count(), 16);
}

#[test]
fn svg_labels_both_axes() {
    let svg = render_svg(&params(), &options()).unwrap();
    assert!(svg.contains("North Axis"));
    assert!(svg.contains("East Axis"));
    assert!(svg.contains("Vaastu Zone Chart"));
}

#[test]
fn svg_viewport_spans_the_plot() {
    let svg = render_svg(&params(), &options()).unwrap();
    assert!(svg.contains("viewBox=\"0 0 400 300\""));
}

#[test]
fn svg_axes_are_dashed() {
    let svg = render_svg(&params(), &options()).unwrap();
    // Two axis segments plus their two legend swatches.
    assert_eq!(svg.matches("stroke-dasharray").count(), 4);
}

#[test]
fn svg_boundary_flag_adds_four_outline_edges() {
    let without = render_svg(&params(), &options()).unwrap();
    let with = render_svg(
        &params(),
        &RenderOptions {
            show_boundary: true,
            ..options()
        },
    )
    .unwrap();

    let black = "stroke=\"rgb(0,0,0)\"";
    assert_eq!(without.matches(black).count(), 0);
    assert_eq!(with.matches(black).count(), 4);
}

#[test]
fn svg_tilt_moves_the_axis_endpoints() {
    let untilted = render_svg(&params(), &options()).unwrap();
    let tilted = render_svg(
        &ChartParams::new(40.0, 30.0, 45.0).unwrap(),
        &options(),
    )
    .unwrap();
    assert_ne!(untilted, tilted);
}

#[test]
fn png_stream_decodes_to_the_expected_dimensions() {
    let bytes = render_png(&params(), &options()).unwrap();
    assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");

    let decoder = png::Decoder::new(std::io::Cursor::new(&bytes[..]));
    let reader = decoder.read_info().unwrap();
    let info = reader.info();
    assert_eq!(info.width, 400);
    assert_eq!(info.height, 300);
    assert_eq!(info.color_type, png::ColorType::Rgba);
}

#[test]
fn png_output_depends_on_the_tilt() {
    let untilted = render_png(&params(), &options()).unwrap();
    let tilted = render_png(
        &ChartParams::new(40.0, 30.0, 45.0).unwrap(),
        &options(),
    )
    .unwrap();
    assert_ne!(untilted, tilted);
}

#[test]
fn invalid_inputs_never_reach_the_renderer() {
    assert!(ChartParams::new(0.5, 30.0, 0.0).is_err());
    assert!(ChartParams::new(40.0, 0.9, 0.0).is_err());
    assert!(ChartParams::new(40.0, 30.0, 181.0).is_err());
    assert!(ChartParams::new(f64::NAN, 30.0, 0.0).is_err());
}
