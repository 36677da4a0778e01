//! Raster output: stroke the scene into a pixmap and encode it as PNG.
//!
//! The raster path draws line work only. There is no text machinery here,
//! so the title and legend appear in the SVG output alone.

use tiny_skia::{LineCap, Paint, PathBuilder, Pixmap, Stroke, StrokeDash, Transform};

use crate::errors::RenderError;
use crate::types::{Rgba, Scaler};

use super::defaults;
use super::scene::{ChartScene, Segment};

/// Filename the encoded chart is offered under
pub const CHART_FILENAME: &str = "vaastu_chart.png";
/// MIME type of the encoded byte stream
pub const CHART_MIME: &str = "image/png";

fn to_skia(color: Rgba) -> tiny_skia::Color {
    tiny_skia::Color::from_rgba8(color.r, color.g, color.b, color.a)
}

/// Stroke the scene onto a freshly allocated pixmap.
///
/// The pixmap spans the plot exactly (rounded to whole pixels), so segments
/// reaching past the plot edges are clipped by the pixmap bounds.
pub fn rasterize(scene: &ChartScene, scaler: &Scaler) -> Result<Pixmap, RenderError> {
    let width = scaler.px(scene.params.width()).round() as u32;
    let height = scaler.px(scene.params.height()).round() as u32;

    let mut pixmap =
        Pixmap::new(width, height).ok_or(RenderError::EmptyImage { width, height })?;
    pixmap.fill(to_skia(defaults::BACKGROUND));

    crate::log::debug!(width, height, "rasterizing");

    for segment in &scene.segments {
        stroke_segment(&mut pixmap, scene, scaler, segment);
    }

    Ok(pixmap)
}

fn stroke_segment(pixmap: &mut Pixmap, scene: &ChartScene, scaler: &Scaler, segment: &Segment) {
    let a = scaler.to_output(segment.start, scene.params.height());
    let b = scaler.to_output(segment.end, scene.params.height());

    let mut pb = PathBuilder::new();
    pb.move_to(a.x as f32, a.y as f32);
    pb.line_to(b.x as f32, b.y as f32);
    let Some(path) = pb.finish() else {
        return;
    };

    let color = segment.kind.color();
    let mut paint = Paint::default();
    paint.set_color_rgba8(color.r, color.g, color.b, color.a);
    paint.anti_alias = true;

    let stroke = Stroke {
        width: segment.kind.stroke_width() as f32,
        line_cap: LineCap::Round,
        dash: segment
            .kind
            .dash()
            .and_then(|[on, off]| StrokeDash::new(vec![on as f32, off as f32], 0.0)),
        ..Stroke::default()
    };

    pixmap.stroke_path(&path, &paint, &stroke, Transform::identity(), None);
}

/// Rasterize the scene and encode it as an in-memory PNG byte stream.
pub fn encode_png(scene: &ChartScene, scaler: &Scaler) -> Result<Vec<u8>, RenderError> {
    let pixmap = rasterize(scene, scaler)?;

    let mut out = Vec::new();
    let mut encoder = png::Encoder::new(&mut out, pixmap.width(), pixmap.height());
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);
    let mut writer = encoder.write_header()?;
    // Every pixel is composited over the opaque background, so the
    // premultiplied pixmap data is identical to straight RGBA here.
    writer.write_image_data(pixmap.data())?;
    writer.finish()?;

    Ok(out)
}
