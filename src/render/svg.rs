//! SVG generation

use svg::Document;
use svg::node::element::{Line, Rectangle, Text};

use crate::types::Scaler;

use super::defaults;
use super::scene::{ChartScene, SegmentKind};

// Legend block geometry, in pixels from the top-left corner
const LEGEND_X: f64 = 8.0;
const LEGEND_TOP: f64 = 16.0;
const LEGEND_ROW_STEP: f64 = 16.0;
const LEGEND_SWATCH_LEN: f64 = 24.0;
const LEGEND_TEXT_GAP: f64 = 6.0;

/// Serialize a chart scene into an SVG document.
///
/// The viewport spans the plot exactly: `viewBox 0 0 W H` with
/// W = width * scale and H = height * scale, so zone lines overshooting the
/// plot are clipped by the viewport and the aspect ratio stays 1:1.
pub fn generate_svg(scene: &ChartScene, scaler: &Scaler) -> String {
    let plot_height = scene.params.height();
    let width_px = scaler.px(scene.params.width());
    let height_px = scaler.px(plot_height);

    crate::log::debug!(width_px, height_px, "svg viewport");

    let mut doc = Document::new()
        .set("viewBox", format!("0 0 {} {}", fmt_px(width_px), fmt_px(height_px)))
        .set("width", fmt_px(width_px))
        .set("height", fmt_px(height_px))
        .add(
            Rectangle::new()
                .set("x", 0)
                .set("y", 0)
                .set("width", "100%")
                .set("height", "100%")
                .set("fill", defaults::BACKGROUND.css()),
        );

    for segment in &scene.segments {
        let a = scaler.to_output(segment.start, plot_height);
        let b = scaler.to_output(segment.end, plot_height);

        let mut line = Line::new()
            .set("x1", fmt_px(a.x))
            .set("y1", fmt_px(a.y))
            .set("x2", fmt_px(b.x))
            .set("y2", fmt_px(b.y))
            .set("stroke", segment.kind.color().css())
            .set("stroke-width", segment.kind.stroke_width());
        if let Some([on, off]) = segment.kind.dash() {
            line = line.set("stroke-dasharray", format!("{on} {off}"));
        }
        let color = segment.kind.color();
        if color.is_translucent() {
            line = line.set("stroke-opacity", fmt_px(color.opacity()));
        }
        doc = doc.add(line);
    }

    doc = doc.add(
        Text::new(defaults::TITLE)
            .set("x", fmt_px(width_px / 2.0))
            .set("y", fmt_px(defaults::TITLE_FONT_SIZE + 4.0))
            .set("text-anchor", "middle")
            .set("font-family", "sans-serif")
            .set("font-size", defaults::TITLE_FONT_SIZE),
    );

    for (row, kind) in scene.labeled_kinds().into_iter().enumerate() {
        doc = add_legend_entry(doc, kind, LEGEND_TOP + row as f64 * LEGEND_ROW_STEP);
    }

    doc.to_string()
}

/// Append one legend row: a stroke swatch followed by its label
fn add_legend_entry(doc: Document, kind: SegmentKind, y: f64) -> Document {
    let mut swatch = Line::new()
        .set("x1", fmt_px(LEGEND_X))
        .set("y1", fmt_px(y))
        .set("x2", fmt_px(LEGEND_X + LEGEND_SWATCH_LEN))
        .set("y2", fmt_px(y))
        .set("stroke", kind.color().css())
        .set("stroke-width", kind.stroke_width());
    if let Some([on, off]) = kind.dash() {
        swatch = swatch.set("stroke-dasharray", format!("{on} {off}"));
    }

    // label() is Some for every kind the scene reports as labeled
    let label = kind.label().unwrap_or_default();
    let text = Text::new(label)
        .set("x", fmt_px(LEGEND_X + LEGEND_SWATCH_LEN + LEGEND_TEXT_GAP))
        .set("y", fmt_px(y + defaults::LEGEND_FONT_SIZE / 3.0))
        .set("font-family", "sans-serif")
        .set("font-size", defaults::LEGEND_FONT_SIZE);

    doc.add(swatch).add(text)
}

/// Format a pixel value: two decimals, trailing zeros trimmed
pub(crate) fn fmt_px(value: f64) -> String {
    let s = format!("{:.2}", value);
    let s = s.trim_end_matches('0');
    let s = s.trim_end_matches('.');
    if s.is_empty() || s == "-" {
        "0".to_string()
    } else {
        s.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::ChartParams;

    #[test]
    fn fmt_px_trims_trailing_zeros() {
        assert_eq!(fmt_px(400.0), "400");
        assert_eq!(fmt_px(403.20), "403.2");
        assert_eq!(fmt_px(59.238), "59.24");
        assert_eq!(fmt_px(0.0), "0");
        assert_eq!(fmt_px(-0.001), "0");
        assert_eq!(fmt_px(-12.5), "-12.5");
    }

    #[test]
    fn document_contains_all_segments_and_legend() {
        let params = ChartParams::new(40.0, 30.0, 0.0).unwrap();
        let scene = ChartScene::build(&params, false);
        let scaler = Scaler::try_new(10.0).unwrap();
        let out = generate_svg(&scene, &scaler);

        // 18 scene segments plus 2 legend swatches
        assert_eq!(out.matches("<line").count(), 20);
        assert!(out.contains("viewBox=\"0 0 400 300\""));
        assert!(out.contains(defaults::TITLE));
    }

    #[test]
    fn zone_strokes_carry_opacity() {
        let params = ChartParams::new(40.0, 30.0, 0.0).unwrap();
        let scene = ChartScene::build(&params, false);
        let scaler = Scaler::try_new(10.0).unwrap();
        let out = generate_svg(&scene, &scaler);

        assert_eq!(out.matches("stroke-opacity=\"0.7\"").count(), 16);
    }
}
