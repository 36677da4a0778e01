//! Chart rendering
//!
//! This module is organized into submodules:
//! - `defaults`: Default styling and layout constants
//! - `geometry`: Pure rotation/projection math
//! - `scene`: The per-render set of styled segments
//! - `svg`: SVG generation
//! - `raster`: Pixmap rasterization and PNG encoding

pub mod defaults;
pub mod geometry;
pub mod raster;
pub mod scene;
pub mod svg;

// Re-export commonly used items
pub use scene::{ChartScene, Segment, SegmentKind};

use crate::chart::ChartParams;
use crate::errors::RenderError;
use crate::types::Scaler;

/// Options shared by both renderers
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderOptions {
    /// Output pixels per meter of plot; applied to both axes, so the
    /// rendered aspect ratio is always 1:1
    pub px_per_meter: f64,
    /// Draw the rotated plot outline
    pub show_boundary: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions {
            px_per_meter: defaults::PX_PER_METER,
            show_boundary: false,
        }
    }
}

impl RenderOptions {
    fn scaler(&self) -> Result<Scaler, RenderError> {
        Scaler::try_new(self.px_per_meter)
            .map_err(|_| RenderError::InvalidScale { value: self.px_per_meter })
    }
}

/// Render the chart as an SVG document.
pub fn render_svg(
    params: &ChartParams,
    options: &RenderOptions,
) -> Result<String, miette::Report> {
    let scaler = options.scaler()?;
    let scene = ChartScene::build(params, options.show_boundary);
    crate::log::debug!(segments = scene.segments.len(), "rendering svg");
    Ok(svg::generate_svg(&scene, &scaler))
}

/// Render the chart and encode it as an in-memory PNG byte stream.
pub fn render_png(
    params: &ChartParams,
    options: &RenderOptions,
) -> Result<Vec<u8>, miette::Report> {
    let scaler = options.scaler()?;
    let scene = ChartScene::build(params, options.show_boundary);
    crate::log::debug!(segments = scene.segments.len(), "rendering png");
    Ok(raster::encode_png(&scene, &scaler)?)
}
