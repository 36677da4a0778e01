//! Renders tilted Vaastu zone charts for rectangular plots.
//!
//! Given a plot's width and height in meters and a tilt angle from true
//! north, the crate derives two rotated cardinal axes and 16 radial zone
//! boundaries anchored at the plot center, then serializes the chart as an
//! SVG document or a PNG byte stream.
//!
//! ```
//! use vaastu::{ChartParams, RenderOptions};
//!
//! let params = ChartParams::new(40.0, 30.0, 15.0)?;
//! let svg = vaastu::render_svg(&params, &RenderOptions::default())?;
//! assert!(svg.starts_with("<svg"));
//! # Ok::<(), miette::Report>(())
//! ```

pub mod chart;
pub mod errors;
pub mod log;
pub mod render;
pub mod types;

pub use chart::ChartParams;
pub use errors::{ChartError, RenderError};
pub use render::raster::{CHART_FILENAME, CHART_MIME};
pub use render::{RenderOptions, render_png, render_svg};
