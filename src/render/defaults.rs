//! Default chart layout and styling (pixel units unless noted)

use crate::types::Rgba;

/// Radial zone boundaries per full turn
pub const ZONE_COUNT: usize = 16;
/// First zone boundary, degrees counterclockwise from east
pub const ZONE_BASE_ANGLE: f64 = 11.25;
/// Angular spacing between zone boundaries, degrees
pub const ZONE_STEP: f64 = 22.5;

/// Output pixels per meter of plot at the default scale
pub const PX_PER_METER: f64 = 24.0;

pub const BACKGROUND: Rgba = Rgba::rgb(255, 255, 255);
pub const NORTH_AXIS_COLOR: Rgba = Rgba::rgb(0, 0, 255);
pub const EAST_AXIS_COLOR: Rgba = Rgba::rgb(255, 0, 0);
// 70% opacity green
pub const ZONE_COLOR: Rgba = Rgba::rgba(0, 128, 0, 179);
pub const BOUNDARY_COLOR: Rgba = Rgba::rgb(0, 0, 0);

pub const AXIS_STROKE_WIDTH: f64 = 1.5;
pub const ZONE_STROKE_WIDTH: f64 = 1.2;
pub const BOUNDARY_STROKE_WIDTH: f64 = 2.0;
/// Dash pattern (on, off) for the axis strokes
pub const AXIS_DASH: [f64; 2] = [6.0, 4.0];

pub const TITLE: &str = "Vaastu Zone Chart";
pub const NORTH_AXIS_LABEL: &str = "North Axis";
pub const EAST_AXIS_LABEL: &str = "East Axis";
pub const TITLE_FONT_SIZE: f64 = 14.0;
pub const LEGEND_FONT_SIZE: f64 = 11.0;
