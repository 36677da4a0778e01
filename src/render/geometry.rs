//! Pure chart geometry: rotation around the plot center and the derived
//! axis and zone-boundary endpoints.
//!
//! Everything here is total over real inputs and free of side effects, so it
//! can be tested without any output surface. Coordinates are meters, Y-up.

use glam::{DVec2, dvec2};

use super::defaults;

/// Cardinal reference axes drawn on the chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    North,
    East,
}

/// Rotate `point` by `angle_degrees` around `center`.
///
/// Standard 2D rotation matrix; positive angles rotate counterclockwise in
/// chart coordinates (Y-up). Angles of any magnitude are accepted and wrap
/// naturally through the trigonometry.
pub fn rotate_point(point: DVec2, angle_degrees: f64, center: DVec2) -> DVec2 {
    let (sin, cos) = angle_degrees.to_radians().sin_cos();
    let d = point - center;
    dvec2(
        center.x + d.x * cos - d.y * sin,
        center.y + d.x * sin + d.y * cos,
    )
}

/// Endpoint on a circle of `radius` around `center` at `angle_degrees`
/// (counterclockwise from east).
pub fn radial_endpoint(center: DVec2, radius: f64, angle_degrees: f64) -> DVec2 {
    let (sin, cos) = angle_degrees.to_radians().sin_cos();
    center + radius * dvec2(cos, sin)
}

/// Segment for one cardinal axis of a `width` x `height` plot tilted by
/// `tilt_degrees`: from the plot center to the rotated edge midpoint.
///
/// The start is the center itself; rotating around the center leaves it
/// fixed, so only the endpoint moves with the tilt.
pub fn axis_segment(axis: Axis, width: f64, height: f64, tilt_degrees: f64) -> (DVec2, DVec2) {
    let center = dvec2(width / 2.0, height / 2.0);
    let end = match axis {
        Axis::North => dvec2(center.x, height),
        Axis::East => dvec2(width, center.y),
    };
    (center, rotate_point(end, tilt_degrees, center))
}

/// Segments for the 16 zone boundaries of a `width` x `height` plot tilted
/// by `tilt_degrees`, all starting at the plot center.
///
/// Base angles run 11.25°, 33.75°, ... in 22.5° steps. 16 steps cover the
/// full turn; a 17th at base + 360° would retrace the first boundary and is
/// never produced. Endpoints sit at radius max(width, height), far enough to
/// cross every plot edge; the output viewport clips the overshoot.
pub fn zone_segments(width: f64, height: f64, tilt_degrees: f64) -> Vec<(DVec2, DVec2)> {
    let center = dvec2(width / 2.0, height / 2.0);
    let radius = width.max(height);

    (0..defaults::ZONE_COUNT)
        .map(|k| {
            let angle = defaults::ZONE_BASE_ANGLE + k as f64 * defaults::ZONE_STEP + tilt_degrees;
            (center, radial_endpoint(center, radius, angle))
        })
        .collect()
}

/// Corners of the plot rectangle rotated by `tilt_degrees` around its
/// center, in drawing order (bottom-left, bottom-right, top-right, top-left).
pub fn boundary_corners(width: f64, height: f64, tilt_degrees: f64) -> [DVec2; 4] {
    let center = dvec2(width / 2.0, height / 2.0);
    [
        dvec2(0.0, 0.0),
        dvec2(width, 0.0),
        dvec2(width, height),
        dvec2(0.0, height),
    ]
    .map(|corner| rotate_point(corner, tilt_degrees, center))
}
