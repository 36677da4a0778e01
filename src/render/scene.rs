//! The chart scene: the transient set of styled segments for one render
//! pass. Rebuilt from scratch whenever the parameters change; nothing here
//! outlives a single render.

use glam::DVec2;

use crate::chart::ChartParams;
use crate::types::Rgba;

use super::defaults;
use super::geometry::{self, Axis};

/// What a segment depicts. Selects its stroke style and label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentKind {
    /// Rotated plot outline edge
    Boundary,
    /// One of the 16 radial zone boundaries
    Zone,
    NorthAxis,
    EastAxis,
}

impl SegmentKind {
    pub fn color(self) -> Rgba {
        match self {
            SegmentKind::Boundary => defaults::BOUNDARY_COLOR,
            SegmentKind::Zone => defaults::ZONE_COLOR,
            SegmentKind::NorthAxis => defaults::NORTH_AXIS_COLOR,
            SegmentKind::EastAxis => defaults::EAST_AXIS_COLOR,
        }
    }

    pub fn stroke_width(self) -> f64 {
        match self {
            SegmentKind::Boundary => defaults::BOUNDARY_STROKE_WIDTH,
            SegmentKind::Zone => defaults::ZONE_STROKE_WIDTH,
            SegmentKind::NorthAxis | SegmentKind::EastAxis => defaults::AXIS_STROKE_WIDTH,
        }
    }

    /// Dash pattern (on, off), or None for a solid stroke
    pub fn dash(self) -> Option<[f64; 2]> {
        match self {
            SegmentKind::NorthAxis | SegmentKind::EastAxis => Some(defaults::AXIS_DASH),
            SegmentKind::Boundary | SegmentKind::Zone => None,
        }
    }

    /// Legend label; zone and boundary lines are unlabeled
    pub fn label(self) -> Option<&'static str> {
        match self {
            SegmentKind::NorthAxis => Some(defaults::NORTH_AXIS_LABEL),
            SegmentKind::EastAxis => Some(defaults::EAST_AXIS_LABEL),
            SegmentKind::Boundary | SegmentKind::Zone => None,
        }
    }
}

/// One styled line segment in chart coordinates (meters, Y-up)
#[derive(Debug, Clone, Copy)]
pub struct Segment {
    pub kind: SegmentKind,
    pub start: DVec2,
    pub end: DVec2,
}

/// Everything a renderer needs for one pass: the plot parameters and the
/// segments in draw order.
#[derive(Debug, Clone)]
pub struct ChartScene {
    pub params: ChartParams,
    pub segments: Vec<Segment>,
}

impl ChartScene {
    /// Derive the scene from the chart parameters.
    ///
    /// Draw order is boundary (if requested), zone lines, then the axes on
    /// top, mirroring their visual stacking.
    pub fn build(params: &ChartParams, show_boundary: bool) -> Self {
        let w = params.width().raw();
        let h = params.height().raw();
        let tilt = params.tilt().raw();

        let mut segments = Vec::with_capacity(defaults::ZONE_COUNT + 6);

        if show_boundary {
            let corners = geometry::boundary_corners(w, h, tilt);
            for i in 0..corners.len() {
                segments.push(Segment {
                    kind: SegmentKind::Boundary,
                    start: corners[i],
                    end: corners[(i + 1) % corners.len()],
                });
            }
        }

        for (start, end) in geometry::zone_segments(w, h, tilt) {
            segments.push(Segment { kind: SegmentKind::Zone, start, end });
        }

        for (axis, kind) in [
            (Axis::North, SegmentKind::NorthAxis),
            (Axis::East, SegmentKind::EastAxis),
        ] {
            let (start, end) = geometry::axis_segment(axis, w, h, tilt);
            segments.push(Segment { kind, start, end });
        }

        ChartScene { params: *params, segments }
    }

    /// Kinds that carry a legend label, in draw order, deduplicated
    pub fn labeled_kinds(&self) -> Vec<SegmentKind> {
        let mut kinds = Vec::new();
        for segment in &self.segments {
            if segment.kind.label().is_some() && !kinds.contains(&segment.kind) {
                kinds.push(segment.kind);
            }
        }
        kinds
    }
}
