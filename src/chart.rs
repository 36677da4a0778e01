//! Validated chart parameters: one rectangular plot and its tilt.

use glam::{DVec2, dvec2};

use crate::errors::ChartError;
use crate::types::{Degrees, Meters};

/// Smallest plot side accepted, in meters.
pub const MIN_SIDE: f64 = 1.0;
/// Largest tilt magnitude accepted, in degrees.
pub const MAX_TILT: f64 = 180.0;

/// A validated plot description. Immutable for the duration of one render;
/// derived values (center, zone radius) are recomputed on demand.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartParams {
    width: Meters,
    height: Meters,
    tilt: Degrees,
}

impl ChartParams {
    /// Validate raw user input into chart parameters.
    ///
    /// Width and height must be finite and at least [`MIN_SIDE`] meters; the
    /// tilt must be finite and within ±[`MAX_TILT`] degrees.
    pub fn new(width: f64, height: f64, tilt: f64) -> Result<Self, ChartError> {
        let width = Meters::try_new(width)
            .map_err(|_| ChartError::WidthNotFinite { value: width })?;
        let height = Meters::try_new(height)
            .map_err(|_| ChartError::HeightNotFinite { value: height })?;
        let tilt = Degrees::try_new(tilt)
            .map_err(|_| ChartError::TiltNotFinite { value: tilt })?;

        if width.raw() < MIN_SIDE {
            return Err(ChartError::WidthTooSmall { value: width.raw(), min: MIN_SIDE });
        }
        if height.raw() < MIN_SIDE {
            return Err(ChartError::HeightTooSmall { value: height.raw(), min: MIN_SIDE });
        }
        if tilt.raw().abs() > MAX_TILT {
            return Err(ChartError::TiltOutOfRange { value: tilt.raw(), max: MAX_TILT });
        }

        Ok(ChartParams { width, height, tilt })
    }

    /// Plot width
    pub fn width(&self) -> Meters {
        self.width
    }

    /// Plot height
    pub fn height(&self) -> Meters {
        self.height
    }

    /// Tilt angle from true north
    pub fn tilt(&self) -> Degrees {
        self.tilt
    }

    /// Center of the plot, the pivot for every rotation
    pub fn center(&self) -> DVec2 {
        dvec2(self.width.raw() / 2.0, self.height.raw() / 2.0)
    }

    /// Radius for zone boundaries; long enough to reach past every edge
    pub fn zone_radius(&self) -> f64 {
        self.width.max(self.height).raw()
    }
}
