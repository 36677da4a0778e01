//! Strongly-typed numeric primitives (zero-cost newtypes).
//!
//! Raw `f64` stays inside the pure geometry; wherever user input crosses
//! into the crate it passes through a validated constructor here.

use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

use glam::{DVec2, dvec2};

/// Error type for invalid numeric values
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumericError {
    /// Value is NaN
    NaN,
    /// Value is infinite
    Infinite,
    /// Value is zero when non-zero required
    Zero,
    /// Value is negative when positive required
    Negative,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::NaN => write!(f, "value is NaN"),
            NumericError::Infinite => write!(f, "value is infinite"),
            NumericError::Zero => write!(f, "value is zero"),
            NumericError::Negative => write!(f, "value is negative"),
        }
    }
}

impl std::error::Error for NumericError {}

/// Length in meters (the chart's canonical unit)
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default)]
#[repr(transparent)]
pub struct Meters(pub f64);

impl Meters {
    /// Create a Meters value with validation (rejects NaN/infinite)
    #[inline]
    pub fn try_new(val: f64) -> Result<Meters, NumericError> {
        if val.is_nan() {
            Err(NumericError::NaN)
        } else if val.is_infinite() {
            Err(NumericError::Infinite)
        } else {
            Ok(Meters(val))
        }
    }

    /// Get the raw value (use sparingly, prefer typed operations)
    #[inline]
    pub fn raw(self) -> f64 {
        self.0
    }

    /// Get the maximum of two lengths
    #[inline]
    pub fn max(self, other: Meters) -> Meters {
        Meters(self.0.max(other.0))
    }
}

impl Add for Meters {
    type Output = Meters;
    fn add(self, rhs: Meters) -> Meters { Meters(self.0 + rhs.0) }
}
impl Sub for Meters {
    type Output = Meters;
    fn sub(self, rhs: Meters) -> Meters { Meters(self.0 - rhs.0) }
}
impl Mul<f64> for Meters {
    type Output = Meters;
    fn mul(self, rhs: f64) -> Meters { Meters(self.0 * rhs) }
}
impl Div<f64> for Meters {
    type Output = Meters;
    fn div(self, rhs: f64) -> Meters { Meters(self.0 / rhs) }
}
impl Neg for Meters {
    type Output = Meters;
    fn neg(self) -> Meters { Meters(-self.0) }
}

impl fmt::Display for Meters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Angle in degrees
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default)]
#[repr(transparent)]
pub struct Degrees(pub f64);

impl Degrees {
    /// Create a Degrees value with validation (rejects NaN/infinite).
    /// The angle itself is not range-restricted here; trigonometric
    /// periodicity handles wraparound.
    #[inline]
    pub fn try_new(val: f64) -> Result<Degrees, NumericError> {
        if val.is_nan() {
            Err(NumericError::NaN)
        } else if val.is_infinite() {
            Err(NumericError::Infinite)
        } else {
            Ok(Degrees(val))
        }
    }

    /// Get the raw value in degrees
    #[inline]
    pub fn raw(self) -> f64 {
        self.0
    }

    /// Convert to radians
    #[inline]
    pub fn to_radians(self) -> f64 {
        self.0.to_radians()
    }
}

impl fmt::Display for Degrees {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An RGBA color with 8-bit channels
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    /// Fully opaque color from RGB channels
    pub const fn rgb(r: u8, g: u8, b: u8) -> Rgba {
        Rgba { r, g, b, a: 255 }
    }

    /// Color with an explicit alpha channel
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Rgba {
        Rgba { r, g, b, a }
    }

    /// CSS `rgb(...)` string for the opaque channels
    pub fn css(&self) -> String {
        format!("rgb({},{},{})", self.r, self.g, self.b)
    }

    /// Alpha as a 0..1 fraction (for SVG stroke-opacity)
    pub fn opacity(&self) -> f64 {
        self.a as f64 / 255.0
    }

    /// Whether the color has any translucency
    pub fn is_translucent(&self) -> bool {
        self.a < 255
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a == 255 {
            write!(f, "rgb({},{},{})", self.r, self.g, self.b)
        } else {
            write!(f, "rgba({},{},{},{})", self.r, self.g, self.b, self.a)
        }
    }
}

/// Convert meters to output pixels and flip the vertical axis.
///
/// Chart coordinates are Y-up (north renders upward); both SVG and pixmap
/// coordinates are Y-down. The same scale applies to both axes, so the
/// output aspect ratio is always 1:1.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Scaler {
    px_per_meter: f64,
}

impl Scaler {
    /// Create a Scaler with validation (rejects NaN, infinite, zero, negative)
    pub fn try_new(px_per_meter: f64) -> Result<Self, NumericError> {
        if px_per_meter.is_nan() {
            Err(NumericError::NaN)
        } else if px_per_meter.is_infinite() {
            Err(NumericError::Infinite)
        } else if px_per_meter == 0.0 {
            Err(NumericError::Zero)
        } else if px_per_meter < 0.0 {
            Err(NumericError::Negative)
        } else {
            Ok(Scaler { px_per_meter })
        }
    }

    /// Convert a length in meters to raw f64 pixels.
    #[inline]
    pub fn px(&self, l: Meters) -> f64 {
        l.0 * self.px_per_meter
    }

    /// Convert a chart-space point (meters, Y-up) to an output-space point
    /// (pixels, Y-down) for a plot of the given height.
    #[inline]
    pub fn to_output(&self, p: DVec2, plot_height: Meters) -> DVec2 {
        dvec2(p.x * self.px_per_meter, (plot_height.0 - p.y) * self.px_per_meter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Meters tests ====================

    #[test]
    fn meters_try_new_valid() {
        assert!(Meters::try_new(1.0).is_ok());
        assert!(Meters::try_new(0.0).is_ok());
        assert!(Meters::try_new(-1.0).is_ok());
    }

    #[test]
    fn meters_try_new_rejects_nan() {
        assert_eq!(Meters::try_new(f64::NAN), Err(NumericError::NaN));
    }

    #[test]
    fn meters_try_new_rejects_infinity() {
        assert_eq!(Meters::try_new(f64::INFINITY), Err(NumericError::Infinite));
        assert_eq!(Meters::try_new(f64::NEG_INFINITY), Err(NumericError::Infinite));
    }

    #[test]
    fn meters_arithmetic() {
        let a = Meters(3.0);
        let b = Meters(2.0);

        assert_eq!(a + b, Meters(5.0));
        assert_eq!(a - b, Meters(1.0));
        assert_eq!(a * 2.0, Meters(6.0));
        assert_eq!(a / 2.0, Meters(1.5));
        assert_eq!(-a, Meters(-3.0));
    }

    #[test]
    fn meters_max() {
        assert_eq!(Meters(3.0).max(Meters(5.0)), Meters(5.0));
        assert_eq!(Meters(5.0).max(Meters(3.0)), Meters(5.0));
    }

    // ==================== Degrees tests ====================

    #[test]
    fn degrees_try_new_rejects_non_finite() {
        assert_eq!(Degrees::try_new(f64::NAN), Err(NumericError::NaN));
        assert_eq!(Degrees::try_new(f64::INFINITY), Err(NumericError::Infinite));
        assert!(Degrees::try_new(270.0).is_ok());
    }

    #[test]
    fn degrees_to_radians() {
        assert!((Degrees(180.0).to_radians() - std::f64::consts::PI).abs() < 1e-12);
        assert_eq!(Degrees(0.0).to_radians(), 0.0);
    }

    // ==================== Rgba tests ====================

    #[test]
    fn rgba_css_and_opacity() {
        let c = Rgba::rgb(0, 128, 0);
        assert_eq!(c.css(), "rgb(0,128,0)");
        assert_eq!(c.opacity(), 1.0);
        assert!(!c.is_translucent());

        let t = Rgba::rgba(0, 128, 0, 179);
        assert!(t.is_translucent());
        assert!((t.opacity() - 0.7).abs() < 0.01);
    }

    // ==================== Scaler tests ====================

    #[test]
    fn scaler_try_new_valid() {
        assert!(Scaler::try_new(24.0).is_ok());
        assert!(Scaler::try_new(1.0).is_ok());
    }

    #[test]
    fn scaler_try_new_rejects_zero() {
        assert_eq!(Scaler::try_new(0.0), Err(NumericError::Zero));
    }

    #[test]
    fn scaler_try_new_rejects_negative() {
        assert_eq!(Scaler::try_new(-1.0), Err(NumericError::Negative));
    }

    #[test]
    fn scaler_try_new_rejects_nan() {
        assert_eq!(Scaler::try_new(f64::NAN), Err(NumericError::NaN));
    }

    #[test]
    fn scaler_try_new_rejects_infinity() {
        assert_eq!(Scaler::try_new(f64::INFINITY), Err(NumericError::Infinite));
    }

    #[test]
    fn scaler_converts_meters_to_px() {
        let scaler = Scaler::try_new(24.0).unwrap();
        assert_eq!(scaler.px(Meters(2.0)), 48.0);
    }

    #[test]
    fn scaler_flips_vertical_axis() {
        let scaler = Scaler::try_new(10.0).unwrap();
        // Top of the plot lands at output y = 0
        let top = scaler.to_output(dvec2(20.0, 30.0), Meters(30.0));
        assert_eq!(top, dvec2(200.0, 0.0));

        let bottom = scaler.to_output(dvec2(0.0, 0.0), Meters(30.0));
        assert_eq!(bottom, dvec2(0.0, 300.0));
    }
}
