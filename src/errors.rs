//! Error types with miette diagnostics.
//!
//! The geometry itself is total; errors only arise at the input boundary
//! and in the output encoders.

use miette::Diagnostic;
use thiserror::Error;

// ============================================================================
// Parameter Errors
// ============================================================================

/// Errors from validating user-supplied chart parameters
#[derive(Error, Diagnostic, Debug)]
pub enum ChartError {
    #[error("plot width must be a finite number, got {value}")]
    #[diagnostic(code(vaastu::params::width_not_finite))]
    WidthNotFinite { value: f64 },

    #[error("plot height must be a finite number, got {value}")]
    #[diagnostic(code(vaastu::params::height_not_finite))]
    HeightNotFinite { value: f64 },

    #[error("tilt angle must be a finite number, got {value}")]
    #[diagnostic(code(vaastu::params::tilt_not_finite))]
    TiltNotFinite { value: f64 },

    #[error("plot width must be at least {min} m, got {value}")]
    #[diagnostic(
        code(vaastu::params::width_too_small),
        help("a degenerate plot cannot be charted; widen it to {min} m or more")
    )]
    WidthTooSmall { value: f64, min: f64 },

    #[error("plot height must be at least {min} m, got {value}")]
    #[diagnostic(
        code(vaastu::params::height_too_small),
        help("a degenerate plot cannot be charted; widen it to {min} m or more")
    )]
    HeightTooSmall { value: f64, min: f64 },

    #[error("tilt angle must be between -{max}° and {max}°, got {value}")]
    #[diagnostic(
        code(vaastu::params::tilt_out_of_range),
        help("the same orientation is reachable within a half turn either way")
    )]
    TiltOutOfRange { value: f64, max: f64 },
}

// ============================================================================
// Render Errors
// ============================================================================

/// Errors that occur while producing SVG or PNG output
#[derive(Error, Diagnostic, Debug)]
pub enum RenderError {
    #[error("invalid pixel scale: {value}")]
    #[diagnostic(
        code(vaastu::render::invalid_scale),
        help("the scale must be a finite number of pixels per meter, greater than zero")
    )]
    InvalidScale { value: f64 },

    #[error("chart rasterizes to an empty {width}x{height} image")]
    #[diagnostic(
        code(vaastu::render::empty_image),
        help("increase the pixel scale so the plot spans at least one pixel")
    )]
    EmptyImage { width: u32, height: u32 },

    #[error("PNG encoding failed")]
    #[diagnostic(code(vaastu::render::png_encode))]
    PngEncode(#[from] png::EncodingError),
}
