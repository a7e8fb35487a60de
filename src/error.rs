//! Error types for parameter validation.
//!
//! Stepping the kernel never fails; the only rejected input is a malformed
//! [`ParameterSet`](crate::core::params::ParameterSet), reported once before a run starts.

use thiserror::Error;

/// Reasons a parameter set is refused.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParamError {
    /// A body mass is zero or negative.
    #[error("{field} must be positive, got {value}")]
    NonPositiveMass {
        /// Name of the offending parameter.
        field: &'static str,
        /// Rejected value.
        value: f64,
    },

    /// A friction coefficient lies outside `[0, max]`.
    #[error("{field} must lie in [0, {max}], got {value}")]
    FrictionOutOfRange {
        /// Name of the offending parameter.
        field: &'static str,
        /// Rejected value.
        value: f64,
        /// Upper bound accepted for coefficients.
        max: f64,
    },

    /// Incline angle outside `[0, 90]` degrees.
    #[error("incline angle must lie in [0, 90] degrees, got {0}")]
    InvalidAngle(f64),

    /// Gravity given as a negative magnitude.
    #[error("gravity must be non-negative, got {0}")]
    NegativeGravity(f64),

    /// Playback speed is zero or negative.
    #[error("playback speed must be positive, got {0}")]
    InvalidPlaybackSpeed(f64),

    /// A parameter is NaN or infinite.
    #[error("{0} must be finite")]
    NonFinite(&'static str),
}

/// Convenient Result alias for fallible Slider Lab operations.
pub type Result<T> = std::result::Result<T, ParamError>;
