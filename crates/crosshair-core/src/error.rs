// File: crates/crosshair-core/src/error.rs
// Summary: Error types for configuration, axis resolution and interpolation.

use thiserror::Error;

/// Errors surfaced by construction-time APIs (options, axes, colours).
#[derive(Debug, Error)]
pub enum CrosshairError {
    #[error("unsupported axis type `{0}` (expected linear, time, category or logarithmic)")]
    UnsupportedAxis(String),
    #[error("chart has no usable {0} axis")]
    MissingAxis(&'static str),
    #[error("invalid crosshair options: {0}")]
    Options(#[from] serde_json::Error),
    #[error(transparent)]
    Color(#[from] ColorParseError),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("cannot parse colour `{0}`")]
pub struct ColorParseError(pub String);

/// Why a dataset produced no interpolated point for the current frame.
/// None of these are fatal: the caller skips the dataset and tries again on
/// the next event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InterpolationError {
    #[error("cursor lies outside the x axis range")]
    CursorOutOfRange,
    #[error("no bracketing samples around the cursor")]
    NoBracket,
    #[error("interpolated value is not a real number")]
    NotFinite,
    #[error("interpolated value lies outside the y axis range")]
    ValueOutOfRange,
    #[error("interpolated value cannot be mapped to a pixel")]
    Unmappable,
}

pub type Result<T, E = CrosshairError> = std::result::Result<T, E>;
