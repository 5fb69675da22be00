//! Error types for shape construction and run configuration.
//!
//! Construction-time validation is the only failure surface of the core: once a
//! `Shape` and a validated `SliceCfg` exist, slicing, sampling and accumulation
//! cannot fail.

use thiserror::Error;

/// Rejected shape input.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ShapeError {
    #[error("a triangle needs exactly 3 points, got {count}")]
    MalformedTriangle { count: usize },

    #[error("triangle coordinates must come in (x, y) pairs, got {values} values")]
    OddCoordinateCount { values: usize },

    #[error("a shape needs at least one triangle")]
    EmptyShape,

    #[error("vertex ({x}, {y}) is not finite")]
    NonFinite { x: f64, y: f64 },

    #[error("circle fan needs radius > 0 and at least 3 segments (radius = {radius}, segments = {segments})")]
    InvalidCircle { radius: f64, segments: usize },
}

/// Rejected slicing/sampling parameters.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("slice height must be finite and > 0, got {0}")]
    InvalidSliceHeight(f64),

    #[error("samples per slice must be > 0")]
    ZeroSamples,

    #[error("extent {extent} at slice height {slice_height} needs more than {limit} bands")]
    TooManyBands {
        extent: f64,
        slice_height: f64,
        limit: usize,
    },
}

/// Top-level error for an area-function run.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum AreaError {
    #[error(transparent)]
    Shape(#[from] ShapeError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}
