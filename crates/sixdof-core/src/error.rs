use std::fmt;

use thiserror::Error;

/// Top-level error type for the sixdof workspace.
#[derive(Debug, Error)]
pub enum KinematicsError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Geometry error: {0}")]
    Geometry(#[from] GeometryError),

    #[error("Unreachable pose: {0}")]
    Unreachable(#[from] UnreachablePose),
}

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid geometry: {0}")]
    Geometry(#[from] GeometryError),
}

/// Link geometry validation errors, raised when a model is constructed.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum GeometryError {
    #[error("Geometry must have exactly 5 links, got {got}")]
    WrongLinkCount { got: usize },

    #[error("Link 3 must lie along X: y={y}, z={z}")]
    LinkThreeNotAxial { y: f64, z: f64 },

    #[error("Link 4 must lie along Y: x={x}, z={z}")]
    LinkFourNotAxial { x: f64, z: f64 },

    #[error("Link {link} contains a non-finite component")]
    NonFinite { link: usize },
}

/// Triangle-solve stage of the inverse solver that rejected a pose.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolveStage {
    /// Base rotation (J0) from the wrist center's XZ projection.
    Base,
    /// Elbow angle (J2) from the law of cosines.
    Elbow,
    /// Shoulder angle (J1) from the law of cosines.
    Shoulder,
}

impl fmt::Display for SolveStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Base => write!(f, "base"),
            Self::Elbow => write!(f, "elbow"),
            Self::Shoulder => write!(f, "shoulder"),
        }
    }
}

/// The requested pose lies outside the reachable envelope.
///
/// `argument` is the acos argument that left [-1, 1] (it may be NaN when the
/// triangle degenerates).
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[error("{stage} solve out of range (acos argument {argument})")]
pub struct UnreachablePose {
    pub stage: SolveStage,
    pub argument: f64,
}
