use std::fmt;

use thiserror::Error;

/// Top-level error type for notchkin.
#[derive(Debug, Error)]
pub enum NotchError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Geometry error: {0}")]
    Geometry(#[from] GeometryError),

    #[error("Topology error: {0}")]
    Topology(#[from] TopologyError),

    #[error("Actuation error: {0}")]
    Actuation(#[from] ActuationError),
}

/// Which wall surface of the tube a notch cut quantity refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Surface {
    Outer,
    Inner,
}

impl fmt::Display for Surface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Outer => f.write_str("outer"),
            Self::Inner => f.write_str("inner"),
        }
    }
}

/// Invalid or non-physical cross-section geometry.
///
/// Raised at configuration time and fatal for that geometry.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum GeometryError {
    #[error("Invalid radii: need 0 < rin < rout, got rout={outer}, rin={inner}")]
    InvalidRadii { outer: f64, inner: f64 },

    #[error("Invalid value for {field}: {value}")]
    InvalidLength { field: &'static str, value: f64 },

    #[error("{surface} cut out of range: acos argument {argument} not in [-1, 1]")]
    CutOutOfRange { surface: Surface, argument: f64 },

    #[error("Degenerate cross-section: outer cut area {outer} equals inner cut area {inner}")]
    DegenerateArea { outer: f64, inner: f64 },
}

/// Invalid notch pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TopologyError {
    #[error("Notch count must be >= 1, got {0}")]
    TooFewNotches(u32),
}

/// Per-update actuation failures.
///
/// Copy + static messages, raised on every update call.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ActuationError {
    #[error("Non-finite {field}: {value}")]
    NonFinite { field: &'static str, value: f64 },

    #[error(
        "Singular curvature: tendon displacement {tendon_displacement} drives the curvature denominator to {denominator}"
    )]
    SingularCurvature {
        tendon_displacement: f64,
        denominator: f64,
    },
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

    #[error("Invalid topology: {0}")]
    Topology(#[from] TopologyError),

    #[error("Invalid actuation: {0}")]
    Actuation(#[from] ActuationError),
}
