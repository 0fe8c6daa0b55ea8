use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::types::{ActuationInput, GeometryParameters, SafetyLimits};

const fn default_actuation() -> ActuationInput {
    ActuationInput::new(0.3, 0.0)
}

// ---------------------------------------------------------------------------
// SegmentConfig
// ---------------------------------------------------------------------------

/// Configuration of one notched segment.
///
/// ```toml
/// [geometry]
/// rout = 0.58
/// rin = 0.43
/// n = 5
///
/// [limits]
/// max_bend_angle_deg = 138.6
///
/// [actuation]
/// del_l = 0.3
/// ```
///
/// Every table and field is optional and falls back to the reference
/// instrument.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SegmentConfig {
    /// Tube and notch geometry.
    #[serde(default)]
    pub geometry: GeometryParameters,

    /// Mechanical limits, carried through untouched.
    #[serde(default)]
    pub limits: SafetyLimits,

    /// Actuation applied when the segment is first evaluated.
    #[serde(default = "default_actuation")]
    pub actuation: ActuationInput,
}

impl Default for SegmentConfig {
    fn default() -> Self {
        Self {
            geometry: GeometryParameters::default(),
            limits: SafetyLimits::default(),
            actuation: default_actuation(),
        }
    }
}

impl SegmentConfig {
    /// Validate configuration. Returns Err on invalid values.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Geometry`], [`ConfigError::Topology`] or
    /// [`ConfigError::Actuation`] for the first table that fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.geometry.validate()?;
        self.geometry.validate_topology()?;
        self.actuation.validate()?;
        Ok(())
    }

    /// Parse and validate a TOML document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Toml`] if the document does not parse, or any
    /// error from [`SegmentConfig::validate`].
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, or any error
    /// from [`SegmentConfig::from_toml_str`].
    pub fn from_file(path: impl AsRef<std::path::Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
