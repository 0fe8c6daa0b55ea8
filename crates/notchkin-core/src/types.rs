use serde::{Deserialize, Serialize};

use crate::error::{ActuationError, GeometryError, TopologyError};

// ---------------------------------------------------------------------------
// Serde default functions
// ---------------------------------------------------------------------------

const fn default_rout() -> f64 {
    0.58
}
const fn default_rin() -> f64 {
    0.43
}
const fn default_g() -> f64 {
    0.97
}
const fn default_a() -> f64 {
    3.0
}
const fn default_b() -> f64 {
    3.0
}
const fn default_h() -> f64 {
    0.51
}
const fn default_c() -> f64 {
    0.51
}
const fn default_n() -> u32 {
    5
}
const fn default_min_bend_radius() -> f64 {
    1.42
}
const fn default_max_strain_percent() -> f64 {
    10.4
}
const fn default_max_tendon_force() -> f64 {
    5.0
}
const fn default_max_bend_angle_deg() -> f64 {
    138.6
}

// ---------------------------------------------------------------------------
// GeometryParameters
// ---------------------------------------------------------------------------

/// Tube cross-section and notch pattern of one segment. Lengths in mm.
///
/// Defaults describe the reference instrument.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeometryParameters {
    /// Outer tube radius.
    #[serde(default = "default_rout")]
    pub rout: f64,

    /// Inner tube radius.
    #[serde(default = "default_rin")]
    pub rin: f64,

    /// Notch cut depth reference.
    #[serde(default = "default_g")]
    pub g: f64,

    /// Base cylinder length.
    #[serde(default = "default_a")]
    pub a: f64,

    /// End-effector cylinder length.
    #[serde(default = "default_b")]
    pub b: f64,

    /// Notch thickness (height of the cut along the tube axis).
    #[serde(default = "default_h")]
    pub h: f64,

    /// Spacing between two consecutive notches.
    #[serde(default = "default_c")]
    pub c: f64,

    /// Number of notches.
    #[serde(default = "default_n")]
    pub n: u32,
}

impl Default for GeometryParameters {
    fn default() -> Self {
        Self {
            rout: default_rout(),
            rin: default_rin(),
            g: default_g(),
            a: default_a(),
            b: default_b(),
            h: default_h(),
            c: default_c(),
            n: default_n(),
        }
    }
}

impl GeometryParameters {
    /// Check radii and lengths. The notch cut itself is checked when the
    /// neutral axis is derived.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::InvalidLength`] for a non-finite field,
    /// `h <= 0`, negative `a` or `c`, or `b < c`, and
    /// [`GeometryError::InvalidRadii`] unless `0 < rin < rout`.
    pub fn validate(&self) -> Result<(), GeometryError> {
        let finite = [
            ("rout", self.rout),
            ("rin", self.rin),
            ("g", self.g),
            ("a", self.a),
            ("b", self.b),
            ("h", self.h),
            ("c", self.c),
        ];
        if let Some(&(field, value)) = finite.iter().find(|(_, v)| !v.is_finite()) {
            return Err(GeometryError::InvalidLength { field, value });
        }
        if !(self.rin > 0.0 && self.rin < self.rout) {
            return Err(GeometryError::InvalidRadii {
                outer: self.rout,
                inner: self.rin,
            });
        }
        if self.h <= 0.0 {
            return Err(GeometryError::InvalidLength {
                field: "h",
                value: self.h,
            });
        }
        for (field, value) in [("a", self.a), ("c", self.c)] {
            if value < 0.0 {
                return Err(GeometryError::InvalidLength { field, value });
            }
        }
        if self.b < self.c {
            return Err(GeometryError::InvalidLength {
                field: "b",
                value: self.b,
            });
        }
        Ok(())
    }

    /// Check the notch count.
    ///
    /// # Errors
    ///
    /// Returns [`TopologyError::TooFewNotches`] when `n < 1`.
    pub const fn validate_topology(&self) -> Result<(), TopologyError> {
        if self.n < 1 {
            return Err(TopologyError::TooFewNotches(self.n));
        }
        Ok(())
    }

    /// Number of frames in the transform chain, `2 * (n + 1)`.
    #[must_use]
    pub const fn link_count(&self) -> usize {
        2 * (self.n as usize + 1)
    }

    /// Length of the end-effector housing past the last spacer, `b - c`.
    #[must_use]
    pub fn end_length(&self) -> f64 {
        self.b - self.c
    }
}

// ---------------------------------------------------------------------------
// SafetyLimits
// ---------------------------------------------------------------------------

/// Mechanical limits of the segment.
///
/// Carried alongside the geometry for an external validator; the kinematics
/// never reads them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SafetyLimits {
    /// Minimum bend radius (mm).
    #[serde(default = "default_min_bend_radius")]
    pub min_bend_radius: f64,

    /// Maximum material strain (%).
    #[serde(default = "default_max_strain_percent")]
    pub max_strain_percent: f64,

    /// Maximum tendon force (N).
    #[serde(default = "default_max_tendon_force")]
    pub max_tendon_force: f64,

    /// Maximum bend angle of the whole segment (degrees).
    #[serde(default = "default_max_bend_angle_deg")]
    pub max_bend_angle_deg: f64,
}

impl Default for SafetyLimits {
    fn default() -> Self {
        Self {
            min_bend_radius: default_min_bend_radius(),
            max_strain_percent: default_max_strain_percent(),
            max_tendon_force: default_max_tendon_force(),
            max_bend_angle_deg: default_max_bend_angle_deg(),
        }
    }
}

impl SafetyLimits {
    /// Maximum bend angle in radians.
    #[must_use]
    pub fn max_bend_angle_rad(&self) -> f64 {
        self.max_bend_angle_deg.to_radians()
    }
}

// ---------------------------------------------------------------------------
// ActuationInput
// ---------------------------------------------------------------------------

/// One actuation sample. `Default` is the unactuated segment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ActuationInput {
    /// Tendon displacement (mm, signed).
    #[serde(default)]
    pub del_l: f64,

    /// Base rotation about the segment axis (rad).
    #[serde(default)]
    pub alpha: f64,
}

impl ActuationInput {
    #[must_use]
    pub const fn new(del_l: f64, alpha: f64) -> Self {
        Self { del_l, alpha }
    }

    /// Reject NaN and infinite fields.
    ///
    /// # Errors
    ///
    /// Returns [`ActuationError::NonFinite`] naming the first bad field.
    pub fn validate(&self) -> Result<(), ActuationError> {
        if !self.del_l.is_finite() {
            return Err(ActuationError::NonFinite {
                field: "del_l",
                value: self.del_l,
            });
        }
        if !self.alpha.is_finite() {
            return Err(ActuationError::NonFinite {
                field: "alpha",
                value: self.alpha,
            });
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// NotchState
// ---------------------------------------------------------------------------

/// Constant-curvature arc of a single bent notch.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NotchState {
    /// Arc curvature `k` (1/mm). Zero for a straight notch.
    pub curvature: f64,
    /// Arc length `s` (mm).
    pub arc_length: f64,
}

impl NotchState {
    /// Bend angle of one notch, `k * s` (rad).
    #[must_use]
    pub fn bend_angle(&self) -> f64 {
        self.curvature * self.arc_length
    }

    /// Bend angle summed over `n` notches (rad).
    #[must_use]
    pub fn total_bend_angle(&self, n: u32) -> f64 {
        f64::from(n) * self.bend_angle()
    }

    /// Radius of the arc, `None` when the notch is straight.
    #[must_use]
    pub fn bend_radius(&self) -> Option<f64> {
        (self.curvature != 0.0).then(|| 1.0 / self.curvature)
    }
}
