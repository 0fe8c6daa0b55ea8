//! Tendon displacement to notch arc parameters.
//!
//! Pulling the tendon by `delL` shortens the notch on the tendon side.
//! Assuming the neutral axis keeps its length relative to the material,
//! the notch bends into a constant-curvature arc with
//!
//! ```text
//! k = delL / (h (rin + y) - delL y)
//! s = h / (1 + y k)
//! ```

use notchkin_core::error::ActuationError;
use notchkin_core::types::NotchState;
use tracing::debug;

/// Configuration for the notch solver.
#[derive(Debug, Clone, Copy)]
pub struct SolverConfig {
    /// Denominators closer to zero than this are treated as singular.
    pub singularity_tolerance: f64,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            singularity_tolerance: 1e-12,
        }
    }
}

/// Maps tendon displacement to notch curvature and arc length.
#[derive(Debug, Clone, Copy, Default)]
pub struct NotchSolver {
    config: SolverConfig,
}

impl NotchSolver {
    /// Create a new solver with the given configuration.
    #[must_use]
    pub const fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub const fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Solve for the arc of one notch of height `h` in a tube of inner
    /// radius `rin` with neutral-axis offset `y`.
    ///
    /// A zero or tiny `del_l` yields a straight notch (`k == 0`, `s == h`),
    /// which is a valid state.
    ///
    /// # Errors
    ///
    /// [`ActuationError::NonFinite`] for a NaN or infinite `del_l`;
    /// [`ActuationError::SingularCurvature`] when `del_l` drives either
    /// denominator to zero.
    pub fn solve(&self, del_l: f64, h: f64, rin: f64, y: f64) -> Result<NotchState, ActuationError> {
        if !del_l.is_finite() {
            return Err(ActuationError::NonFinite {
                field: "del_l",
                value: del_l,
            });
        }

        let denominator = h * (rin + y) - del_l * y;
        if denominator.abs() < self.config.singularity_tolerance {
            return Err(ActuationError::SingularCurvature {
                tendon_displacement: del_l,
                denominator,
            });
        }
        let curvature = del_l / denominator;

        let stretch = 1.0 + y * curvature;
        if stretch.abs() < self.config.singularity_tolerance {
            return Err(ActuationError::SingularCurvature {
                tendon_displacement: del_l,
                denominator: stretch,
            });
        }
        let arc_length = h / stretch;

        debug!(del_l, k = curvature, s = arc_length, "solved notch arc");
        Ok(NotchState {
            curvature,
            arc_length,
        })
    }
}
