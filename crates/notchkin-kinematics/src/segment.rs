//! Configure-once, update-per-tick facade over the kinematics pipeline.
//!
//! ```text
//! GeometryParameters ──► GeometryModel ─┐
//!                                       ├─► NotchSolver ──► chain::build ──► TransformChain
//! ActuationInput ───────────────────────┘
//! ```

use notchkin_core::config::SegmentConfig;
use notchkin_core::error::{ActuationError, NotchError};
use notchkin_core::types::{ActuationInput, GeometryParameters, NotchState, SafetyLimits};
use tracing::{debug, warn};

use crate::chain::{self, TransformChain};
use crate::geometry::GeometryModel;
use crate::pose::{self, Pose};
use crate::solver::NotchSolver;

/// A configured segment. Geometry is fixed for its lifetime; rebuild to
/// change it.
#[derive(Debug, Clone, Copy)]
pub struct SegmentModel {
    geometry: GeometryModel,
    limits: SafetyLimits,
    solver: NotchSolver,
}

/// Validate the geometry and derive its constants.
///
/// # Errors
///
/// [`NotchError::Topology`] for `n < 1`, [`NotchError::Geometry`] for an
/// invalid or degenerate cross-section.
pub fn configure(params: GeometryParameters, limits: SafetyLimits) -> Result<SegmentModel, NotchError> {
    SegmentModel::new(params, limits, NotchSolver::default())
}

/// Evaluate `model` for one actuation sample.
///
/// # Errors
///
/// See [`SegmentModel::update`].
pub fn update(model: &SegmentModel, input: ActuationInput) -> Result<TransformChain, NotchError> {
    model.update(input)
}

impl SegmentModel {
    /// Configure with an explicit solver.
    ///
    /// # Errors
    ///
    /// Same as [`configure`].
    pub fn new(
        params: GeometryParameters,
        limits: SafetyLimits,
        solver: NotchSolver,
    ) -> Result<Self, NotchError> {
        params.validate_topology().map_err(|err| {
            warn!(%err, n = params.n, "topology rejected");
            err
        })?;
        let geometry = GeometryModel::derive(params).map_err(|err| {
            warn!(
                %err,
                rout = params.rout,
                rin = params.rin,
                g = params.g,
                "geometry rejected"
            );
            err
        })?;
        debug!(
            n = params.n,
            y = geometry.neutral_axis_offset(),
            "configured notched segment"
        );
        Ok(Self {
            geometry,
            limits,
            solver,
        })
    }

    /// Configure from a loaded [`SegmentConfig`].
    ///
    /// # Errors
    ///
    /// Same as [`configure`].
    pub fn from_config(config: &SegmentConfig) -> Result<Self, NotchError> {
        configure(config.geometry, config.limits)
    }

    #[must_use]
    pub const fn geometry(&self) -> &GeometryModel {
        &self.geometry
    }

    #[must_use]
    pub const fn params(&self) -> &GeometryParameters {
        self.geometry.params()
    }

    /// Limits supplied at configuration, unevaluated.
    #[must_use]
    pub const fn limits(&self) -> &SafetyLimits {
        &self.limits
    }

    /// Notch arc for `input`.
    ///
    /// # Errors
    ///
    /// Non-finite input or a singular curvature.
    pub fn solve(&self, input: ActuationInput) -> Result<NotchState, ActuationError> {
        input.validate()?;
        let params = self.geometry.params();
        self.solver.solve(
            input.del_l,
            params.h,
            params.rin,
            self.geometry.neutral_axis_offset(),
        )
    }

    /// Fresh transform chain for `input`. Nothing is returned on failure;
    /// callers hold their last good chain.
    ///
    /// # Errors
    ///
    /// [`NotchError::Actuation`] for non-finite input or an actuation that
    /// drives the curvature to infinity.
    pub fn update(&self, input: ActuationInput) -> Result<TransformChain, NotchError> {
        let state = self.solve(input).map_err(|err| {
            warn!(%err, del_l = input.del_l, alpha = input.alpha, "actuation rejected");
            err
        })?;
        Ok(chain::build(self.geometry.params(), &state, input.alpha))
    }

    /// [`update`](Self::update) followed by pose export.
    ///
    /// # Errors
    ///
    /// Same as [`update`](Self::update).
    pub fn poses(&self, input: ActuationInput) -> Result<Vec<Pose>, NotchError> {
        self.update(input).map(|chain| pose::export(&chain))
    }

    /// Evaluate independent actuation samples; one failure does not affect
    /// the others.
    #[must_use]
    pub fn sweep(&self, inputs: &[ActuationInput]) -> Vec<Result<TransformChain, NotchError>> {
        inputs.iter().map(|&input| self.update(input)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use notchkin_core::error::{GeometryError, TopologyError};

    use crate::solver::SolverConfig;
    use crate::transform::RigidTransform;

    fn reference() -> SegmentModel {
        configure(GeometryParameters::default(), SafetyLimits::default()).unwrap()
    }

    #[test]
    fn configure_reference_geometry() {
        let model = reference();
        assert_relative_eq!(
            model.geometry().neutral_axis_offset(),
            0.472_957_607_836_575_5,
            epsilon = 1e-12
        );
        assert_eq!(model.params().n, 5);
        assert_eq!(model.limits(), &SafetyLimits::default());
    }

    #[test]
    fn configure_rejects_zero_notches() {
        let params = GeometryParameters {
            n: 0,
            ..GeometryParameters::default()
        };
        let err = configure(params, SafetyLimits::default()).unwrap_err();
        assert!(matches!(
            err,
            NotchError::Topology(TopologyError::TooFewNotches(0))
        ));
    }

    #[test]
    fn configure_rejects_non_physical_cut() {
        let params = GeometryParameters {
            g: 1.3,
            ..GeometryParameters::default()
        };
        let err = configure(params, SafetyLimits::default()).unwrap_err();
        assert!(matches!(
            err,
            NotchError::Geometry(GeometryError::CutOutOfRange { .. })
        ));
    }

    #[test]
    fn update_reference_actuation() {
        let chain = update(&reference(), ActuationInput::new(0.3, 0.0)).unwrap();
        assert_eq!(chain.len(), 12);
        assert_relative_eq!(chain.state().curvature, 0.941_557_235_904_107_4, epsilon = 1e-12);
        assert_relative_eq!(chain.state().arc_length, 0.352_863_849_731_633_76, epsilon = 1e-12);
    }

    #[test]
    fn unactuated_update_is_straight() {
        let chain = reference().update(ActuationInput::default()).unwrap();
        assert_eq!(chain.state().curvature, 0.0);
        assert_relative_eq!(chain.state().arc_length, 0.51);
        for t in chain.transforms() {
            assert_relative_eq!(t.translation().x, 0.0, epsilon = 1e-12);
            assert_relative_eq!(t.translation().y, 0.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn singular_update_returns_no_chain() {
        let model = reference();
        let params = model.params();
        let y = model.geometry().neutral_axis_offset();
        let del_l = params.h * (params.rin + y) / y;
        let err = model.update(ActuationInput::new(del_l, 0.0)).unwrap_err();
        assert!(matches!(
            err,
            NotchError::Actuation(ActuationError::SingularCurvature { .. })
        ));
    }

    #[test]
    fn non_finite_alpha_rejected() {
        let err = reference()
            .update(ActuationInput::new(0.3, f64::NAN))
            .unwrap_err();
        assert!(matches!(
            err,
            NotchError::Actuation(ActuationError::NonFinite { field: "alpha", .. })
        ));
    }

    #[test]
    fn updates_are_independent() {
        let model = reference();
        let first = model.update(ActuationInput::new(0.3, 0.0)).unwrap();
        let _other = model.update(ActuationInput::new(-0.2, 1.0)).unwrap();
        let again = model.update(ActuationInput::new(0.3, 0.0)).unwrap();
        assert_eq!(first, again);
    }

    #[test]
    fn sweep_isolates_failures() {
        let model = reference();
        let params = model.params();
        let y = model.geometry().neutral_axis_offset();
        let singular = params.h * (params.rin + y) / y;
        let results = model.sweep(&[
            ActuationInput::new(0.1, 0.0),
            ActuationInput::new(singular, 0.0),
            ActuationInput::new(0.2, 0.5),
        ]);
        assert_eq!(results.len(), 3);
        assert!(results[0].is_ok());
        assert!(results[1].is_err());
        assert!(results[2].is_ok());
    }

    #[test]
    fn poses_follow_chain() {
        let model = reference();
        let input = ActuationInput::new(0.3, 0.2);
        let poses = model.poses(input).unwrap();
        let chain = model.update(input).unwrap();
        assert_eq!(poses.len(), chain.len());
        let tip = chain.tip().unwrap().translation();
        assert_relative_eq!(poses[11].position.coords, tip, epsilon = 1e-12);
    }

    #[test]
    fn from_config_uses_geometry_table() {
        let config = SegmentConfig {
            geometry: GeometryParameters {
                n: 2,
                ..GeometryParameters::default()
            },
            ..SegmentConfig::default()
        };
        let model = SegmentModel::from_config(&config).unwrap();
        let chain = model.update(config.actuation).unwrap();
        assert_eq!(chain.len(), 6);
    }

    #[test]
    fn new_with_custom_solver_rejects_bad_geometry() {
        let solver = NotchSolver::new(SolverConfig {
            singularity_tolerance: 1e-9,
        });
        let deep = GeometryParameters {
            g: 1.3,
            ..GeometryParameters::default()
        };
        let err = SegmentModel::new(deep, SafetyLimits::default(), solver).unwrap_err();
        assert!(matches!(err, NotchError::Geometry(GeometryError::CutOutOfRange { .. })));

        let empty = GeometryParameters {
            n: 0,
            ..GeometryParameters::default()
        };
        let err = SegmentModel::new(empty, SafetyLimits::default(), solver).unwrap_err();
        assert!(matches!(err, NotchError::Topology(_)));
    }

    #[test]
    fn cut_through_whole_lumen_actuates() {
        let params = GeometryParameters {
            g: 0.15,
            ..GeometryParameters::default()
        };
        let model = configure(params, SafetyLimits::default()).unwrap();
        let straight = model.solve(ActuationInput::default()).unwrap();
        assert_relative_eq!(straight.arc_length, params.h);

        let chain = model.update(ActuationInput::new(0.1, 0.0)).unwrap();
        assert!(chain.state().curvature > 0.0);
        assert!(chain.transforms().all(RigidTransform::is_finite));
    }
}
