//! Forward kinematics of a tendon-actuated notched continuum segment.
//!
//! A tube with `n` eccentric notches bends when a tendon is pulled. Each
//! notch is modelled as a constant-curvature arc and the whole segment as a
//! stick model: a chain of rigid links whose frames a renderer can turn
//! into cylinders.
//!
//! # Architecture
//!
//! ```text
//! GeometryParameters ──► GeometryModel ──► NotchSolver ──► chain::build ──► pose::export
//!                         (y, once)        (k, s per       (2(n+1) frames)   (position +
//!                                           actuation)                        orientation)
//! ```
//!
//! [`configure`] validates geometry once; [`update`] turns each
//! [`ActuationInput`](notchkin_core::types::ActuationInput) into a fresh
//! [`TransformChain`].

pub mod chain;
pub mod geometry;
pub mod pose;
pub mod segment;
pub mod solver;
pub mod transform;

pub use chain::{ChainLink, LinkKind, TransformChain};
pub use geometry::{CircularCut, GeometryModel};
pub use pose::Pose;
pub use segment::{configure, update, SegmentModel};
pub use solver::{NotchSolver, SolverConfig};
pub use transform::RigidTransform;
