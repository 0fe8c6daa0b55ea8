//! Stick model of the segment as a chain of rigid links.
//!
//! The chain runs base → (bend, spacer) × n → end cap, giving `2 (n + 1)`
//! frames. Frame `i` is `T[i] = T[i - 1] · L[i]` where `L[i]` is the local
//! transform of link `i`.
//!
//! Every local generator mirrors the lateral x axis (`diag(-1, 1, 1)`),
//! encoding the alternating orientation of consecutive notch cuts. The
//! mirror commutes with the bends and translations, which all live in the
//! y-z plane, so it only toggles the handedness of the x column from one
//! frame to the next. Positions and the y/z columns are unaffected.

use nalgebra::{Matrix3, Matrix4, Vector3};
use notchkin_core::types::{GeometryParameters, NotchState};
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::transform::RigidTransform;

/// Curvatures smaller than this use the straight-notch limit.
pub const STRAIGHT_CURVATURE_TOLERANCE: f64 = 1e-9;

/// Role of one frame in the chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LinkKind {
    /// Base cylinder, attached to the actuation unit.
    Base,
    /// Bent notch region.
    Bend,
    /// Rigid tube between two notches.
    Spacer,
    /// End-effector housing.
    End,
}

impl LinkKind {
    /// Kind of frame `index` in a chain with `n` notches.
    #[must_use]
    pub const fn at(index: usize, n: usize) -> Self {
        if index == 0 {
            Self::Base
        } else if index == 2 * n + 1 {
            Self::End
        } else if index % 2 == 1 {
            Self::Bend
        } else {
            Self::Spacer
        }
    }

    /// Unbent length of this link's tube section.
    #[must_use]
    pub fn nominal_length(self, geometry: &GeometryParameters) -> f64 {
        match self {
            Self::Base => geometry.a,
            Self::Bend => geometry.h,
            Self::Spacer => geometry.c,
            Self::End => geometry.end_length(),
        }
    }
}

/// One frame of the chain.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChainLink {
    pub kind: LinkKind,
    /// Transform relative to the previous frame (the base frame for index 0).
    pub local: RigidTransform,
    /// Cumulative transform in the base frame.
    pub pose: RigidTransform,
}

/// Ordered frames from the base-attached link to the end cap.
///
/// Rotation blocks are orthonormal but alternate in handedness: even
/// frames (base, every spacer) have `det R = +1`, odd frames (every bend,
/// the end cap) have `det R = -1`. Use [`crate::pose::export`] for proper
/// rotations.
#[derive(Debug, Clone, PartialEq)]
pub struct TransformChain {
    state: NotchState,
    links: Vec<ChainLink>,
}

impl TransformChain {
    /// Notch arc the chain was built from.
    #[must_use]
    pub const fn state(&self) -> &NotchState {
        &self.state
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.links.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    #[must_use]
    pub fn links(&self) -> &[ChainLink] {
        &self.links
    }

    /// Cumulative base-frame transform of frame `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&RigidTransform> {
        self.links.get(index).map(|link| &link.pose)
    }

    /// Cumulative base-frame transforms in chain order.
    pub fn transforms(&self) -> impl Iterator<Item = &RigidTransform> + '_ {
        self.links.iter().map(|link| &link.pose)
    }

    /// Distal frame.
    #[must_use]
    pub fn tip(&self) -> Option<&RigidTransform> {
        self.links.last().map(|link| &link.pose)
    }
}

// ---------------------------------------------------------------------------
// Link generators
// ---------------------------------------------------------------------------

/// Lateral mirror applied by every link generator.
fn flip() -> Matrix3<f64> {
    Matrix3::from_diagonal(&Vector3::new(-1.0, 1.0, 1.0))
}

/// Straight link of length `length` along local z.
fn straight_link(length: f64) -> RigidTransform {
    RigidTransform::from_parts(&flip(), &Vector3::new(0.0, 0.0, length))
}

/// Base rotation by `alpha` about the segment axis, in the mirrored base
/// frame convention.
#[must_use]
pub fn base_transform(alpha: f64) -> RigidTransform {
    let (sa, ca) = alpha.sin_cos();
    #[rustfmt::skip]
    let m = Matrix4::new(
        -ca, -sa, 0.0, 0.0,
        -sa,  ca, 0.0, 0.0,
        0.0, 0.0, 1.0, 0.0,
        0.0, 0.0, 0.0, 1.0,
    );
    RigidTransform::from_matrix(m)
}

/// Base cylinder of length `a`, rotated by `alpha`.
#[must_use]
pub fn start_transform(a: f64, alpha: f64) -> RigidTransform {
    base_transform(alpha) * straight_link(a)
}

/// Notch bent into an arc of curvature `k` and length `s` about local x.
///
/// For `|k|` below [`STRAIGHT_CURVATURE_TOLERANCE`] the arc is replaced by
/// its `k → 0` limit, a straight link of length `s`.
#[must_use]
pub fn notch_transform(k: f64, s: f64) -> RigidTransform {
    if k.abs() < STRAIGHT_CURVATURE_TOLERANCE {
        trace!(k, s, "straight notch limit");
        return straight_link(s);
    }

    let (st, ct) = (k * s).sin_cos();
    #[rustfmt::skip]
    let bend = Matrix3::new(
        1.0, 0.0, 0.0,
        0.0,  ct, -st,
        0.0,  st,  ct,
    );
    let translation = Vector3::new(0.0, (ct - 1.0) / k, st / k);
    RigidTransform::from_parts(&(flip() * bend), &translation)
}

/// Rigid spacer of length `c` between two notches.
#[must_use]
pub fn spacer_transform(c: f64) -> RigidTransform {
    straight_link(c)
}

/// End-effector housing, `b - c` past the last spacer.
#[must_use]
pub fn end_transform(b: f64, c: f64) -> RigidTransform {
    straight_link(b - c)
}

// ---------------------------------------------------------------------------
// Chain assembly
// ---------------------------------------------------------------------------

/// Build the chain for `geometry.n` notches, each bent to `state`, with the
/// base rotated by `alpha`.
///
/// Always returns `2 * (n + 1)` frames. `n >= 1` is checked when the segment
/// is configured.
#[must_use]
pub fn build(geometry: &GeometryParameters, state: &NotchState, alpha: f64) -> TransformChain {
    let n = geometry.n as usize;
    let start = start_transform(geometry.a, alpha);
    let notch = notch_transform(state.curvature, state.arc_length);
    let spacer = spacer_transform(geometry.c);
    let end = end_transform(geometry.b, geometry.c);

    let mut links = Vec::with_capacity(geometry.link_count());
    let mut pose = RigidTransform::identity();
    for i in 0..geometry.link_count() {
        let kind = LinkKind::at(i, n);
        let local = match kind {
            LinkKind::Base => start,
            LinkKind::Bend => notch,
            LinkKind::Spacer => spacer,
            LinkKind::End => end,
        };
        pose = pose * local;
        links.push(ChainLink { kind, local, pose });
    }

    trace!(n, frames = links.len(), alpha, "built transform chain");
    TransformChain {
        state: *state,
        links,
    }
}
