//! Position + orientation export for renderers.
//!
//! Orientation is rebuilt from the frame's z (forward) and y (up) columns
//! as a right-handed rotation, so the mirrored x column of odd frames never
//! reaches the consumer.

use nalgebra::{Isometry3, Point3, Translation3, UnitQuaternion};
use serde::{Deserialize, Serialize};

use crate::chain::{LinkKind, TransformChain};
use crate::transform::RigidTransform;

/// Base-frame pose of one link.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pose {
    pub kind: LinkKind,
    pub position: Point3<f64>,
    pub orientation: UnitQuaternion<f64>,
}

impl Pose {
    /// Pose of a cumulative chain transform.
    #[must_use]
    pub fn from_transform(kind: LinkKind, transform: &RigidTransform) -> Self {
        let position = Point3::from(transform.translation());
        let orientation = UnitQuaternion::face_towards(&transform.column(2), &transform.column(1));
        Self {
            kind,
            position,
            orientation,
        }
    }

    #[must_use]
    pub fn to_isometry(&self) -> Isometry3<f64> {
        Isometry3::from_parts(Translation3::from(self.position.coords), self.orientation)
    }
}

/// One pose per frame, in chain order.
#[must_use]
pub fn export(chain: &TransformChain) -> Vec<Pose> {
    chain
        .links()
        .iter()
        .map(|link| Pose::from_transform(link.kind, &link.pose))
        .collect()
}
