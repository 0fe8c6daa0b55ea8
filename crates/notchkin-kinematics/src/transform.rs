//! 4x4 homogeneous link transform.

use std::ops::Mul;

use nalgebra::{Matrix3, Matrix4, Vector3};

/// Pose of one rigid link, relative to its parent or to the base frame.
///
/// Stored as a full homogeneous matrix rather than an `Isometry3` because
/// the link generators carry a lateral mirror (see [`crate::chain`]). The
/// rotation block is always orthonormal but not always a proper rotation:
/// its determinant is `-1` on mirrored frames.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RigidTransform(Matrix4<f64>);

impl RigidTransform {
    #[must_use]
    pub fn identity() -> Self {
        Self(Matrix4::identity())
    }

    /// Assemble from a rotation block and a translation column.
    #[must_use]
    pub fn from_parts(rotation: &Matrix3<f64>, translation: &Vector3<f64>) -> Self {
        let mut m = Matrix4::identity();
        m.fixed_view_mut::<3, 3>(0, 0).copy_from(rotation);
        m.fixed_view_mut::<3, 1>(0, 3).copy_from(translation);
        Self(m)
    }

    #[must_use]
    pub const fn from_matrix(matrix: Matrix4<f64>) -> Self {
        Self(matrix)
    }

    #[must_use]
    pub const fn matrix(&self) -> &Matrix4<f64> {
        &self.0
    }

    /// Upper-left 3x3 block.
    #[must_use]
    pub fn rotation(&self) -> Matrix3<f64> {
        self.0.fixed_view::<3, 3>(0, 0).into_owned()
    }

    /// Translation column.
    #[must_use]
    pub fn translation(&self) -> Vector3<f64> {
        self.column(3)
    }

    /// Column `j` of the upper three rows.
    ///
    /// # Panics
    ///
    /// Panics if `j > 3`.
    #[must_use]
    pub fn column(&self, j: usize) -> Vector3<f64> {
        Vector3::new(self.0[(0, j)], self.0[(1, j)], self.0[(2, j)])
    }

    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.0.iter().all(|v| v.is_finite())
    }
}

impl Default for RigidTransform {
    fn default() -> Self {
        Self::identity()
    }
}

impl Mul for RigidTransform {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self(self.0 * rhs.0)
    }
}

impl Mul<&RigidTransform> for &RigidTransform {
    type Output = RigidTransform;

    fn mul(self, rhs: &RigidTransform) -> RigidTransform {
        RigidTransform(self.0 * rhs.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn from_parts_places_blocks() {
        let rotation = Matrix3::new(0.0, -1.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0);
        let translation = Vector3::new(1.0, 2.0, 3.0);
        let t = RigidTransform::from_parts(&rotation, &translation);
        assert_eq!(t.rotation(), rotation);
        assert_eq!(t.translation(), translation);
        assert_relative_eq!(t.matrix()[(3, 3)], 1.0);
        assert_relative_eq!(t.matrix()[(3, 0)], 0.0);
    }

    #[test]
    fn composition_applies_right_operand_in_left_frame() {
        // quarter turn about z, then one unit along the new x axis
        let turn = RigidTransform::from_parts(
            &Matrix3::new(0.0, -1.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0),
            &Vector3::zeros(),
        );
        let step = RigidTransform::from_parts(&Matrix3::identity(), &Vector3::new(1.0, 0.0, 0.0));
        let t = turn * step;
        assert_relative_eq!(t.translation(), Vector3::new(0.0, 1.0, 0.0), epsilon = 1e-12);
        assert_eq!(&turn * &step, t);
    }

    #[test]
    fn columns_and_finiteness() {
        let t = RigidTransform::identity();
        assert_eq!(t.column(2), Vector3::z());
        assert!(t.is_finite());
        let mut m = Matrix4::identity();
        m[(1, 3)] = f64::NAN;
        assert!(!RigidTransform::from_matrix(m).is_finite());
    }

    #[test]
    fn mirrored_block_is_kept_as_is() {
        let mirror = Matrix3::from_diagonal(&Vector3::new(-1.0, 1.0, 1.0));
        let t = RigidTransform::from_parts(&mirror, &Vector3::zeros());
        assert_relative_eq!(t.rotation().determinant(), -1.0);
        assert_relative_eq!((t * t).rotation().determinant(), 1.0);
    }
}
