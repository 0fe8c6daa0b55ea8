//! Rotation-block checks.

use approx::assert_relative_eq;
use nalgebra::Matrix3;

/// Assert `RᵀR = I` and `|det R| = 1` within `tolerance`.
///
/// # Panics
///
/// Panics if `rotation` is not orthonormal.
pub fn assert_orthonormal(rotation: &Matrix3<f64>, tolerance: f64) {
    let gram = rotation.transpose() * rotation;
    assert_relative_eq!(gram, Matrix3::identity(), epsilon = tolerance);
    assert_relative_eq!(rotation.determinant().abs(), 1.0, epsilon = tolerance);
}

/// Assert `rotation` is orthonormal with `det R = 1`.
///
/// # Panics
///
/// Panics if `rotation` is not a proper rotation.
pub fn assert_proper_rotation(rotation: &Matrix3<f64>, tolerance: f64) {
    assert_orthonormal(rotation, tolerance);
    assert_relative_eq!(rotation.determinant(), 1.0, epsilon = tolerance);
}
