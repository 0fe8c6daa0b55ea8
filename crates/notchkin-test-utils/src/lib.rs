//! Shared test fixtures and assertions for notchkin crates.
//!
//! Provides the reference instrument, its pinned transform chain, and
//! rotation-block checks used across unit and integration tests.

pub mod assertions;
pub mod fixtures;

// ---------------------------------------------------------------------------
// Re-exports for convenience
// ---------------------------------------------------------------------------

pub use assertions::{assert_orthonormal, assert_proper_rotation};
pub use fixtures::{reference_actuation, reference_geometry, ReferenceChain, REFERENCE};
