//! Shared test fixtures and utilities for sixdof crates.
//!
//! Provides reference arm geometries, reference target poses, pose error
//! measures and deterministic RNG setup for randomized round trips.

pub mod fixtures;
pub mod rng;

// ---------------------------------------------------------------------------
// Re-exports for convenience
// ---------------------------------------------------------------------------

pub use fixtures::{
    BENCH_ARM, OFFSET_ARM, REFERENCE_POSES, approach_error, bench_config, position_error,
};
pub use rng::{random_joint_angles, seeded_rng};
