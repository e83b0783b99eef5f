//! Deterministic RNG utilities for reproducible tests.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use sixdof_core::types::{JOINT_COUNT, JointAngles};

/// Create a deterministic `ChaCha8Rng` from a seed.
///
/// All test randomization should go through this to ensure reproducibility.
pub fn seeded_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Draw six joint angles uniformly from `[-limit, limit)`.
pub fn random_joint_angles<R: Rng>(rng: &mut R, limit: f64) -> JointAngles {
    let mut angles = [0.0; JOINT_COUNT];
    for angle in &mut angles {
        *angle = rng.gen_range(-limit..limit);
    }
    JointAngles::new(angles)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
