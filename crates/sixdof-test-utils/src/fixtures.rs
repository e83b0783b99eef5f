//! Reference geometries and poses.

use nalgebra::Vector3;

use sixdof_core::config::ArmConfig;
use sixdof_core::types::{LINK_COUNT, Pose};

/// Planar bench arm: every link lies in the XY plane.
pub const BENCH_ARM: [[f64; 3]; LINK_COUNT] = [
    [1.0, 1.0, 0.0],
    [0.0, 10.0, 0.0],
    [5.0, 0.0, 0.0],
    [3.0, 0.0, 0.0],
    [0.0, -3.0, 0.0],
];

/// Arm with out-of-plane offsets on links 0 and 1.
pub const OFFSET_ARM: [[f64; 3]; LINK_COUNT] = [
    [1.0, 1.0, 1.0],
    [0.0, 8.0, 2.0],
    [0.0, 10.0, 0.0],
    [5.0, 0.0, 0.0],
    [0.0, -6.0, 0.0],
];

/// Target rows `[x, y, z, a, b, c]` reachable by both reference arms.
pub const REFERENCE_POSES: [[f64; 6]; 4] = [
    [1.0, 1.0, 2.0, 1.0, 2.0, 3.0],
    [3.0, 8.0, 2.0, 4.0, 1.0, 3.0],
    [6.0, -6.0, -2.0, 0.0, 1.0, 3.0],
    [3.0, 8.0, 3.0, 4.0, 0.0, 3.0],
];

/// The bench arm as a named config.
pub fn bench_config() -> ArmConfig {
    ArmConfig::new("bench", BENCH_ARM.to_vec())
}

/// Distance between two TCP positions.
pub fn position_error(actual: &Pose, expected: &Pose) -> f64 {
    (actual.position - expected.position).norm()
}

/// Distance between two unit approach directions.
pub fn approach_error(actual: &Pose, expected: &Pose) -> f64 {
    let diff: Vector3<f64> = actual.approach() - expected.approach();
    diff.norm()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
