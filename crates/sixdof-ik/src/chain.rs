//! Forward kinematics as an ordered fold over per-joint transforms.
//!
//! Every joint is an explicit `(rotation, translation)` pair: joint `i`
//! rotates about its local axis by `q[i]`, then link `i` translates along the
//! rotated frame. Folding the pairs from the base outward yields the absolute
//! frame of each joint. Joint 5 carries no link, so the TCP sits at J5.

use std::f64::consts::{FRAC_PI_2, PI};

use nalgebra::{IsometryMatrix3, Matrix3, Rotation3, Translation3, Unit, Vector3};
use tracing::trace;

use sixdof_core::types::{
    ForwardKinematics, JOINT_COUNT, JointAngles, JointPositions, LINK_COUNT, Pose,
};

use crate::geometry::GeometryModel;

/// How far `|R[2][0]|` may sit below 1 before orientation extraction treats
/// the rotation as gimbal-locked.
const GIMBAL_LOCK_EPS: f64 = 4.0 * f64::EPSILON;

/// Local rotation axis of a joint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JointAxis {
    X,
    Y,
    Z,
}

impl JointAxis {
    pub fn unit(self) -> Unit<Vector3<f64>> {
        match self {
            Self::X => Vector3::x_axis(),
            Self::Y => Vector3::y_axis(),
            Self::Z => Vector3::z_axis(),
        }
    }

    /// Rotation about this axis by `angle` radians.
    pub fn rotation(self, angle: f64) -> Rotation3<f64> {
        Rotation3::from_axis_angle(&self.unit(), angle)
    }
}

/// Joint axes in chain order: base yaw about Y, shoulder and elbow about Z,
/// forearm roll about X, wrist bend about Z, tool roll about Y.
pub const JOINT_AXES: [JointAxis; JOINT_COUNT] = [
    JointAxis::Y,
    JointAxis::Z,
    JointAxis::Z,
    JointAxis::X,
    JointAxis::Z,
    JointAxis::Y,
];

/// Fixed rotation from the J5 frame to the tool frame.
pub fn tool_frame() -> Rotation3<f64> {
    JointAxis::Z.rotation(-FRAC_PI_2)
}

/// Absolute frame of every joint.
///
/// `frames[i].translation` is the position of joint `i`; `frames[i].rotation`
/// is the cumulative rotation of joints `0..=i`.
pub fn joint_frames(
    model: &GeometryModel,
    angles: &JointAngles,
) -> [IsometryMatrix3<f64>; JOINT_COUNT] {
    let mut frames = [IsometryMatrix3::identity(); JOINT_COUNT];
    let mut transform = IsometryMatrix3::identity();

    for (i, (axis, &angle)) in JOINT_AXES.iter().zip(angles.iter()).enumerate() {
        // Apply joint motion
        transform *= joint_transform(*axis, angle);
        frames[i] = transform;
        // Apply the link that follows this joint
        if i < LINK_COUNT {
            transform *= IsometryMatrix3::from_parts(
                Translation3::from(*model.link(i)),
                Rotation3::identity(),
            );
        }
    }

    frames
}

/// Pure rotation of a single joint at a given angle.
fn joint_transform(axis: JointAxis, angle: f64) -> IsometryMatrix3<f64> {
    IsometryMatrix3::from_parts(Translation3::identity(), axis.rotation(angle))
}

/// Compute forward kinematics: joint angles -> joint positions and TCP pose.
pub fn forward(model: &GeometryModel, angles: &JointAngles) -> ForwardKinematics {
    let frames = joint_frames(model, angles);
    let joints = JointPositions::new(frames.map(|f| f.translation.vector));

    let rotation = frames[JOINT_COUNT - 1].rotation * tool_frame();
    let (a, b, c) = orientation_angles(rotation.matrix());
    let tcp = joints.tcp();

    trace!(?angles, ?joints, a, b, c, "forward kinematics");

    ForwardKinematics {
        joints,
        tcp: Pose::new(tcp.x, tcp.y, tcp.z, a, b, c),
    }
}

/// Write the TCP row `[x, y, z, a, b, c]` of [`forward`] into `out`.
pub fn compute_tcp(model: &GeometryModel, angles: &JointAngles, out: &mut [f64; 6]) {
    *out = forward(model, angles).tcp.to_array();
}

/// Decompose `r` into `(psi, theta, phi)` with `r = Rz(phi) * Ry(theta) * Rx(psi)`.
///
/// Picks the `theta = pi + asin(r[2][0])` branch. When `r[2][0]` is +-1 the
/// decomposition is gimbal-locked: `phi` is pinned to zero and `psi` absorbs
/// the remaining rotation.
pub fn orientation_angles(r: &Matrix3<f64>) -> (f64, f64, f64) {
    let r20 = r[(2, 0)];

    if 1.0 - r20.abs() > GIMBAL_LOCK_EPS {
        let theta = PI + r20.asin();
        let ct = theta.cos();
        let psi = (r[(2, 1)] / ct).atan2(r[(2, 2)] / ct);
        let phi = (r[(1, 0)] / ct).atan2(r[(0, 0)] / ct);
        (psi, theta, phi)
    } else {
        let phi = 0.0;
        if r20 < 0.0 {
            (phi + r[(0, 1)].atan2(r[(0, 2)]), FRAC_PI_2, phi)
        } else {
            (-phi + (-r[(0, 1)]).atan2(-r[(0, 2)]), -FRAC_PI_2, phi)
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
