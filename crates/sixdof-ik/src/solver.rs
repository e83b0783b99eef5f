//! Closed-form inverse kinematics.
//!
//! The solve works outward from the requested TCP pose: back off along the
//! approach direction to find the wrist (J4), yaw the base towards it, solve
//! the shoulder/elbow triangle in the base plane, then recover the three
//! wrist angles from the resulting elbow position.

use std::f64::consts::FRAC_PI_2;

use nalgebra::Vector3;
use tracing::{debug, trace};

use sixdof_core::error::{SolveStage, UnreachablePose};
use sixdof_core::types::{JointAngles, Pose};

use crate::chain::{JointAxis, joint_frames};
use crate::geometry::GeometryModel;
use crate::vector::{angle_between, cross, hypot2};

/// Solve joint angles that place the TCP at `pose`.
///
/// Returns one solution branch. The result satisfies
/// `forward(model, &q).tcp` matching `pose` in position and approach
/// direction.
///
/// # Errors
///
/// Returns [`UnreachablePose`] when the pose is out of the arm's reach: any
/// of the base, elbow or shoulder triangle solves would need the arc cosine of
/// a value outside `[-1, 1]`.
pub fn inverse(model: &GeometryModel, pose: &Pose) -> Result<JointAngles, UnreachablePose> {
    let mut q = *model.angle_bias();

    let rotation = pose.rotation();
    let approach = pose.approach();
    let tool_y = rotation * Vector3::y();

    let j5 = pose.position;
    let j4 = j5 - model.v4_length() * approach;
    let home = model.home_positions();

    // Base yaw: swing the arm plane so J4 lies in it.
    q[0] += FRAC_PI_2 - checked_acos(home[4].z / hypot2(j4.z, j4.x), SolveStage::Base)?
        + (-j4.z).atan2(j4.x);

    // Shoulder/elbow triangle, solved in the base plane.
    let base = JointAxis::Y.rotation(q[0]);
    let planar = base.inverse() * j4;
    let dx = planar.x - home[1].x;
    let dy = planar.y - home[1].y;
    let d_sq = dx * dx + dy * dy;

    let v1 = model.v1_length_xy();
    let l23 = model.l23_length_xy();

    q[2] += checked_acos(
        (-d_sq + l23 * l23 + v1 * v1) / (2.0 * l23 * v1),
        SolveStage::Elbow,
    )?;
    q[1] += dy.atan2(dx)
        + checked_acos(
            (d_sq - l23 * l23 + v1 * v1) / (2.0 * d_sq.sqrt() * v1),
            SolveStage::Shoulder,
        )?;

    let frames = joint_frames(model, &JointAngles::new([q[0], q[1], q[2], 0.0, 0.0, 0.0]));
    let j2 = frames[2].translation.vector;
    let j3 = frames[3].translation.vector;
    trace!(?j2, ?j3, ?j4, ?j5, "arm positions");

    // Wrist
    let to_tcp = j5 - j4;
    let to_elbow = j3 - j4;
    let normal = cross(&to_tcp, &to_elbow);
    let transverse = base * -Vector3::z();

    q[3] += angle_between(&normal, &transverse, &cross(&transverse, &to_elbow));
    q[4] += angle_between(&to_tcp, &to_elbow, &cross(&to_elbow, &normal));
    q[5] += FRAC_PI_2 - angle_between(&normal, &tool_y, &cross(&tool_y, &approach));

    trace!(angles = ?q, "inverse kinematics");

    Ok(q)
}

/// [`inverse`] taking the pose as flat `x, y, z, a, b, c` components.
///
/// # Errors
///
/// Same as [`inverse`].
pub fn inverse_xyzabc(
    model: &GeometryModel,
    x: f64,
    y: f64,
    z: f64,
    a: f64,
    b: f64,
    c: f64,
) -> Result<JointAngles, UnreachablePose> {
    inverse(model, &Pose::new(x, y, z, a, b, c))
}

/// Arc cosine that refuses arguments outside `[-1, 1]`, NaN included.
fn checked_acos(argument: f64, stage: SolveStage) -> Result<f64, UnreachablePose> {
    if (-1.0..=1.0).contains(&argument) {
        Ok(argument.acos())
    } else {
        debug!(%stage, argument, "pose out of reach");
        Err(UnreachablePose { stage, argument })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
