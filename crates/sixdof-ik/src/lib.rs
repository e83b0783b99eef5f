//! Closed-form kinematics for a six-axis arm with five link offsets.
//!
//! Provides forward kinematics (joint angles to joint positions and TCP
//! pose) and an analytic inverse solve (TCP pose to joint angles) for a
//! fixed joint topology: base yaw, shoulder, elbow, forearm roll, wrist bend
//! and tool roll.
//!
//! # Architecture
//!
//! ```text
//! links ──► GeometryModel ──► chain::forward  ──► ForwardKinematics
//!                        └──► solver::inverse ──► JointAngles
//! ```
//!
//! A [`GeometryModel`] validates the link offsets once and caches the derived
//! lengths, home positions and angle biases. Both solvers borrow it
//! immutably, so a single model can serve any number of threads.

pub mod chain;
pub mod geometry;
pub mod solver;
pub mod vector;

pub use chain::{JOINT_AXES, JointAxis, compute_tcp, forward, joint_frames};
pub use geometry::GeometryModel;
pub use solver::{inverse, inverse_xyzabc};
pub use vector::angle_between;
