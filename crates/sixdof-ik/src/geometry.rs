//! Link geometry model and its derived constants.
//!
//! A [`GeometryModel`] is built once per physical arm. It validates the five
//! link offsets and precomputes everything the solvers need: planar and
//! spatial link lengths, the home (all-zero) joint positions, and the fixed
//! angle biases that align the link frames with the inverse solver's
//! working axes.

use std::f64::consts::FRAC_PI_2;

use nalgebra::Vector3;

use sixdof_core::config::ArmConfig;
use sixdof_core::error::{ConfigError, GeometryError, UnreachablePose};
use sixdof_core::types::{ForwardKinematics, JointAngles, LINK_COUNT, Links, Pose};

use crate::vector::{hypot2, norm};
use crate::{chain, solver};

/// Validated arm geometry plus constants derived from it.
///
/// Immutable after construction; share it by reference across threads.
#[derive(Debug, Clone, PartialEq)]
pub struct GeometryModel {
    links: Links,
    /// Planar (XY) length of link 1.
    v1_length_xy: f64,
    /// Full length of link 4, the terminal link.
    v4_length: f64,
    /// Planar (XY) length of links 2 and 3 combined.
    l23_length_xy: f64,
    /// Joint positions J0..J4 with every angle at zero.
    home_positions: [Vector3<f64>; LINK_COUNT],
    /// Added to the raw inverse-solve angles. Entries 0, 3 and 5 are zero.
    angle_bias: JointAngles,
}

impl GeometryModel {
    /// Build a model from `[x, y, z]` link rows.
    ///
    /// # Errors
    ///
    /// Returns a [`GeometryError`] unless there are exactly five finite links
    /// with link 3 along X and link 4 along Y.
    pub fn new(links: &[[f64; 3]]) -> Result<Self, GeometryError> {
        Ok(Self::from_links(Links::from_slice(links)?))
    }

    /// Build a model from typed link vectors.
    pub fn from_vectors(links: [Vector3<f64>; LINK_COUNT]) -> Result<Self, GeometryError> {
        Ok(Self::from_links(Links::new(links)?))
    }

    /// Build a model from an [`ArmConfig`].
    pub fn from_config(config: &ArmConfig) -> Result<Self, ConfigError> {
        Ok(Self::from_links(config.validate()?))
    }

    /// Build a model from already-validated links.
    pub fn from_links(links: Links) -> Self {
        let l1 = links[1];
        let l23 = links[2] + links[3];

        let mut home_positions = [Vector3::zeros(); LINK_COUNT];
        for i in 1..LINK_COUNT {
            home_positions[i] = home_positions[i - 1] + links[i - 1];
        }

        // atan2(x, y): angle of link 1 away from the Y axis.
        let link1_lean = l1.x.atan2(l1.y);
        let mut angle_bias = JointAngles::zeros();
        angle_bias[1] = -FRAC_PI_2 + link1_lean;
        angle_bias[2] = -FRAC_PI_2 - l23.y.atan2(l23.x) - link1_lean;
        angle_bias[4] = links[4].y.atan2(links[4].x);

        Self {
            v1_length_xy: hypot2(l1.x, l1.y),
            v4_length: norm(&links[4]),
            l23_length_xy: hypot2(l23.x, l23.y),
            home_positions,
            angle_bias,
            links,
        }
    }

    pub const fn links(&self) -> &Links {
        &self.links
    }

    /// Offset of link `i` in its local frame.
    ///
    /// # Panics
    ///
    /// Panics if `i >= LINK_COUNT`.
    pub fn link(&self, i: usize) -> &Vector3<f64> {
        &self.links[i]
    }

    pub const fn v1_length_xy(&self) -> f64 {
        self.v1_length_xy
    }

    pub const fn v4_length(&self) -> f64 {
        self.v4_length
    }

    pub const fn l23_length_xy(&self) -> f64 {
        self.l23_length_xy
    }

    pub const fn home_positions(&self) -> &[Vector3<f64>; LINK_COUNT] {
        &self.home_positions
    }

    pub const fn angle_bias(&self) -> &JointAngles {
        &self.angle_bias
    }

    /// Upper bound on how far the TCP can get from the shoulder plane:
    /// the sum of the link 1, link 2+3 and link 4 lengths.
    pub fn max_reach(&self) -> f64 {
        self.v1_length_xy + self.l23_length_xy + self.v4_length
    }

    /// Joint angles to joint positions and TCP pose. See [`chain::forward`].
    pub fn forward(&self, angles: &JointAngles) -> ForwardKinematics {
        chain::forward(self, angles)
    }

    /// TCP pose to joint angles. See [`solver::inverse`].
    pub fn inverse(&self, pose: &Pose) -> Result<JointAngles, UnreachablePose> {
        solver::inverse(self, pose)
    }

    /// Write the flat TCP row `[x, y, z, a, b, c]` into `out`.
    pub fn compute_tcp(&self, angles: &JointAngles, out: &mut [f64; 6]) {
        chain::compute_tcp(self, angles, out);
    }
}
