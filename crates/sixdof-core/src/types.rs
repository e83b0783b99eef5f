use nalgebra::{Rotation3, Vector3};
use serde::{Deserialize, Serialize};

use crate::error::GeometryError;

/// Number of rigid link offsets in the arm.
pub const LINK_COUNT: usize = 5;

/// Number of actuated joints.
pub const JOINT_COUNT: usize = 6;

// ---------------------------------------------------------------------------
// Links
// ---------------------------------------------------------------------------

/// Validated link offsets, one translation per link in its local frame.
///
/// Link 3 must lie along local X and link 4 along local Y; the inverse
/// solver relies on both constraints.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Links([Vector3<f64>; LINK_COUNT]);

impl Links {
    /// Validate five typed link vectors.
    pub fn new(links: [Vector3<f64>; LINK_COUNT]) -> Result<Self, GeometryError> {
        if let Some(link) = links
            .iter()
            .position(|v| v.iter().any(|c| !c.is_finite()))
        {
            return Err(GeometryError::NonFinite { link });
        }

        let l3 = links[3];
        if l3.y != 0.0 || l3.z != 0.0 {
            return Err(GeometryError::LinkThreeNotAxial { y: l3.y, z: l3.z });
        }

        let l4 = links[4];
        if l4.x != 0.0 || l4.z != 0.0 {
            return Err(GeometryError::LinkFourNotAxial { x: l4.x, z: l4.z });
        }

        Ok(Self(links))
    }

    /// Validate a slice of `[x, y, z]` rows. The slice must hold exactly
    /// [`LINK_COUNT`] entries.
    pub fn from_slice(links: &[[f64; 3]]) -> Result<Self, GeometryError> {
        let rows: &[[f64; 3]; LINK_COUNT] =
            links.try_into().map_err(|_| GeometryError::WrongLinkCount {
                got: links.len(),
            })?;
        Self::new((*rows).map(Vector3::from))
    }

    pub const fn as_array(&self) -> &[Vector3<f64>; LINK_COUNT] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = &Vector3<f64>> {
        self.0.iter()
    }
}

impl std::ops::Index<usize> for Links {
    type Output = Vector3<f64>;
    fn index(&self, i: usize) -> &Vector3<f64> {
        &self.0[i]
    }
}

// ---------------------------------------------------------------------------
// JointAngles
// ---------------------------------------------------------------------------

/// Six joint angles in radians, base first.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct JointAngles(pub [f64; JOINT_COUNT]);

impl JointAngles {
    pub const fn new(angles: [f64; JOINT_COUNT]) -> Self {
        Self(angles)
    }

    pub const fn zeros() -> Self {
        Self([0.0; JOINT_COUNT])
    }

    pub const fn as_array(&self) -> &[f64; JOINT_COUNT] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = &f64> {
        self.0.iter()
    }

    /// True when every angle is finite.
    pub fn is_finite(&self) -> bool {
        self.0.iter().all(|a| a.is_finite())
    }
}

impl From<[f64; JOINT_COUNT]> for JointAngles {
    fn from(angles: [f64; JOINT_COUNT]) -> Self {
        Self(angles)
    }
}

impl std::ops::Index<usize> for JointAngles {
    type Output = f64;
    fn index(&self, i: usize) -> &f64 {
        &self.0[i]
    }
}

impl std::ops::IndexMut<usize> for JointAngles {
    fn index_mut(&mut self, i: usize) -> &mut f64 {
        &mut self.0[i]
    }
}

// ---------------------------------------------------------------------------
// JointPositions
// ---------------------------------------------------------------------------

/// Absolute joint positions J0..J5. J0 is the base origin, J5 the TCP.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct JointPositions([Vector3<f64>; JOINT_COUNT]);

impl JointPositions {
    pub const fn new(positions: [Vector3<f64>; JOINT_COUNT]) -> Self {
        Self(positions)
    }

    pub const fn as_array(&self) -> &[Vector3<f64>; JOINT_COUNT] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = &Vector3<f64>> {
        self.0.iter()
    }

    /// Position of the tool center point.
    pub const fn tcp(&self) -> &Vector3<f64> {
        &self.0[JOINT_COUNT - 1]
    }
}

impl std::ops::Index<usize> for JointPositions {
    type Output = Vector3<f64>;
    fn index(&self, i: usize) -> &Vector3<f64> {
        &self.0[i]
    }
}

// ---------------------------------------------------------------------------
// Pose
// ---------------------------------------------------------------------------

/// TCP pose: position plus orientation angles `(a, b, c)`.
///
/// The orientation is the rotation `Rz(c) * Ry(b) * Rx(a)`. The tool's
/// approach direction is the rotated X axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pose {
    pub position: Vector3<f64>,
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

impl Pose {
    pub fn new(x: f64, y: f64, z: f64, a: f64, b: f64, c: f64) -> Self {
        Self {
            position: Vector3::new(x, y, z),
            a,
            b,
            c,
        }
    }

    /// Build from the flat `[x, y, z, a, b, c]` layout.
    pub fn from_array(v: [f64; 6]) -> Self {
        Self::new(v[0], v[1], v[2], v[3], v[4], v[5])
    }

    /// Flatten to `[x, y, z, a, b, c]`.
    pub fn to_array(&self) -> [f64; 6] {
        [
            self.position.x,
            self.position.y,
            self.position.z,
            self.a,
            self.b,
            self.c,
        ]
    }

    /// Orientation as a rotation, `Rz(c) * Ry(b) * Rx(a)`.
    pub fn rotation(&self) -> Rotation3<f64> {
        Rotation3::from_euler_angles(self.a, self.b, self.c)
    }

    /// Unit approach direction: `(cos b cos c, cos b sin c, -sin b)`.
    pub fn approach(&self) -> Vector3<f64> {
        let (sb, cb) = self.b.sin_cos();
        let (sc, cc) = self.c.sin_cos();
        Vector3::new(cb * cc, cb * sc, -sb)
    }
}

// ---------------------------------------------------------------------------
// ForwardKinematics
// ---------------------------------------------------------------------------

/// Result of a forward solve: every joint position plus the TCP pose.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ForwardKinematics {
    pub joints: JointPositions,
    pub tcp: Pose,
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const LINKS: [[f64; 3]; 5] = [
        [1.0, 1.0, 0.0],
        [0.0, 10.0, 0.0],
        [5.0, 0.0, 0.0],
        [3.0, 0.0, 0.0],
        [0.0, -3.0, 0.0],
    ];

    #[test]
    fn links_from_valid_slice() {
        let links = Links::from_slice(&LINKS).unwrap();
        assert_eq!(links[1], Vector3::new(0.0, 10.0, 0.0));
        assert_eq!(links.iter().count(), LINK_COUNT);
    }

    #[test]
    fn links_wrong_count() {
        assert_eq!(
            Links::from_slice(&LINKS[..4]),
            Err(GeometryError::WrongLinkCount { got: 4 })
        );
        let mut six = LINKS.to_vec();
        six.push([0.0, 0.0, 0.0]);
        assert_eq!(
            Links::from_slice(&six),
            Err(GeometryError::WrongLinkCount { got: 6 })
        );
        assert_eq!(
            Links::from_slice(&[]),
            Err(GeometryError::WrongLinkCount { got: 0 })
        );
    }

    #[test]
    fn links_three_must_be_axial() {
        let mut bad = LINKS;
        bad[3][1] = 0.5;
        assert_eq!(
            Links::from_slice(&bad),
            Err(GeometryError::LinkThreeNotAxial { y: 0.5, z: 0.0 })
        );

        let mut bad = LINKS;
        bad[3][2] = -1.0;
        assert!(matches!(
            Links::from_slice(&bad),
            Err(GeometryError::LinkThreeNotAxial { .. })
        ));
    }

    #[test]
    fn links_four_must_be_axial() {
        let mut bad = LINKS;
        bad[4][0] = 2.0;
        assert_eq!(
            Links::from_slice(&bad),
            Err(GeometryError::LinkFourNotAxial { x: 2.0, z: 0.0 })
        );

        let mut bad = LINKS;
        bad[4][2] = 0.1;
        assert!(matches!(
            Links::from_slice(&bad),
            Err(GeometryError::LinkFourNotAxial { .. })
        ));
    }

    #[test]
    fn links_reject_non_finite() {
        let mut bad = LINKS;
        bad[2][0] = f64::NAN;
        assert_eq!(
            Links::from_slice(&bad),
            Err(GeometryError::NonFinite { link: 2 })
        );

        let mut bad = LINKS;
        bad[0][2] = f64::INFINITY;
        assert_eq!(
            Links::from_slice(&bad),
            Err(GeometryError::NonFinite { link: 0 })
        );
    }

    #[test]
    fn joint_angles_index() {
        let mut q = JointAngles::zeros();
        q[3] = 0.5;
        assert_relative_eq!(q[3], 0.5);
        assert_eq!(q, JointAngles::from([0.0, 0.0, 0.0, 0.5, 0.0, 0.0]));
        assert!(q.is_finite());
        q[0] = f64::NAN;
        assert!(!q.is_finite());
    }

    #[test]
    fn pose_flat_layout() {
        let pose = Pose::new(1.0, 2.0, 3.0, 0.1, 0.2, 0.3);
        assert_eq!(pose.to_array(), [1.0, 2.0, 3.0, 0.1, 0.2, 0.3]);
        assert_eq!(Pose::from_array(pose.to_array()), pose);
    }

    #[test]
    fn pose_approach_is_rotated_x_axis() {
        let pose = Pose::new(0.0, 0.0, 0.0, 1.0, 2.0, 3.0);
        let from_rotation = pose.rotation() * Vector3::x();
        let approach = pose.approach();
        assert_relative_eq!(approach, from_rotation, epsilon = 1e-12);
        assert_relative_eq!(approach.norm(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn pose_zero_orientation() {
        let pose = Pose::new(0.0, 0.0, 0.0, 0.0, 0.0, 0.0);
        assert_relative_eq!(pose.approach(), Vector3::x(), epsilon = 1e-15);
        assert_relative_eq!(pose.rotation().angle(), 0.0, epsilon = 1e-15);
    }

    #[test]
    fn joint_positions_tcp_is_last() {
        let mut rows = [Vector3::zeros(); JOINT_COUNT];
        rows[5] = Vector3::new(9.0, 8.0, 0.0);
        let joints = JointPositions::new(rows);
        assert_eq!(*joints.tcp(), Vector3::new(9.0, 8.0, 0.0));
        assert_eq!(joints[5], *joints.tcp());
    }
}
