// sixdof-core: Types, config and errors for the sixdof arm kinematics workspace.

pub mod config;
pub mod error;
pub mod types;

pub mod prelude {
    pub use crate::config::ArmConfig;
    pub use crate::error::{
        ConfigError, GeometryError, KinematicsError, SolveStage, UnreachablePose,
    };
    pub use crate::types::{
        ForwardKinematics, JOINT_COUNT, JointAngles, JointPositions, LINK_COUNT, Links, Pose,
    };
}
