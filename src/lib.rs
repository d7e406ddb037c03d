#![warn(clippy::all)]
#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]
#![doc = include_str!("../README.md")]

mod angle;
mod errors;
mod forward;
mod geometry;
mod inverse;

pub use angle::{degrees_to_radians, normalize_degrees, radians_to_degrees};
pub use errors::{ConfigError, Segment};
pub use forward::{solve_forward, solve_forward_pose};
pub use geometry::{angles, point, ArmConfig, ArmPose, JointAngles, Point2D};
pub use inverse::{solve_inverse, solve_inverse_with, ElbowBranch, IKResult};
