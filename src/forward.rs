//! Forward kinematics: joint angles to end-effector position.

use crate::geometry::{ArmConfig, ArmPose, JointAngles, Point2D};

/// Compute the end-effector position for the given joint angles.
///
/// The second segment is oriented along `angle1 + angle2`, so
///
/// ```text
/// x = l1·cos(θ1) + l2·cos(θ1 + θ2)
/// y = l1·sin(θ1) + l2·sin(θ1 + θ2)
/// ```
///
/// The function is total: every finite pair of angles yields a finite position.
///
/// # Examples
/// ```
/// use twolink::{angles, solve_forward, ArmConfig};
///
/// let arm = ArmConfig::new(100.0, 80.0).expect("valid lengths");
/// let tip = solve_forward(&arm, angles(0.0, 0.0));
/// assert!((tip.x - 180.0).abs() < 1.0e-9);
/// assert!(tip.y.abs() < 1.0e-9);
/// ```
#[must_use]
pub fn solve_forward(config: &ArmConfig, angles: JointAngles) -> Point2D {
    solve_forward_pose(config, angles).end_effector
}

/// Compute the elbow and end-effector positions for the given joint angles.
///
/// The end-effector is identical to [`solve_forward`]; the elbow is the tip of the
/// first segment. Callers drawing the arm use this instead of re-deriving the chain.
#[must_use]
pub fn solve_forward_pose(config: &ArmConfig, angles: JointAngles) -> ArmPose {
    let (theta1, theta2) = angles.to_radians();
    let absolute2 = theta1 + theta2;

    let elbow = Point2D::new(
        config.length1() * theta1.cos(),
        config.length1() * theta1.sin(),
    );
    let end_effector = Point2D::new(
        elbow.x + config.length2() * absolute2.cos(),
        elbow.y + config.length2() * absolute2.sin(),
    );

    ArmPose {
        elbow,
        end_effector,
    }
}
