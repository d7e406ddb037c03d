use anyhow::bail;
use serde::Serialize;
use twolink::{
    solve_forward_pose, solve_inverse_with, ArmConfig, ArmPose, ElbowBranch, IKResult,
    JointAngles, Point2D,
};

use crate::cli::Command;

/// Result of one solver invocation, with the inputs that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum Summary {
    /// Forward kinematics run.
    Forward {
        /// Segment lengths used.
        arm: ArmConfig,
        /// Requested joint angles.
        angles: JointAngles,
        /// Resulting joint positions.
        pose: ArmPose,
    },
    /// Inverse kinematics run.
    Inverse {
        /// Segment lengths used.
        arm: ArmConfig,
        /// Requested end-effector position.
        target: Point2D,
        /// Requested elbow branch.
        branch: ElbowBranch,
        /// Solver outcome.
        result: IKResult,
        /// Joint positions for the solved angles, absent when unreachable.
        pose: Option<ArmPose>,
    },
}

impl Summary {
    /// Whether the run produced a usable answer.
    pub fn is_success(&self) -> bool {
        match self {
            Summary::Forward { .. } => true,
            Summary::Inverse { result, .. } => result.is_solved(),
        }
    }
}

/// Turn a finished run into the process outcome.
///
/// The report is printed before this is called, so an unreachable target still shows
/// up on stdout while the process exits with a failure status.
pub fn ensure_success(summary: &Summary) -> anyhow::Result<()> {
    if !summary.is_success() {
        bail!("Target lies outside the reachable workspace");
    }
    Ok(())
}

/// Run the solver selected by `command` against `arm`.
///
/// The inverse run feeds its solved angles back through forward kinematics so the
/// report can show where each joint ends up.
pub fn run(arm: &ArmConfig, command: Command) -> Summary {
    match command {
        Command::Forward { angle1, angle2 } => {
            let angles = JointAngles::new(angle1, angle2);
            log::info!("Solving forward kinematics for {angle1:.2}°, {angle2:.2}°");
            Summary::Forward {
                arm: *arm,
                angles,
                pose: solve_forward_pose(arm, angles),
            }
        }
        Command::Inverse { x, y, elbow } => {
            let target = Point2D::new(x, y);
            let branch = ElbowBranch::from(elbow);
            log::info!("Solving inverse kinematics for ({x:.2}, {y:.2}), {branch:?}");
            let result = solve_inverse_with(arm, target, branch);
            Summary::Inverse {
                arm: *arm,
                target,
                branch,
                result,
                pose: result.angles().map(|angles| solve_forward_pose(arm, angles)),
            }
        }
    }
}
