use std::fmt::Write;

use twolink::{ArmPose, IKResult};

use crate::solve::Summary;

/// Render a textual report of a solver run.
///
/// Angles are printed in degrees and positions in the arm frame (Y up), both to two
/// decimals. Mapping onto a drawing surface is left to whoever consumes the numbers.
#[must_use]
pub fn render_summary(summary: &Summary) -> String {
    let mut output = String::new();

    match summary {
        Summary::Forward { arm, angles, pose } => {
            writeln!(
                &mut output,
                "Forward kinematics (length1 = {:.2}, length2 = {:.2})",
                arm.length1(),
                arm.length2()
            )
            .expect("writing to string cannot fail");
            writeln!(
                &mut output,
                "Joint angles: angle1 = {:.2}°, angle2 = {:.2}°",
                angles.angle1, angles.angle2
            )
            .expect("writing to string cannot fail");
            render_pose(&mut output, pose);
        }
        Summary::Inverse {
            arm,
            target,
            branch,
            result,
            pose,
        } => {
            writeln!(
                &mut output,
                "Inverse kinematics (length1 = {:.2}, length2 = {:.2}, {:?})",
                arm.length1(),
                arm.length2(),
                branch
            )
            .expect("writing to string cannot fail");
            writeln!(
                &mut output,
                "Target: ({:.2}, {:.2})",
                target.x, target.y
            )
            .expect("writing to string cannot fail");

            match result {
                IKResult::Solved(angles) => {
                    writeln!(
                        &mut output,
                        "Joint angles: angle1 = {:.2}°, angle2 = {:.2}°",
                        angles.angle1, angles.angle2
                    )
                    .expect("writing to string cannot fail");
                    if let Some(pose) = pose {
                        render_pose(&mut output, pose);
                    }
                }
                IKResult::Unreachable => {
                    writeln!(
                        &mut output,
                        "Target is unreachable: distance {:.2} outside [{:.2}, {:.2}]",
                        target.norm(),
                        arm.min_reach(),
                        arm.max_reach()
                    )
                    .expect("writing to string cannot fail");
                }
            }
        }
    }

    output
}

/// Render a JSON document describing a solver run.
pub fn render_json(summary: &Summary) -> serde_json::Result<String> {
    serde_json::to_string_pretty(summary)
}

/// Append the joint positions of a pose.
fn render_pose(output: &mut String, pose: &ArmPose) {
    writeln!(
        output,
        "Elbow: ({:.2}, {:.2})",
        pose.elbow.x, pose.elbow.y
    )
    .expect("writing to string cannot fail");
    writeln!(
        output,
        "End-effector: ({:.2}, {:.2})",
        pose.end_effector.x, pose.end_effector.y
    )
    .expect("writing to string cannot fail");
}
