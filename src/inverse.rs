//! Inverse kinematics: end-effector position to joint angles.
//!
//! The two-link chain closes a triangle with the line from the base to the target, so
//! both joint angles follow from the law of cosines. Every reachable target away from
//! the workspace boundary has two mirror solutions; [`ElbowBranch`] selects one.

use serde::{Deserialize, Serialize};

use crate::angle::radians_to_degrees;
use crate::geometry::{ArmConfig, JointAngles, Point2D};

/// Which of the two mirror configurations the inverse solver returns.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElbowBranch {
    /// Positive elbow bend, `angle2` in `[0, 180]` degrees.
    #[default]
    ElbowUp,
    /// Negative elbow bend, `angle2` in `[-180, 0]` degrees.
    ElbowDown,
}

/// Outcome of an inverse kinematics solve.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum IKResult {
    /// The target is reachable with these joint angles.
    Solved(JointAngles),
    /// The target lies outside the reachable workspace.
    Unreachable,
}

impl IKResult {
    /// Whether a solution was found.
    #[must_use]
    pub const fn is_solved(&self) -> bool {
        matches!(self, IKResult::Solved(_))
    }

    /// The solved joint angles, if any.
    #[must_use]
    pub const fn angles(&self) -> Option<JointAngles> {
        match self {
            IKResult::Solved(angles) => Some(*angles),
            IKResult::Unreachable => None,
        }
    }
}

/// Compute the elbow-up joint angles that place the end-effector at `target`.
///
/// Equivalent to [`solve_inverse_with`] with [`ElbowBranch::ElbowUp`].
///
/// # Examples
/// ```
/// use twolink::{point, solve_forward, solve_inverse, ArmConfig, IKResult};
///
/// let arm = ArmConfig::new(100.0, 80.0).expect("valid lengths");
/// let angles = solve_inverse(&arm, point(100.0, 50.0))
///     .angles()
///     .expect("target is inside the workspace");
/// assert!((0.0..=180.0).contains(&angles.angle2));
///
/// let tip = solve_forward(&arm, angles);
/// assert!((tip.x - 100.0).abs() < 1.0e-6);
/// assert!((tip.y - 50.0).abs() < 1.0e-6);
///
/// assert_eq!(solve_inverse(&arm, point(181.0, 0.0)), IKResult::Unreachable);
/// ```
#[must_use]
pub fn solve_inverse(config: &ArmConfig, target: Point2D) -> IKResult {
    solve_inverse_with(config, target, ElbowBranch::default())
}

/// Compute the joint angles on the requested branch that place the end-effector at
/// `target`.
///
/// Returns [`IKResult::Unreachable`] when the distance from the base falls outside
/// `[|l1 - l2|, l1 + l2]`, or when the target is not a finite point. A solved result
/// never carries NaN or infinite angles.
///
/// Both reach bounds admit a slack of `1e-9` of the maximum reach, matching
/// [`ArmConfig::is_reachable`]. The problem is solved in units of the longer segment,
/// so any finite positive lengths work without overflow or underflow.
///
/// A target at the base is only reachable when both segments have exactly the same length.
/// The arm is then fully folded and any base angle works; the solver reports a base
/// angle of zero.
#[must_use]
pub fn solve_inverse_with(config: &ArmConfig, target: Point2D, branch: ElbowBranch) -> IKResult {
    let problem = config.scaled(&target);
    let l1 = problem.length1;
    let l2 = problem.length2;
    let distance = problem.distance;

    if !problem.is_reachable() {
        log::debug!(
            "IK target ({:.2}, {:.2}) unreachable: distance {:.2} outside [{:.2}, {:.2}]",
            target.x,
            target.y,
            target.x.hypot(target.y),
            config.min_reach(),
            config.max_reach()
        );
        return IKResult::Unreachable;
    }

    let angles = if distance == 0.0 {
        log::trace!("IK target at base, arm fully folded");
        folded_at_base(branch)
    } else {
        let distance_squared = distance.powi(2);
        let cos_theta2 =
            ((distance_squared - l1.powi(2) - l2.powi(2)) / (2.0 * l1 * l2)).clamp(-1.0, 1.0);
        let theta2 = cos_theta2.acos();
        log::trace!(
            "IK theta2:  {:5.2}rad {:5.2}°",
            theta2,
            radians_to_degrees(theta2)
        );

        let cos_phi =
            ((l1.powi(2) + distance_squared - l2.powi(2)) / (2.0 * l1 * distance)).clamp(-1.0, 1.0);
        let phi = cos_phi.acos();
        log::trace!("IK phi:     {:5.2}rad {:5.2}°", phi, radians_to_degrees(phi));

        let alpha = problem.y.atan2(problem.x);
        log::trace!(
            "IK alpha:   {:5.2}rad {:5.2}°",
            alpha,
            radians_to_degrees(alpha)
        );

        let (theta1, theta2) = match branch {
            ElbowBranch::ElbowUp => (alpha - phi, theta2),
            ElbowBranch::ElbowDown => (alpha + phi, -theta2),
        };

        JointAngles::new(radians_to_degrees(theta1), radians_to_degrees(theta2))
    };

    log::debug!(
        "IK target ({:.2}, {:.2}) solved: angle1 {:.2}°, angle2 {:.2}°",
        target.x,
        target.y,
        angles.angle1,
        angles.angle2
    );

    IKResult::Solved(angles)
}

/// Joint angles for a target coinciding with the base joint.
fn folded_at_base(branch: ElbowBranch) -> JointAngles {
    match branch {
        ElbowBranch::ElbowUp => JointAngles::new(0.0, 180.0),
        ElbowBranch::ElbowDown => JointAngles::new(0.0, -180.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forward::solve_forward;
    use crate::geometry::point;

    const TOLERANCE: f64 = 1.0e-6;

    fn arm() -> ArmConfig {
        ArmConfig::new(100.0, 80.0).expect("valid lengths")
    }

    fn solved(result: IKResult) -> JointAngles {
        result.angles().expect("target is reachable")
    }

    #[test]
    fn full_extension_has_straight_elbow() {
        let angles = solved(solve_inverse(&arm(), point(180.0, 0.0)));
        assert!(angles.angle2.abs() < TOLERANCE);
        assert!(angles.angle1.abs() < TOLERANCE);

        let angles = solved(solve_inverse(&arm(), point(0.0, 180.0)));
        assert!(angles.angle2.abs() < TOLERANCE);
        assert!((angles.angle1 - 90.0).abs() < TOLERANCE);
    }

    #[test]
    fn full_fold_has_reversed_elbow() {
        // acos is steep next to 1, so the base angle only holds to a looser bound here.
        let angles = solved(solve_inverse(&arm(), point(20.0, 0.0)));
        assert!((angles.angle2 - 180.0).abs() < TOLERANCE);
        assert!(angles.angle1.abs() < 1.0e-3);

        let angles = solved(solve_inverse(&arm(), point(-20.0, 0.0)));
        assert!((angles.angle2 - 180.0).abs() < TOLERANCE);
        assert!((angles.angle1 - 180.0).abs() < 1.0e-3);
    }

    #[test]
    fn just_outside_the_annulus_is_unreachable() {
        assert_eq!(solve_inverse(&arm(), point(181.0, 0.0)), IKResult::Unreachable);
        assert_eq!(solve_inverse(&arm(), point(19.0, 0.0)), IKResult::Unreachable);
        assert_eq!(solve_inverse(&arm(), point(0.0, -181.0)), IKResult::Unreachable);
        assert_eq!(
            solve_inverse_with(&arm(), point(0.0, 19.0), ElbowBranch::ElbowDown),
            IKResult::Unreachable
        );
    }

    #[test]
    fn base_is_unreachable_for_unequal_segments() {
        assert_eq!(solve_inverse(&arm(), point(0.0, 0.0)), IKResult::Unreachable);
    }

    #[test]
    fn base_is_folded_for_equal_segments() {
        let arm = ArmConfig::new(50.0, 50.0).expect("valid lengths");
        assert_eq!(
            solve_inverse(&arm, point(0.0, 0.0)),
            IKResult::Solved(JointAngles::new(0.0, 180.0))
        );
        assert_eq!(
            solve_inverse_with(&arm, point(0.0, 0.0), ElbowBranch::ElbowDown),
            IKResult::Solved(JointAngles::new(0.0, -180.0))
        );
        let tip = solve_forward(&arm, JointAngles::new(0.0, 180.0));
        assert!(tip.norm() < TOLERANCE);
    }

    #[test]
    fn base_is_unreachable_for_nearly_equal_segments() {
        let arm = ArmConfig::new(50.0, 50.0 + 1.0e-9).expect("valid lengths");
        assert_eq!(solve_inverse(&arm, point(0.0, 0.0)), IKResult::Unreachable);
        assert_eq!(
            solve_inverse_with(&arm, point(0.0, 0.0), ElbowBranch::ElbowDown),
            IKResult::Unreachable
        );
    }

    #[test]
    fn solver_agrees_with_reachability_check() {
        let arm = arm();
        for angle1 in (-180..=180).step_by(30).map(f64::from) {
            for angle2 in [0.0, 180.0, 90.0] {
                let target = solve_forward(&arm, JointAngles::new(angle1, angle2));
                assert!(arm.is_reachable(&target));
                assert!(solve_inverse(&arm, target).is_solved());
            }
        }
        for target in [point(181.0, 0.0), point(0.0, 19.0), point(0.0, 0.0)] {
            assert!(!arm.is_reachable(&target));
            assert!(!solve_inverse(&arm, target).is_solved());
        }
    }

    #[test]
    fn equal_segments_reach_near_the_base() {
        let arm = ArmConfig::new(50.0, 50.0).expect("valid lengths");
        let target = point(0.5, -0.25);
        let angles = solved(solve_inverse(&arm, target));
        let tip = solve_forward(&arm, angles);
        assert!(tip.distance_to(target) < TOLERANCE);
    }

    #[test]
    fn concrete_target_matches_law_of_cosines() {
        let angles = solved(solve_inverse(&arm(), point(100.0, 50.0)));
        // cos(theta2) = (12500 - 16400) / 16000
        assert!((angles.angle2 - 104.108).abs() < 0.05);
        assert!((angles.angle1 + 17.379).abs() < 0.05);

        let tip = solve_forward(&arm(), angles);
        assert!((tip.x - 100.0).abs() < TOLERANCE);
        assert!((tip.y - 50.0).abs() < TOLERANCE);
    }

    #[test]
    fn elbow_down_mirrors_elbow_up() {
        let target = point(100.0, 50.0);
        let up = solved(solve_inverse_with(&arm(), target, ElbowBranch::ElbowUp));
        let down = solved(solve_inverse_with(&arm(), target, ElbowBranch::ElbowDown));

        assert!((up.angle2 + down.angle2).abs() < TOLERANCE);
        assert!(up.angle2 > 0.0);
        assert!(down.angle2 < 0.0);

        // Both base angles sit symmetrically around the bearing of the target.
        let bearing = radians_to_degrees(target.y.atan2(target.x));
        assert!(((up.angle1 + down.angle1) / 2.0 - bearing).abs() < TOLERANCE);

        let tip = solve_forward(&arm(), down);
        assert!(tip.distance_to(target) < TOLERANCE);
    }

    #[test]
    fn default_branch_is_elbow_up() {
        assert_eq!(ElbowBranch::default(), ElbowBranch::ElbowUp);
        let target = point(-40.0, 120.0);
        assert_eq!(
            solve_inverse(&arm(), target),
            solve_inverse_with(&arm(), target, ElbowBranch::ElbowUp)
        );
    }

    #[test]
    fn non_finite_targets_are_unreachable() {
        assert_eq!(solve_inverse(&arm(), point(f64::NAN, 0.0)), IKResult::Unreachable);
        assert_eq!(
            solve_inverse(&arm(), point(f64::INFINITY, 10.0)),
            IKResult::Unreachable
        );
    }

    #[test]
    fn result_accessors() {
        let result = IKResult::Solved(JointAngles::new(1.0, 2.0));
        assert!(result.is_solved());
        assert_eq!(result.angles(), Some(JointAngles::new(1.0, 2.0)));
        assert!(!IKResult::Unreachable.is_solved());
        assert_eq!(IKResult::Unreachable.angles(), None);
    }
}
