//! Value types describing the arm, its joint angles and positions in its plane.

use nalgebra::{Point2, Vector2};
use serde::{Deserialize, Serialize};

use crate::angle::{degrees_to_radians, normalize_degrees};
use crate::errors::{ConfigError, Segment};

/// Position in the plane of the arm.
///
/// The origin is the fixed base joint, X points to the right and Y points up.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Point2D {
    /// Distance along the X axis.
    pub x: f64,
    /// Distance along the Y axis.
    pub y: f64,
}

impl Point2D {
    /// Create a [`Point2D`] with explicit coordinates.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Distance from the base joint.
    #[must_use]
    pub fn norm(self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Distance to another point.
    ///
    /// Evaluated with `hypot`, so coordinates near the limits of `f64` do not overflow.
    #[must_use]
    pub fn distance_to(self, other: Point2D) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    /// Convert the point into an algebraic vector from the origin.
    #[must_use]
    pub fn to_vector(self) -> Vector2<f64> {
        Vector2::new(self.x, self.y)
    }
}

impl Default for Point2D {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

impl From<Point2<f64>> for Point2D {
    fn from(value: Point2<f64>) -> Self {
        Self::new(value.x, value.y)
    }
}

impl From<Point2D> for Point2<f64> {
    fn from(value: Point2D) -> Self {
        Point2::new(value.x, value.y)
    }
}

/// Joint angles of the arm in degrees.
///
/// `angle1` is measured counter-clockwise from the positive X axis. `angle2` is measured
/// relative to the direction of the first segment, so the second segment points along
/// `angle1 + angle2`. Any real value is accepted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct JointAngles {
    /// Base joint angle in degrees.
    pub angle1: f64,
    /// Elbow joint angle in degrees, relative to the first segment.
    pub angle2: f64,
}

impl JointAngles {
    /// Create [`JointAngles`] from two values in degrees.
    #[must_use]
    pub const fn new(angle1: f64, angle2: f64) -> Self {
        Self { angle1, angle2 }
    }

    /// Both angles in radians, in the same order.
    #[must_use]
    pub fn to_radians(self) -> (f64, f64) {
        (
            degrees_to_radians(self.angle1),
            degrees_to_radians(self.angle2),
        )
    }

    /// Both angles wrapped into `(-180, 180]`.
    ///
    /// # Examples
    /// ```
    /// use twolink::JointAngles;
    ///
    /// let wrapped = JointAngles::new(370.0, -200.0).normalized();
    /// assert_eq!(wrapped, JointAngles::new(10.0, 160.0));
    /// ```
    #[must_use]
    pub fn normalized(self) -> Self {
        Self::new(normalize_degrees(self.angle1), normalize_degrees(self.angle2))
    }
}

/// Lengths of the two rigid segments.
///
/// Both lengths are strictly positive and finite. The only way to obtain an
/// [`ArmConfig`] is through [`ArmConfig::new`] or deserialization, which share the
/// same validation.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawArmConfig")]
pub struct ArmConfig {
    /// Length of the segment attached to the base joint.
    length1: f64,
    /// Length of the segment carrying the end-effector.
    length2: f64,
}

/// Unvalidated shape of an [`ArmConfig`] as it appears in serialized form.
#[derive(Deserialize)]
struct RawArmConfig {
    /// First segment length.
    length1: f64,
    /// Second segment length.
    length2: f64,
}

impl TryFrom<RawArmConfig> for ArmConfig {
    type Error = ConfigError;

    fn try_from(raw: RawArmConfig) -> Result<Self, Self::Error> {
        ArmConfig::new(raw.length1, raw.length2)
    }
}

impl ArmConfig {
    /// Create an arm with the given segment lengths.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NonFiniteLength`] when a length is NaN or infinite and
    /// [`ConfigError::NonPositiveLength`] when a length is zero or negative.
    ///
    /// # Examples
    /// ```
    /// use twolink::ArmConfig;
    ///
    /// let arm = ArmConfig::new(100.0, 80.0).expect("valid lengths");
    /// assert_eq!(arm.max_reach(), 180.0);
    /// assert_eq!(arm.min_reach(), 20.0);
    /// assert!(ArmConfig::new(-1.0, 80.0).is_err());
    /// ```
    pub fn new(length1: f64, length2: f64) -> Result<Self, ConfigError> {
        validate_length(Segment::First, length1)?;
        validate_length(Segment::Second, length2)?;
        Ok(Self { length1, length2 })
    }

    /// Length of the first segment.
    #[must_use]
    pub const fn length1(&self) -> f64 {
        self.length1
    }

    /// Length of the second segment.
    #[must_use]
    pub const fn length2(&self) -> f64 {
        self.length2
    }

    /// Distance from the base at full extension.
    #[must_use]
    pub fn max_reach(&self) -> f64 {
        self.length1 + self.length2
    }

    /// Distance from the base when fully folded.
    #[must_use]
    pub fn min_reach(&self) -> f64 {
        (self.length1 - self.length2).abs()
    }

    /// Whether `target` lies inside the reachable annulus `[min_reach, max_reach]`.
    ///
    /// This is the same test the inverse solver applies: both bounds carry a slack of
    /// `1e-9` of the maximum reach so targets produced by forward kinematics at full
    /// extension or full fold are admitted. The base joint itself is reachable only
    /// when both segments have exactly the same length.
    ///
    /// # Examples
    /// ```
    /// use twolink::{point, ArmConfig};
    ///
    /// let arm = ArmConfig::new(100.0, 80.0).expect("valid lengths");
    /// assert!(arm.is_reachable(&point(180.0, 0.0)));
    /// assert!(!arm.is_reachable(&point(181.0, 0.0)));
    /// ```
    #[must_use]
    pub fn is_reachable(&self, target: &Point2D) -> bool {
        self.scaled(target).is_reachable()
    }

    /// Express the arm and `target` in units of the longer segment.
    ///
    /// Joint angles are invariant under uniform scaling, and working with ratios
    /// keeps every square and product in range for any finite positive length.
    pub(crate) fn scaled(&self, target: &Point2D) -> ScaledProblem {
        let scale = self.length1.max(self.length2);
        let x = target.x / scale;
        let y = target.y / scale;
        ScaledProblem {
            length1: self.length1 / scale,
            length2: self.length2 / scale,
            x,
            y,
            distance: x.hypot(y),
        }
    }
}

/// Relative slack applied to both reach bounds, scaled by the maximum reach.
const REACH_TOLERANCE: f64 = 1.0e-9;

/// An arm and a target divided by the longer segment length.
///
/// Both lengths lie in `(0, 1]`, so the law of cosines can be evaluated without
/// overflow or underflow regardless of the units the caller works in.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct ScaledProblem {
    /// First segment length relative to the longer segment.
    pub(crate) length1: f64,
    /// Second segment length relative to the longer segment.
    pub(crate) length2: f64,
    /// Target X relative to the longer segment.
    pub(crate) x: f64,
    /// Target Y relative to the longer segment.
    pub(crate) y: f64,
    /// Distance from the base to the target relative to the longer segment.
    pub(crate) distance: f64,
}

impl ScaledProblem {
    /// Whether the target lies in the reachable annulus, with rounding slack.
    ///
    /// Non-finite targets fail every comparison and are never reachable.
    pub(crate) fn is_reachable(&self) -> bool {
        if self.distance == 0.0 {
            return self.length1 == self.length2;
        }
        let max_reach = self.length1 + self.length2;
        let min_reach = (self.length1 - self.length2).abs();
        let slack = REACH_TOLERANCE * max_reach;
        self.distance >= min_reach - slack && self.distance <= max_reach + slack
    }
}

/// Reject lengths that make the chain degenerate.
fn validate_length(segment: Segment, length: f64) -> Result<(), ConfigError> {
    if !length.is_finite() {
        return Err(ConfigError::NonFiniteLength { segment, length });
    }
    if length <= 0.0 {
        return Err(ConfigError::NonPositiveLength { segment, length });
    }
    Ok(())
}

/// Positions of the moving joints for one set of joint angles.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ArmPose {
    /// Position of the elbow joint, at the tip of the first segment.
    pub elbow: Point2D,
    /// Position of the end-effector, at the tip of the second segment.
    pub end_effector: Point2D,
}

/// Convenience helper for creating [`Point2D`] instances.
///
/// # Examples
/// ```
/// use twolink::point;
///
/// let target = point(100.0, 50.0);
/// assert_eq!(target.y, 50.0);
/// ```
#[must_use]
pub const fn point(x: f64, y: f64) -> Point2D {
    Point2D::new(x, y)
}

/// Convenience helper for creating [`JointAngles`] instances.
///
/// # Examples
/// ```
/// use twolink::angles;
///
/// let pose = angles(30.0, 45.0);
/// assert_eq!(pose.angle2, 45.0);
/// ```
#[must_use]
pub const fn angles(angle1: f64, angle2: f64) -> JointAngles {
    JointAngles::new(angle1, angle2)
}
