//! Angle unit conversion shared by the forward and inverse solvers.
//!
//! Angles cross the public API in degrees and are evaluated in radians. The
//! conversions go through [`uom`] so the unit bookkeeping lives in one place.

use uom::si::{
    angle::{degree, radian},
    f64::Angle,
};

/// Convert an angle from degrees to radians.
///
/// # Examples
/// ```
/// use twolink::degrees_to_radians;
///
/// let quarter = degrees_to_radians(90.0);
/// assert!((quarter - std::f64::consts::FRAC_PI_2).abs() < 1.0e-12);
/// ```
#[must_use]
pub fn degrees_to_radians(degrees: f64) -> f64 {
    Angle::new::<degree>(degrees).get::<radian>()
}

/// Convert an angle from radians to degrees.
#[must_use]
pub fn radians_to_degrees(radians: f64) -> f64 {
    Angle::new::<radian>(radians).get::<degree>()
}

/// Wrap an angle in degrees into the half-open interval `(-180, 180]`.
///
/// The solvers never normalize on their own; this is for callers that want a
/// canonical value for display or comparison.
///
/// # Examples
/// ```
/// use twolink::normalize_degrees;
///
/// assert_eq!(normalize_degrees(270.0), -90.0);
/// assert_eq!(normalize_degrees(-180.0), 180.0);
/// ```
#[must_use]
pub fn normalize_degrees(degrees: f64) -> f64 {
    let wrapped = degrees.rem_euclid(360.0);
    if wrapped > 180.0 {
        wrapped - 360.0
    } else {
        wrapped
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn converts_between_units() {
        assert!((degrees_to_radians(180.0) - PI).abs() < 1.0e-12);
        assert!((degrees_to_radians(-45.0) + PI / 4.0).abs() < 1.0e-12);
        assert!((radians_to_degrees(PI) - 180.0).abs() < 1.0e-9);
        assert!((radians_to_degrees(degrees_to_radians(123.456)) - 123.456).abs() < 1.0e-9);
    }

    #[test]
    fn normalization_covers_both_directions() {
        assert_eq!(normalize_degrees(0.0), 0.0);
        assert_eq!(normalize_degrees(180.0), 180.0);
        assert_eq!(normalize_degrees(540.0), 180.0);
        assert_eq!(normalize_degrees(-190.0), 170.0);
        assert_eq!(normalize_degrees(725.0), 5.0);
        assert_eq!(normalize_degrees(-360.0), 0.0);
    }
}
