//! Error types produced while configuring an arm.

use std::fmt;

use thiserror::Error;

/// One of the two rigid segments of the arm.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Segment {
    /// Segment between the base joint and the elbow.
    First,
    /// Segment between the elbow and the end-effector.
    Second,
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Segment::First => write!(f, "length1"),
            Segment::Second => write!(f, "length2"),
        }
    }
}

/// Error returned when an [`ArmConfig`](crate::ArmConfig) describes degenerate geometry.
///
/// A segment of zero or negative length collapses the chain, and a non-finite length
/// poisons every trigonometric step downstream, so both are rejected before any solve.
///
/// # Examples
///
/// ```
/// use twolink::{ArmConfig, ConfigError, Segment};
///
/// let error = ArmConfig::new(100.0, 0.0).expect_err("zero length is rejected");
/// assert_eq!(
///     error,
///     ConfigError::NonPositiveLength {
///         segment: Segment::Second,
///         length: 0.0,
///     }
/// );
/// ```
#[derive(Clone, Copy, Debug, Error, PartialEq)]
pub enum ConfigError {
    /// Returned when a segment length is zero or negative.
    #[error("{segment} must be positive (received {length})")]
    NonPositiveLength {
        /// Segment carrying the rejected length.
        segment: Segment,
        /// Rejected length.
        length: f64,
    },
    /// Returned when a segment length is NaN or infinite.
    #[error("{segment} must be finite (received {length})")]
    NonFiniteLength {
        /// Segment carrying the rejected length.
        segment: Segment,
        /// Rejected length.
        length: f64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_segment() {
        let error = ConfigError::NonPositiveLength {
            segment: Segment::First,
            length: -2.0,
        };
        assert_eq!(error.to_string(), "length1 must be positive (received -2)");

        let error = ConfigError::NonFiniteLength {
            segment: Segment::Second,
            length: f64::INFINITY,
        };
        assert_eq!(error.to_string(), "length2 must be finite (received inf)");
    }
}
