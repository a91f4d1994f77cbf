//! Validated waypoint courses.
//!
//! A course is an ordered waypoint list whose first entry is the origin
//! sentinel and whose last entry is the destination. Validation happens at
//! construction so solvers can rely on the invariants without re-checking.

use thiserror::Error;

use crate::Waypoint;

/// An ordered, validated list of waypoints.
///
/// Index `0` is the origin and the last index is the destination; both are
/// sentinels supplied by the caller. Every coordinate and skip penalty is
/// finite and non-negative.
///
/// # Examples
///
/// ```
/// use geo::Coord;
/// use waypost_core::{Course, CourseError, Waypoint};
///
/// let course = Course::new(vec![
///     Waypoint::new(Coord { x: 0.0, y: 0.0 }, 0.0),
///     Waypoint::new(Coord { x: 100.0, y: 100.0 }, 0.0),
/// ])?;
/// assert_eq!(course.len(), 2);
/// assert_eq!(course.destination_index(), 1);
/// # Ok::<(), CourseError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Course {
    waypoints: Vec<Waypoint>,
}

/// Errors returned by [`Course::new`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CourseError {
    /// Fewer than two waypoints were supplied.
    #[error("course requires an origin and a destination, got {count} waypoints")]
    TooFewWaypoints {
        /// Number of waypoints supplied.
        count: usize,
    },
    /// A coordinate was negative or not finite.
    #[error("waypoint {index} has a negative or non-finite coordinate")]
    InvalidCoordinate {
        /// Index of the offending waypoint.
        index: usize,
    },
    /// A skip penalty was negative or not finite.
    #[error("waypoint {index} has a negative or non-finite skip penalty")]
    InvalidPenalty {
        /// Index of the offending waypoint.
        index: usize,
    },
}

impl Course {
    /// Validate and construct a course.
    pub fn new(waypoints: Vec<Waypoint>) -> Result<Self, CourseError> {
        if waypoints.len() < 2 {
            return Err(CourseError::TooFewWaypoints {
                count: waypoints.len(),
            });
        }
        for (index, waypoint) in waypoints.iter().enumerate() {
            let coords_valid = waypoint.location.x.is_finite()
                && waypoint.location.y.is_finite()
                && waypoint.location.x >= 0.0
                && waypoint.location.y >= 0.0;
            if !coords_valid {
                return Err(CourseError::InvalidCoordinate { index });
            }
            if !waypoint.penalty.is_finite() || waypoint.penalty < 0.0 {
                return Err(CourseError::InvalidPenalty { index });
            }
        }
        Ok(Self { waypoints })
    }

    /// All waypoints in index order.
    #[must_use]
    pub fn waypoints(&self) -> &[Waypoint] {
        &self.waypoints
    }

    /// Number of waypoints, always at least two.
    #[must_use]
    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    /// The origin sentinel at index `0`.
    #[must_use]
    pub fn origin(&self) -> &Waypoint {
        // Length >= 2 is guaranteed by construction.
        &self.waypoints[0]
    }

    /// Index of the destination sentinel.
    #[must_use]
    pub fn destination_index(&self) -> usize {
        self.waypoints.len() - 1
    }
}
