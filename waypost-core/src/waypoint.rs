//! Waypoints a vehicle may visit.

use geo::Coord;

/// A 2-D point the vehicle may visit, carrying a time penalty charged
/// whenever the point is left out of the final traversal.
///
/// # Examples
///
/// ```
/// use geo::Coord;
/// use waypost_core::Waypoint;
///
/// let waypoint = Waypoint::new(Coord { x: 10.0, y: 0.0 }, 5.0);
/// assert_eq!(waypoint.penalty, 5.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Waypoint {
    /// Planar position in distance units.
    pub location: Coord<f64>,
    /// Time charged when the waypoint is skipped.
    pub penalty: f64,
}

impl Waypoint {
    /// Construct a waypoint at `location` with the given skip penalty.
    #[must_use]
    pub const fn new(location: Coord<f64>, penalty: f64) -> Self {
        Self { location, penalty }
    }
}
