//! Cost helpers for ranking search states and reporting traversal totals.
//!
//! Two different formulas live here. [`CostModel::total_time`] produces the
//! reported answer: travel over the chosen hops, one dwell correction, and
//! the penalty of every waypoint the path never visits. The search ranking
//! built from [`CostModel::travel_time`], [`skip_modifier`], and
//! [`backtrack_discount`] instead applies skip penalties incrementally per
//! extension. The asymmetry is part of the contract and must not be
//! reconciled.

use geo::Coord;
use waypost_core::Course;

/// Travel-speed and dwell parameters shared by the cost helpers.
///
/// # Examples
///
/// ```
/// use geo::Coord;
/// use waypost_solver_bestfirst::CostModel;
///
/// let model = CostModel::default();
/// let hop = model.travel_time(Coord { x: 0.0, y: 0.0 }, Coord { x: 6.0, y: 8.0 });
/// assert!((hop - 15.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CostModel {
    /// Distance units covered per time unit.
    pub speed: f64,
    /// Fixed on-site delay charged on every arrival.
    pub dwell_time: f64,
}

impl Default for CostModel {
    fn default() -> Self {
        Self {
            speed: 2.0,
            dwell_time: 10.0,
        }
    }
}

pub(crate) fn distance(from: Coord<f64>, to: Coord<f64>) -> f64 {
    (to.x - from.x).hypot(to.y - from.y)
}

impl CostModel {
    /// Time to travel from `from` to `to`, including the arrival dwell.
    #[must_use]
    pub fn travel_time(&self, from: Coord<f64>, to: Coord<f64>) -> f64 {
        distance(from, to) / self.speed + self.dwell_time
    }

    /// Total reported time for `path` through `course`.
    ///
    /// Sums travel over consecutive hops starting from the origin
    /// coordinates, subtracts one dwell term, and adds the skip penalty of
    /// every waypoint absent from the path. An empty path therefore reports
    /// the sum of all penalties less one dwell.
    #[must_use]
    pub fn total_time(&self, course: &Course, path: &[usize]) -> f64 {
        let waypoints = course.waypoints();
        let mut elapsed = 0.0;
        let mut position = course.origin().location;
        for &index in path {
            if let Some(waypoint) = waypoints.get(index) {
                elapsed += self.travel_time(position, waypoint.location);
                position = waypoint.location;
            }
        }
        // The zero-length hop onto the origin sentinel double-counts one
        // dwell term.
        elapsed -= self.dwell_time;
        let skipped: f64 = waypoints
            .iter()
            .enumerate()
            .filter(|&(index, _)| !path.contains(&index))
            .map(|(_, waypoint)| waypoint.penalty)
            .sum();
        elapsed + skipped
    }
}

/// Discount earned by moving no farther from the origin.
///
/// Returns `None` when `next` has no waypoint two positions earlier or when
/// an index is out of range; such hops never earn a discount. Otherwise the
/// discount equals the skip penalty of `next` whenever `next` lies no
/// farther from the origin than the current waypoint.
pub(crate) fn backtrack_discount(course: &Course, current: usize, next: usize) -> Option<f64> {
    next.checked_sub(2)?;
    let waypoints = course.waypoints();
    let origin = course.origin().location;
    let current_waypoint = waypoints.get(current)?;
    let next_waypoint = waypoints.get(next)?;
    let reaches_back =
        distance(origin, next_waypoint.location) <= distance(origin, current_waypoint.location);
    reaches_back.then_some(next_waypoint.penalty)
}

/// Net penalty adjustment for extending `path` to `next`.
///
/// Sums the penalties of every index up to and including `next` that the
/// path has not visited, then subtracts the penalty of `next` itself.
pub(crate) fn skip_modifier(course: &Course, path: &[usize], next: usize) -> f64 {
    let waypoints = course.waypoints();
    let skipped: f64 = waypoints
        .iter()
        .enumerate()
        .take(next + 1)
        .filter(|&(index, _)| !path.contains(&index))
        .map(|(_, waypoint)| waypoint.penalty)
        .sum();
    skipped - waypoints.get(next).map_or(0.0, |waypoint| waypoint.penalty)
}
