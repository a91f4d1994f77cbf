//! Best-first search over waypoint-visitation states.
//!
//! The frontier is a cost-ordered min-heap with lazy deletion: entries for
//! indices already finalized are discarded on pop instead of being
//! decreased in place. A least-cost table gates pushes so dominated
//! branches never enter the frontier, and the first pop of the destination
//! index is accepted as optimal.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

use waypost_core::{Course, CourseSolver, Traversal, TraversalOutcome};

use crate::cost::{self, CostModel};

/// Best-first course solver with memoized least-cost pruning.
///
/// # Examples
///
/// ```
/// use geo::Coord;
/// use waypost_core::{Course, CourseError, CourseSolver, Waypoint};
/// use waypost_solver_bestfirst::BestFirstSolver;
///
/// let course = Course::new(vec![
///     Waypoint::new(Coord { x: 0.0, y: 0.0 }, 0.0),
///     Waypoint::new(Coord { x: 100.0, y: 100.0 }, 0.0),
/// ])?;
/// let outcome = BestFirstSolver::new().plan(&course);
/// assert!((outcome.total_time() - 80.710_678).abs() < 0.001);
/// # Ok::<(), CourseError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct BestFirstSolver {
    cost: CostModel,
}

impl BestFirstSolver {
    /// Construct a solver with the default cost model.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Construct a solver with an explicit cost model.
    #[must_use]
    pub const fn with_cost_model(cost: CostModel) -> Self {
        Self { cost }
    }
}

/// A candidate path prefix awaiting expansion.
struct Frontier {
    cost: f64,
    index: usize,
    path: Vec<usize>,
}

impl PartialEq for Frontier {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Frontier {}

impl PartialOrd for Frontier {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Frontier {
    // BinaryHeap is a max-heap; reverse the comparison so the cheapest
    // state surfaces first. Cost ties break on index only to keep runs
    // deterministic.
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .total_cmp(&self.cost)
            .then_with(|| other.index.cmp(&self.index))
    }
}

impl CourseSolver for BestFirstSolver {
    fn plan(&self, course: &Course) -> TraversalOutcome {
        let waypoints = course.waypoints();
        let destination = course.destination_index();
        let mut visited = vec![false; waypoints.len()];
        let mut least_cost: HashMap<usize, f64> = HashMap::new();
        let mut frontier = BinaryHeap::new();
        frontier.push(Frontier {
            cost: 0.0,
            index: 0,
            path: vec![0],
        });

        let mut optimal: Option<Vec<usize>> = None;
        while let Some(state) = frontier.pop() {
            if visited[state.index] {
                // Stale duplicate; lazy deletion.
                continue;
            }
            visited[state.index] = true;

            if state.index == destination {
                log::debug!(
                    "destination finalized at search cost {:.3} via {:?}",
                    state.cost,
                    state.path
                );
                optimal = Some(state.path);
                break;
            }

            let current = waypoints[state.index];
            for (next, candidate) in waypoints.iter().enumerate() {
                if visited[next] {
                    continue;
                }
                let hop = self.cost.travel_time(current.location, candidate.location);
                let discount =
                    cost::backtrack_discount(course, state.index, next).unwrap_or(0.0);
                let modifier = cost::skip_modifier(course, &state.path, next);
                let new_cost = state.cost + hop + modifier - discount;
                if least_cost
                    .get(&next)
                    .is_none_or(|&best| new_cost < best)
                {
                    least_cost.insert(next, new_cost);
                    let mut path = state.path.clone();
                    path.push(next);
                    frontier.push(Frontier {
                        cost: new_cost,
                        index: next,
                        path,
                    });
                }
            }
        }

        match optimal {
            Some(path) => {
                let total_time = self.cost.total_time(course, &path);
                TraversalOutcome::Complete(Traversal { path, total_time })
            }
            None => {
                log::warn!("frontier drained before reaching the destination");
                TraversalOutcome::Unreachable {
                    total_time: self.cost.total_time(course, &[]),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests;
