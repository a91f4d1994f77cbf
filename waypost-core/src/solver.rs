//! Solver trait seam between course data and planning implementations.

use crate::{Course, TraversalOutcome};

/// Plan the lowest-time traversal of a course.
///
/// Implementations must be deterministic for a given course and must not
/// carry state between calls. Solvers must be `Send + Sync` to operate
/// safely across threads.
pub trait CourseSolver: Send + Sync {
    /// Plan `course`, producing a complete traversal or an explicit
    /// unreachable outcome.
    fn plan(&self, course: &Course) -> TraversalOutcome;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Traversal, Waypoint};
    use geo::Coord;
    use rstest::rstest;

    struct DirectSolver;

    impl CourseSolver for DirectSolver {
        fn plan(&self, course: &Course) -> TraversalOutcome {
            TraversalOutcome::Complete(Traversal {
                path: vec![0, course.destination_index()],
                total_time: 0.0,
            })
        }
    }

    fn two_point_course() -> Course {
        Course::new(vec![
            Waypoint::new(Coord { x: 0.0, y: 0.0 }, 0.0),
            Waypoint::new(Coord { x: 100.0, y: 100.0 }, 0.0),
        ])
        .expect("course should validate")
    }

    #[rstest]
    fn solvers_are_usable_as_trait_objects() {
        let solver: Box<dyn CourseSolver> = Box::new(DirectSolver);
        let outcome = solver.plan(&two_point_course());
        assert_eq!(outcome.path(), [0, 1]);
    }
}
