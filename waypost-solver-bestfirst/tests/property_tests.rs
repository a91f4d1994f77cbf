#![expect(
    clippy::expect_used,
    reason = "property tests use expect for readable failures"
)]

//! Property-based tests for the best-first solver.
//!
//! These tests use `proptest` to assert invariants that must hold for all
//! valid courses, complementing the known-time regression tests.
//!
//! # Invariants tested
//!
//! - **Completion:** every validated course reaches the destination.
//! - **Path shape:** paths start at the origin index, end at the
//!   destination index, and never repeat an index.
//! - **Lower bound:** no reported total beats the direct hop from origin to
//!   destination.
//! - **Determinism:** planning the same course twice yields identical
//!   outcomes.

use std::collections::HashSet;

use geo::Coord;
use proptest::collection::vec;
use proptest::prelude::*;
use waypost_core::{Course, CourseSolver, TraversalOutcome, Waypoint};
use waypost_solver_bestfirst::BestFirstSolver;

/// Direct origin-to-destination hop: 50 * sqrt(2) + one dwell.
const DIRECT_HOP: f64 = 80.710_678_118_654_76;

fn interior_strategy(max: usize) -> impl Strategy<Value = Vec<Waypoint>> {
    vec(
        (0.0..150.0_f64, 0.0..150.0_f64, 0.0..60.0_f64)
            .prop_map(|(x, y, penalty)| Waypoint::new(Coord { x, y }, penalty)),
        1..max,
    )
}

fn course_with(interior: Vec<Waypoint>) -> Course {
    let mut waypoints = Vec::with_capacity(interior.len() + 2);
    waypoints.push(Waypoint::new(Coord { x: 0.0, y: 0.0 }, 0.0));
    waypoints.extend(interior);
    waypoints.push(Waypoint::new(Coord { x: 100.0, y: 100.0 }, 0.0));
    Course::new(waypoints).expect("generated course should validate")
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Every course with the standard sentinels reaches the destination:
    /// the origin expansion seeds the frontier with every index, so the
    /// unreachable outcome is reserved for degenerate cost models.
    #[test]
    fn destination_is_always_reached(interior in interior_strategy(8)) {
        let outcome = BestFirstSolver::new().plan(&course_with(interior));
        prop_assert!(matches!(outcome, TraversalOutcome::Complete(_)));
    }

    /// Paths start at index 0, end at the destination index, stay in
    /// bounds, and never repeat an index.
    #[test]
    fn paths_are_well_formed(interior in interior_strategy(8)) {
        let course = course_with(interior);
        let outcome = BestFirstSolver::new().plan(&course);
        let path = outcome.path();

        prop_assert_eq!(path.first().copied(), Some(0));
        prop_assert_eq!(path.last().copied(), Some(course.destination_index()));
        let mut seen = HashSet::new();
        for &index in path {
            prop_assert!(index < course.len(), "index {} out of bounds", index);
            prop_assert!(seen.insert(index), "duplicate index {} in {:?}", index, path);
        }
    }

    /// The reported total is finite and no better than the direct hop:
    /// travel over any path dominates the straight-line distance, every
    /// path carries at least two dwell arrivals, and penalties are
    /// non-negative.
    #[test]
    fn totals_respect_the_direct_hop_bound(interior in interior_strategy(8)) {
        let outcome = BestFirstSolver::new().plan(&course_with(interior));
        let total = outcome.total_time();
        prop_assert!(total.is_finite());
        prop_assert!(
            total >= DIRECT_HOP - 1e-9,
            "total {} beats the direct hop {}",
            total,
            DIRECT_HOP
        );
    }

    /// Planning is pure: repeated calls on the same course agree exactly.
    #[test]
    fn planning_is_deterministic(interior in interior_strategy(8)) {
        let course = course_with(interior);
        let solver = BestFirstSolver::new();
        prop_assert_eq!(solver.plan(&course), solver.plan(&course));
    }
}
