//! Tests for the best-first solver.

use super::*;
use geo::Coord;
use rstest::rstest;
use waypost_core::Waypoint;

const TOLERANCE: f64 = 0.001;

fn course(points: &[(f64, f64, f64)]) -> Course {
    Course::new(
        points
            .iter()
            .map(|&(x, y, penalty)| Waypoint::new(Coord { x, y }, penalty))
            .collect(),
    )
    .expect("test course should validate")
}

#[rstest]
fn trivial_course_is_a_single_hop() {
    let course = course(&[(0.0, 0.0, 0.0), (100.0, 100.0, 0.0)]);
    let outcome = BestFirstSolver::new().plan(&course);
    let expected = 50.0 * 2.0_f64.sqrt() + 10.0;
    assert!((outcome.total_time() - expected).abs() < TOLERANCE);
    assert_eq!(outcome.path(), [0, 1]);
}

#[rstest]
fn cheap_waypoints_near_the_origin_are_skipped() {
    let course = course(&[
        (0.0, 0.0, 0.0),
        (10.0, 0.0, 5.0),
        (10.0, 10.0, 5.0),
        (100.0, 100.0, 0.0),
    ]);
    let outcome = BestFirstSolver::new().plan(&course);
    assert!((outcome.total_time() - 90.710_678_118_654_76).abs() < TOLERANCE);
    assert_eq!(outcome.path(), [0, 3]);
}

#[rstest]
fn expensive_waypoint_on_the_diagonal_is_visited() {
    let course = course(&[(0.0, 0.0, 0.0), (50.0, 50.0, 100.0), (100.0, 100.0, 0.0)]);
    let outcome = BestFirstSolver::new().plan(&course);
    assert!((outcome.total_time() - 90.710_678_118_654_76).abs() < TOLERANCE);
    assert_eq!(outcome.path(), [0, 1, 2]);
}

#[rstest]
fn backtracking_pair_is_skipped_when_penalties_are_small() {
    let course = course(&[
        (0.0, 0.0, 0.0),
        (20.0, 0.0, 5.0),
        (10.0, 0.0, 8.0),
        (100.0, 100.0, 0.0),
    ]);
    let outcome = BestFirstSolver::new().plan(&course);
    assert!((outcome.total_time() - 93.710_678_118_654_76).abs() < TOLERANCE);
    assert_eq!(outcome.path(), [0, 3]);
}

#[rstest]
fn off_axis_detour_is_taken_for_a_large_penalty() {
    let course = course(&[(0.0, 0.0, 0.0), (80.0, 10.0, 30.0), (100.0, 100.0, 0.0)]);
    let outcome = BestFirstSolver::new().plan(&course);
    assert!((outcome.total_time() - 106.409_011_027_957_18).abs() < TOLERANCE);
    assert_eq!(outcome.path(), [0, 1, 2]);
}

#[rstest]
fn planning_is_idempotent() {
    let course = course(&[
        (0.0, 0.0, 0.0),
        (30.0, 30.0, 90.0),
        (60.0, 60.0, 80.0),
        (10.0, 90.0, 10.0),
        (100.0, 100.0, 0.0),
    ]);
    let solver = BestFirstSolver::new();
    let first = solver.plan(&course);
    let second = solver.plan(&course);
    assert_eq!(first, second);
    assert!((first.total_time() - 110.710_678_118_654_76).abs() < TOLERANCE);
}

#[rstest]
fn faster_speed_shrinks_the_travel_component() {
    let course = course(&[(0.0, 0.0, 0.0), (100.0, 100.0, 0.0)]);
    let solver = BestFirstSolver::with_cost_model(CostModel {
        speed: 4.0,
        dwell_time: 10.0,
    });
    let outcome = solver.plan(&course);
    let expected = 25.0 * 2.0_f64.sqrt() + 10.0;
    assert!((outcome.total_time() - expected).abs() < TOLERANCE);
}
