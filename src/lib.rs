//! Facade crate for the Waypost traversal-timing engine.
//!
//! This crate re-exports the core domain types and exposes the best-first
//! solver implementation behind a feature flag.

#![forbid(unsafe_code)]

pub use waypost_core::{Course, CourseError, CourseSolver, Traversal, TraversalOutcome, Waypoint};

#[cfg(feature = "solver-bestfirst")]
pub use waypost_solver_bestfirst::{BestFirstSolver, CostModel};
