//! Core domain types for the Waypost engine.
//!
//! These models provide basic validation to keep downstream components
//! honest. [`Course::new`] returns `Result` so malformed waypoint lists
//! surface as errors at the boundary instead of degrading silently inside
//! a solver.

#![forbid(unsafe_code)]

mod course;
mod solver;
mod traversal;
mod waypoint;

pub use course::{Course, CourseError};
pub use solver::CourseSolver;
pub use traversal::{Traversal, TraversalOutcome};
pub use waypoint::Waypoint;
