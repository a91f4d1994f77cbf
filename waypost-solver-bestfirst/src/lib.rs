//! Best-first course solver with memoized least-cost pruning.
//!
//! The solver explores waypoint-visitation states in ascending order of a
//! non-additive ranking cost that combines travel time, dwell time, skip
//! penalties, and backtrack discounts. The ranking cost steers the search;
//! the reported answer comes from a separate total-time formula that only
//! charges penalties for waypoints absent from the final path. The two
//! formulas are not interchangeable.

#![forbid(unsafe_code)]

mod cost;
mod solver;

pub use cost::CostModel;
pub use solver::BestFirstSolver;
