//! Traversal results produced by course solvers.

/// An ordered traversal through a course together with its total time.
#[derive(Debug, Clone, PartialEq)]
pub struct Traversal {
    /// Waypoint indices in visit order, starting at the origin index `0`.
    pub path: Vec<usize>,
    /// Elapsed travel and dwell time plus residual skip penalties.
    pub total_time: f64,
}

/// Result of planning a course.
///
/// Planning either reaches the destination or drains the search frontier
/// without doing so. The degenerate case still carries the reported total
/// for the empty path, but callers can tell the two apart.
#[derive(Debug, Clone, PartialEq)]
pub enum TraversalOutcome {
    /// The destination waypoint was reached.
    Complete(Traversal),
    /// The search frontier drained before the destination was reached.
    Unreachable {
        /// Total for the empty path: every skip penalty, less one dwell.
        total_time: f64,
    },
}

impl TraversalOutcome {
    /// The reported lowest time, regardless of outcome.
    #[must_use]
    pub fn total_time(&self) -> f64 {
        match self {
            Self::Complete(traversal) => traversal.total_time,
            Self::Unreachable { total_time } => *total_time,
        }
    }

    /// The chosen path, empty when the destination was not reached.
    #[must_use]
    pub fn path(&self) -> &[usize] {
        match self {
            Self::Complete(traversal) => &traversal.path,
            Self::Unreachable { .. } => &[],
        }
    }
}
