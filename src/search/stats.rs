//! Search statistics for diagnostics and benchmarking.

use serde::{Deserialize, Serialize};

/// Statistics collected during a solve.
///
/// Both solvers count the same things, so for a given position they report
/// identical numbers apart from `time_us`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Non-terminal states whose moves were generated.
    pub nodes_expanded: u32,

    /// States where the game was over or no move was available.
    pub terminal_nodes: u32,

    /// Deepest ply visited (root = 0).
    pub max_depth: u16,

    /// Total time spent searching (microseconds).
    pub time_us: u64,
}

impl SearchStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Total states visited.
    #[must_use]
    pub fn nodes_visited(&self) -> u32 {
        self.nodes_expanded + self.terminal_nodes
    }

    /// Calculate visited states per second.
    #[must_use]
    pub fn nodes_per_second(&self) -> f64 {
        if self.time_us == 0 {
            0.0
        } else {
            f64::from(self.nodes_visited()) / (self.time_us as f64 / 1_000_000.0)
        }
    }

    /// Same node counts and depth, ignoring timing.
    #[must_use]
    pub fn same_work(&self, other: &Self) -> bool {
        self.nodes_expanded == other.nodes_expanded
            && self.terminal_nodes == other.terminal_nodes
            && self.max_depth == other.max_depth
    }

    pub(crate) fn visit(&mut self, depth: u16) {
        self.max_depth = self.max_depth.max(depth);
    }
}
