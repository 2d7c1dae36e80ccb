//! Solver results.

use serde::{Deserialize, Serialize};

use super::stats::SearchStats;

/// Score of a position the player to move can force a win from.
pub const FORCED_WIN: i8 = 1;
/// Score of a position the player to move loses against best play.
pub const FORCED_LOSS: i8 = -1;
/// Score of a position neither player can force.
pub const UNRESOLVED: i8 = 0;

/// Game-theoretic value of a position for the player to move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Verdict {
    ForcedWin,
    ForcedLoss,
    Unresolved,
}

impl Verdict {
    /// Verdict for a node score.
    #[must_use]
    pub fn from_score(score: i8) -> Self {
        match score {
            s if s >= FORCED_WIN => Verdict::ForcedWin,
            s if s <= FORCED_LOSS => Verdict::ForcedLoss,
            _ => Verdict::Unresolved,
        }
    }

    #[must_use]
    pub fn score(self) -> i8 {
        match self {
            Verdict::ForcedWin => FORCED_WIN,
            Verdict::ForcedLoss => FORCED_LOSS,
            Verdict::Unresolved => UNRESOLVED,
        }
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Verdict::ForcedWin => "forced win",
            Verdict::ForcedLoss => "forced loss",
            Verdict::Unresolved => "unresolved",
        })
    }
}

/// Outcome of solving a position.
#[derive(Clone, Debug, PartialEq)]
pub struct Solution<M> {
    /// Value of the root for its player to move.
    pub verdict: Verdict,

    /// A winning move if there is one, else the first legal move.
    /// `None` when the root has no moves.
    pub best_move: Option<M>,

    pub stats: SearchStats,
}
