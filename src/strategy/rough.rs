//! Greedy move selection by the two-ply heuristic.

use tracing::debug;

use crate::error::{Error, Result};
use crate::game::{Game, GameState, MoveOf};

/// Pick the move leaving the opponent the lowest rough outcome.
///
/// Ties go to the earliest move.
pub fn rough_outcome_strategy<G: Game>(game: &mut G) -> Result<MoveOf<G>> {
    let state = game.current_state();
    let mut best: Option<(MoveOf<G>, f64)> = None;

    for mv in state.possible_moves() {
        let guess = -state.make_move(&mv)?.rough_outcome();
        if best.as_ref().map_or(true, |(_, score)| guess > *score) {
            best = Some((mv, guess));
        }
    }

    let (mv, guess) = best.ok_or(Error::NoMovesAvailable)?;
    debug!(strategy = "rough_outcome", mv = %mv, guess, "selected move");
    Ok(mv)
}
