//! Exhaustive minimax by plain recursion.
//!
//! Every level repoints the game's `current_state` at each successor in
//! turn and recurses; a [`ScratchState`] guard per level puts the state
//! back on return. Values are negamax-style: a state is worth the best
//! negated value among its successors.

use std::time::Instant;

use super::solution::{Solution, Verdict, FORCED_LOSS, FORCED_WIN, UNRESOLVED};
use super::stats::SearchStats;
use crate::error::Result;
use crate::game::{Game, GameState, MoveOf, ScratchState};

/// Solve the game's current state by recursive minimax.
///
/// The best move is the first move whose successor is a forced loss for the
/// opponent, else the first legal move. `current_state` is unchanged when
/// this returns, including on error.
pub fn solve_recursive<G: Game>(game: &mut G) -> Result<Solution<MoveOf<G>>> {
    let start = Instant::now();
    let mut stats = SearchStats::new();
    let mut values = Vec::new();

    let score = negamax(game, 0, &mut stats, Some(&mut values))?;

    let best_move = values
        .iter()
        .find(|(_, value)| *value == FORCED_WIN)
        .or_else(|| values.first())
        .map(|(mv, _)| mv.clone());

    stats.time_us = start.elapsed().as_micros() as u64;
    Ok(Solution {
        verdict: Verdict::from_score(score),
        best_move,
        stats,
    })
}

/// Value of the game's current state for its player to move.
///
/// At the root, `root_values` collects each move with its value for the
/// mover.
fn negamax<G: Game>(
    game: &mut G,
    depth: u16,
    stats: &mut SearchStats,
    mut root_values: Option<&mut Vec<(MoveOf<G>, i8)>>,
) -> Result<i8> {
    stats.visit(depth);
    let mut scratch = ScratchState::new(game);

    if let Some(value) = decided_value(&*scratch) {
        stats.terminal_nodes += 1;
        return Ok(value);
    }

    let moves = scratch.original().possible_moves();
    if moves.is_empty() {
        stats.terminal_nodes += 1;
        return Ok(UNRESOLVED);
    }
    stats.nodes_expanded += 1;

    let mut best = FORCED_LOSS;
    for mv in moves {
        let next = scratch.original().make_move(&mv)?;
        scratch.repoint(next);
        let value = -negamax(scratch.game_mut(), depth + 1, stats, None)?;
        best = best.max(value);
        if let Some(values) = root_values.as_deref_mut() {
            values.push((mv, value));
        }
    }
    Ok(best)
}

/// Value of a finished game for the player to move.
fn decided_value<G: Game>(game: &G) -> Option<i8> {
    let to_move = game.current_state().current_player();
    if game.is_winner(to_move.other()) {
        Some(FORCED_LOSS)
    } else if game.is_winner(to_move) {
        Some(FORCED_WIN)
    } else {
        None
    }
}
