//! Outcome values and the shallow two-ply heuristic.

use crate::game::GameState;

/// The current player can force a win.
pub const WIN: f64 = 1.0;
/// The current player has lost or cannot avoid an immediate loss.
pub const LOSE: f64 = -1.0;
/// Neither of the above within two plies.
pub const DRAW: f64 = 0.0;

/// Look at most two plies ahead and classify `state` for its current player.
///
/// - [`LOSE`] if the opponent has already won.
/// - [`WIN`] if some move wins immediately.
/// - [`LOSE`] if every move leaves the opponent an immediately winning reply.
/// - [`DRAW`] otherwise.
///
/// This is not minimax; it is cheap and only ever returns one of the three
/// constants.
pub fn two_ply_outcome<S: GameState>(state: &S) -> f64 {
    let player = state.current_player();
    let opponent = player.other();

    if state.winner() == Some(opponent) {
        return LOSE;
    }

    let children: Vec<S> = state
        .possible_moves()
        .iter()
        .filter_map(|mv| state.make_move(mv).ok())
        .collect();

    if children.iter().any(|child| child.winner() == Some(player)) {
        return WIN;
    }

    let opponent_always_wins = !children.is_empty()
        && children.iter().all(|child| {
            child
                .possible_moves()
                .iter()
                .filter_map(|reply| child.make_move(reply).ok())
                .any(|next| next.winner() == Some(opponent))
        });

    if opponent_always_wins {
        LOSE
    } else {
        DRAW
    }
}
