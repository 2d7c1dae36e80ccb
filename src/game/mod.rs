//! The contract every two-player game implements.
//!
//! A game is split in two:
//!
//! - [`GameState`]: an immutable snapshot. `make_move` always returns a new
//!   state and never touches the receiver.
//! - [`Game`]: owns the single `current_state` the players act on, plus the
//!   rules that need the whole game (instructions, move parsing, winners).
//!
//! Strategies receive a `&mut impl Game`, may repoint `current_state` while
//! searching through a [`ScratchState`] guard, and always see it restored
//! when the guard drops.

pub mod outcome;
mod scratch;

pub use scratch::ScratchState;

use std::fmt;

use crate::core::Player;
use crate::error::Result;

/// Move type of a game's state.
pub type MoveOf<G> = <<G as Game>::State as GameState>::Move;

/// An immutable snapshot of a game in progress.
pub trait GameState: Clone + fmt::Debug + PartialEq {
    /// A legal action token. Validity is game-specific.
    type Move: Clone + PartialEq + fmt::Debug + fmt::Display;

    /// All moves that can be applied to this state.
    ///
    /// Empty exactly when the game is over at this state.
    fn possible_moves(&self) -> Vec<Self::Move>;

    /// The state that results from applying `mv`.
    ///
    /// Returns [`Error::IllegalMove`](crate::Error::IllegalMove) if `mv` is
    /// not in [`possible_moves`](Self::possible_moves).
    fn make_move(&self, mv: &Self::Move) -> Result<Self>;

    /// The player whose turn it is.
    fn current_player(&self) -> Player;

    /// The player who has won at this state, if the game is over.
    fn winner(&self) -> Option<Player>;

    /// Whether `mv` can be applied to this state.
    fn is_valid_move(&self, mv: &Self::Move) -> bool {
        self.possible_moves().contains(mv)
    }

    /// Shallow estimate in `[LOSE, WIN]` of the best outcome the current
    /// player can guarantee from here.
    fn rough_outcome(&self) -> f64 {
        outcome::two_ply_outcome(self)
    }
}

/// A playable game holding the current state.
pub trait Game {
    type State: GameState;

    /// The state players are acting on.
    fn current_state(&self) -> &Self::State;

    /// Point the game at `state`, returning the previous current state.
    fn replace_state(&mut self, state: Self::State) -> Self::State;

    /// Static help text.
    fn instructions(&self) -> &'static str;

    /// Whether the game is over at `state`.
    fn is_over(&self, state: &Self::State) -> bool {
        state.winner().is_some()
    }

    /// Whether `player` has won the current state.
    ///
    /// The winner is the player who made the last move, so it is never the
    /// player to move.
    fn is_winner(&self, player: Player) -> bool {
        let state = self.current_state();
        state.current_player() != player && self.is_over(state)
    }

    /// Parse user text into a move.
    ///
    /// `None` is the invalid-move sentinel. A `Some` is only syntactically
    /// valid; `make_move` still rejects moves that are not legal.
    fn str_to_move(&self, text: &str) -> Option<MoveOf<Self>>;
}
