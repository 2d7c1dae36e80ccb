//! Subtract Square: a tiny integer-move game.
//!
//! - Play starts from a positive running total
//! - On your turn, subtract any positive perfect square no larger than the total
//! - Whoever brings the total to exactly 0 wins
//!
//! Small totals are solved instantly by the minimax strategies, which makes
//! this game the reference point for checking search behavior.

mod game;

pub use game::{SubtractSquareConfig, SubtractSquareGame, SubtractSquareState};
