//! Concrete games.
//!
//! - [`stonehenge`]: the ley-line board game
//! - [`subtract_square`]: a one-number game, small enough to solve by hand

pub mod stonehenge;
pub mod subtract_square;
