//! Stonehenge: claim ley-lines on a triangular board.
//!
//! ## Rules
//!
//! - Players alternately claim one unclaimed cell, named by its letter
//! - A ley-line whose cells are at least half claimed by one player has its
//!   anchor (`@`) taken by that player, permanently
//! - The game ends when one player's count reaches half the number of
//!   ley-lines; see [`WinRule`] for what is counted
//!
//! Board lengths 1 through 5 are supported. Each has a fixed ley-line table
//! and board layout.
//!
//! ## Example
//!
//! ```
//! use rust_stonehenge::game::{Game, GameState};
//! use rust_stonehenge::games::stonehenge::{StonehengeConfig, StonehengeGame};
//!
//! let game = StonehengeGame::new(StonehengeConfig::default().with_board_length(2)).unwrap();
//! let state = game.current_state().make_move(&"E".into()).unwrap();
//! assert_eq!(state.possible_moves().len(), 6);
//! assert!(!game.is_over(&state));
//! ```

mod board;
mod config;
mod game;
mod layout;
mod ley_line;
mod state;

pub use board::{Board, Glyph};
pub use config::{StonehengeConfig, WinRule};
pub use game::StonehengeGame;
pub use layout::{board_template, ley_line_table, MAX_BOARD_LENGTH, MIN_BOARD_LENGTH};
pub use ley_line::{LeyCell, LeyLine};
pub use state::{CellMove, StonehengeState};
