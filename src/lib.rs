//! # rust-stonehenge
//!
//! A two-player, perfect-information game engine with exhaustive minimax
//! strategies.
//!
//! ## Design Principles
//!
//! 1. **Immutable States**: `GameState::make_move` returns a new state and
//!    never touches the receiver. Ley-lines live in an `im` vector so each
//!    successor shares structure with its parent.
//!
//! 2. **Scoped Scratch State**: strategies may repoint a game's
//!    `current_state` while searching, always through a `ScratchState` guard
//!    that restores it on every exit path.
//!
//! 3. **Two Equivalent Searches**: recursive and explicit-stack minimax
//!    compute the same values and report the same node counts.
//!
//! ## Modules
//!
//! - `core`: players, per-player storage, seeded RNG
//! - `error`: crate error type
//! - `stack`: LIFO stack used as the search frontier
//! - `game`: `Game` / `GameState` traits and the rough-outcome heuristic
//! - `games`: Stonehenge and Subtract Square
//! - `search`: search tree and the two minimax solvers
//! - `strategy`: move-selection strategies and a match runner

pub mod core;
pub mod error;
pub mod game;
pub mod games;
pub mod search;
pub mod stack;
pub mod strategy;

// Re-export commonly used types
pub use crate::core::{GameRng, Player, PlayerMap};

pub use crate::error::{Error, Result};

pub use crate::game::{Game, GameState, MoveOf, ScratchState};

pub use crate::games::stonehenge::{CellMove, StonehengeConfig, StonehengeGame, StonehengeState, WinRule};
pub use crate::games::subtract_square::{SubtractSquareConfig, SubtractSquareGame, SubtractSquareState};

pub use crate::search::{
    solve_iterative, solve_recursive, NodeId, SearchNode, SearchStats, SearchTree, Solution, Verdict,
};

pub use crate::stack::Stack;

pub use crate::strategy::{
    iterative_minimax_strategy, play_match, recursive_minimax_strategy, rough_outcome_strategy,
    RandomStrategy, Strategy,
};
