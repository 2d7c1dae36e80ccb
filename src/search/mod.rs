//! Exhaustive game-tree search.
//!
//! ## Overview
//!
//! Two solvers compute the same game-theoretic value of a position:
//!
//! - [`solve_recursive`]: plain recursion, repointing the game's
//!   `current_state` as it goes
//! - [`solve_iterative`]: an explicit [`Stack`](crate::stack::Stack) of
//!   [`NodeId`]s over an arena [`SearchTree`], scored bottom-up
//!
//! Neither prunes or memoizes, so the cost grows with the full game tree.
//! Both report identical [`SearchStats`] node counts for the same position.
//!
//! ## Usage
//!
//! ```rust
//! use rust_stonehenge::games::stonehenge::{StonehengeConfig, StonehengeGame};
//! use rust_stonehenge::search::{solve_iterative, solve_recursive, Verdict};
//!
//! let mut game = StonehengeGame::new(StonehengeConfig::default()).unwrap();
//!
//! let iterative = solve_iterative(&game).unwrap();
//! let recursive = solve_recursive(&mut game).unwrap();
//!
//! assert_eq!(iterative.verdict, Verdict::ForcedWin);
//! assert_eq!(recursive.verdict, iterative.verdict);
//! assert_eq!(iterative.best_move, Some("A".into()));
//! ```

pub mod iterative;
pub mod node;
pub mod recursive;
pub mod solution;
pub mod stats;
pub mod tree;

pub use iterative::{score_tree, solve_iterative};
pub use node::{NodeId, SearchNode};
pub use recursive::solve_recursive;
pub use solution::{Solution, Verdict, FORCED_LOSS, FORCED_WIN, UNRESOLVED};
pub use stats::SearchStats;
pub use tree::{Outline, SearchTree};
