//! Core engine types shared by every game: players and seeded RNG.

pub mod player;
pub mod rng;

pub use player::{Player, PlayerMap};
pub use rng::GameRng;
