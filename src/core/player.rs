//! Player identification and per-player data storage.
//!
//! ## Player
//!
//! The two seats of a two-player game, named `"p1"` and `"p2"`.
//!
//! ## PlayerMap
//!
//! Fixed two-slot storage indexed by `Player`, used for marker and
//! claim counts.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two players.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Player {
    P1,
    P2,
}

impl Player {
    /// Both players, in seat order.
    pub const ALL: [Player; 2] = [Player::P1, Player::P2];

    /// The player whose turn comes first given the `p1_starts` flag.
    #[must_use]
    pub const fn starting(p1_starts: bool) -> Self {
        if p1_starts {
            Player::P1
        } else {
            Player::P2
        }
    }

    /// The other player.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Player::P1 => Player::P2,
            Player::P2 => Player::P1,
        }
    }

    /// Seat index (0 for p1, 1 for p2).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Player::P1 => 0,
            Player::P2 => 1,
        }
    }

    /// Player name as shown to users: `"p1"` or `"p2"`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Player::P1 => "p1",
            Player::P2 => "p2",
        }
    }

    /// Board marker for this player: `'1'` or `'2'`.
    #[must_use]
    pub const fn marker(self) -> char {
        match self {
            Player::P1 => '1',
            Player::P2 => '2',
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Per-player data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use rust_stonehenge::core::{Player, PlayerMap};
///
/// let mut counts: PlayerMap<usize> = PlayerMap::default();
/// counts[Player::P2] += 3;
///
/// assert_eq!(counts[Player::P1], 0);
/// assert_eq!(counts[Player::P2], 3);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: [T; 2],
}

impl<T> PlayerMap<T> {
    /// Create a new PlayerMap with values from a factory function.
    pub fn new(factory: impl Fn(Player) -> T) -> Self {
        Self {
            data: [factory(Player::P1), factory(Player::P2)],
        }
    }

    /// Create a new PlayerMap with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self {
            data: [value.clone(), value],
        }
    }

    /// Iterate over (Player, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Player, &T)> {
        Player::ALL.into_iter().zip(self.data.iter())
    }
}

impl<T> Index<Player> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: Player) -> &Self::Output {
        &self.data[player.index()]
    }
}

impl<T> IndexMut<Player> for PlayerMap<T> {
    fn index_mut(&mut self, player: Player) -> &mut Self::Output {
        &mut self.data[player.index()]
    }
}
