//! Subtract Square game and state.

use serde::{Deserialize, Serialize};

use crate::core::Player;
use crate::error::{Error, Result};
use crate::game::{Game, GameState};

const INSTRUCTIONS: &str = "Players take turns subtracting square numbers from the starting \
number.\nThe winner is the person who subtracts to 0.";

/// Configuration for a Subtract Square game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubtractSquareConfig {
    /// Total the game starts from.
    pub start_value: u32,

    /// Whether p1 moves first.
    pub p1_starts: bool,
}

impl Default for SubtractSquareConfig {
    fn default() -> Self {
        Self {
            start_value: 20,
            p1_starts: true,
        }
    }
}

impl SubtractSquareConfig {
    /// Create a new config with a custom starting total.
    pub fn with_start_value(mut self, value: u32) -> Self {
        self.start_value = value;
        self
    }

    /// Create a new config with a custom first player.
    pub fn with_p1_starts(mut self, p1_starts: bool) -> Self {
        self.p1_starts = p1_starts;
        self
    }
}

/// A Subtract Square position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SubtractSquareState {
    total: u32,
    to_move: Player,
}

impl SubtractSquareState {
    /// Create a state with the given running total and player to move.
    #[must_use]
    pub const fn new(total: u32, to_move: Player) -> Self {
        Self { total, to_move }
    }

    /// The running total.
    #[must_use]
    pub const fn total(&self) -> u32 {
        self.total
    }
}

impl std::fmt::Display for SubtractSquareState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Current total: {}", self.total)
    }
}

impl GameState for SubtractSquareState {
    type Move = u32;

    fn possible_moves(&self) -> Vec<u32> {
        (1u64..)
            .map(|k| k * k)
            .take_while(|&square| square <= u64::from(self.total))
            .map(|square| square as u32)
            .collect()
    }

    fn make_move(&self, mv: &u32) -> Result<Self> {
        if !self.is_valid_move(mv) {
            return Err(Error::illegal_move(mv));
        }
        Ok(Self {
            total: self.total - mv,
            to_move: self.to_move.other(),
        })
    }

    fn current_player(&self) -> Player {
        self.to_move
    }

    fn winner(&self) -> Option<Player> {
        (self.total == 0).then(|| self.to_move.other())
    }

    fn is_valid_move(&self, mv: &u32) -> bool {
        let root = f64::from(*mv).sqrt().round() as u64;
        *mv > 0 && *mv <= self.total && root * root == u64::from(*mv)
    }
}

/// A playable Subtract Square game.
#[derive(Clone, Debug)]
pub struct SubtractSquareGame {
    current_state: SubtractSquareState,
}

impl SubtractSquareGame {
    /// Start a game from `config`.
    pub fn new(config: SubtractSquareConfig) -> Self {
        Self {
            current_state: SubtractSquareState::new(
                config.start_value,
                Player::starting(config.p1_starts),
            ),
        }
    }
}

impl Game for SubtractSquareGame {
    type State = SubtractSquareState;

    fn current_state(&self) -> &SubtractSquareState {
        &self.current_state
    }

    fn replace_state(&mut self, state: SubtractSquareState) -> SubtractSquareState {
        std::mem::replace(&mut self.current_state, state)
    }

    fn instructions(&self) -> &'static str {
        INSTRUCTIONS
    }

    fn str_to_move(&self, text: &str) -> Option<u32> {
        text.trim().parse().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_possible_moves_are_squares() {
        let state = SubtractSquareState::new(20, Player::P1);
        assert_eq!(state.possible_moves(), vec![1, 4, 9, 16]);

        let state = SubtractSquareState::new(0, Player::P1);
        assert!(state.possible_moves().is_empty());
    }

    #[test]
    fn test_make_move() {
        let state = SubtractSquareState::new(20, Player::P1);
        let next = state.make_move(&16).unwrap();

        assert_eq!(next.total(), 4);
        assert_eq!(next.current_player(), Player::P2);
        assert_eq!(state.total(), 20);
    }

    #[test]
    fn test_illegal_moves_rejected() {
        let state = SubtractSquareState::new(10, Player::P1);

        assert_eq!(state.make_move(&2), Err(Error::illegal_move(2)));
        assert_eq!(state.make_move(&16), Err(Error::illegal_move(16)));
        assert_eq!(state.make_move(&0), Err(Error::illegal_move(0)));
    }

    #[test]
    fn test_winner_is_last_mover() {
        let state = SubtractSquareState::new(1, Player::P1);
        assert_eq!(state.winner(), None);

        let done = state.make_move(&1).unwrap();
        assert_eq!(done.winner(), Some(Player::P1));
    }

    #[test]
    fn test_game_is_winner() {
        let mut game = SubtractSquareGame::new(SubtractSquareConfig::default().with_start_value(4));
        assert!(!game.is_winner(Player::P1));

        let done = game.current_state().make_move(&4).unwrap();
        game.replace_state(done);

        assert!(game.is_over(game.current_state()));
        assert!(game.is_winner(Player::P1));
        assert!(!game.is_winner(Player::P2));
    }

    #[test]
    fn test_str_to_move() {
        let game = SubtractSquareGame::new(SubtractSquareConfig::default());

        assert_eq!(game.str_to_move("9"), Some(9));
        assert_eq!(game.str_to_move(" 4 \n"), Some(4));
        assert_eq!(game.str_to_move("nine"), None);
        assert_eq!(game.str_to_move("-1"), None);
    }

    #[test]
    fn test_p2_starts() {
        let game = SubtractSquareGame::new(SubtractSquareConfig::default().with_p1_starts(false));
        assert_eq!(game.current_state().current_player(), Player::P2);
    }

    #[test]
    fn test_display() {
        let state = SubtractSquareState::new(7, Player::P2);
        assert_eq!(state.to_string(), "Current total: 7");
    }
}
