//! The playable Stonehenge game.

use super::config::StonehengeConfig;
use super::state::{CellMove, StonehengeState};
use crate::error::Result;
use crate::game::Game;

const INSTRUCTIONS: &str = "Welcome to Stonehenge! The goal of the game is to capture at least\n\
half of the total number of ley-lines before your opponent does.\n\
Good luck!";

/// A Stonehenge game: the config it was built from and the current state.
#[derive(Clone, Debug)]
pub struct StonehengeGame {
    config: StonehengeConfig,
    current_state: StonehengeState,
}

impl StonehengeGame {
    /// Start a game from `config`.
    ///
    /// Fails with [`Error::InvalidBoardLength`](crate::Error::InvalidBoardLength)
    /// if the board length is outside 1-5.
    pub fn new(config: StonehengeConfig) -> Result<Self> {
        let current_state = StonehengeState::new(&config)?;
        Ok(Self {
            config,
            current_state,
        })
    }

    #[must_use]
    pub fn config(&self) -> &StonehengeConfig {
        &self.config
    }
}

impl Game for StonehengeGame {
    type State = StonehengeState;

    fn current_state(&self) -> &StonehengeState {
        &self.current_state
    }

    fn replace_state(&mut self, state: StonehengeState) -> StonehengeState {
        std::mem::replace(&mut self.current_state, state)
    }

    fn instructions(&self) -> &'static str {
        INSTRUCTIONS
    }

    fn str_to_move(&self, text: &str) -> Option<CellMove> {
        let text = text.trim();
        if text.is_empty() || !text.chars().all(char::is_alphabetic) {
            return None;
        }
        Some(CellMove::from(text.to_uppercase().as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Player;
    use crate::error::Error;
    use crate::game::GameState;

    fn game(board_length: u8) -> StonehengeGame {
        StonehengeGame::new(StonehengeConfig::default().with_board_length(board_length)).unwrap()
    }

    #[test]
    fn test_new_rejects_bad_length() {
        let err = StonehengeGame::new(StonehengeConfig::default().with_board_length(0)).unwrap_err();
        assert_eq!(err, Error::InvalidBoardLength { length: 0 });
    }

    #[test]
    fn test_size_one_move_a_ends_game() {
        let mut game = game(1);
        assert!(!game.is_over(game.current_state()));

        let next = game.current_state().make_move(&"A".into()).unwrap();
        assert!(game.is_over(&next));

        game.replace_state(next);
        assert!(game.is_winner(Player::P1));
        assert!(!game.is_winner(Player::P2));
    }

    #[test]
    fn test_str_to_move() {
        let game = game(2);

        assert_eq!(game.str_to_move("a"), Some("A".into()));
        assert_eq!(game.str_to_move("  e\n"), Some("E".into()));
        assert_eq!(game.str_to_move("hi"), Some("HI".into()));
        assert_eq!(game.str_to_move("1"), None);
        assert_eq!(game.str_to_move("a1"), None);
        assert_eq!(game.str_to_move("   "), None);
    }

    #[test]
    fn test_parsed_off_board_move_is_illegal() {
        let game = game(1);
        let mv = game.str_to_move("q").unwrap();
        assert_eq!(
            game.current_state().make_move(&mv),
            Err(Error::illegal_move("Q"))
        );
    }

    #[test]
    fn test_instructions_do_not_depend_on_size() {
        assert_eq!(game(1).instructions(), game(5).instructions());
        assert!(game(3).instructions().starts_with("Welcome to Stonehenge!"));
    }
}
