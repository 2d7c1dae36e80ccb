//! Stonehenge configuration.

use serde::{Deserialize, Serialize};

use super::layout::{MAX_BOARD_LENGTH, MIN_BOARD_LENGTH};
use crate::error::{Error, Result};

/// How the end of the game is decided.
///
/// Either way the game ends once one player's count reaches half the
/// number of ley-lines.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WinRule {
    /// Count every board position showing the player's marker: claimed
    /// cells and claimed anchors alike.
    #[default]
    MarkerCount,

    /// Count only claimed anchors, i.e. ley-lines owned.
    ClaimedLeyLines,
}

/// Stonehenge configuration parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StonehengeConfig {
    /// Side length of the board (1-5).
    pub board_length: u8,

    /// Whether p1 moves first.
    pub p1_starts: bool,

    /// End-of-game rule.
    pub win_rule: WinRule,
}

impl Default for StonehengeConfig {
    fn default() -> Self {
        Self {
            board_length: 1,
            p1_starts: true,
            win_rule: WinRule::MarkerCount,
        }
    }
}

impl StonehengeConfig {
    /// Create a new config with a custom board length.
    pub fn with_board_length(mut self, board_length: u8) -> Self {
        self.board_length = board_length;
        self
    }

    /// Create a new config with a custom first player.
    pub fn with_p1_starts(mut self, p1_starts: bool) -> Self {
        self.p1_starts = p1_starts;
        self
    }

    /// Create a new config with a custom win rule.
    pub fn with_win_rule(mut self, win_rule: WinRule) -> Self {
        self.win_rule = win_rule;
        self
    }

    /// Check that the config describes a playable board.
    pub fn validate(&self) -> Result<()> {
        if !(MIN_BOARD_LENGTH..=MAX_BOARD_LENGTH).contains(&self.board_length) {
            return Err(Error::InvalidBoardLength {
                length: self.board_length,
            });
        }
        Ok(())
    }
}
