//! Stonehenge game states.

use im::Vector;
use serde::{Deserialize, Serialize};
use tracing::trace;

use super::board::Board;
use super::config::{StonehengeConfig, WinRule};
use super::layout::{board_template, ley_line_table};
use super::ley_line::LeyLine;
use crate::core::{Player, PlayerMap};
use crate::error::{Error, Result};
use crate::game::GameState;

/// A Stonehenge move: the letter of the cell to claim.
///
/// Parsing keeps any alphabetic text, so a move may name a cell that is not
/// on the board; [`StonehengeState::make_move`] rejects those.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CellMove(String);

impl CellMove {
    /// The move text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The cell letter, if the move is a single character.
    #[must_use]
    pub fn cell(&self) -> Option<char> {
        let mut chars = self.0.chars();
        match (chars.next(), chars.next()) {
            (Some(letter), None) => Some(letter),
            _ => None,
        }
    }
}

impl From<char> for CellMove {
    fn from(letter: char) -> Self {
        Self(letter.to_string())
    }
}

impl From<&str> for CellMove {
    fn from(text: &str) -> Self {
        Self(text.to_owned())
    }
}

impl std::fmt::Display for CellMove {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A Stonehenge position.
///
/// The ley-line table drives anchor claims; the board is the rendered view
/// and the one the end-of-game count runs over. `make_move` updates both.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StonehengeState {
    board_length: u8,
    win_rule: WinRule,
    to_move: Player,
    ley_lines: Vector<LeyLine>,
    board: Board,
}

impl StonehengeState {
    /// The opening position described by `config`.
    pub fn new(config: &StonehengeConfig) -> Result<Self> {
        config.validate()?;
        let invalid = || Error::InvalidBoardLength {
            length: config.board_length,
        };
        let table = ley_line_table(config.board_length).ok_or_else(invalid)?;
        let template = board_template(config.board_length).ok_or_else(invalid)?;

        let ley_lines = table
            .iter()
            .enumerate()
            .map(|(i, letters)| LeyLine::new(i + 1, letters))
            .collect();

        Ok(Self {
            board_length: config.board_length,
            win_rule: config.win_rule,
            to_move: Player::starting(config.p1_starts),
            ley_lines,
            board: Board::from_template(template),
        })
    }

    #[must_use]
    pub fn board_length(&self) -> u8 {
        self.board_length
    }

    #[must_use]
    pub fn win_rule(&self) -> WinRule {
        self.win_rule
    }

    /// Ley-lines in table order.
    pub fn ley_lines(&self) -> impl Iterator<Item = &LeyLine> {
        self.ley_lines.iter()
    }

    #[must_use]
    pub fn ley_line_count(&self) -> usize {
        self.ley_lines.len()
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Marker counts the end-of-game check compares.
    #[must_use]
    pub fn marker_counts(&self) -> PlayerMap<usize> {
        self.board.marker_counts(self.win_rule)
    }

    /// One line per ley-line, e.g. `ley_line2: [2, 2, C]`.
    #[must_use]
    pub fn ley_line_summary(&self) -> String {
        self.ley_lines
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl std::fmt::Display for StonehengeState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.board)
    }
}

impl GameState for StonehengeState {
    type Move = CellMove;

    fn possible_moves(&self) -> Vec<CellMove> {
        if self.winner().is_some() {
            return Vec::new();
        }
        self.board.open_cells().into_iter().map(CellMove::from).collect()
    }

    fn make_move(&self, mv: &CellMove) -> Result<Self> {
        let letter = match mv.cell() {
            Some(letter) if self.is_valid_move(mv) => letter,
            _ => return Err(Error::illegal_move(mv)),
        };
        let mover = self.to_move;

        let mut ley_lines = self.ley_lines.clone();
        let mut settled = Vec::new();
        for (index, line) in ley_lines.iter_mut().enumerate() {
            if !line.claim_cell(letter, mover) {
                continue;
            }
            if let Some(owner) = line.settle() {
                trace!(ley_line = %line.name(), owner = %owner, cell = %letter, "ley-line claimed");
                settled.push((index, owner));
            }
        }

        let mut board = self.board.clone();
        board.claim_cell(letter, mover);
        for (index, owner) in settled {
            board.claim_anchor(index, owner);
        }

        Ok(Self {
            board_length: self.board_length,
            win_rule: self.win_rule,
            to_move: mover.other(),
            ley_lines,
            board,
        })
    }

    fn current_player(&self) -> Player {
        self.to_move
    }

    fn winner(&self) -> Option<Player> {
        let counts = self.marker_counts();
        let total = self.ley_lines.len();
        Player::ALL
            .into_iter()
            .find(|&player| 2 * counts[player] >= total)
    }

    fn is_valid_move(&self, mv: &CellMove) -> bool {
        mv.cell().is_some_and(|letter| self.board.is_open(letter)) && self.winner().is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::outcome::{DRAW, LOSE, WIN};
    use crate::games::stonehenge::ley_line::LeyCell;

    fn state(board_length: u8) -> StonehengeState {
        StonehengeState::new(&StonehengeConfig::default().with_board_length(board_length)).unwrap()
    }

    fn play(mut state: StonehengeState, moves: &str) -> StonehengeState {
        for letter in moves.chars() {
            state = state.make_move(&letter.into()).unwrap();
        }
        state
    }

    #[test]
    fn test_default_table() {
        let state = state(1);

        assert_eq!(state.ley_line_count(), 6);
        for line in state.ley_lines() {
            assert!(line.len() == 2 || line.len() == 3);
            assert!(line
                .cells()
                .iter()
                .all(|cell| matches!(cell, LeyCell::Open('A'..='C'))));
        }
        assert_eq!(state.possible_moves(), vec!['A'.into(), 'B'.into(), 'C'.into()]);
    }

    #[test]
    fn test_size_one_single_move_ends_game() {
        let next = state(1).make_move(&"A".into()).unwrap();

        assert_eq!(next.winner(), Some(Player::P1));
        assert_eq!(next.current_player(), Player::P2);
        assert!(next.possible_moves().is_empty());
    }

    #[test]
    fn test_make_move_leaves_receiver_untouched() {
        let before = state(2);
        let copy = before.clone();
        let _ = before.make_move(&"D".into()).unwrap();
        assert_eq!(before, copy);
    }

    #[test]
    fn test_rendering_after_move() {
        let next = state(2).make_move(&"E".into()).unwrap();
        let expected = concat!(
            "        @   @\n",
            "       /   /\n",
            "  @ - A - B   1\n",
            "     / \\ / \\ /\n",
            "@ - C - D - 1\n",
            "     \\ / \\ / \\\n",
            "  @ - F - G   1\n",
            "       \\   \\\n",
            "        @   @",
        );
        assert_eq!(next.to_string(), expected);
    }

    #[test]
    fn test_ley_line_summary() {
        let next = state(1).make_move(&"B".into()).unwrap();
        let summary = next.ley_line_summary();
        assert_eq!(summary.lines().count(), 6);
        assert_eq!(summary.lines().nth(1), Some("ley_line2: [1, 1, C]"));
        assert_eq!(summary.lines().nth(3), Some("ley_line4: [@, C]"));
        assert_eq!(summary.lines().nth(4), Some("ley_line5: [1, 1]"));
    }

    #[test]
    fn test_illegal_moves() {
        let state = state(1);

        assert_eq!(state.make_move(&"HI".into()), Err(Error::illegal_move("HI")));
        assert_eq!(state.make_move(&"Z".into()), Err(Error::illegal_move("Z")));

        let done = state.make_move(&"A".into()).unwrap();
        assert_eq!(done.make_move(&"B".into()), Err(Error::illegal_move("B")));
    }

    #[test]
    fn test_claimed_cell_is_not_playable() {
        let next = state(2).make_move(&"D".into()).unwrap();
        assert!(!next.is_valid_move(&"D".into()));
        assert_eq!(next.make_move(&"D".into()), Err(Error::illegal_move("D")));
    }

    #[test]
    fn test_win_rules_differ() {
        let lines = StonehengeConfig::default()
            .with_board_length(2)
            .with_win_rule(WinRule::ClaimedLeyLines);
        let by_lines = play(StonehengeState::new(&lines).unwrap(), "B");
        let by_markers = play(state(2), "B");

        assert_eq!(by_lines.winner(), None);
        assert_eq!(by_markers.winner(), None);
        assert_eq!(by_markers.marker_counts()[Player::P1], 3);
        assert_eq!(by_lines.marker_counts()[Player::P1], 2);
    }

    #[test]
    fn test_rough_outcome() {
        assert_eq!(state(1).rough_outcome(), WIN);
        assert_eq!(state(2).rough_outcome(), DRAW);
        assert_eq!(play(state(1), "A").rough_outcome(), LOSE);
    }

    #[test]
    fn test_p2_starts() {
        let config = StonehengeConfig::default().with_p1_starts(false);
        let state = StonehengeState::new(&config).unwrap();
        assert_eq!(state.current_player(), Player::P2);

        let next = state.make_move(&"C".into()).unwrap();
        assert_eq!(next.winner(), Some(Player::P2));
    }

    #[test]
    fn test_invalid_board_length() {
        let config = StonehengeConfig::default().with_board_length(9);
        assert_eq!(
            StonehengeState::new(&config),
            Err(Error::InvalidBoardLength { length: 9 })
        );
    }
}
