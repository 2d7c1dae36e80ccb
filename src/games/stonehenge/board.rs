//! The textual Stonehenge board.
//!
//! The board is a grid of [`Glyph`]s parsed from a layout template. It is
//! the view players see and the one the end-of-game count runs over; the
//! ley-line table is kept in sync with it by `StonehengeState::make_move`.

use serde::{Deserialize, Serialize};

use super::config::WinRule;
use crate::core::{Player, PlayerMap};

/// One character position of the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Glyph {
    /// Unclaimed cell, shown as its letter.
    Open(char),
    /// Cell claimed by a player, shown as `1` or `2`.
    Claimed(Player),
    /// Ley-line anchor, shown as `@` until claimed.
    Anchor(Option<Player>),
    /// Spacing and connecting lines.
    Edge(char),
}

impl Glyph {
    fn parse(ch: char) -> Self {
        match ch {
            '@' => Glyph::Anchor(None),
            'A'..='Z' => Glyph::Open(ch),
            _ => Glyph::Edge(ch),
        }
    }

    /// Character this glyph renders as.
    #[must_use]
    pub fn symbol(self) -> char {
        match self {
            Glyph::Open(letter) => letter,
            Glyph::Claimed(player) | Glyph::Anchor(Some(player)) => player.marker(),
            Glyph::Anchor(None) => '@',
            Glyph::Edge(ch) => ch,
        }
    }
}

/// Board grid, one row per template line.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    rows: Vec<Vec<Glyph>>,
}

impl Board {
    /// Parse a layout template.
    #[must_use]
    pub fn from_template(template: &str) -> Self {
        let rows = template
            .split('\n')
            .map(|line| line.chars().map(Glyph::parse).collect())
            .collect();
        Self { rows }
    }

    /// Board rows, top to bottom.
    #[must_use]
    pub fn rows(&self) -> &[Vec<Glyph>] {
        &self.rows
    }

    fn glyphs(&self) -> impl Iterator<Item = &Glyph> {
        self.rows.iter().flatten()
    }

    fn glyphs_mut(&mut self) -> impl Iterator<Item = &mut Glyph> {
        self.rows.iter_mut().flatten()
    }

    /// Unclaimed cell letters in reading order.
    #[must_use]
    pub fn open_cells(&self) -> Vec<char> {
        self.glyphs()
            .filter_map(|glyph| match glyph {
                Glyph::Open(letter) => Some(*letter),
                _ => None,
            })
            .collect()
    }

    /// Whether `letter` is an unclaimed cell on this board.
    #[must_use]
    pub fn is_open(&self, letter: char) -> bool {
        self.glyphs().any(|glyph| *glyph == Glyph::Open(letter))
    }

    /// Mark the first occurrence of `letter` as claimed by `player`.
    ///
    /// Returns whether a cell was claimed.
    pub fn claim_cell(&mut self, letter: char, player: Player) -> bool {
        match self.glyphs_mut().find(|glyph| **glyph == Glyph::Open(letter)) {
            Some(glyph) => {
                *glyph = Glyph::Claimed(player);
                true
            }
            None => false,
        }
    }

    /// Give the `index`-th anchor (0-based, reading order, claimed or not)
    /// to `player`.
    ///
    /// Returns whether such an anchor exists.
    pub fn claim_anchor(&mut self, index: usize, player: Player) -> bool {
        let anchor = self
            .glyphs_mut()
            .filter(|glyph| matches!(glyph, Glyph::Anchor(_)))
            .nth(index);
        match anchor {
            Some(glyph) => {
                *glyph = Glyph::Anchor(Some(player));
                true
            }
            None => false,
        }
    }

    /// Anchor owners in reading order.
    #[must_use]
    pub fn anchors(&self) -> Vec<Option<Player>> {
        self.glyphs()
            .filter_map(|glyph| match glyph {
                Glyph::Anchor(owner) => Some(*owner),
                _ => None,
            })
            .collect()
    }

    /// Per-player marker counts under `rule`.
    #[must_use]
    pub fn marker_counts(&self, rule: WinRule) -> PlayerMap<usize> {
        let mut counts = PlayerMap::default();
        for glyph in self.glyphs() {
            match (glyph, rule) {
                (Glyph::Anchor(Some(player)), _) => counts[*player] += 1,
                (Glyph::Claimed(player), WinRule::MarkerCount) => counts[*player] += 1,
                _ => {}
            }
        }
        counts
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, row) in self.rows.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            for glyph in row {
                write!(f, "{}", glyph.symbol())?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::stonehenge::layout::board_template;

    fn board(n: u8) -> Board {
        Board::from_template(board_template(n).unwrap())
    }

    #[test]
    fn test_render_matches_template() {
        for n in 1..=5 {
            assert_eq!(board(n).to_string(), board_template(n).unwrap());
        }
    }

    #[test]
    fn test_open_cells_in_reading_order() {
        assert_eq!(board(1).open_cells(), vec!['A', 'B', 'C']);
        assert_eq!(board(2).open_cells(), vec!['A', 'B', 'C', 'D', 'E', 'F', 'G']);
        assert_eq!(board(5).open_cells().len(), 25);
    }

    #[test]
    fn test_claim_cell() {
        let mut board = board(1);

        assert!(board.claim_cell('B', Player::P2));
        assert!(!board.claim_cell('B', Player::P1));
        assert!(!board.claim_cell('Z', Player::P1));

        assert!(!board.is_open('B'));
        assert_eq!(board.open_cells(), vec!['A', 'C']);
        assert_eq!(board.to_string().lines().nth(2), Some("@ - A - 2"));
    }

    #[test]
    fn test_claim_anchor_by_index() {
        let mut board = board(1);

        assert!(board.claim_anchor(1, Player::P1));
        assert!(board.claim_anchor(5, Player::P2));
        assert!(!board.claim_anchor(6, Player::P2));

        assert_eq!(
            board.anchors(),
            vec![None, Some(Player::P1), None, None, None, Some(Player::P2)]
        );
        assert_eq!(board.to_string().lines().next(), Some("      @   1"));
        assert_eq!(board.to_string().lines().last(), Some("        2"));
    }

    #[test]
    fn test_marker_counts_by_rule() {
        let mut board = board(2);
        board.claim_cell('A', Player::P1);
        board.claim_cell('D', Player::P1);
        board.claim_anchor(0, Player::P1);
        board.claim_anchor(3, Player::P2);

        let all = board.marker_counts(WinRule::MarkerCount);
        assert_eq!(all[Player::P1], 3);
        assert_eq!(all[Player::P2], 1);

        let lines = board.marker_counts(WinRule::ClaimedLeyLines);
        assert_eq!(lines[Player::P1], 1);
        assert_eq!(lines[Player::P2], 1);
    }
}
