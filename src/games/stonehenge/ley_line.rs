//! Ley-lines: groups of cells that share a claim anchor.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Player, PlayerMap};

/// A cell as seen from a ley-line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LeyCell {
    Open(char),
    Claimed(Player),
}

/// A ley-line: an anchor followed by its cells.
///
/// Once the anchor is claimed it never changes owner.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LeyLine {
    number: usize,
    anchor: Option<Player>,
    cells: SmallVec<[LeyCell; 6]>,
}

impl LeyLine {
    /// Create ley-line `number` (1-based) over the given cell letters.
    #[must_use]
    pub fn new(number: usize, letters: &str) -> Self {
        Self {
            number,
            anchor: None,
            cells: letters.chars().map(LeyCell::Open).collect(),
        }
    }

    /// 1-based position of this ley-line in its table.
    #[must_use]
    pub fn number(&self) -> usize {
        self.number
    }

    /// Ley-line name, e.g. `ley_line3`.
    #[must_use]
    pub fn name(&self) -> String {
        format!("ley_line{}", self.number)
    }

    /// Owner of the anchor, if claimed.
    #[must_use]
    pub fn anchor(&self) -> Option<Player> {
        self.anchor
    }

    /// The non-anchor cells.
    #[must_use]
    pub fn cells(&self) -> &[LeyCell] {
        &self.cells
    }

    /// Length including the anchor.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len() + 1
    }

    /// Always false: a ley-line has at least its anchor.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Whether `letter` is an unclaimed cell of this ley-line.
    #[must_use]
    pub fn has_open(&self, letter: char) -> bool {
        self.cells.contains(&LeyCell::Open(letter))
    }

    /// Replace every unclaimed `letter` with `player`'s claim.
    ///
    /// Returns whether any cell changed.
    pub fn claim_cell(&mut self, letter: char, player: Player) -> bool {
        let mut changed = false;
        for cell in self.cells.iter_mut().filter(|cell| **cell == LeyCell::Open(letter)) {
            *cell = LeyCell::Claimed(player);
            changed = true;
        }
        changed
    }

    /// Per-player count of claimed cells.
    #[must_use]
    pub fn claim_counts(&self) -> PlayerMap<usize> {
        let mut counts = PlayerMap::default();
        for cell in &self.cells {
            if let LeyCell::Claimed(player) = cell {
                counts[*player] += 1;
            }
        }
        counts
    }

    /// Claim the anchor for the first player holding at least half of the
    /// cells, if the anchor is still unclaimed.
    ///
    /// Returns the new owner when the anchor changes hands.
    pub fn settle(&mut self) -> Option<Player> {
        if self.anchor.is_some() {
            return None;
        }
        let counts = self.claim_counts();
        let owner = Player::ALL
            .into_iter()
            .find(|&player| 2 * counts[player] >= self.cells.len())?;
        self.anchor = Some(owner);
        Some(owner)
    }
}

impl std::fmt::Display for LeyLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let anchor = self.anchor.map_or('@', Player::marker);
        write!(f, "{}: [{}", self.name(), anchor)?;
        for cell in &self.cells {
            let symbol = match cell {
                LeyCell::Open(letter) => *letter,
                LeyCell::Claimed(player) => player.marker(),
            };
            write!(f, ", {}", symbol)?;
        }
        f.write_str("]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_ley_line() {
        let line = LeyLine::new(6, "CA");

        assert_eq!(line.name(), "ley_line6");
        assert_eq!(line.len(), 3);
        assert_eq!(line.anchor(), None);
        assert!(line.has_open('A'));
        assert!(!line.has_open('B'));
        assert_eq!(line.to_string(), "ley_line6: [@, C, A]");
    }

    #[test]
    fn test_half_claims_anchor() {
        let mut line = LeyLine::new(2, "BC");

        assert!(line.claim_cell('B', Player::P2));
        assert_eq!(line.settle(), Some(Player::P2));
        assert_eq!(line.anchor(), Some(Player::P2));
        assert_eq!(line.to_string(), "ley_line2: [2, 2, C]");
    }

    #[test]
    fn test_below_half_stays_open() {
        let mut line = LeyLine::new(2, "BDF");

        line.claim_cell('D', Player::P1);
        assert_eq!(line.settle(), None);

        line.claim_cell('F', Player::P2);
        assert_eq!(line.settle(), None);
        assert_eq!(line.claim_counts(), PlayerMap::with_value(1));

        line.claim_cell('B', Player::P2);
        assert_eq!(line.settle(), Some(Player::P2));
    }

    #[test]
    fn test_claims_are_permanent() {
        let mut line = LeyLine::new(9, "GDA");

        line.claim_cell('G', Player::P1);
        line.claim_cell('D', Player::P1);
        assert_eq!(line.settle(), Some(Player::P1));

        line.claim_cell('A', Player::P2);
        assert_eq!(line.settle(), None);
        assert_eq!(line.anchor(), Some(Player::P1));
    }

    #[test]
    fn test_claim_missing_cell() {
        let mut line = LeyLine::new(1, "A");
        assert!(!line.claim_cell('Q', Player::P1));
        assert_eq!(line.settle(), None);
    }
}
