//! Search node structures.
//!
//! Nodes live in a [`SearchTree`](super::SearchTree) arena and refer to
//! their children by [`NodeId`]. There is no parent link: a node is reached
//! only by walking down from the root.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::game::GameState;

/// Index into the search tree node arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(pub u32);

impl NodeId {
    /// Create a new node ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw index value.
    #[inline]
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    #[inline]
    pub(crate) const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "NodeId({})", self.0)
    }
}

/// A game state in the search tree, with the move that produced it and its
/// score once resolved.
///
/// Scores are from the point of view of the player to move at this node:
/// `1` forced win, `-1` forced loss, `0` unresolved.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound(
    serialize = "S: Serialize, S::Move: Serialize",
    deserialize = "S: Deserialize<'de>, S::Move: Deserialize<'de>"
))]
pub struct SearchNode<S: GameState> {
    /// The wrapped state.
    pub state: S,

    /// Move from the parent's state to this one (`None` at the root).
    pub mv: Option<S::Move>,

    /// Depth in tree (root = 0).
    pub depth: u16,

    /// Children in move order.
    pub children: SmallVec<[NodeId; 8]>,

    /// Resolved score, if any.
    pub score: Option<i8>,

    /// Whether children have been generated.
    pub expanded: bool,
}

impl<S: GameState> SearchNode<S> {
    /// Create a new unscored node.
    pub fn new(state: S, mv: Option<S::Move>, depth: u16) -> Self {
        Self {
            state,
            mv,
            depth,
            children: SmallVec::new(),
            score: None,
            expanded: false,
        }
    }

    /// Create a root node.
    pub fn root(state: S) -> Self {
        Self::new(state, None, 0)
    }

    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}
