//! Arena-based search tree.
//!
//! Uses a flat `Vec<SearchNode>` with index-based references so the
//! iterative solver can keep node handles on its stack while each node owns
//! its list of children.

use serde::{Deserialize, Serialize};

use super::node::{NodeId, SearchNode};
use crate::game::GameState;
use crate::stack::Stack;

/// Arena-based search tree.
///
/// Nodes are stored in a flat vector and referenced by `NodeId` indices.
/// Every node except the root is the child of exactly one other node.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound(
    serialize = "S: Serialize, S::Move: Serialize",
    deserialize = "S: Deserialize<'de>, S::Move: Deserialize<'de>"
))]
pub struct SearchTree<S: GameState> {
    nodes: Vec<SearchNode<S>>,
}

impl<S: GameState> SearchTree<S> {
    /// Create a new tree with a root node wrapping `state`.
    pub fn new(state: S) -> Self {
        Self::with_capacity(state, 64)
    }

    /// Create a tree with custom initial capacity.
    pub fn with_capacity(state: S, capacity: usize) -> Self {
        let mut nodes = Vec::with_capacity(capacity.max(1));
        nodes.push(SearchNode::root(state));
        Self { nodes }
    }

    /// Get the root node ID.
    #[inline]
    #[must_use]
    pub fn root(&self) -> NodeId {
        NodeId::new(0)
    }

    /// Get a node by ID.
    #[inline]
    #[must_use]
    pub fn get(&self, id: NodeId) -> &SearchNode<S> {
        &self.nodes[id.index()]
    }

    /// Get a mutable node by ID.
    #[inline]
    pub fn get_mut(&mut self, id: NodeId) -> &mut SearchNode<S> {
        &mut self.nodes[id.index()]
    }

    /// Get the root node.
    #[must_use]
    pub fn root_node(&self) -> &SearchNode<S> {
        self.get(self.root())
    }

    /// Add a child of `parent` reached by `mv`, returning its ID.
    pub fn add_child(&mut self, parent: NodeId, mv: S::Move, state: S) -> NodeId {
        let depth = self.get(parent).depth + 1;
        let id = NodeId::new(self.nodes.len() as u32);
        self.nodes.push(SearchNode::new(state, Some(mv), depth));
        self.get_mut(parent).children.push(id);
        id
    }

    /// Children of `id`, in move order.
    #[must_use]
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.get(id).children
    }

    /// Number of nodes in the tree.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always false: the root exists from construction.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterate over all nodes.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &SearchNode<S>)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, n)| (NodeId::new(i as u32), n))
    }

    /// IDs of the subtree rooted at `id`, in pre-order.
    #[must_use]
    pub fn subtree(&self, id: NodeId) -> Vec<NodeId> {
        let mut order = Vec::new();
        let mut pending = Stack::new();
        pending.push(id);
        while let Ok(current) = pending.pop() {
            order.push(current);
            // Reversed so the first child is visited first.
            pending.extend(self.children(current).iter().rev().copied());
        }
        order
    }

    /// Number of nodes in the subtree rooted at `id`.
    #[must_use]
    pub fn subtree_size(&self, id: NodeId) -> usize {
        self.subtree(id).len()
    }

    /// Number of levels in the subtree rooted at `id` (a lone node has height 1).
    #[must_use]
    pub fn height(&self, id: NodeId) -> usize {
        let base = self.get(id).depth;
        self.subtree(id)
            .into_iter()
            .map(|n| usize::from(self.get(n).depth - base) + 1)
            .max()
            .unwrap_or(1)
    }

    /// Whether some node under `id` wraps `state`.
    #[must_use]
    pub fn contains(&self, id: NodeId, state: &S) -> bool {
        self.subtree(id).into_iter().any(|n| &self.get(n).state == state)
    }

    /// How many nodes under `id` wrap `state`.
    #[must_use]
    pub fn count(&self, id: NodeId, state: &S) -> usize {
        self.subtree(id)
            .into_iter()
            .filter(|&n| &self.get(n).state == state)
            .count()
    }

    /// Leaf nodes under `id`, left to right.
    #[must_use]
    pub fn leaves(&self, id: NodeId) -> Vec<NodeId> {
        self.subtree(id)
            .into_iter()
            .filter(|&n| self.get(n).is_leaf())
            .collect()
    }

    #[must_use]
    pub fn leaf_count(&self, id: NodeId) -> usize {
        self.leaves(id).len()
    }

    /// Largest number of children of any node under `id`.
    #[must_use]
    pub fn arity(&self, id: NodeId) -> usize {
        self.subtree(id)
            .into_iter()
            .map(|n| self.children(n).len())
            .max()
            .unwrap_or(0)
    }

    /// Indented outline of the subtree under `id`, one node per line:
    /// the move that led there (`root` for the root) and its score.
    #[must_use]
    pub fn render(&self, id: NodeId) -> String {
        self.outline(id).to_string()
    }

    /// Lazily formatted form of [`render`](Self::render).
    pub fn outline(&self, id: NodeId) -> Outline<'_, S> {
        Outline { tree: self, id }
    }
}

impl<S: GameState> std::fmt::Display for SearchTree<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.outline(self.root()), f)
    }
}

/// Subtree outline produced by [`SearchTree::outline`].
pub struct Outline<'a, S: GameState> {
    tree: &'a SearchTree<S>,
    id: NodeId,
}

impl<S: GameState> std::fmt::Display for Outline<'_, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let base = self.tree.get(self.id).depth;
        for n in self.tree.subtree(self.id) {
            let node = self.tree.get(n);
            let indent = usize::from(node.depth - base) * 2;
            write!(f, "{:indent$}", "", indent = indent)?;
            match &node.mv {
                Some(mv) => write!(f, "{}", mv)?,
                None => f.write_str("root")?,
            }
            match node.score {
                Some(score) => writeln!(f, " [{}]", score)?,
                None => writeln!(f, " [?]")?,
            }
        }
        Ok(())
    }
}
