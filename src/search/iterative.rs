//! Exhaustive minimax over an explicit stack.
//!
//! Each node is popped twice. The first pop generates its children and
//! pushes the node back underneath them; by the second pop every child is
//! scored and the node takes the best negated child score. Terminal nodes
//! are scored on their only pop.

use std::time::Instant;

use super::node::NodeId;
use super::solution::{Solution, Verdict, FORCED_LOSS, UNRESOLVED};
use super::stats::SearchStats;
use super::tree::SearchTree;
use crate::error::Result;
use crate::game::{Game, GameState, MoveOf};
use crate::stack::Stack;

/// Build and score the full game tree below the game's current state.
///
/// Every node in the returned tree has a score.
pub fn score_tree<G: Game>(game: &G) -> Result<(SearchTree<G::State>, SearchStats)> {
    let start = Instant::now();
    let mut stats = SearchStats::new();
    let mut tree = SearchTree::new(game.current_state().clone());
    let mut stack: Stack<NodeId> = Stack::new();
    stack.push(tree.root());

    while !stack.is_empty() {
        let id = stack.pop()?;
        let node = tree.get(id);

        if node.expanded {
            let score = tree
                .children(id)
                .iter()
                .filter_map(|&child| tree.get(child).score)
                .map(|score| -score)
                .max()
                .unwrap_or(UNRESOLVED);
            tree.get_mut(id).score = Some(score);
            continue;
        }

        stats.visit(node.depth);
        if game.is_over(&node.state) {
            stats.terminal_nodes += 1;
            tree.get_mut(id).score = Some(FORCED_LOSS);
            continue;
        }

        let moves = node.state.possible_moves();
        if moves.is_empty() {
            stats.terminal_nodes += 1;
            tree.get_mut(id).score = Some(UNRESOLVED);
            continue;
        }

        stats.nodes_expanded += 1;
        let state = node.state.clone();
        tree.get_mut(id).expanded = true;
        stack.push(id);
        for mv in moves {
            let child = state.make_move(&mv)?;
            stack.push(tree.add_child(id, mv, child));
        }
    }

    stats.time_us = start.elapsed().as_micros() as u64;
    Ok((tree, stats))
}

/// Solve the game's current state with the explicit-stack search.
///
/// The best move is the first move whose child is a forced loss for the
/// opponent, else the first legal move.
pub fn solve_iterative<G: Game>(game: &G) -> Result<Solution<MoveOf<G>>> {
    let (tree, stats) = score_tree(game)?;
    let root = tree.root_node();

    let children = tree.children(tree.root());
    let winning = children
        .iter()
        .map(|&child| tree.get(child))
        .find(|child| child.score == Some(FORCED_LOSS));
    let best_move = winning
        .or_else(|| children.first().map(|&child| tree.get(child)))
        .and_then(|child| child.mv.clone());

    Ok(Solution {
        verdict: Verdict::from_score(root.score.unwrap_or(UNRESOLVED)),
        best_move,
        stats,
    })
}
