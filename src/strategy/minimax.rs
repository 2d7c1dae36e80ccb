//! Minimax move selection.

use tracing::debug;

use crate::error::{Error, Result};
use crate::game::{Game, MoveOf};
use crate::search::{solve_iterative, solve_recursive, Solution};

/// Pick a move by recursive minimax.
///
/// Takes a winning move if one exists, otherwise the first legal move.
pub fn recursive_minimax_strategy<G: Game>(game: &mut G) -> Result<MoveOf<G>> {
    let solution = solve_recursive(game)?;
    select("recursive_minimax", solution)
}

/// Pick a move by minimax over an explicit stack.
///
/// Agrees with [`recursive_minimax_strategy`] on every position.
pub fn iterative_minimax_strategy<G: Game>(game: &mut G) -> Result<MoveOf<G>> {
    let solution = solve_iterative(game)?;
    select("iterative_minimax", solution)
}

fn select<M: std::fmt::Display>(strategy: &'static str, solution: Solution<M>) -> Result<M> {
    let mv = solution.best_move.ok_or(Error::NoMovesAvailable)?;
    debug!(
        strategy,
        mv = %mv,
        verdict = %solution.verdict,
        nodes = solution.stats.nodes_visited(),
        time_us = solution.stats.time_us,
        "selected move"
    );
    Ok(mv)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::GameState;
    use crate::games::stonehenge::{StonehengeConfig, StonehengeGame};
    use crate::games::subtract_square::{SubtractSquareConfig, SubtractSquareGame};

    #[test]
    fn test_size_one_first_cell_wins() {
        let mut game = StonehengeGame::new(StonehengeConfig::default()).unwrap();

        assert_eq!(recursive_minimax_strategy(&mut game), Ok("A".into()));
        assert_eq!(iterative_minimax_strategy(&mut game), Ok("A".into()));
    }

    #[test]
    fn test_finished_game() {
        let mut game =
            SubtractSquareGame::new(SubtractSquareConfig::default().with_start_value(0));

        assert_eq!(recursive_minimax_strategy(&mut game), Err(Error::NoMovesAvailable));
        assert_eq!(iterative_minimax_strategy(&mut game), Err(Error::NoMovesAvailable));
    }

    #[test]
    fn test_state_restored() {
        let mut game =
            SubtractSquareGame::new(SubtractSquareConfig::default().with_start_value(13));
        let before = game.current_state().clone();

        let mv = recursive_minimax_strategy(&mut game).unwrap();
        assert_eq!(game.current_state(), &before);
        assert!(before.is_valid_move(&mv));
    }
}
