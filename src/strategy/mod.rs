//! Move-selection strategies.
//!
//! A strategy looks at `game.current_state()` and returns a move. The free
//! functions here ([`rough_outcome_strategy`], [`recursive_minimax_strategy`],
//! [`iterative_minimax_strategy`]) are strategies through the blanket impl
//! for closures; [`RandomStrategy`] carries its own RNG.
//!
//! Every strategy returns [`Error::NoMovesAvailable`](crate::Error::NoMovesAvailable)
//! when the game is over.

mod minimax;
mod random;
mod rough;

pub use minimax::{iterative_minimax_strategy, recursive_minimax_strategy};
pub use random::RandomStrategy;
pub use rough::rough_outcome_strategy;

use crate::core::{Player, PlayerMap};
use crate::error::Result;
use crate::game::{Game, GameState, MoveOf};

/// Chooses moves for a game.
pub trait Strategy<G: Game> {
    /// Pick a move for the player to move in `game.current_state()`.
    ///
    /// `current_state` must be unchanged when this returns.
    fn choose_move(&mut self, game: &mut G) -> Result<MoveOf<G>>;
}

impl<G, F> Strategy<G> for F
where
    G: Game,
    F: FnMut(&mut G) -> Result<MoveOf<G>>,
{
    fn choose_move(&mut self, game: &mut G) -> Result<MoveOf<G>> {
        self(game)
    }
}

/// Play `game` to the end, asking each player's strategy in turn.
///
/// Returns the winner, or `None` if play stopped at a state with no moves
/// and no winner.
pub fn play_match<G: Game>(
    game: &mut G,
    strategies: &mut PlayerMap<Box<dyn Strategy<G> + '_>>,
) -> Result<Option<Player>> {
    loop {
        let state = game.current_state();
        if game.is_over(state) {
            return Ok(state.winner());
        }
        if state.possible_moves().is_empty() {
            return Ok(None);
        }

        let player = state.current_player();
        let mv = strategies[player].choose_move(game)?;
        let next = game.current_state().make_move(&mv)?;
        game.replace_state(next);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::games::subtract_square::{SubtractSquareConfig, SubtractSquareGame};

    fn game(start: u32) -> SubtractSquareGame {
        SubtractSquareGame::new(SubtractSquareConfig::default().with_start_value(start))
    }

    #[test]
    fn test_closure_is_strategy() {
        let mut take_one = |_: &mut SubtractSquareGame| -> Result<u32> { Ok(1) };
        assert_eq!(take_one.choose_move(&mut game(5)), Ok(1));
    }

    #[test]
    fn test_play_match() {
        let mut game = game(6);
        let mut strategies: PlayerMap<Box<dyn Strategy<SubtractSquareGame>>> = PlayerMap::new(|_| {
            Box::new(|_: &mut SubtractSquareGame| -> Result<u32> { Ok(1) })
                as Box<dyn Strategy<SubtractSquareGame>>
        });

        // Six single steps: p2 makes the last one.
        assert_eq!(play_match(&mut game, &mut strategies), Ok(Some(Player::P2)));
        assert_eq!(game.current_state().total(), 0);
    }

    #[test]
    fn test_play_match_on_finished_game() {
        let mut game = game(0);
        let mut strategies: PlayerMap<Box<dyn Strategy<SubtractSquareGame>>> =
            PlayerMap::new(|_| Box::new(RandomStrategy::new(1)) as Box<dyn Strategy<_>>);

        assert_eq!(play_match(&mut game, &mut strategies), Ok(Some(Player::P2)));
    }

    #[test]
    fn test_illegal_strategy_move_is_an_error() {
        let mut game = game(5);
        let mut strategies: PlayerMap<Box<dyn Strategy<SubtractSquareGame>>> = PlayerMap::new(|_| {
            Box::new(|_: &mut SubtractSquareGame| -> Result<u32> { Ok(2) })
                as Box<dyn Strategy<SubtractSquareGame>>
        });

        assert_eq!(
            play_match(&mut game, &mut strategies),
            Err(Error::illegal_move(2))
        );
    }
}
