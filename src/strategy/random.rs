//! Seeded random play.

use tracing::debug;

use super::Strategy;
use crate::core::GameRng;
use crate::error::{Error, Result};
use crate::game::{Game, GameState, MoveOf};

/// Uniformly random legal moves from a seeded RNG.
///
/// The same seed on the same game always produces the same moves.
#[derive(Clone, Debug)]
pub struct RandomStrategy {
    rng: GameRng,
}

impl RandomStrategy {
    pub fn new(seed: u64) -> Self {
        Self::from_rng(GameRng::new(seed))
    }

    pub fn from_rng(rng: GameRng) -> Self {
        Self { rng }
    }
}

impl<G: Game> Strategy<G> for RandomStrategy {
    fn choose_move(&mut self, game: &mut G) -> Result<MoveOf<G>> {
        let moves = game.current_state().possible_moves();
        let mv = self.rng.choose(&moves).cloned().ok_or(Error::NoMovesAvailable)?;
        debug!(strategy = "random", mv = %mv, seed = self.rng.seed(), "selected move");
        Ok(mv)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::stonehenge::{StonehengeConfig, StonehengeGame};

    fn game() -> StonehengeGame {
        StonehengeGame::new(StonehengeConfig::default().with_board_length(3)).unwrap()
    }

    #[test]
    fn test_picks_legal_moves() {
        let mut game = game();
        let mut strategy = RandomStrategy::new(11);

        for _ in 0..20 {
            let mv = strategy.choose_move(&mut game).unwrap();
            assert!(game.current_state().is_valid_move(&mv));
        }
    }

    #[test]
    fn test_deterministic_for_seed() {
        let mut game = game();
        let mut a = RandomStrategy::new(42);
        let mut b = RandomStrategy::new(42);

        for _ in 0..10 {
            assert_eq!(a.choose_move(&mut game), b.choose_move(&mut game));
        }
    }

    #[test]
    fn test_finished_game() {
        let mut game = StonehengeGame::new(StonehengeConfig::default()).unwrap();
        let done = game.current_state().make_move(&"B".into()).unwrap();
        game.replace_state(done);

        let mut strategy = RandomStrategy::new(0);
        assert_eq!(strategy.choose_move(&mut game), Err(Error::NoMovesAvailable));
    }
}
