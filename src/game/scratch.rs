//! Scoped repointing of a game's current state.

use std::ops::Deref;

use super::Game;

/// Guard that lets a search repoint `current_state` and puts the original
/// back when dropped.
///
/// Restoration happens on every exit path, including early `?` returns and
/// panics that unwind through the guard.
///
/// ```
/// use rust_stonehenge::game::{Game, GameState, ScratchState};
/// use rust_stonehenge::games::stonehenge::{StonehengeConfig, StonehengeGame};
///
/// let mut game = StonehengeGame::new(StonehengeConfig::default()).unwrap();
/// let before = game.current_state().clone();
/// {
///     let mut scratch = ScratchState::new(&mut game);
///     let next = scratch.original().make_move(&"A".into()).unwrap();
///     scratch.repoint(next);
///     assert!(scratch.is_over(scratch.current_state()));
/// }
/// assert_eq!(game.current_state(), &before);
/// ```
pub struct ScratchState<'a, G: Game> {
    game: &'a mut G,
    saved: G::State,
}

impl<'a, G: Game> ScratchState<'a, G> {
    /// Save the game's current state.
    pub fn new(game: &'a mut G) -> Self {
        let saved = game.current_state().clone();
        Self { game, saved }
    }

    /// The state that will be restored.
    pub fn original(&self) -> &G::State {
        &self.saved
    }

    /// Point the game at `state` for the rest of this scope.
    pub fn repoint(&mut self, state: G::State) {
        self.game.replace_state(state);
    }

    /// The guarded game, for handing to a nested search.
    ///
    /// Whatever the caller leaves in `current_state` is still replaced by
    /// the saved state when this guard drops.
    pub fn game_mut(&mut self) -> &mut G {
        &mut *self.game
    }
}

impl<G: Game> Deref for ScratchState<'_, G> {
    type Target = G;

    fn deref(&self) -> &G {
        &*self.game
    }
}

impl<G: Game> Drop for ScratchState<'_, G> {
    fn drop(&mut self) {
        self.game.replace_state(self.saved.clone());
    }
}
