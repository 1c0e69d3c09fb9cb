//! Action selection policies.
//!
//! The engine only enumerates and applies actions; choosing one is a
//! strategy's job. Strategies are trait objects so a host can seat any mix
//! of them:
//! - `FirstLegal`: deterministic, takes the first legal action
//! - `RandomStrategy`: uniform among moves, occasionally a random wall

use tracing::trace;

use crate::core::{Action, GameRng, GameState, PlayerId};
use crate::rules::Quoridor;

// =============================================================================
// Strategy
// =============================================================================

/// Picks one action for a player.
pub trait Strategy {
    /// Choose an action for `player` in `state`.
    ///
    /// Returns `None` if the strategy has nothing to play.
    fn choose_action(
        &mut self,
        rules: &Quoridor,
        state: &GameState,
        player: PlayerId,
    ) -> Option<Action>;
}

impl<S: Strategy + ?Sized> Strategy for Box<S> {
    fn choose_action(
        &mut self,
        rules: &Quoridor,
        state: &GameState,
        player: PlayerId,
    ) -> Option<Action> {
        (**self).choose_action(rules, state, player)
    }
}

// =============================================================================
// First Legal
// =============================================================================

/// Always plays the first legal action (a pawn move whenever one exists).
#[derive(Clone, Debug, Default)]
pub struct FirstLegal;

impl Strategy for FirstLegal {
    fn choose_action(
        &mut self,
        rules: &Quoridor,
        state: &GameState,
        player: PlayerId,
    ) -> Option<Action> {
        rules.legal_actions(state, player).into_iter().next()
    }
}

// =============================================================================
// Random
// =============================================================================

/// Default chance of trying a wall instead of a pawn move.
pub const DEFAULT_WALL_PROBABILITY: f64 = 0.1;

/// Random play.
///
/// Walls vastly outnumber pawn moves, so sampling uniformly over all legal
/// actions would almost never move a pawn. Instead a wall is attempted with
/// probability `wall_probability`, otherwise a uniform pawn move; either
/// kind falls back to the other when none is available.
#[derive(Clone, Debug)]
pub struct RandomStrategy {
    rng: GameRng,
    wall_probability: f64,
}

impl RandomStrategy {
    /// Create a random strategy with the default wall probability.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::from_rng(GameRng::new(seed))
    }

    /// Create from an existing RNG stream (e.g. a fork).
    #[must_use]
    pub fn from_rng(rng: GameRng) -> Self {
        Self {
            rng,
            wall_probability: DEFAULT_WALL_PROBABILITY,
        }
    }

    /// Set the chance of attempting a wall.
    ///
    /// Clamped to `[0, 1]`. A non-finite value falls back to the default.
    #[must_use]
    pub fn with_wall_probability(mut self, probability: f64) -> Self {
        self.wall_probability = if probability.is_finite() {
            probability.clamp(0.0, 1.0)
        } else {
            DEFAULT_WALL_PROBABILITY
        };
        self
    }

    fn random_move(
        &mut self,
        rules: &Quoridor,
        state: &GameState,
        player: PlayerId,
    ) -> Option<Action> {
        let moves = rules.legal_moves(state, player);
        self.rng.choose(&moves).copied().map(Action::Move)
    }

    fn random_wall(
        &mut self,
        rules: &Quoridor,
        state: &GameState,
        player: PlayerId,
    ) -> Option<Action> {
        if player != state.current_player() {
            return None;
        }
        let walls = rules.legal_walls(state);
        self.rng.choose(&walls).copied().map(Action::PlaceWall)
    }
}

impl Strategy for RandomStrategy {
    fn choose_action(
        &mut self,
        rules: &Quoridor,
        state: &GameState,
        player: PlayerId,
    ) -> Option<Action> {
        let action = if self.rng.gen_bool(self.wall_probability) {
            self.random_wall(rules, state, player)
                .or_else(|| self.random_move(rules, state, player))
        } else {
            self.random_move(rules, state, player)
                .or_else(|| self.random_wall(rules, state, player))
        };

        if let Some(action) = &action {
            trace!(%player, %action, "random strategy chose");
        }
        action
    }
}
