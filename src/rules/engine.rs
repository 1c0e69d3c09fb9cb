//! The configured rules object.
//!
//! `Quoridor` bundles a [`RulesConfig`] with the free rule functions so
//! callers do not thread the configuration through every query, and adds
//! the checked entry points that re-validate an action before applying it.

use tracing::debug;

use super::blocking::is_wall_blocking;
use super::moves::{legal_moves, Moves};
use super::reachability::has_path_to_goal;
use super::transition::{apply_move, apply_wall};
use super::walls::{is_legal_wall, legal_walls};
use crate::core::{Action, GameState, PlayerId, Position, RulesConfig, RulesError, Wall};

/// Quoridor rules under a given configuration.
///
/// ```
/// use quoridor_engine::core::{Action, PlayerId, Position};
/// use quoridor_engine::rules::Quoridor;
///
/// let rules = Quoridor::default();
/// let state = rules.initial_state();
///
/// let next = rules
///     .try_apply(&state, PlayerId::ZERO, Action::Move(Position::new(4, 7)))
///     .unwrap();
/// assert_eq!(next.current_player(), PlayerId::ONE);
///
/// // Raw indices are checked at the boundary.
/// assert!(PlayerId::try_from(2usize).is_err());
/// ```
#[derive(Clone, Debug, Default)]
pub struct Quoridor {
    config: RulesConfig,
}

impl Quoridor {
    /// Create a rules object.
    #[must_use]
    pub fn new(config: RulesConfig) -> Self {
        Self { config }
    }

    /// Get the configuration.
    #[must_use]
    pub fn config(&self) -> &RulesConfig {
        &self.config
    }

    /// Opening position with the configured wall supply.
    #[must_use]
    pub fn initial_state(&self) -> GameState {
        GameState::new(self.config.starting_walls)
    }

    // === Queries ===

    /// Cells `player` may move to. Empty on a finished game.
    #[must_use]
    pub fn legal_moves(&self, state: &GameState, player: PlayerId) -> Moves {
        legal_moves(state, player, &self.config)
    }

    /// Can `player` still reach their goal row?
    #[must_use]
    pub fn has_path_to_goal(&self, state: &GameState, player: PlayerId) -> bool {
        has_path_to_goal(state, player, self.config.blocking)
    }

    /// Does a placed wall stand between `from` and `to`?
    #[must_use]
    pub fn is_wall_blocking(&self, state: &GameState, from: Position, to: Position) -> bool {
        is_wall_blocking(state, from, to, self.config.blocking)
    }

    /// May the player on move place `wall`?
    #[must_use]
    pub fn is_legal_wall(&self, state: &GameState, wall: &Wall) -> bool {
        is_legal_wall(state, wall, &self.config)
    }

    /// Every wall the player on move may place. Empty on a finished game.
    #[must_use]
    pub fn legal_walls(&self, state: &GameState) -> Vec<Wall> {
        legal_walls(state, &self.config)
    }

    /// Every action available to `player`: moves first, then walls.
    ///
    /// Walls are only listed for the player on move, since a placement
    /// always spends from the mover's hand.
    #[must_use]
    pub fn legal_actions(&self, state: &GameState, player: PlayerId) -> Vec<Action> {
        let mut actions: Vec<Action> = self
            .legal_moves(state, player)
            .into_iter()
            .map(Action::Move)
            .collect();

        if player == state.current_player() {
            actions.extend(self.legal_walls(state).into_iter().map(Action::PlaceWall));
        }

        actions
    }

    /// Is `action` legal for `player` right now?
    #[must_use]
    pub fn is_legal(&self, state: &GameState, player: PlayerId, action: &Action) -> bool {
        match action {
            Action::Move(to) => self.legal_moves(state, player).contains(to),
            Action::PlaceWall(wall) => {
                player == state.current_player()
                    && !state.is_terminal()
                    && self.is_legal_wall(state, wall)
            }
        }
    }

    /// The winner, if the game is over.
    #[must_use]
    pub fn is_terminal(&self, state: &GameState) -> Option<PlayerId> {
        state.winner()
    }

    // === Transitions ===

    /// Apply an action without validation.
    #[must_use]
    pub fn apply(&self, state: &GameState, player: PlayerId, action: &Action) -> GameState {
        match *action {
            Action::Move(to) => apply_move(state, player, to),
            Action::PlaceWall(wall) => apply_wall(state, wall),
        }
    }

    /// Validate, then apply, an action by `player`.
    ///
    /// Fails with [`RulesError::OutOfTurn`] when `player` is not on move and
    /// with [`RulesError::IllegalAction`] when the action is not legal.
    pub fn try_apply(
        &self,
        state: &GameState,
        player: PlayerId,
        action: Action,
    ) -> Result<GameState, RulesError> {
        if player != state.current_player() {
            debug!(%player, %action, "rejected action out of turn");
            return Err(RulesError::OutOfTurn { player });
        }
        if !self.is_legal(state, player, &action) {
            debug!(%player, %action, "rejected illegal action");
            return Err(RulesError::IllegalAction { player, action });
        }
        Ok(self.apply(state, player, &action))
    }

    /// Checked pawn move.
    pub fn try_apply_move(
        &self,
        state: &GameState,
        player: PlayerId,
        to: Position,
    ) -> Result<GameState, RulesError> {
        self.try_apply(state, player, Action::Move(to))
    }

    /// Checked wall placement by the player on move.
    pub fn try_apply_wall(&self, state: &GameState, wall: Wall) -> Result<GameState, RulesError> {
        self.try_apply(state, state.current_player(), Action::PlaceWall(wall))
    }
}
