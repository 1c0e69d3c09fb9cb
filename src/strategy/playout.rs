//! Drive a full game between two strategies.

use tracing::{debug, info};

use super::policy::Strategy;
use crate::core::{ActionRecord, GameState, PlayerId, PlayerPair, RulesError};
use crate::rules::Quoridor;

/// Match driver configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MatchConfig {
    /// Stop after this many half-moves (0 = unlimited).
    pub max_plies: u32,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self { max_plies: 500 }
    }
}

impl MatchConfig {
    /// Set the ply limit.
    #[must_use]
    pub fn with_max_plies(mut self, plies: u32) -> Self {
        self.max_plies = plies;
        self
    }
}

/// How a match ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MatchOutcome {
    /// A player reached their goal row.
    Winner(PlayerId),
    /// The ply limit ran out first.
    PlyLimit,
    /// The player on move had nothing to play.
    Stalled(PlayerId),
}

/// Result of a finished match.
#[derive(Clone, Debug)]
pub struct MatchReport {
    /// How the match ended.
    pub outcome: MatchOutcome,
    /// Position when the match stopped.
    pub final_state: GameState,
    /// Every action applied, in order.
    pub transcript: Vec<ActionRecord>,
}

/// Play from `initial` until someone wins, the ply limit is hit or the
/// player on move has no action.
///
/// Every chosen action goes through [`Quoridor::try_apply`], so a strategy
/// that picks an illegal action aborts the match with that error.
pub fn play_match(
    rules: &Quoridor,
    initial: &GameState,
    strategies: &mut PlayerPair<Box<dyn Strategy>>,
    config: &MatchConfig,
) -> Result<MatchReport, RulesError> {
    let mut state = initial.clone();
    let mut transcript = Vec::new();
    let mut ply = 0u32;

    let outcome = loop {
        if let Some(winner) = rules.is_terminal(&state) {
            break MatchOutcome::Winner(winner);
        }
        if config.max_plies > 0 && ply >= config.max_plies {
            break MatchOutcome::PlyLimit;
        }

        let mover = state.current_player();
        let Some(action) = strategies[mover].choose_action(rules, &state, mover) else {
            break MatchOutcome::Stalled(mover);
        };

        debug!(ply, player = %mover, %action, "applying");
        state = rules.try_apply(&state, mover, action)?;
        transcript.push(ActionRecord::new(mover, action, ply));
        ply += 1;
    };

    info!(?outcome, plies = ply, walls = state.walls().len(), "match finished");

    Ok(MatchReport {
        outcome,
        final_state: state,
        transcript,
    })
}
