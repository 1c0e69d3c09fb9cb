//! Errors raised by the checked entry points.
//!
//! The rule queries themselves are total: an illegal wall is `false`, a
//! finished game has no legal moves. Errors only appear where a caller
//! hands the engine something it cannot act on.

use derive_more::{Display, Error};

use super::action::Action;
use super::player::PlayerId;

/// Error returned when a caller misuses the engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, Error)]
pub enum RulesError {
    /// A raw player index outside `0..2`.
    #[display("Invalid player index {_0} (expected 0 or 1)")]
    InvalidPlayerIndex(#[error(not(source))] usize),

    /// The action is not legal in this state.
    #[display("Illegal action for {player}: {action}")]
    IllegalAction {
        /// Who tried to act.
        player: PlayerId,
        /// What they tried.
        action: Action,
    },

    /// The player is not the one on move.
    #[display("It is not {player}'s turn")]
    OutOfTurn {
        /// Who tried to act.
        player: PlayerId,
    },
}
