//! Actions a player can take on their turn.
//!
//! A turn is either a pawn move to a destination cell or a wall placement.
//! The engine never decides which one to take; it enumerates the legal ones
//! and applies the one a caller picks.

use serde::{Deserialize, Serialize};

use super::player::PlayerId;
use super::position::Position;
use super::wall::Wall;

/// A complete game action.
///
/// ```
/// use quoridor_engine::core::{Action, Position, Wall};
///
/// let step = Action::Move(Position::new(4, 7));
/// let block = Action::PlaceWall(Wall::horizontal(3, 2));
///
/// assert!(step.is_move());
/// assert!(!block.is_move());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Move the pawn to a cell (a step or a jump).
    Move(Position),
    /// Place a wall from the player's supply.
    PlaceWall(Wall),
}

impl Action {
    /// Is this a pawn move?
    #[must_use]
    pub fn is_move(&self) -> bool {
        matches!(self, Action::Move(_))
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::Move(to) => write!(f, "move {to}"),
            Action::PlaceWall(wall) => write!(f, "wall {wall}"),
        }
    }
}

/// A recorded action with metadata for transcripts.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The player who took this action.
    pub player: PlayerId,

    /// The action taken.
    pub action: Action,

    /// Half-move number, starting at 0.
    pub ply: u32,
}

impl ActionRecord {
    /// Create a new action record.
    #[must_use]
    pub fn new(player: PlayerId, action: Action, ply: u32) -> Self {
        Self { player, action, ply }
    }
}
