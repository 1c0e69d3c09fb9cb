//! Player identification and per-player data storage.
//!
//! ## PlayerId
//!
//! Type-safe identifier for one of the two seats. Construction from a raw
//! index is checked, so every `PlayerId` in circulation is valid and the
//! rules never index out of range.
//!
//! ## PlayerPair
//!
//! Fixed two-slot storage indexed by `PlayerId`.
//!
//! ## Player
//!
//! A pawn: seat, cell and remaining wall supply.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use super::error::RulesError;
use super::position::{Position, BOARD_SIZE};

/// Number of seats at the table.
pub const PLAYER_COUNT: usize = 2;

/// Player identifier: `0` or `1`.
///
/// Player 0 starts at the bottom (row 8) and wins on row 0; player 1 starts
/// at the top (row 0) and wins on row 8.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct PlayerId(u8);

impl PlayerId {
    /// The player who moves first.
    pub const ZERO: PlayerId = PlayerId(0);
    /// The player who moves second.
    pub const ONE: PlayerId = PlayerId(1);

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The other seat.
    #[must_use]
    pub const fn opponent(self) -> Self {
        PlayerId(1 - self.0)
    }

    /// Row this player must reach to win.
    #[must_use]
    pub const fn goal_row(self) -> i8 {
        match self.0 {
            0 => 0,
            _ => BOARD_SIZE - 1,
        }
    }

    /// Is `at` on this player's goal row?
    #[must_use]
    pub const fn reached_goal(self, at: Position) -> bool {
        at.y == self.goal_row()
    }

    /// Starting cell: centre column of the row opposite the goal.
    #[must_use]
    pub const fn start_position(self) -> Position {
        let centre = BOARD_SIZE / 2;
        match self.0 {
            0 => Position::new(centre, BOARD_SIZE - 1),
            _ => Position::new(centre, 0),
        }
    }

    /// Marker stored in the board cache for this player (`index + 1`).
    #[must_use]
    pub const fn marker(self) -> u8 {
        self.0 + 1
    }

    /// Both players in seat order.
    ///
    /// ```
    /// use quoridor_engine::core::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::all().collect();
    /// assert_eq!(players, vec![PlayerId::ZERO, PlayerId::ONE]);
    /// ```
    pub fn all() -> impl Iterator<Item = PlayerId> {
        [PlayerId::ZERO, PlayerId::ONE].into_iter()
    }
}

impl TryFrom<usize> for PlayerId {
    type Error = RulesError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        match index {
            0 => Ok(PlayerId::ZERO),
            1 => Ok(PlayerId::ONE),
            _ => Err(RulesError::InvalidPlayerIndex(index)),
        }
    }
}

impl TryFrom<u8> for PlayerId {
    type Error = RulesError;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        PlayerId::try_from(usize::from(index))
    }
}

impl From<PlayerId> for u8 {
    fn from(player: PlayerId) -> Self {
        player.0
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// Per-player data storage with one slot per seat.
///
/// ## Example
///
/// ```
/// use quoridor_engine::core::{PlayerId, PlayerPair};
///
/// let mut walls: PlayerPair<u8> = PlayerPair::new(|_| 10);
/// walls[PlayerId::ONE] -= 1;
///
/// assert_eq!(walls[PlayerId::ZERO], 10);
/// assert_eq!(walls[PlayerId::ONE], 9);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerPair<T> {
    data: [T; PLAYER_COUNT],
}

impl<T> PlayerPair<T> {
    /// Create a pair with values from a factory function.
    pub fn new(factory: impl Fn(PlayerId) -> T) -> Self {
        Self {
            data: [factory(PlayerId::ZERO), factory(PlayerId::ONE)],
        }
    }

    /// Get a reference to a player's data.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a player's data.
    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (PlayerId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        PlayerId::all().zip(self.data.iter())
    }
}

impl<T> Index<PlayerId> for PlayerPair<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerPair<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}

/// A pawn on the board.
///
/// The seat is the `PlayerPair` slot the pawn is stored in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Player {
    /// Current cell.
    pub position: Position,
    /// Walls still in hand.
    pub walls_remaining: u8,
}

impl Player {
    /// Create the pawn for seat `id` at its starting cell.
    #[must_use]
    pub fn new(id: PlayerId, walls: u8) -> Self {
        Self {
            position: id.start_position(),
            walls_remaining: walls,
        }
    }
}
