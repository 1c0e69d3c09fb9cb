//! Game state: the aggregate every rule reads and every transition produces.
//!
//! ## GameState
//!
//! - Board cache (who stands where)
//! - Both pawns with their wall supplies
//! - Placed walls, in placement order
//! - Player on move and winner
//!
//! States are values. Transitions return a new `GameState` and never touch
//! the one they were given; walls live in an `im::Vector` so a successor
//! shares the wall list with its predecessor instead of copying it.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::config::DEFAULT_STARTING_WALLS;
use super::player::{Player, PlayerId, PlayerPair};
use super::position::{Position, BOARD_SIZE};
use super::wall::Wall;

/// Occupancy cache indexed `board[x][y]`: 0 for empty, otherwise the
/// occupant's index + 1.
pub type Board = [[u8; BOARD_SIZE as usize]; BOARD_SIZE as usize];

/// Complete game state.
///
/// Deserializing reads only the authoritative parts and rebuilds the board
/// cache and winner through [`GameState::from_parts`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "StoredGameState")]
pub struct GameState {
    /// Derived from `players`; rebuilt or patched on every transition.
    board: Board,

    players: PlayerPair<Player>,

    /// Placement order is preserved for transcripts; rule evaluation does
    /// not depend on it.
    walls: Vector<Wall>,

    current_player: PlayerId,

    winner: Option<PlayerId>,
}

/// Serialized form accepted on load. Any `board` or `winner` in the input
/// is ignored.
#[derive(Deserialize)]
struct StoredGameState {
    players: PlayerPair<Player>,
    walls: Vector<Wall>,
    current_player: PlayerId,
}

impl From<StoredGameState> for GameState {
    fn from(stored: StoredGameState) -> Self {
        Self::from_parts(stored.players, stored.walls, stored.current_player)
    }
}

/// The standard opening position: both pawns centred on their home rows,
/// ten walls each, player 0 to move.
#[must_use]
pub fn create_initial_state() -> GameState {
    GameState::new(DEFAULT_STARTING_WALLS)
}

impl GameState {
    /// Opening position with a custom wall supply.
    #[must_use]
    pub fn new(starting_walls: u8) -> Self {
        let players = PlayerPair::new(|id| Player::new(id, starting_walls));
        Self::from_parts(players, Vector::new(), PlayerId::ZERO)
    }

    /// Assemble a state from its authoritative parts.
    ///
    /// The board cache is rebuilt from the pawn positions and the winner is
    /// derived from them. Nothing else is validated: this is how hosts
    /// restore a position and how tests build fixtures.
    #[must_use]
    pub fn from_parts(
        players: PlayerPair<Player>,
        walls: impl IntoIterator<Item = Wall>,
        current_player: PlayerId,
    ) -> Self {
        let mut board = [[0; BOARD_SIZE as usize]; BOARD_SIZE as usize];
        for (id, player) in players.iter() {
            if player.position.in_bounds() {
                board[player.position.x as usize][player.position.y as usize] = id.marker();
            }
        }

        let winner = PlayerId::all().find(|&id| id.reached_goal(players[id].position));

        Self {
            board,
            players,
            walls: walls.into_iter().collect(),
            current_player,
            winner,
        }
    }

    /// Same walls and turn, with the pawns moved to the given cells.
    ///
    /// ```
    /// use quoridor_engine::core::{create_initial_state, PlayerId, Position};
    ///
    /// let state = create_initial_state().with_pawns(Position::new(4, 5), Position::new(4, 4));
    /// assert_eq!(state.occupant(Position::new(4, 4)), Some(PlayerId::ONE));
    /// assert_eq!(state.occupant(Position::new(4, 8)), None);
    /// ```
    #[must_use]
    pub fn with_pawns(&self, zero: Position, one: Position) -> Self {
        let mut players = self.players.clone();
        players[PlayerId::ZERO].position = zero;
        players[PlayerId::ONE].position = one;
        Self::from_parts(players, self.walls.clone(), self.current_player)
    }

    // === Accessors ===

    /// The occupancy cache.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Who stands on a cell, if anyone. Off-board cells are empty.
    #[must_use]
    pub fn occupant(&self, at: Position) -> Option<PlayerId> {
        if !at.in_bounds() {
            return None;
        }
        match self.board[at.x as usize][at.y as usize] {
            0 => None,
            marker => PlayerId::try_from(marker - 1).ok(),
        }
    }

    /// Both pawns.
    #[must_use]
    pub fn players(&self) -> &PlayerPair<Player> {
        &self.players
    }

    /// One pawn.
    #[must_use]
    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id]
    }

    /// Placed walls, oldest first.
    #[must_use]
    pub fn walls(&self) -> &Vector<Wall> {
        &self.walls
    }

    /// The player on move.
    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.current_player
    }

    /// The winner, once someone has reached their goal row.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        self.winner
    }

    /// Has the game ended?
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.winner.is_some()
    }

    // === Successor construction (used by the transition rules) ===

    /// Copy of this state with one more wall and nothing else changed.
    ///
    /// Used to test a candidate wall without committing it.
    #[must_use]
    pub(crate) fn with_extra_wall(&self, wall: Wall) -> Self {
        let mut next = self.clone();
        next.walls.push_back(wall);
        next
    }

    /// Move a pawn in place, keeping the board cache in sync.
    pub(crate) fn relocate(&mut self, id: PlayerId, to: Position) {
        let from = self.players[id].position;
        if from.in_bounds() {
            self.board[from.x as usize][from.y as usize] = 0;
        }
        if to.in_bounds() {
            self.board[to.x as usize][to.y as usize] = id.marker();
        }
        self.players[id].position = to;
    }

    pub(crate) fn player_mut(&mut self, id: PlayerId) -> &mut Player {
        &mut self.players[id]
    }

    pub(crate) fn push_wall(&mut self, wall: Wall) {
        self.walls.push_back(wall);
    }

    pub(crate) fn set_current_player(&mut self, id: PlayerId) {
        self.current_player = id;
    }

    pub(crate) fn set_winner(&mut self, winner: Option<PlayerId>) {
        self.winner = winner;
    }
}

impl Default for GameState {
    fn default() -> Self {
        create_initial_state()
    }
}
