//! Core model types: positions, walls, players, state, actions, RNG,
//! configuration and errors.
//!
//! Nothing in here evaluates a rule; it is the data the rules read and
//! produce.

pub mod action;
pub mod config;
pub mod error;
pub mod player;
pub mod position;
pub mod rng;
pub mod state;
pub mod wall;

pub use action::{Action, ActionRecord};
pub use config::{BlockingRule, RulesConfig, SideJumpRule, DEFAULT_STARTING_WALLS};
pub use error::RulesError;
pub use player::{Player, PlayerId, PlayerPair, PLAYER_COUNT};
pub use position::{Position, BOARD_SIZE};
pub use rng::GameRng;
pub use state::{create_initial_state, Board, GameState};
pub use wall::{Wall, WallOrientation, MAX_ANCHOR, MIN_ANCHOR};
