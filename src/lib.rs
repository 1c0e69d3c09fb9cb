//! # quoridor-engine
//!
//! Rules engine for two-player Quoridor on a 9×9 board.
//!
//! ## Design Principles
//!
//! 1. **Pure**: every rule is a function from an immutable `GameState` to
//!    an answer or a new `GameState`. Nothing is mutated behind the
//!    caller's back, so states can be shared across threads freely.
//!
//! 2. **Connectivity first**: a wall is only legal if both players can
//!    still reach their goal rows, checked on a tentative copy before the
//!    wall is ever committed.
//!
//! 3. **Checked and unchecked paths**: `apply_move` / `apply_wall` apply
//!    blindly for callers that already validated; `Quoridor::try_apply`
//!    re-validates and reports misuse as a `RulesError`.
//!
//! ## Architecture
//!
//! - **Persistent wall list**: walls live in an `im::Vector`, so successor
//!   and tentative states share structure with their predecessor.
//!
//! - **Configurable rule details**: the wall-supply check and the side-jump
//!   variant are chosen through `RulesConfig`.
//!
//! ## Modules
//!
//! - `core`: positions, walls, players, state, actions, RNG, configuration, errors
//! - `rules`: topology, blocking, reachability, legal moves/walls, transitions
//! - `strategy`: pluggable action selection and a match driver
//!
//! ## Example
//!
//! ```
//! use quoridor_engine::{Action, PlayerId, Quoridor, Wall};
//!
//! let rules = Quoridor::default();
//! let state = rules.initial_state();
//!
//! let state = rules.try_apply_wall(&state, Wall::horizontal(4, 2)).unwrap();
//! assert_eq!(state.player(PlayerId::ZERO).walls_remaining, 9);
//!
//! let moves = rules.legal_moves(&state, PlayerId::ONE);
//! let state = rules.try_apply(&state, PlayerId::ONE, Action::Move(moves[0])).unwrap();
//! assert_eq!(state.current_player(), PlayerId::ZERO);
//! ```

pub mod core;
pub mod rules;
pub mod strategy;

// Re-export commonly used types
pub use crate::core::{
    create_initial_state, Action, ActionRecord, BlockingRule, Board, GameRng, GameState, Player,
    PlayerId, PlayerPair, Position, RulesConfig, RulesError, SideJumpRule, Wall, WallOrientation,
    BOARD_SIZE,
};

pub use crate::rules::{
    adjacent_squares, apply_move, apply_wall, has_path_to_goal, is_legal_wall, is_wall_blocking,
    is_within_bounds, legal_moves, legal_walls, reachable_cells, Moves, Quoridor,
};

pub use crate::strategy::{
    play_match, FirstLegal, MatchConfig, MatchOutcome, MatchReport, RandomStrategy, Strategy,
};
