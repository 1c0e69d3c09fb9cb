//! Strategies: the pluggable decision layer on top of the rules.
//!
//! The rules engine answers "what is legal" and "what happens next"; a
//! [`Strategy`] answers "what do I play". [`play_match`] seats two of them
//! and runs a game through the checked entry points.

pub mod playout;
pub mod policy;

pub use playout::{play_match, MatchConfig, MatchOutcome, MatchReport};
pub use policy::{FirstLegal, RandomStrategy, Strategy, DEFAULT_WALL_PROBABILITY};
