//! Wall placement legality.
//!
//! A candidate wall must:
//!
//! 1. have its anchor on an interior intersection;
//! 2. not share an anchor with any placed wall;
//! 3. not overlap a parallel wall on the same line;
//! 4. leave both players a path to their goal rows.
//!
//! Step 4 runs on a copy of the state with the candidate appended, so the
//! caller's state is never touched. With the wall supply enforced, a player
//! whose hand is empty has no legal wall at all.

use super::reachability::has_path_to_goal;
use crate::core::{BlockingRule, GameState, PlayerId, RulesConfig, Wall, WallOrientation};

/// Does `wall` collide with a wall already on the board?
///
/// Covers the anchor-range, shared-anchor and parallel-overlap checks; it
/// does not look at connectivity.
#[must_use]
pub fn conflicts_with_placed(state: &GameState, wall: &Wall) -> bool {
    if !wall.anchor_in_range() {
        return true;
    }

    state.walls().iter().any(|existing| {
        if existing.same_anchor(wall) {
            return true;
        }
        if existing.orientation != wall.orientation {
            return false;
        }
        match wall.orientation {
            WallOrientation::Horizontal => existing.y == wall.y && within_one(existing.x, wall.x),
            WallOrientation::Vertical => existing.x == wall.x && within_one(existing.y, wall.y),
        }
    })
}

/// Would placing `wall` keep both players connected to their goals?
#[must_use]
pub fn keeps_paths_open(state: &GameState, wall: &Wall, rule: BlockingRule) -> bool {
    let tentative = state.with_extra_wall(*wall);
    PlayerId::all().all(|player| has_path_to_goal(&tentative, player, rule))
}

/// May the player on move place `wall`?
#[must_use]
pub fn is_legal_wall(state: &GameState, wall: &Wall, config: &RulesConfig) -> bool {
    if config.enforce_wall_supply && !has_walls_in_hand(state, state.current_player()) {
        return false;
    }
    !conflicts_with_placed(state, wall) && keeps_paths_open(state, wall, config.blocking)
}

/// Every wall the player on move may place, in [`Wall::all_slots`] order.
///
/// Empty once the game has a winner.
#[must_use]
pub fn legal_walls(state: &GameState, config: &RulesConfig) -> Vec<Wall> {
    if state.is_terminal() {
        return Vec::new();
    }
    if config.enforce_wall_supply && !has_walls_in_hand(state, state.current_player()) {
        return Vec::new();
    }

    Wall::all_slots()
        .filter(|wall| {
            !conflicts_with_placed(state, wall) && keeps_paths_open(state, wall, config.blocking)
        })
        .collect()
}

/// `|a - b| <= 1` without overflowing on extreme coordinates.
fn within_one(a: i8, b: i8) -> bool {
    (i16::from(a) - i16::from(b)).abs() <= 1
}

fn has_walls_in_hand(state: &GameState, player: PlayerId) -> bool {
    state.player(player).walls_remaining > 0
}
