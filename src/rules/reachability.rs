//! Can a player still reach their goal row?
//!
//! Breadth-first search over the grid, following only steps no wall
//! obstructs. Pawns do not block: an opponent can always be jumped or
//! walked around eventually, so only walls decide connectivity.

use std::collections::VecDeque;

use rustc_hash::FxHashSet;

use super::blocking::is_wall_blocking;
use super::topology::adjacent_squares;
use crate::core::{BlockingRule, GameState, PlayerId, Position};

/// Does `player` have at least one wall-free path to their goal row?
///
/// Terminates on any wall layout; a fully enclosed pawn yields `false`.
#[must_use]
pub fn has_path_to_goal(state: &GameState, player: PlayerId, rule: BlockingRule) -> bool {
    let mut found = false;
    flood(state, player, rule, |cell| {
        found = player.reached_goal(cell);
        found
    });
    found
}

/// Every cell `player`'s pawn can walk to, ignoring the other pawn.
///
/// Includes the pawn's own cell.
#[must_use]
pub fn reachable_cells(
    state: &GameState,
    player: PlayerId,
    rule: BlockingRule,
) -> FxHashSet<Position> {
    flood(state, player, rule, |_| false)
}

/// Breadth-first flood from `player`'s cell. Stops early once `stop`
/// returns true for a dequeued cell; returns the cells visited so far.
fn flood(
    state: &GameState,
    player: PlayerId,
    rule: BlockingRule,
    mut stop: impl FnMut(Position) -> bool,
) -> FxHashSet<Position> {
    let start = state.player(player).position;

    let mut visited: FxHashSet<Position> = FxHashSet::default();
    let mut frontier = VecDeque::from([start]);

    while let Some(cell) = frontier.pop_front() {
        if !visited.insert(cell) {
            continue;
        }
        if stop(cell) {
            break;
        }

        for next in adjacent_squares(cell.x, cell.y) {
            if !visited.contains(&next) && !is_wall_blocking(state, cell, next, rule) {
                frontier.push_back(next);
            }
        }
    }

    visited
}
