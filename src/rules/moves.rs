//! Pawn move generation: steps, straight jumps and side jumps.
//!
//! A pawn steps to any unobstructed neighbour that the opponent does not
//! occupy. When the opponent stands on that neighbour the pawn may instead
//! jump: straight over them if the cell beyond is on the board and not
//! walled off, and sideways according to the configured [`SideJumpRule`].
//!
//! Destinations are returned once each, in the order first generated.

use smallvec::SmallVec;

use super::blocking::is_wall_blocking;
use super::topology::adjacent_squares;
use crate::core::{BlockingRule, GameState, PlayerId, Position, RulesConfig, SideJumpRule};

/// Destination list. A pawn never has more than five distinct targets.
pub type Moves = SmallVec<[Position; 6]>;

/// All cells `player` may move their pawn to.
///
/// Empty once the game has a winner.
#[must_use]
pub fn legal_moves(state: &GameState, player: PlayerId, config: &RulesConfig) -> Moves {
    let mut moves = Moves::new();
    if state.is_terminal() {
        return moves;
    }

    let walls = config.blocking;
    let me = state.player(player).position;
    let them = state.player(player.opponent()).position;

    for adj in adjacent_squares(me.x, me.y) {
        if is_wall_blocking(state, me, adj, walls) {
            continue;
        }
        if adj != them {
            push_unique(&mut moves, adj);
            continue;
        }

        let straight = them.offset(them.x - me.x, them.y - me.y);
        let straight_open = straight.in_bounds() && !is_wall_blocking(state, them, straight, walls);
        if straight_open {
            push_unique(&mut moves, straight);
        }

        match config.side_jumps {
            SideJumpRule::AlongsidePlayer => {
                alongside_player(state, me, them, walls, &mut moves);
            }
            SideJumpRule::Diagonal if !straight_open => {
                diagonal(state, me, them, walls, &mut moves);
            }
            SideJumpRule::Diagonal => {}
        }
    }

    moves
}

/// Cells beside the mover, reachable when both the sidestep and the step
/// from there toward the opponent's row are open.
fn alongside_player(
    state: &GameState,
    me: Position,
    them: Position,
    walls: BlockingRule,
    out: &mut Moves,
) {
    let sides = if me.x == them.x {
        [me.offset(-1, 0), me.offset(1, 0)]
    } else if me.y == them.y {
        [me.offset(0, -1), me.offset(0, 1)]
    } else {
        return;
    };

    for side in sides {
        let toward = if me.x == them.x {
            Position::new(side.x, them.y)
        } else {
            Position::new(them.x, side.y)
        };
        if side.in_bounds()
            && !is_wall_blocking(state, me, side, walls)
            && !is_wall_blocking(state, side, toward, walls)
        {
            push_unique(out, side);
        }
    }
}

/// Cells beside the opponent, reachable when the step off the opponent's
/// cell is open.
fn diagonal(state: &GameState, me: Position, them: Position, walls: BlockingRule, out: &mut Moves) {
    let sides = if me.x == them.x {
        [them.offset(-1, 0), them.offset(1, 0)]
    } else {
        [them.offset(0, -1), them.offset(0, 1)]
    };

    for side in sides {
        if side.in_bounds() && !is_wall_blocking(state, them, side, walls) {
            push_unique(out, side);
        }
    }
}

fn push_unique(moves: &mut Moves, to: Position) {
    if !moves.contains(&to) {
        moves.push(to);
    }
}
