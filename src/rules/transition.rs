//! State transitions.
//!
//! Both functions are unchecked: they apply whatever they are given. Use
//! [`legal_moves`](super::legal_moves) / [`is_legal_wall`](super::is_legal_wall)
//! first, or go through the checked entry points on
//! [`Quoridor`](super::Quoridor).

use crate::core::{GameState, PlayerId, Position, Wall};

/// Move `player`'s pawn to `to` and pass the turn.
///
/// Sets the winner when `to` lies on the mover's goal row.
#[must_use]
pub fn apply_move(state: &GameState, player: PlayerId, to: Position) -> GameState {
    let mut next = state.clone();
    next.relocate(player, to);
    next.set_current_player(state.current_player().opponent());
    next.set_winner(player.reached_goal(to).then_some(player));
    next
}

/// Place `wall` for the player on move, spend one wall from their hand and
/// pass the turn.
///
/// The wall count saturates at zero.
#[must_use]
pub fn apply_wall(state: &GameState, wall: Wall) -> GameState {
    let mover = state.current_player();
    let mut next = state.clone();

    let hand = &mut next.player_mut(mover).walls_remaining;
    *hand = hand.saturating_sub(1);

    next.push_wall(wall);
    next.set_current_player(mover.opponent());
    next
}
