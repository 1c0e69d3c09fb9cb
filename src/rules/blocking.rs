//! Does a wall obstruct a single step between two adjacent cells?
//!
//! A horizontal wall anchored at `(wx, wy)` lies on the gap above row `wy`
//! and covers columns `wx..=wx+1`, so it stops any step that crosses that
//! row gap inside those columns. Vertical walls are the transpose: gap left
//! of column `wx`, rows `wy..=wy+1`, stopping steps that cross the column
//! gap. Under [`BlockingRule::AnyAxis`] the same edge test is also applied
//! to steps running alongside the wall.
//!
//! Nothing is cached. Every query scans the wall list of the state it is
//! handed, so a tentative wall is seen immediately.

use crate::core::{BlockingRule, GameState, Position, Wall, WallOrientation};

/// Is the step `from → to` obstructed by any wall in `state`?
#[must_use]
pub fn is_wall_blocking(
    state: &GameState,
    from: Position,
    to: Position,
    rule: BlockingRule,
) -> bool {
    state
        .walls()
        .iter()
        .any(|wall| wall_blocks(wall, from, to, rule))
}

/// Is the step `from → to` obstructed by this one wall?
///
/// Order of the endpoints does not matter.
#[must_use]
pub fn wall_blocks(wall: &Wall, from: Position, to: Position, rule: BlockingRule) -> bool {
    let (min_x, max_x) = (from.x.min(to.x), from.x.max(to.x));
    let (min_y, max_y) = (from.y.min(to.y), from.y.max(to.y));
    let per_axis = rule == BlockingRule::PerAxis;

    match wall.orientation {
        WallOrientation::Horizontal => {
            (!per_axis || min_y != max_y)
                && wall.y == max_y
                && wall.x <= max_x
                && wall.x.saturating_add(1) >= min_x
        }
        WallOrientation::Vertical => {
            (!per_axis || min_x != max_x)
                && wall.x == max_x
                && wall.y <= max_y
                && wall.y.saturating_add(1) >= min_y
        }
    }
}
