//! Walls and their orientation.
//!
//! A wall is anchored on an interior grid intersection `(x, y)` with
//! `x, y ∈ [1, 8]` and is two cells long:
//!
//! - a horizontal wall sits on the gap between rows `y - 1` and `y`,
//!   covering columns `x` and `x + 1`;
//! - a vertical wall sits on the gap between columns `x - 1` and `x`,
//!   covering rows `y` and `y + 1`.

use serde::{Deserialize, Serialize};

/// Smallest legal anchor coordinate.
pub const MIN_ANCHOR: i8 = 1;

/// Largest legal anchor coordinate.
pub const MAX_ANCHOR: i8 = 8;

/// Which way a wall runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum WallOrientation {
    /// Runs along a row gap; blocks vertical steps.
    Horizontal,
    /// Runs along a column gap; blocks horizontal steps.
    Vertical,
}

impl WallOrientation {
    /// Both orientations, horizontal first.
    pub const ALL: [WallOrientation; 2] = [WallOrientation::Horizontal, WallOrientation::Vertical];
}

impl std::fmt::Display for WallOrientation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WallOrientation::Horizontal => write!(f, "h"),
            WallOrientation::Vertical => write!(f, "v"),
        }
    }
}

/// A placed (or candidate) wall.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Wall {
    /// Anchor column.
    pub x: i8,
    /// Anchor row.
    pub y: i8,
    /// Orientation.
    pub orientation: WallOrientation,
}

impl Wall {
    /// Create a wall. The anchor is not validated here.
    #[must_use]
    pub const fn new(x: i8, y: i8, orientation: WallOrientation) -> Self {
        Self { x, y, orientation }
    }

    /// Create a horizontal wall.
    #[must_use]
    pub const fn horizontal(x: i8, y: i8) -> Self {
        Self::new(x, y, WallOrientation::Horizontal)
    }

    /// Create a vertical wall.
    #[must_use]
    pub const fn vertical(x: i8, y: i8) -> Self {
        Self::new(x, y, WallOrientation::Vertical)
    }

    /// Is the anchor on an interior intersection?
    #[must_use]
    pub const fn anchor_in_range(&self) -> bool {
        self.x >= MIN_ANCHOR && self.x <= MAX_ANCHOR && self.y >= MIN_ANCHOR && self.y <= MAX_ANCHOR
    }

    /// Do two walls share an anchor (regardless of orientation)?
    #[must_use]
    pub const fn same_anchor(&self, other: &Wall) -> bool {
        self.x == other.x && self.y == other.y
    }

    /// Every anchor × orientation on the board, in row-major order with
    /// horizontal before vertical at each anchor.
    pub fn all_slots() -> impl Iterator<Item = Wall> {
        (MIN_ANCHOR..=MAX_ANCHOR).flat_map(|y| {
            (MIN_ANCHOR..=MAX_ANCHOR).flat_map(move |x| {
                WallOrientation::ALL
                    .into_iter()
                    .map(move |o| Wall::new(x, y, o))
            })
        })
    }
}

impl std::fmt::Display for Wall {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({}, {})", self.orientation, self.x, self.y)
    }
}
