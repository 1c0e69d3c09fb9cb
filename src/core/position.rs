//! Board coordinates.
//!
//! The board is a fixed 9×9 grid. `x` is the column, `y` the row; player 0
//! starts on row 8 and races toward row 0, player 1 the other way.

use serde::{Deserialize, Serialize};

/// Side length of the board in cells.
pub const BOARD_SIZE: i8 = 9;

/// A cell on the board.
///
/// Coordinates are signed so that neighbour arithmetic (`x - 1`, jump
/// landings) can step off the board and be rejected by a bounds check
/// instead of underflowing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    /// Column, `0..9`.
    pub x: i8,
    /// Row, `0..9`.
    pub y: i8,
}

impl Position {
    /// Create a position. No bounds check is performed.
    #[must_use]
    pub const fn new(x: i8, y: i8) -> Self {
        Self { x, y }
    }

    /// Offset this position by `(dx, dy)`, saturating at the `i8` limits.
    #[must_use]
    pub const fn offset(self, dx: i8, dy: i8) -> Self {
        Self::new(self.x.saturating_add(dx), self.y.saturating_add(dy))
    }

    /// Is this position on the board?
    #[must_use]
    pub const fn in_bounds(self) -> bool {
        self.x >= 0 && self.x < BOARD_SIZE && self.y >= 0 && self.y < BOARD_SIZE
    }
}

impl From<(i8, i8)> for Position {
    fn from((x, y): (i8, i8)) -> Self {
        Self::new(x, y)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_offset() {
        let p = Position::new(4, 4);
        assert_eq!(p.offset(1, 0), Position::new(5, 4));
        assert_eq!(p.offset(0, -1), Position::new(4, 3));
    }

    #[test]
    fn test_offset_saturates() {
        let corner = Position::new(i8::MAX, i8::MIN);
        assert_eq!(corner.offset(1, -1), corner);
        assert!(!corner.offset(1, -1).in_bounds());
    }

    #[test]
    fn test_position_in_bounds() {
        assert!(Position::new(0, 0).in_bounds());
        assert!(Position::new(8, 8).in_bounds());
        assert!(!Position::new(-1, 0).in_bounds());
        assert!(!Position::new(0, 9).in_bounds());
    }

    #[test]
    fn test_position_display() {
        assert_eq!(format!("{}", Position::new(3, 7)), "(3, 7)");
        assert_eq!(Position::from((2, 5)), Position::new(2, 5));
    }
}
