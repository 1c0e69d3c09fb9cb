//! Grid geometry: bounds and orthogonal neighbours.

use smallvec::SmallVec;

use crate::core::Position;

/// Neighbour offsets in enumeration order: down, right, up, left.
pub const DIRECTIONS: [(i8, i8); 4] = [(0, 1), (1, 0), (0, -1), (-1, 0)];

/// Neighbours of one cell. Never more than four, so no heap allocation.
pub type Neighbours = SmallVec<[Position; 4]>;

/// Is `(x, y)` on the 9×9 board?
#[must_use]
pub fn is_within_bounds(x: i8, y: i8) -> bool {
    Position::new(x, y).in_bounds()
}

/// In-bounds orthogonal neighbours of `(x, y)`, in [`DIRECTIONS`] order.
///
/// ```
/// use quoridor_engine::core::Position;
/// use quoridor_engine::rules::adjacent_squares;
///
/// let corner = adjacent_squares(0, 0);
/// assert_eq!(corner.as_slice(), &[Position::new(0, 1), Position::new(1, 0)]);
/// ```
#[must_use]
pub fn adjacent_squares(x: i8, y: i8) -> Neighbours {
    let origin = Position::new(x, y);
    DIRECTIONS
        .iter()
        .map(|&(dx, dy)| origin.offset(dx, dy))
        .filter(|p| p.in_bounds())
        .collect()
}
