//! Rule evaluation and state transitions.
//!
//! Leaves first:
//! - `topology`: bounds and neighbours on the 9×9 grid
//! - `blocking`: does a wall obstruct a single step
//! - `reachability`: can a player still reach their goal row
//! - `moves` / `walls`: legal pawn moves and wall placements
//! - `transition`: successor states
//! - `engine`: the configured `Quoridor` rules object with checked entry points
//!
//! Everything here is a pure function of its inputs. No function logs
//! except the checked entry points on `Quoridor`.

pub mod blocking;
pub mod engine;
pub mod moves;
pub mod reachability;
pub mod topology;
pub mod transition;
pub mod walls;

pub use blocking::{is_wall_blocking, wall_blocks};
pub use engine::Quoridor;
pub use moves::{legal_moves, Moves};
pub use reachability::{has_path_to_goal, reachable_cells};
pub use topology::{adjacent_squares, is_within_bounds, Neighbours, DIRECTIONS};
pub use transition::{apply_move, apply_wall};
pub use walls::{conflicts_with_placed, is_legal_wall, keeps_paths_open, legal_walls};
