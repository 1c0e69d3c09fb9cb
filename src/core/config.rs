//! Rules configuration.
//!
//! Three rule details are commonly played differently from the published
//! game:
//!
//! - whether a player with no walls left may still place one;
//! - how a pawn sidesteps an opponent it cannot jump straight over;
//! - whether a wall also stops steps running alongside it.
//!
//! `RulesConfig` makes them explicit. The defaults enforce the wall supply,
//! use the house side-jump rule and let walls stop only the steps that
//! cross them.

use serde::{Deserialize, Serialize};

/// Walls each player starts with.
pub const DEFAULT_STARTING_WALLS: u8 = 10;

/// How side jumps around an adjacent opponent are generated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SideJumpRule {
    /// Always evaluated, even when the straight jump is open. The landing
    /// cell sits beside the *mover*: `(x ± 1, player.y)` for a vertical
    /// face-off, `(player.x, y ± 1)` for a horizontal one. The step onto it
    /// and the step from it toward the opponent's row must both be open.
    #[default]
    AlongsidePlayer,

    /// Published rules: only when the straight jump is off the board or
    /// walled off. The landing cell sits beside the *opponent* and the step
    /// from the opponent onto it must be open.
    Diagonal,
}

/// Which steps a wall obstructs.
///
/// Both rules share one edge test: a horizontal wall at `(wx, wy)` stops a
/// step whose larger row is `wy` and whose columns overlap `wx..=wx + 1`.
/// Vertical walls are the transpose.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BlockingRule {
    /// The edge test only applies to steps that cross the wall: vertical
    /// steps for a horizontal wall, horizontal steps for a vertical one.
    #[default]
    PerAxis,

    /// The edge test applies to every step. A horizontal wall then also
    /// stops sideways steps along row `wy` between columns `wx - 1` and
    /// `wx + 2`, and a vertical wall the matching up/down steps in column
    /// `wx`.
    AnyAxis,
}

/// Rules configuration.
///
/// ```
/// use quoridor_engine::core::{RulesConfig, SideJumpRule};
///
/// let config = RulesConfig::default()
///     .with_side_jumps(SideJumpRule::Diagonal)
///     .with_starting_walls(6);
///
/// assert!(config.enforce_wall_supply);
/// assert_eq!(config.starting_walls, 6);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RulesConfig {
    /// Walls in each player's hand at the start.
    pub starting_walls: u8,

    /// Reject wall placements by a player whose supply is empty.
    ///
    /// With this off, placement is allowed regardless of supply and the
    /// count saturates at zero instead of going negative.
    pub enforce_wall_supply: bool,

    /// Side-jump generation rule.
    pub side_jumps: SideJumpRule,

    /// Which steps a wall obstructs.
    #[serde(default)]
    pub blocking: BlockingRule,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            starting_walls: DEFAULT_STARTING_WALLS,
            enforce_wall_supply: true,
            side_jumps: SideJumpRule::default(),
            blocking: BlockingRule::default(),
        }
    }
}

impl RulesConfig {
    /// Set the starting wall count.
    #[must_use]
    pub fn with_starting_walls(mut self, walls: u8) -> Self {
        self.starting_walls = walls;
        self
    }

    /// Enable or disable the wall supply check.
    #[must_use]
    pub fn with_wall_supply_enforced(mut self, enforce: bool) -> Self {
        self.enforce_wall_supply = enforce;
        self
    }

    /// Set the side-jump rule.
    #[must_use]
    pub fn with_side_jumps(mut self, rule: SideJumpRule) -> Self {
        self.side_jumps = rule;
        self
    }

    /// Set the blocking rule.
    #[must_use]
    pub fn with_blocking(mut self, rule: BlockingRule) -> Self {
        self.blocking = rule;
        self
    }
}
