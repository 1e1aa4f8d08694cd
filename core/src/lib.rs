use serde::{Deserialize, Serialize};

pub use board::*;
pub use error::*;
pub use generator::*;
pub use session::*;
pub use tile::*;
pub use types::*;
pub use view::*;

mod board;
mod error;
mod generator;
mod session;
mod tile;
mod types;
mod view;

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoardConfig {
    pub rows: Coord,
    pub cols: Coord,
    /// Per-cell hazard probability, in whole percent.
    pub hazard_chance: u8,
}

impl BoardConfig {
    pub const DEFAULT_HAZARD_CHANCE: u8 = 20;

    pub const fn new_unchecked(rows: Coord, cols: Coord, hazard_chance: u8) -> Self {
        Self {
            rows,
            cols,
            hazard_chance,
        }
    }

    /// A degenerate grid is rejected outright rather than clamped into shape.
    pub fn new(rows: Coord, cols: Coord, hazard_chance: u8) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(GameError::EmptyBoard);
        }
        if hazard_chance > 100 {
            return Err(GameError::InvalidHazardChance);
        }
        Ok(Self::new_unchecked(rows, cols, hazard_chance))
    }

    pub const fn size(&self) -> GridPos {
        (self.rows, self.cols)
    }

    pub const fn total_tiles(&self) -> CellCount {
        mult(self.rows, self.cols)
    }
}

/// Outcome of revealing a tile.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum RevealOutcome {
    /// Safe tile, carrying its hazard-neighbor count.
    Safe(u8),
    /// A hazard was uncovered; the session is lost.
    HazardTriggered,
}

impl RevealOutcome {
    pub const fn is_loss(self) -> bool {
        matches!(self, Self::HazardTriggered)
    }
}

/// Outcome of toggling a flag.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum FlagOutcome {
    Placed,
    Removed,
}

/// What the one-time pre-solve did around the first click.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct HandicapOutcome {
    pub flagged: CellCount,
    pub revealed: CellCount,
}

impl HandicapOutcome {
    /// Bounded by `(2 * radius + 1)^2`, fewer near edges.
    pub const fn tiles_touched(&self) -> CellCount {
        self.flagged + self.revealed
    }
}
