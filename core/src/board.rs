use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// The playing field: a fixed-size grid of tiles plus the live count of
/// hazards that still lack a flag. The counter is the win condition — it
/// reaches zero exactly when every hazard tile is flagged, regardless of
/// how many safe tiles remain hidden.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    tiles: Array2<Tile>,
    remaining_hazards: CellCount,
    triggered: Option<GridPos>,
}

impl Board {
    /// Builds a board from a hazard mask: hazard tiles where the mask is
    /// `true`, `SafeCount` tiles everywhere else. Adjacency counts are
    /// computed here, over the complete mask, so content is final from the
    /// moment a `Board` exists.
    pub fn from_hazard_mask(mask: Array2<bool>) -> Result<Self> {
        let (rows, cols) = mask.dim();
        if rows == 0 || cols == 0 {
            return Err(GameError::EmptyBoard);
        }
        if rows > Coord::MAX as usize || cols > Coord::MAX as usize {
            return Err(GameError::BoardTooLarge);
        }

        let remaining_hazards = mask
            .iter()
            .filter(|&&is_hazard| is_hazard)
            .count()
            .try_into()
            .unwrap();

        let tiles = Array2::from_shape_fn((rows, cols), |(r, c)| {
            if mask[(r, c)] {
                Tile::new(Content::Hazard)
            } else {
                let pos = (r as Coord, c as Coord);
                let count = mask
                    .iter_neighbors(pos)
                    .filter(|&neighbor| mask[neighbor.to_nd_index()])
                    .count() as u8;
                Tile::new(Content::SafeCount(count))
            }
        });

        Ok(Self {
            tiles,
            remaining_hazards,
            triggered: None,
        })
    }

    /// Deterministic constructor from explicit hazard positions.
    pub fn from_hazard_coords(size: GridPos, hazards: &[GridPos]) -> Result<Self> {
        let mut mask: Array2<bool> = Array2::default(size.to_nd_index());

        for &pos in hazards {
            if pos.0 >= size.0 || pos.1 >= size.1 {
                return Err(GameError::InvalidCoordinate);
            }
            mask[pos.to_nd_index()] = true;
        }

        Self::from_hazard_mask(mask)
    }

    pub fn size(&self) -> GridPos {
        let dim = self.tiles.dim();
        (dim.0.try_into().unwrap(), dim.1.try_into().unwrap())
    }

    pub fn total_tiles(&self) -> CellCount {
        self.tiles.len().try_into().unwrap()
    }

    /// Hazard tiles that are not currently flagged. Zero means won.
    pub fn remaining_hazards(&self) -> CellCount {
        self.remaining_hazards
    }

    pub fn all_hazards_flagged(&self) -> bool {
        self.remaining_hazards == 0
    }

    /// Where the losing reveal happened, if it has. Never cleared.
    pub fn triggered_hazard(&self) -> Option<GridPos> {
        self.triggered
    }

    pub fn is_lost(&self) -> bool {
        self.triggered.is_some()
    }

    pub fn tile_at(&self, pos: GridPos) -> Result<Tile> {
        let pos = self.validate_pos(pos)?;
        Ok(self.tiles[pos.to_nd_index()])
    }

    /// Uncovers a hidden, unflagged tile. Revealing a hazard loses the
    /// session; revealing a safe tile reports its neighbor count. No
    /// cascade: a zero-count tile opens only itself.
    pub fn reveal(&mut self, pos: GridPos) -> Result<RevealOutcome> {
        let pos = self.validate_pos(pos)?;
        let tile = self.tiles[pos.to_nd_index()];

        if tile.is_revealed() {
            return Err(GameError::AlreadyRevealed);
        }
        if tile.is_flagged() {
            return Err(GameError::TileFlagged);
        }

        self.tiles[pos.to_nd_index()].mark_revealed();

        Ok(match tile.content() {
            Content::Hazard => {
                if self.triggered.is_none() {
                    self.triggered = Some(pos);
                }
                RevealOutcome::HazardTriggered
            }
            Content::SafeCount(count) => RevealOutcome::Safe(count),
        })
    }

    /// Flips the flag on a hidden tile. Only hazard tiles move the
    /// remaining-hazard counter, in either direction, so flag-then-unflag
    /// is always a perfect round trip.
    pub fn toggle_flag(&mut self, pos: GridPos) -> Result<FlagOutcome> {
        let pos = self.validate_pos(pos)?;
        let tile = self.tiles[pos.to_nd_index()];

        if tile.is_revealed() {
            return Err(GameError::TileAlreadyRevealed);
        }

        Ok(if tile.is_flagged() {
            self.tiles[pos.to_nd_index()].set_flag(false);
            if tile.content().is_hazard() {
                self.remaining_hazards += 1;
            }
            FlagOutcome::Removed
        } else {
            self.tiles[pos.to_nd_index()].set_flag(true);
            if tile.content().is_hazard() {
                self.remaining_hazards -= 1;
            }
            FlagOutcome::Placed
        })
    }

    /// One-time pre-solve of the Chebyshev-`radius` square around `pos`:
    /// unflagged hazards get flagged, untouched safe tiles get revealed,
    /// tiles the player already flagged are left alone. Safe by
    /// construction — every hazard in range is flagged, never revealed.
    pub fn apply_handicap(&mut self, pos: GridPos, radius: Coord) -> Result<HandicapOutcome> {
        let pos = self.validate_pos(pos)?;
        let mut outcome = HandicapOutcome::default();

        for cell in clamped_block(pos, radius, self.size()) {
            let tile = self.tiles[cell.to_nd_index()];
            if tile.is_revealed() || tile.is_flagged() {
                continue;
            }

            if tile.content().is_hazard() {
                self.tiles[cell.to_nd_index()].set_flag(true);
                self.remaining_hazards -= 1;
                outcome.flagged += 1;
            } else {
                self.tiles[cell.to_nd_index()].mark_revealed();
                outcome.revealed += 1;
            }
        }

        Ok(outcome)
    }

    fn validate_pos(&self, pos: GridPos) -> Result<GridPos> {
        let size = self.size();
        if pos.0 < size.0 && pos.1 < size.1 {
            Ok(pos)
        } else {
            Err(GameError::InvalidCoordinate)
        }
    }
}
