use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Style bucket for a rendered tile. The presentation layer decides what
/// each bucket looks like; the core only classifies.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TileStyle {
    HiddenNeutral,
    Flagged,
    RevealedSafe,
    RevealedHazard,
}

/// Pull-model render record for one tile, refreshed by the presentation
/// layer once per frame.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TileView {
    pub symbol: char,
    pub style: TileStyle,
}

impl From<Tile> for TileView {
    fn from(tile: Tile) -> Self {
        match (tile.is_revealed(), tile.is_flagged(), tile.content()) {
            (false, false, _) => Self {
                symbol: '?',
                style: TileStyle::HiddenNeutral,
            },
            (false, true, _) => Self {
                symbol: 'F',
                style: TileStyle::Flagged,
            },
            (true, _, Content::SafeCount(count)) => Self {
                symbol: (b'0' + count) as char,
                style: TileStyle::RevealedSafe,
            },
            (true, _, Content::Hazard) => Self {
                symbol: '!',
                style: TileStyle::RevealedHazard,
            },
        }
    }
}

impl Board {
    pub fn view_at(&self, pos: GridPos) -> Result<TileView> {
        Ok(self.tile_at(pos)?.into())
    }

    /// Full-board render snapshot. Pure data, no references back into the
    /// board; observers can hold it across frames.
    pub fn snapshot(&self) -> Array2<TileView> {
        let dim = (self.size().0 as usize, self.size().1 as usize);
        // indices produced by the shape are in bounds by construction
        Array2::from_shape_fn(dim, |(r, c)| {
            self.view_at((r as Coord, c as Coord)).unwrap()
        })
    }
}

/// Maps pointer pixels onto grid positions. Tile extents come from integer
/// division of the surface by the grid, exactly like the click handling the
/// render surface performs; pixels that land outside the grid are rejected
/// rather than clamped into a bogus index.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PointerMap {
    tile_width: u32,
    tile_height: u32,
    size: GridPos,
}

impl PointerMap {
    pub fn new(surface_width: u32, surface_height: u32, size: GridPos) -> Result<Self> {
        let (rows, cols) = size;
        if rows == 0 || cols == 0 {
            return Err(GameError::EmptyBoard);
        }

        let tile_width = surface_width / u32::from(cols);
        let tile_height = surface_height / u32::from(rows);
        if tile_width == 0 || tile_height == 0 {
            return Err(GameError::SurfaceTooSmall);
        }

        Ok(Self {
            tile_width,
            tile_height,
            size,
        })
    }

    pub const fn tile_extent(&self) -> (u32, u32) {
        (self.tile_width, self.tile_height)
    }

    /// `None` when the pixel falls outside `[0, rows) x [0, cols)`, which
    /// can happen at the far edge of the surface when it does not divide
    /// evenly by the grid.
    pub fn locate(&self, pixel_x: u32, pixel_y: u32) -> Option<GridPos> {
        let row = pixel_y / self.tile_height;
        let col = pixel_x / self.tile_width;

        if row < u32::from(self.size.0) && col < u32::from(self.size.1) {
            Some((row as Coord, col as Coord))
        } else {
            None
        }
    }
}
