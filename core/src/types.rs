use ndarray::Array2;

/// Single coordinate axis used for board width, height, and positions.
pub type Coord = u8;

/// Count type used for hazard counts and total-tile counts.
pub type CellCount = u16;

/// Two-dimensional grid position `(row, col)`.
pub type GridPos = (Coord, Coord);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for GridPos {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}

pub trait NeighborIterExt {
    fn iter_neighbors(&self, index: GridPos) -> NeighborIter;
}

impl<T> NeighborIterExt for Array2<T> {
    fn iter_neighbors(&self, index: GridPos) -> NeighborIter {
        let dim = self.dim();
        let size = (dim.0.try_into().unwrap(), dim.1.try_into().unwrap());
        NeighborIter::new(index, size)
    }
}

const DISPLACEMENTS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Applies `delta` to `pos`, returning a value only when it remains in bounds.
fn apply_delta(pos: GridPos, delta: (isize, isize), bounds: GridPos) -> Option<GridPos> {
    let (row, col) = pos;
    let (drow, dcol) = delta;
    let (max_row, max_col) = bounds;

    let next_row = row.checked_add_signed(drow.try_into().ok()?)?;
    if next_row >= max_row {
        return None;
    }

    let next_col = col.checked_add_signed(dcol.try_into().ok()?)?;
    if next_col >= max_col {
        return None;
    }

    Some((next_row, next_col))
}

/// Iterator over the up-to-8 Moore neighbors of a position. Neighbors
/// outside the grid are skipped, never wrapped.
#[derive(Debug)]
pub struct NeighborIter {
    center: GridPos,
    bounds: GridPos,
    index: u8,
}

impl NeighborIter {
    fn new(center: GridPos, bounds: GridPos) -> Self {
        Self {
            center,
            bounds,
            index: 0,
        }
    }
}

impl Iterator for NeighborIter {
    type Item = GridPos;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if usize::from(self.index) >= DISPLACEMENTS.len() {
                return None;
            }

            let next_item =
                apply_delta(self.center, DISPLACEMENTS[self.index as usize], self.bounds);
            self.index += 1;

            if next_item.is_some() {
                return next_item;
            }
        }
    }
}

/// Iterates the unique cells of the Chebyshev-`radius` square around
/// `center`, clamped to `bounds`. Offsets that would fall off the grid
/// collapse onto the clamped rows/columns, so each cell is yielded exactly
/// once no matter how close `center` sits to an edge.
pub fn clamped_block(
    center: GridPos,
    radius: Coord,
    bounds: GridPos,
) -> impl Iterator<Item = GridPos> {
    let (row, col) = center;
    let (rows, cols) = bounds;

    let row_start = row.saturating_sub(radius);
    let row_end = row.saturating_add(radius).min(rows.saturating_sub(1));
    let col_start = col.saturating_sub(radius);
    let col_end = col.saturating_add(radius).min(cols.saturating_sub(1));

    (row_start..=row_end).flat_map(move |r| (col_start..=col_end).map(move |c| (r, c)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neighbor_iter_clips_at_corners_and_edges() {
        let grid: Array2<u8> = Array2::default((3, 3));

        let corner: Vec<GridPos> = grid.iter_neighbors((0, 0)).collect();
        assert_eq!(corner, vec![(0, 1), (1, 0), (1, 1)]);

        let edge_count = grid.iter_neighbors((0, 1)).count();
        assert_eq!(edge_count, 5);

        let center_count = grid.iter_neighbors((1, 1)).count();
        assert_eq!(center_count, 8);
    }

    #[test]
    fn clamped_block_collapses_at_an_edge() {
        let cells: Vec<GridPos> = clamped_block((0, 0), 3, (10, 10)).collect();

        assert_eq!(cells.len(), 16);
        assert!(cells.iter().all(|&(r, c)| r <= 3 && c <= 3));
    }

    #[test]
    fn clamped_block_in_the_interior_is_a_full_square() {
        let cells: Vec<GridPos> = clamped_block((5, 5), 3, (20, 20)).collect();

        assert_eq!(cells.len(), 49);
        assert!(cells.contains(&(2, 2)));
        assert!(cells.contains(&(8, 8)));
    }

    #[test]
    fn clamped_block_on_a_tiny_board_covers_everything_once() {
        let cells: Vec<GridPos> = clamped_block((1, 1), 3, (2, 2)).collect();

        assert_eq!(cells, vec![(0, 0), (0, 1), (1, 0), (1, 1)]);
    }
}
