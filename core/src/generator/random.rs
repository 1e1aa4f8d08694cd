use ndarray::Array2;

use super::*;

/// Generation strategy that rolls each cell independently against the
/// configured hazard chance. Hazard placement happens for the whole grid
/// first; neighbor counts are only computed once the full mask exists.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RandomBoardGenerator {
    seed: u64,
}

impl RandomBoardGenerator {
    pub const fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Interactive-play constructor: seeds from the system clock, the way
    /// a fresh session without a reproducibility requirement wants it.
    pub fn from_system_time() -> Self {
        use std::time::{SystemTime, UNIX_EPOCH};

        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_nanos() as u64)
            .unwrap_or_default();
        Self { seed }
    }
}

impl BoardGenerator for RandomBoardGenerator {
    fn generate(self, config: BoardConfig) -> Result<Board> {
        use rand::prelude::*;

        let config = BoardConfig::new(config.rows, config.cols, config.hazard_chance)?;
        let mut rng = SmallRng::seed_from_u64(self.seed);
        let mut mask: Array2<bool> = Array2::default(config.size().to_nd_index());

        let mut placed: CellCount = 0;
        for cell in mask.iter_mut() {
            let roll: u8 = rng.random_range(1..=100);
            if roll <= config.hazard_chance {
                *cell = true;
                placed += 1;
            }
        }

        if placed == config.total_tiles() {
            log::warn!("every tile is a hazard, the board is unwinnable by reveal");
        }
        log::debug!(
            "generated {}x{} board with {} hazards",
            config.rows,
            config.cols,
            placed
        );

        Board::from_hazard_mask(mask)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hazard_tiles(board: &Board) -> CellCount {
        let (rows, cols) = board.size();
        let mut total = 0;
        for r in 0..rows {
            for c in 0..cols {
                if board.tile_at((r, c)).unwrap().content().is_hazard() {
                    total += 1;
                }
            }
        }
        total
    }

    #[test]
    fn same_seed_generates_the_same_board() {
        let config = BoardConfig::new(10, 10, 20).unwrap();

        let a = RandomBoardGenerator::new(42).generate(config).unwrap();
        let b = RandomBoardGenerator::new(42).generate(config).unwrap();

        assert_eq!(a, b);
    }

    #[test]
    fn counter_starts_at_the_number_of_hazard_tiles() {
        let config = BoardConfig::new(16, 16, 20).unwrap();

        for seed in 0..8 {
            let board = RandomBoardGenerator::new(seed).generate(config).unwrap();
            assert_eq!(board.remaining_hazards(), hazard_tiles(&board));
        }
    }

    #[test]
    fn extreme_chances_fill_or_empty_the_board() {
        let config = BoardConfig::new(8, 8, 0).unwrap();
        let empty = RandomBoardGenerator::new(7).generate(config).unwrap();
        assert_eq!(empty.remaining_hazards(), 0);

        let config = BoardConfig::new(8, 8, 100).unwrap();
        let full = RandomBoardGenerator::new(7).generate(config).unwrap();
        assert_eq!(full.remaining_hazards(), full.total_tiles());
    }

    #[test]
    fn safe_counts_match_a_recount_of_hazard_neighbors() {
        let config = BoardConfig::new(12, 12, 30).unwrap();
        let board = RandomBoardGenerator::new(99).generate(config).unwrap();

        let (rows, cols) = board.size();
        for r in 0..rows {
            for c in 0..cols {
                let Content::SafeCount(count) = board.tile_at((r, c)).unwrap().content() else {
                    continue;
                };

                let mut expected = 0u8;
                for dr in -1i16..=1 {
                    for dc in -1i16..=1 {
                        if dr == 0 && dc == 0 {
                            continue;
                        }
                        let nr = r as i16 + dr;
                        let nc = c as i16 + dc;
                        if nr < 0 || nc < 0 || nr >= rows as i16 || nc >= cols as i16 {
                            continue;
                        }
                        let neighbor = board.tile_at((nr as Coord, nc as Coord)).unwrap();
                        if neighbor.content().is_hazard() {
                            expected += 1;
                        }
                    }
                }
                assert_eq!(count, expected, "mismatch at ({r}, {c})");
            }
        }
    }

    #[test]
    fn generation_rejects_bad_configs() {
        let config = BoardConfig::new_unchecked(0, 10, 20);
        assert_eq!(
            RandomBoardGenerator::new(1).generate(config),
            Err(GameError::EmptyBoard)
        );
    }

    #[test]
    fn system_time_seeding_still_produces_a_valid_board() {
        let config = BoardConfig::new(6, 6, 20).unwrap();
        let board = RandomBoardGenerator::from_system_time()
            .generate(config)
            .unwrap();

        assert_eq!(board.size(), (6, 6));
        assert_eq!(board.remaining_hazards(), hazard_tiles(&board));
    }
}
