use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("coordinates are outside the board")]
    InvalidCoordinate,
    #[error("tile is already revealed")]
    AlreadyRevealed,
    #[error("tile is flagged, unflag it before revealing")]
    TileFlagged,
    #[error("tile is already revealed, flags are frozen")]
    TileAlreadyRevealed,
    #[error("board needs at least one row and one column")]
    EmptyBoard,
    #[error("board dimensions exceed the supported coordinate range")]
    BoardTooLarge,
    #[error("hazard chance must be a percentage in 0..=100")]
    InvalidHazardChance,
    #[error("surface is too small to hold the grid")]
    SurfaceTooSmall,
    #[error("session already ended, no new commands are accepted")]
    SessionEnded,
}

pub type Result<T> = std::result::Result<T, GameError>;
