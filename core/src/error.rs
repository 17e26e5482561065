use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Grid rows must all have the same length")]
    RaggedRows,
    #[error("Game already won, no new moves are accepted")]
    AlreadyWon,
}

pub type Result<T> = core::result::Result<T, GameError>;
