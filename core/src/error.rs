use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Coordinates outside the board")]
    InvalidCoords,
    #[error("Board needs at least one cell")]
    EmptyBoard,
    #[error("More mines than cells")]
    TooManyMines,
}

pub type Result<T> = core::result::Result<T, GameError>;
