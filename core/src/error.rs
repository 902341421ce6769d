use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Coordinates outside the board")]
    InvalidCoordinate,
    #[error("Cell cannot be revealed in the current state")]
    InvalidState,
    #[error("Hazard count must be between 1 and the number of cells")]
    Configuration,
}

pub type Result<T> = core::result::Result<T, GameError>;
