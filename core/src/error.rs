use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum FlowError {
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Cell values must be between 0 and 9")]
    InvalidValue,
    #[error("No cell is selected")]
    NoSelection,
    #[error("Puzzle already solved, no new entries are accepted")]
    AlreadySolved,
    #[error("Puzzle is paused")]
    Paused,
    #[error("No choice is being offered right now")]
    NoChoicePending,
}

pub type Result<T> = core::result::Result<T, FlowError>;
