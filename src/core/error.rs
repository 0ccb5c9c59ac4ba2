use thiserror::Error;

#[derive(Debug, Error)]
pub enum BoardError {
    #[error("board {0} not found")]
    BoardNotFound(String),

    #[error("column {0} not found")]
    ColumnNotFound(String),

    #[error("title must not be empty")]
    EmptyTitle,

    #[error("drop index {index} out of bounds for length {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error("drop adds an item but carries no payload")]
    MissingPayload,

    #[error("failed to decode board fixture: {0}")]
    Fixture(#[from] serde_json::Error),
}
