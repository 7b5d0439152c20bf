use thiserror::Error;

/// Result type for boggle-solver operations
pub type Result<T> = std::result::Result<T, BoggleError>;

/// Errors raised while building a grid or loading a word list.
/// The search itself never fails.
#[derive(Debug, Error)]
pub enum BoggleError {
    #[error("grid is not rectangular: row {row} has {found} cells, expected {expected}")]
    RaggedGrid {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("empty cell token at row {row}, column {col}")]
    EmptyToken { row: usize, col: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
