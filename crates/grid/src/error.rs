use thiserror::Error;

/// Errors that can occur while adapting external reader output into a grid
#[derive(Error, Debug)]
pub enum GridError {
    /// The external reader could not produce a 2D structure at all.
    /// Propagated unchanged to the caller, never retried.
    #[error("Unreadable sheet: {0}")]
    UnreadableSheet(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, GridError>;
