//! Error types surfaced in the form's status line.

use thiserror::Error;

/// Input rejected before any file is touched
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Fill in all fields.")]
    MissingFields,
    #[error("Rating must be a number between 0 and 10.")]
    InvalidRating,
}

/// Failure while appending a row to a CSV file
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Error saving file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Error saving file: {0}")]
    Csv(#[from] csv::Error),
}

/// Anything that stops a submission from being saved
#[derive(Debug, Error)]
pub enum SubmitError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}
