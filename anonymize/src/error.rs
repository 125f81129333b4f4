//! Error type for generation and anonymization runs.

use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnonymizeError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("column {0:?} not found in input header")]
    MissingColumn(String),
}

pub type Result<T> = std::result::Result<T, AnonymizeError>;
