//! Error type for spec loading, encoding and file conversion.

use std::io;
use thiserror::Error;

/// Errors raised while loading a spec or moving records between files.
///
/// The codec itself never fails; every variant here comes from the spec
/// file, the text encoding, or the underlying I/O.
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("invalid spec file: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("offset {index} is not a positive integer: {value:?}")]
    InvalidOffset { index: usize, value: String },

    #[error("spec has {names} column names but {offsets} offsets")]
    ColumnCountMismatch { names: usize, offsets: usize },

    #[error("unknown text encoding: {0:?}")]
    UnknownEncoding(String),

    #[error("text cannot be represented in {encoding}")]
    Unencodable { encoding: &'static str },

    #[error("input is not valid {encoding}")]
    Undecodable { encoding: &'static str },
}

pub type Result<T> = std::result::Result<T, ConvertError>;
