//! Error types for websave operations.
//!
//! The serialization path has no error branches by construction; errors only
//! arise at the JSON wire boundary.

use thiserror::Error;

/// Errors that can occur while parsing an export request.
#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid export request: {0}")]
    InvalidRequest(#[from] serde_json::Error),

    #[error("file name must not be empty")]
    EmptyFileName,
}

pub type Result<T> = std::result::Result<T, Error>;
