//! Errors raised while setting up logging.
//!
//! The add operation itself has no failure modes; everything here belongs to
//! the ambient logging setup and is turned into a status code at the C boundary.

use std::str::Utf8Error;

use tracing_subscriber::filter::ParseError;
use tracing_subscriber::util::TryInitError;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid log filter: {0}")]
    InvalidFilter(#[from] ParseError),

    #[error("log filter is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] Utf8Error),

    #[error("a global tracing subscriber is already installed: {0}")]
    AlreadyInitialized(#[from] TryInitError),
}

/// Status returned by C entry points on success.
pub const BY2_OK: i32 = 0;
pub const BY2_ERR_INVALID_FILTER: i32 = 1;
pub const BY2_ERR_INVALID_UTF8: i32 = 2;
pub const BY2_ERR_ALREADY_INITIALIZED: i32 = 3;

impl Error {
    /// Stable status code for the C ABI.
    pub fn code(&self) -> i32 {
        match self {
            Error::InvalidFilter(_) => BY2_ERR_INVALID_FILTER,
            Error::InvalidUtf8(_) => BY2_ERR_INVALID_UTF8,
            Error::AlreadyInitialized(_) => BY2_ERR_ALREADY_INITIALIZED,
        }
    }
}
