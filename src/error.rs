//! Global error handling for lf
//!
//! Fatal errors bubble up to `main`, which prints them to stderr with an
//! `lf:` prefix and exits non-zero. Per-entry problems never reach this
//! type; they degrade to defaults or warn-and-skip at the call site.

use std::io;

use thiserror::Error;

/// Global error type for lf operations
#[derive(Error, Debug)]
pub enum LfError {
    /// Target path does not exist
    #[error("{0} does not exist")]
    PathNotFound(String),

    /// File system errors
    #[error("{0}")]
    Io(#[from] io::Error),
}

/// Specialized Result type for lf operations
pub type Result<T> = std::result::Result<T, LfError>;

// Allow converting LfError to io::Error for compatibility with tests
impl From<LfError> for io::Error {
    fn from(err: LfError) -> Self {
        io::Error::new(io::ErrorKind::Other, err.to_string())
    }
}
