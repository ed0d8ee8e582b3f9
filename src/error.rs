//! Error types shared by every notr module

use std::io;

/// Result type for notr operations
pub type NotrResult<T> = Result<T, NotrError>;

/// Errors that can occur while reading, writing or querying the journal
///
/// Absent data (no log file, no entries) is not an error: those cases are
/// reported through [`crate::store::MutationOutcome`] and [`crate::query::Tail`].
/// Malformed stored lines are skipped during decoding and never surface here.
#[derive(Debug)]
pub enum NotrError {
    /// A filesystem operation failed
    Io(io::Error),
    /// A `--since` argument did not match `YYYY-MM-DD`
    InvalidDate(String),
    /// A note body was empty after trimming
    EmptyNote,
    /// The configuration file could not be read or parsed
    Config(String),
}

impl std::fmt::Display for NotrError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NotrError::Io(e) => write!(f, "IO error: {}", e),
            NotrError::InvalidDate(input) => {
                write!(f, "Invalid date format: {}. Use YYYY-MM-DD.", input)
            }
            NotrError::EmptyNote => write!(f, "Refusing to log an empty note"),
            NotrError::Config(msg) => write!(f, "Config error: {}", msg),
        }
    }
}

impl std::error::Error for NotrError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            NotrError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for NotrError {
    fn from(e: io::Error) -> Self {
        NotrError::Io(e)
    }
}
