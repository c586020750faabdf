//! Centralized error handling for flagfetch

use std::fmt;
use std::io;

/// Custom error type for flagfetch operations
#[derive(Debug)]
pub enum FlagfetchError {
    /// I/O errors (file reading, command execution)
    Io(io::Error),
    /// Parsing errors (invalid data format)
    #[allow(dead_code)]
    Parse(String),
    /// Configuration errors
    Config(String),
    /// Probe errors (failed lookups, command exit status)
    Detection(String),
}

impl fmt::Display for FlagfetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FlagfetchError::Io(err) => write!(f, "I/O error: {}", err),
            FlagfetchError::Parse(msg) => write!(f, "Parse error: {}", msg),
            FlagfetchError::Config(msg) => write!(f, "Config error: {}", msg),
            FlagfetchError::Detection(msg) => write!(f, "Detection error: {}", msg),
        }
    }
}

impl std::error::Error for FlagfetchError {}

impl From<io::Error> for FlagfetchError {
    fn from(error: io::Error) -> Self {
        FlagfetchError::Io(error)
    }
}

/// Type alias for Results in flagfetch
pub type Result<T> = std::result::Result<T, FlagfetchError>;
