//! Crate-level error types.
//!
//! Draw operations never fail; only the options preset surface is
//! fallible.

use std::fmt;

/// Errors produced by the wiredraw crate.
#[derive(Debug)]
pub enum WiredrawError {
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
}

impl fmt::Display for WiredrawError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
        }
    }
}

impl std::error::Error for WiredrawError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::OptionsParse(_) => None,
        }
    }
}

impl From<std::io::Error> for WiredrawError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
