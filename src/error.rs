//! Crate-level error types.

use std::fmt;

/// Errors produced by the globe-nav crate.
///
/// Only construction and preset I/O can fail; per-frame navigation math is
/// clamped instead of returning errors.
#[derive(Debug)]
pub enum NavError {
    /// The host surface (canvas) is missing or has an unusable size.
    InvalidSurface(String),
    /// An option value is outside its documented domain.
    InvalidOptions(String),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// Generic I/O failure.
    Io(std::io::Error),
}

impl fmt::Display for NavError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSurface(msg) => {
                write!(f, "invalid host surface: {msg}")
            }
            Self::InvalidOptions(msg) => {
                write!(f, "invalid navigation options: {msg}")
            }
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl std::error::Error for NavError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for NavError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
