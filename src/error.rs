//! Crate-level error types.

use std::fmt;

/// Errors produced by the scroll-stage crate.
#[derive(Debug)]
pub enum StageError {
    /// The 3D model could not be loaded or decoded by the host.
    AssetLoad(String),
    /// No page sections were supplied, so no scroll track can be built.
    NoSections,
    /// Options failed validation (non-positive stiffness, bad FOV, ...).
    InvalidOptions(String),
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// A required DOM element or browser API was unavailable.
    Dom(String),
}

impl fmt::Display for StageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AssetLoad(msg) => write!(f, "model load error: {msg}"),
            Self::NoSections => write!(f, "no page sections to track"),
            Self::InvalidOptions(msg) => {
                write!(f, "invalid options: {msg}")
            }
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::Dom(msg) => write!(f, "DOM error: {msg}"),
        }
    }
}

impl std::error::Error for StageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for StageError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
