//! Crate-level error types.

use std::fmt;
use std::path::PathBuf;

/// Errors produced by the arsenal crate.
///
/// Out-of-range zoom or selection requests are never errors; they are
/// rejected silently by the controllers.
#[derive(Debug)]
pub enum ArsenalError {
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// A model or texture could not be loaded at startup.
    AssetLoad {
        /// File that failed to load.
        path: PathBuf,
        /// Backend-specific reason.
        reason: String,
    },
    /// The weapon roster has no entries.
    EmptyRoster,
    /// A key binding string could not be parsed into a chord.
    InvalidChord(String),
    /// Viewer event-loop failure.
    Viewer(String),
}

impl fmt::Display for ArsenalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::AssetLoad { path, reason } => {
                write!(f, "failed to load asset {}: {reason}", path.display())
            }
            Self::EmptyRoster => write!(f, "weapon roster is empty"),
            Self::InvalidChord(chord) => {
                write!(f, "invalid key chord: {chord:?}")
            }
            Self::Viewer(msg) => write!(f, "viewer error: {msg}"),
        }
    }
}

impl std::error::Error for ArsenalError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ArsenalError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
