//! Crate-level error types.

use std::fmt;

use crate::behavior::StateId;

/// Errors produced by the camrig crate.
#[derive(Debug)]
pub enum RigError {
    /// The rig actor has no camera child to drive.
    MissingCamera,
    /// A behavior state tag with no registered constructor.
    UnknownState(StateId),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// Generic I/O failure.
    Io(std::io::Error),
}

impl fmt::Display for RigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingCamera => {
                write!(f, "rig actor has no camera child")
            }
            Self::UnknownState(id) => {
                write!(f, "no constructor registered for state '{id}'")
            }
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl std::error::Error for RigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for RigError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
