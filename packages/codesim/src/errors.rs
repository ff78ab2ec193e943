//! Error types for codesim
//!
//! Every variant is terminal for the comparison it came from; nothing is
//! retried or swallowed.

use std::path::PathBuf;

use thiserror::Error;

use crate::config::ConfigError;
use crate::features::tokenization::LeafDecodeError;
use crate::shared::models::Side;

/// Main error type for codesim operations
#[derive(Debug, Error)]
pub enum CodesimError {
    /// Wrong number of inputs at the comparison entry point
    #[error("Requires {expected} input paths, got {found}")]
    Usage { expected: usize, found: usize },

    /// The parser reported a structural error in one input
    #[error("The {side} code has a structural error")]
    StructuralParse { side: Side },

    /// A leaf's byte span is not valid text
    #[error("The {side} code could not be decoded: {source}")]
    Decoding {
        side: Side,
        #[source]
        source: LeafDecodeError,
    },

    /// The bounded-time parse guard tripped
    #[error("Parsing the {side} code exceeded {timeout_ms} ms")]
    ParseTimeout { side: Side, timeout_ms: u64 },

    /// The grammar could not be loaded
    #[error("Grammar error: {0}")]
    Grammar(String),

    /// Reading an input failed
    #[error("IO error reading {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration error
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Writing a report as JSON failed
    #[error("Failed to serialize report: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl CodesimError {
    /// The input the error is about, if it is about one
    pub fn side(&self) -> Option<Side> {
        match self {
            CodesimError::StructuralParse { side }
            | CodesimError::Decoding { side, .. }
            | CodesimError::ParseTimeout { side, .. } => Some(*side),
            _ => None,
        }
    }

    /// Whether the error happened before any input was parsed
    pub fn is_usage(&self) -> bool {
        matches!(self, CodesimError::Usage { .. })
    }

    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        CodesimError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type alias for codesim operations
pub type Result<T> = std::result::Result<T, CodesimError>;
