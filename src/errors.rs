//! Error types for hindi_textrank

use std::path::PathBuf;
use thiserror::Error;

/// Errors produced by the summarization pipeline and its helpers
#[derive(Debug, Error)]
pub enum TextRankError {
    /// The sentence set produced no vocabulary at all
    #[error("input has no words to build a vocabulary from")]
    DegenerateInput,

    /// The ranker was handed a graph without nodes
    #[error("cannot rank an empty graph")]
    EmptyGraph,

    /// A configuration value is out of range
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Reading an input file failed
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A JSON config could not be parsed
    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl TextRankError {
    /// Shorthand for [`TextRankError::InvalidConfig`]
    pub fn invalid_config(message: impl Into<String>) -> Self {
        TextRankError::InvalidConfig(message.into())
    }

    /// Attach a path to an I/O error
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        TextRankError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, TextRankError>;
