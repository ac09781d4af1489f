//! Error types for termfolio.
//!
//! All fallible library paths return [`Error`]. The binary wraps these with
//! `anyhow` context at the boundary.

use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by the library.
#[derive(Debug, Error)]
pub enum Error {
    /// The portfolio content file could not be read.
    #[error("failed to read portfolio content from {path}")]
    ContentRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The portfolio content was not valid TOML.
    #[error("failed to parse portfolio content")]
    ContentParse(#[from] toml::de::Error),

    /// The portfolio content parsed but violated a document invariant.
    #[error("invalid portfolio content: {0}")]
    ContentInvalid(String),

    /// The typing banner needs at least one phrase.
    #[error("phrase sequence must not be empty")]
    EmptyPhraseSequence,

    /// Terminal setup or rendering failed.
    #[error("terminal I/O error")]
    Terminal(#[from] std::io::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
