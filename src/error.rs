//! Error types for vectorization, configuration and report storage.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while building matrices
#[derive(Error, Debug)]
pub enum Error {
    /// A term was looked up (or counted) that the vocabulary never saw.
    /// Vectorize only text whose terms were folded into the vocabulary.
    #[error("term not in vocabulary: {term}")]
    UnknownTerm { term: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid config {path:?}: {source}")]
    Config {
        path: Option<PathBuf>,
        #[source]
        source: toml::de::Error,
    },

    #[error("CBOR error: {0}")]
    Cbor(#[from] serde_cbor::Error),
}

impl Error {
    pub(crate) fn unknown_term(term: impl ToString) -> Self {
        Error::UnknownTerm { term: term.to_string() }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
