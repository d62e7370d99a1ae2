//! Error taxonomy.
//!
//! Every failure carries a stable machine-readable code (`code()`) and a
//! human-readable message (`Display`, prefixed with the code).

use std::path::PathBuf;

use thiserror::Error;

/// Identity assigned to a card by a store.
pub type CardId = u64;

/// Failures while turning a raw printing into canonical cards.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CardError {
    /// The type line could not be split into types and subtypes.
    #[error("CA001: cannot parse type line {type_line:?} ({reason})")]
    TypeLine { type_line: String, reason: String },
    #[error("CA002: no card name provided")]
    MissingName,
    #[error("CA003: no set code provided")]
    MissingSetCode,
    #[error("CA004: no collector number provided")]
    MissingCollectorNumber,
}

impl CardError {
    pub(crate) fn type_line(type_line: &str, reason: impl Into<String>) -> Self {
        CardError::TypeLine {
            type_line: type_line.to_string(),
            reason: reason.into(),
        }
    }

    /// Stable error code.
    pub fn code(&self) -> &'static str {
        match self {
            CardError::TypeLine { .. } => "CA001",
            CardError::MissingName => "CA002",
            CardError::MissingSetCode => "CA003",
            CardError::MissingCollectorNumber => "CA004",
        }
    }
}

/// Failures reported by a card storage backend.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("ST001: card with id {id} not found")]
    NotFound { id: CardId },
    #[error("ST002: storage lock poisoned during {0}")]
    LockPoisoned(&'static str),
}

impl StorageError {
    pub fn code(&self) -> &'static str {
        match self {
            StorageError::NotFound { .. } => "ST001",
            StorageError::LockPoisoned(_) => "ST002",
        }
    }
}

/// Failures talking to the bulk feed or the file system.
#[derive(Debug, Error)]
pub enum FeedError {
    #[error("FD001: {0}")]
    Http(String),
    #[error("FD002: I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("FD003: cannot decode JSON from {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("FD004: cannot encode JSON: {0}")]
    Encode(#[source] serde_json::Error),
}

impl FeedError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        FeedError::Io {
            path: path.into(),
            source,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            FeedError::Http(_) => "FD001",
            FeedError::Io { .. } => "FD002",
            FeedError::Decode { .. } => "FD003",
            FeedError::Encode(_) => "FD004",
        }
    }
}

#[cfg(feature = "fetch")]
impl From<reqwest::Error> for FeedError {
    fn from(err: reqwest::Error) -> Self {
        FeedError::Http(err.to_string())
    }
}

/// Top-level error for a pipeline run.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Card(#[from] CardError),
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error(transparent)]
    Feed(#[from] FeedError),
}

impl Error {
    pub fn code(&self) -> &'static str {
        match self {
            Error::Card(e) => e.code(),
            Error::Storage(e) => e.code(),
            Error::Feed(e) => e.code(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
