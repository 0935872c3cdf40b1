//! Sync Errors
//!
//! `SyncError` says what went wrong with a request, `OperationError` says
//! which roster operation it broke.

use std::fmt;

use super::PlayerId;

/// Common result type for gateway calls
pub type SyncResult<T> = Result<T, SyncError>;

/// Failure of a single remote call
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SyncError {
    /// The service could not be reached
    #[error("transport error: {0}")]
    Transport(String),

    /// The service answered with an error payload
    #[error("service error: {0}")]
    Service(String),

    /// The service answered with something we could not read
    #[error("malformed response: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for SyncError {
    fn from(err: reqwest::Error) -> Self {
        SyncError::Transport(err.to_string())
    }
}

/// The four roster operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    LoadAll,
    LoadOne(PlayerId),
    Create,
    Remove(PlayerId),
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::LoadAll => write!(f, "fetching players"),
            Operation::LoadOne(id) => write!(f, "fetching player #{}", id),
            Operation::Create => write!(f, "adding player"),
            Operation::Remove(id) => write!(f, "removing player #{} from the roster", id),
        }
    }
}

/// A failed roster operation
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("trouble {operation}: {source}")]
pub struct OperationError {
    pub operation: Operation,
    #[source]
    pub source: SyncError,
}

impl OperationError {
    pub fn new(operation: Operation, source: SyncError) -> Self {
        Self { operation, source }
    }
}
