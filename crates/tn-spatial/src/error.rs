//! Search error type.

use thiserror::Error;

use tn_core::CoreError;

/// Errors produced by `tn-spatial`.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SearchError {
    #[error("candidate set is empty")]
    EmptyCandidateSet,

    #[error("requested count must be greater than 0")]
    InvalidCount,

    #[error("requested {requested} nearest candidates but only {available} exist")]
    InsufficientCandidates { requested: usize, available: usize },

    #[error(transparent)]
    Invalid(#[from] CoreError),
}

pub type SearchResult<T> = Result<T, SearchError>;
