//! Graph, routing, and build error types.

use thiserror::Error;

use tn_core::{CoreError, EntityKind};
use tn_spatial::SearchError;

/// Errors produced when querying a built graph.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum NetworkError {
    #[error("start node {0:?} not found in network")]
    UnknownStartNode(String),

    #[error("no path from {from:?} to {to:?}")]
    NoPathFound { from: String, to: String },
}

pub type NetworkResult<T> = Result<T, NetworkError>;

/// Errors produced while building a graph.  The first failure aborts the
/// build and no graph is returned.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BuildError {
    /// Bad configuration or an entity that failed validation.
    #[error(transparent)]
    Invalid(#[from] CoreError),

    /// A connectivity rule could not be satisfied for one entity.
    #[error("cannot connect {kind} {id:?}: {source}")]
    Search {
        kind:   EntityKind,
        id:     String,
        #[source]
        source: SearchError,
    },
}
