//! Core error type.
//!
//! Sub-crates define their own error enums and wrap `CoreError` as one
//! variant via `#[from]`.

use thiserror::Error;

use crate::entity::{EntityKind, InvalidReason};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoreError {
    #[error("invalid {kind} {id:?}: {reason}")]
    InvalidEntity {
        kind:   EntityKind,
        id:     String,
        reason: InvalidReason,
    },

    #[error("configuration error: {0}")]
    Config(String),

    #[error("node index {0} exceeds the NodeId range")]
    IndexOverflow(usize),
}

/// Shorthand result type for `tn-core`.
pub type CoreResult<T> = Result<T, CoreError>;
