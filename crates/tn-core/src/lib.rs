//! `tn-core`: foundational types for the `telenet` workspace.
//!
//! This crate is a dependency of every other `tn-*` crate.  It has no
//! `tn-*` dependencies and minimal external ones (only `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module       | Contents                                                  |
//! |--------------|-----------------------------------------------------------|
//! | [`geo`]      | `Coordinate`, Euclidean distance                          |
//! | [`ids`]      | `NodeId` (dense graph index)                              |
//! | [`entity`]   | `Site`, `Hub`, `Center`, `NetworkEntity`, validation      |
//! | [`config`]   | `NetworkConfig` (connectivity rule counts)                |
//! | [`error`]    | `CoreError`, `CoreResult`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod entity;
pub mod error;
pub mod geo;
pub mod ids;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::NetworkConfig;
pub use entity::{validate_unique_ids, Center, EntityKind, Hub, InvalidReason, NetworkEntity, Site};
pub use error::{CoreError, CoreResult};
pub use geo::Coordinate;
pub use ids::NodeId;
