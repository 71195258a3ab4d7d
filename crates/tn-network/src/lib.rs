//! `tn-network`: network graph construction and shortest-path routing.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                    |
//! |-------------|-------------------------------------------------------------|
//! | [`graph`]   | `NetworkGraph` (node arena + symmetric adjacency)          |
//! | [`builder`] | `NetworkBuilder`, `build_network_graph`                    |
//! | [`solver`]  | `ShortestPathSolver` trait, `DijkstraSolver`, `ShortestPathResult` |
//! | [`path`]    | `reconstruct_path`, `Route`                                |
//! | [`error`]   | `NetworkError`, `BuildError`                               |
//!
//! # Lifecycle
//!
//! A graph is produced whole by [`NetworkBuilder::build`] and only read
//! afterwards.  Each solver run owns its distance, predecessor and frontier
//! state, so any number of runs may share one `&NetworkGraph` across
//! threads.

pub mod builder;
pub mod error;
pub mod graph;
pub mod path;
pub mod solver;


pub use builder::{build_network_graph, NetworkBuilder};
pub use error::{BuildError, NetworkError, NetworkResult};
pub use graph::{Neighbor, NetworkGraph};
pub use path::{reconstruct_path, Route};
pub use solver::{shortest_paths, DijkstraSolver, PredecessorMap, ShortestPathResult, ShortestPathSolver};
