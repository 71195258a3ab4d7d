//! `tn-spatial`: nearest-neighbour search over network entities.
//!
//! # Crate layout
//!
//! | Module    | Contents                                                     |
//! |-----------|--------------------------------------------------------------|
//! | [`knn`]   | `nearest`, `nearest_n`, `find_nearest_emergency_center`, `find_nearest_hubs` |
//! | [`index`] | `SpatialIndex` (R-tree) with the same ordering as `nearest_n` |
//! | [`error`] | `SearchError`, `SearchResult<T>`                            |
//!
//! # Ordering
//!
//! Every nearest-N query returns candidates in ascending Euclidean distance
//! with ties broken by input order.  The linear search and the R-tree index
//! agree exactly, including tie order.

pub mod error;
pub mod index;
pub mod knn;


pub use error::{SearchError, SearchResult};
pub use index::SpatialIndex;
pub use knn::{find_nearest_emergency_center, find_nearest_hubs, nearest, nearest_n};
