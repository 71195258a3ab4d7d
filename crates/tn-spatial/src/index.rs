//! R-tree accelerated nearest-N queries.
//!
//! The network builder issues one nearest-N query per entity against the
//! same hub list, so it bulk-loads the hubs into an R-tree once (via
//! `rstar`) and walks the tree's nearest-neighbour iterator per query.
//!
//! # Tie handling
//!
//! `rstar` yields points in ascending distance but does not promise any
//! order among equidistant points.  The query therefore keeps pulling past
//! the `n`-th result while the distance is still equal to the `n`-th
//! distance, then sorts by `(distance, input index)` and truncates.  The
//! output is identical to [`nearest_n`](crate::nearest_n) over the same
//! slice.

use rstar::{PointDistance, RTree, RTreeObject, AABB};

use tn_core::{Coordinate, NetworkEntity};

use crate::knn::{check_count, Ranked};
use crate::SearchResult;

// ── R-tree entry ──────────────────────────────────────────────────────────────

/// Entry stored in the R-tree: a point plus its index in the source slice.
#[derive(Clone)]
struct IndexEntry {
    point: [f64; 2],
    index: usize,
}

impl RTreeObject for IndexEntry {
    type Envelope = AABB<[f64; 2]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

impl PointDistance for IndexEntry {
    /// Squared Euclidean distance, computed exactly as
    /// [`Coordinate::distance_2`] does.
    fn distance_2(&self, point: &[f64; 2]) -> f64 {
        Coordinate::new(point[0], point[1]).distance_2(Coordinate::new(self.point[0], self.point[1]))
    }
}

// ── SpatialIndex ──────────────────────────────────────────────────────────────

/// Read-only spatial index over a borrowed slice of entities.
pub struct SpatialIndex<'a, E> {
    items: &'a [E],
    tree:  RTree<IndexEntry>,
}

impl<'a, E: NetworkEntity> SpatialIndex<'a, E> {
    /// Bulk-load an index over `items`.  O(N log N).
    pub fn new(items: &'a [E]) -> Self {
        let entries: Vec<IndexEntry> = items
            .iter()
            .enumerate()
            .map(|(index, e)| IndexEntry { point: e.location().to_array(), index })
            .collect();
        Self { items, tree: RTree::bulk_load(entries) }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Return the `n` entities closest to `point`, ascending, ties in input
    /// order.  Same errors as [`nearest_n`](crate::nearest_n).
    pub fn nearest_n(&self, point: Coordinate, n: usize) -> SearchResult<Vec<&'a E>> {
        check_count(n, self.items.len())?;

        let mut ranked: Vec<Ranked> = Vec::with_capacity(n + 1);
        for entry in self.tree.nearest_neighbor_iter(&point.to_array()) {
            let distance = point.distance(self.items[entry.index].location());
            // The iterator is non-decreasing in distance, so `ranked[n - 1]`
            // holds the n-th smallest distance once it exists.
            if ranked.len() >= n && distance > ranked[n - 1].distance {
                break;
            }
            ranked.push(Ranked { distance, index: entry.index });
        }

        ranked.sort_unstable();
        ranked.truncate(n);
        Ok(ranked.into_iter().map(|r| &self.items[r.index]).collect())
    }
}
