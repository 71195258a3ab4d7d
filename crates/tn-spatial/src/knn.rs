//! Linear nearest-neighbour search.
//!
//! Two query forms:
//!
//! - [`nearest`]: the single closest candidate, first occurrence on ties.
//! - [`nearest_n`]: the `n` closest candidates, ascending, ties in input
//!   order.  Selection uses a bounded max-heap of size `n`, so a query over
//!   `M` candidates costs O(M log n).
//!
//! Distances are Euclidean ([`Coordinate::distance`]).  Ordering uses
//! `f64::total_cmp`, so the result is a total order even for pathological
//! inputs.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use tracing::debug;

use tn_core::{Center, Coordinate, Hub, NetworkEntity, Site};

use crate::{SearchError, SearchResult};

// ── Ranked candidate ──────────────────────────────────────────────────────────

/// A candidate's distance plus its position in the input slice.
///
/// Ordered by `(distance, index)`: the secondary key is what makes equal
/// distances resolve to input order.
#[derive(Copy, Clone, Debug)]
pub(crate) struct Ranked {
    pub(crate) distance: f64,
    pub(crate) index:    usize,
}

impl Ord for Ranked {
    fn cmp(&self, other: &Self) -> Ordering {
        self.distance
            .total_cmp(&other.distance)
            .then(self.index.cmp(&other.index))
    }
}

impl PartialOrd for Ranked {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Ranked {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Ranked {}

/// Shared precondition for every nearest-N query.
pub(crate) fn check_count(n: usize, available: usize) -> SearchResult<()> {
    if n == 0 {
        return Err(SearchError::InvalidCount);
    }
    if available < n {
        return Err(SearchError::InsufficientCandidates { requested: n, available });
    }
    Ok(())
}

// ── Queries ───────────────────────────────────────────────────────────────────

/// Return the candidate closest to `point`.
///
/// Ties go to the earliest candidate in `candidates`.  Fails with
/// [`SearchError::EmptyCandidateSet`] rather than inventing a result.
pub fn nearest<E: NetworkEntity>(point: Coordinate, candidates: &[E]) -> SearchResult<&E> {
    let mut best: Option<(f64, &E)> = None;
    for c in candidates {
        let d = point.distance(c.location());
        match best {
            Some((best_d, _)) if d >= best_d => {}
            _ => best = Some((d, c)),
        }
    }
    best.map(|(_, c)| c).ok_or(SearchError::EmptyCandidateSet)
}

/// Return the `n` candidates closest to `point`, sorted by ascending
/// distance with ties in input order.
///
/// # Errors
///
/// - [`SearchError::InvalidCount`] if `n == 0`.
/// - [`SearchError::InsufficientCandidates`] if `candidates.len() < n`.
pub fn nearest_n<E: NetworkEntity>(
    point: Coordinate,
    candidates: &[E],
    n: usize,
) -> SearchResult<Vec<&E>> {
    check_count(n, candidates.len())?;

    // Max-heap holding the best `n` seen so far; the root is the worst of them.
    let mut heap: BinaryHeap<Ranked> = BinaryHeap::with_capacity(n);
    for (index, c) in candidates.iter().enumerate() {
        let entry = Ranked { distance: point.distance(c.location()), index };
        if heap.len() < n {
            heap.push(entry);
        } else if let Some(mut worst) = heap.peek_mut() {
            // A later candidate at equal distance compares greater (higher
            // index) and is rejected here.
            if entry < *worst {
                *worst = entry;
            }
        }
    }

    Ok(heap
        .into_sorted_vec()
        .into_iter()
        .map(|r| &candidates[r.index])
        .collect())
}

/// Find the emergency center nearest to `site`.
///
/// The site is validated first, so an empty identifier or unset coordinate
/// fails with [`SearchError::Invalid`].
pub fn find_nearest_emergency_center<'a>(
    site: &Site,
    centers: &'a [Center],
) -> SearchResult<&'a Center> {
    site.validate()?;
    let center = nearest(site.location, centers)?;
    debug!(
        site = %site.id,
        center = %center.id,
        distance = site.location.distance(center.location),
        "nearest emergency center"
    );
    Ok(center)
}

/// Find the `n` hubs nearest to `point`.  See [`nearest_n`].
pub fn find_nearest_hubs(point: Coordinate, hubs: &[Hub], n: usize) -> SearchResult<Vec<&Hub>> {
    nearest_n(point, hubs, n)
}
