//! Single-source shortest paths.
//!
//! # Pluggability
//!
//! Callers go through the [`ShortestPathSolver`] trait so a different
//! algorithm can be dropped in without touching the builder or the path
//! reconstruction.  The default [`DijkstraSolver`] is exact for the
//! non-negative Euclidean weights every built graph carries.
//!
//! # Determinism
//!
//! Frontier entries are ordered by `(distance, identifier)`.  When two
//! entries have the same tentative distance the lexicographically smaller
//! identifier is settled first, so distances *and* predecessors are
//! reproducible regardless of heap internals or insertion order.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use tracing::debug;

use tn_core::NodeId;

use crate::graph::NetworkGraph;
use crate::path::{reconstruct_path, Route};
use crate::{NetworkError, NetworkResult};

// ── Result types ──────────────────────────────────────────────────────────────

/// Immediate predecessor of every reached node on its shortest path.
///
/// Borrows the graph it was computed on so entries can be reported by
/// identifier.
#[derive(Clone, Debug)]
pub struct PredecessorMap<'g> {
    pub(crate) graph: &'g NetworkGraph,
    /// `prev[v]` = node before `v`; `NodeId::INVALID` for the source and for
    /// unreached nodes.
    pub(crate) prev:  Vec<NodeId>,
}

impl<'g> PredecessorMap<'g> {
    /// Predecessor of `id`, or `None` if `id` is the source, unreached, or
    /// unknown.
    pub fn get(&self, id: &str) -> Option<&'g str> {
        let node = self.graph.index_of(id)?;
        self.prev_of(node).map(|p| self.graph.id_of(p))
    }

    #[inline]
    pub(crate) fn prev_of(&self, node: NodeId) -> Option<NodeId> {
        let p = self.prev[node.index()];
        p.is_valid().then_some(p)
    }

    /// `(node, predecessor)` pairs for every node that has one.
    pub fn iter(&self) -> impl Iterator<Item = (&'g str, &'g str)> + '_ {
        let graph = self.graph;
        self.prev
            .iter()
            .enumerate()
            .filter(|(_, p)| p.is_valid())
            .map(move |(i, &p)| (graph.id_of(NodeId(i as u32)), graph.id_of(p)))
    }

    pub fn len(&self) -> usize {
        self.prev.iter().filter(|p| p.is_valid()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Output of one solver run: minimum distances and predecessors from a
/// fixed source.  Produced fresh per run; never merged.
#[derive(Clone, Debug)]
pub struct ShortestPathResult<'g> {
    source:       NodeId,
    distances:    Vec<f64>,
    predecessors: PredecessorMap<'g>,
}

impl<'g> ShortestPathResult<'g> {
    pub fn source(&self) -> &'g str {
        self.predecessors.graph.id_of(self.source)
    }

    /// Minimum cumulative distance to `id`.  `f64::INFINITY` when `id` is
    /// unreachable or not in the graph.
    pub fn distance_to(&self, id: &str) -> f64 {
        self.predecessors
            .graph
            .index_of(id)
            .map_or(f64::INFINITY, |n| self.distances[n.index()])
    }

    pub fn is_reachable(&self, id: &str) -> bool {
        self.distance_to(id).is_finite()
    }

    /// `(node, distance)` for every node of the graph, in insertion order.
    pub fn distances(&self) -> impl Iterator<Item = (&'g str, f64)> + '_ {
        let graph = self.predecessors.graph;
        self.distances
            .iter()
            .enumerate()
            .map(move |(i, &d)| (graph.id_of(NodeId(i as u32)), d))
    }

    pub fn predecessors(&self) -> &PredecessorMap<'g> {
        &self.predecessors
    }

    /// Shortest route from the source to `target`.
    pub fn route_to(&self, target: &str) -> NetworkResult<Route> {
        let nodes = reconstruct_path(&self.predecessors, self.source(), target)?;
        Ok(Route { nodes, total_distance: self.distance_to(target) })
    }
}

// ── Solver trait ──────────────────────────────────────────────────────────────

/// Pluggable single-source shortest-path engine.
///
/// Implementations must be `Send + Sync`; runs against one immutable graph
/// are independent and may execute concurrently.
pub trait ShortestPathSolver: Send + Sync {
    /// Compute distances and predecessors from `source` to every node.
    ///
    /// Fails with [`NetworkError::UnknownStartNode`] if `source` is not in
    /// the graph.
    fn solve<'g>(&self, graph: &'g NetworkGraph, source: &str) -> NetworkResult<ShortestPathResult<'g>>;
}

/// Dijkstra's algorithm with a lazy-deletion binary heap.
#[derive(Copy, Clone, Debug, Default)]
pub struct DijkstraSolver;

impl ShortestPathSolver for DijkstraSolver {
    fn solve<'g>(&self, graph: &'g NetworkGraph, source: &str) -> NetworkResult<ShortestPathResult<'g>> {
        dijkstra(graph, source)
    }
}

/// Run [`DijkstraSolver`] from `source`.
pub fn shortest_paths<'g>(graph: &'g NetworkGraph, source: &str) -> NetworkResult<ShortestPathResult<'g>> {
    DijkstraSolver.solve(graph, source)
}

impl NetworkGraph {
    /// Shortest route between two identifiers using [`DijkstraSolver`].
    pub fn route(&self, source: &str, target: &str) -> NetworkResult<Route> {
        shortest_paths(self, source)?.route_to(target)
    }
}

// ── Dijkstra internals ────────────────────────────────────────────────────────

/// Totally ordered tentative distance.
#[derive(Copy, Clone, Debug, PartialEq)]
struct Cost(f64);

impl Eq for Cost {}

impl Ord for Cost {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl PartialOrd for Cost {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

fn dijkstra<'g>(graph: &'g NetworkGraph, source_id: &str) -> NetworkResult<ShortestPathResult<'g>> {
    let source = graph
        .index_of(source_id)
        .ok_or_else(|| NetworkError::UnknownStartNode(source_id.to_owned()))?;

    let n = graph.node_count();
    let mut dist    = vec![f64::INFINITY; n];
    let mut prev    = vec![NodeId::INVALID; n];
    let mut visited = vec![false; n];

    dist[source.index()] = 0.0;

    // Min-heap: (cost, identifier, node).  Reverse turns the max-heap around;
    // the identifier is the deterministic tie-break.
    let mut heap: BinaryHeap<Reverse<(Cost, &'g str, NodeId)>> = BinaryHeap::new();
    heap.push(Reverse((Cost(0.0), graph.id_of(source), source)));

    let mut settled = 0usize;
    while let Some(Reverse((_, _, node))) = heap.pop() {
        // Duplicate entries for already-settled nodes are expected.
        if visited[node.index()] {
            continue;
        }
        visited[node.index()] = true;
        settled += 1;

        let base = dist[node.index()];
        for edge in graph.neighbors_of(node) {
            let alt = base + edge.weight;
            if alt < dist[edge.node.index()] {
                dist[edge.node.index()] = alt;
                prev[edge.node.index()] = node;
                heap.push(Reverse((Cost(alt), graph.id_of(edge.node), edge.node)));
            }
        }
    }

    debug!(source = source_id, nodes = n, reached = settled, "shortest paths computed");

    Ok(ShortestPathResult {
        source,
        distances: dist,
        predecessors: PredecessorMap { graph, prev },
    })
}
