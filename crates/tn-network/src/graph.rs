//! Undirected weighted graph keyed by string identifiers.
//!
//! # Data layout
//!
//! Nodes live in a dense arena addressed by [`NodeId`] (insertion order).
//! A hash map resolves identifiers to indices once, at the API boundary;
//! inside the solver everything is `Vec` indexing.
//!
//! ```text
//! ids[n]        identifier of node n
//! adjacency[n]  [(neighbor NodeId, weight), ...] in first-insertion order
//! ```
//!
//! Every edge is stored in both endpoint lists with the same weight.

use rustc_hash::FxHashMap;

use tn_core::NodeId;

/// One entry of a node's adjacency list.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Neighbor {
    pub node:   NodeId,
    pub weight: f64,
}

/// Undirected graph with non-negative edge weights.
///
/// Mutation goes through [`add_node`](Self::add_node) and
/// [`add_edge`](Self::add_edge) only; both are idempotent upserts.
#[derive(Clone, Debug, Default)]
pub struct NetworkGraph {
    ids:        Vec<String>,
    lookup:     FxHashMap<String, NodeId>,
    adjacency:  Vec<Vec<Neighbor>>,
    edge_count: usize,
}

impl NetworkGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-allocate for the expected number of nodes.
    pub fn with_capacity(nodes: usize) -> Self {
        let mut lookup = FxHashMap::default();
        lookup.reserve(nodes);
        Self {
            ids: Vec::with_capacity(nodes),
            lookup,
            adjacency: Vec::with_capacity(nodes),
            edge_count: 0,
        }
    }

    // ── Mutation ──────────────────────────────────────────────────────────

    /// Insert `id` with no neighbours if absent.  Returns its index either way.
    ///
    /// # Panics
    /// Panics if the graph already holds `u32::MAX` nodes.
    pub fn add_node(&mut self, id: &str) -> NodeId {
        if let Some(&node) = self.lookup.get(id) {
            return node;
        }
        let node = match NodeId::try_from(self.ids.len()) {
            Ok(node) => node,
            Err(e) => panic!("cannot add {id:?}: {e}"),
        };
        self.ids.push(id.to_owned());
        self.lookup.insert(id.to_owned(), node);
        self.adjacency.push(Vec::new());
        node
    }

    /// Insert (or overwrite) the undirected edge `a`-`b`.
    ///
    /// Both endpoints are added as nodes if absent.  The weight is written in
    /// both directions, replacing any earlier weight for the same pair.
    /// Callers must not pass `a == b` or a negative weight.
    pub fn add_edge(&mut self, a: &str, b: &str, weight: f64) -> (NodeId, NodeId) {
        debug_assert_ne!(a, b, "self-loop on {a:?}");
        debug_assert!(weight >= 0.0, "negative weight {weight} on {a:?} - {b:?}");

        let na = self.add_node(a);
        let nb = self.add_node(b);
        let inserted = self.upsert(na, nb, weight);
        self.upsert(nb, na, weight);
        if inserted {
            self.edge_count += 1;
        }
        (na, nb)
    }

    /// Set `from → to` to `weight`; `true` if the entry is new.
    fn upsert(&mut self, from: NodeId, to: NodeId, weight: f64) -> bool {
        let list = &mut self.adjacency[from.index()];
        match list.iter_mut().find(|n| n.node == to) {
            Some(existing) => {
                existing.weight = weight;
                false
            }
            None => {
                list.push(Neighbor { node: to, weight });
                true
            }
        }
    }

    // ── Dimensions ────────────────────────────────────────────────────────

    pub fn node_count(&self) -> usize {
        self.ids.len()
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    // ── Lookup ────────────────────────────────────────────────────────────

    pub fn contains(&self, id: &str) -> bool {
        self.lookup.contains_key(id)
    }

    #[inline]
    pub fn index_of(&self, id: &str) -> Option<NodeId> {
        self.lookup.get(id).copied()
    }

    /// Identifier of `node`.
    ///
    /// # Panics
    /// Panics if `node` did not come from this graph.
    #[inline]
    pub fn id_of(&self, node: NodeId) -> &str {
        &self.ids[node.index()]
    }

    /// All identifiers in insertion order.
    pub fn node_ids(&self) -> impl Iterator<Item = &str> + '_ {
        self.ids.iter().map(String::as_str)
    }

    // ── Traversal ─────────────────────────────────────────────────────────

    /// Adjacency list of `node`.  Contiguous slice, no allocation.
    #[inline]
    pub fn neighbors_of(&self, node: NodeId) -> &[Neighbor] {
        &self.adjacency[node.index()]
    }

    /// `(neighbor id, weight)` pairs of `id`; empty for an unknown id.
    pub fn neighbors(&self, id: &str) -> impl Iterator<Item = (&str, f64)> + '_ {
        let list: &[Neighbor] = match self.index_of(id) {
            Some(node) => self.neighbors_of(node),
            None => &[],
        };
        list.iter().map(move |n| (self.id_of(n.node), n.weight))
    }

    /// Weight of the edge `a`-`b`, if present.
    pub fn weight(&self, a: &str, b: &str) -> Option<f64> {
        let na = self.index_of(a)?;
        let nb = self.index_of(b)?;
        self.neighbors_of(na)
            .iter()
            .find(|n| n.node == nb)
            .map(|n| n.weight)
    }

    /// Every undirected edge once, as `(a, b, weight)` with `a` inserted
    /// before `b`.
    pub fn edges(&self) -> impl Iterator<Item = (&str, &str, f64)> + '_ {
        self.adjacency.iter().enumerate().flat_map(move |(i, list)| {
            list.iter()
                .filter(move |n| i < n.node.index())
                .map(move |n| (self.ids[i].as_str(), self.id_of(n.node), n.weight))
        })
    }
}
