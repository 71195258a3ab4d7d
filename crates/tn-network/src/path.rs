//! Path reconstruction from a predecessor map.

use crate::solver::PredecessorMap;
use crate::{NetworkError, NetworkResult};

/// An ordered node sequence from source to target plus its total cost.
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    /// Identifiers from source to target, both inclusive.
    pub nodes: Vec<String>,
    pub total_distance: f64,
}

impl Route {
    /// `true` if source and target are the same node.
    pub fn is_trivial(&self) -> bool {
        self.nodes.len() <= 1
    }

    /// Number of edges traversed.
    pub fn hops(&self) -> usize {
        self.nodes.len().saturating_sub(1)
    }
}

/// Walk `predecessors` backwards from `target` until `source` is reached.
///
/// `source == target` yields `[source]` without consulting the map.  Fails
/// with [`NetworkError::NoPathFound`] when the walk hits a node with no
/// predecessor first (unreachable or unknown target).
pub fn reconstruct_path(
    predecessors: &PredecessorMap<'_>,
    source: &str,
    target: &str,
) -> NetworkResult<Vec<String>> {
    if source == target {
        return Ok(vec![target.to_owned()]);
    }

    let no_path = || NetworkError::NoPathFound { from: source.to_owned(), to: target.to_owned() };
    let graph = predecessors.graph;

    let mut cur = graph.index_of(target).ok_or_else(no_path)?;
    let mut path = vec![graph.id_of(cur)];
    while graph.id_of(cur) != source {
        cur = predecessors.prev_of(cur).ok_or_else(no_path)?;
        path.push(graph.id_of(cur));
    }

    path.reverse();
    Ok(path.into_iter().map(str::to_owned).collect())
}
