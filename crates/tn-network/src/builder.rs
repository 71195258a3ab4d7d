//! Three-tier network construction.
//!
//! # Connectivity rules
//!
//! | Tier   | Connects to                                 | Default count |
//! |--------|---------------------------------------------|---------------|
//! | Site   | nearest hubs                                | 1             |
//! | Hub    | nearest *other* hubs (self excluded by id)  | 2             |
//! | Center | nearest hubs                                | 5             |
//!
//! Every edge weight is the Euclidean distance between the two endpoints.
//! Hubs are bulk-loaded into a [`SpatialIndex`] once and each entity issues
//! one nearest-N query against it.
//!
//! The build is all-or-nothing: the first validation or search failure is
//! returned and the partially filled graph is dropped.

use tracing::{debug, info, warn};

use tn_core::{validate_unique_ids, Center, CoreError, Hub, NetworkConfig, NetworkEntity, Site};
use tn_spatial::{SearchError, SpatialIndex};

use crate::{BuildError, NetworkGraph};

/// Build a graph with the default [`NetworkConfig`].
pub fn build_network_graph(
    sites:   &[Site],
    hubs:    &[Hub],
    centers: &[Center],
) -> Result<NetworkGraph, BuildError> {
    NetworkBuilder::default().build(sites, hubs, centers)
}

/// Builds a [`NetworkGraph`] from explicit entity lists.
///
/// # Example
///
/// ```
/// use tn_core::{Center, Hub, Site};
/// use tn_network::NetworkBuilder;
///
/// let sites = [Site::new("TS1", (10.0, 20.0))];
/// let hubs = [
///     Hub::new("H1", (12.0, 22.0)),
///     Hub::new("H2", (28.0, 38.0)),
///     Hub::new("H3", (45.0, 55.0)),
///     Hub::new("H4", (50.0, 60.0)),
///     Hub::new("H5", (5.0, 15.0)),
/// ];
/// let centers = [Center::new("EC1", (15.0, 25.0))];
///
/// let graph = NetworkBuilder::default().build(&sites, &hubs, &centers).unwrap();
/// let route = graph.route("TS1", "EC1").unwrap();
/// assert_eq!(route.nodes, ["TS1", "H1", "EC1"]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct NetworkBuilder {
    config: NetworkConfig,
}

impl NetworkBuilder {
    pub fn new(config: NetworkConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &NetworkConfig {
        &self.config
    }

    /// Validate inputs, apply the three connectivity rules in order (sites,
    /// hubs, centers), and return the finished graph.
    pub fn build(
        &self,
        sites:   &[Site],
        hubs:    &[Hub],
        centers: &[Center],
    ) -> Result<NetworkGraph, BuildError> {
        // ── Validate ──────────────────────────────────────────────────────
        self.config.validate()?;
        validate_all(sites)?;
        validate_all(hubs)?;
        validate_all(centers)?;
        validate_unique_ids(sites, hubs, centers)
            .inspect_err(|e| warn!(error = %e, "rejected network input"))?;

        let index = SpatialIndex::new(hubs);
        let mut graph = NetworkGraph::with_capacity(sites.len() + hubs.len() + centers.len());

        // ── Rule 1: site → nearest hubs ───────────────────────────────────
        for site in sites {
            let nearest = index
                .nearest_n(site.location, self.config.site_hub_links)
                .map_err(|e| search_error(site, e))?;
            connect(&mut graph, site, nearest);
        }
        debug!(sites = sites.len(), edges = graph.edge_count(), "connected sites to hubs");

        // ── Rule 2: hub → nearest other hubs ──────────────────────────────
        //
        // Ask for one extra so the hub itself (distance 0) can be dropped by
        // identifier.  With duplicate coordinates the hub is not guaranteed
        // to come first, so position alone cannot be trusted.
        let peers = self.config.hub_peer_links;
        let with_self = peers
            .checked_add(1)
            .ok_or_else(|| CoreError::Config("hub_peer_links out of range".into()))?;
        for hub in hubs {
            let nearest = index
                .nearest_n(hub.location, with_self)
                .map_err(|e| search_error(hub, e))?;
            let others = nearest.into_iter().filter(|h| h.id != hub.id).take(peers);
            connect(&mut graph, hub, others);
        }
        debug!(hubs = hubs.len(), edges = graph.edge_count(), "connected hubs to peers");

        // ── Rule 3: center → nearest hubs ─────────────────────────────────
        for center in centers {
            let nearest = index
                .nearest_n(center.location, self.config.center_hub_links)
                .map_err(|e| search_error(center, e))?;
            connect(&mut graph, center, nearest);
        }

        info!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "network graph built"
        );
        Ok(graph)
    }
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn validate_all<E: NetworkEntity>(entities: &[E]) -> Result<(), BuildError> {
    for e in entities {
        e.validate().inspect_err(|err| warn!(error = %err, "rejected network input"))?;
    }
    Ok(())
}

fn search_error<E: NetworkEntity>(entity: &E, source: SearchError) -> BuildError {
    BuildError::Search { kind: E::KIND, id: entity.id().to_owned(), source }
}

/// Add an edge from `from` to each hub, weighted by Euclidean distance.
fn connect<'h, E: NetworkEntity>(
    graph: &mut NetworkGraph,
    from:  &E,
    hubs:  impl IntoIterator<Item = &'h Hub>,
) {
    for hub in hubs {
        let weight = from.location().distance(hub.location);
        graph.add_edge(from.id(), &hub.id, weight);
    }
}
