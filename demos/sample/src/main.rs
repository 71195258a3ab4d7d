//! sample: build the three-tier network and report routes.
//!
//! Usage: `sample [entities.csv]`.  Without an argument the built-in
//! reference data set is used.  Set `RUST_LOG=debug` to see builder and
//! solver events.

mod data;

use std::path::PathBuf;

use anyhow::Result;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use tn_network::{build_network_graph, shortest_paths};
use tn_spatial::find_nearest_emergency_center;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let data = match std::env::args_os().nth(1).map(PathBuf::from) {
        Some(path) => data::load_csv(&path)?,
        None => data::sample(),
    };
    info!(
        sites = data.sites.len(),
        hubs = data.hubs.len(),
        centers = data.centers.len(),
        "loaded network entities"
    );

    let graph = build_network_graph(&data.sites, &data.hubs, &data.centers)?;

    println!("Network graph connections:");
    for (a, b, w) in graph.edges() {
        println!("  {a} <--> {b} : {w:.2}");
    }
    println!();

    // Per-site failures are reported and skipped; the remaining sites still run.
    for site in &data.sites {
        let center = match find_nearest_emergency_center(site, &data.centers) {
            Ok(c) => c,
            Err(e) => {
                warn!(site = %site.id, error = %e, "no emergency center");
                continue;
            }
        };
        println!("Nearest emergency center for {} is {}", site.id, center.id);

        let route = shortest_paths(&graph, &site.id).and_then(|r| r.route_to(&center.id));
        match route {
            Ok(route) => {
                println!("  shortest path: {}", route.nodes.join(" -> "));
                println!("  total distance: {:.2}", route.total_distance);
            }
            Err(e) => println!("  {e}"),
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::data;

    #[test]
    fn loads_csv_rows_by_kind() {
        let csv = "kind,id,x,y\nsite,TS1,10,20\nhub,H1,12,22\ncenter,EC1,15,25\nhub,H2,28,38\n";
        let d = data::load_reader(Cursor::new(csv)).unwrap();
        assert_eq!(d.sites.len(), 1);
        assert_eq!(d.hubs.len(), 2);
        assert_eq!(d.centers[0].id, "EC1");
        assert_eq!(d.hubs[1].location.x, 28.0);
    }

    #[test]
    fn unknown_kind_rejected() {
        let csv = "kind,id,x,y\nrouter,R1,1,1\n";
        let err = data::load_reader(Cursor::new(csv)).unwrap_err();
        assert!(err.to_string().contains("router"));
    }

    #[test]
    fn sample_data_builds() {
        let d = data::sample();
        let g = tn_network::build_network_graph(&d.sites, &d.hubs, &d.centers).unwrap();
        assert_eq!(g.node_count(), 11);
        assert_eq!(g.route("TS1", "EC1").unwrap().nodes, ["TS1", "H1", "EC1"]);
    }
}
