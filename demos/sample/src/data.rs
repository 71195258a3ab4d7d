//! Input data for the sample run: a built-in reference set, or a CSV file.
//!
//! # CSV format
//!
//! One row per entity; `kind` is `site`, `hub`, or `center`.
//!
//! ```csv
//! kind,id,x,y
//! site,TS1,10,20
//! hub,H1,12,22
//! center,EC1,15,25
//! ```

use std::io::Read;
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::Deserialize;

use tn_core::{Center, Hub, Site};

/// Entity lists in the order the builder expects them.
#[derive(Debug, Default)]
pub struct NetworkData {
    pub sites:   Vec<Site>,
    pub hubs:    Vec<Hub>,
    pub centers: Vec<Center>,
}

#[derive(Deserialize)]
struct EntityRecord {
    kind: String,
    id:   String,
    x:    f64,
    y:    f64,
}

/// 3 telecom sites, 5 hubs, 3 emergency centers.
pub fn sample() -> NetworkData {
    NetworkData {
        sites: vec![
            Site::new("TS1", (10.0, 20.0)),
            Site::new("TS2", (25.0, 35.0)),
            Site::new("TS3", (40.0, 50.0)),
        ],
        hubs: vec![
            Hub::new("H1", (12.0, 22.0)),
            Hub::new("H2", (28.0, 38.0)),
            Hub::new("H3", (45.0, 55.0)),
            Hub::new("H4", (50.0, 60.0)),
            Hub::new("H5", (5.0, 15.0)),
        ],
        centers: vec![
            Center::new("EC1", (15.0, 25.0)),
            Center::new("EC2", (30.0, 40.0)),
            Center::new("EC3", (35.0, 45.0)),
        ],
    }
}

pub fn load_csv(path: &Path) -> Result<NetworkData> {
    let file = std::fs::File::open(path)
        .with_context(|| format!("opening {}", path.display()))?;
    load_reader(file).with_context(|| format!("reading {}", path.display()))
}

pub fn load_reader<R: Read>(reader: R) -> Result<NetworkData> {
    let mut data = NetworkData::default();
    for (line, row) in csv::Reader::from_reader(reader).deserialize::<EntityRecord>().enumerate() {
        let r = row?;
        let at = (r.x, r.y);
        match r.kind.trim() {
            "site"   => data.sites.push(Site::new(r.id, at)),
            "hub"    => data.hubs.push(Hub::new(r.id, at)),
            "center" => data.centers.push(Center::new(r.id, at)),
            other    => bail!("row {}: unknown kind {other:?}: expected site, hub, or center", line + 1),
        }
    }
    Ok(data)
}
