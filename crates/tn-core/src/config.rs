//! Connectivity configuration for the network builder.
//!
//! The defaults reproduce the fixed three-tier topology:
//!
//! | Rule                          | Default |
//! |-------------------------------|---------|
//! | site → nearest hubs           | 1       |
//! | hub → nearest *other* hubs    | 2       |
//! | center → nearest hubs         | 5       |
//!
//! Applications construct a `NetworkConfig` (or deserialize one with the
//! `serde` feature) and hand it to the builder explicitly; nothing is read
//! from globals or the environment.

use crate::{CoreError, CoreResult};

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct NetworkConfig {
    /// Hubs each site connects to.
    pub site_hub_links: usize,

    /// Other hubs each hub connects to (the hub itself never counts).
    pub hub_peer_links: usize,

    /// Hubs each emergency center connects to.
    pub center_hub_links: usize,
}

impl NetworkConfig {
    /// Reject configurations with a zero link count, or a hub peer count
    /// too large to widen by the hub itself.
    pub fn validate(&self) -> CoreResult<()> {
        for (name, value) in [
            ("site_hub_links",   self.site_hub_links),
            ("hub_peer_links",   self.hub_peer_links),
            ("center_hub_links", self.center_hub_links),
        ] {
            if value == 0 {
                return Err(CoreError::Config(format!("{name} must be greater than 0")));
            }
        }
        if self.hub_peer_links.checked_add(1).is_none() {
            return Err(CoreError::Config(format!(
                "hub_peer_links must be less than {}",
                usize::MAX
            )));
        }
        Ok(())
    }
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            site_hub_links:   1,
            hub_peer_links:   2,
            center_hub_links: 5,
        }
    }
}
