//! Network entities: telecom sites, backbone hubs and emergency centers.
//!
//! All three carry the same data (a string identifier and a [`Coordinate`])
//! but are distinct types so the builder cannot, for example, connect a site
//! to a center by mistake.  Code that only needs the identifier and the
//! position is generic over [`NetworkEntity`].

use std::fmt;

use rustc_hash::FxHashMap;

use crate::{CoreError, CoreResult, Coordinate};

// ── EntityKind ────────────────────────────────────────────────────────────────

/// The tier an entity belongs to.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EntityKind {
    Site,
    Hub,
    Center,
}

impl EntityKind {
    /// Human-readable label, useful for log fields and report columns.
    pub fn as_str(self) -> &'static str {
        match self {
            EntityKind::Site   => "site",
            EntityKind::Hub    => "hub",
            EntityKind::Center => "center",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── InvalidReason ─────────────────────────────────────────────────────────────

/// Why an entity was rejected by validation.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum InvalidReason {
    EmptyId,
    /// Coordinate equals the origin sentinel.
    UnsetCoordinate,
    /// Identifier already used by an earlier entity of the given kind.
    DuplicateId(EntityKind),
}

impl fmt::Display for InvalidReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidReason::EmptyId         => f.write_str("empty identifier"),
            InvalidReason::UnsetCoordinate => f.write_str("coordinate is unset (origin)"),
            InvalidReason::DuplicateId(k)  => write!(f, "identifier already used by a {k}"),
        }
    }
}

// ── NetworkEntity ─────────────────────────────────────────────────────────────

/// Common view over [`Site`], [`Hub`] and [`Center`].
pub trait NetworkEntity {
    const KIND: EntityKind;

    fn id(&self) -> &str;

    fn location(&self) -> Coordinate;

    /// Reject entities with an empty identifier or an unset coordinate.
    fn validate(&self) -> CoreResult<()> {
        let reason = if self.id().is_empty() {
            InvalidReason::EmptyId
        } else if self.location().is_unset() {
            InvalidReason::UnsetCoordinate
        } else {
            return Ok(());
        };
        Err(CoreError::InvalidEntity {
            kind: Self::KIND,
            id:   self.id().to_owned(),
            reason,
        })
    }
}

/// Generate one entity struct per tier.
macro_rules! network_entity {
    ($(#[$attr:meta])* $name:ident => $kind:expr) => {
        $(#[$attr])*
        #[derive(Clone, Debug, PartialEq)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        pub struct $name {
            pub id:       String,
            pub location: Coordinate,
        }

        impl $name {
            pub fn new(id: impl Into<String>, location: impl Into<Coordinate>) -> Self {
                Self { id: id.into(), location: location.into() }
            }
        }

        impl NetworkEntity for $name {
            const KIND: EntityKind = $kind;

            #[inline]
            fn id(&self) -> &str {
                &self.id
            }

            #[inline]
            fn location(&self) -> Coordinate {
                self.location
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{} {}", self.id, self.location)
            }
        }
    };
}

network_entity! {
    /// A telecom site at the edge of the network.
    Site => EntityKind::Site
}

network_entity! {
    /// An intermediate backbone node.
    Hub => EntityKind::Hub
}

network_entity! {
    /// An emergency center, the routing destination for sites.
    Center => EntityKind::Center
}

// ── Cross-tier checks ─────────────────────────────────────────────────────────

/// Ensure identifiers are unique across *all* three tiers.
///
/// A collision (within one tier or across tiers) is reported as
/// [`CoreError::InvalidEntity`] against the later entity, naming the kind
/// that claimed the identifier first.  Order of checking is sites, hubs,
/// centers, each in input order.
pub fn validate_unique_ids(sites: &[Site], hubs: &[Hub], centers: &[Center]) -> CoreResult<()> {
    let mut seen: FxHashMap<&str, EntityKind> = FxHashMap::default();
    seen.reserve(sites.len() + hubs.len() + centers.len());

    fn claim<'a, E: NetworkEntity>(
        seen: &mut FxHashMap<&'a str, EntityKind>,
        entities: &'a [E],
    ) -> CoreResult<()> {
        for e in entities {
            if let Some(&first) = seen.get(e.id()) {
                return Err(CoreError::InvalidEntity {
                    kind:   E::KIND,
                    id:     e.id().to_owned(),
                    reason: InvalidReason::DuplicateId(first),
                });
            }
            seen.insert(e.id(), E::KIND);
        }
        Ok(())
    }

    claim(&mut seen, sites)?;
    claim(&mut seen, hubs)?;
    claim(&mut seen, centers)
}
