//! Unit tests for tn-core primitives.

#[cfg(test)]
mod ids {
    use crate::NodeId;

    #[test]
    fn index_roundtrip() {
        let id = NodeId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(NodeId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn try_from_rejects_out_of_range_and_sentinel() {
        use crate::CoreError;

        let last = u32::MAX as usize - 1;
        assert_eq!(NodeId::try_from(last).unwrap(), NodeId(u32::MAX - 1));
        // u32::MAX would alias the INVALID sentinel.
        assert_eq!(
            NodeId::try_from(u32::MAX as usize).unwrap_err(),
            CoreError::IndexOverflow(u32::MAX as usize)
        );
        assert!(NodeId::try_from(usize::MAX).is_err());
    }

    #[test]
    fn default_is_invalid() {
        assert_eq!(NodeId::default(), NodeId::INVALID);
        assert!(!NodeId::INVALID.is_valid());
        assert!(NodeId(0).is_valid());
    }

    #[test]
    fn display() {
        assert_eq!(NodeId(7).to_string(), "NodeId(7)");
    }
}

#[cfg(test)]
mod geo {
    use crate::Coordinate;

    #[test]
    fn zero_distance() {
        let p = Coordinate::new(10.0, 20.0);
        assert_eq!(p.distance(p), 0.0);
    }

    #[test]
    fn pythagorean_triple() {
        let a = Coordinate::new(1.0, 1.0);
        let b = Coordinate::new(4.0, 5.0);
        assert_eq!(a.distance(b), 5.0);
        assert_eq!(a.distance_2(b), 25.0);
    }

    #[test]
    fn symmetric() {
        let a = Coordinate::new(12.0, 22.0);
        let b = Coordinate::new(5.0, 15.0);
        assert_eq!(a.distance(b), b.distance(a));
        assert!((a.distance(b) - 9.899_494_936_611_665).abs() < 1e-12);
    }

    #[test]
    fn origin_is_unset() {
        assert!(Coordinate::ORIGIN.is_unset());
        assert!(Coordinate::new(-0.0, 0.0).is_unset());
        assert!(!Coordinate::new(0.0, 1e-9).is_unset());
    }

    #[test]
    fn exact_equality() {
        assert_eq!(Coordinate::new(1.0, 2.0), Coordinate::from((1.0, 2.0)));
        assert_ne!(Coordinate::new(1.0, 2.0), Coordinate::new(1.0, 2.0 + 1e-12));
    }
}

#[cfg(test)]
mod entity {
    use crate::{validate_unique_ids, Center, CoreError, EntityKind, Hub, InvalidReason, NetworkEntity, Site};

    #[test]
    fn valid_entity_passes() {
        assert!(Site::new("TS1", (10.0, 20.0)).validate().is_ok());
        assert!(Hub::new("H1", (12.0, 22.0)).validate().is_ok());
        assert!(Center::new("EC1", (15.0, 25.0)).validate().is_ok());
    }

    #[test]
    fn empty_id_rejected() {
        let err = Hub::new("", (1.0, 1.0)).validate().unwrap_err();
        assert_eq!(
            err,
            CoreError::InvalidEntity {
                kind:   EntityKind::Hub,
                id:     String::new(),
                reason: InvalidReason::EmptyId,
            }
        );
    }

    #[test]
    fn unset_coordinate_rejected() {
        let err = Center::new("EC9", (0.0, 0.0)).validate().unwrap_err();
        assert!(matches!(
            err,
            CoreError::InvalidEntity { kind: EntityKind::Center, reason: InvalidReason::UnsetCoordinate, .. }
        ));
        assert!(err.to_string().contains("EC9"));
    }

    #[test]
    fn unique_ids_accepted() {
        let sites   = [Site::new("TS1", (1.0, 1.0))];
        let hubs    = [Hub::new("H1", (2.0, 2.0)), Hub::new("H2", (3.0, 3.0))];
        let centers = [Center::new("EC1", (4.0, 4.0))];
        assert!(validate_unique_ids(&sites, &hubs, &centers).is_ok());
    }

    #[test]
    fn cross_tier_collision_rejected() {
        let sites   = [Site::new("N1", (1.0, 1.0))];
        let hubs    = [Hub::new("N1", (2.0, 2.0))];
        let err = validate_unique_ids(&sites, &hubs, &[]).unwrap_err();
        assert_eq!(
            err,
            CoreError::InvalidEntity {
                kind:   EntityKind::Hub,
                id:     "N1".into(),
                reason: InvalidReason::DuplicateId(EntityKind::Site),
            }
        );
    }

    #[test]
    fn same_tier_collision_rejected() {
        let centers = [Center::new("EC1", (1.0, 1.0)), Center::new("EC1", (5.0, 5.0))];
        let err = validate_unique_ids(&[], &[], &centers).unwrap_err();
        assert!(matches!(
            err,
            CoreError::InvalidEntity {
                kind: EntityKind::Center,
                reason: InvalidReason::DuplicateId(EntityKind::Center),
                ..
            }
        ));
    }
}

#[cfg(test)]
mod config {
    use crate::{CoreError, NetworkConfig};

    #[test]
    fn defaults_match_topology() {
        let c = NetworkConfig::default();
        assert_eq!((c.site_hub_links, c.hub_peer_links, c.center_hub_links), (1, 2, 5));
        assert!(c.validate().is_ok());
    }

    #[test]
    fn zero_count_rejected() {
        let c = NetworkConfig { hub_peer_links: 0, ..NetworkConfig::default() };
        match c.validate() {
            Err(CoreError::Config(msg)) => assert!(msg.contains("hub_peer_links")),
            other => panic!("expected config error, got {other:?}"),
        }
    }

    #[test]
    fn peer_count_must_leave_room_for_self() {
        let c = NetworkConfig { hub_peer_links: usize::MAX, ..NetworkConfig::default() };
        assert!(matches!(c.validate(), Err(CoreError::Config(_))));

        let c = NetworkConfig { hub_peer_links: usize::MAX - 1, ..NetworkConfig::default() };
        assert!(c.validate().is_ok());
    }
}
