//! Unit tests for depot-core primitives.

#[cfg(test)]
mod geo {
    use std::hash::BuildHasher;

    use rustc_hash::FxBuildHasher;

    use crate::{CoreError, GeoCoord};

    #[test]
    fn zero_distance() {
        let p = GeoCoord::new(34.0625329, -118.4470263);
        assert!(p.distance_miles(p) < 1e-9);
    }

    #[test]
    fn one_degree_latitude() {
        // ~1 degree of latitude ≈ 111.2 km ≈ 69.1 miles
        let a = GeoCoord::new(34.0, -118.0);
        let b = GeoCoord::new(35.0, -118.0);
        let km = a.distance_km(b);
        let mi = a.distance_miles(b);
        assert!((km - 111.195).abs() < 0.1, "got {km}");
        assert!((mi - 69.09).abs() < 0.1, "got {mi}");
    }

    #[test]
    fn euclidean_never_exceeds_miles() {
        let a = GeoCoord::new(34.0547, -118.4794);
        let b = GeoCoord::new(34.0712, -118.4506);
        assert!(a.euclidean_deg(b) < a.distance_miles(b));
    }

    #[test]
    fn signed_zero_is_one_key() {
        let a = GeoCoord::new(0.0, 10.0);
        let b = GeoCoord::new(-0.0, 10.0);
        assert_eq!(a, b);
        assert_eq!(FxBuildHasher.hash_one(a), FxBuildHasher.hash_one(b));
    }

    #[test]
    fn parse_text() {
        let c = GeoCoord::parse("34.0547000", " -118.4794734").unwrap();
        assert_eq!(c, GeoCoord::new(34.0547, -118.4794734));
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(matches!(
            GeoCoord::parse("north", "-118.0"),
            Err(CoreError::InvalidCoordinate(_))
        ));
        assert!(matches!(
            GeoCoord::parse("91.0", "0.0"),
            Err(CoreError::InvalidCoordinate(_))
        ));
    }
}

#[cfg(test)]
mod segment {
    use crate::{GeoCoord, StreetSegment, angle_between};

    fn seg(a: (f64, f64), b: (f64, f64)) -> StreetSegment {
        StreetSegment::new(GeoCoord::new(a.0, a.1), GeoCoord::new(b.0, b.1), "Test St")
    }

    #[test]
    fn bearings_follow_math_convention() {
        assert!(seg((0.0, 0.0), (0.0, 1.0)).bearing_deg().abs() < 1e-9); // east
        assert!((seg((0.0, 0.0), (1.0, 0.0)).bearing_deg() - 90.0).abs() < 1e-9); // north
        assert!((seg((0.0, 0.0), (0.0, -1.0)).bearing_deg() - 180.0).abs() < 1e-9); // west
        assert!((seg((0.0, 0.0), (-1.0, 0.0)).bearing_deg() - 270.0).abs() < 1e-9); // south
    }

    #[test]
    fn left_turn_is_ccw() {
        let east = seg((0.0, 0.0), (0.0, 1.0));
        let north = seg((0.0, 1.0), (1.0, 1.0));
        let south = seg((0.0, 1.0), (-1.0, 1.0));
        assert!((angle_between(&east, &north) - 90.0).abs() < 1e-9);
        assert!((angle_between(&east, &south) - 270.0).abs() < 1e-9);
    }

    #[test]
    fn straight_is_zero() {
        let a = seg((0.0, 0.0), (0.0, 1.0));
        let b = seg((0.0, 1.0), (0.0, 2.0));
        assert!(angle_between(&a, &b) < 1e-9);
    }

    #[test]
    fn reversed_swaps_endpoints() {
        let a = seg((0.0, 0.0), (0.0, 1.0));
        let r = a.reversed();
        assert_eq!(r.start, a.end);
        assert_eq!(r.end, a.start);
        assert_eq!(r.name, a.name);
        assert!((r.length_miles() - a.length_miles()).abs() < 1e-12);
    }
}

#[cfg(test)]
mod table {
    use crate::table::{DEFAULT_MAX_LOAD_FACTOR, INITIAL_BUCKETS};
    use crate::{CoreError, GeoCoord, KeyedTable};

    #[test]
    fn empty_table() {
        let t: KeyedTable<u32, &str> = KeyedTable::new();
        assert!(t.is_empty());
        assert_eq!(t.len(), 0);
        assert_eq!(t.bucket_count(), INITIAL_BUCKETS);
        assert_eq!(t.max_load_factor(), DEFAULT_MAX_LOAD_FACTOR);
        assert_eq!(t.find(&1), None);
    }

    #[test]
    fn associate_then_find() {
        let mut t = KeyedTable::new();
        t.associate("Hollywood Blvd", 1);
        t.associate("Sunset Blvd", 2);
        assert_eq!(t.find(&"Hollywood Blvd"), Some(&1));
        assert_eq!(t.find(&"Sunset Blvd"), Some(&2));
        assert_eq!(t.find(&"Vine St"), None);
        assert_eq!(t.len(), 2);
    }

    #[test]
    fn reassociate_overwrites_without_growing() {
        let mut t = KeyedTable::new();
        t.associate(7u32, "old");
        let buckets = t.bucket_count();
        t.associate(7u32, "new");
        assert_eq!(t.find(&7), Some(&"new"));
        assert_eq!(t.len(), 1);
        assert_eq!(t.bucket_count(), buckets);
    }

    #[test]
    fn reassociate_at_threshold_does_not_grow() {
        // 4 keys in 8 buckets sits exactly on the 0.5 threshold.
        let mut t = KeyedTable::new();
        for k in 0..4u32 {
            t.associate(k, k);
        }
        assert_eq!(t.bucket_count(), 8);
        t.associate(3u32, 99);
        assert_eq!(t.bucket_count(), 8);
        assert_eq!(t.find(&3), Some(&99));
    }

    #[test]
    fn growth_doubles_and_keeps_entries() {
        let mut t = KeyedTable::new();
        for k in 0..4u32 {
            t.associate(k, k * 10);
        }
        assert_eq!(t.bucket_count(), 8);

        // Fifth key: 5 / 8 > 0.5 → 16 buckets.
        t.associate(4u32, 40);
        assert_eq!(t.bucket_count(), 16);

        for k in 0..5u32 {
            assert_eq!(t.find(&k), Some(&(k * 10)), "key {k} lost on rehash");
        }
        assert_eq!(t.len(), 5);
    }

    #[test]
    fn many_keys_survive_repeated_growth() {
        let mut t = KeyedTable::new();
        for i in 0..1_000u32 {
            let c = GeoCoord::new(34.0 + f64::from(i) * 1e-4, -118.0);
            t.associate(c, i);
        }
        assert_eq!(t.len(), 1_000);
        assert!(t.len() as f64 / t.bucket_count() as f64 <= DEFAULT_MAX_LOAD_FACTOR);
        assert_eq!(t.iter().count(), 1_000);
        for i in 0..1_000u32 {
            let c = GeoCoord::new(34.0 + f64::from(i) * 1e-4, -118.0);
            assert_eq!(t.find(&c), Some(&i));
        }
    }

    #[test]
    fn custom_load_factor() {
        let mut t = KeyedTable::with_max_load_factor(2.0).unwrap();
        for k in 0..16u32 {
            t.associate(k, ());
        }
        assert_eq!(t.bucket_count(), 8);
        t.associate(16u32, ());
        assert_eq!(t.bucket_count(), 16);
    }

    #[test]
    fn invalid_load_factor_rejected() {
        for bad in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let r = KeyedTable::<u32, u32>::with_max_load_factor(bad);
            assert!(matches!(r, Err(CoreError::InvalidLoadFactor(_))));
        }
    }

    #[test]
    fn find_mut_edits_in_place() {
        let mut t = KeyedTable::new();
        t.associate(1u32, vec![1]);
        t.find_mut(&1).unwrap().push(2);
        assert_eq!(t.find(&1), Some(&vec![1, 2]));
        assert!(t.find_mut(&2).is_none());
    }

    #[test]
    fn reset_restores_initial_capacity() {
        let mut t = KeyedTable::new();
        for k in 0..100u32 {
            t.associate(k, k);
        }
        assert!(t.bucket_count() > INITIAL_BUCKETS);
        t.reset();
        assert!(t.is_empty());
        assert_eq!(t.bucket_count(), INITIAL_BUCKETS);
        assert_eq!(t.find(&5), None);
        t.associate(5u32, 55);
        assert_eq!(t.find(&5), Some(&55));
    }
}
