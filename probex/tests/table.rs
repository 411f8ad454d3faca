//! Load, search, chain, and statistics behavior of the probe table

use probex::{Error, ProbeTable, TableBuilder};

/// Distinct pseudo-random keys below the default five-digit bound
fn make_keys(n: usize) -> Vec<u32> {
    (0..n).map(|i| ((i * 7_919) % 99_991) as u32).collect()
}

#[test]
fn three_record_scenario() {
    let table = probex::load(&[42_u32, 17, 99]).unwrap();
    assert_eq!(table.capacity(), 9);
    assert_eq!(table.occupied(), 3);

    let in_order: Vec<u32> = table.iter_ordered().map(|slot| slot.key()).collect();
    assert_eq!(in_order, vec![17, 42, 99]);

    let (hit, attempts) = table.search(42);
    let slot = hit.unwrap();
    assert_eq!(slot.key(), 42);
    assert_eq!(slot.display_key(), 420);
    assert!(attempts <= 9);

    let (miss, attempts) = table.search(5);
    assert!(miss.is_none());
    assert!(attempts <= 9);
}

#[test]
fn search_finds_every_inserted_key() {
    let keys = make_keys(500);
    let table = probex::load(&keys).unwrap();
    assert_eq!(table.occupied(), keys.len());

    for &key in &keys {
        let (hit, attempts) = table.search(key);
        let slot = hit.unwrap();
        assert_eq!(slot.key(), key);
        assert_eq!(slot.display_key(), u64::from(key) * 10);
        assert!(attempts <= table.capacity());
        assert!(slot.insert_attempts() >= 1);
    }

    // Keys above the generator's residue range were never inserted
    for absent in 99_992..=99_999_u32 {
        let (hit, attempts) = table.search(absent);
        assert!(hit.is_none());
        assert!(attempts <= table.capacity());
    }
}

#[test]
fn ordered_iteration_matches_sorted_input() {
    let keys = make_keys(250);
    let table = probex::load(&keys).unwrap();

    let mut expected = keys;
    expected.sort_unstable();

    let walked: Vec<u32> = table.iter_ordered().map(|slot| slot.key()).collect();
    assert_eq!(walked, expected);

    // Each traversal is independent and restartable
    let again: Vec<u32> = table.iter_ordered().map(|slot| slot.key()).collect();
    assert_eq!(again, expected);
}

#[test]
fn occupied_keys_stay_distinct() {
    let keys = make_keys(100);
    let table = probex::load(&keys).unwrap();

    let mut stored: Vec<u32> = table
        .slots()
        .iter()
        .filter(|slot| slot.is_occupied())
        .map(|slot| slot.key())
        .collect();
    stored.sort_unstable();
    stored.dedup();
    assert_eq!(stored.len(), keys.len());
    assert_eq!(table.occupied(), keys.len());
}

#[test]
fn empty_load_builds_an_empty_table() {
    let table = probex::load::<u32>(&[]).unwrap();
    assert_eq!(table.capacity(), 4);
    assert_eq!(table.occupied(), 0);
    assert!(table.head().is_none());
    assert_eq!(table.iter_ordered().count(), 0);

    let (hit, attempts) = table.search(1);
    assert!(hit.is_none());
    assert_eq!(attempts, 1);
}

#[test]
fn table_full_is_reported_and_harmless() {
    // Keys 0..=3 each land directly on their own slot of a 4-slot table.
    let mut table = ProbeTable::new(4).unwrap();
    let mut prev = table.insert_head(0_u32).unwrap();
    for key in [1_u32, 2, 3] {
        prev = table.insert_after(key, prev).unwrap();
    }
    assert_eq!(table.occupied(), 4);

    let err = table.insert_after(7, prev).unwrap_err();
    assert!(matches!(err, Error::TableFull { capacity: 4 }));

    // The failed insertion corrupted nothing
    assert_eq!(table.occupied(), 4);
    for key in [0_u32, 1, 2, 3] {
        let (hit, _) = table.search(key);
        assert_eq!(hit.unwrap().key(), key);
    }
    let walked: Vec<u32> = table.iter_ordered().map(|slot| slot.key()).collect();
    assert_eq!(walked, vec![0, 1, 2, 3]);
}

#[test]
fn colliding_keys_feed_the_chain_monitor() {
    // 9, 18, and 27 all hash to slot 0 on their first probe.
    let mut table = ProbeTable::new(9).unwrap();
    let mut prev = table.insert_head(9_u32).unwrap();
    for key in [18_u32, 27] {
        prev = table.insert_after(key, prev).unwrap();
    }

    assert_eq!(table.longest_first_probe_chain(), 3);
    assert_eq!(table.count_first_probe_hits(3), 1);
    assert_eq!(table.count_first_probe_hits(0), 8);
    assert_eq!(table.first_probe_targets(), 1);

    // The collisions were resolved by later probes
    let (hit, attempts) = table.search(18);
    let slot = hit.unwrap();
    assert_eq!(slot.insert_attempts(), 2);
    assert_eq!(attempts, 2);

    let walked: Vec<u32> = table.iter_ordered().map(|slot| slot.key()).collect();
    assert_eq!(walked, vec![9, 18, 27]);
}

#[test]
fn record_sizing_allocates_three_slots_each() {
    let table = ProbeTable::<u32>::for_records(100).unwrap();
    assert_eq!(table.capacity(), 300);
    assert_eq!(table.occupied(), 0);

    // One record would only get 3 slots, below the probe minimum
    assert!(matches!(
        ProbeTable::<u32>::for_records(1),
        Err(Error::InvalidCapacity { .. })
    ));
}

#[test]
fn builder_settings_shape_the_table() {
    let keys = [7_u32, 3, 900];
    let table = TableBuilder::new()
        .digits(3)
        .capacity_factor(5)
        .load(&keys)
        .unwrap();
    assert_eq!(table.capacity(), 15);

    let walked: Vec<u32> = table.iter_ordered().map(|slot| slot.key()).collect();
    assert_eq!(walked, vec![3, 7, 900]);
}

#[test]
fn builder_rejects_keys_beyond_the_digit_bound() {
    let err = TableBuilder::new()
        .digits(3)
        .load(&[1_234_u32])
        .unwrap_err();
    assert!(matches!(
        err,
        Error::KeyRange {
            key: 1_234,
            max_key: 999,
        }
    ));
}

#[test]
fn narrow_key_types_load_too() {
    let keys = [200_u16, 11, 93];
    let table = TableBuilder::new().digits(3).load(&keys).unwrap();
    let walked: Vec<u16> = table.iter_ordered().map(|slot| slot.key()).collect();
    assert_eq!(walked, vec![11, 93, 200]);
}
