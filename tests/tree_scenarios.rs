// Copyright 2025 Vivian Voss. Licensed under the Apache License, Version 2.0.
// SPDX-License-Identifier: Apache-2.0

//! Whole-tree scenario and property tests.
//!
//! The scenario suite drives the tree through the canonical split, borrow,
//! merge, and collapse sequences and asserts the resulting shapes. The
//! property suite runs seeded random workloads against a `BTreeMap` oracle
//! with a full invariant check after every mutation.

use std::collections::BTreeMap;

use leafbase::btree::{BPlusTree, Order};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

fn tree<V>(m: usize) -> BPlusTree<i32, V> {
    BPlusTree::new(Order::new(m).unwrap())
}

// ============================================================================
// Scenario suite: splits
// ============================================================================

#[test]
fn scenario_first_split() {
    let mut t = tree(3);
    t.insert(10, "Tom");
    t.insert(20, "Morgan");
    t.insert(15, "Robert");

    // One key in the root, leaves [10] and [15, 20] chained in order.
    assert_eq!(t.format_levels(), "[15]\n[10] [15, 20]\n");
    assert_eq!(t.keys_in_order(), vec![10, 15, 20]);
    t.validate().unwrap();
}

#[test]
fn scenario_deeper_splits() {
    let mut t = tree(3);
    for (k, v) in [
        (10, "Tom"),
        (20, "Morgan"),
        (15, "Robert"),
        (8, "Michael"),
        (9, "Hailee"),
        (11, "Jaden"),
        (12, "Matthew"),
    ] {
        t.insert(k, v);
        t.validate().unwrap();
    }

    assert_eq!(t.get(&10), Some(&"Tom"));
    assert_eq!(t.get(&12), Some(&"Matthew"));
    assert_eq!(t.keys_in_order(), vec![8, 9, 10, 11, 12, 15, 20]);
    assert_eq!(t.height(), 3);
}

#[test]
fn scenario_overwrite() {
    let mut t = tree(3);
    for (k, v) in [
        (10, "Tom"),
        (20, "Morgan"),
        (15, "Robert"),
        (8, "Michael"),
        (9, "Hailee"),
        (11, "Jaden"),
        (12, "Matthew"),
    ] {
        t.insert(k, v);
    }

    let keys_before = t.keys_in_order();
    assert_eq!(t.insert(10, "Will"), Some("Tom"));
    assert_eq!(t.get(&10), Some(&"Will"));
    assert_eq!(t.keys_in_order().len(), keys_before.len());
    t.validate().unwrap();
}

// ============================================================================
// Scenario suite: deletes
// ============================================================================

/// The twelve-key order-4 fixture every delete scenario starts from.
fn delete_fixture() -> BPlusTree<i32, String> {
    let mut t = tree(4);
    for k in [5, 10, 15, 20, 25, 30, 35, 40, 45, 50, 7, 18] {
        t.insert(k, k.to_string());
    }
    t.validate().unwrap();
    t
}

#[test]
fn scenario_simple_delete() {
    let mut t = delete_fixture();
    let nodes_before = t.node_count();

    assert_eq!(t.delete(&7), Some("7".to_string()));
    t.validate().unwrap();

    // No merge: the node population is untouched.
    assert_eq!(t.node_count(), nodes_before);
    assert_eq!(t.get(&7), None);
    for k in [5, 10, 15, 18, 20, 25, 30, 35, 40, 45, 50] {
        assert_eq!(t.get(&k), Some(&k.to_string()));
    }
}

#[test]
fn scenario_borrow_from_right_sibling() {
    let mut t = delete_fixture();
    t.delete(&7);

    // [5, 10] loses 5 and falls below minimum; its right sibling lends.
    t.delete(&5);
    t.validate().unwrap();

    assert_eq!(
        t.format_levels(),
        "[35]\n[18, 25] [45]\n[10, 15] [18, 20] [25, 30] [35, 40] [45, 50]\n"
    );
}

#[test]
fn scenario_merge() {
    let mut t = delete_fixture();
    t.delete(&7);
    t.delete(&5);

    t.delete(&15);
    t.validate().unwrap();

    assert_eq!(t.len(), 12 - 3);
    assert_eq!(t.keys_in_order(), vec![10, 18, 20, 25, 30, 35, 40, 45, 50]);
}

#[test]
fn scenario_root_collapse() {
    let mut t = delete_fixture();
    for k in [7, 5, 15] {
        t.delete(&k);
    }
    assert_eq!(t.height(), 3);

    t.delete(&20);
    t.validate().unwrap();
    t.delete(&25);
    t.validate().unwrap();

    // The old root lost its last separator and handed the tree to its
    // sole child; validate() confirms the new root carries no parent.
    assert_eq!(t.height(), 2);
    assert_eq!(t.keys_in_order(), vec![10, 18, 30, 35, 40, 45, 50]);
}

// ============================================================================
// Scenario suite: range scans
// ============================================================================

#[test]
fn scenario_range_query() {
    let mut t = tree(3);
    let names = ["Ted", "Robin", "Barney", "Marshall", "Lily", "Victoria"];
    for (k, v) in [0, 1, 2, 4, 8, 16].into_iter().zip(names) {
        t.insert(k, v);
    }

    assert_eq!(
        t.range(&2, &8),
        vec![(2, "Barney"), (4, "Marshall"), (8, "Lily")]
    );
    assert_eq!(t.keys_in_order(), vec![0, 1, 2, 4, 8, 16]);
}

// ============================================================================
// Property suite
// ============================================================================

#[test]
fn property_insert_then_lookup() {
    let mut rng = StdRng::seed_from_u64(7);
    for m in [3, 4, 5, 7] {
        let mut t = tree(m);
        let mut oracle = BTreeMap::new();

        for _ in 0..400 {
            let k = rng.gen_range(0..150);
            let v = rng.gen_range(0..1_000_000);
            assert_eq!(t.insert(k, v), oracle.insert(k, v));
            t.validate().unwrap();
        }
        for k in 0..150 {
            assert_eq!(t.get(&k), oracle.get(&k));
        }
    }
}

#[test]
fn property_ordering() {
    let mut rng = StdRng::seed_from_u64(11);
    let mut t = tree(4);
    let mut oracle = BTreeMap::new();

    for _ in 0..300 {
        let k = rng.gen_range(0..500);
        t.insert(k, ());
        oracle.insert(k, ());
    }

    let keys = t.keys_in_order();
    assert!(keys.windows(2).all(|w| w[0] < w[1]));
    assert_eq!(keys, oracle.keys().copied().collect::<Vec<_>>());
}

#[test]
fn property_leaf_chain_reversal() {
    let mut rng = StdRng::seed_from_u64(13);
    for m in [3, 5] {
        let mut t = tree(m);
        for _ in 0..250 {
            t.insert(rng.gen_range(0..400), rng.gen_range(0..100));
        }

        let forward: Vec<(i32, i32)> = t.iter().map(|(k, v)| (*k, *v)).collect();
        let mut backward: Vec<(i32, i32)> = t.iter().rev().map(|(k, v)| (*k, *v)).collect();
        backward.reverse();
        assert_eq!(forward, backward);
    }
}

#[test]
fn property_range_matches_filtered_enumeration() {
    let mut rng = StdRng::seed_from_u64(17);
    let mut t = tree(4);
    for _ in 0..300 {
        let k = rng.gen_range(0..300);
        t.insert(k, k * 3);
    }

    for _ in 0..50 {
        let a = rng.gen_range(-20..320);
        let b = rng.gen_range(a..350);
        let scanned: Vec<i32> = t.range(&a, &b).into_iter().map(|(k, _)| k).collect();
        let filtered: Vec<i32> = t
            .keys_in_order()
            .into_iter()
            .filter(|k| (a..=b).contains(k))
            .collect();
        assert_eq!(scanned, filtered);
    }
}

#[test]
fn property_delete_is_idempotent() {
    let mut rng = StdRng::seed_from_u64(19);
    let mut t = tree(3);
    for k in 0..60 {
        t.insert(k, k);
    }

    for _ in 0..120 {
        let k = rng.gen_range(0..70);
        let first = t.delete(&k);
        t.validate().unwrap();
        assert_eq!(t.delete(&k), None);
        t.validate().unwrap();
        if first.is_some() {
            assert_eq!(t.get(&k), None);
        }
    }
}

#[test]
fn property_insert_delete_round_trip() {
    let mut rng = StdRng::seed_from_u64(23);
    for m in [3, 4, 6] {
        let mut insert_order: Vec<i32> = (1..=120).collect();
        let mut delete_order = insert_order.clone();
        insert_order.shuffle(&mut rng);
        delete_order.shuffle(&mut rng);

        let mut t = tree(m);
        for k in &insert_order {
            t.insert(*k, *k);
            t.validate().unwrap();
        }
        for k in &delete_order {
            assert_eq!(t.delete(k), Some(*k));
            t.validate().unwrap();
        }

        // Back to the empty single-leaf tree.
        assert!(t.is_empty());
        assert_eq!(t.height(), 1);
        assert_eq!(t.node_count(), 1);
    }
}

#[test]
fn property_overwrite_keeps_single_key() {
    let mut t = tree(4);
    for i in 0..50 {
        t.insert(42, i);
        t.validate().unwrap();
    }
    assert_eq!(t.len(), 1);
    assert_eq!(t.node_count(), 1);
    assert_eq!(t.get(&42), Some(&49));
}

#[test]
fn property_mixed_workload_stays_valid() {
    let mut rng = StdRng::seed_from_u64(29);
    for m in [3, 4, 5] {
        let mut t = tree(m);
        let mut oracle = BTreeMap::new();

        for _ in 0..800 {
            let k = rng.gen_range(0..200);
            if rng.gen_bool(0.6) {
                let v = rng.gen_range(0..1000);
                assert_eq!(t.insert(k, v), oracle.insert(k, v));
            } else {
                assert_eq!(t.delete(&k), oracle.remove(&k));
            }
            t.validate().unwrap();
            assert_eq!(t.len(), oracle.len());
        }

        assert_eq!(
            t.keys_in_order(),
            oracle.keys().copied().collect::<Vec<_>>()
        );
    }
}
