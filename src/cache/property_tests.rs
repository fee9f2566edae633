//! Property-Based Tests for Cache Module
//!
//! Uses proptest to check capacity, eviction order and recency tracking.

use proptest::prelude::*;
use std::collections::HashSet;

use crate::cache::{Cache, StorageMode};

// == Strategies ==
/// Generates cache keys from a small alphabet so sequences revisit keys
fn key_strategy() -> impl Strategy<Value = String> {
    "[a-z]{1,3}".prop_map(|s| s)
}

fn unique_keys(min: usize, max: usize) -> impl Strategy<Value = Vec<String>> {
    prop::collection::hash_set("[a-zA-Z0-9_]{1,16}", min..max)
        .prop_map(|keys| keys.into_iter().collect())
}

#[derive(Debug, Clone)]
enum CacheOp {
    Put { key: String, value: u32 },
    Get { key: String },
    Remove { key: String },
}

fn cache_op_strategy() -> impl Strategy<Value = CacheOp> {
    prop_oneof![
        (key_strategy(), any::<u32>()).prop_map(|(key, value)| CacheOp::Put { key, value }),
        key_strategy().prop_map(|key| CacheOp::Get { key }),
        key_strategy().prop_map(|key| CacheOp::Remove { key }),
    ]
}

fn new_cache(capacity: usize) -> Cache<String, u32> {
    Cache::new("prop", capacity, StorageMode::Strong)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // For any sequence of operations, size never exceeds capacity.
    #[test]
    fn prop_capacity_enforcement(
        capacity in 1usize..8,
        ops in prop::collection::vec(cache_op_strategy(), 1..200)
    ) {
        let cache = new_cache(capacity);

        for op in ops {
            match op {
                CacheOp::Put { key, value } => { cache.put(key, value); }
                CacheOp::Get { key } => { cache.get(&key); }
                CacheOp::Remove { key } => { cache.remove(&key); }
            }
            prop_assert!(
                cache.len() <= capacity,
                "Cache size {} exceeds capacity {}",
                cache.len(),
                capacity
            );
        }
    }

    // Inserting capacity + 1 distinct keys evicts exactly the first one.
    #[test]
    fn prop_lru_eviction_order(keys in unique_keys(2, 12)) {
        let capacity = keys.len() - 1;
        let cache = new_cache(capacity);

        for (i, key) in keys.iter().enumerate() {
            cache.put(key.clone(), i as u32);
        }

        prop_assert_eq!(cache.len(), capacity);
        prop_assert!(cache.get(&keys[0]).is_none(), "Oldest key '{}' should be evicted", keys[0]);
        for key in keys.iter().skip(1) {
            prop_assert!(cache.get(key).is_some(), "Key '{}' should still exist", key);
        }
    }

    // A key read just before an overflowing insert survives it.
    #[test]
    fn prop_lru_access_tracking(
        keys in unique_keys(4, 10),
        access_index in 0usize..100
    ) {
        let (new_key, initial) = keys.split_last().unwrap();
        let capacity = initial.len();
        let cache = new_cache(capacity);

        for key in initial {
            cache.put(key.clone(), 0);
        }

        let accessed = &initial[access_index % capacity];
        cache.get(accessed);
        cache.put(new_key.clone(), 1);

        prop_assert!(cache.contains(accessed), "Accessed key '{}' was evicted", accessed);
        prop_assert!(cache.contains(new_key));

        let expected_victim = if accessed == &initial[0] { &initial[1] } else { &initial[0] };
        prop_assert!(!cache.contains(expected_victim), "Key '{}' should be evicted", expected_victim);
    }

    // Removing an absent key changes nothing.
    #[test]
    fn prop_remove_absent_is_noop(keys in unique_keys(2, 10)) {
        let (absent, present) = keys.split_last().unwrap();
        let cache = new_cache(present.len());
        for key in present {
            cache.put(key.clone(), 0);
        }

        prop_assert!(cache.remove(absent).is_none());
        prop_assert_eq!(cache.len(), present.len());

        let resident: HashSet<&String> = present.iter().filter(|k| cache.contains(k)).collect();
        prop_assert_eq!(resident.len(), present.len());
    }

    // Shedding keeps only the most recently inserted entries.
    #[test]
    fn prop_shed_keeps_newest(keys in unique_keys(1, 20), retain_percent in 0u8..=100) {
        let cache = new_cache(keys.len());
        for key in &keys {
            cache.put(key.clone(), 0);
        }

        let target = keys.len() * usize::from(retain_percent) / 100;
        let shed = cache.shed(retain_percent);

        prop_assert_eq!(shed, keys.len() - target);
        prop_assert_eq!(cache.len(), target);
        for key in keys.iter().rev().take(target) {
            prop_assert!(cache.contains(key));
        }
    }
}
