//! Randomized grow/shrink churn against a `std` `HashMap` oracle.
#![allow(clippy::arithmetic_side_effects)]

use std::collections::HashMap;

use chainmap::{ChainedMap, MIN_CAPACITY};
use rand::Rng;

#[test]
fn churn_preserves_entries_and_load_bounds() {
    let mut rng = rand::rng();
    let mut map: ChainedMap<u32, u32> = ChainedMap::new();
    let mut model: HashMap<u32, u32> = HashMap::new();

    for round in 0..10_000u32 {
        let key = rng.random_range(0..512);
        // Insert-heavy mix so the table climbs through several grows before
        // the removals drag it back down.
        if rng.random_range(0..100) < 60 {
            let inserted = map.insert(key, round);
            assert_eq!(inserted, !model.contains_key(&key));
            model.entry(key).or_insert(round);
        } else {
            assert_eq!(map.remove(&key), model.remove(&key).is_some());
        }

        assert_eq!(map.len(), model.len());
        assert!(map.capacity().is_power_of_two());
        assert!(map.capacity() >= MIN_CAPACITY);
        assert!(map.load_factor() <= 0.75);
        if map.capacity() > MIN_CAPACITY {
            assert!(map.load_factor() >= 0.25);
        }
    }

    for (key, value) in &model {
        assert_eq!(map.at(key), Ok(value));
    }
}
