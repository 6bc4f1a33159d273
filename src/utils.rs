//! Utility functions and traits for [`ChainedMap`]

use crate::ChainedMap;
use std::hash::Hash;

/// Extension trait providing additional convenience accessors for the map
pub trait MapExtensions<K, V> {
    /// Returns the keys of the map as a Vec, in traversal order
    fn keys(&self) -> Vec<K>;

    /// Returns the values of the map as a Vec, in traversal order
    fn values(&self) -> Vec<V>;
}

impl<K, V> MapExtensions<K, V> for ChainedMap<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    fn keys(&self) -> Vec<K> {
        self.iter().map(|(k, _)| k.clone()).collect()
    }

    fn values(&self) -> Vec<V> {
        self.iter().map(|(_, v)| v.clone()).collect()
    }
}
