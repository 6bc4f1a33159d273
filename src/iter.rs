use std::hash::Hash;

use crate::chained_map::{ChainedMap, Entry};

/// Iterator over the entries of a [`ChainedMap`].
///
/// Walks buckets left to right and, within a bucket, entries in insertion
/// order, skipping empty buckets. The traversal is lazy, finite and visits
/// each stored entry exactly once. Because the iterator holds a shared
/// borrow of the map, no structural mutation can happen while it is alive.
#[derive(Debug, Clone)]
pub struct Iter<'a, K, V> {
    /// The borrowed bucket array being traversed.
    buckets: &'a [Vec<Entry<K, V>>],
    /// Index of the bucket the cursor is currently in.
    bucket: usize,
    /// Position within the current bucket's entry list.
    pos: usize,
}

impl<'a, K, V> Iter<'a, K, V> {
    /// Creates a cursor positioned before the first entry.
    pub(crate) fn new(buckets: &'a [Vec<Entry<K, V>>]) -> Self {
        Self { buckets, bucket: 0, pos: 0 }
    }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(bucket) = self.buckets.get(self.bucket) {
            if let Some(entry) = bucket.get(self.pos) {
                self.pos = self.pos.saturating_add(1);
                return Some((&entry.key, &entry.value));
            }
            // Current bucket exhausted; move on to the next non-empty one.
            self.bucket = self.bucket.saturating_add(1);
            self.pos = 0;
        }
        None
    }
}

impl<'a, K, V> IntoIterator for &'a ChainedMap<K, V>
where
    K: Eq + Hash,
{
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
