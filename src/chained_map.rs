use std::{
    borrow::Borrow,
    collections::hash_map::DefaultHasher,
    hash::{Hash, Hasher},
    mem,
};

use crate::error::MapError;
use crate::iter::Iter;

/// Smallest bucket-array length a map ever holds; shrinking stops here.
pub const MIN_CAPACITY: usize = 16;

/// Load factor above which an insert doubles the bucket array.
const GROW_ABOVE: f64 = 0.75;

/// Load factor below which a removal halves the bucket array.
const SHRINK_BELOW: f64 = 0.25;

/// One stored key-value pair inside a bucket's collision list.
#[derive(Debug, Clone)]
pub(crate) struct Entry<K, V> {
    /// The key of the pair.
    pub(crate) key: K,
    /// The value bound to the key.
    pub(crate) value: V,
}

/// Direction handed to the resizer by `insert` and `remove`.
#[derive(Debug, Clone, Copy)]
enum Growth {
    /// Double the bucket array.
    Up,
    /// Halve the bucket array, clamped at [`MIN_CAPACITY`].
    Down,
}

/// A hash map built on separate chaining with dynamic resizing.
///
/// Keys are distributed over a power-of-two number of buckets via
/// `hash & (capacity - 1)`; colliding entries share a bucket's ordered list.
/// The bucket array doubles once the load factor exceeds 0.75 and halves once
/// it drops below 0.25, never below a floor of 16 buckets, so lookups stay
/// amortized O(1) across any sequence of operations.
///
/// Two duplicate-key policies coexist and are deliberately distinct:
/// [`insert`](Self::insert) never overwrites an existing binding, while
/// [`set`](Self::set) (used by [`from_keys_values`](Self::from_keys_values),
/// `Extend` and `FromIterator`) always does.
///
/// Note: this implementation is not thread-safe; concurrent access must be
/// serialized by the caller.
#[derive(Debug, Clone)]
pub struct ChainedMap<K, V> {
    /// The bucket array; each bucket is the ordered collision list of the
    /// entries hashing to its index.
    buckets: Vec<Vec<Entry<K, V>>>,
    /// Current number of entries across all buckets.
    size: usize,
}

impl<K, V> Default for ChainedMap<K, V>
where
    K: Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> Extend<(K, V)> for ChainedMap<K, V>
where
    K: Eq + Hash,
{
    /// Extends the map with overwrite semantics: a later pair for an already
    /// present key replaces the stored value, as with [`ChainedMap::set`].
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (k, v) in iter {
            self.set(k, v);
        }
    }
}

impl<K, V> FromIterator<(K, V)> for ChainedMap<K, V>
where
    K: Eq + Hash,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}

impl<K, V> ChainedMap<K, V>
where
    K: Eq + Hash,
{
    /// Creates an empty map with the default capacity of 16 buckets.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(MIN_CAPACITY)
    }

    /// Creates an empty map with at least `capacity` buckets.
    ///
    /// The actual capacity is rounded up to a power of two and floored at
    /// [`MIN_CAPACITY`].
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(MIN_CAPACITY).next_power_of_two();
        let mut buckets = Vec::with_capacity(capacity);
        buckets.resize_with(capacity, Vec::new);
        Self { buckets, size: 0 }
    }

    /// Builds a map from parallel key and value sequences.
    ///
    /// `values[i]` becomes the value of `keys[i]`. Unlike
    /// [`insert`](Self::insert), a duplicate key keeps the *last* value seen,
    /// mirroring direct index assignment.
    ///
    /// # Errors
    ///
    /// Returns [`MapError::LengthMismatch`] if the sequences differ in
    /// length; no partial map is produced.
    pub fn from_keys_values(keys: Vec<K>, values: Vec<V>) -> Result<Self, MapError> {
        if keys.len() != values.len() {
            return Err(MapError::LengthMismatch { keys: keys.len(), values: values.len() });
        }
        let mut map = Self::new();
        for (key, value) in keys.into_iter().zip(values) {
            map.set(key, value);
        }
        Ok(map)
    }

    /// Computes the hash for a key.
    #[allow(clippy::unused_self)]
    fn hash_of<Q: ?Sized + Hash>(&self, key: &Q) -> u64 {
        let mut hasher = DefaultHasher::new();
        key.hash(&mut hasher);
        hasher.finish()
    }

    /// Maps a key to its bucket index under the current capacity.
    #[allow(clippy::cast_possible_truncation)]
    fn slot_of<Q: ?Sized + Hash>(&self, key: &Q) -> usize {
        let hash = self.hash_of(key);
        (hash as usize) & (self.buckets.len().saturating_sub(1))
    }

    /// Locates a key, returning its `(bucket index, in-bucket position)`.
    fn lookup<Q>(&self, key: &Q) -> Option<(usize, usize)>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let slot = self.slot_of(key);
        let bucket = self.buckets.get(slot)?;
        let pos = bucket.iter().position(|entry| entry.key.borrow() == key)?;
        Some((slot, pos))
    }

    /// Inserts a key-value pair, refusing to overwrite.
    ///
    /// Returns `true` and stores the pair if `key` was absent; returns
    /// `false` and leaves the map unchanged (the existing value is kept) if
    /// `key` was already present. A successful insert that pushes the load
    /// factor above 0.75 grows the bucket array.
    pub fn insert(&mut self, key: K, value: V) -> bool {
        if self.contains_key(&key) {
            return false;
        }
        let slot = self.slot_of(&key);
        if let Some(bucket) = self.buckets.get_mut(slot) {
            bucket.push(Entry { key, value });
            self.size = self.size.saturating_add(1);
            if self.load_factor() > GROW_ABOVE {
                self.resize(Growth::Up);
            }
            return true;
        }
        false // Slot is always in range; kept so the function stays total.
    }

    /// Binds `key` to `value`, overwriting any existing binding.
    ///
    /// Returns the displaced value if `key` was already present. This is the
    /// assignment-style counterpart of [`insert`](Self::insert) and backs
    /// [`from_keys_values`](Self::from_keys_values), `Extend` and
    /// `FromIterator`.
    pub fn set(&mut self, key: K, value: V) -> Option<V> {
        if let Some((slot, pos)) = self.lookup(&key) {
            if let Some(entry) = self.buckets.get_mut(slot).and_then(|b| b.get_mut(pos)) {
                return Some(mem::replace(&mut entry.value, value));
            }
        }
        self.insert(key, value);
        None
    }

    /// Retrieves the value bound to a key, if any. Never mutates the map.
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let (slot, pos) = self.lookup(key)?;
        self.buckets.get(slot)?.get(pos).map(|entry| &entry.value)
    }

    /// Retrieves a mutable reference to the value bound to a key, if any.
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let (slot, pos) = self.lookup(key)?;
        self.buckets.get_mut(slot)?.get_mut(pos).map(|entry| &mut entry.value)
    }

    /// Returns the value bound to `key`.
    ///
    /// # Errors
    ///
    /// Returns [`MapError::KeyNotFound`] if no entry exists. Callers that
    /// expect absence should probe with [`contains_key`](Self::contains_key)
    /// or [`get`](Self::get) instead.
    pub fn at<Q>(&self, key: &Q) -> Result<&V, MapError>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.get(key).ok_or(MapError::KeyNotFound)
    }

    /// Reports whether the map holds an entry for `key`.
    ///
    /// Absence is a normal outcome, not an error; this never mutates state.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.lookup(key).is_some()
    }

    /// Removes the entry for `key`, if present.
    ///
    /// Returns `true` if an entry was removed. A removal that drops the load
    /// factor below 0.25 shrinks the bucket array, clamped at
    /// [`MIN_CAPACITY`].
    pub fn remove<Q>(&mut self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let Some((slot, pos)) = self.lookup(key) else {
            return false;
        };
        if let Some(bucket) = self.buckets.get_mut(slot) {
            if pos < bucket.len() {
                bucket.remove(pos);
                self.size = self.size.saturating_sub(1);
                if self.load_factor() < SHRINK_BELOW {
                    self.resize(Growth::Down);
                }
                return true;
            }
        }
        false
    }

    /// Returns the index of the bucket holding `key`.
    ///
    /// # Errors
    ///
    /// Returns [`MapError::KeyNotFound`] if the key has no entry; bucket
    /// introspection is deliberately tied to membership.
    pub fn bucket_index<Q>(&self, key: &Q) -> Result<usize, MapError>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.lookup(key).map(|(slot, _)| slot).ok_or(MapError::KeyNotFound)
    }

    /// Returns the number of entries colliding in `key`'s bucket.
    ///
    /// # Errors
    ///
    /// Returns [`MapError::KeyNotFound`] if `key` itself is absent, even
    /// though its target bucket may hold other entries.
    pub fn bucket_size<Q>(&self, key: &Q) -> Result<usize, MapError>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let slot = self.bucket_index(key)?;
        Ok(self.buckets.get(slot).map_or(0, Vec::len))
    }

    /// Returns a mutable reference to the value of `key`, inserting the
    /// value type's default first if the key is absent.
    ///
    /// The implicit insert can grow the bucket array as a side effect. There
    /// is no read-only counterpart for an absent key; use
    /// [`at`](Self::at) for failing reads.
    #[allow(clippy::indexing_slicing)]
    pub fn get_or_insert_default(&mut self, key: K) -> &mut V
    where
        K: Clone,
        V: Default,
    {
        if !self.contains_key(&key) {
            self.insert(key.clone(), V::default());
        }
        let (slot, pos) = match self.lookup(&key) {
            Some(position) => position,
            None => {
                // The insert above guarantees presence; append directly
                // rather than panicking so the function stays total.
                let slot = self.slot_of(&key);
                self.buckets[slot].push(Entry { key, value: V::default() });
                self.size = self.size.saturating_add(1);
                (slot, self.buckets[slot].len().saturating_sub(1))
            }
        };
        &mut self.buckets[slot][pos].value
    }

    /// Returns the number of entries in the map.
    #[must_use]
    pub fn len(&self) -> usize {
        self.size
    }

    /// Returns `true` if the map holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns the current length of the bucket array.
    ///
    /// Always a power of two, never below [`MIN_CAPACITY`].
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    /// Returns the current load factor, `len() / capacity()`.
    ///
    /// Kept within `(0.25, 0.75)` by the resizer, except transiently inside
    /// a single insert or removal and at the minimum capacity floor.
    #[must_use]
    #[allow(clippy::arithmetic_side_effects, clippy::cast_precision_loss)]
    pub fn load_factor(&self) -> f64 {
        self.size as f64 / self.buckets.len() as f64
    }

    /// Empties every bucket, leaving the capacity unchanged.
    ///
    /// No shrink is triggered; a cleared map keeps its bucket array.
    pub fn clear(&mut self) {
        for bucket in &mut self.buckets {
            bucket.clear();
        }
        self.size = 0;
    }

    /// Returns an iterator over the entries in bucket-major order.
    ///
    /// Within a bucket, entries come out in insertion order; across buckets
    /// the order follows bucket indices and carries no meaning. The iterator
    /// borrows the map, so structural mutation while it is alive is rejected
    /// at compile time.
    #[must_use]
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter::new(&self.buckets)
    }

    /// Rebuilds the bucket array one power of two up or down and rehashes
    /// every entry against the new capacity.
    ///
    /// Shrinking clamps at [`MIN_CAPACITY`]; a shrink request at the floor is
    /// a no-op. Re-insertion goes through the normal insert path so each
    /// key's bucket is recomputed under the new mask.
    #[allow(clippy::arithmetic_side_effects)]
    fn resize(&mut self, direction: Growth) {
        let new_capacity = match direction {
            Growth::Up => self.buckets.len().saturating_mul(2),
            Growth::Down => (self.buckets.len() / 2).max(MIN_CAPACITY),
        };
        if new_capacity == self.buckets.len() {
            return;
        }
        debug_assert!(
            new_capacity.is_power_of_two() && new_capacity >= MIN_CAPACITY,
            "bucket array length must stay a power of two above the floor",
        );
        let mut fresh = Vec::with_capacity(new_capacity);
        fresh.resize_with(new_capacity, Vec::new);
        let old = mem::replace(&mut self.buckets, fresh);
        self.size = 0;
        for bucket in old {
            for entry in bucket {
                self.insert(entry.key, entry.value);
            }
        }
    }
}

impl<K, V> PartialEq for ChainedMap<K, V>
where
    K: Eq + Hash,
    V: PartialEq,
{
    /// Two maps are equal iff they have the same size and every entry of one
    /// has an equal-valued entry in the other. Bucket placement, capacity
    /// and insertion order are irrelevant.
    fn eq(&self, other: &Self) -> bool {
        self.size == other.size && self.iter().all(|(key, value)| other.get(key) == Some(value))
    }
}

impl<K, V> Eq for ChainedMap<K, V>
where
    K: Eq + Hash,
    V: Eq,
{
}
