use core::fmt::Debug;
use core::hash::BuildHasher;
use core::hash::Hash;
use core::ops::Index;

use crate::DefaultHashBuilder;
use crate::error::InsertError;
use crate::hash_table::DEFAULT_CAPACITY;
use crate::hash_table::HashTable;
use crate::hash_table::InsertPolicy;

/// A hash map implemented using the backward-shift `HashTable` as the
/// underlying storage.
///
/// `HashMap<K, V, S>` stores key-value pairs where keys implement `Hash + Eq`
/// and uses a hasher builder `S`, fixed at construction, to hash keys.
///
/// Unlike `std::collections::HashMap`, inserting an existing key does not
/// replace its value: [`insert`](Self::insert) rejects it, and
/// [`insert_multi`](Self::insert_multi) stores a second entry beside it.
///
/// # Maps with repeated keys
///
/// Lookups ([`get`](Self::get), [`element`](Self::element), indexing) on a
/// key stored more than once return one unspecified entry. `Extend` and
/// `FromIterator` go through [`insert`](Self::insert), so they keep the first
/// pair for each key and never create repeats. Equality compares contents
/// as a multiset of `(key, value)` pairs: two maps are equal when every
/// pair occurs the same number of times in both.
///
/// # Performance Characteristics
///
/// - **Memory**: one slot of `(K, V)` plus an enum tag per unit of capacity.
/// - **Growth**: capacity doubles (to at least 32) once an insertion finds
///   the map 80% full. Removal never shrinks it.
#[derive(Clone)]
pub struct HashMap<K, V, S = DefaultHashBuilder> {
    table: HashTable<(K, V)>,
    hash_builder: S,
}

impl<K, V, S> Debug for HashMap<K, V, S>
where
    K: Debug,
    V: Debug,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let mut map = f.debug_map();
        for (k, v) in self.iter() {
            map.entry(k, v);
        }
        map.finish()
    }
}

impl<K, V, S> HashMap<K, V, S> {
    /// Returns the number of entries in the map.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # #[cfg(any(feature = "std", feature = "foldhash"))]
    /// # {
    /// use shift_hash::HashMap;
    ///
    /// let mut map: HashMap<i32, &str> = HashMap::new();
    /// assert_eq!(map.len(), 0);
    /// map.insert(1, "a");
    /// assert_eq!(map.len(), 1);
    /// # }
    /// ```
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Returns `true` if the map contains no entries.
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Returns the number of slots in the map.
    ///
    /// The map grows before it is completely full, so this is an upper bound
    /// on how many entries fit without growing.
    pub fn capacity(&self) -> usize {
        self.table.capacity()
    }

    /// Removes all entries from the map.
    ///
    /// This operation preserves the map's capacity.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # #[cfg(any(feature = "std", feature = "foldhash"))]
    /// # {
    /// use shift_hash::HashMap;
    ///
    /// let mut map: HashMap<i32, &str> = HashMap::with_capacity(8);
    /// map.insert(1, "a");
    /// map.clear();
    /// assert!(map.is_empty());
    /// assert_eq!(map.capacity(), 8);
    /// # }
    /// ```
    pub fn clear(&mut self) {
        self.table.clear();
    }

    /// Returns a reference to the map's hasher builder.
    pub fn hasher(&self) -> &S {
        &self.hash_builder
    }

    /// Returns an iterator over the key-value pairs of the map.
    ///
    /// The iterator yields `(&K, &V)` pairs in an arbitrary order.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            inner: self.table.iter(),
        }
    }

    /// Returns an iterator over the key-value pairs of the map, with mutable
    /// references to the values.
    pub fn iter_mut(&mut self) -> IterMut<'_, K, V> {
        IterMut {
            inner: self.table.iter_mut(),
        }
    }

    /// Returns an iterator over the keys of the map.
    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys {
            inner: self.table.iter(),
        }
    }

    /// Returns an iterator over the values of the map.
    pub fn values(&self) -> Values<'_, K, V> {
        Values {
            inner: self.table.iter(),
        }
    }

    /// Returns an iterator over mutable references to the values of the map.
    pub fn values_mut(&mut self) -> ValuesMut<'_, K, V> {
        ValuesMut {
            inner: self.table.iter_mut(),
        }
    }

    /// Removes and yields every entry, leaving the map empty with its
    /// capacity unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # #[cfg(any(feature = "std", feature = "foldhash"))]
    /// # {
    /// use shift_hash::HashMap;
    ///
    /// let mut map: HashMap<i32, &str> = HashMap::new();
    /// map.insert(1, "a");
    /// map.insert(2, "b");
    ///
    /// let mut drained: Vec<_> = map.drain().collect();
    /// drained.sort();
    /// assert_eq!(drained, [(1, "a"), (2, "b")]);
    /// assert!(map.is_empty());
    /// # }
    /// ```
    pub fn drain(&mut self) -> Drain<'_, K, V> {
        Drain {
            inner: self.table.drain(),
        }
    }
}

impl<K, V, S> HashMap<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    /// Creates an empty map with the default capacity and the given hasher
    /// builder.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use core::hash::BuildHasher;
    /// # use siphasher::sip::SipHasher;
    /// #
    /// # use shift_hash::HashMap;
    /// #
    /// # struct SimpleHasher;
    /// # impl BuildHasher for SimpleHasher {
    /// #     type Hasher = SipHasher;
    /// #
    /// #     fn build_hasher(&self) -> Self::Hasher {
    /// #         SipHasher::new()
    /// #     }
    /// # }
    /// #
    /// let map: HashMap<i32, String, _> = HashMap::with_hasher(SimpleHasher);
    /// assert!(map.is_empty());
    /// ```
    pub fn with_hasher(hash_builder: S) -> Self {
        Self::with_capacity_and_hasher(DEFAULT_CAPACITY, hash_builder)
    }

    /// Creates an empty map with exactly `capacity` slots and the given
    /// hasher builder.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use core::hash::BuildHasher;
    /// # use siphasher::sip::SipHasher;
    /// #
    /// # use shift_hash::HashMap;
    /// #
    /// # struct SimpleHasher;
    /// # impl BuildHasher for SimpleHasher {
    /// #     type Hasher = SipHasher;
    /// #
    /// #     fn build_hasher(&self) -> Self::Hasher {
    /// #         SipHasher::new()
    /// #     }
    /// # }
    /// #
    /// let map: HashMap<i32, String, _> = HashMap::with_capacity_and_hasher(100, SimpleHasher);
    /// assert_eq!(map.capacity(), 100);
    /// ```
    #[track_caller]
    pub fn with_capacity_and_hasher(capacity: usize, hash_builder: S) -> Self {
        Self {
            table: HashTable::with_capacity(capacity),
            hash_builder,
        }
    }

    /// Doubles the capacity of the map (to at least 32 slots).
    ///
    /// Useful after [`try_insert`](Self::try_insert) reports a full map under
    /// a policy without automatic growth.
    pub fn grow(&mut self) {
        let hash_builder = &self.hash_builder;
        self.table.grow(|(k, _)| hash_builder.hash_one(k));
    }

    /// Inserts a key-value pair if the key is not already present.
    ///
    /// Returns `true` if the pair was inserted, `false` if an equal key was
    /// already in the map (the map is left unchanged and the pair is
    /// dropped).
    ///
    /// # Examples
    ///
    /// ```rust
    /// # #[cfg(any(feature = "std", feature = "foldhash"))]
    /// # {
    /// use shift_hash::HashMap;
    ///
    /// let mut map: HashMap<_, _> = HashMap::new();
    /// assert!(map.insert(37, "a"));
    /// assert!(!map.insert(37, "b"));
    /// assert_eq!(map.get(&37), Some(&"a"));
    /// # }
    /// ```
    pub fn insert(&mut self, key: K, value: V) -> bool {
        self.try_insert(key, value, InsertPolicy::DISTINCT).is_ok()
    }

    /// Inserts a key-value pair even if the key is already present.
    ///
    /// Equal keys are stored as separate entries. Lookups then return an
    /// unspecified one of them, and each removal removes exactly one.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # #[cfg(any(feature = "std", feature = "foldhash"))]
    /// # {
    /// use shift_hash::HashMap;
    ///
    /// let mut map: HashMap<_, _> = HashMap::new();
    /// assert!(map.insert_multi(1, "a"));
    /// assert!(map.insert_multi(1, "b"));
    /// assert_eq!(map.len(), 2);
    ///
    /// assert!(map.remove(&1));
    /// assert_eq!(map.len(), 1);
    /// assert!(map.contains_key(&1));
    /// # }
    /// ```
    pub fn insert_multi(&mut self, key: K, value: V) -> bool {
        self.try_insert(key, value, InsertPolicy::MULTI).is_ok()
    }

    /// Inserts a key-value pair under an explicit [`InsertPolicy`].
    ///
    /// Returns `false` if the key was rejected as a duplicate, or if the map
    /// was full and the policy disables growth.
    pub fn insert_with_policy(&mut self, key: K, value: V, policy: InsertPolicy) -> bool {
        self.try_insert(key, value, policy).is_ok()
    }

    /// Inserts a key-value pair under an explicit [`InsertPolicy`], returning
    /// a mutable reference to the stored value.
    ///
    /// On failure the pair is handed back inside the error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # #[cfg(any(feature = "std", feature = "foldhash"))]
    /// # {
    /// use shift_hash::HashMap;
    /// use shift_hash::InsertError;
    /// use shift_hash::InsertPolicy;
    ///
    /// let fixed = InsertPolicy::DISTINCT.with_auto_grow(false);
    /// let mut map: HashMap<_, _> = HashMap::with_capacity(2);
    ///
    /// *map.try_insert(1, 10, fixed).unwrap() += 1;
    /// assert_eq!(map.get(&1), Some(&11));
    /// assert_eq!(map.try_insert(1, 0, fixed), Err(InsertError::Duplicate((1, 0))));
    ///
    /// map.try_insert(2, 20, fixed).unwrap();
    /// assert_eq!(map.try_insert(3, 0, fixed), Err(InsertError::Full((3, 0))));
    /// # }
    /// ```
    pub fn try_insert(
        &mut self,
        key: K,
        value: V,
        policy: InsertPolicy,
    ) -> Result<&mut V, InsertError<(K, V)>> {
        let hash = self.hash_builder.hash_one(&key);
        let hash_builder = &self.hash_builder;
        match self.table.vacant_entry(
            hash,
            |(k, _)| k == &key,
            |(k, _)| hash_builder.hash_one(k),
            policy,
        ) {
            Ok(entry) => Ok(&mut entry.insert((key, value)).1),
            Err(rejection) => Err(rejection.with((key, value))),
        }
    }

    /// Returns a reference to the value corresponding to the key.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # #[cfg(any(feature = "std", feature = "foldhash"))]
    /// # {
    /// use shift_hash::HashMap;
    ///
    /// let mut map: HashMap<_, _> = HashMap::new();
    /// map.insert(1, "a");
    /// assert_eq!(map.get(&1), Some(&"a"));
    /// assert_eq!(map.get(&2), None);
    /// # }
    /// ```
    pub fn get(&self, key: &K) -> Option<&V> {
        let hash = self.hash_builder.hash_one(key);
        self.table.find(hash, |(k, _)| k == key).map(|(_, v)| v)
    }

    /// Returns the stored key and its value.
    pub fn get_key_value(&self, key: &K) -> Option<(&K, &V)> {
        let hash = self.hash_builder.hash_one(key);
        self.table.find(hash, |(k, _)| k == key).map(|(k, v)| (k, v))
    }

    /// Returns a mutable reference to the value corresponding to the key.
    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        let hash = self.hash_builder.hash_one(key);
        self.table.find_mut(hash, |(k, _)| k == key).map(|(_, v)| v)
    }

    /// Returns `true` if the map contains a value for the specified key.
    pub fn contains_key(&self, key: &K) -> bool {
        self.get(key).is_some()
    }

    /// Returns the value for a key the caller knows to be present.
    ///
    /// # Panics
    ///
    /// Panics if the key is not in the map.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # #[cfg(any(feature = "std", feature = "foldhash"))]
    /// # {
    /// use shift_hash::HashMap;
    ///
    /// let mut map: HashMap<_, _> = HashMap::new();
    /// map.insert("x", 3);
    /// assert_eq!(*map.element(&"x"), 3);
    /// # }
    /// ```
    #[track_caller]
    pub fn element(&self, key: &K) -> &V {
        let hash = self.hash_builder.hash_one(key);
        &self.table.element(hash, |(k, _)| k == key).1
    }

    /// Mutable counterpart of [`element`](Self::element).
    ///
    /// # Panics
    ///
    /// Panics if the key is not in the map.
    #[track_caller]
    pub fn element_mut(&mut self, key: &K) -> &mut V {
        let hash = self.hash_builder.hash_one(key);
        &mut self.table.element_mut(hash, |(k, _)| k == key).1
    }

    /// Removes a key from the map.
    ///
    /// Returns `true` if an entry was removed. If the key was inserted more
    /// than once, exactly one of its entries is removed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # #[cfg(any(feature = "std", feature = "foldhash"))]
    /// # {
    /// use shift_hash::HashMap;
    ///
    /// let mut map: HashMap<_, _> = HashMap::new();
    /// map.insert(1, "a");
    /// assert!(map.remove(&1));
    /// assert!(!map.remove(&1));
    /// # }
    /// ```
    pub fn remove(&mut self, key: &K) -> bool {
        self.remove_entry(key).is_some()
    }

    /// Removes a key from the map, returning its value.
    pub fn take(&mut self, key: &K) -> Option<V> {
        self.remove_entry(key).map(|(_, v)| v)
    }

    /// Removes a key from the map, returning the stored key and value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # #[cfg(any(feature = "std", feature = "foldhash"))]
    /// # {
    /// use shift_hash::HashMap;
    ///
    /// let mut map: HashMap<_, _> = HashMap::new();
    /// map.insert(1, "a");
    /// assert_eq!(map.remove_entry(&1), Some((1, "a")));
    /// assert_eq!(map.remove_entry(&1), None);
    /// # }
    /// ```
    pub fn remove_entry(&mut self, key: &K) -> Option<(K, V)> {
        let hash = self.hash_builder.hash_one(key);
        let hash_builder = &self.hash_builder;
        self.table.remove(
            hash,
            |(k, _)| k == key,
            |(k, _)| hash_builder.hash_one(k),
        )
    }

    /// Returns the probe-length histogram of the underlying table.
    #[cfg(any(test, feature = "stats"))]
    pub fn probe_histogram(&self) -> crate::stats::ProbeHistogram {
        self.table
            .probe_histogram(|(k, _)| self.hash_builder.hash_one(k))
    }

    /// Returns statistics about the underlying table.
    #[cfg(any(test, feature = "stats"))]
    pub fn debug_stats(&self) -> crate::stats::DebugStats {
        self.table.debug_stats(|(k, _)| self.hash_builder.hash_one(k))
    }
}

impl<K, V, S> HashMap<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher + Default,
{
    /// Creates an empty map with the default capacity and the default hasher
    /// builder.
    pub fn new() -> Self {
        Self::with_hasher(S::default())
    }

    /// Creates an empty map with exactly `capacity` slots and the default
    /// hasher builder.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    #[track_caller]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_hasher(capacity, S::default())
    }
}

impl<K, V, S> Default for HashMap<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher + Default,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, S> PartialEq for HashMap<K, V, S>
where
    K: Hash + Eq,
    V: PartialEq,
    S: BuildHasher,
{
    fn eq(&self, other: &Self) -> bool {
        if self.len() != other.len() {
            return false;
        }
        // Equal lengths plus equal per-pair counts for every pair of `self`
        // leave no room for extra pairs in `other`.
        self.iter().all(|(k, v)| {
            let count_in = |map: &Self| {
                let hash = map.hash_builder.hash_one(k);
                map.table.count(hash, |(key, value)| key == k && value == v)
            };
            count_in(self) == count_in(other)
        })
    }
}

impl<K, V, S> Eq for HashMap<K, V, S>
where
    K: Hash + Eq,
    V: Eq,
    S: BuildHasher,
{
}

impl<K, V, S> Index<&K> for HashMap<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    type Output = V;

    /// Returns the value for a key the caller knows to be present.
    ///
    /// # Panics
    ///
    /// Panics if the key is not in the map.
    #[track_caller]
    fn index(&self, key: &K) -> &V {
        self.element(key)
    }
}

impl<K, V, S> Extend<(K, V)> for HashMap<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    /// Inserts every pair whose key is not already present.
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.insert(k, v);
        }
    }
}

impl<K, V, S> FromIterator<(K, V)> for HashMap<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher + Default,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = HashMap::new();
        map.extend(iter);
        map
    }
}

impl<K, V, S> IntoIterator for HashMap<K, V, S> {
    type IntoIter = IntoIter<K, V>;
    type Item = (K, V);

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            inner: self.table.into_iter(),
        }
    }
}

impl<'a, K, V, S> IntoIterator for &'a HashMap<K, V, S> {
    type IntoIter = Iter<'a, K, V>;
    type Item = (&'a K, &'a V);

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, K, V, S> IntoIterator for &'a mut HashMap<K, V, S> {
    type IntoIter = IterMut<'a, K, V>;
    type Item = (&'a K, &'a mut V);

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

/// An iterator over the entries of a `HashMap`.
pub struct Iter<'a, K, V> {
    inner: crate::hash_table::Iter<'a, (K, V)>,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(k, v)| (k, v))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}

/// An iterator over the entries of a `HashMap` with mutable values.
pub struct IterMut<'a, K, V> {
    inner: crate::hash_table::IterMut<'a, (K, V)>,
}

impl<'a, K, V> Iterator for IterMut<'a, K, V> {
    type Item = (&'a K, &'a mut V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(k, v)| (&*k, v))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> ExactSizeIterator for IterMut<'_, K, V> {}

/// An iterator over the keys of a `HashMap`.
pub struct Keys<'a, K, V> {
    inner: crate::hash_table::Iter<'a, (K, V)>,
}

impl<'a, K, V> Iterator for Keys<'a, K, V> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(k, _)| k)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

/// An iterator over the values of a `HashMap`.
pub struct Values<'a, K, V> {
    inner: crate::hash_table::Iter<'a, (K, V)>,
}

impl<'a, K, V> Iterator for Values<'a, K, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(_, v)| v)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

/// A mutable iterator over the values of a `HashMap`.
pub struct ValuesMut<'a, K, V> {
    inner: crate::hash_table::IterMut<'a, (K, V)>,
}

impl<'a, K, V> Iterator for ValuesMut<'a, K, V> {
    type Item = &'a mut V;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(_, v)| v)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

/// A draining iterator over the entries of a `HashMap`.
pub struct Drain<'a, K, V> {
    inner: crate::hash_table::Drain<'a, (K, V)>,
}

impl<K, V> Iterator for Drain<'_, K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

/// A consuming iterator over the entries of a `HashMap`.
pub struct IntoIter<K, V> {
    inner: crate::hash_table::IntoIter<(K, V)>,
}

impl<K, V> Iterator for IntoIter<K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}
