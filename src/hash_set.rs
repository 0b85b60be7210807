use core::fmt::Debug;
use core::hash::BuildHasher;
use core::hash::Hash;

use crate::DefaultHashBuilder;
use crate::error::InsertError;
use crate::hash_table::DEFAULT_CAPACITY;
use crate::hash_table::HashTable;
use crate::hash_table::InsertPolicy;

/// A hash set implemented using the backward-shift `HashTable` as the
/// underlying storage.
///
/// `HashSet<T, S>` stores values of type `T` where `T` implements `Hash + Eq`
/// and hashes them with a hasher builder `S` fixed at construction.
///
/// [`insert_multi`](Self::insert_multi) lets the set hold several equal
/// values, which turns it into a multiset. Equality then compares how many
/// copies of each value the two sets hold. The subset tests look at
/// membership only, and the set-operation iterators yield each stored copy
/// separately.
///
/// # Performance Characteristics
///
/// - **Memory**: one slot of `T` plus an enum tag per unit of capacity.
#[derive(Clone)]
pub struct HashSet<T, S = DefaultHashBuilder> {
    table: HashTable<T>,
    hash_builder: S,
}

impl<T, S> PartialEq for HashSet<T, S>
where
    T: Hash + Eq,
    S: BuildHasher,
{
    fn eq(&self, other: &Self) -> bool {
        if self.len() != other.len() {
            return false;
        }
        self.iter().all(|v| other.count(v) == self.count(v))
    }
}

impl<T, S> Eq for HashSet<T, S>
where
    T: Hash + Eq,
    S: BuildHasher,
{
}

impl<T, S> Debug for HashSet<T, S>
where
    T: Debug,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T, S> HashSet<T, S> {
    /// Returns the number of elements in the set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # #[cfg(any(feature = "std", feature = "foldhash"))]
    /// # {
    /// use shift_hash::HashSet;
    ///
    /// let mut set: HashSet<i32> = HashSet::new();
    /// assert_eq!(set.len(), 0);
    /// set.insert(1);
    /// assert_eq!(set.len(), 1);
    /// # }
    /// ```
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Returns `true` if the set contains no elements.
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Returns the number of slots in the set.
    pub fn capacity(&self) -> usize {
        self.table.capacity()
    }

    /// Removes all elements, keeping the capacity.
    pub fn clear(&mut self) {
        self.table.clear();
    }

    /// Returns a reference to the set's hasher builder.
    pub fn hasher(&self) -> &S {
        &self.hash_builder
    }

    /// Returns an iterator over the elements of the set, in arbitrary order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            inner: self.table.iter(),
        }
    }

    /// Removes and yields every element, leaving the set empty with its
    /// capacity unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # #[cfg(any(feature = "std", feature = "foldhash"))]
    /// # {
    /// use shift_hash::HashSet;
    ///
    /// let mut set: HashSet<i32> = HashSet::new();
    /// set.insert(1);
    /// set.insert(2);
    ///
    /// let mut drained: Vec<_> = set.drain().collect();
    /// drained.sort();
    /// assert_eq!(drained, [1, 2]);
    /// assert!(set.is_empty());
    /// # }
    /// ```
    pub fn drain(&mut self) -> Drain<'_, T> {
        Drain {
            inner: self.table.drain(),
        }
    }
}

impl<T, S> HashSet<T, S>
where
    T: Hash + Eq,
    S: BuildHasher,
{
    /// Creates an empty set with the default capacity and the given hasher
    /// builder.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # #[cfg(feature = "std")]
    /// # {
    /// use std::collections::hash_map::RandomState;
    ///
    /// use shift_hash::hash_set::HashSet;
    ///
    /// let set: HashSet<i32, _> = HashSet::with_hasher(RandomState::new());
    /// assert!(set.is_empty());
    /// # }
    /// ```
    pub fn with_hasher(hash_builder: S) -> Self {
        Self::with_capacity_and_hasher(DEFAULT_CAPACITY, hash_builder)
    }

    /// Creates an empty set with exactly `capacity` slots and the given
    /// hasher builder.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # #[cfg(feature = "std")]
    /// # {
    /// use std::collections::hash_map::RandomState;
    ///
    /// use shift_hash::hash_set::HashSet;
    ///
    /// let set: HashSet<i32, _> = HashSet::with_capacity_and_hasher(100, RandomState::new());
    /// assert_eq!(set.capacity(), 100);
    /// # }
    /// ```
    #[track_caller]
    pub fn with_capacity_and_hasher(capacity: usize, hash_builder: S) -> Self {
        Self {
            table: HashTable::with_capacity(capacity),
            hash_builder,
        }
    }

    /// Doubles the capacity of the set (to at least 32 slots).
    pub fn grow(&mut self) {
        let hash_builder = &self.hash_builder;
        self.table.grow(|v| hash_builder.hash_one(v));
    }

    /// Adds a value to the set.
    ///
    /// Returns `true` if the value was inserted, `false` if an equal value
    /// was already present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # #[cfg(any(feature = "std", feature = "foldhash"))]
    /// # {
    /// use shift_hash::HashSet;
    ///
    /// let mut set: HashSet<_> = HashSet::new();
    /// assert!(set.insert(2));
    /// assert!(!set.insert(2));
    /// assert_eq!(set.len(), 1);
    /// # }
    /// ```
    pub fn insert(&mut self, value: T) -> bool {
        self.try_insert(value, InsertPolicy::DISTINCT).is_ok()
    }

    /// Adds a value to the set even if an equal value is present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # #[cfg(any(feature = "std", feature = "foldhash"))]
    /// # {
    /// use shift_hash::HashSet;
    ///
    /// let mut set: HashSet<_> = HashSet::new();
    /// set.insert_multi("x");
    /// set.insert_multi("x");
    /// assert_eq!(set.len(), 2);
    /// assert!(set.remove(&"x"));
    /// assert!(set.contains(&"x"));
    /// # }
    /// ```
    pub fn insert_multi(&mut self, value: T) -> bool {
        self.try_insert(value, InsertPolicy::MULTI).is_ok()
    }

    /// Adds a value under an explicit [`InsertPolicy`].
    pub fn insert_with_policy(&mut self, value: T, policy: InsertPolicy) -> bool {
        self.try_insert(value, policy).is_ok()
    }

    /// Adds a value under an explicit [`InsertPolicy`], returning a reference
    /// to the stored value or handing the value back on failure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # #[cfg(any(feature = "std", feature = "foldhash"))]
    /// # {
    /// use shift_hash::HashSet;
    /// use shift_hash::InsertPolicy;
    ///
    /// let mut set: HashSet<_> = HashSet::with_capacity(1);
    /// let fixed = InsertPolicy::DISTINCT.with_auto_grow(false);
    /// assert_eq!(set.try_insert(1, fixed).copied(), Ok(1));
    ///
    /// let err = set.try_insert(2, fixed).unwrap_err();
    /// assert!(err.is_full());
    /// assert_eq!(err.into_inner(), 2);
    /// # }
    /// ```
    pub fn try_insert(&mut self, value: T, policy: InsertPolicy) -> Result<&T, InsertError<T>> {
        let hash = self.hash_builder.hash_one(&value);
        let hash_builder = &self.hash_builder;
        match self
            .table
            .vacant_entry(hash, |v| v == &value, |v| hash_builder.hash_one(v), policy)
        {
            Ok(entry) => Ok(entry.insert(value)),
            Err(rejection) => Err(rejection.with(value)),
        }
    }

    /// Returns `true` if the set contains a value equal to `value`.
    pub fn contains(&self, value: &T) -> bool {
        self.get(value).is_some()
    }

    /// Returns a reference to the stored value equal to `value`, if any.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # #[cfg(any(feature = "std", feature = "foldhash"))]
    /// # {
    /// use shift_hash::HashSet;
    ///
    /// let mut set: HashSet<_> = HashSet::new();
    /// set.insert(2);
    /// assert_eq!(set.get(&2), Some(&2));
    /// assert_eq!(set.get(&3), None);
    /// # }
    /// ```
    pub fn get(&self, value: &T) -> Option<&T> {
        let hash = self.hash_builder.hash_one(value);
        self.table.find(hash, |v| v == value)
    }

    /// Returns the stored value equal to `value`, which the caller knows to
    /// be present.
    ///
    /// # Panics
    ///
    /// Panics if no equal value is in the set.
    #[track_caller]
    pub fn element(&self, value: &T) -> &T {
        let hash = self.hash_builder.hash_one(value);
        self.table.element(hash, |v| v == value)
    }

    /// Removes a value from the set. Returns whether one was present.
    ///
    /// If several equal values are stored, exactly one of them is removed.
    pub fn remove(&mut self, value: &T) -> bool {
        self.take(value).is_some()
    }

    /// Removes and returns the stored value equal to `value`, if any.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # #[cfg(any(feature = "std", feature = "foldhash"))]
    /// # {
    /// use shift_hash::HashSet;
    ///
    /// let mut set: HashSet<_> = HashSet::new();
    /// set.insert(2);
    /// assert_eq!(set.take(&2), Some(2));
    /// assert_eq!(set.take(&2), None);
    /// # }
    /// ```
    pub fn take(&mut self, value: &T) -> Option<T> {
        let hash = self.hash_builder.hash_one(value);
        let hash_builder = &self.hash_builder;
        self.table
            .remove(hash, |v| v == value, |v| hash_builder.hash_one(v))
    }

    /// Returns `true` if `self` has no elements in common with `other`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # #[cfg(any(feature = "std", feature = "foldhash"))]
    /// # {
    /// use shift_hash::HashSet;
    ///
    /// let a: HashSet<i32> = [1, 2].into_iter().collect();
    /// let b: HashSet<i32> = [3, 4].into_iter().collect();
    /// assert!(a.is_disjoint(&b));
    /// # }
    /// ```
    pub fn is_disjoint(&self, other: &HashSet<T, S>) -> bool {
        if self.len() <= other.len() {
            self.iter().all(|v| !other.contains(v))
        } else {
            other.iter().all(|v| !self.contains(v))
        }
    }

    /// Returns the number of stored values equal to `value`.
    ///
    /// Always 0 or 1 unless [`insert_multi`](Self::insert_multi) was used.
    pub fn count(&self, value: &T) -> usize {
        let hash = self.hash_builder.hash_one(value);
        self.table.count(hash, |v| v == value)
    }

    /// Returns `true` if every element of `self` is also in `other`.
    ///
    /// This tests membership only: repeated values in `self` need just one
    /// equal value in `other`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # #[cfg(any(feature = "std", feature = "foldhash"))]
    /// # {
    /// use shift_hash::HashSet;
    ///
    /// let mut a: HashSet<i32> = HashSet::new();
    /// a.insert_multi(1);
    /// a.insert_multi(1);
    /// let b: HashSet<i32> = [1, 2].into_iter().collect();
    ///
    /// assert!(a.is_subset(&b));
    /// assert!(!b.is_subset(&a));
    /// # }
    /// ```
    pub fn is_subset(&self, other: &HashSet<T, S>) -> bool {
        self.iter().all(|v| other.contains(v))
    }

    /// Returns `true` if every element of `other` is also in `self`.
    ///
    /// Like [`is_subset`](Self::is_subset), this tests membership only.
    pub fn is_superset(&self, other: &HashSet<T, S>) -> bool {
        other.is_subset(self)
    }

    /// Returns an iterator over the elements of `self` followed by the
    /// elements of `other` that are not in `self`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # #[cfg(any(feature = "std", feature = "foldhash"))]
    /// # {
    /// use shift_hash::HashSet;
    ///
    /// let a: HashSet<i32> = [1, 2].into_iter().collect();
    /// let b: HashSet<i32> = [2, 3].into_iter().collect();
    ///
    /// let mut union: Vec<_> = a.union(&b).copied().collect();
    /// union.sort();
    /// assert_eq!(union, [1, 2, 3]);
    /// # }
    /// ```
    pub fn union<'a>(&'a self, other: &'a HashSet<T, S>) -> Union<'a, T, S> {
        Union {
            iter: self.iter(),
            rest: other.difference(self),
        }
    }

    /// Returns an iterator over the elements present in both sets.
    ///
    /// Iterates the smaller set and probes the larger one.
    pub fn intersection<'a>(&'a self, other: &'a HashSet<T, S>) -> Intersection<'a, T, S> {
        let (iter, other) = if self.len() <= other.len() {
            (self.iter(), other)
        } else {
            (other.iter(), self)
        };
        Intersection { iter, other }
    }

    /// Returns an iterator over the elements of `self` that are not in
    /// `other`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # #[cfg(any(feature = "std", feature = "foldhash"))]
    /// # {
    /// use shift_hash::HashSet;
    ///
    /// let a: HashSet<i32> = [1, 2, 3].into_iter().collect();
    /// let b: HashSet<i32> = [2, 3, 4].into_iter().collect();
    /// assert_eq!(a.difference(&b).collect::<Vec<_>>(), [&1]);
    /// # }
    /// ```
    pub fn difference<'a>(&'a self, other: &'a HashSet<T, S>) -> Difference<'a, T, S> {
        Difference {
            iter: self.iter(),
            other,
        }
    }

    /// Returns the probe-length histogram of the underlying table.
    #[cfg(any(test, feature = "stats"))]
    pub fn probe_histogram(&self) -> crate::stats::ProbeHistogram {
        self.table.probe_histogram(|v| self.hash_builder.hash_one(v))
    }

    /// Returns statistics about the underlying table.
    #[cfg(any(test, feature = "stats"))]
    pub fn debug_stats(&self) -> crate::stats::DebugStats {
        self.table.debug_stats(|v| self.hash_builder.hash_one(v))
    }
}

impl<T, S> HashSet<T, S>
where
    T: Hash + Eq,
    S: BuildHasher + Default,
{
    /// Creates an empty set with the default capacity and hasher builder.
    pub fn new() -> Self {
        Self::with_hasher(S::default())
    }

    /// Creates an empty set with exactly `capacity` slots.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    #[track_caller]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_hasher(capacity, S::default())
    }
}

impl<T, S> Default for HashSet<T, S>
where
    T: Hash + Eq,
    S: BuildHasher + Default,
{
    fn default() -> Self {
        Self::new()
    }
}

/// An iterator over the elements of a `HashSet`.
pub struct Iter<'a, T> {
    inner: crate::hash_table::Iter<'a, T>,
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

/// A draining iterator over the elements of a `HashSet`.
pub struct Drain<'a, T> {
    inner: crate::hash_table::Drain<'a, T>,
}

impl<T> Iterator for Drain<'_, T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

/// A consuming iterator over the elements of a `HashSet`.
pub struct IntoIter<T> {
    inner: crate::hash_table::IntoIter<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T, S> IntoIterator for HashSet<T, S> {
    type IntoIter = IntoIter<T>;
    type Item = T;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            inner: self.table.into_iter(),
        }
    }
}

impl<'a, T, S> IntoIterator for &'a HashSet<T, S> {
    type IntoIter = Iter<'a, T>;
    type Item = &'a T;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T, S> FromIterator<T> for HashSet<T, S>
where
    T: Hash + Eq,
    S: BuildHasher + Default,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = HashSet::new();
        set.extend(iter);
        set
    }
}

impl<T, S> Extend<T> for HashSet<T, S>
where
    T: Hash + Eq,
    S: BuildHasher,
{
    /// Adds every value not already present.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

/// An iterator over the union of two sets.
pub struct Union<'a, T, S> {
    iter: Iter<'a, T>,
    rest: Difference<'a, T, S>,
}

impl<'a, T, S> Iterator for Union<'a, T, S>
where
    T: Hash + Eq,
    S: BuildHasher,
{
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next().or_else(|| self.rest.next())
    }
}

/// An iterator over the intersection of two sets.
pub struct Intersection<'a, T, S> {
    iter: Iter<'a, T>,
    other: &'a HashSet<T, S>,
}

impl<'a, T, S> Iterator for Intersection<'a, T, S>
where
    T: Hash + Eq,
    S: BuildHasher,
{
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let other = self.other;
        self.iter.find(|v| other.contains(v))
    }
}

/// An iterator over the difference of two sets.
pub struct Difference<'a, T, S> {
    iter: Iter<'a, T>,
    other: &'a HashSet<T, S>,
}

impl<'a, T, S> Iterator for Difference<'a, T, S>
where
    T: Hash + Eq,
    S: BuildHasher,
{
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let other = self.other;
        self.iter.find(|v| !other.contains(v))
    }
}

#[cfg(test)]
mod tests {
    use alloc::format;
    use alloc::string::String;
    use alloc::string::ToString;
    use alloc::vec;
    use alloc::vec::Vec;
    use core::hash::BuildHasher;

    use rand::TryRngCore;
    use rand::rngs::OsRng;
    use siphasher::sip::SipHasher;

    use super::*;

    #[derive(Clone)]
    struct SipHashBuilder {
        k1: u64,
        k2: u64,
    }

    impl BuildHasher for SipHashBuilder {
        type Hasher = SipHasher;

        fn build_hasher(&self) -> Self::Hasher {
            SipHasher::new_with_keys(self.k1, self.k2)
        }
    }

    impl Default for SipHashBuilder {
        fn default() -> Self {
            Self {
                k1: OsRng.try_next_u64().unwrap_or(0),
                k2: OsRng.try_next_u64().unwrap_or(0),
            }
        }
    }

    fn sorted<'a>(iter: impl Iterator<Item = &'a i32>) -> Vec<i32> {
        let mut out: Vec<i32> = iter.copied().collect();
        out.sort();
        out
    }

    fn set_of(values: &[i32]) -> HashSet<i32, SipHashBuilder> {
        values.iter().copied().collect()
    }

    #[test]
    fn test_new_and_with_capacity() {
        let set: HashSet<i32, SipHashBuilder> = HashSet::new();
        assert!(set.is_empty());
        assert_eq!(set.capacity(), DEFAULT_CAPACITY);

        let set: HashSet<i32, SipHashBuilder> = HashSet::with_capacity(7);
        assert_eq!(set.capacity(), 7);

        let set: HashSet<i32, SipHashBuilder> = Default::default();
        assert_eq!(set.len(), 0);
    }

    #[test]
    fn test_insert_and_contains() {
        let mut set = HashSet::with_hasher(SipHashBuilder::default());

        assert!(set.insert(1));
        assert!(set.insert(2));
        assert!(!set.insert(1));
        assert_eq!(set.len(), 2);

        assert!(set.contains(&1));
        assert!(set.contains(&2));
        assert!(!set.contains(&3));
        assert_eq!(*set.element(&2), 2);
    }

    #[test]
    #[should_panic(expected = "not in the table")]
    fn test_element_missing_panics() {
        let set: HashSet<i32, SipHashBuilder> = HashSet::new();
        set.element(&1);
    }

    #[test]
    fn test_remove_and_take() {
        let mut set = set_of(&[1, 2]);

        assert!(set.remove(&1));
        assert!(!set.remove(&1));
        assert_eq!(set.take(&2), Some(2));
        assert_eq!(set.take(&2), None);
        assert!(set.is_empty());
    }

    #[test]
    fn test_insert_multi_counts_copies() {
        let mut set: HashSet<&str, SipHashBuilder> = HashSet::with_capacity(4);
        for _ in 0..3 {
            assert!(set.insert_multi("dup"));
        }
        assert!(set.insert("other"));
        assert!(!set.insert("dup"));
        assert_eq!(set.len(), 4);

        let mut removed = 0;
        while set.remove(&"dup") {
            removed += 1;
        }
        assert_eq!(removed, 3);
        assert!(set.contains(&"other"));
    }

    #[test]
    fn test_fixed_capacity_and_grow() {
        let fixed = InsertPolicy::DISTINCT.with_auto_grow(false);
        let mut set: HashSet<i32, SipHashBuilder> = HashSet::with_capacity(3);
        for i in 0..3 {
            assert!(set.insert_with_policy(i, fixed));
        }
        assert!(!set.insert_with_policy(3, fixed));
        let err = set.try_insert(3, fixed).unwrap_err();
        assert!(err.is_full());

        let err = set.try_insert(0, fixed).unwrap_err();
        assert!(err.is_full());

        set.grow();
        assert_eq!(set.capacity(), 32);
        assert!(set.try_insert(0, fixed).unwrap_err().is_duplicate());
        assert_eq!(set.try_insert(3, fixed).copied(), Ok(3));
        assert_eq!(sorted(set.iter()), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_clear_and_drain() {
        let mut set = set_of(&[1, 2, 3]);
        let capacity = set.capacity();

        let mut drained: Vec<i32> = set.drain().collect();
        drained.sort();
        assert_eq!(drained, vec![1, 2, 3]);
        assert!(set.is_empty());
        assert_eq!(set.capacity(), capacity);

        set.insert(4);
        set.clear();
        assert!(!set.contains(&4));
    }

    #[test]
    fn test_iter_and_into_iter() {
        let set = set_of(&[5, 6, 7]);
        assert_eq!(set.iter().len(), 3);
        assert_eq!(sorted((&set).into_iter()), vec![5, 6, 7]);

        let mut owned: Vec<i32> = set.into_iter().collect();
        owned.sort();
        assert_eq!(owned, vec![5, 6, 7]);
    }

    #[test]
    fn test_many_values() {
        let mut set = HashSet::with_hasher(SipHashBuilder::default());
        for i in 0..1000 {
            assert!(set.insert(i));
        }
        assert_eq!(set.len(), 1000);
        for i in (0..1000).step_by(3) {
            assert!(set.remove(&i));
        }
        for i in 0..1000 {
            assert_eq!(set.contains(&i), i % 3 != 0);
        }
        set.table
            .assert_invariants(|v| set.hash_builder.hash_one(v));
    }

    #[test]
    fn test_string_values() {
        let mut set = HashSet::with_hasher(SipHashBuilder::default());
        set.insert("hello".to_string());
        set.insert("world".to_string());
        assert!(set.contains(&"hello".to_string()));
        assert!(!set.contains(&"rust".to_string()));
        assert_eq!(set.take(&"world".to_string()), Some(String::from("world")));
    }

    #[test]
    fn test_eq_and_debug() {
        let a = set_of(&[1, 2, 3]);
        let b = set_of(&[3, 2, 1]);
        let c = set_of(&[1, 2]);
        assert_eq!(a, b);
        assert_ne!(a, c);

        assert_eq!(format!("{:?}", set_of(&[9])), "{9}");
    }

    #[test]
    fn test_is_disjoint() {
        let a = set_of(&[1, 2, 3]);
        let mut b = set_of(&[4, 5, 6]);

        assert!(a.is_disjoint(&b));
        assert!(b.is_disjoint(&a));

        b.insert(2);
        assert!(!a.is_disjoint(&b));
        assert!(!b.is_disjoint(&a));
    }

    #[test]
    fn test_subset_and_superset() {
        let a = set_of(&[1, 2]);
        let b = set_of(&[1, 2, 3]);

        assert!(a.is_subset(&b));
        assert!(!b.is_subset(&a));
        assert!(a.is_subset(&a));
        assert!(b.is_superset(&a));
        assert!(!a.is_superset(&b));
    }

    #[test]
    fn test_subset_ignores_repeated_copies() {
        let mut a: HashSet<i32, SipHashBuilder> = HashSet::new();
        for _ in 0..3 {
            a.insert_multi(1);
        }
        let b = set_of(&[1, 2]);

        assert!(a.is_subset(&b));
        assert!(b.is_superset(&a));
        assert!(!b.is_subset(&a));
        assert!(!a.is_superset(&b));
    }

    #[test]
    fn test_eq_with_repeated_values_is_symmetric() {
        let mut a: HashSet<i32, SipHashBuilder> = HashSet::new();
        a.insert_multi(1);
        a.insert_multi(1);
        let b = set_of(&[1, 2]);
        assert_ne!(a, b);
        assert_ne!(b, a);

        let mut c: HashSet<i32, SipHashBuilder> = HashSet::new();
        c.insert_multi(1);
        c.insert_multi(1);
        assert_eq!(a, c);
        assert_eq!(c, a);
        assert_eq!(a.count(&1), 2);
        assert_eq!(b.count(&3), 0);
    }

    #[test]
    fn test_union_intersection_difference() {
        let a = set_of(&[1, 2, 3]);
        let b = set_of(&[3, 4, 5]);

        assert_eq!(sorted(a.union(&b)), vec![1, 2, 3, 4, 5]);
        assert_eq!(sorted(a.intersection(&b)), vec![3]);
        assert_eq!(sorted(b.intersection(&a)), vec![3]);
        assert_eq!(sorted(a.difference(&b)), vec![1, 2]);
        assert_eq!(sorted(b.difference(&a)), vec![4, 5]);

        let empty = set_of(&[]);
        assert_eq!(sorted(a.union(&empty)), vec![1, 2, 3]);
        assert_eq!(a.intersection(&empty).count(), 0);
    }

    #[test]
    fn test_stats() {
        let set = set_of(&[1, 2, 3, 4]);
        let histogram = set.probe_histogram();
        assert_eq!(histogram.populated(), 4);
        assert_eq!(set.debug_stats().capacity, DEFAULT_CAPACITY);
    }
}
