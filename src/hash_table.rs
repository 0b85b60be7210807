//! The open-addressing table shared by [`HashMap`](crate::HashMap) and
//! [`HashSet`](crate::HashSet).
//!
//! Entries live directly in a fixed-length slot array. Collisions are
//! resolved by linear probing (step 1, wrapping at the end of the array) and
//! removal compacts the probe chain with backward-shift deletion, so the
//! table never carries tombstones.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt::Debug;

use crate::error::InsertError;
use crate::error::Rejection;

/// Capacity used by `Default` and by the wrappers' `new` constructors.
pub const DEFAULT_CAPACITY: usize = 32;

/// Smallest capacity a table grows to.
const GROWTH_FLOOR: usize = 32;

/// Returns `true` once `populated` reaches 80% of `capacity`.
#[inline(always)]
fn at_load_limit(populated: usize, capacity: usize) -> bool {
    populated as u128 * 5 >= capacity as u128 * 4
}

#[inline(always)]
fn grown_capacity(capacity: usize) -> usize {
    capacity
        .checked_mul(2)
        .expect("capacity overflow")
        .max(GROWTH_FLOOR)
}

/// Number of forward steps from `from` to `to` on a ring of `capacity` slots.
#[inline(always)]
fn cyclic_distance(from: usize, to: usize, capacity: usize) -> usize {
    if to >= from {
        to - from
    } else {
        to + capacity - from
    }
}

fn empty_slots<V>(capacity: usize) -> Box<[Slot<V>]> {
    (0..capacity).map(|_| Slot::Empty).collect()
}

#[derive(Clone)]
enum Slot<V> {
    Empty,
    Occupied(V),
}

impl<V> Slot<V> {
    #[inline(always)]
    fn is_empty(&self) -> bool {
        matches!(self, Slot::Empty)
    }

    #[inline(always)]
    fn take(&mut self) -> Option<V> {
        match core::mem::replace(self, Slot::Empty) {
            Slot::Occupied(value) => Some(value),
            Slot::Empty => None,
        }
    }
}

/// Controls how [`HashTable::insert`] treats equal keys and a table that is
/// running out of room.
///
/// # Examples
///
/// ```rust
/// use shift_hash::InsertPolicy;
///
/// let policy = InsertPolicy::DISTINCT.with_auto_grow(false);
/// assert!(policy.distinct);
/// assert!(!policy.auto_grow);
/// assert_eq!(InsertPolicy::default(), InsertPolicy::DISTINCT);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InsertPolicy {
    /// Reject the insertion if an equal key is already present. When
    /// `false`, equal keys are stored side by side.
    pub distinct: bool,
    /// Double the capacity before inserting once the table is 80% full.
    /// When `false`, inserting into a full table fails.
    pub auto_grow: bool,
}

impl InsertPolicy {
    /// Distinct keys, automatic growth.
    pub const DISTINCT: Self = Self {
        distinct: true,
        auto_grow: true,
    };

    /// Duplicate keys permitted, automatic growth.
    pub const MULTI: Self = Self {
        distinct: false,
        auto_grow: true,
    };

    /// Returns a copy of this policy with `distinct` replaced.
    pub const fn with_distinct(self, distinct: bool) -> Self {
        Self { distinct, ..self }
    }

    /// Returns a copy of this policy with `auto_grow` replaced.
    pub const fn with_auto_grow(self, auto_grow: bool) -> Self {
        Self { auto_grow, ..self }
    }
}

impl Default for InsertPolicy {
    fn default() -> Self {
        Self::DISTINCT
    }
}

/// A hash table using linear probing and backward-shift deletion.
///
/// `HashTable<V>` stores values of type `V` in a single slot array. Like the
/// raw tables of other hashing crates it does not know how to hash or
/// compare its values: every operation takes the 64-bit hash of the probe
/// key and an equality predicate. Operations that relocate stored entries
/// (removal and growth) also take a rehasher that recomputes the hash of a
/// stored value; it must agree with the hashes used at insertion.
///
/// The home slot of a hash is `hash % capacity`. Capacity is chosen by the
/// caller and is not rounded to a power of two.
///
/// ## Example
///
/// ```rust
/// # use core::hash::Hash;
/// # use core::hash::Hasher;
/// #
/// # use shift_hash::HashTable;
/// # use shift_hash::InsertPolicy;
/// # use siphasher::sip::SipHasher;
/// #
/// # fn hash_id(id: u64) -> u64 {
/// #     let mut hasher = SipHasher::new();
/// #     id.hash(&mut hasher);
/// #     hasher.finish()
/// # }
/// #
/// let mut table = HashTable::with_capacity(8);
/// let rehash = |&(id, _): &(u64, &str)| hash_id(id);
///
/// table
///     .insert(hash_id(1), (1, "Alice"), |&(id, _)| id == 1, rehash, InsertPolicy::DISTINCT)
///     .unwrap();
/// assert_eq!(table.find(hash_id(1), |&(id, _)| id == 1), Some(&(1, "Alice")));
///
/// let removed = table.remove(hash_id(1), |&(id, _)| id == 1, rehash);
/// assert_eq!(removed, Some((1, "Alice")));
/// assert!(table.is_empty());
/// ```
#[derive(Clone)]
pub struct HashTable<V> {
    slots: Box<[Slot<V>]>,
    populated: usize,
}

impl<V> Debug for HashTable<V> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        use alloc::string::String;

        let occupancy = self
            .slots
            .chunks(32)
            .map(|chunk| {
                chunk
                    .iter()
                    .map(|slot| if slot.is_empty() { '.' } else { '#' })
                    .collect::<String>()
            })
            .collect::<Vec<_>>();

        f.debug_struct("HashTable")
            .field("populated", &self.populated)
            .field("capacity", &self.capacity())
            .field("slots", &occupancy)
            .finish()
    }
}

impl<V> Default for HashTable<V> {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }
}

impl<V> HashTable<V> {
    /// Creates an empty table with exactly `capacity` slots.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use shift_hash::HashTable;
    /// #
    /// let table: HashTable<String> = HashTable::with_capacity(100);
    /// assert_eq!(table.capacity(), 100);
    /// assert!(table.is_empty());
    /// ```
    #[track_caller]
    pub fn with_capacity(capacity: usize) -> Self {
        assert!(capacity >= 1, "hash table capacity must be at least 1");
        Self {
            slots: empty_slots(capacity),
            populated: 0,
        }
    }

    /// Returns the number of values in the table.
    pub fn len(&self) -> usize {
        self.populated
    }

    /// Returns `true` if the table contains no values.
    pub fn is_empty(&self) -> bool {
        self.populated == 0
    }

    /// Returns the number of slots in the table.
    ///
    /// Capacity only changes when the table grows and never decreases.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Removes all values from the table, keeping its capacity.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use shift_hash::HashTable;
    /// # use shift_hash::InsertPolicy;
    /// #
    /// let mut table = HashTable::with_capacity(10);
    /// for n in 0..4u64 {
    ///     table.insert(n, n, |&v| v == n, |&v| v, InsertPolicy::DISTINCT).unwrap();
    /// }
    /// assert_eq!(table.len(), 4);
    ///
    /// table.clear();
    /// assert!(table.is_empty());
    /// assert_eq!(table.capacity(), 10);
    /// ```
    pub fn clear(&mut self) {
        for slot in self.slots.iter_mut() {
            *slot = Slot::Empty;
        }
        self.populated = 0;
    }

    #[inline(always)]
    fn home_index(&self, hash: u64) -> usize {
        (hash % self.slots.len() as u64) as usize
    }

    #[inline(always)]
    fn next_index(&self, index: usize) -> usize {
        let next = index + 1;
        if next == self.slots.len() { 0 } else { next }
    }

    /// Walks the probe sequence of `hash` and returns the index of the first
    /// value matching `eq`.
    ///
    /// The walk stops at the first empty slot. It visits at most `capacity`
    /// slots so that a completely full table still terminates.
    fn find_index(&self, hash: u64, eq: impl Fn(&V) -> bool) -> Option<usize> {
        if self.populated == 0 {
            return None;
        }

        let mut index = self.home_index(hash);
        for _ in 0..self.slots.len() {
            match &self.slots[index] {
                Slot::Empty => return None,
                Slot::Occupied(value) if eq(value) => return Some(index),
                Slot::Occupied(_) => index = self.next_index(index),
            }
        }

        None
    }

    /// Finds a value by hash and equality predicate.
    ///
    /// If the table holds several matching values, which one is returned is
    /// unspecified.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use shift_hash::HashTable;
    /// # use shift_hash::InsertPolicy;
    /// #
    /// let mut table = HashTable::with_capacity(10);
    /// table.insert(42, 42u64, |&v| v == 42, |&v| v, InsertPolicy::DISTINCT).unwrap();
    ///
    /// assert_eq!(table.find(42, |&v| v == 42), Some(&42));
    /// assert_eq!(table.find(99, |&v| v == 99), None);
    /// ```
    #[inline]
    pub fn find(&self, hash: u64, eq: impl Fn(&V) -> bool) -> Option<&V> {
        let index = self.find_index(hash, eq)?;
        match &self.slots[index] {
            Slot::Occupied(value) => Some(value),
            Slot::Empty => None,
        }
    }

    /// Finds a value by hash and equality predicate, returning a mutable
    /// reference.
    ///
    /// The caller must not change the parts of the value that determine its
    /// hash.
    #[inline]
    pub fn find_mut(&mut self, hash: u64, eq: impl Fn(&V) -> bool) -> Option<&mut V> {
        let index = self.find_index(hash, eq)?;
        match &mut self.slots[index] {
            Slot::Occupied(value) => Some(value),
            Slot::Empty => None,
        }
    }

    /// Counts the values matching `eq` among those stored under `hash`.
    ///
    /// Only useful for tables that allow duplicates; a distinct table
    /// answers 0 or 1.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use shift_hash::HashTable;
    /// # use shift_hash::InsertPolicy;
    /// #
    /// let mut table = HashTable::with_capacity(8);
    /// for _ in 0..3 {
    ///     table.insert(4, 4u64, |&v| v == 4, |&v| v, InsertPolicy::MULTI).unwrap();
    /// }
    /// table.insert(12, 12u64, |&v| v == 12, |&v| v, InsertPolicy::MULTI).unwrap();
    ///
    /// assert_eq!(table.count(4, |&v| v == 4), 3);
    /// assert_eq!(table.count(12, |&v| v == 12), 1);
    /// assert_eq!(table.count(5, |&v| v == 5), 0);
    /// ```
    pub fn count(&self, hash: u64, eq: impl Fn(&V) -> bool) -> usize {
        // Every value stored under `hash` lies in the run between its home
        // slot and the next empty slot.
        let mut index = self.home_index(hash);
        let mut count = 0;
        for _ in 0..self.slots.len() {
            match &self.slots[index] {
                Slot::Empty => break,
                Slot::Occupied(value) if eq(value) => count += 1,
                Slot::Occupied(_) => {}
            }
            index = self.next_index(index);
        }
        count
    }

    /// Returns the value matching `eq`, which the caller knows to be present.
    ///
    /// # Panics
    ///
    /// Panics if no value matches.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use shift_hash::HashTable;
    /// # use shift_hash::InsertPolicy;
    /// #
    /// let mut table = HashTable::with_capacity(10);
    /// table.insert(7, 7u64, |&v| v == 7, |&v| v, InsertPolicy::DISTINCT).unwrap();
    /// assert_eq!(*table.element(7, |&v| v == 7), 7);
    /// ```
    #[track_caller]
    pub fn element(&self, hash: u64, eq: impl Fn(&V) -> bool) -> &V {
        match self.find(hash, eq) {
            Some(value) => value,
            None => panic!("element() called for a key that is not in the table"),
        }
    }

    /// Mutable counterpart of [`element`](Self::element).
    ///
    /// # Panics
    ///
    /// Panics if no value matches.
    #[track_caller]
    pub fn element_mut(&mut self, hash: u64, eq: impl Fn(&V) -> bool) -> &mut V {
        match self.find_mut(hash, eq) {
            Some(value) => value,
            None => panic!("element_mut() called for a key that is not in the table"),
        }
    }

    /// Inserts `value` under `hash`.
    ///
    /// With `policy.auto_grow` set, the table first doubles its capacity
    /// (to at least 32 slots) once it is 80% full; `rehash` recomputes the
    /// hashes of the values that move. With `policy.distinct` set, the
    /// insertion is rejected if a value matching `eq` is already present;
    /// otherwise `eq` is never called and equal values are stored side by
    /// side.
    ///
    /// On success a reference to the stored value is returned. On failure the
    /// value is handed back inside the error and the table is unchanged
    /// (apart from any growth that already happened).
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use shift_hash::HashTable;
    /// # use shift_hash::InsertError;
    /// # use shift_hash::InsertPolicy;
    /// #
    /// let mut table = HashTable::with_capacity(2);
    /// let policy = InsertPolicy::DISTINCT.with_auto_grow(false);
    ///
    /// assert!(table.insert(1, 1u64, |&v| v == 1, |&v| v, policy).is_ok());
    /// assert_eq!(
    ///     table.insert(1, 1u64, |&v| v == 1, |&v| v, policy),
    ///     Err(InsertError::Duplicate(1))
    /// );
    /// assert!(table.insert(2, 2u64, |&v| v == 2, |&v| v, policy).is_ok());
    /// assert_eq!(
    ///     table.insert(3, 3u64, |&v| v == 3, |&v| v, policy),
    ///     Err(InsertError::Full(3))
    /// );
    /// ```
    pub fn insert(
        &mut self,
        hash: u64,
        value: V,
        eq: impl Fn(&V) -> bool,
        rehash: impl Fn(&V) -> u64,
        policy: InsertPolicy,
    ) -> Result<&mut V, InsertError<V>> {
        match self.vacant_entry(hash, eq, rehash, policy) {
            Ok(entry) => Ok(entry.insert(value)),
            Err(rejection) => Err(rejection.with(value)),
        }
    }

    /// Finds the slot a new value for `hash` would be placed in, without
    /// placing anything yet.
    ///
    /// Applies the same growth and duplicate rules as
    /// [`insert`](Self::insert). This lets a caller test equality against a
    /// key it still owns and only then move the key into the table.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use shift_hash::HashTable;
    /// # use shift_hash::InsertPolicy;
    /// # use shift_hash::error::Rejection;
    /// #
    /// let mut table: HashTable<(String, u32)> = HashTable::with_capacity(8);
    /// let key = String::from("apples");
    ///
    /// let entry = table
    ///     .vacant_entry(3, |(k, _)| *k == key, |_| 3, InsertPolicy::DISTINCT)
    ///     .unwrap();
    /// entry.insert((key, 10));
    ///
    /// let again = table.vacant_entry(3, |(k, _)| k == "apples", |_| 3, InsertPolicy::DISTINCT);
    /// assert_eq!(again.err(), Some(Rejection::Duplicate));
    /// ```
    pub fn vacant_entry(
        &mut self,
        hash: u64,
        eq: impl Fn(&V) -> bool,
        rehash: impl Fn(&V) -> u64,
        policy: InsertPolicy,
    ) -> Result<VacantEntry<'_, V>, Rejection> {
        if policy.auto_grow && at_load_limit(self.populated, self.slots.len()) {
            self.grow(rehash);
        }

        let index = self.probe_vacant(hash, eq, policy.distinct)?;
        Ok(VacantEntry { table: self, index })
    }

    /// Walks the probe sequence of `hash` to its first empty slot.
    ///
    /// This is the single placement routine: ordinary insertion and growth
    /// both go through it.
    fn probe_vacant(
        &self,
        hash: u64,
        eq: impl Fn(&V) -> bool,
        distinct: bool,
    ) -> Result<usize, Rejection> {
        if self.populated == self.slots.len() {
            return Err(Rejection::Full);
        }

        let home = self.home_index(hash);
        let mut index = home;
        loop {
            match &self.slots[index] {
                Slot::Empty => return Ok(index),
                Slot::Occupied(existing) if distinct && eq(existing) => {
                    return Err(Rejection::Duplicate);
                }
                Slot::Occupied(_) => {}
            }

            index = self.next_index(index);
            if index == home {
                unreachable!(
                    "probe wrapped a table with {} of {} slots populated",
                    self.populated,
                    self.slots.len()
                );
            }
        }
    }

    fn occupy(&mut self, index: usize, value: V) -> &mut V {
        debug_assert!(self.slots[index].is_empty());
        self.populated += 1;
        let slot = &mut self.slots[index];
        *slot = Slot::Occupied(value);
        match slot {
            Slot::Occupied(value) => value,
            Slot::Empty => unreachable!(),
        }
    }

    /// Removes and returns a value matching `eq`.
    ///
    /// After the value is taken out, the entries that follow it in its probe
    /// chain are shifted back to close the gap, so every remaining value
    /// stays reachable from its home slot. `rehash` recomputes the hashes of
    /// those entries. If several values match, exactly one of them is
    /// removed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use shift_hash::HashTable;
    /// # use shift_hash::InsertPolicy;
    /// #
    /// let mut table = HashTable::with_capacity(4);
    /// // 1, 5 and 9 all share home slot 1.
    /// for n in [1u64, 5, 9] {
    ///     table.insert(n, n, |&v| v == n, |&v| v, InsertPolicy::DISTINCT).unwrap();
    /// }
    ///
    /// assert_eq!(table.remove(5, |&v| v == 5, |&v| v), Some(5));
    /// assert_eq!(table.find(9, |&v| v == 9), Some(&9));
    /// assert_eq!(table.remove(5, |&v| v == 5, |&v| v), None);
    /// assert_eq!(table.len(), 2);
    /// ```
    pub fn remove(
        &mut self,
        hash: u64,
        eq: impl Fn(&V) -> bool,
        rehash: impl Fn(&V) -> u64,
    ) -> Option<V> {
        let index = self.find_index(hash, eq)?;
        let value = self.slots[index].take()?;
        self.populated -= 1;
        self.close_gap(index, rehash);
        Some(value)
    }

    /// Backward-shift deletion: moves entries after the empty slot `gap`
    /// back into it until the chain reaches an empty slot.
    ///
    /// An entry at `index` whose home slot lies in the cyclic interval
    /// `(gap, index]` never probes through `gap`, so it stays put and the
    /// scan continues past it. Any other entry is moved into `gap`, which
    /// leaves a new gap where it was.
    fn close_gap(&mut self, mut gap: usize, rehash: impl Fn(&V) -> u64) {
        let capacity = self.slots.len();
        let mut index = self.next_index(gap);

        // `gap` is always empty, so this stops after at most one full lap.
        loop {
            let home = match &self.slots[index] {
                Slot::Empty => return,
                Slot::Occupied(value) => self.home_index(rehash(value)),
            };

            if cyclic_distance(home, index, capacity) >= cyclic_distance(gap, index, capacity) {
                self.slots.swap(gap, index);
                gap = index;
            }

            index = self.next_index(index);
        }
    }

    /// Doubles the capacity (to at least 32 slots) and moves every value into
    /// the new slot array.
    ///
    /// Values are moved, not cloned, through the ordinary insertion path with
    /// duplicates allowed, so equal values survive growth unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use shift_hash::HashTable;
    /// # use shift_hash::InsertPolicy;
    /// #
    /// let mut table = HashTable::with_capacity(4);
    /// table.insert(3, 3u64, |&v| v == 3, |&v| v, InsertPolicy::DISTINCT).unwrap();
    ///
    /// table.grow(|&v| v);
    /// assert_eq!(table.capacity(), 32);
    /// assert_eq!(table.find(3, |&v| v == 3), Some(&3));
    /// ```
    pub fn grow(&mut self, rehash: impl Fn(&V) -> u64) {
        let capacity = grown_capacity(self.slots.len());
        let old = core::mem::replace(&mut self.slots, empty_slots(capacity));
        self.populated = 0;

        for slot in old.into_vec() {
            if let Slot::Occupied(value) = slot {
                match self.probe_vacant(rehash(&value), |_| false, false) {
                    Ok(index) => {
                        self.occupy(index, value);
                    }
                    Err(_) => unreachable!("grown table rejected a value"),
                }
            }
        }
    }

    /// Returns an iterator over all values in slot order.
    ///
    /// The order is not meaningful and changes whenever the table grows.
    pub fn iter(&self) -> Iter<'_, V> {
        Iter {
            slots: self.slots.iter(),
            remaining: self.populated,
        }
    }

    /// Returns an iterator over mutable references to all values.
    ///
    /// The caller must not change the parts of a value that determine its
    /// hash.
    pub fn iter_mut(&mut self) -> IterMut<'_, V> {
        IterMut {
            slots: self.slots.iter_mut(),
            remaining: self.populated,
        }
    }

    /// Returns an iterator that removes and yields every value.
    ///
    /// The table is empty afterwards, even if the iterator is dropped early,
    /// and keeps its capacity. If the iterator is leaked instead, the values
    /// it has not yielded stay counted in the table and [`clear`](Self::clear)
    /// drops them.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use shift_hash::HashTable;
    /// # use shift_hash::InsertPolicy;
    /// #
    /// let mut table = HashTable::with_capacity(10);
    /// for n in 0..3u64 {
    ///     table.insert(n, n, |&v| v == n, |&v| v, InsertPolicy::DISTINCT).unwrap();
    /// }
    ///
    /// let mut values: Vec<u64> = table.drain().collect();
    /// values.sort();
    /// assert_eq!(values, [0, 1, 2]);
    /// assert!(table.is_empty());
    /// ```
    pub fn drain(&mut self) -> Drain<'_, V> {
        Drain {
            table: self,
            slot_index: 0,
        }
    }

    /// Yields the displacement of every value from its home slot.
    #[cfg(any(test, feature = "stats"))]
    pub(crate) fn displacements<'a>(
        &'a self,
        rehash: impl Fn(&V) -> u64 + 'a,
    ) -> impl Iterator<Item = usize> + 'a {
        let capacity = self.slots.len();
        self.slots
            .iter()
            .enumerate()
            .filter_map(move |(index, slot)| match slot {
                Slot::Occupied(value) => Some(cyclic_distance(
                    (rehash(value) % capacity as u64) as usize,
                    index,
                    capacity,
                )),
                Slot::Empty => None,
            })
    }

    /// Size in bytes of the slot array.
    #[cfg(any(test, feature = "stats"))]
    pub(crate) fn allocated_bytes(&self) -> usize {
        core::mem::size_of_val::<[Slot<V>]>(&self.slots)
    }

    /// Checks the live count and that every value is reachable from its home
    /// slot without crossing an empty slot.
    #[cfg(test)]
    pub(crate) fn assert_invariants(&self, rehash: impl Fn(&V) -> u64) {
        let occupied = self.slots.iter().filter(|slot| !slot.is_empty()).count();
        assert_eq!(occupied, self.populated, "{:#?}", self);

        for (index, slot) in self.slots.iter().enumerate() {
            let Slot::Occupied(value) = slot else {
                continue;
            };
            let mut probe = self.home_index(rehash(value));
            while probe != index {
                assert!(
                    !self.slots[probe].is_empty(),
                    "slot {} unreachable from its home: empty slot {} in between\n{:#?}",
                    index,
                    probe,
                    self
                );
                probe = self.next_index(probe);
            }
        }
    }
}

/// A slot reserved for a new value by [`HashTable::vacant_entry`].
///
/// Nothing is stored until [`insert`](Self::insert) is called; dropping the
/// entry leaves the table as it was (apart from any growth).
pub struct VacantEntry<'a, V> {
    table: &'a mut HashTable<V>,
    index: usize,
}

impl<'a, V> VacantEntry<'a, V> {
    /// Stores `value` in the reserved slot and returns a reference to it.
    ///
    /// The value must hash to the hash the entry was obtained with.
    pub fn insert(self, value: V) -> &'a mut V {
        self.table.occupy(self.index, value)
    }
}

impl<V> IntoIterator for HashTable<V> {
    type IntoIter = IntoIter<V>;
    type Item = V;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            remaining: self.populated,
            slots: self.slots.into_vec().into_iter(),
        }
    }
}

impl<'a, V> IntoIterator for &'a HashTable<V> {
    type IntoIter = Iter<'a, V>;
    type Item = &'a V;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An iterator over the values of a [`HashTable`].
///
/// Created by [`HashTable::iter`].
pub struct Iter<'a, V> {
    slots: core::slice::Iter<'a, Slot<V>>,
    remaining: usize,
}

impl<V> Clone for Iter<'_, V> {
    fn clone(&self) -> Self {
        Self {
            slots: self.slots.clone(),
            remaining: self.remaining,
        }
    }
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        for slot in self.slots.by_ref() {
            if let Slot::Occupied(value) = slot {
                self.remaining -= 1;
                return Some(value);
            }
        }

        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<V> ExactSizeIterator for Iter<'_, V> {}

/// A mutable iterator over the values of a [`HashTable`].
///
/// Created by [`HashTable::iter_mut`].
pub struct IterMut<'a, V> {
    slots: core::slice::IterMut<'a, Slot<V>>,
    remaining: usize,
}

impl<'a, V> Iterator for IterMut<'a, V> {
    type Item = &'a mut V;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        for slot in self.slots.by_ref() {
            if let Slot::Occupied(value) = slot {
                self.remaining -= 1;
                return Some(value);
            }
        }

        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<V> ExactSizeIterator for IterMut<'_, V> {}

/// A draining iterator over the values of a [`HashTable`].
///
/// Created by [`HashTable::drain`].
pub struct Drain<'a, V> {
    table: &'a mut HashTable<V>,
    slot_index: usize,
}

impl<V> Iterator for Drain<'_, V> {
    type Item = V;

    fn next(&mut self) -> Option<Self::Item> {
        if self.table.populated == 0 {
            return None;
        }

        while self.slot_index < self.table.slots.len() {
            let slot = &mut self.table.slots[self.slot_index];
            self.slot_index += 1;
            if let Some(value) = slot.take() {
                self.table.populated -= 1;
                return Some(value);
            }
        }

        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.table.populated, Some(self.table.populated))
    }
}

impl<V> ExactSizeIterator for Drain<'_, V> {}

impl<V> Drop for Drain<'_, V> {
    fn drop(&mut self) {
        for _ in &mut *self {}
    }
}

/// An owning iterator over the values of a [`HashTable`].
pub struct IntoIter<V> {
    slots: alloc::vec::IntoIter<Slot<V>>,
    remaining: usize,
}

impl<V> Iterator for IntoIter<V> {
    type Item = V;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        for slot in self.slots.by_ref() {
            if let Slot::Occupied(value) = slot {
                self.remaining -= 1;
                return Some(value);
            }
        }

        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<V> ExactSizeIterator for IntoIter<V> {}
