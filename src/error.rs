use core::fmt::Debug;
use core::fmt::Display;

/// The error returned by the `try_insert` family when an entry could not be
/// placed in the table.
///
/// The rejected entry is handed back so the caller can retry, grow the
/// table, or evict something else first.
#[derive(Clone, PartialEq, Eq)]
pub enum InsertError<V> {
    /// The table only accepts distinct keys and an equal key is already
    /// present.
    Duplicate(V),
    /// Every slot is occupied and automatic growth was disabled.
    Full(V),
}

impl<V> InsertError<V> {
    /// Returns the entry that was rejected.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use shift_hash::InsertError;
    ///
    /// let err = InsertError::Full(7);
    /// assert_eq!(err.into_inner(), 7);
    /// ```
    pub fn into_inner(self) -> V {
        match self {
            InsertError::Duplicate(value) | InsertError::Full(value) => value,
        }
    }

    /// Returns a reference to the rejected entry.
    pub fn get(&self) -> &V {
        match self {
            InsertError::Duplicate(value) | InsertError::Full(value) => value,
        }
    }

    /// Returns the reason for the rejection, without the entry.
    pub fn rejection(&self) -> Rejection {
        match self {
            InsertError::Duplicate(_) => Rejection::Duplicate,
            InsertError::Full(_) => Rejection::Full,
        }
    }

    /// Returns `true` if the insertion was rejected because of an equal key.
    pub fn is_duplicate(&self) -> bool {
        matches!(self, InsertError::Duplicate(_))
    }

    /// Returns `true` if the insertion was rejected because the table is full.
    pub fn is_full(&self) -> bool {
        matches!(self, InsertError::Full(_))
    }
}

/// Why a slot could not be reserved for a new value.
///
/// Returned by [`HashTable::vacant_entry`](crate::HashTable::vacant_entry),
/// before any value has been moved into the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// An equal key is already present and the table only accepts distinct
    /// keys.
    Duplicate,
    /// Every slot is occupied and automatic growth was disabled.
    Full,
}

impl Rejection {
    /// Attaches the rejected entry, producing an [`InsertError`].
    pub fn with<V>(self, value: V) -> InsertError<V> {
        match self {
            Rejection::Duplicate => InsertError::Duplicate(value),
            Rejection::Full => InsertError::Full(value),
        }
    }
}

impl Display for Rejection {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Rejection::Duplicate => f.write_str("an equal key is already present"),
            Rejection::Full => f.write_str("table is full and automatic growth is disabled"),
        }
    }
}

impl core::error::Error for Rejection {}

impl<V> Debug for InsertError<V> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            InsertError::Duplicate(_) => f.write_str("Duplicate(..)"),
            InsertError::Full(_) => f.write_str("Full(..)"),
        }
    }
}

impl<V> Display for InsertError<V> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        Display::fmt(&self.rejection(), f)
    }
}

impl<V> core::error::Error for InsertError<V> {}
