#![warn(missing_docs)]
#![doc = include_str!("../README.md")]
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(all(test, not(feature = "std")))]
extern crate std;

/// Errors returned when an entry cannot be inserted.
pub mod error;

/// A HashMap implementation backed by the backward-shift `HashTable`.
///
/// This module provides a `HashMap` that wraps the `HashTable` and provides
/// a key-value map interface with configurable hashers.
pub mod hash_map;

/// A hash set implementation backed by the backward-shift `HashTable`.
///
/// This module provides a `HashSet` that wraps the `HashTable` and provides
/// a set interface with configurable hashers.
pub mod hash_set;

pub mod hash_table;

/// Probe-length statistics for inspecting table health.
#[cfg(any(test, feature = "stats"))]
pub mod stats;

pub use error::InsertError;
pub use hash_map::HashMap;
pub use hash_set::HashSet;
pub use hash_table::HashTable;
pub use hash_table::InsertPolicy;

cfg_if::cfg_if! {
    if #[cfg(feature = "foldhash")] {
        /// The hasher builder used when none is specified.
        pub type DefaultHashBuilder = foldhash::fast::RandomState;
    } else if #[cfg(feature = "std")] {
        /// The hasher builder used when none is specified.
        pub type DefaultHashBuilder = std::hash::RandomState;
    } else {
        /// The hasher builder used when none is specified.
        ///
        /// Without `foldhash` or `std` there is no source of random keys, so
        /// this falls back to SipHash with fixed keys.
        #[allow(deprecated)]
        pub type DefaultHashBuilder = core::hash::BuildHasherDefault<core::hash::SipHasher>;
    }
}
