use alloc::vec::Vec;

use crate::hash_table::HashTable;

/// Counts of stored values by their distance from their home slot.
///
/// Bin `i` holds the number of values found `i` slots past the slot their
/// hash maps to, so a lookup for such a value inspects `i + 1` slots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeHistogram {
    counts: Vec<usize>,
    populated: usize,
}

impl ProbeHistogram {
    /// Builds a histogram from a sequence of displacements.
    pub fn from_displacements(displacements: impl IntoIterator<Item = usize>) -> Self {
        let mut counts = Vec::new();
        let mut populated = 0;
        for displacement in displacements {
            if counts.len() <= displacement {
                counts.resize(displacement + 1, 0);
            }
            counts[displacement] += 1;
            populated += 1;
        }
        Self { counts, populated }
    }

    /// Returns the per-displacement counts. The last bin is never zero.
    pub fn counts(&self) -> &[usize] {
        &self.counts
    }

    /// Returns the number of values counted.
    pub fn populated(&self) -> usize {
        self.populated
    }

    /// Returns the largest displacement seen, or `None` for an empty table.
    pub fn max_displacement(&self) -> Option<usize> {
        self.counts.len().checked_sub(1)
    }

    /// Returns the average displacement, or `0.0` for an empty table.
    pub fn mean_displacement(&self) -> f64 {
        if self.populated == 0 {
            return 0.0;
        }
        let total: usize = self.counts.iter().enumerate().map(|(d, &c)| d * c).sum();
        total as f64 / self.populated as f64
    }

    /// Pretty-prints the histogram as a horizontal bar chart on stdout.
    #[cfg(feature = "std")]
    pub fn print(&self) {
        let max = self.counts.iter().copied().max().unwrap_or(0);
        if max == 0 {
            println!("probe histogram: empty");
            return;
        }

        let max_bar = 60usize;
        let total_units = max_bar * 8;
        println!("probe histogram ({} entries):", self.populated);

        let make_bar = |count: usize| -> alloc::string::String {
            if count == 0 {
                return alloc::string::String::new();
            }
            let units = ((count as u128 * total_units as u128).div_ceil(max as u128)) as usize;
            let mut bar = "█".repeat(units / 8);
            let partial = match units % 8 {
                0 => None,
                1 => Some('▏'),
                2 => Some('▎'),
                3 => Some('▍'),
                4 => Some('▌'),
                5 => Some('▋'),
                6 => Some('▊'),
                7 => Some('▉'),
                _ => unreachable!(),
            };
            if let Some(ch) = partial {
                bar.push(ch);
            }
            bar
        };

        for (displacement, &count) in self.counts.iter().enumerate() {
            println!("{:>3} | {} ({})", displacement, make_bar(count), count);
        }
    }
}

/// A snapshot of table occupancy and clustering.
#[derive(Debug, Clone)]
pub struct DebugStats {
    /// Number of values currently in the table
    pub populated: usize,
    /// Number of slots in the table
    pub capacity: usize,
    /// Load factor (populated / capacity)
    pub load_factor: f64,
    /// Longest distance of any value from its home slot
    pub max_displacement: usize,
    /// Average distance of a value from its home slot
    pub mean_displacement: f64,
    /// Total memory in bytes used by the slot array
    pub total_bytes: usize,
    /// Bytes held by empty slots
    pub wasted_bytes: usize,
}

impl DebugStats {
    /// Pretty-print the debug statistics.
    #[cfg(feature = "std")]
    pub fn print(&self) {
        println!("=== Hash Table Debug Statistics ===");
        println!(
            "Population: {}/{} ({:.2}% load factor)",
            self.populated,
            self.capacity,
            self.load_factor * 100.0
        );
        println!(
            "Displacement: max {}, mean {:.3}",
            self.max_displacement, self.mean_displacement
        );
        println!("Total Allocated: {} bytes", self.total_bytes);
        println!(
            "Memory: {} bytes wasted ({:.02}%)",
            self.wasted_bytes,
            if self.total_bytes == 0 {
                0.0
            } else {
                (self.wasted_bytes as f64 / self.total_bytes as f64) * 100.0
            }
        );
    }
}

impl<V> HashTable<V> {
    /// Returns how far each stored value sits from its home slot.
    ///
    /// `rehash` must return the same hash each value was inserted with.
    pub fn probe_histogram(&self, rehash: impl Fn(&V) -> u64) -> ProbeHistogram {
        ProbeHistogram::from_displacements(self.displacements(rehash))
    }

    /// Returns occupancy and clustering statistics for debugging.
    ///
    /// `rehash` must return the same hash each value was inserted with.
    pub fn debug_stats(&self, rehash: impl Fn(&V) -> u64) -> DebugStats {
        let histogram = self.probe_histogram(rehash);
        let capacity = self.capacity();
        let total_bytes = self.allocated_bytes();
        let slot_bytes = total_bytes / capacity;

        DebugStats {
            populated: self.len(),
            capacity,
            load_factor: self.len() as f64 / capacity as f64,
            max_displacement: histogram.max_displacement().unwrap_or(0),
            mean_displacement: histogram.mean_displacement(),
            total_bytes,
            wasted_bytes: (capacity - self.len()) * slot_bytes,
        }
    }
}
