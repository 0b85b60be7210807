use std::collections::hash_map::DefaultHasher;
use std::hash::Hash;
use std::hash::Hasher;

use clap::Parser;
use shift_hash::HashTable;
use shift_hash::InsertPolicy;

#[derive(Parser, Debug)]
struct Args {
    #[arg(short = 'c', long = "target_capacity", default_value_t = 1000)]
    target_capacity: usize,

    /// Fraction of the capacity to fill before printing statistics.
    #[arg(short = 'l', long = "load", default_value_t = 0.95)]
    load: f64,
}

fn hash_u64(value: u64) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

fn main() {
    let args = Args::parse();

    println!(
        "Creating HashTable with target capacity: {}",
        args.target_capacity
    );

    let mut table: HashTable<u64> = HashTable::with_capacity(args.target_capacity.max(1));
    let fixed = InsertPolicy::DISTINCT.with_auto_grow(false);

    println!("Actual capacity: {}", table.capacity());
    println!("Filling table with u64 values...");

    let num_values = ((table.capacity() as f64) * args.load.clamp(0.0, 1.0)) as usize;
    let mut num_failures = 0;
    for i in 0..num_values {
        let value = i as u64;
        let hash = hash_u64(value);

        if table
            .insert(hash, value, |&v| v == value, |&v| hash_u64(v), fixed)
            .is_err()
        {
            num_failures += 1;
        }
    }

    println!("Inserted {} values into table", table.len());
    println!(
        "Final load factor: {:.2}%",
        (table.len() as f64 / table.capacity() as f64) * 100.0
    );

    table.probe_histogram(|&v| hash_u64(v)).print();
    table.debug_stats(|&v| hash_u64(v)).print();
    println!(
        "Number of failed insert attempts: {} ({:.02}%)",
        num_failures,
        if num_values == 0 {
            0.0
        } else {
            num_failures as f64 / num_values as f64 * 100.0
        }
    );

    println!("Removing every other value...");
    for i in (0..num_values as u64).step_by(2) {
        table.remove(hash_u64(i), |&v| v == i, |&v| hash_u64(v));
    }
    table.probe_histogram(|&v| hash_u64(v)).print();
    table.debug_stats(|&v| hash_u64(v)).print();
}
