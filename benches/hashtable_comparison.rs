use alloc::format;
use core::hash::Hash;
use core::hash::Hasher;
use core::hint::black_box;

use criterion::AxisScale;
use criterion::BatchSize;
use criterion::Criterion;
use criterion::PlotConfiguration;
use criterion::Throughput;
use criterion::criterion_group;
use criterion::criterion_main;
use hashbrown::hash_table::Entry as HashbrownEntry;
use hashbrown::hash_table::HashTable as HashbrownHashTable;
use rand::Rng;
use rand::SeedableRng;
use rand::TryRngCore;
use rand::rngs::OsRng;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand_distr::Zipf;
use shift_hash::HashTable as ShiftHashTable;
use shift_hash::InsertPolicy;
use siphasher::sip::SipHasher;

extern crate alloc;

trait KeyValuePair: Clone {
    fn new(key: u64) -> Self;

    fn hash_key(&self) -> u64;
    fn eq_key(&self, other: &Self) -> bool;
}

#[derive(Clone)]
struct TestItem {
    key: String,
    _value: u64,
}

impl KeyValuePair for TestItem {
    fn new(key: u64) -> Self {
        black_box(Self {
            key: format!("key_{:016X}", key),
            _value: key,
        })
    }

    fn hash_key(&self) -> u64 {
        let mut hasher = SipHasher::new();
        self.key.hash(&mut hasher);
        hasher.finish()
    }

    fn eq_key(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

#[derive(Clone)]
struct SmallTestItem {
    key: u64,
}

impl KeyValuePair for SmallTestItem {
    fn new(key: u64) -> Self {
        black_box(Self { key })
    }

    fn hash_key(&self) -> u64 {
        let mut hasher = SipHasher::new();
        self.key.hash(&mut hasher);
        hasher.finish()
    }

    fn eq_key(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

const SIZES: &[usize] = &[
    (1 << 10),
    (1 << 12),
    (1 << 14),
    (1 << 16),
    (1 << 18),
];

#[derive(Clone, Copy)]
enum Operation {
    Insert,
    Find,
    Remove,
}

fn make_items<TestItem: KeyValuePair>(keys: impl Iterator<Item = u64>) -> Vec<(u64, TestItem)> {
    keys.map(|key| {
        let item = TestItem::new(key);
        (item.hash_key(), item)
    })
    .collect()
}

fn shuffled<T: Clone>(items: &[T]) -> Vec<T> {
    let mut items = items.to_vec();
    items.shuffle(&mut SmallRng::from_os_rng());
    items
}

fn shift_insert<TestItem: KeyValuePair>(
    table: &mut ShiftHashTable<TestItem>,
    hash: u64,
    item: TestItem,
) -> bool {
    match table.vacant_entry(
        hash,
        |v| v.eq_key(&item),
        |v| v.hash_key(),
        InsertPolicy::DISTINCT,
    ) {
        Ok(entry) => {
            entry.insert(item);
            true
        }
        Err(_) => false,
    }
}

fn hashbrown_insert<TestItem: KeyValuePair>(
    table: &mut HashbrownHashTable<TestItem>,
    hash: u64,
    item: TestItem,
) -> bool {
    match table.entry(hash, |v| v.eq_key(&item), |v| v.hash_key()) {
        HashbrownEntry::Vacant(entry) => {
            entry.insert(item);
            true
        }
        HashbrownEntry::Occupied(_) => false,
    }
}

fn hashbrown_remove<TestItem: KeyValuePair>(
    table: &mut HashbrownHashTable<TestItem>,
    hash: u64,
    item: &TestItem,
) -> Option<TestItem> {
    match table.find_entry(hash, |v| v.eq_key(item)) {
        Ok(entry) => Some(entry.remove().0),
        Err(_) => None,
    }
}

fn bench_insert_random<TestItem: KeyValuePair>(c: &mut Criterion) {
    let mut group = c.benchmark_group(format!(
        "insert_random_{}",
        core::any::type_name::<TestItem>()
    ));
    group.plot_config(PlotConfiguration::default().summary_scale(AxisScale::Logarithmic));

    let mut rng = OsRng;

    for &size in SIZES {
        let hash_and_item: Vec<(u64, TestItem)> =
            make_items((0..size).map(|_| rng.try_next_u64().unwrap_or(0)));

        group.throughput(Throughput::Elements(size as u64));
        group.bench_function(format!("shift_hash/{size}"), |b| {
            b.iter_batched(
                || shuffled(&hash_and_item),
                |hash_and_item| {
                    let mut table = ShiftHashTable::<TestItem>::default();
                    for (hash, item) in hash_and_item {
                        black_box(shift_insert(&mut table, hash, item));
                    }
                    black_box(table)
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_function(format!("hashbrown/{size}"), |b| {
            b.iter_batched(
                || shuffled(&hash_and_item),
                |hash_and_item| {
                    let mut table = HashbrownHashTable::<TestItem>::with_capacity(0);
                    for (hash, item) in hash_and_item {
                        black_box(hashbrown_insert(&mut table, hash, item));
                    }
                    black_box(table)
                },
                BatchSize::SmallInput,
            )
        });
    }

    group.finish();
}

fn bench_find_hit_miss<TestItem: KeyValuePair>(c: &mut Criterion) {
    let mut group = c.benchmark_group(format!(
        "find_hit_miss_{}",
        core::any::type_name::<TestItem>()
    ));
    group.plot_config(PlotConfiguration::default().summary_scale(AxisScale::Logarithmic));

    for &size in SIZES {
        // Even keys are stored, odd keys miss.
        let hits: Vec<(u64, TestItem)> = make_items((0..size as u64 * 2).step_by(2));
        let lookups: Vec<(u64, TestItem)> = make_items(0..size as u64 * 2);

        let mut shift_table = ShiftHashTable::<TestItem>::default();
        let mut hashbrown_table = HashbrownHashTable::<TestItem>::with_capacity(0);
        for (hash, item) in hits.iter().cloned() {
            shift_insert(&mut shift_table, hash, item.clone());
            hashbrown_insert(&mut hashbrown_table, hash, item);
        }

        group.throughput(Throughput::Elements(lookups.len() as u64));
        group.bench_function(format!("shift_hash/{size}"), |b| {
            b.iter_batched(
                || shuffled(&lookups),
                |lookups| {
                    for (hash, key) in &lookups {
                        black_box(shift_table.find(*hash, |v| v.eq_key(key)));
                    }
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_function(format!("hashbrown/{size}"), |b| {
            b.iter_batched(
                || shuffled(&lookups),
                |lookups| {
                    for (hash, key) in &lookups {
                        black_box(hashbrown_table.find(*hash, |v| v.eq_key(key)));
                    }
                },
                BatchSize::SmallInput,
            )
        });
    }

    group.finish();
}

fn bench_remove<TestItem: KeyValuePair>(c: &mut Criterion) {
    let mut group = c.benchmark_group(format!("remove_{}", core::any::type_name::<TestItem>()));
    group.plot_config(PlotConfiguration::default().summary_scale(AxisScale::Logarithmic));

    for &size in SIZES {
        let hash_and_item: Vec<(u64, TestItem)> = make_items(0..size as u64);

        group.throughput(Throughput::Elements(size as u64));
        group.bench_function(format!("shift_hash/{size}"), |b| {
            b.iter_batched(
                || {
                    let mut table = ShiftHashTable::<TestItem>::default();
                    for (hash, item) in hash_and_item.iter().cloned() {
                        shift_insert(&mut table, hash, item);
                    }
                    (table, shuffled(&hash_and_item))
                },
                |(mut table, hash_and_item)| {
                    for (hash, item) in &hash_and_item {
                        black_box(table.remove(*hash, |v| v.eq_key(item), |v| v.hash_key()));
                    }
                    black_box(table)
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_function(format!("hashbrown/{size}"), |b| {
            b.iter_batched(
                || {
                    let mut table = HashbrownHashTable::<TestItem>::with_capacity(0);
                    for (hash, item) in hash_and_item.iter().cloned() {
                        hashbrown_insert(&mut table, hash, item);
                    }
                    (table, shuffled(&hash_and_item))
                },
                |(mut table, hash_and_item)| {
                    for (hash, item) in &hash_and_item {
                        black_box(hashbrown_remove(&mut table, *hash, item));
                    }
                    black_box(table)
                },
                BatchSize::SmallInput,
            )
        });
    }

    group.finish();
}

fn bench_churn<TestItem: KeyValuePair>(c: &mut Criterion) {
    let mut group = c.benchmark_group(format!("churn_{}", core::any::type_name::<TestItem>()));
    group.plot_config(PlotConfiguration::default().summary_scale(AxisScale::Logarithmic));

    for &size in SIZES {
        // Every key appears twice: the first sighting inserts, the second
        // removes.
        let insertions_and_removals: Vec<(u64, TestItem)> =
            make_items((0..size as u64).flat_map(|key| [key, key]));

        group.throughput(Throughput::Elements(insertions_and_removals.len() as u64));
        group.bench_function(format!("shift_hash/{size}"), |b| {
            b.iter_batched(
                || shuffled(&insertions_and_removals),
                |hash_and_item| {
                    let mut table = ShiftHashTable::<TestItem>::default();
                    for (hash, item) in hash_and_item {
                        if table
                            .remove(hash, |v| v.eq_key(&item), |v| v.hash_key())
                            .is_none()
                        {
                            shift_insert(&mut table, hash, item);
                        }
                    }
                    black_box(table)
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_function(format!("hashbrown/{size}"), |b| {
            b.iter_batched(
                || shuffled(&insertions_and_removals),
                |hash_and_item| {
                    let mut table = HashbrownHashTable::<TestItem>::with_capacity(0);
                    for (hash, item) in hash_and_item {
                        match table.entry(hash, |v| v.eq_key(&item), |v| v.hash_key()) {
                            HashbrownEntry::Vacant(entry) => {
                                black_box(entry.insert(item));
                            }
                            HashbrownEntry::Occupied(entry) => {
                                black_box(entry.remove().0);
                            }
                        }
                    }
                    black_box(table)
                },
                BatchSize::SmallInput,
            )
        });
    }

    group.finish();
}

fn bench_mixed_zipf<TestItem: KeyValuePair>(c: &mut Criterion) {
    for exponent in [1.0, 1.3] {
        let mut group = c.benchmark_group(format!(
            "mixed_zipf_{:.01}_{}",
            exponent,
            core::any::type_name::<TestItem>()
        ));
        group.plot_config(PlotConfiguration::default().summary_scale(AxisScale::Logarithmic));

        const KEY_SPACE_MULTIPLIER: f32 = 2.0;

        for &size in SIZES {
            let mut rng = SmallRng::from_os_rng();
            let op_distr = Zipf::new(3.0, exponent).unwrap();
            let insert_distr = Zipf::new(size as f32 - 1.0, 1.0).unwrap();
            let find_remove_distr = Zipf::new(size as f32 * KEY_SPACE_MULTIPLIER - 1.0, 1.0).unwrap();

            let operations = (0..size * 3)
                .map(|_| {
                    let op_choice: f64 = rng.sample(op_distr);
                    let op = if op_choice <= 1.0 {
                        Operation::Find
                    } else if op_choice <= 2.0 {
                        Operation::Insert
                    } else {
                        Operation::Remove
                    };
                    let key = match op {
                        Operation::Insert => rng.sample(insert_distr) as u64,
                        Operation::Find | Operation::Remove => rng.sample(find_remove_distr) as u64,
                    };
                    let item = TestItem::new(key);
                    (op, item.hash_key(), item)
                })
                .collect::<Vec<(Operation, u64, TestItem)>>();

            group.throughput(Throughput::Elements(operations.len() as u64));
            group.bench_function(format!("shift_hash/{size}"), |b| {
                b.iter_batched(
                    || operations.clone(),
                    |operations| {
                        let mut table = ShiftHashTable::<TestItem>::default();
                        for (op, hash, item) in operations {
                            match op {
                                Operation::Insert => {
                                    black_box(shift_insert(&mut table, hash, item));
                                }
                                Operation::Remove => {
                                    black_box(table.remove(
                                        hash,
                                        |v| v.eq_key(&item),
                                        |v| v.hash_key(),
                                    ));
                                }
                                Operation::Find => {
                                    black_box(table.find(hash, |v| v.eq_key(&item)));
                                }
                            }
                        }
                        black_box(table)
                    },
                    BatchSize::SmallInput,
                )
            });

            group.bench_function(format!("hashbrown/{size}"), |b| {
                b.iter_batched(
                    || operations.clone(),
                    |operations| {
                        let mut table = HashbrownHashTable::<TestItem>::with_capacity(0);
                        for (op, hash, item) in operations {
                            match op {
                                Operation::Insert => {
                                    black_box(hashbrown_insert(&mut table, hash, item));
                                }
                                Operation::Remove => {
                                    black_box(hashbrown_remove(&mut table, hash, &item));
                                }
                                Operation::Find => {
                                    black_box(table.find(hash, |v| v.eq_key(&item)));
                                }
                            }
                        }
                        black_box(table)
                    },
                    BatchSize::SmallInput,
                )
            });
        }

        group.finish();
    }
}

criterion_group!(
    benches,
    bench_insert_random::<SmallTestItem>,
    bench_insert_random::<TestItem>,
    bench_find_hit_miss::<SmallTestItem>,
    bench_find_hit_miss::<TestItem>,
    bench_remove::<SmallTestItem>,
    bench_remove::<TestItem>,
    bench_churn::<SmallTestItem>,
    bench_churn::<TestItem>,
    bench_mixed_zipf::<SmallTestItem>,
    bench_mixed_zipf::<TestItem>,
);

criterion_main!(benches);
