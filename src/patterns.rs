use std::sync::atomic::{AtomicBool, Ordering};

use rand::prelude::*;

use once_cell::sync::OnceCell;

use serde_json::{json, Value};

/// Provides a set of patterns useful for testing and benchmarking record sorting.
/// The integer patterns drive the record builders below.

// --- Public ---

pub fn random(size: usize) -> Vec<i32> {
    //     .
    // : . : :
    // :.:::.::

    random_vec(size)
}

pub fn random_uniform<R>(size: usize, range: R) -> Vec<i32>
where
    R: Into<rand::distributions::Uniform<i32>>,
{
    // :.:.:.::
    let mut rng = new_seed();

    // Abstracting over ranges in Rust :(
    let dist: rand::distributions::Uniform<i32> = range.into();

    (0..size).map(|_| dist.sample(&mut rng)).collect()
}

pub fn all_equal(size: usize) -> Vec<i32> {
    // ......
    // ::::::

    (0..size).map(|_| 66).collect::<Vec<_>>()
}

pub fn ascending(size: usize) -> Vec<i32> {
    //     .:
    //   .:::
    // .:::::

    (0..size as i32).collect::<Vec<_>>()
}

pub fn descending(size: usize) -> Vec<i32> {
    // :.
    // :::.
    // :::::.

    (0..size as i32).rev().collect::<Vec<_>>()
}

pub fn saw_mixed(size: usize, saw_count: usize) -> Vec<i32> {
    // :.  :.    .::.    .:
    // :::.:::..::::::..:::

    if size == 0 {
        return Vec::new();
    }

    let mut vals = random_vec(size);
    let chunks_size = (size / saw_count.max(1)).max(1);
    let saw_directions = random_uniform((size / chunks_size) + 1, 0..=1);

    for (i, chunk) in vals.chunks_mut(chunks_size).enumerate() {
        if saw_directions[i] == 0 {
            chunk.sort();
        } else {
            chunk.sort_by_key(|&e| std::cmp::Reverse(e));
        }
    }

    vals
}

pub fn pipe_organ(size: usize) -> Vec<i32> {
    //   .:.
    // .:::::.

    let mut vals = random_vec(size);

    let first_half = &mut vals[0..(size / 2)];
    first_half.sort();

    let second_half = &mut vals[(size / 2)..size];
    second_half.sort_by_key(|&e| std::cmp::Reverse(e));

    vals
}

/// Turns integer keys into object records:
///
/// `{"id": i, "key": v, "group": v % groups, "nested": {"key": v}, "tags": [v % 7], "label": "…"}`
///
/// `id` is the original position, so equal keys can be checked for stability.
pub fn records(keys: &[i32], groups: i32) -> Vec<Value> {
    let groups = groups.max(1);

    keys.iter()
        .enumerate()
        .map(|(id, &key)| {
            json!({
                "id": id,
                "key": key,
                "group": key.rem_euclid(groups),
                "nested": { "key": key },
                "tags": [key.rem_euclid(7)],
                "label": format!("{:010}", key.unsigned_abs()),
            })
        })
        .collect()
}

/// Records where roughly `missing_percent` of them lack the `key` field.
pub fn records_with_holes(keys: &[i32], missing_percent: f64) -> Vec<Value> {
    let mut rng = new_seed();

    records(keys, 8)
        .into_iter()
        .map(|mut record| {
            if rng.gen_bool((missing_percent / 100.0).clamp(0.0, 1.0)) {
                if let Value::Object(map) = &mut record {
                    map.remove("key");
                    map.remove("nested");
                }
            }
            record
        })
        .collect()
}

/// Plain scalar records drawn from a small vocabulary, for rank order tests.
pub fn words(size: usize, vocabulary: &[&str]) -> Vec<Value> {
    if vocabulary.is_empty() {
        return Vec::new();
    }

    random_uniform(size, 0..(vocabulary.len() as i32))
        .into_iter()
        .map(|i| Value::from(vocabulary[i as usize]))
        .collect()
}

static USE_FIXED_SEED: AtomicBool = AtomicBool::new(true);

pub fn disable_fixed_seed() {
    USE_FIXED_SEED.store(false, Ordering::Release);
}

pub fn random_init_seed() -> u64 {
    if USE_FIXED_SEED.load(Ordering::Acquire) {
        static SEED: OnceCell<u64> = OnceCell::new();
        *SEED.get_or_init(|| -> u64 { thread_rng().gen() })
    } else {
        thread_rng().gen()
    }
}

// --- Private ---

fn new_seed() -> StdRng {
    // Random seed, but prints it for repeatability.
    rand::SeedableRng::seed_from_u64(random_init_seed())
}

fn random_vec(size: usize) -> Vec<i32> {
    let mut rng = new_seed();

    (0..size).map(|_| rng.gen::<i32>()).collect()
}
