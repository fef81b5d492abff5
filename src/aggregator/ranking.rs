//! Tally-and-rank primitive shared by the hotspot analyzer and the
//! target-factory collector.
//!
//! Keys are merged, weights summed, and the result sorted by descending
//! weight. Equal weights keep the order in which their key was first seen.

use std::collections::HashMap;
use std::hash::Hash;

/// A key with its summed weight
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ranked<K> {
    pub key: K,
    pub weight: u64,
}

impl<K> Ranked<K> {
    pub fn new(key: K, weight: u64) -> Self {
        Self { key, weight }
    }
}

/// Sum weights per key and rank descending
///
/// Zero weights still register their key (so the first-seen position is
/// kept) but callers normally filter them out beforehand.
pub fn rank_weighted<K, I>(entries: I) -> Vec<Ranked<K>>
where
    K: Eq + Hash + Clone,
    I: IntoIterator<Item = (K, u64)>,
{
    let mut index: HashMap<K, usize> = HashMap::new();
    let mut ranked: Vec<Ranked<K>> = Vec::new();

    for (key, weight) in entries {
        match index.get(&key) {
            Some(&position) => ranked[position].weight += weight,
            None => {
                index.insert(key.clone(), ranked.len());
                ranked.push(Ranked::new(key, weight));
            }
        }
    }

    // sort_by is stable, which keeps first-seen order among ties
    ranked.sort_by(|a, b| b.weight.cmp(&a.weight));
    ranked
}

/// Count identical keys and rank by frequency
pub fn rank_frequency<K, I>(keys: I) -> Vec<Ranked<K>>
where
    K: Eq + Hash + Clone,
    I: IntoIterator<Item = K>,
{
    rank_weighted(keys.into_iter().map(|key| (key, 1)))
}
