//! Data generators for benchmarks

use crate::config::KeyPattern;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use redblack::RedBlackTree;
use std::collections::BTreeMap;

/// Generate `count` keys following `pattern`
pub fn generate_keys(pattern: KeyPattern, count: usize, seed: u64) -> Vec<u64> {
    let mut rng = StdRng::seed_from_u64(seed);
    match pattern {
        KeyPattern::Random => {
            let span = (count as u64).saturating_mul(4).max(1);
            (0..count).map(|_| rng.gen_range(0..span)).collect()
        }
        KeyPattern::Sequential => (0..count as u64).collect(),
        KeyPattern::Duplicates => {
            let domain = (count as u64 / 16).max(1);
            (0..count).map(|_| rng.gen_range(0..domain)).collect()
        }
    }
}

/// Generate lookup probes, half of them drawn from `keys` and half random
pub fn generate_probes(keys: &[u64], count: usize, seed: u64) -> Vec<u64> {
    let mut rng = StdRng::seed_from_u64(seed ^ 0xa5a5);
    (0..count)
        .map(|_| match keys.choose(&mut rng) {
            Some(key) if rng.gen_bool(0.5) => *key,
            _ => rng.gen(),
        })
        .collect()
}

/// Shuffled copy of `keys`, used as a deletion order
pub fn shuffled(keys: &[u64], seed: u64) -> Vec<u64> {
    let mut rng = StdRng::seed_from_u64(seed ^ 0x5a5a);
    let mut keys = keys.to_vec();
    keys.shuffle(&mut rng);
    keys
}

/// Generate `[low, low + width]` windows spread over the key span
pub fn generate_ranges(count: usize, span: u64, width: u64, seed: u64) -> Vec<(u64, u64)> {
    let mut rng = StdRng::seed_from_u64(seed ^ 0x0f0f);
    let top = span.saturating_sub(width).max(1);
    (0..count)
        .map(|_| {
            let low = rng.gen_range(0..top);
            (low, low + width)
        })
        .collect()
}

pub fn build_tree(keys: &[u64]) -> RedBlackTree<u64, u64> {
    keys.iter().map(|key| (*key, *key)).collect()
}

/// `BTreeMap` baseline. Duplicate keys collapse into one entry.
pub fn build_btree(keys: &[u64]) -> BTreeMap<u64, u64> {
    keys.iter().map(|key| (*key, *key)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generators_are_deterministic() {
        let a = generate_keys(KeyPattern::Random, 100, 7);
        let b = generate_keys(KeyPattern::Random, 100, 7);
        assert_eq!(a, b);
        assert_eq!(shuffled(&a, 1), shuffled(&b, 1));
    }

    #[test]
    fn test_duplicate_pattern_repeats_keys() {
        let keys = generate_keys(KeyPattern::Duplicates, 1_600, 3);
        assert!(keys.iter().all(|key| *key < 100));
        let tree = build_tree(&keys);
        assert_eq!(tree.len(), 1_600);
        assert!(build_btree(&keys).len() <= 100);
    }

    #[test]
    fn test_ranges_stay_in_span() {
        for (low, high) in generate_ranges(50, 10_000, 100, 9) {
            assert_eq!(high - low, 100);
            assert!(high <= 10_000);
        }
    }
}
