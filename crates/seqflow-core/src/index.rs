//! Keyed bucketing over an equality strategy.
//!
//! `KeyIndex` and `DistinctSet` are the single-pass building blocks of
//! grouping, hash joins, and union. Both preserve first-seen order and
//! work with any `Equality` strategy: hashed buckets when the strategy
//! provides `hash_of`, linear probing when it does not.

use std::collections::HashMap;

use crate::equality::Equality;

/// Key -> bucket multimap preserving first-seen key order.
#[derive(Debug)]
pub struct KeyIndex<K, V, E> {
    eq: E,
    entries: Vec<(K, Vec<V>)>,
    buckets: HashMap<u64, Vec<usize>>,
}

impl<K, V, E: Equality<K>> KeyIndex<K, V, E> {
    pub fn new(eq: E) -> Self {
        KeyIndex {
            eq,
            entries: Vec::new(),
            buckets: HashMap::new(),
        }
    }

    /// Append `value` to the bucket for `key`, creating the bucket at
    /// the end of the key order on first sight.
    pub fn insert(&mut self, key: K, value: V) {
        if let Some(slot) = self.position(&key) {
            self.entries[slot].1.push(value);
            return;
        }
        let slot = self.entries.len();
        if let Some(hash) = self.eq.hash_of(&key) {
            self.buckets.entry(hash).or_default().push(slot);
        }
        self.entries.push((key, vec![value]));
    }

    /// Bucket for `key`; empty slice when the key was never inserted.
    pub fn get(&self, key: &K) -> &[V] {
        match self.position(key) {
            Some(slot) => &self.entries[slot].1,
            None => &[],
        }
    }

    /// The buckets in first-seen key order.
    pub fn into_entries(self) -> Vec<(K, Vec<V>)> {
        self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn position(&self, key: &K) -> Option<usize> {
        match self.eq.hash_of(key) {
            Some(hash) => self
                .buckets
                .get(&hash)?
                .iter()
                .copied()
                .find(|&slot| self.eq.equal(&self.entries[slot].0, key)),
            None => self
                .entries
                .iter()
                .position(|(existing, _)| self.eq.equal(existing, key)),
        }
    }
}

/// First-seen-ordered set of elements under an equality strategy.
#[derive(Debug)]
pub struct DistinctSet<T, E> {
    eq: E,
    seen: Vec<T>,
    buckets: HashMap<u64, Vec<usize>>,
}

impl<T, E: Equality<T>> DistinctSet<T, E> {
    pub fn new(eq: E) -> Self {
        DistinctSet {
            eq,
            seen: Vec::new(),
            buckets: HashMap::new(),
        }
    }

    /// Record `value`; returns `true` when it was not already present.
    pub fn insert(&mut self, value: T) -> bool {
        if self.contains(&value) {
            return false;
        }
        let slot = self.seen.len();
        if let Some(hash) = self.eq.hash_of(&value) {
            self.buckets.entry(hash).or_default().push(slot);
        }
        self.seen.push(value);
        true
    }

    pub fn contains(&self, value: &T) -> bool {
        match self.eq.hash_of(value) {
            Some(hash) => self
                .buckets
                .get(&hash)
                .map(|slots| {
                    slots
                        .iter()
                        .any(|&slot| self.eq.equal(&self.seen[slot], value))
                })
                .unwrap_or(false),
            None => self.seen.iter().any(|seen| self.eq.equal(seen, value)),
        }
    }

    pub fn len(&self) -> usize {
        self.seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::equality::{by_fn, Natural};

    #[test]
    fn key_index_preserves_first_seen_order() {
        let mut index = KeyIndex::new(Natural);
        for (key, value) in [(45, "a"), (30, "b"), (45, "c"), (52, "d")] {
            index.insert(key / 10, value);
        }
        let entries = index.into_entries();
        let keys: Vec<i32> = entries.iter().map(|(k, _)| *k).collect();
        assert_eq!(keys, vec![4, 3, 5]);
        assert_eq!(entries[0].1, vec!["a", "c"]);
    }

    #[test]
    fn distinct_set_linear_fallback() {
        let mut set = DistinctSet::new(by_fn(|a: &i32, b: &i32| a.abs() == b.abs()));
        assert!(set.insert(3));
        assert!(!set.insert(-3));
        assert!(set.insert(4));
        assert_eq!(set.len(), 2);
    }
}
