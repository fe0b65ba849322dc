//! Bounded cache of simulation results keyed by fingerprint.

use crate::sim::fingerprint::Fingerprint;
use std::collections::{HashMap, VecDeque};

pub const DEFAULT_CACHE_CAPACITY: usize = 10;

/// Strict least-recently-used cache from fingerprint to probability.
///
/// `get` on a hit and `set` on an existing key both move the entry to the
/// most-recently-used position; inserting past capacity evicts the
/// least-recently-used entry. Eviction is capacity-driven only.
#[derive(Debug)]
pub struct ResultCache {
    entries: HashMap<Fingerprint, f64>,
    order: VecDeque<Fingerprint>,
    capacity: usize,
}

impl ResultCache {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: HashMap::new(),
            order: VecDeque::new(),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&mut self, key: &Fingerprint) -> Option<f64> {
        let probability = self.entries.get(key).copied()?;
        self.touch(key);
        Some(probability)
    }

    pub fn set(&mut self, key: Fingerprint, probability: f64) {
        if self.capacity == 0 {
            return;
        }
        if self.entries.insert(key.clone(), probability).is_some() {
            self.touch(&key);
            return;
        }
        self.order.push_back(key);
        while self.order.len() > self.capacity {
            if let Some(oldest) = self.order.pop_front() {
                self.entries.remove(&oldest);
            }
        }
    }

    fn touch(&mut self, key: &Fingerprint) {
        if let Some(index) = self.order.iter().position(|k| k == key) {
            if let Some(entry) = self.order.remove(index) {
                self.order.push_back(entry);
            }
        }
    }

    /// Entries in recency order, least recently used first.
    pub fn entries_oldest_first(&self) -> impl Iterator<Item = (&Fingerprint, f64)> {
        self.order.iter().map(|key| (key, self.entries[key]))
    }

    /// Serialized shape: a list of `[fingerprint, probability]` pairs,
    /// oldest first.
    pub fn to_json(&self) -> serde_json::Result<String> {
        let pairs: Vec<(&Fingerprint, f64)> = self.entries_oldest_first().collect();
        serde_json::to_string(&pairs)
    }
}

impl Default for ResultCache {
    fn default() -> Self {
        Self::new(DEFAULT_CACHE_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::ResultCache;
    use crate::parse::{parse_combo, parse_deck};
    use crate::sim::fingerprint::Fingerprint;

    fn fingerprint(trials: u64) -> Fingerprint {
        let deck = parse_deck("3 card a\n").deck;
        let combo = parse_combo("card a\n").combo;
        Fingerprint::compute(&deck, &combo, 5, trials)
    }

    #[test]
    fn get_returns_inserted_value() {
        let mut cache = ResultCache::new(4);
        cache.set(fingerprint(1), 0.25);
        assert_eq!(cache.get(&fingerprint(1)), Some(0.25));
        assert_eq!(cache.get(&fingerprint(2)), None);
    }

    #[test]
    fn overflow_evicts_least_recently_used() {
        let mut cache = ResultCache::new(3);
        for trials in 1..=4 {
            cache.set(fingerprint(trials), trials as f64);
        }
        assert_eq!(cache.get(&fingerprint(1)), None);
        for trials in 2..=4 {
            assert_eq!(cache.get(&fingerprint(trials)), Some(trials as f64));
        }
    }

    #[test]
    fn get_refreshes_recency() {
        let mut cache = ResultCache::new(2);
        cache.set(fingerprint(1), 0.1);
        cache.set(fingerprint(2), 0.2);
        // Touch 1 so that 2 becomes the eviction candidate.
        assert_eq!(cache.get(&fingerprint(1)), Some(0.1));
        cache.set(fingerprint(3), 0.3);
        assert_eq!(cache.get(&fingerprint(1)), Some(0.1));
        assert_eq!(cache.get(&fingerprint(2)), None);
    }

    #[test]
    fn set_existing_key_replaces_and_refreshes() {
        let mut cache = ResultCache::new(2);
        cache.set(fingerprint(1), 0.1);
        cache.set(fingerprint(2), 0.2);
        cache.set(fingerprint(1), 0.9);
        cache.set(fingerprint(3), 0.3);
        assert_eq!(cache.get(&fingerprint(1)), Some(0.9));
        assert_eq!(cache.get(&fingerprint(2)), None);
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn zero_capacity_stores_nothing() {
        let mut cache = ResultCache::new(0);
        cache.set(fingerprint(1), 0.5);
        assert!(cache.is_empty());
        assert_eq!(cache.get(&fingerprint(1)), None);
    }

    #[test]
    fn serializes_oldest_first() {
        let mut cache = ResultCache::new(3);
        cache.set(fingerprint(1), 0.1);
        cache.set(fingerprint(2), 0.2);
        assert_eq!(cache.get(&fingerprint(1)), Some(0.1));
        let order: Vec<f64> = cache.entries_oldest_first().map(|(_, p)| p).collect();
        assert_eq!(order, vec![0.2, 0.1]);
        assert!(cache.to_json().unwrap().starts_with('['));
    }
}
