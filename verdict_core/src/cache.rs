//! Memoization of generated sequences and per-position distributions.

use crate::variant::Variant;

use serde::Serialize;
use std::collections::HashMap;
use std::sync::Arc;

/// Cache key: `(node, sequence length, index-or-none)`.
///
/// `index: None` addresses a whole sequence; `Some(i)` addresses the
/// distribution at position `i`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CacheKey {
    pub node: String,
    pub len: usize,
    pub index: Option<usize>,
}

impl CacheKey {
    pub fn sequence(node: &str, len: usize) -> Self {
        Self {
            node: node.to_string(),
            len,
            index: None,
        }
    }

    pub fn position(node: &str, len: usize, index: usize) -> Self {
        Self {
            node: node.to_string(),
            len,
            index: Some(index),
        }
    }
}

/// Counters exposed for diagnostics.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub invalidated: u64,
}

#[derive(Debug, Clone)]
enum Entry<V: Variant> {
    Sequence(Arc<[V::Outcome]>),
    Distribution(V::Distribution),
}

/// Memoization layer in front of generation.
///
/// Sequences are shared as `Arc<[_]>`, so a hit never copies outcomes.
#[derive(Debug, Clone)]
pub struct PredictionCache<V: Variant> {
    entries: HashMap<CacheKey, Entry<V>>,
    stats: CacheStats,
}

impl<V: Variant> Default for PredictionCache<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Variant> PredictionCache<V> {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
            stats: CacheStats::default(),
        }
    }

    /// Looks up a whole sequence.
    pub fn sequence(&mut self, node: &str, len: usize) -> Option<Arc<[V::Outcome]>> {
        let hit = match self.entries.get(&CacheKey::sequence(node, len)) {
            Some(Entry::Sequence(sequence)) => Some(Arc::clone(sequence)),
            _ => None,
        };
        self.record(hit.is_some());
        hit
    }

    pub fn store_sequence(&mut self, node: &str, len: usize, sequence: Arc<[V::Outcome]>) {
        self.entries
            .insert(CacheKey::sequence(node, len), Entry::Sequence(sequence));
    }

    /// Looks up the distribution at one position.
    pub fn distribution(&mut self, node: &str, len: usize, index: usize) -> Option<V::Distribution> {
        let hit = match self.entries.get(&CacheKey::position(node, len, index)) {
            Some(Entry::Distribution(distribution)) => Some(*distribution),
            _ => None,
        };
        self.record(hit.is_some());
        hit
    }

    pub fn store_distribution(
        &mut self,
        node: &str,
        len: usize,
        index: usize,
        distribution: V::Distribution,
    ) {
        self.entries.insert(
            CacheKey::position(node, len, index),
            Entry::Distribution(distribution),
        );
    }

    /// Drops every entry of `node`, returning how many were removed.
    pub fn invalidate(&mut self, node: &str) -> usize {
        let before = self.entries.len();
        self.entries.retain(|key, _| key.node != node);
        let removed = before - self.entries.len();
        self.stats.invalidated += removed as u64;
        removed
    }

    /// Drops every entry.
    pub fn clear(&mut self) {
        self.stats.invalidated += self.entries.len() as u64;
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn stats(&self) -> CacheStats {
        self.stats
    }

    fn record(&mut self, hit: bool) {
        if hit {
            self.stats.hits += 1;
        } else {
            self.stats.misses += 1;
        }
    }
}
