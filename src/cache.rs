//! Computed table for the apply recursion.
//!
//! One [`Cache`] lives for the duration of a single top-level `add` or `mul`
//! call and is dropped with it, so entries never outlive the table whose
//! handles they mention.

use std::collections::HashMap;

use crate::reference::NodeId;

/// Operation tag of a cache entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OpType {
    Add,
    Mul,
}

/// Cache key for a binary operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CacheKey {
    pub op: OpType,
    pub f: NodeId,
    pub g: NodeId,
}

impl CacheKey {
    /// Create a key for a commutative operation, normalizing operand order.
    ///
    /// Both ring operations commute, so `(f, g)` and `(g, f)` share an entry.
    pub fn commutative(op: OpType, f: NodeId, g: NodeId) -> Self {
        let (f, g) = if f <= g { (f, g) } else { (g, f) };
        Self { op, f, g }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Cache {
    map: HashMap<CacheKey, NodeId>,
    hits: usize,
    misses: usize,
}

impl Cache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a cached result.
    pub fn get(&mut self, key: &CacheKey) -> Option<NodeId> {
        let res = self.map.get(key).copied();
        if res.is_some() {
            self.hits += 1;
        } else {
            self.misses += 1;
        }
        res
    }

    /// Insert a result into the cache.
    pub fn insert(&mut self, key: CacheKey, value: NodeId) {
        self.map.insert(key, value);
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Get the number of cache hits.
    pub fn hits(&self) -> usize {
        self.hits
    }

    /// Get the number of cache misses.
    pub fn misses(&self) -> usize {
        self.misses
    }
}
