#![forbid(unsafe_code)]

use lru::LruCache;
use plots_core::{Plot, PlotKey};
use std::num::NonZeroUsize;
use tracing::trace;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub evictions: u64,
}

/// Bounded most-recently-used index of plots keyed by position.
///
/// The cache is derived state: dropping or disabling it changes speed, never
/// results. A capacity of zero disables it.
#[derive(Debug)]
pub struct PlotCache {
    entries: Option<LruCache<PlotKey, Plot>>,
    stats: CacheStats,
}

impl PlotCache {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: NonZeroUsize::new(capacity).map(LruCache::new),
            stats: CacheStats::default(),
        }
    }

    pub fn capacity(&self) -> usize {
        self.entries.as_ref().map_or(0, |entries| entries.cap().get())
    }

    pub fn is_enabled(&self) -> bool {
        self.entries.is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.as_ref().map_or(0, LruCache::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn stats(&self) -> CacheStats {
        self.stats
    }

    /// Membership check that leaves recency untouched.
    pub fn contains(&self, key: &PlotKey) -> bool {
        self.entries
            .as_ref()
            .is_some_and(|entries| entries.contains(key))
    }

    /// Returns a copy of the cached plot and marks it most recently used.
    pub fn get(&mut self, key: &PlotKey) -> Option<Plot> {
        let entries = self.entries.as_mut()?;
        match entries.get(key) {
            Some(plot) => {
                self.stats.hits += 1;
                trace!(plot = %key, "plot cache hit");
                Some(plot.clone())
            }
            None => {
                self.stats.misses += 1;
                trace!(plot = %key, "plot cache miss");
                None
            }
        }
    }

    /// Inserts or overwrites the entry at the plot's position, evicting the
    /// least recently used entry past capacity.
    pub fn put(&mut self, plot: Plot) {
        let Some(entries) = self.entries.as_mut() else {
            return;
        };
        let key = plot.key();
        // `push` hands back the displaced pair: the old value for the same
        // key, or the evicted entry.
        if let Some((evicted, _)) = entries.push(key.clone(), plot) {
            if evicted != key {
                self.stats.evictions += 1;
                trace!(plot = %evicted, "plot cache eviction");
            }
        }
    }

    pub fn invalidate(&mut self, key: &PlotKey) -> Option<Plot> {
        self.entries.as_mut()?.pop(key)
    }

    pub fn clear(&mut self) {
        if let Some(entries) = self.entries.as_mut() {
            entries.clear();
        }
    }
}

#[cfg(test)]
mod tests;
