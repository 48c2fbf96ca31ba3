//! Memoization of aggregate bundles keyed by build content.

use std::collections::HashMap;

use tracing::debug;

use crate::aggregates::{compute_aggregates, AggregateBundle};
use crate::ship::{Build, HullId, OutfitId};

/// Default number of bundles kept before the cache starts over.
pub const DEFAULT_CACHE_LIMIT: usize = 256;

/// Content identity of a build: hull plus every outfit identity and amount,
/// in order. Build id and name do not participate.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BuildKey {
    hull: HullId,
    outfits: Vec<(OutfitId, u32)>,
}

impl BuildKey {
    pub fn of(build: &Build) -> Self {
        Self {
            hull: build.hull.id.clone(),
            outfits: build
                .outfits
                .iter()
                .map(|set| (set.outfit.id.clone(), set.amount))
                .collect(),
        }
    }
}

/// Host-owned cache of computed aggregates.
///
/// Entries assume catalog records are immutable for the cache's lifetime;
/// call [`AggregateCache::clear`] after loading a different catalog. Once
/// `limit` entries are held, the next miss empties the cache first.
#[derive(Debug)]
pub struct AggregateCache {
    entries: HashMap<BuildKey, AggregateBundle>,
    limit: usize,
}

impl Default for AggregateCache {
    fn default() -> Self {
        Self::with_limit(DEFAULT_CACHE_LIMIT)
    }
}

impl AggregateCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cache holding at most `limit` bundles (at least one).
    pub fn with_limit(limit: usize) -> Self {
        Self {
            entries: HashMap::new(),
            limit: limit.max(1),
        }
    }

    /// Cached aggregates for `build`, computing them on a miss.
    pub fn get_or_compute(&mut self, build: &Build) -> &AggregateBundle {
        let key = BuildKey::of(build);
        if !self.entries.contains_key(&key) && self.entries.len() >= self.limit {
            debug!(entries = self.entries.len(), "aggregate cache full; starting over");
            self.entries.clear();
        }
        self.entries.entry(key).or_insert_with(|| {
            debug!(build = %build.id, "aggregate cache miss");
            compute_aggregates(build)
        })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
