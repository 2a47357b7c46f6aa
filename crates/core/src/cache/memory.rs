//! In-memory grid cache with LRU eviction.

use std::num::NonZeroUsize;
use std::sync::{Arc, Mutex, PoisonError};

use lru::LruCache;

use crate::calendar::{build_year, GridKey, Result, YearGrids};

/// Thread-safe cache of year grids keyed by [`GridKey`].
///
/// The first request for a key builds its grids under the lock; later
/// requests share the same `Arc<YearGrids>`. Clones share storage.
#[derive(Debug, Clone)]
pub struct GridCache {
    store: Arc<Mutex<LruCache<GridKey, Arc<YearGrids>>>>,
}

impl GridCache {
    pub const DEFAULT_CAPACITY: NonZeroUsize = match NonZeroUsize::new(16) {
        Some(capacity) => capacity,
        None => unreachable!(),
    };

    /// Creates a cache holding at most `capacity` years of grids.
    pub fn new(capacity: NonZeroUsize) -> Self {
        Self {
            store: Arc::new(Mutex::new(LruCache::new(capacity))),
        }
    }

    /// Returns the grids for `key`, building them on first use.
    pub fn get_or_build(&self, key: GridKey) -> Result<Arc<YearGrids>> {
        // Entries are immutable once inserted, so a poisoned lock is still usable.
        let mut store = self.store.lock().unwrap_or_else(PoisonError::into_inner);

        if let Some(grids) = store.get(&key) {
            tracing::trace!(year = key.year, "Grid cache hit");
            return Ok(Arc::clone(grids));
        }

        tracing::debug!(year = key.year, "Grid cache miss");
        let grids = Arc::new(build_year(key)?);
        store.put(key, Arc::clone(&grids));
        Ok(grids)
    }

    /// Returns true if grids for `key` are already cached.
    pub fn contains(&self, key: &GridKey) -> bool {
        self.store
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .contains(key)
    }

    /// Number of cached years.
    pub fn len(&self) -> usize {
        self.store.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for GridCache {
    fn default() -> Self {
        Self::new(Self::DEFAULT_CAPACITY)
    }
}
