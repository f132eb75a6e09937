//! SharedCache: one exclusive lock around an LruCache

use std::sync::Arc;
use parking_lot::Mutex;

use crate::config::CacheConfig;
use crate::error::Result;
use crate::lru::LruCache;
use crate::stats::CacheStats;

/// Cloneable handle to a single [`LruCache`] behind a mutex
///
/// Every call locks the whole cache for its duration. Values are returned as
/// owned `String`s because a borrowed view cannot outlive the lock.
#[derive(Debug, Clone)]
pub struct SharedCache {
    inner: Arc<Mutex<LruCache>>,
}

impl SharedCache {
    /// Create a new shared cache with the given capacity
    pub fn new(capacity: usize) -> Result<Self> {
        Ok(Self::from_cache(LruCache::new(capacity)?))
    }

    /// Create a new shared cache from `config`
    pub fn with_config(config: &CacheConfig) -> Result<Self> {
        Ok(Self::from_cache(LruCache::with_config(config)?))
    }

    /// Take ownership of an existing cache
    pub fn from_cache(cache: LruCache) -> Self {
        Self {
            inner: Arc::new(Mutex::new(cache)),
        }
    }

    /// Get a copy of the value, promoting the entry
    pub fn get(&self, key: &str) -> Option<String> {
        self.inner.lock().get(key).map(str::to_owned)
    }

    /// Insert or overwrite a value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        self.inner.lock().set(key, value)
    }

    /// Remove a key, returning its value
    pub fn remove(&self, key: &str) -> Option<String> {
        self.inner.lock().remove(key)
    }

    /// Change the capacity
    pub fn resize(&self, new_capacity: usize) -> Result<()> {
        self.inner.lock().resize(new_capacity)
    }

    /// Get cache statistics
    pub fn stats(&self) -> CacheStats {
        self.inner.lock().stats()
    }

    /// Zero all counters
    pub fn reset_stats(&self) {
        self.inner.lock().reset_stats();
    }

    /// Get current cache size
    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    /// Check if the cache is empty
    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    /// Get cache capacity
    pub fn capacity(&self) -> usize {
        self.inner.lock().capacity()
    }

    /// Run `f` with the lock held, for multi-step updates
    pub fn with_lock<R>(&self, f: impl FnOnce(&mut LruCache) -> R) -> R {
        let mut cache = self.inner.lock();
        f(&mut cache)
    }
}
