//! LRU (Least Recently Used) cache implementation
//!
//! Every entry lives in one arena node that is linked into two structures at
//! once: the chain of its hash bucket (lookup) and the recency list
//! (ordering and eviction). All mutation goes through [`LruCache`], which
//! keeps the two in step.

use tracing::{debug, trace};

use crate::config::CacheConfig;
use crate::entry::KeyValueEntry;
use crate::error::Result;
use crate::index::HashIndex;
use crate::node::{Arena, Node};
use crate::recency::RecencyList;
use crate::stats::{CacheStats, Event};

/// String key/value cache with fixed capacity and LRU eviction
///
/// Lookups take `&mut self` because a hit promotes the entry. For shared
/// access wrap the cache in [`SharedCache`](crate::SharedCache).
#[derive(Debug)]
pub struct LruCache {
    index: HashIndex,
    recency: RecencyList,
    arena: Arena,
    stats: CacheStats,
    capacity: usize,
    len: usize,
    count_update_as_hit: bool,
}

impl LruCache {
    /// Create an empty cache holding at most `capacity` entries
    ///
    /// # Errors
    /// * `InvalidConfiguration` - `capacity` is 0
    /// * `Allocation` - the bucket table could not be reserved
    pub fn new(capacity: usize) -> Result<Self> {
        Self::with_config(&CacheConfig::with_capacity(capacity))
    }

    /// Create an empty cache from `config`
    pub fn with_config(config: &CacheConfig) -> Result<Self> {
        config.validate()?;

        let cache = Self {
            index: HashIndex::with_buckets(config.capacity)?,
            recency: RecencyList::new(),
            arena: Arena::new(),
            stats: CacheStats::new(),
            capacity: config.capacity,
            len: 0,
            count_update_as_hit: config.count_update_as_hit,
        };
        debug!(capacity = config.capacity, "created LRU cache");
        Ok(cache)
    }

    /// Get a value and mark its entry most recently used
    ///
    /// Counts a hit or a miss. The returned view is only valid until the next
    /// mutating call.
    pub fn get(&mut self, key: &str) -> Option<&str> {
        let bucket = self.index.bucket_of(key);
        match self.index.find(&self.arena, bucket, key) {
            Some(idx) => {
                self.recency.move_to_front(&mut self.arena, idx);
                self.stats.record(Event::Hit);
                self.arena.get(idx).map(|node| node.entry.value())
            }
            None => {
                self.stats.record(Event::Miss);
                None
            }
        }
    }

    /// Get a value without promoting it or touching statistics
    pub fn peek(&self, key: &str) -> Option<&str> {
        let bucket = self.index.bucket_of(key);
        let idx = self.index.find(&self.arena, bucket, key)?;
        self.arena.get(idx).map(|node| node.entry.value())
    }

    /// Check for a key without promoting it or touching statistics
    pub fn contains(&self, key: &str) -> bool {
        self.peek(key).is_some()
    }

    /// Insert or overwrite `key`, marking it most recently used
    ///
    /// Inserting into a full cache evicts the least recently used entry.
    ///
    /// # Errors
    /// * `Allocation` - the entry could not be stored; the cache is unchanged
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let bucket = self.index.bucket_of(key);

        if let Some(idx) = self.index.find(&self.arena, bucket, key) {
            if let Some(node) = self.arena.get_mut(idx) {
                node.entry.set_value(value)?;
            }
            self.recency.move_to_front(&mut self.arena, idx);
            self.stats.record(if self.count_update_as_hit {
                Event::Hit
            } else {
                Event::Miss
            });
            return Ok(());
        }

        // Everything fallible happens before the first structural change
        let entry = KeyValueEntry::new(key, value)?;
        self.arena.reserve_slot()?;

        if self.len >= self.capacity {
            self.evict_lru();
        }

        let idx = self.arena.insert(Node::new(entry));
        self.index.insert(&mut self.arena, bucket, idx);
        self.recency.push_front(&mut self.arena, idx);
        self.len += 1;
        self.stats.record(Event::Insert);
        Ok(())
    }

    /// Remove a key from the cache, returning its value
    pub fn remove(&mut self, key: &str) -> Option<String> {
        let bucket = self.index.bucket_of(key);
        let idx = self.index.find(&self.arena, bucket, key)?;

        self.index.remove(&mut self.arena, bucket, idx);
        self.recency.unlink(&mut self.arena, idx);
        let node = self.arena.remove(idx)?;
        self.len -= 1;

        let (_, value) = node.entry.into_parts();
        Some(value)
    }

    /// Change the capacity, evicting least recently used entries if it shrinks
    ///
    /// A zero or unchanged capacity is ignored. The bucket table is rebuilt
    /// with `new_capacity` buckets.
    ///
    /// # Errors
    /// * `Allocation` - the new bucket table could not be reserved; the cache
    ///   is unchanged
    pub fn resize(&mut self, new_capacity: usize) -> Result<()> {
        if new_capacity == 0 || new_capacity == self.capacity {
            trace!(new_capacity, "ignoring resize");
            return Ok(());
        }

        let fresh = HashIndex::with_buckets(new_capacity)?;

        let mut evicted = 0usize;
        while self.len > new_capacity {
            if self.evict_lru().is_none() {
                break;
            }
            evicted += 1;
        }

        self.index.rehash(&mut self.arena, fresh);

        debug!(
            old_capacity = self.capacity,
            new_capacity, evicted, "resized LRU cache"
        );
        self.capacity = new_capacity;
        Ok(())
    }

    /// Snapshot of the hit/miss/insert/eviction counters
    pub fn stats(&self) -> CacheStats {
        self.stats
    }

    /// Zero all counters, leaving entries untouched
    pub fn reset_stats(&mut self) {
        self.stats.reset();
    }

    /// Get the current number of entries
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if the cache is empty
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Maximum number of entries
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Drop every entry; capacity and statistics are kept
    pub fn clear(&mut self) {
        let dropped = self.len;
        self.arena.clear();
        self.index.clear();
        self.recency.clear();
        self.len = 0;
        debug!(dropped, "cleared LRU cache");
    }

    /// Entries from most to least recently used, without promoting them
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            arena: &self.arena,
            next: self.recency.head(),
            remaining: self.len,
        }
    }

    /// Verify that the hash chains and the recency list describe the same
    /// node set and that every link is mutually consistent.
    #[doc(hidden)]
    pub fn check_invariants(&self) -> std::result::Result<(), String> {
        if self.len > self.capacity {
            return Err(format!("len {} exceeds capacity {}", self.len, self.capacity));
        }
        if self.index.bucket_count() != self.capacity {
            return Err(format!(
                "{} buckets for capacity {}",
                self.index.bucket_count(),
                self.capacity
            ));
        }
        if self.arena.live_count() != self.len {
            return Err(format!(
                "{} live nodes but len {}",
                self.arena.live_count(),
                self.len
            ));
        }
        if self.recency.head().is_none() != self.recency.tail().is_none() {
            return Err("head and tail disagree on emptiness".to_string());
        }

        let mut in_list = vec![false; self.arena.slot_count()];
        let mut prev = None;
        let mut current = self.recency.head();
        let mut count = 0;
        while let Some(idx) = current {
            let node = self
                .arena
                .get(idx)
                .ok_or_else(|| format!("recency list links to free slot {}", idx))?;
            if in_list[idx] {
                return Err(format!("recency list revisits slot {}", idx));
            }
            if node.prev != prev {
                return Err(format!("slot {} has a stale prev link", idx));
            }
            in_list[idx] = true;
            count += 1;
            prev = current;
            current = node.next;
        }
        if prev != self.recency.tail() {
            return Err("tail is not the last node of the recency list".to_string());
        }
        if count != self.len {
            return Err(format!("recency list holds {} nodes, len {}", count, self.len));
        }

        let mut chained = 0;
        for bucket in 0..self.index.bucket_count() {
            let mut prev = None;
            let mut current = self.index.head(bucket);
            while let Some(idx) = current {
                let node = self
                    .arena
                    .get(idx)
                    .ok_or_else(|| format!("bucket {} links to free slot {}", bucket, idx))?;
                if !in_list[idx] {
                    return Err(format!("slot {} is chained but not in the recency list", idx));
                }
                if self.index.bucket_of(node.entry.key()) != bucket {
                    return Err(format!(
                        "key {:?} chained in wrong bucket {}",
                        node.entry.key(),
                        bucket
                    ));
                }
                if node.chain_prev != prev {
                    return Err(format!("slot {} has a stale chain_prev link", idx));
                }
                chained += 1;
                if chained > self.len {
                    return Err(format!("bucket {} chain does not terminate", bucket));
                }
                prev = current;
                current = node.chain_next;
            }
        }
        if chained != self.len {
            return Err(format!("hash chains hold {} nodes, len {}", chained, self.len));
        }

        Ok(())
    }

    /// Unlink the recency tail from both structures and free it
    fn evict_lru(&mut self) -> Option<KeyValueEntry> {
        let idx = self.recency.evict_tail(&mut self.arena)?;

        // The evicted key may live in a different bucket than the one being inserted
        let bucket = match self.arena.get(idx) {
            Some(node) => self.index.bucket_of(node.entry.key()),
            None => return None,
        };
        self.index.remove(&mut self.arena, bucket, idx);

        let node = self.arena.remove(idx)?;
        self.len -= 1;
        self.stats.record(Event::Eviction);
        trace!(key = node.entry.key(), "evicted least recently used entry");
        Some(node.entry)
    }
}

/// Iterator over cache entries from most to least recently used
pub struct Iter<'a> {
    arena: &'a Arena,
    next: Option<usize>,
    remaining: usize,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a KeyValueEntry;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.arena.get(self.next?)?;
        self.next = node.next;
        self.remaining = self.remaining.saturating_sub(1);
        Some(&node.entry)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a LruCache {
    type Item = &'a KeyValueEntry;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
