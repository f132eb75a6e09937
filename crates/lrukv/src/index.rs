//! Chained hash index over arena nodes
//!
//! Buckets hold the handle of their chain head; chains are threaded through
//! the `chain_prev`/`chain_next` links of each node.

use crate::error::Result;
use crate::hash::{djb2, index_for};
use crate::node::Arena;

#[derive(Debug)]
pub(crate) struct HashIndex {
    buckets: Vec<Option<usize>>,
}

impl HashIndex {
    /// Allocate an empty table with `bucket_count` chains
    pub(crate) fn with_buckets(bucket_count: usize) -> Result<Self> {
        // Validates bucket_count before anything is reserved
        index_for("", bucket_count)?;

        let mut buckets = Vec::new();
        buckets.try_reserve_exact(bucket_count)?;
        buckets.resize(bucket_count, None);
        Ok(Self { buckets })
    }

    pub(crate) fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Bucket that `key` belongs to under the current bucket count
    pub(crate) fn bucket_of(&self, key: &str) -> usize {
        // with_buckets rejects empty tables
        (djb2(key) % self.buckets.len() as u64) as usize
    }

    /// Handle of the chain head for `bucket`
    pub(crate) fn head(&self, bucket: usize) -> Option<usize> {
        self.buckets[bucket]
    }

    /// Walk the chain of `bucket` for an exact key match
    pub(crate) fn find(&self, arena: &Arena, bucket: usize, key: &str) -> Option<usize> {
        let mut current = self.buckets[bucket];
        while let Some(idx) = current {
            let node = arena.get(idx)?;
            if node.entry.matches_key(key) {
                return Some(idx);
            }
            current = node.chain_next;
        }
        None
    }

    /// Prepend `idx` to the chain of `bucket`
    pub(crate) fn insert(&mut self, arena: &mut Arena, bucket: usize, idx: usize) {
        let old_head = self.buckets[bucket];

        if let Some(node) = arena.get_mut(idx) {
            node.chain_prev = None;
            node.chain_next = old_head;
        }

        if let Some(head_idx) = old_head {
            if let Some(head) = arena.get_mut(head_idx) {
                head.chain_prev = Some(idx);
            }
        }

        self.buckets[bucket] = Some(idx);
    }

    /// Unlink `idx` from the chain of `bucket`
    pub(crate) fn remove(&mut self, arena: &mut Arena, bucket: usize, idx: usize) {
        let (prev, next) = if let Some(node) = arena.get_mut(idx) {
            let links = (node.chain_prev, node.chain_next);
            node.chain_prev = None;
            node.chain_next = None;
            links
        } else {
            return;
        };

        match prev {
            Some(prev_idx) => {
                if let Some(prev_node) = arena.get_mut(prev_idx) {
                    prev_node.chain_next = next;
                }
            }
            None => {
                debug_assert_eq!(self.buckets[bucket], Some(idx));
                self.buckets[bucket] = next;
            }
        }

        if let Some(next_idx) = next {
            if let Some(next_node) = arena.get_mut(next_idx) {
                next_node.chain_prev = prev;
            }
        }
    }

    /// Re-thread every live node into `fresh` and adopt it as the table.
    ///
    /// `fresh` must be empty. Old chain links are overwritten, so this must
    /// only run once the live node set is final.
    pub(crate) fn rehash(&mut self, arena: &mut Arena, mut fresh: HashIndex) {
        for idx in 0..arena.slot_count() {
            let bucket = match arena.get(idx) {
                Some(node) => fresh.bucket_of(node.entry.key()),
                None => continue,
            };
            fresh.insert(arena, bucket, idx);
        }
        *self = fresh;
    }

    pub(crate) fn clear(&mut self) {
        self.buckets.iter_mut().for_each(|head| *head = None);
    }
}
