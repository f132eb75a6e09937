//! Node arena shared by the hash index and the recency list
//!
//! Each node carries two independent link pairs: `prev`/`next` for the
//! recency list and `chain_prev`/`chain_next` for its hash bucket chain.
//! Links are arena handles, so neither structure owns a node.

use crate::entry::KeyValueEntry;
use crate::error::Result;

/// Cache node linked into one bucket chain and the recency list
#[derive(Debug)]
pub(crate) struct Node {
    pub(crate) entry: KeyValueEntry,
    pub(crate) prev: Option<usize>,
    pub(crate) next: Option<usize>,
    pub(crate) chain_prev: Option<usize>,
    pub(crate) chain_next: Option<usize>,
}

impl Node {
    pub(crate) fn new(entry: KeyValueEntry) -> Self {
        Self {
            entry,
            prev: None,
            next: None,
            chain_prev: None,
            chain_next: None,
        }
    }
}

/// Slot storage for nodes with handle reuse
#[derive(Debug, Default)]
pub(crate) struct Arena {
    nodes: Vec<Option<Node>>,
    free_list: Vec<usize>,
}

impl Arena {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Make sure the next [`insert`](Self::insert) and any later
    /// [`remove`](Self::remove) cannot allocate.
    pub(crate) fn reserve_slot(&mut self) -> Result<()> {
        if self.free_list.is_empty() {
            self.nodes.try_reserve(1)?;
            let wanted = self.nodes.len() + 1;
            if self.free_list.capacity() < wanted {
                self.free_list.try_reserve(wanted - self.free_list.len())?;
            }
        }
        Ok(())
    }

    /// Store `node` and return its handle. Call [`reserve_slot`](Self::reserve_slot) first.
    pub(crate) fn insert(&mut self, node: Node) -> usize {
        if let Some(idx) = self.free_list.pop() {
            self.nodes[idx] = Some(node);
            idx
        } else {
            let idx = self.nodes.len();
            self.nodes.push(Some(node));
            idx
        }
    }

    /// Take the node out of its slot and recycle the handle
    pub(crate) fn remove(&mut self, idx: usize) -> Option<Node> {
        let node = self.nodes.get_mut(idx)?.take()?;
        self.free_list.push(idx);
        Some(node)
    }

    pub(crate) fn get(&self, idx: usize) -> Option<&Node> {
        self.nodes.get(idx).and_then(Option::as_ref)
    }

    pub(crate) fn get_mut(&mut self, idx: usize) -> Option<&mut Node> {
        self.nodes.get_mut(idx).and_then(Option::as_mut)
    }

    /// Number of slots, live or free. Handles are always below this.
    pub(crate) fn slot_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of live nodes
    pub(crate) fn live_count(&self) -> usize {
        self.nodes.len() - self.free_list.len()
    }

    pub(crate) fn clear(&mut self) {
        self.nodes.clear();
        self.free_list.clear();
    }
}
