//! Recency list: most-recently-used at `head`, least at `tail`
//!
//! Threaded through the `prev`/`next` links of arena nodes. The list never
//! frees nodes; detached handles go back to the caller.

use crate::node::Arena;

#[derive(Debug, Default)]
pub(crate) struct RecencyList {
    head: Option<usize>,
    tail: Option<usize>,
}

impl RecencyList {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn head(&self) -> Option<usize> {
        self.head
    }

    pub(crate) fn tail(&self) -> Option<usize> {
        self.tail
    }

    /// Link a detached node in as the new head
    pub(crate) fn push_front(&mut self, arena: &mut Arena, idx: usize) {
        if let Some(node) = arena.get_mut(idx) {
            node.prev = None;
            node.next = self.head;
        }

        if let Some(head_idx) = self.head {
            if let Some(head) = arena.get_mut(head_idx) {
                head.prev = Some(idx);
            }
        }

        self.head = Some(idx);
        if self.tail.is_none() {
            self.tail = Some(idx);
        }
    }

    pub(crate) fn move_to_front(&mut self, arena: &mut Arena, idx: usize) {
        if self.head == Some(idx) {
            return; // Already at front
        }

        self.unlink(arena, idx);
        self.push_front(arena, idx);
    }

    /// Detach `idx`, patching its neighbours and the head/tail pointers
    pub(crate) fn unlink(&mut self, arena: &mut Arena, idx: usize) {
        let (prev, next) = if let Some(node) = arena.get_mut(idx) {
            let links = (node.prev, node.next);
            node.prev = None;
            node.next = None;
            links
        } else {
            return;
        };

        match prev {
            Some(prev_idx) => {
                if let Some(prev_node) = arena.get_mut(prev_idx) {
                    prev_node.next = next;
                }
            }
            None => {
                self.head = next;
            }
        }

        match next {
            Some(next_idx) => {
                if let Some(next_node) = arena.get_mut(next_idx) {
                    next_node.prev = prev;
                }
            }
            None => {
                self.tail = prev;
            }
        }
    }

    /// Detach and return the least-recently-used node
    pub(crate) fn evict_tail(&mut self, arena: &mut Arena) -> Option<usize> {
        let tail_idx = self.tail?;
        self.unlink(arena, tail_idx);
        Some(tail_idx)
    }

    pub(crate) fn clear(&mut self) {
        self.head = None;
        self.tail = None;
    }
}
