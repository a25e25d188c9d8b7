//! Min-priority queue used by the weighted search.
//!
//! Entries are stored in a min-heap keyed by `(priority, insertion_order)`.
//! Lower priorities are dequeued first; ties are broken by insertion order
//! (FIFO). There is no decrease-key: the same item may be held several times
//! with different priorities and callers discard the stale copies.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::error::EmptyQueueError;

/// An entry in the queue.
#[derive(Debug)]
struct Entry<T> {
    item: T,
    priority: i32,
    /// Monotonically increasing counter used to break ties.
    seq: u64,
}

impl<T> PartialEq for Entry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.priority == other.priority && self.seq == other.seq
    }
}

impl<T> Eq for Entry<T> {}

impl<T> PartialOrd for Entry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Entry<T> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Wrapped in Reverse for the BinaryHeap: smaller priority first,
        // then smaller seq.
        self.priority
            .cmp(&other.priority)
            .then_with(|| self.seq.cmp(&other.seq))
    }
}

/// A stable min-priority queue.
pub struct PriorityQueue<T> {
    heap: BinaryHeap<Reverse<Entry<T>>>,
    seq: u64,
}

impl<T> PriorityQueue<T> {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            seq: 0,
        }
    }

    /// Insert `item` with the given priority.
    pub fn enqueue(&mut self, item: T, priority: i32) {
        let seq = self.seq;
        self.seq += 1;
        self.heap.push(Reverse(Entry {
            item,
            priority,
            seq,
        }));
    }

    /// Remove the entry with the lowest priority (ties broken FIFO).
    pub fn dequeue(&mut self) -> Result<(T, i32), EmptyQueueError> {
        self.heap
            .pop()
            .map(|Reverse(entry)| (entry.item, entry.priority))
            .ok_or(EmptyQueueError)
    }

    /// Whether the queue is empty.
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Number of entries in the queue, duplicates included.
    pub fn len(&self) -> usize {
        self.heap.len()
    }
}

impl<T> Default for PriorityQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}
