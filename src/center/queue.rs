//! Tutoring queue ordered by priority with first-come tie-breaking

use std::collections::BinaryHeap;

use crate::events::StudentId;

/// A student waiting to be claimed by a tutor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueuedStudent {
    pub student_id: StudentId,
    /// Help count at admission; lower values are served first
    pub priority: u32,
    /// Insertion counter; among equal priorities, lower pops first
    seq: u64,
}

impl Ord for QueuedStudent {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // BinaryHeap is a max-heap; invert so the most urgent entry surfaces
        other
            .priority
            .cmp(&self.priority)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for QueuedStudent {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Ordered multiset of waiting students keyed by `(priority, seq)`
///
/// `seq` is assigned at insertion, so students admitted with equal priority
/// are dispatched in admission order no matter how inserts and pops
/// interleave.
#[derive(Debug, Default)]
pub struct SessionQueue {
    heap: BinaryHeap<QueuedStudent>,
    next_seq: u64,
}

impl SessionQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a student with the given priority
    pub fn insert(&mut self, student_id: StudentId, priority: u32) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(QueuedStudent {
            student_id,
            priority,
            seq,
        });
    }

    /// Remove and return the least entry by `(priority, seq)`
    pub fn pop_min(&mut self) -> Option<QueuedStudent> {
        self.heap.pop()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }
}
