//! Min-ordered task extraction queue.
//!
//! A thin wrapper over `BinaryHeap` keyed by task priority, lower value
//! extracted first. The underlying heap is not stable, so a monotonic
//! insertion sequence number serves as the secondary key: equal-priority
//! tasks come out in insertion order. Callers should still treat tie
//! order as an implementation detail rather than a contract.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::models::Task;

#[derive(Debug, Clone)]
struct Entry {
    priority: i32,
    seq: u64,
    task: Task,
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.priority == other.priority && self.seq == other.seq
    }
}

impl Eq for Entry {}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed so the max-heap pops the lowest priority value first;
        // among equals, the earliest insertion.
        other
            .priority
            .cmp(&self.priority)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// Priority queue over tasks (lower `priority` extracted first).
#[derive(Debug, Clone, Default)]
pub struct TaskQueue {
    heap: BinaryHeap<Entry>,
    next_seq: u64,
}

impl TaskQueue {
    /// Creates an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Pushes a task. O(log n).
    pub fn push(&mut self, task: Task) {
        let entry = Entry {
            priority: task.priority,
            seq: self.next_seq,
            task,
        };
        self.next_seq += 1;
        self.heap.push(entry);
    }

    /// Pops the lowest-priority-value task. O(log n).
    ///
    /// Returns `None` when the queue is empty.
    pub fn pop_min(&mut self) -> Option<Task> {
        self.heap.pop().map(|entry| entry.task)
    }

    /// Number of queued tasks.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Whether the queue is empty.
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveDateTime};

    fn dt() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 2)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    fn task(name: &str, priority: i32) -> Task {
        Task::new(name, dt(), 30).with_priority(priority)
    }

    #[test]
    fn test_pop_min_order() {
        let mut q = TaskQueue::new();
        q.push(task("low", 5));
        q.push(task("high", 1));
        q.push(task("mid", 3));

        assert_eq!(q.pop_min().unwrap().name, "high");
        assert_eq!(q.pop_min().unwrap().name, "mid");
        assert_eq!(q.pop_min().unwrap().name, "low");
        assert!(q.pop_min().is_none());
    }

    #[test]
    fn test_equal_priority_insertion_order() {
        let mut q = TaskQueue::new();
        q.push(task("first", 2));
        q.push(task("second", 2));
        q.push(task("third", 2));

        assert_eq!(q.pop_min().unwrap().name, "first");
        assert_eq!(q.pop_min().unwrap().name, "second");
        assert_eq!(q.pop_min().unwrap().name, "third");
    }

    #[test]
    fn test_len_and_empty() {
        let mut q = TaskQueue::new();
        assert!(q.is_empty());
        q.push(task("a", 1));
        q.push(task("b", 2));
        assert_eq!(q.len(), 2);
        q.pop_min();
        assert_eq!(q.len(), 1);
    }
}
