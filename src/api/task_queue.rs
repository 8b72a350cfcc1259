use std::cmp::Ordering;
use std::collections::BinaryHeap;

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

/// Deferred controller work.
///
/// Every task is idempotent and scoped to the slide it names, so a task that
/// fires after a newer transition is harmless.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeckTask {
    /// Sweep `TransitioningOut` from all slides.
    ClearTransitioningOut { generation: u64 },
    /// Second phase of the staged reveal.
    RevealEntryElements { slide: usize },
    /// Full entry effects for a slide reached without a transition (startup).
    EnterSlide { slide: usize },
    RecheckLayout { slide: usize },
}

#[derive(Debug)]
struct Scheduled<T> {
    due_ms: OrderedFloat<f64>,
    seq: u64,
    task: T,
}

impl<T> PartialEq for Scheduled<T> {
    fn eq(&self, other: &Self) -> bool {
        self.due_ms == other.due_ms && self.seq == other.seq
    }
}

impl<T> Eq for Scheduled<T> {}

impl<T> PartialOrd for Scheduled<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Scheduled<T> {
    // Reversed so the max-heap yields the earliest due time, then FIFO.
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .due_ms
            .cmp(&self.due_ms)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// Cooperative timer queue ordered by due time, FIFO among equal due times.
#[derive(Debug)]
pub struct TaskQueue<T> {
    heap: BinaryHeap<Scheduled<T>>,
    next_seq: u64,
}

impl<T> Default for TaskQueue<T> {
    fn default() -> Self {
        Self {
            heap: BinaryHeap::new(),
            next_seq: 0,
        }
    }
}

impl<T> TaskQueue<T> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, due_ms: f64, task: T) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Scheduled {
            due_ms: OrderedFloat(due_ms),
            seq,
            task,
        });
    }

    /// Removes and returns the earliest task due at or before `now_ms`.
    pub fn pop_due(&mut self, now_ms: f64) -> Option<(f64, T)> {
        if self.heap.peek()?.due_ms.0 > now_ms {
            return None;
        }
        self.heap
            .pop()
            .map(|scheduled| (scheduled.due_ms.0, scheduled.task))
    }

    #[must_use]
    pub fn next_due_ms(&self) -> Option<f64> {
        self.heap.peek().map(|scheduled| scheduled.due_ms.0)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    #[must_use]
    pub fn count_matching(&self, predicate: impl Fn(&T) -> bool) -> usize {
        self.heap
            .iter()
            .filter(|scheduled| predicate(&scheduled.task))
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::TaskQueue;

    #[test]
    fn pops_in_due_order_then_fifo() {
        let mut queue = TaskQueue::new();
        queue.schedule(500.0, "cleanup");
        queue.schedule(100.0, "reveal-a");
        queue.schedule(100.0, "reveal-b");

        assert_eq!(queue.pop_due(50.0), None);
        assert_eq!(queue.pop_due(600.0), Some((100.0, "reveal-a")));
        assert_eq!(queue.pop_due(600.0), Some((100.0, "reveal-b")));
        assert_eq!(queue.pop_due(600.0), Some((500.0, "cleanup")));
        assert!(queue.is_empty());
    }

    #[test]
    fn next_due_tracks_earliest_entry() {
        let mut queue = TaskQueue::new();
        assert_eq!(queue.next_due_ms(), None);
        queue.schedule(30.0, 1);
        queue.schedule(10.0, 2);
        assert_eq!(queue.next_due_ms(), Some(10.0));
        assert_eq!(queue.count_matching(|task| *task > 1), 1);
    }
}
