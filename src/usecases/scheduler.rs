use std::{cmp::Ordering, collections::BinaryHeap};

use crate::domain::effects::ScheduledTask;

#[derive(Debug, Clone, PartialEq, Eq)]
struct Entry {
    due_ms: i64,
    seq: u64,
    task: ScheduledTask,
}

impl Ord for Entry {
    // Reversed so the max-heap pops the earliest deadline; `seq` keeps FIFO order on ties.
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .due_ms
            .cmp(&self.due_ms)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Deferred tasks keyed by due time in milliseconds.
#[derive(Debug, Default)]
pub struct TaskScheduler {
    queue: BinaryHeap<Entry>,
    next_seq: u64,
}

impl TaskScheduler {
    pub fn schedule(&mut self, due_ms: i64, task: ScheduledTask) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.queue.push(Entry { due_ms, seq, task });
    }

    /// Removes and returns the earliest task due at or before `now_ms`.
    pub fn pop_due(&mut self, now_ms: i64) -> Option<ScheduledTask> {
        if self.next_due()? > now_ms {
            return None;
        }

        self.queue.pop().map(|entry| entry.task)
    }

    pub fn next_due(&self) -> Option<i64> {
        self.queue.peek().map(|entry| entry.due_ms)
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clear(timestamp: i64) -> ScheduledTask {
        ScheduledTask::ClearTypingStatus {
            chat_id: 1,
            thread_id: -1,
            timestamp,
        }
    }

    #[test]
    fn pops_tasks_in_deadline_then_insertion_order() {
        let mut scheduler = TaskScheduler::default();
        scheduler.schedule(300, clear(3));
        scheduler.schedule(100, clear(1));
        scheduler.schedule(100, clear(2));

        assert_eq!(scheduler.next_due(), Some(100));
        assert_eq!(scheduler.pop_due(250), Some(clear(1)));
        assert_eq!(scheduler.pop_due(250), Some(clear(2)));
        assert_eq!(scheduler.pop_due(250), None);
        assert_eq!(scheduler.len(), 1);
    }

    #[test]
    fn nothing_is_due_before_its_deadline() {
        let mut scheduler = TaskScheduler::default();
        scheduler.schedule(6_000, clear(0));

        assert_eq!(scheduler.pop_due(5_999), None);
        assert_eq!(scheduler.pop_due(6_000), Some(clear(0)));
        assert!(scheduler.is_empty());
    }
}
