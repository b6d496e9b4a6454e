//! Bounded newest-first history
//!
//! Chat and output facts append rather than replace. The original client
//! retained them forever; here retention is a fixed-size ring that evicts
//! oldest-first. Pushing a value equal to the current newest entry is a
//! no-op, which is what makes applying the same append fact twice
//! idempotent across reconnect replays.

use std::collections::VecDeque;

#[derive(Debug, Clone, PartialEq)]
pub struct History<T: PartialEq> {
    entries: VecDeque<T>,
    cap: usize,
}

impl<T: PartialEq> History<T> {
    pub fn new(cap: usize) -> Self {
        Self {
            entries: VecDeque::new(),
            cap,
        }
    }

    /// Prepend an entry. Consecutive duplicates are suppressed; when the
    /// ring is full the oldest entry is evicted.
    pub fn push(&mut self, entry: T) {
        if self.entries.front() == Some(&entry) {
            return;
        }
        self.entries.push_front(entry);
        while self.entries.len() > self.cap {
            self.entries.pop_back();
        }
    }

    /// Iterate newest-first.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.entries.iter()
    }

    pub fn newest(&self) -> Option<&T> {
        self.entries.front()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entries_iterate_newest_first() {
        let mut history = History::new(10);
        history.push("a");
        history.push("b");
        history.push("c");
        let ordered: Vec<&&str> = history.iter().collect();
        assert_eq!(ordered, vec![&"c", &"b", &"a"]);
    }

    #[test]
    fn consecutive_duplicates_are_suppressed() {
        let mut history = History::new(10);
        history.push("a");
        history.push("a");
        assert_eq!(history.len(), 1);

        // Non-consecutive repeats are legitimate entries.
        history.push("b");
        history.push("a");
        assert_eq!(history.len(), 3);
    }

    #[test]
    fn eviction_is_oldest_first() {
        let mut history = History::new(3);
        for n in 0..5 {
            history.push(n);
        }
        let kept: Vec<&i32> = history.iter().collect();
        assert_eq!(kept, vec![&4, &3, &2]);
    }
}
