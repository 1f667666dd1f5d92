//! Staggered reveal of a container's children.
//!
//! Once a container is first seen, its children are revealed one by one
//! in DOM order, each `step` after the previous one. The sequence runs at
//! most once per container.

use std::time::Duration;

pub const REVEAL_STEP: Duration = Duration::from_millis(100);

/// Per-child delay offsets.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct RevealSchedule {
    pub base: Duration,
    pub step: Duration,
}

impl Default for RevealSchedule {
    fn default() -> Self {
        Self {
            base: Duration::ZERO,
            step: REVEAL_STEP,
        }
    }
}

impl RevealSchedule {
    pub fn new(base: Duration, step: Duration) -> Self {
        Self { base, step }
    }

    /// Delay from the trigger until child `index` is revealed.
    pub fn offset(&self, index: usize) -> Duration {
        self.base + self.step * index as u32
    }

    pub fn offsets(&self, count: usize) -> Vec<Duration> {
        (0..count).map(|i| self.offset(i)).collect()
    }

    /// Gap to wait before revealing `index`, relative to the previous child.
    pub fn gap_before(&self, index: usize) -> Duration {
        if index == 0 {
            self.base
        } else {
            self.step
        }
    }
}

/// Progress of one container's reveal cascade.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RevealSequencer {
    started: bool,
    total: usize,
    revealed: usize,
}

impl RevealSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm the cascade for `count` children. Only the first call counts.
    pub fn start(&mut self, count: usize) -> bool {
        if self.started {
            return false;
        }
        self.started = true;
        self.total = count;
        true
    }

    /// Reveal the next child. Returns its index, or `None` when done.
    pub fn advance(&mut self) -> Option<usize> {
        if !self.started || self.revealed >= self.total {
            return None;
        }
        let index = self.revealed;
        self.revealed += 1;
        Some(index)
    }

    pub fn revealed(&self) -> usize {
        self.revealed
    }

    pub fn is_revealed(&self, index: usize) -> bool {
        index < self.revealed
    }

    pub fn is_complete(&self) -> bool {
        self.started && self.revealed >= self.total
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offsets_grow_by_step() {
        let schedule = RevealSchedule::default();
        assert_eq!(
            schedule.offsets(4),
            vec![
                Duration::ZERO,
                Duration::from_millis(100),
                Duration::from_millis(200),
                Duration::from_millis(300),
            ]
        );
    }

    #[test]
    fn base_offset_applies_to_first_child() {
        let schedule = RevealSchedule::new(Duration::from_millis(200), Duration::from_millis(50));
        assert_eq!(schedule.offset(0), Duration::from_millis(200));
        assert_eq!(schedule.offset(2), Duration::from_millis(300));
        assert_eq!(schedule.gap_before(0), Duration::from_millis(200));
        assert_eq!(schedule.gap_before(5), Duration::from_millis(50));
    }

    #[test]
    fn sequencer_reveals_in_order_once() {
        let mut seq = RevealSequencer::new();
        assert_eq!(seq.advance(), None);
        assert!(seq.start(3));
        assert!(!seq.start(10));

        assert_eq!(seq.advance(), Some(0));
        assert!(seq.is_revealed(0));
        assert!(!seq.is_revealed(1));
        assert_eq!(seq.advance(), Some(1));
        assert_eq!(seq.advance(), Some(2));
        assert_eq!(seq.advance(), None);
        assert!(seq.is_complete());
        assert_eq!(seq.revealed(), 3);
    }

    #[test]
    fn empty_container_completes_immediately() {
        let mut seq = RevealSequencer::new();
        assert!(seq.start(0));
        assert!(seq.is_complete());
        assert_eq!(seq.advance(), None);
    }
}
