//! Staggered reveal of the code panel
//!
//! Line `i` of the active block appears `i * line_delay` after the block was
//! selected. Selecting any step (the same one included) restarts from line 0;
//! the previous block's progress is dropped, never resumed.

use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct Reveal {
    generation: u64,
    started: Instant,
    line_delay: Duration,
}

impl Reveal {
    pub fn new(generation: u64, line_delay: Duration, now: Instant) -> Self {
        Reveal {
            generation,
            started: now,
            line_delay,
        }
    }

    /// Restart if the viewer's selection changed since the last call
    pub fn sync(&mut self, generation: u64, now: Instant) {
        if generation != self.generation {
            self.generation = generation;
            self.started = now;
        }
    }

    /// Play the current block again from its first line
    pub fn restart(&mut self, now: Instant) {
        self.started = now;
    }

    /// How many of `total` lines are on screen at `now`
    pub fn visible_lines(&self, total: usize, now: Instant) -> usize {
        if self.line_delay.is_zero() {
            return total;
        }
        let elapsed = now.saturating_duration_since(self.started);
        let revealed = elapsed.as_nanos() / self.line_delay.as_nanos() + 1;
        usize::try_from(revealed).map_or(total, |n| n.min(total))
    }

    pub fn is_complete(&self, total: usize, now: Instant) -> bool {
        self.visible_lines(total, now) >= total
    }
}
