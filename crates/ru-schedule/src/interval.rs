//! Spacing between consecutive events.

use ru_core::{days_to_ticks, RandomSource, Tick};

/// The `[min, max)` window, in ticks, from which the gap to the next event is
/// drawn.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct IntervalConfig {
    pub min_ticks: u64,
    pub max_ticks: u64,
}

impl IntervalConfig {
    pub fn new(min_ticks: u64, max_ticks: u64) -> Self {
        Self { min_ticks, max_ticks }
    }

    pub fn from_days(min_days: u32, max_days: u32) -> Self {
        Self::new(days_to_ticks(min_days), days_to_ticks(max_days))
    }

    /// Draw the next fire tick after `now`.
    ///
    /// `min_ticks` is clamped to at least 1 so the result is always in the
    /// future.  A window with `max <= min` collapses to `min`.
    pub fn sample<R: RandomSource + ?Sized>(&self, now: Tick, rng: &mut R) -> Tick {
        let min = self.min_ticks.max(1);
        let max = self.max_ticks;
        let gap = if max > min {
            let low = i64::try_from(min).unwrap_or(i64::MAX);
            let high = i64::try_from(max).unwrap_or(i64::MAX);
            (rng.random_int(low, high).max(low)) as u64
        } else {
            min
        };
        now.offset(gap)
    }
}
