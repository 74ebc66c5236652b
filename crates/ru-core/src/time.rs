//! Game time model.
//!
//! # Design
//!
//! Time is a monotonically increasing `Tick` counter owned by the host.  The
//! director never advances it on its own; the host reports the current tick
//! through `GameClock::set` once per simulation step.
//!
//! Intervals are configured in whole days and converted with the host's
//! fixed calendar:
//!
//!   ticks = days * TICKS_PER_DAY
//!
//! Using an integer tick as the canonical unit keeps every schedule
//! comparison exact.

use std::fmt;

/// Ticks in one in-game day.
pub const TICKS_PER_DAY: u64 = 60_000;

/// Days in one quadrum (a quarter of the in-game year).
pub const DAYS_PER_QUADRUM: u32 = 15;

/// Days in one in-game year.
pub const DAYS_PER_YEAR: u32 = 60;

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute game tick.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// Return the tick `n` steps after `self`.
    #[inline]
    pub fn offset(self, n: u64) -> Tick {
        Tick(self.0.saturating_add(n))
    }

    /// Ticks from `self` until `later`, or 0 if `later` is not in the future.
    #[inline]
    pub fn until(self, later: Tick) -> u64 {
        later.0.saturating_sub(self.0)
    }
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u64) -> Tick {
        self.offset(rhs)
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

/// Convert whole days into ticks.
#[inline]
pub fn days_to_ticks(days: u32) -> u64 {
    days as u64 * TICKS_PER_DAY
}

/// Format a tick span as fractional days, e.g. `"3.25 days"`.
pub fn format_days(ticks: u64) -> String {
    format!("{:.2} days", ticks as f64 / TICKS_PER_DAY as f64)
}

// ── GameClock ─────────────────────────────────────────────────────────────────

/// The director's view of the host clock.
///
/// The host is the only source of truth; `GameClock` caches the last tick it
/// reported so pool operations called outside a tick callback (admissions,
/// returns) still know "now".
#[derive(Clone, Debug, Default)]
pub struct GameClock {
    current_tick: Tick,
}

impl GameClock {
    pub fn new(start: Tick) -> Self {
        Self { current_tick: start }
    }

    #[inline]
    pub fn now(&self) -> Tick {
        self.current_tick
    }

    /// Record the tick most recently reported by the host.
    #[inline]
    pub fn set(&mut self, tick: Tick) {
        self.current_tick = tick;
    }

    /// Advance the clock by one tick.  Used by hosts and tests that step the
    /// clock themselves.
    #[inline]
    pub fn advance(&mut self) {
        self.current_tick = self.current_tick.offset(1);
    }

    /// Break the current tick into (day, hour) components from game start.
    pub fn elapsed_dh(&self) -> (u64, u32) {
        let t = self.current_tick.0;
        let day = t / TICKS_PER_DAY;
        let hour = ((t % TICKS_PER_DAY) * 24 / TICKS_PER_DAY) as u32;
        (day, hour)
    }
}

impl fmt::Display for GameClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (d, h) = self.elapsed_dh();
        write!(f, "{} (day {} {:02}h)", self.current_tick, d, h)
    }
}
