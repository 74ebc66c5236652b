//! Schedule state and request modes.

use std::fmt;

use ru_core::Tick;

// ── ScheduleState ─────────────────────────────────────────────────────────────

/// Where the scheduler stands.
///
/// # Legacy encoding
///
/// Saves written by earlier versions store a single integer:
///
/// | Integer | State            |
/// |---------|------------------|
/// | `0`     | `NotScheduled`   |
/// | `-1`    | `InProgress`     |
/// | `T > 0` | `ScheduledAt(T)` |
///
/// [`to_legacy`](Self::to_legacy) / [`from_legacy`](Self::from_legacy) keep
/// that format readable.  A fire tick is always at least one tick after the
/// request, so `ScheduledAt(T0)` never occurs and the encoding is lossless.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScheduleState {
    /// No fire time pending.
    #[default]
    NotScheduled,
    /// An event is resolving; no new event may be scheduled except by force.
    InProgress,
    /// The next event fires at this absolute tick.
    ScheduledAt(Tick),
}

impl ScheduleState {
    pub fn to_legacy(self) -> i64 {
        match self {
            ScheduleState::NotScheduled   => 0,
            ScheduleState::InProgress     => -1,
            ScheduleState::ScheduledAt(t) => i64::try_from(t.0).unwrap_or(i64::MAX),
        }
    }

    pub fn from_legacy(value: i64) -> Self {
        match value {
            0          => ScheduleState::NotScheduled,
            v if v < 0 => ScheduleState::InProgress,
            v          => ScheduleState::ScheduledAt(Tick(v as u64)),
        }
    }

    /// The pending fire tick, if any.
    #[inline]
    pub fn fire_tick(self) -> Option<Tick> {
        match self {
            ScheduleState::ScheduledAt(t) => Some(t),
            _ => None,
        }
    }

    /// `true` if a fire tick exists and `now` has reached it.
    #[inline]
    pub fn is_due(self, now: Tick) -> bool {
        matches!(self, ScheduleState::ScheduledAt(t) if now >= t)
    }
}

impl fmt::Display for ScheduleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScheduleState::NotScheduled   => f.write_str("not scheduled"),
            ScheduleState::InProgress     => f.write_str("in progress"),
            ScheduleState::ScheduledAt(t) => write!(f, "scheduled at {t}"),
        }
    }
}

// ── ScheduleMode ──────────────────────────────────────────────────────────────

/// Why a schedule is being requested.
///
/// Modes only relax guards and quiet messages; the transition rules are the
/// same for all of them.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
pub enum ScheduleMode {
    #[default]
    Normal,
    /// Startup or load reconciliation.  Suppresses messages.
    Init,
    /// Interval settings changed.  Replaces a pending fire tick.
    SettingsChanged,
    /// Ignores both the in-progress and the pending guard.
    Forced,
}

impl ScheduleMode {
    /// Messages are suppressed in this mode.
    #[inline]
    pub fn is_quiet(self) -> bool {
        self == ScheduleMode::Init
    }

    /// May replace an existing future `ScheduledAt`.
    #[inline]
    pub fn overrides_pending(self) -> bool {
        matches!(self, ScheduleMode::Forced | ScheduleMode::SettingsChanged)
    }

    /// May schedule while an event is in progress.
    #[inline]
    pub fn overrides_in_progress(self) -> bool {
        self == ScheduleMode::Forced
    }
}
