//! The `Scheduler` state machine.

use ru_core::{RandomSource, Tick};

use crate::{IntervalConfig, ScheduleMode, ScheduleState};

/// What a [`Scheduler::request`] call did.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum ScheduleOutcome {
    /// The pool is empty; the scheduler is now `NotScheduled`.
    Suspended,
    /// An event is in progress and the mode may not interrupt it.
    Busy,
    /// A future fire tick already exists and the mode may not replace it.
    AlreadyScheduled(Tick),
    /// A new fire tick was drawn.
    Scheduled(Tick),
}

/// Single owner of [`ScheduleState`].
#[derive(Clone, Debug, Default)]
pub struct Scheduler {
    state: ScheduleState,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resume from persisted state.
    pub fn with_state(state: ScheduleState) -> Self {
        Self { state }
    }

    #[inline]
    pub fn state(&self) -> ScheduleState {
        self.state
    }

    /// `RequestSchedule(mode)`.
    ///
    /// Rules, first match wins:
    ///
    /// 1. `available == 0` → `NotScheduled` ([`ScheduleOutcome::Suspended`]).
    /// 2. `InProgress` and mode is not `Forced` → unchanged ([`ScheduleOutcome::Busy`]).
    /// 3. `ScheduledAt(T)` with `T > now` and mode is neither `Forced` nor
    ///    `SettingsChanged` → unchanged ([`ScheduleOutcome::AlreadyScheduled`]).
    /// 4. Otherwise draw `T' = now + interval` → `ScheduledAt(T')`.
    ///
    /// `T'` saturates at `Tick(u64::MAX)`, so near the end of the clock it
    /// may equal `now`; the event then fires on the next poll.
    pub fn request<R: RandomSource + ?Sized>(
        &mut self,
        mode:      ScheduleMode,
        available: usize,
        now:       Tick,
        interval:  &IntervalConfig,
        rng:       &mut R,
    ) -> ScheduleOutcome {
        if available == 0 {
            self.state = ScheduleState::NotScheduled;
            return ScheduleOutcome::Suspended;
        }

        match self.state {
            ScheduleState::InProgress if !mode.overrides_in_progress() => {
                return ScheduleOutcome::Busy;
            }
            ScheduleState::ScheduledAt(t) if t > now && !mode.overrides_pending() => {
                return ScheduleOutcome::AlreadyScheduled(t);
            }
            _ => {}
        }

        let next = interval.sample(now, rng);
        self.state = ScheduleState::ScheduledAt(next);
        tracing::debug!(?mode, %now, %next, "next event scheduled");
        ScheduleOutcome::Scheduled(next)
    }

    /// The `OnTick` guard: if the fire tick has been reached, enter
    /// `InProgress` and return `true`.
    ///
    /// The state flips before the caller dispatches, so anything a handler
    /// does during dispatch sees `InProgress`.
    pub fn poll(&mut self, now: Tick) -> bool {
        if self.state.is_due(now) {
            self.state = ScheduleState::InProgress;
            true
        } else {
            false
        }
    }

    /// Enter `InProgress` unconditionally (direct dispatch).
    pub fn begin_event(&mut self) {
        self.state = ScheduleState::InProgress;
    }

    /// Leave `InProgress` for `NotScheduled`.  Returns `false` if no event
    /// was in progress.
    pub fn release(&mut self) -> bool {
        if self.state == ScheduleState::InProgress {
            self.state = ScheduleState::NotScheduled;
            true
        } else {
            false
        }
    }

    pub fn reset(&mut self) {
        self.state = ScheduleState::NotScheduled;
    }

    /// Ticks until the pending event, or `None` if nothing is scheduled.
    pub fn time_remaining(&self, now: Tick) -> Option<u64> {
        self.state.fire_tick().map(|t| now.until(t))
    }
}
