//! `SessionState` — what a save file holds for the director.

use serde::{Deserialize, Serialize};

use ru_core::AgentId;
use ru_pool::{Agent, AgentPool};
use ru_schedule::ScheduleState;

/// The persisted triple, under the legacy save keys.
///
/// `next_event_tick` uses the integer encoding (0 = not scheduled,
/// negative = in progress, positive = fire tick).  The collections are
/// `None` when the key was missing from the save; restore treats that as
/// empty.
///
/// `pending` lists the agents held by the event in progress.  It is written
/// only while one is held, so saves without an event in flight keep the
/// three legacy keys alone.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionState {
    #[serde(rename = "Reunion_NextEventTick", default)]
    pub next_event_tick: i64,

    #[serde(rename = "Reunion_AllyAvailable", default)]
    pub available: Option<Vec<Agent>>,

    #[serde(rename = "Reunion_AllySpawned", default)]
    pub dispatched: Option<Vec<AgentId>>,

    #[serde(rename = "Reunion_PendingEvent", default, skip_serializing_if = "Option::is_none")]
    pub pending: Option<Vec<AgentId>>,
}

impl SessionState {
    pub fn new(schedule: ScheduleState, pool: AgentPool, pending: &[AgentId]) -> Self {
        let (available, dispatched) = pool.into_parts();
        Self {
            next_event_tick: schedule.to_legacy(),
            available:       Some(available),
            dispatched:      Some(dispatched),
            pending:         (!pending.is_empty()).then(|| pending.to_vec()),
        }
    }

    pub fn schedule_state(&self) -> ScheduleState {
        ScheduleState::from_legacy(self.next_event_tick)
    }

    /// Split into a pool (healed), the schedule state, and the event's
    /// pending agents.  Pending IDs that are no longer dispatched are
    /// dropped.  Also returns the number of pool entries dropped while
    /// healing.
    pub fn into_parts(self) -> (AgentPool, ScheduleState, Vec<AgentId>, usize) {
        let schedule = self.schedule_state();
        let (pool, healed) = AgentPool::from_parts(
            self.available.unwrap_or_default(),
            self.dispatched.unwrap_or_default(),
        );
        let mut pending = self.pending.unwrap_or_default();
        pending.retain(|id| pool.is_dispatched(id));
        (pool, schedule, pending, healed)
    }
}
