//! What a handler may touch while an event fires.

use ru_core::{AgentId, RandomSource, Tick};
use ru_pool::{Agent, AgentPool, PoolResult};
use ru_schedule::ScheduleMode;

use crate::{EventKind, Host};

/// Mutable view handed to [`EventHandler::fire`](crate::EventHandler::fire).
///
/// Built by the session for the duration of one handler call.  The
/// scheduler is deliberately absent: a handler that wants the next event
/// scheduled records a follow-up with
/// [`request_schedule`](Self::request_schedule), and the session applies it
/// once the handler returns.
pub struct EventContext<'a> {
    /// The kind being fired.
    pub kind: EventKind,
    /// Current game tick.
    pub now:  Tick,
    pub pool: &'a mut AgentPool,
    pub host: &'a mut dyn Host,
    pub rng:  &'a mut dyn RandomSource,
    followup:    Option<ScheduleMode>,
    checked_out: Vec<AgentId>,
}

impl<'a> EventContext<'a> {
    pub fn new(
        kind: EventKind,
        now:  Tick,
        pool: &'a mut AgentPool,
        host: &'a mut dyn Host,
        rng:  &'a mut dyn RandomSource,
    ) -> Self {
        Self { kind, now, pool, host, rng, followup: None, checked_out: Vec::new() }
    }

    /// `CheckoutRandom` on the pool with the session's generator.
    pub fn checkout(&mut self) -> PoolResult<Agent> {
        let agent = self.pool.checkout_random(&mut *self.rng)?;
        self.checked_out.push(agent.id.clone());
        Ok(agent)
    }

    /// IDs checked out through this context, in checkout order.
    pub fn checked_out(&self) -> &[AgentId] {
        &self.checked_out
    }

    pub fn take_checked_out(&mut self) -> Vec<AgentId> {
        std::mem::take(&mut self.checked_out)
    }

    /// Ask for a schedule request once the handler returns.  A later call
    /// replaces an earlier one.
    pub fn request_schedule(&mut self, mode: ScheduleMode) {
        self.followup = Some(mode);
    }

    pub fn followup(&self) -> Option<ScheduleMode> {
        self.followup
    }

    pub fn take_followup(&mut self) -> Option<ScheduleMode> {
        self.followup.take()
    }
}
