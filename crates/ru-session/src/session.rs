//! The `Session` struct: pool, scheduler, and catalog owned together.

use ru_core::{AgentId, GameClock, RandomSource, Tick, format_days};
use ru_events::{DispatchError, DispatchResult, EventCatalog, EventContext, EventKind, Host};
use ru_pool::{Agent, AgentPool, PoolResult, Rejection, ReturnOutcome};
use ru_schedule::{IntervalConfig, ScheduleMode, ScheduleOutcome, ScheduleState, Scheduler};

use crate::{NotificationSink, ReconcileReport, ReconcileScan, SessionState, Settings};

/// Separator used by [`Session::roster_line`].
const ROSTER_DELIMITER: &str = ", ";

/// One reunion director, owned by the host for the lifetime of a loaded
/// game.
///
/// Every pool and scheduler transition goes through a method here, so the
/// rules that tie them together (a 0 → 1 admission reschedules, a return
/// reschedules, dispatch enters `InProgress` before any handler runs) hold
/// no matter which entry point the host calls.
///
/// Create via [`SessionBuilder`](crate::SessionBuilder).
pub struct Session<H: Host, R: RandomSource> {
    /// The host's game clock as last reported.
    pub clock: GameClock,

    /// The host simulation.
    pub host: H,

    pub(crate) settings:  Settings,
    pub(crate) interval:  IntervalConfig,
    pub(crate) pool:      AgentPool,
    pub(crate) scheduler: Scheduler,
    pub(crate) catalog:   EventCatalog,
    pub(crate) rng:       R,
    pub(crate) sink:      Box<dyn NotificationSink>,

    /// Agents checked out by the event currently in progress.
    pub(crate) pending: Vec<AgentId>,

    /// Loaded mid-event from a save that did not record the event's agents:
    /// the next dispatched agent to come back ends it.
    pub(crate) unowned_event: bool,
}

impl<H: Host, R: RandomSource> Session<H, R> {
    // ── Accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn now(&self) -> Tick {
        self.clock.now()
    }

    pub fn pool(&self) -> &AgentPool {
        &self.pool
    }

    pub fn schedule_state(&self) -> ScheduleState {
        self.scheduler.state()
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Register or replace handlers after construction.
    pub fn catalog_mut(&mut self) -> &mut EventCatalog {
        &mut self.catalog
    }

    /// Agents held by the event in progress.
    pub fn pending_event_agents(&self) -> &[AgentId] {
        &self.pending
    }

    // ── Pool transitions ──────────────────────────────────────────────────

    /// `Admit`: track `agent` as Available.
    ///
    /// Rejections (already tracked, dead, invalid) are no-ops.  The first
    /// entrant into an empty pool triggers `RequestSchedule(Normal)`.
    pub fn admit(&mut self, agent: Agent) -> Result<bool, Rejection> {
        let first = self.admit_quiet(agent)?;
        if first {
            self.request_schedule(ScheduleMode::Normal);
        }
        Ok(first)
    }

    fn admit_quiet(&mut self, agent: Agent) -> Result<bool, Rejection> {
        let name = agent.name.clone();
        let id = agent.id.clone();
        let now = self.now();
        match self.pool.admit(agent, now, &mut self.host) {
            Ok(first) => {
                self.sink.info(&format!("Saved {name} to Reunion list."));
                Ok(first)
            }
            Err(rejection) => {
                tracing::debug!(agent = %id, ?rejection, "admission skipped");
                Err(rejection)
            }
        }
    }

    /// `CheckoutRandom` outside of an event (admin tooling).
    ///
    /// An empty pool is reported and suspends the scheduler.  Taking the
    /// last available agent suspends it as well.
    pub fn checkout_random(&mut self) -> PoolResult<Agent> {
        match self.pool.checkout_random(&mut self.rng) {
            Ok(agent) => {
                if self.pool.is_empty() {
                    self.request_schedule(ScheduleMode::Normal);
                }
                Ok(agent)
            }
            Err(err) => {
                self.sink.warn("Failed to get a random agent because the Reunion list is empty.");
                self.request_schedule(ScheduleMode::Normal);
                Err(err)
            }
        }
    }

    /// `Return`: the host involuntarily lost a dispatched agent.
    ///
    /// # Errors
    ///
    /// [`PoolError::NotDispatched`](ru_pool::PoolError::NotDispatched) when
    /// the ID was never checked out.  This is an integration error: it is
    /// logged at error level and nothing changes.
    pub fn return_agent(&mut self, agent: Agent) -> PoolResult<ReturnOutcome> {
        let id = agent.id.clone();
        let name = agent.name.clone();
        let now = self.now();

        let outcome = match self.pool.return_agent(agent, now, &mut self.host) {
            Ok(outcome) => outcome,
            Err(err) => {
                self.sink.error(&format!("{name} ({id}) was returned but is not dispatched; ignoring."));
                return Err(err);
            }
        };
        let released = self.end_pending_for(&id);

        match outcome {
            ReturnOutcome::Restored { .. } => {
                self.sink.info(&format!(
                    "{name} was lost by the player and made available for Reunion to spawn again."
                ));
                self.request_schedule(ScheduleMode::Normal);
            }
            ReturnOutcome::TerminalInjury => {
                self.sink.warn(&format!(
                    "{name} was lost by the player while having a fresh missing part. \
                     The agent has bled to death and is lost forever."
                ));
                if released {
                    self.request_schedule(ScheduleMode::Normal);
                }
            }
            ReturnOutcome::Discarded(rejection) => {
                self.sink.warn(&format!("{name} could not be returned to the Reunion list ({rejection:?})."));
                if released {
                    self.request_schedule(ScheduleMode::Normal);
                }
            }
        }
        Ok(outcome)
    }

    /// The player recruited a dispatched agent.  The next event is drawn at
    /// once; the agent stays Dispatched so a later loss still returns it.
    pub fn on_agent_recruited(&mut self, id: &AgentId) {
        if !self.pool.is_dispatched(id) {
            tracing::debug!(agent = %id, "recruited agent is not tracked");
            return;
        }
        self.pending.retain(|p| p != id);
        self.request_schedule(ScheduleMode::Forced);
    }

    /// A dispatched agent left tracking for good (e.g. died while active).
    ///
    /// Returns `false` if it was not dispatched.
    pub fn on_agent_departed(&mut self, id: &AgentId) -> bool {
        if !self.pool.release(id) {
            return false;
        }
        tracing::debug!(agent = %id, "dispatched agent left tracking");
        if self.end_pending_for(id) {
            self.request_schedule(ScheduleMode::Normal);
        }
        true
    }

    /// The event in progress ended without returning its agent (quest
    /// expired, site abandoned).  Releases `InProgress` and reschedules.
    pub fn finish_event(&mut self) {
        self.pending.clear();
        self.unowned_event = false;
        if self.scheduler.release() {
            tracing::debug!("event finished");
        }
        self.request_schedule(ScheduleMode::Normal);
    }

    /// If `id` was the last agent held by the event in progress, the event
    /// is over: release `InProgress`.  Returns `true` if it was released.
    fn end_pending_for(&mut self, id: &AgentId) -> bool {
        if std::mem::take(&mut self.unowned_event) {
            return self.scheduler.release();
        }
        let before = self.pending.len();
        self.pending.retain(|p| p != id);
        before > 0 && self.pending.is_empty() && self.scheduler.release()
    }

    // ── Scheduling ────────────────────────────────────────────────────────

    /// `RequestSchedule(mode)`.
    pub fn request_schedule(&mut self, mode: ScheduleMode) -> ScheduleOutcome {
        let now = self.now();
        let outcome = self
            .scheduler
            .request(mode, self.pool.count(), now, &self.interval, &mut self.rng);
        let speak = self.settings.verbose && !mode.is_quiet();

        match outcome {
            ScheduleOutcome::Suspended => {
                if !mode.is_quiet() {
                    self.sink.info("No available Reunion agents, Reunion events will not fire from now on.");
                }
            }
            ScheduleOutcome::Busy => {
                if speak {
                    self.sink.info("Tried to schedule an event but is in the middle of an event.");
                }
            }
            ScheduleOutcome::AlreadyScheduled(_) => {
                if speak {
                    self.sink.info("Tried to schedule an event but another event has already been scheduled.");
                }
            }
            ScheduleOutcome::Scheduled(_) => {
                if mode != ScheduleMode::Init || self.settings.verbose {
                    let message = self.time_remaining_message();
                    self.sink.info(&message);
                }
            }
        }
        tracing::debug!(?mode, ?outcome, "schedule request");
        outcome
    }

    /// `OnTick`: record the host clock and fire a due event.
    ///
    /// Returns the dispatch result when an event was due this tick.
    pub fn on_tick(&mut self, now: Tick) -> Option<DispatchResult<EventKind>> {
        self.clock.set(now);
        if !self.scheduler.poll(now) {
            return None;
        }
        Some(self.dispatch())
    }

    /// `Dispatch`: pick an allowed kind and run its handler.
    ///
    /// The scheduler is `InProgress` before anything else happens.  Every
    /// error has already been reported to the sink and answered with a
    /// no-op or a schedule request; the result is informational.
    pub fn dispatch(&mut self) -> DispatchResult<EventKind> {
        self.scheduler.begin_event();

        if self.pool.is_empty() {
            let message = "No available Reunion agents, event should not have fired!";
            self.sink.error(message);
            self.scheduler.reset();
            return Err(DispatchError::InvariantViolation(message.to_owned()));
        }

        if !self.host.has_active_session_context() {
            self.sink.info("Player does not have any home map, event timer restarted.");
            self.scheduler.reset();
            self.request_schedule(ScheduleMode::Normal);
            return Err(DispatchError::NoActiveSessionContext);
        }

        let allowed = self.catalog.allowed_kinds(
            self.settings.enable_harder_events_when_solo,
            self.host.population_size(),
        );
        let Some(kind) = EventCatalog::choose(&allowed, &mut self.rng) else {
            self.sink.warn("No suitable event found, event timer restarted.");
            self.request_schedule(ScheduleMode::Forced);
            return Err(DispatchError::NoSuitableEvent);
        };

        self.fire(kind);
        Ok(kind)
    }

    /// Debug "force start event": dispatch now, whatever the schedule says.
    pub fn force_dispatch(&mut self) -> DispatchResult<EventKind> {
        self.pending.clear();
        self.unowned_event = false;
        self.dispatch()
    }

    fn fire(&mut self, kind: EventKind) {
        let now = self.now();
        let mut ctx = EventContext::new(kind, now, &mut self.pool, &mut self.host, &mut self.rng);
        let fired = self.catalog.fire(&mut ctx).unwrap_or(false);
        let followup = ctx.take_followup();
        let checked_out = ctx.take_checked_out();

        tracing::info!(%kind, fired, agents = checked_out.len(), "reunion event fired");

        match followup {
            Some(mode) => {
                self.pending.clear();
                self.request_schedule(mode);
            }
            None => self.pending = checked_out,
        }
    }

    // ── Admin tooling ─────────────────────────────────────────────────────

    /// `GetAvailableList`.
    pub fn available_list(&self) -> &[Agent] {
        self.pool.available()
    }

    /// `"Ally Pawns: a, b, c"` over the Available names.
    pub fn roster_line(&self) -> String {
        let names: Vec<&str> = self.pool.available().iter().map(|a| a.name.as_str()).collect();
        format!("Ally Pawns: {}", names.join(ROSTER_DELIMITER))
    }

    /// Send the roster (or its absence) to the sink.
    pub fn print_roster(&mut self) {
        if self.pool.is_empty() {
            self.sink.info("There are no allies in the Ally list!");
        } else {
            let line = self.roster_line();
            self.sink.info(&line);
        }
    }

    /// Human-readable scheduler status.
    pub fn time_remaining_message(&self) -> String {
        match self.scheduler.state() {
            ScheduleState::ScheduledAt(_) => {
                let ticks = self.scheduler.time_remaining(self.now()).unwrap_or(0);
                format!("Next Reunion event happening in {}.", format_days(ticks))
            }
            ScheduleState::InProgress   => "A Reunion event is in progress.".to_owned(),
            ScheduleState::NotScheduled => "No Reunion event scheduled.".to_owned(),
        }
    }

    /// Apply new settings.  A changed interval reschedules at once.
    pub fn update_settings(&mut self, settings: Settings) {
        let settings = settings.normalized();
        self.catalog.apply_flags(&settings.event_allow);

        let interval = settings.interval();
        let changed = interval != self.interval;
        self.settings = settings;
        self.interval = interval;

        if changed {
            self.request_schedule(ScheduleMode::SettingsChanged);
        }
    }

    // ── Lifecycle ─────────────────────────────────────────────────────────

    /// Start of a new game: forget everything.
    pub fn init_new_game(&mut self) {
        self.pool = AgentPool::new();
        self.scheduler.reset();
        self.pending.clear();
        self.unowned_event = false;
    }

    /// Load path: adopt a saved state.
    ///
    /// Missing collections become empty and inconsistent entries are
    /// dropped.  A non-empty pool with nothing scheduled resumes with
    /// `RequestSchedule(Init)`.
    ///
    /// An event in progress keeps holding the agents the save lists for it.
    /// If the save lists none, the next return or departure of any
    /// dispatched agent ends the event; with no agent dispatched at all, it
    /// ends on load.
    pub fn restore(&mut self, state: SessionState) {
        let (pool, mut schedule, pending, healed) = state.into_parts();
        if healed > 0 {
            self.sink.warn(&format!("Dropped {healed} inconsistent Reunion entries from the save."));
        }
        self.pool = pool;
        self.unowned_event = false;
        if schedule == ScheduleState::InProgress && pending.is_empty() {
            if self.pool.dispatched_count() == 0 {
                tracing::debug!("saved event holds no agents; ended on load");
                schedule = ScheduleState::NotScheduled;
            } else {
                tracing::debug!("saved event did not record its agents");
                self.unowned_event = true;
            }
        }
        self.scheduler = Scheduler::with_state(schedule);
        self.pending = pending;

        if self.pool.is_empty() {
            self.sink.info("Game loaded, no agents in the Reunion list.");
        } else if schedule == ScheduleState::NotScheduled {
            self.sink.info("No events scheduled, but there is at least 1 available agent.");
            self.request_schedule(ScheduleMode::Init);
        } else {
            let message = self.time_remaining_message();
            self.sink.info(&message);
        }
    }

    /// Post-init scan: pick up marked agents, then `RequestSchedule(Init)`.
    pub fn reconcile(&mut self, scan: ReconcileScan<'_>) -> ReconcileReport {
        let mut report = ReconcileReport::default();

        for agent in scan.player_agents.iter_mut().filter(|a| a.marked) {
            agent.marked = false;
            if self.pool.mark_dispatched(agent.id.clone()) {
                self.sink.info(&format!("Saved player's agent {} to Reunion list.", agent.name));
                report.recorded.push(agent.id.clone());
            }
        }

        for mut agent in scan.world_agents {
            if !agent.marked {
                report.left_in_world.push(agent);
                continue;
            }
            let id = agent.id.clone();
            agent.marked = false;
            let kept = agent.clone();
            match self.admit_quiet(agent) {
                Ok(_)  => report.admitted.push(id),
                Err(_) => report.left_in_world.push(kept),
            }
        }

        if !self.pool.is_empty() {
            self.print_roster();
        }
        self.request_schedule(ScheduleMode::Init);
        report
    }

    /// Save path: the current state, leaving the session running.
    pub fn snapshot(&self) -> SessionState {
        SessionState::new(self.scheduler.state(), self.pool.clone(), &self.pending)
    }

    /// Teardown: consume the session and return what must be saved.
    pub fn into_state(self) -> SessionState {
        SessionState::new(self.scheduler.state(), self.pool, &self.pending)
    }

    /// Checked invariant for tests and debug tooling.
    pub fn is_consistent(&self) -> bool {
        self.pool.membership_is_consistent()
    }
}
