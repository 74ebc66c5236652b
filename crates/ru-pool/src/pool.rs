//! `AgentPool` — Available snapshots plus the Dispatched ID set.
//!
//! # Invariant
//!
//! An `AgentId` is a member of at most one of {Available, Dispatched}.  Every
//! mutating method preserves this; [`AgentPool::from_parts`] restores it on
//! state loaded from disk.
//!
//! The pool never talks to the scheduler.  Methods report whether Available
//! went from empty to non-empty (`first`) and the owner decides whether to
//! reschedule.

use rustc_hash::FxHashSet;

use ru_core::{AgentId, RandomSource, Tick};

use crate::{Agent, HealthHooks, PoolError, PoolResult};

/// Why an admission was a no-op.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Rejection {
    /// The ID is already in Available or Dispatched.
    AlreadyTracked,
    Dead,
    /// Empty ID.
    Invalid,
}

/// Result of a successful [`AgentPool::return_agent`].
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum ReturnOutcome {
    /// Back in Available.  `first` is `true` on a 0 → 1 transition.
    Restored { first: bool },
    /// Terminal injury: dropped from all tracking.
    TerminalInjury,
    /// Removed from Dispatched but refused re-admission (e.g. dead).
    Discarded(Rejection),
}

/// The pool of dormant agents.
#[derive(Default, Debug, Clone)]
pub struct AgentPool {
    available:  Vec<Agent>,
    dispatched: FxHashSet<AgentId>,
}

impl AgentPool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a pool from persisted parts.
    ///
    /// Snapshots are taken as-is (their age offset is already recorded).
    /// Entries that would break the membership invariant are healed: dead or
    /// invalid snapshots and duplicate Available IDs are dropped, and an ID
    /// present in both sets stays Available.  Returns the pool and the number
    /// of entries healed.
    pub fn from_parts(
        available:  Vec<Agent>,
        dispatched: impl IntoIterator<Item = AgentId>,
    ) -> (Self, usize) {
        let mut healed = 0;
        let mut seen: FxHashSet<AgentId> = FxHashSet::default();
        let mut kept = Vec::with_capacity(available.len());

        for agent in available {
            if agent.dead || !agent.id.is_valid() || !seen.insert(agent.id.clone()) {
                tracing::warn!(agent = %agent.id, "dropping unusable pool entry on load");
                healed += 1;
                continue;
            }
            kept.push(agent);
        }

        let mut ids: FxHashSet<AgentId> = FxHashSet::default();
        for id in dispatched {
            if !id.is_valid() || seen.contains(&id) || !ids.insert(id) {
                healed += 1;
            }
        }

        (Self { available: kept, dispatched: ids }, healed)
    }

    /// Split into (Available snapshots, Dispatched IDs sorted for stable output).
    pub fn into_parts(self) -> (Vec<Agent>, Vec<AgentId>) {
        let mut ids: Vec<AgentId> = self.dispatched.into_iter().collect();
        ids.sort_unstable();
        (self.available, ids)
    }

    // ── Transitions ───────────────────────────────────────────────────────

    /// `Admit`: add `agent` to Available.
    ///
    /// Normalizes health through `hooks` and freezes the agent's age at
    /// `now`.  Returns `Ok(first)` where `first` marks a 0 → 1 transition.
    pub fn admit<H: HealthHooks + ?Sized>(
        &mut self,
        mut agent: Agent,
        now:       Tick,
        hooks:     &mut H,
    ) -> Result<bool, Rejection> {
        if !agent.id.is_valid() {
            return Err(Rejection::Invalid);
        }
        if agent.dead {
            return Err(Rejection::Dead);
        }
        if self.is_tracked(&agent.id) {
            return Err(Rejection::AlreadyTracked);
        }

        hooks.health_normalize(&mut agent);
        agent.freeze_age(now);
        agent.marked = false;

        tracing::debug!(
            agent = %agent.id,
            age_years = agent.age_years(),
            "admitted to pool"
        );

        let first = self.available.is_empty();
        self.available.push(agent);
        Ok(first)
    }

    /// `CheckoutRandom`: move a uniformly chosen agent to Dispatched.
    ///
    /// The returned snapshot has its age restored and its cached health
    /// state cleared.
    pub fn checkout_random<R: RandomSource + ?Sized>(&mut self, rng: &mut R) -> PoolResult<Agent> {
        let index = rng
            .random_index(self.available.len())
            .ok_or(PoolError::PoolEmpty)?;

        // Order of Available carries no meaning.
        let mut agent = self.available.swap_remove(index);
        self.dispatched.insert(agent.id.clone());

        agent.thaw_age();
        agent.health.invalidate_cache();

        tracing::debug!(agent = %agent.id, remaining = self.available.len(), "checked out");
        Ok(agent)
    }

    /// `Return`: the host lost `agent` from its session.
    ///
    /// # Errors
    ///
    /// [`PoolError::NotDispatched`] if the ID is not in Dispatched.  The pool
    /// is left untouched.
    pub fn return_agent<H: HealthHooks + ?Sized>(
        &mut self,
        agent: Agent,
        now:   Tick,
        hooks: &mut H,
    ) -> PoolResult<ReturnOutcome> {
        if !self.dispatched.remove(&agent.id) {
            return Err(PoolError::NotDispatched(agent.id));
        }

        if hooks.terminal_injury_check(&agent) {
            return Ok(ReturnOutcome::TerminalInjury);
        }

        Ok(match self.admit(agent, now, hooks) {
            Ok(first)      => ReturnOutcome::Restored { first },
            Err(rejection) => ReturnOutcome::Discarded(rejection),
        })
    }

    /// Record an agent already active in the host as Dispatched without a
    /// checkout.  Used by the load-time reconciliation scan.
    ///
    /// Returns `false` if the ID is invalid or already tracked.
    pub fn mark_dispatched(&mut self, id: AgentId) -> bool {
        if !id.is_valid() || self.is_available(&id) {
            return false;
        }
        self.dispatched.insert(id)
    }

    /// The agent left tracking for good (e.g. died while active).
    ///
    /// Returns `false` if it was not dispatched.
    pub fn release(&mut self, id: &AgentId) -> bool {
        self.dispatched.remove(id)
    }

    // ── Queries ───────────────────────────────────────────────────────────

    /// `Count`: size of Available.
    #[inline]
    pub fn count(&self) -> usize {
        self.available.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.available.is_empty()
    }

    pub fn dispatched_count(&self) -> usize {
        self.dispatched.len()
    }

    pub fn available(&self) -> &[Agent] {
        &self.available
    }

    pub fn dispatched(&self) -> impl Iterator<Item = &AgentId> + '_ {
        self.dispatched.iter()
    }

    pub fn is_available(&self, id: &AgentId) -> bool {
        self.available.iter().any(|a| &a.id == id)
    }

    #[inline]
    pub fn is_dispatched(&self, id: &AgentId) -> bool {
        self.dispatched.contains(id)
    }

    pub fn is_tracked(&self, id: &AgentId) -> bool {
        self.is_dispatched(id) || self.is_available(id)
    }

    /// `true` if no ID is in both sets and Available holds no duplicates.
    pub fn membership_is_consistent(&self) -> bool {
        let mut seen: FxHashSet<&AgentId> = FxHashSet::default();
        self.available
            .iter()
            .all(|a| seen.insert(&a.id) && !self.dispatched.contains(&a.id))
    }
}
