//! `HealthHooks` — the host's health collaborators used by pool transitions.

use crate::Agent;

/// Health-related host callbacks.
///
/// Both methods have defaults that work on the snapshot's own
/// [`HealthRecord`](crate::HealthRecord), so hosts that keep health in the
/// snapshot only need `impl HealthHooks for MyHost {}`.
pub trait HealthHooks {
    /// `HealthNormalize`: clear the pending treatment backlog before the agent
    /// goes dormant.
    fn health_normalize(&mut self, agent: &mut Agent) {
        agent.health.tend_all();
    }

    /// `TerminalInjuryCheck`: `true` if an agent leaving the session in its
    /// current state cannot survive and must be dropped for good.
    fn terminal_injury_check(&self, agent: &Agent) -> bool {
        agent.health.has_fresh_missing_part()
    }
}

/// [`HealthHooks`] using only the snapshot defaults.
pub struct SnapshotHealth;

impl HealthHooks for SnapshotHealth {}
