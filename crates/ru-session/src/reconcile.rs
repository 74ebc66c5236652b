//! Post-load reconciliation scan input and report.

use ru_core::AgentId;
use ru_pool::Agent;

/// Agents the host found carrying the reunion marker after a load or a new
/// game.
///
/// `player_agents` are active in the player's faction; the scan clears
/// their marker in place.  `world_agents` are offered for admission and the
/// ones not admitted come back in [`ReconcileReport::left_in_world`].
#[derive(Debug)]
pub struct ReconcileScan<'a> {
    pub player_agents: &'a mut [Agent],
    pub world_agents:  Vec<Agent>,
}

/// What a reconciliation scan changed.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ReconcileReport {
    /// Marked player agents now recorded as Dispatched.
    pub recorded:      Vec<AgentId>,
    /// Marked world agents moved into Available.  The host removes them
    /// from its own world pool.
    pub admitted:      Vec<AgentId>,
    /// World agents the scan did not take (unmarked or rejected).
    pub left_in_world: Vec<Agent>,
}
