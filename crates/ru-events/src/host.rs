//! The host simulation as seen from dispatch.

use ru_pool::{Agent, HealthHooks};

use crate::EventKind;

/// How a delivered agent enters the host session.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum ArrivalStyle {
    /// Walks in from the map edge and joins immediately.
    WalkIn,
    /// Lands in a drop pod, downed.
    DropPod,
    /// Offered through a quest; joins only if the player completes it.
    Quest,
}

/// Delivery instructions passed to [`Host::deliver`].
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Arrival {
    pub kind:  EventKind,
    pub style: ArrivalStyle,
}

impl Arrival {
    pub fn new(kind: EventKind, style: ArrivalStyle) -> Self {
        Self { kind, style }
    }
}

/// The external simulation.
///
/// Health hooks come from [`HealthHooks`] (defaults work on the snapshot).
/// Everything the director needs to know about the live session goes
/// through these methods; nothing is read from globals.
pub trait Host: HealthHooks {
    /// `PopulationSize`: active player-aligned agents right now.
    fn population_size(&self) -> usize;

    /// `HasActiveSessionContext`: a home map (or equivalent) exists to
    /// deliver into.
    fn has_active_session_context(&self) -> bool;

    /// Whether `arrival` can happen right now (e.g. a reachable map edge for
    /// a walk-in).  Checked before any agent is checked out.
    fn can_deliver(&self, _arrival: &Arrival) -> bool {
        true
    }

    /// Hand a checked-out agent to the simulation.
    ///
    /// Letters, dialogs, and spawning are the host's business.
    fn deliver(&mut self, agent: Agent, arrival: Arrival);
}
