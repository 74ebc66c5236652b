//! A toy colony standing in for the host game.

use ru_core::AgentId;
use ru_events::{Arrival, ArrivalStyle, Host};
use ru_pool::{Agent, HealthHooks};

/// Colonists plus the quest offers waiting on the player.
#[derive(Default)]
pub struct Colony {
    pub colonists:    Vec<Agent>,
    pub quest_offers: Vec<Agent>,
    pub has_map:      bool,
    /// `(day, agent name, arrival)` for the summary table.
    pub arrivals:     Vec<(u64, String, Arrival)>,
    pub day:          u64,
}

impl Colony {
    pub fn new(colonists: Vec<Agent>) -> Self {
        Self { colonists, has_map: true, ..Self::default() }
    }

    /// Remove a colonist by ID, e.g. when they are kidnapped or leave.
    pub fn take_colonist(&mut self, id: &AgentId) -> Option<Agent> {
        let index = self.colonists.iter().position(|a| &a.id == id)?;
        Some(self.colonists.swap_remove(index))
    }

    pub fn take_quest_offer(&mut self) -> Option<Agent> {
        self.quest_offers.pop()
    }
}

impl HealthHooks for Colony {}

impl Host for Colony {
    fn population_size(&self) -> usize {
        self.colonists.len()
    }

    fn has_active_session_context(&self) -> bool {
        self.has_map
    }

    fn deliver(&mut self, mut agent: Agent, arrival: Arrival) {
        self.arrivals.push((self.day, agent.name.clone(), arrival));
        match arrival.style {
            ArrivalStyle::Quest => self.quest_offers.push(agent),
            ArrivalStyle::WalkIn | ArrivalStyle::DropPod => {
                // Pod survivors get patched up on arrival.
                agent.downed = false;
                self.colonists.push(agent);
            }
        }
    }
}
