//! The closed set of reunion event kinds.

use std::fmt;

/// A reunion event variant.
///
/// Declaration order is the catalog's iteration order.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EventKind {
    /// The agent walks in and joins at once.
    WandererJoins,
    /// The agent crashes in a pod, downed, and may be rescued.
    RefugeePodCrash,
    /// The agent arrives pursued by raiders (quest offer).
    RefugeeChased,
    /// The agent is held prisoner at a site (quest offer).
    PrisonerRescue,
    /// The agent lies downed at a site (quest offer).
    DownedRefugee,
}

impl EventKind {
    pub const ALL: [EventKind; 5] = [
        EventKind::WandererJoins,
        EventKind::RefugeePodCrash,
        EventKind::RefugeeChased,
        EventKind::PrisonerRescue,
        EventKind::DownedRefugee,
    ];

    /// Offerable regardless of how many agents the player has.
    pub fn always_offerable(self) -> bool {
        matches!(
            self,
            EventKind::WandererJoins | EventKind::RefugeePodCrash | EventKind::RefugeeChased
        )
    }

    /// Enabled flag used when settings do not mention the kind.
    pub fn default_enabled(self) -> bool {
        self != EventKind::RefugeePodCrash
    }

    pub fn as_str(self) -> &'static str {
        match self {
            EventKind::WandererJoins   => "WandererJoins",
            EventKind::RefugeePodCrash => "RefugeePodCrash",
            EventKind::RefugeeChased   => "RefugeeChased",
            EventKind::PrisonerRescue  => "PrisonerRescue",
            EventKind::DownedRefugee   => "DownedRefugee",
        }
    }

    /// Settings key for the kind's enabled flag, e.g. `allowEventWandererJoins`.
    pub fn save_key(self) -> String {
        format!("allowEvent{}", self.as_str())
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
