//! The `Agent` snapshot carried through the pool.
//!
//! The host simulation owns the real entity.  While an agent is dormant the
//! director keeps this snapshot instead, and the snapshot is what goes into
//! the save file (`Reunion_AllyAvailable`).  Only the fields the director
//! reads or normalizes live here; everything else about the entity stays on
//! the host side.

use std::collections::BTreeMap;

use ru_core::{AgentId, Tick};

// ── Health ────────────────────────────────────────────────────────────────────

#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InjuryKind {
    #[default]
    Wound,
    /// A lost body part.  Fatal if the agent leaves the session while it is
    /// still fresh (untreated).
    MissingPart,
    Illness,
}

#[derive(Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Injury {
    pub part:   String,
    pub kind:   InjuryKind,
    #[cfg_attr(feature = "serde", serde(default))]
    pub tended: bool,
    #[cfg_attr(feature = "serde", serde(default))]
    pub fresh:  bool,
}

impl Injury {
    pub fn new(part: impl Into<String>, kind: InjuryKind) -> Self {
        Self { part: part.into(), kind, tended: false, fresh: true }
    }

    /// `true` if this injury still needs treatment.
    ///
    /// Old missing parts have healed over and need nothing; fresh ones bleed.
    pub fn needs_tending(&self) -> bool {
        !self.tended && (self.kind != InjuryKind::MissingPart || self.fresh)
    }

    pub fn tend(&mut self) {
        self.tended = true;
        self.fresh = false;
    }
}

/// The slice of an agent's health that pool transitions touch.
#[derive(Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HealthRecord {
    #[cfg_attr(feature = "serde", serde(default))]
    pub injuries: Vec<Injury>,

    /// Derived capacity values (e.g. `"moving" → 0.8`) cached by the host.
    /// Never persisted; cleared on checkout so the host recomputes them.
    #[cfg_attr(feature = "serde", serde(skip))]
    pub capacities: Option<BTreeMap<String, f32>>,
}

impl HealthRecord {
    /// Number of injuries that still need treatment.
    pub fn pending_treatment(&self) -> usize {
        self.injuries.iter().filter(|i| i.needs_tending()).count()
    }

    /// Treat every injury that needs it.
    pub fn tend_all(&mut self) {
        for injury in self.injuries.iter_mut().filter(|i| i.needs_tending()) {
            injury.tend();
        }
    }

    pub fn has_fresh_missing_part(&self) -> bool {
        self.injuries
            .iter()
            .any(|i| i.kind == InjuryKind::MissingPart && i.fresh)
    }

    /// Drop cached derived state.
    pub fn invalidate_cache(&mut self) {
        self.capacities = None;
    }
}

// ── Agent ─────────────────────────────────────────────────────────────────────

/// A snapshot of one tracked agent.
#[derive(Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Agent {
    pub id:   AgentId,
    pub name: String,

    #[cfg_attr(feature = "serde", serde(default))]
    pub dead: bool,

    /// Biological age in ticks.  While the agent is dormant this holds the
    /// age minus [`reactivation_offset_ticks`](Self::reactivation_offset_ticks).
    pub biological_age_ticks: i64,

    /// Ticks to add back on reactivation.  `Some` only while the agent sits
    /// in the Available pool.
    #[cfg_attr(feature = "serde", serde(default))]
    pub reactivation_offset_ticks: Option<u64>,

    /// The reunion marker trait.  Set by the host on agents that should be
    /// picked up by the reconciliation scan; cleared once they are tracked.
    #[cfg_attr(feature = "serde", serde(default))]
    pub marked: bool,

    #[cfg_attr(feature = "serde", serde(default))]
    pub faction: Option<String>,

    /// Set by handlers that deliver the agent incapacitated (e.g. pod crash).
    #[cfg_attr(feature = "serde", serde(default))]
    pub downed: bool,

    #[cfg_attr(feature = "serde", serde(default))]
    pub health: HealthRecord,
}

impl Agent {
    pub fn new(id: impl Into<AgentId>, name: impl Into<String>, biological_age_ticks: i64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            biological_age_ticks,
            ..Self::default()
        }
    }

    /// `true` while the agent's age is frozen by the pool.
    #[inline]
    pub fn is_dormant(&self) -> bool {
        self.reactivation_offset_ticks.is_some()
    }

    /// Age in fractional years (60 days of 60 000 ticks), for log lines.
    pub fn age_years(&self) -> f64 {
        self.biological_age_ticks as f64 / (ru_core::TICKS_PER_DAY as f64 * ru_core::DAYS_PER_YEAR as f64)
    }

    /// Record the freeze offset at `now`.  A no-op on an already-dormant agent.
    pub(crate) fn freeze_age(&mut self, now: Tick) {
        if self.reactivation_offset_ticks.is_none() {
            self.biological_age_ticks -= now.0 as i64;
            self.reactivation_offset_ticks = Some(now.0);
        }
    }

    /// Reverse [`freeze_age`](Self::freeze_age), restoring the admission age.
    pub(crate) fn thaw_age(&mut self) {
        if let Some(offset) = self.reactivation_offset_ticks.take() {
            self.biological_age_ticks += offset as i64;
        }
    }
}
