//! `Settings` — the player-facing director configuration.
//!
//! Stored as JSON with the legacy key names (`minDaysBetweenEvents`,
//! `allowEventWandererJoins`, …) so existing settings files keep loading.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use ru_core::DAYS_PER_QUADRUM;
use ru_events::EventKind;
use ru_schedule::IntervalConfig;

use crate::SessionResult;

/// Upper bound for either interval bound, in days.
pub const MAX_INTERVAL_DAYS: u32 = 60;

/// Director configuration.
///
/// Build with `Settings::default()`, [`Settings::load`], or
/// [`Settings::from_env`]; run [`normalized`](Self::normalized) before
/// handing it to a session (the session does this itself).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawSettings", into = "RawSettings")]
pub struct Settings {
    pub min_days_between_events:        u32,
    pub max_days_between_events:        u32,
    /// Enabled flag per kind.  Kinds missing here use
    /// [`EventKind::default_enabled`].
    pub event_allow:                    BTreeMap<EventKind, bool>,
    /// Offer the harder kinds even when the player has a single agent.
    pub enable_harder_events_when_solo: bool,
    /// Emit diagnostic notifications (the host's dev mode).
    pub verbose:                        bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            min_days_between_events:        DAYS_PER_QUADRUM / 2,
            max_days_between_events:        DAYS_PER_QUADRUM,
            event_allow:                    EventKind::ALL.into_iter().map(|k| (k, k.default_enabled())).collect(),
            enable_harder_events_when_solo: false,
            verbose:                        false,
        }
    }
}

impl Settings {
    /// Read settings from a JSON file.  Missing keys take their defaults.
    pub fn load(path: &Path) -> SessionResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str::<Settings>(&text)?.normalized())
    }

    /// Write settings as pretty JSON.
    pub fn save(&self, path: &Path) -> SessionResult<()> {
        std::fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }

    /// Defaults overridden by `REUNION_MIN_DAYS`, `REUNION_MAX_DAYS`,
    /// `REUNION_HARDER_SOLO`, and `REUNION_VERBOSE`.  Unparsable values are
    /// ignored.
    pub fn from_env() -> Self {
        let mut cfg = Self::default();
        if let Ok(v) = std::env::var("REUNION_MIN_DAYS") {
            if let Ok(n) = v.parse() { cfg.min_days_between_events = n; }
        }
        if let Ok(v) = std::env::var("REUNION_MAX_DAYS") {
            if let Ok(n) = v.parse() { cfg.max_days_between_events = n; }
        }
        if let Ok(v) = std::env::var("REUNION_HARDER_SOLO") {
            if let Some(b) = parse_flag(&v) { cfg.enable_harder_events_when_solo = b; }
        }
        if let Ok(v) = std::env::var("REUNION_VERBOSE") {
            if let Some(b) = parse_flag(&v) { cfg.verbose = b; }
        }
        cfg.normalized()
    }

    /// Clamp both bounds to the slider ranges and force `min < max`.
    pub fn normalized(mut self) -> Self {
        self.max_days_between_events = self.max_days_between_events.clamp(1, MAX_INTERVAL_DAYS);
        self.min_days_between_events = self.min_days_between_events.min(MAX_INTERVAL_DAYS);
        if self.min_days_between_events >= self.max_days_between_events {
            self.min_days_between_events = self.max_days_between_events - 1;
        }
        self
    }

    pub fn is_allowed(&self, kind: EventKind) -> bool {
        self.event_allow.get(&kind).copied().unwrap_or_else(|| kind.default_enabled())
    }

    pub fn set_allowed(&mut self, kind: EventKind, allowed: bool) {
        self.event_allow.insert(kind, allowed);
    }

    /// The scheduling window in ticks.
    pub fn interval(&self) -> IntervalConfig {
        IntervalConfig::from_days(self.min_days_between_events, self.max_days_between_events)
    }
}

fn parse_flag(v: &str) -> Option<bool> {
    match v.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on"  => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

// ── On-disk shape ─────────────────────────────────────────────────────────────

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawSettings {
    #[serde(default = "default_min_days")]
    min_days_between_events:        u32,
    #[serde(default = "default_max_days")]
    max_days_between_events:        u32,
    #[serde(default)]
    enable_harder_events_when_solo: bool,
    #[serde(default)]
    verbose:                        bool,
    /// `allowEvent<Kind>` flags.
    #[serde(flatten)]
    allow:                          BTreeMap<String, bool>,
}

fn default_min_days() -> u32 {
    Settings::default().min_days_between_events
}

fn default_max_days() -> u32 {
    Settings::default().max_days_between_events
}

impl From<RawSettings> for Settings {
    fn from(raw: RawSettings) -> Self {
        let event_allow = EventKind::ALL
            .into_iter()
            .map(|k| (k, raw.allow.get(&k.save_key()).copied().unwrap_or_else(|| k.default_enabled())))
            .collect();
        for key in raw.allow.keys() {
            if !EventKind::ALL.iter().any(|k| &k.save_key() == key) {
                tracing::warn!(key = %key, "ignoring unknown settings key");
            }
        }
        Self {
            min_days_between_events:        raw.min_days_between_events,
            max_days_between_events:        raw.max_days_between_events,
            event_allow,
            enable_harder_events_when_solo: raw.enable_harder_events_when_solo,
            verbose:                        raw.verbose,
        }
    }
}

impl From<Settings> for RawSettings {
    fn from(s: Settings) -> Self {
        let allow = EventKind::ALL
            .into_iter()
            .map(|k| (k.save_key(), s.is_allowed(k)))
            .collect();
        Self {
            min_days_between_events:        s.min_days_between_events,
            max_days_between_events:        s.max_days_between_events,
            enable_harder_events_when_solo: s.enable_harder_events_when_solo,
            verbose:                        s.verbose,
            allow,
        }
    }
}
