//! `EventCatalog` — one entry per event kind: enabled flag plus handler.
//!
//! The table is built once when the session is constructed.  Dispatch never
//! looks handlers up by name; it walks [`EventKind::ALL`].

use std::collections::BTreeMap;
use std::fmt;

use ru_core::RandomSource;

use crate::builtin::builtin_handler;
use crate::{EventContext, EventHandler, EventKind};

struct Entry {
    enabled: bool,
    handler: Box<dyn EventHandler>,
}

/// Enabled flags and handlers keyed by [`EventKind`].
///
/// A kind without a registered handler is never offered, whatever its flag.
#[derive(Default)]
pub struct EventCatalog {
    entries: BTreeMap<EventKind, Entry>,
}

impl EventCatalog {
    /// An empty catalog.  Nothing is offered until handlers are registered.
    pub fn new() -> Self {
        Self::default()
    }

    /// The five built-in handlers with their default enabled flags.
    pub fn with_builtin_handlers() -> Self {
        let mut catalog = Self::new();
        for kind in EventKind::ALL {
            catalog.register_boxed(kind, builtin_handler(kind));
        }
        catalog
    }

    /// Install `handler` for `kind`.
    ///
    /// Replacing a handler keeps the kind's enabled flag; a new kind starts
    /// at [`EventKind::default_enabled`].
    pub fn register(&mut self, kind: EventKind, handler: impl EventHandler + 'static) -> &mut Self {
        self.register_boxed(kind, Box::new(handler))
    }

    pub fn register_boxed(&mut self, kind: EventKind, handler: Box<dyn EventHandler>) -> &mut Self {
        match self.entries.get_mut(&kind) {
            Some(entry) => entry.handler = handler,
            None => {
                self.entries.insert(kind, Entry { enabled: kind.default_enabled(), handler });
            }
        }
        self
    }

    /// Returns `false` if `kind` has no handler (the flag is not recorded).
    pub fn set_enabled(&mut self, kind: EventKind, enabled: bool) -> bool {
        match self.entries.get_mut(&kind) {
            Some(entry) => {
                entry.enabled = enabled;
                true
            }
            None => false,
        }
    }

    /// Set every registered kind's flag from `flags`, falling back to the
    /// kind's default when absent.
    pub fn apply_flags(&mut self, flags: &BTreeMap<EventKind, bool>) {
        for (kind, entry) in self.entries.iter_mut() {
            entry.enabled = flags.get(kind).copied().unwrap_or_else(|| kind.default_enabled());
        }
    }

    pub fn is_enabled(&self, kind: EventKind) -> bool {
        self.entries.get(&kind).is_some_and(|e| e.enabled)
    }

    pub fn has_handler(&self, kind: EventKind) -> bool {
        self.entries.contains_key(&kind)
    }

    /// Enabled kinds in catalog order.
    pub fn enabled_kinds(&self) -> impl Iterator<Item = EventKind> + '_ {
        self.entries.iter().filter(|(_, e)| e.enabled).map(|(k, _)| *k)
    }

    // ── Selection ─────────────────────────────────────────────────────────

    /// Kinds eligible to fire right now.
    ///
    /// Always-offerable enabled kinds are always in.  The remaining enabled
    /// kinds join when harder events are allowed while solo, when nothing
    /// always-offerable is enabled, or when the player has more than one
    /// active agent.
    pub fn allowed_kinds(&self, harder_when_solo: bool, population: usize) -> Vec<EventKind> {
        let mut allowed: Vec<EventKind> = self
            .enabled_kinds()
            .filter(|k| k.always_offerable())
            .collect();

        if harder_when_solo || allowed.is_empty() || population > 1 {
            allowed.extend(self.enabled_kinds().filter(|k| !k.always_offerable()));
        }
        allowed
    }

    /// Uniform pick from `allowed`.  `None` when it is empty.
    pub fn choose<R: RandomSource + ?Sized>(allowed: &[EventKind], rng: &mut R) -> Option<EventKind> {
        rng.random_index(allowed.len()).map(|i| allowed[i])
    }

    /// Run the handler for `ctx.kind`.
    ///
    /// Returns the handler's diagnostic flag, or `None` if no handler is
    /// registered for the kind.
    pub fn fire(&mut self, ctx: &mut EventContext<'_>) -> Option<bool> {
        let entry = self.entries.get_mut(&ctx.kind)?;
        Some(entry.handler.fire(ctx))
    }
}

impl fmt::Debug for EventCatalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.entries.iter().map(|(k, e)| (k, e.enabled)))
            .finish()
    }
}
