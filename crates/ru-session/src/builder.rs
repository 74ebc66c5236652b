//! Fluent builder for constructing a [`Session`].

use ru_core::{GameClock, RandomSource, Tick};
use ru_events::{EventCatalog, EventKind, Host};
use ru_schedule::Scheduler;
use ru_pool::AgentPool;

use crate::{NotificationSink, Session, SessionError, SessionResult, Settings, TracingSink};

/// Fluent builder for [`Session<H, R>`].
///
/// # Required inputs
///
/// - `H: Host` — the host simulation
/// - `R: RandomSource` — the host's generator, or a [`ru_core::SimRng`]
///
/// # Optional inputs (have defaults)
///
/// | Method             | Default                                  |
/// |--------------------|------------------------------------------|
/// | `.settings(s)`     | `Settings::default()`                    |
/// | `.catalog(c)`      | `EventCatalog::with_builtin_handlers()`  |
/// | `.sink(s)`         | `TracingSink`                            |
/// | `.start_tick(t)`   | `Tick::ZERO`                             |
///
/// # Example
///
/// ```rust,ignore
/// let mut session = SessionBuilder::new(host, SimRng::new(42))
///     .settings(Settings::from_env())
///     .start_tick(Tick(now))
///     .build()?;
/// session.restore(saved_state);
/// ```
pub struct SessionBuilder<H: Host, R: RandomSource> {
    host:       H,
    rng:        R,
    settings:   Option<Settings>,
    catalog:    Option<EventCatalog>,
    sink:       Option<Box<dyn NotificationSink>>,
    start_tick: Tick,
}

impl<H: Host, R: RandomSource> SessionBuilder<H, R> {
    pub fn new(host: H, rng: R) -> Self {
        Self {
            host,
            rng,
            settings:   None,
            catalog:    None,
            sink:       None,
            start_tick: Tick::ZERO,
        }
    }

    pub fn settings(mut self, settings: Settings) -> Self {
        self.settings = Some(settings);
        self
    }

    /// Use a custom handler table.  Its enabled flags are overwritten from
    /// the settings at build time.
    pub fn catalog(mut self, catalog: EventCatalog) -> Self {
        self.catalog = Some(catalog);
        self
    }

    pub fn sink(mut self, sink: impl NotificationSink + 'static) -> Self {
        self.sink = Some(Box::new(sink));
        self
    }

    pub fn start_tick(mut self, tick: Tick) -> Self {
        self.start_tick = tick;
        self
    }

    /// Validate inputs and return an empty session (no agents, nothing
    /// scheduled).  Follow with `restore` or `init_new_game`.
    pub fn build(self) -> SessionResult<Session<H, R>> {
        let settings = self.settings.unwrap_or_default().normalized();

        let mut catalog = self.catalog.unwrap_or_else(EventCatalog::with_builtin_handlers);
        if !EventKind::ALL.iter().any(|k| catalog.has_handler(*k)) {
            return Err(SessionError::Config("event catalog has no handlers".into()));
        }
        catalog.apply_flags(&settings.event_allow);

        Ok(Session {
            clock:         GameClock::new(self.start_tick),
            host:          self.host,
            interval:      settings.interval(),
            settings,
            pool:          AgentPool::new(),
            scheduler:     Scheduler::new(),
            catalog,
            rng:           self.rng,
            sink:          self.sink.unwrap_or_else(|| Box::new(TracingSink)),
            pending:       Vec::new(),
            unowned_event: false,
        })
    }
}
