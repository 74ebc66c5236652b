//! `ru-session` — the reunion director as one owned object.
//!
//! # Event lifecycle
//!
//! ```text
//! host tick ──► Session::on_tick(now)
//!                 ① Scheduler::poll    ScheduledAt(T ≤ now) → InProgress
//!                 ② Dispatch           guards: pool non-empty, session context
//!                 ③ Catalog            allowed kinds → uniform pick → handler
//!                 ④ Follow-up          handler's ScheduleMode, if any, applied
//!
//! host reports ─► return_agent / on_agent_recruited / on_agent_departed /
//!                 finish_event  → release InProgress, RequestSchedule
//! ```
//!
//! # Modules
//!
//! | Module        | Contents                                               |
//! |---------------|--------------------------------------------------------|
//! | [`config`]    | `Settings` (JSON, env overrides, normalization)        |
//! | [`notify`]    | `NotificationSink`, `TracingSink`, `MemorySink`        |
//! | [`state`]     | `SessionState` — the persisted triple                  |
//! | [`reconcile`] | `ReconcileScan`, `ReconcileReport`                     |
//! | [`session`]   | `Session<H, R>`                                        |
//! | [`builder`]   | `SessionBuilder<H, R>`                                 |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! let mut session = SessionBuilder::new(my_host, SimRng::from_entropy())
//!     .settings(Settings::load(Path::new("reunion.json"))?)
//!     .build()?;
//! session.init_new_game();
//! session.admit(Agent::new("pawn-17", "Ann", 25 * YEAR))?;
//! loop {
//!     session.on_tick(Tick(host_tick));
//! }
//! ```

pub mod builder;
pub mod config;
pub mod error;
pub mod notify;
pub mod reconcile;
pub mod session;
pub mod state;


pub use builder::SessionBuilder;
pub use config::Settings;
pub use error::{SessionError, SessionResult};
pub use notify::{Level, MemorySink, Notice, NotificationSink, TracingSink};
pub use reconcile::{ReconcileReport, ReconcileScan};
pub use session::Session;
pub use state::SessionState;
