//! `ru-schedule` — when may the next reunion event fire?
//!
//! # Crate layout
//!
//! | Module        | Contents                                                  |
//! |---------------|-----------------------------------------------------------|
//! | [`state`]     | `ScheduleState`, `ScheduleMode`                           |
//! | [`interval`]  | `IntervalConfig` (min/max spacing between events)         |
//! | [`scheduler`] | `Scheduler` state machine, `ScheduleOutcome`              |
//!
//! # State machine (summary)
//!
//! ```text
//!                 request(mode)                     poll(now ≥ T)
//!  NotScheduled ─────────────────▶ ScheduledAt(T) ───────────────▶ InProgress
//!       ▲                               ▲   │                          │
//!       │ request with empty pool       │   └── request(SettingsChanged│Forced)
//!       │                               └──────── request(Forced) ─────┘
//! ```
//!
//! The scheduler only knows the Available count it is given; it never reads
//! the pool directly.  Messages about the outcome are the caller's job.

pub mod interval;
pub mod scheduler;
pub mod state;


pub use interval::IntervalConfig;
pub use scheduler::{ScheduleOutcome, Scheduler};
pub use state::{ScheduleMode, ScheduleState};
