//! `ru-events` — what happens when a reunion event fires.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                        |
//! |-------------|-----------------------------------------------------------------|
//! | [`kind`]    | `EventKind` — the closed set of event variants                  |
//! | [`host`]    | `Host` trait (population, session context, delivery), `Arrival` |
//! | [`context`] | `EventContext<'a>` — what a handler may touch while firing      |
//! | [`handler`] | `EventHandler` trait                                            |
//! | [`builtin`] | `JoinHandler`, `PodCrashHandler`, `QuestHandler`                |
//! | [`catalog`] | `EventCatalog` — enabled flags, allowed-set rule, handler table |
//! | [`error`]   | `DispatchError`, `DispatchResult<T>`                            |
//!
//! # Design notes
//!
//! Handlers never hold the scheduler.  They check agents out of the pool
//! through the context, hand them to the host, and may leave a follow-up
//! schedule request on the context.  The session applies that request after
//! the handler returns, the same produce-then-apply split the tick loop uses
//! everywhere else.

pub mod builtin;
pub mod catalog;
pub mod context;
pub mod error;
pub mod handler;
pub mod host;
pub mod kind;


pub use builtin::{JoinHandler, PodCrashHandler, QuestHandler};
pub use catalog::EventCatalog;
pub use context::EventContext;
pub use error::{DispatchError, DispatchResult};
pub use handler::EventHandler;
pub use host::{Arrival, ArrivalStyle, Host};
pub use kind::EventKind;
