//! `ru-pool` — dormant agent storage for the reunion event director.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                    |
//! |-------------|-------------------------------------------------------------|
//! | [`agent`]   | `Agent` snapshot, `HealthRecord`, `Injury`                  |
//! | [`hooks`]   | `HealthHooks` trait, `SnapshotHealth` default               |
//! | [`pool`]    | `AgentPool`, `Rejection`, `ReturnOutcome`                   |
//! | [`error`]   | `PoolError`, `PoolResult<T>`                                |
//!
//! # Membership model
//!
//! ```text
//!            admit                checkout_random
//!  (world) ────────▶ Available ───────────────────▶ Dispatched ──▶ (host)
//!                        ▲                              │
//!                        └──────── return_agent ────────┘
//!                                  (unless terminal → dropped)
//! ```
//!
//! An ID is a member of at most one of {Available, Dispatched} at any time.
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                 |
//! |---------|--------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on all public types. |

pub mod agent;
pub mod error;
pub mod hooks;
pub mod pool;


pub use agent::{Agent, HealthRecord, Injury, InjuryKind};
pub use error::{PoolError, PoolResult};
pub use hooks::{HealthHooks, SnapshotHealth};
pub use pool::{AgentPool, Rejection, ReturnOutcome};
