//! `ru-core` — foundational types for the reunion event director.
//!
//! This crate is a dependency of every other `ru-*` crate.  It has no `ru-*`
//! dependencies and one external one (`rand`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `AgentId`                                             |
//! | [`time`]        | `Tick`, `GameClock`, day ↔ tick conversion            |
//! | [`rng`]         | `RandomSource` trait, `SimRng`                        |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |
//!           | Required by `ru-session` for the save state.               |

pub mod ids;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use ids::AgentId;
pub use rng::{RandomSource, SimRng};
pub use time::{
    days_to_ticks, format_days, GameClock, Tick, DAYS_PER_QUADRUM, DAYS_PER_YEAR, TICKS_PER_DAY,
};
