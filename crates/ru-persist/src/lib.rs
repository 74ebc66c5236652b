//! `ru-persist` — save/load backends for reunion sessions.
//!
//! | Feature   | Backend            | Storage                                        |
//! |-----------|--------------------|------------------------------------------------|
//! | *(none)*  | `JsonFileAdapter`  | one JSON document with the legacy save keys    |
//! | *(none)*  | `MemoryAdapter`    | in-process (tests, save-scumming tools)        |
//! | `sqlite`  | `SqliteAdapter`    | `reunion_state` key/value table                |
//!
//! All backends implement [`PersistenceAdapter`].  [`save_session`] and
//! [`load_session`] wire an adapter to a running
//! [`Session`](ru_session::Session).
//!
//! [`CsvRosterWriter`] is an export, not a backend: it appends the pool's
//! membership at a given tick to a CSV file for offline inspection.
//!
//! # Usage
//!
//! ```rust,ignore
//! use ru_persist::{JsonFileAdapter, load_session, save_session};
//!
//! let mut adapter = JsonFileAdapter::new("saves/colony.reunion.json");
//! load_session(&mut session, &mut adapter)?;
//! // … play …
//! save_session(&session, &mut adapter)?;
//! ```

pub mod adapter;
pub mod csv;
pub mod error;
pub mod json;

#[cfg(feature = "sqlite")]
pub mod sqlite;

#[cfg(test)]
mod tests;

pub use adapter::{MemoryAdapter, PersistenceAdapter, load_session, save_session};
pub use csv::CsvRosterWriter;
pub use error::{PersistError, PersistResult};
pub use json::JsonFileAdapter;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteAdapter;
