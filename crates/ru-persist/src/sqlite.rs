//! SQLite backend (feature `sqlite`).
//!
//! The three saved values live in a key/value table under their legacy
//! names, each as a JSON text value:
//!
//! | key                     | value                       |
//! |-------------------------|-----------------------------|
//! | `Reunion_NextEventTick` | integer (0 / -1 / T)        |
//! | `Reunion_AllyAvailable` | array of agent snapshots    |
//! | `Reunion_AllySpawned`   | array of agent IDs          |
//! | `Reunion_PendingEvent`  | array of agent IDs          |
//!
//! A key missing from the table loads as absent, the same as a missing key
//! in a JSON save.  `Reunion_PendingEvent` is only present while an event
//! holds agents; saving without one deletes the row.

use std::path::Path;

use rusqlite::{Connection, OptionalExtension};

use ru_session::SessionState;

use crate::PersistResult;
use crate::adapter::PersistenceAdapter;

const KEY_NEXT_EVENT_TICK: &str = "Reunion_NextEventTick";
const KEY_AVAILABLE:       &str = "Reunion_AllyAvailable";
const KEY_DISPATCHED:      &str = "Reunion_AllySpawned";
const KEY_PENDING:         &str = "Reunion_PendingEvent";

/// Saves the state into an SQLite database.
pub struct SqliteAdapter {
    conn: Connection,
}

impl SqliteAdapter {
    /// Open (or create) the database at `path` and initialise the schema.
    pub fn open(path: &Path) -> PersistResult<Self> {
        Self::with_connection(Connection::open(path)?)
    }

    /// A private in-memory database.
    pub fn in_memory() -> PersistResult<Self> {
        Self::with_connection(Connection::open_in_memory()?)
    }

    fn with_connection(conn: Connection) -> PersistResult<Self> {
        conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS reunion_state (
                 key   TEXT PRIMARY KEY,
                 value TEXT NOT NULL
             );",
        )?;
        Ok(Self { conn })
    }

    fn get(&self, key: &str) -> PersistResult<Option<String>> {
        Ok(self
            .conn
            .query_row("SELECT value FROM reunion_state WHERE key = ?1", [key], |row| row.get(0))
            .optional()?)
    }
}

impl PersistenceAdapter for SqliteAdapter {
    fn save(&mut self, state: &SessionState) -> PersistResult<()> {
        let rows = [
            (KEY_NEXT_EVENT_TICK, serde_json::to_string(&state.next_event_tick)?),
            (KEY_AVAILABLE,       serde_json::to_string(&state.available.clone().unwrap_or_default())?),
            (KEY_DISPATCHED,      serde_json::to_string(&state.dispatched.clone().unwrap_or_default())?),
        ];

        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT OR REPLACE INTO reunion_state (key, value) VALUES (?1, ?2)",
            )?;
            for (key, value) in &rows {
                stmt.execute(rusqlite::params![key, value])?;
            }
            match &state.pending {
                Some(pending) => {
                    stmt.execute(rusqlite::params![KEY_PENDING, serde_json::to_string(pending)?])?;
                }
                None => {
                    tx.execute("DELETE FROM reunion_state WHERE key = ?1", [KEY_PENDING])?;
                }
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn load(&mut self) -> PersistResult<Option<SessionState>> {
        let next = self.get(KEY_NEXT_EVENT_TICK)?;
        let available = self.get(KEY_AVAILABLE)?;
        let dispatched = self.get(KEY_DISPATCHED)?;
        let pending = self.get(KEY_PENDING)?;

        if next.is_none() && available.is_none() && dispatched.is_none() {
            return Ok(None);
        }

        Ok(Some(SessionState {
            next_event_tick: next.map(|v| serde_json::from_str(&v)).transpose()?.unwrap_or(0),
            available:       available.map(|v| serde_json::from_str(&v)).transpose()?,
            dispatched:      dispatched.map(|v| serde_json::from_str(&v)).transpose()?,
            pending:         pending.map(|v| serde_json::from_str(&v)).transpose()?,
        }))
    }
}
