//! Unit tests for ru-persist.

use ru_core::{SimRng, TICKS_PER_DAY, Tick};
use ru_events::{Arrival, Host};
use ru_pool::{Agent, HealthHooks};
use ru_session::{MemorySink, Session, SessionBuilder, SessionState, Settings};

// ── Helpers ───────────────────────────────────────────────────────────────────

#[derive(Default)]
struct TestHost {
    delivered: Vec<Agent>,
}

impl HealthHooks for TestHost {}

impl Host for TestHost {
    fn population_size(&self) -> usize {
        3
    }

    fn has_active_session_context(&self) -> bool {
        true
    }

    fn deliver(&mut self, agent: Agent, _arrival: Arrival) {
        self.delivered.push(agent);
    }
}

type TestSession = Session<TestHost, SimRng>;

fn session(seed: u64, start: u64) -> (TestSession, MemorySink) {
    let sink = MemorySink::new();
    let settings = Settings {
        min_days_between_events: 2,
        max_days_between_events: 4,
        ..Settings::default()
    };
    let session = SessionBuilder::new(TestHost::default(), SimRng::new(seed))
        .settings(settings)
        .sink(sink.clone())
        .start_tick(Tick(start))
        .build()
        .unwrap();
    (session, sink)
}

/// A session with `ids` admitted at tick 1000 and one of them checked out.
fn played_session(ids: &[&str]) -> TestSession {
    let (mut s, _) = session(7, 1_000);
    for id in ids {
        s.admit(Agent::new(*id, format!("Name-{id}"), 25 * 60 * TICKS_PER_DAY as i64)).unwrap();
    }
    s.checkout_random().unwrap();
    s
}

// ── Memory adapter + session wiring ──────────────────────────────────────────

#[cfg(test)]
mod memory_tests {
    use super::*;
    use crate::{MemoryAdapter, PersistenceAdapter, load_session, save_session};

    #[test]
    fn empty_adapter_loads_none() {
        let mut adapter = MemoryAdapter::new();
        assert!(adapter.load().unwrap().is_none());
        assert_eq!(adapter.save_count(), 0);
    }

    #[test]
    fn save_then_load_restores_session() {
        let original = played_session(&["a", "b", "c"]);
        let mut adapter = MemoryAdapter::new();
        save_session(&original, &mut adapter).unwrap();
        assert_eq!(adapter.save_count(), 1);

        let (mut restored, _) = session(99, 1_000);
        assert!(load_session(&mut restored, &mut adapter).unwrap());

        assert_eq!(restored.pool().count(), 2);
        assert_eq!(restored.pool().dispatched_count(), 1);
        assert_eq!(restored.schedule_state(), original.schedule_state());
        assert!(restored.is_consistent());
    }

    #[test]
    fn nothing_saved_starts_new_game() {
        let mut s = played_session(&["a"]);
        let mut adapter = MemoryAdapter::new();
        assert!(!load_session(&mut s, &mut adapter).unwrap());
        assert!(s.pool().is_empty());
        assert_eq!(s.pool().dispatched_count(), 0);
        assert!(s.schedule_state().fire_tick().is_none());
    }

    #[test]
    fn seeded_adapter_reports_load_messages() {
        let mut adapter = MemoryAdapter::with_state(SessionState::default());
        let (mut s, sink) = session(1, 0);
        assert!(load_session(&mut s, &mut adapter).unwrap());
        assert!(sink.contains("Game loaded, no agents"));
    }
}

// ── JSON file adapter ────────────────────────────────────────────────────────

#[cfg(test)]
mod json_tests {
    use super::*;
    use crate::{JsonFileAdapter, PersistenceAdapter, load_session, save_session};
    use tempfile::tempdir;

    #[test]
    fn missing_file_loads_none() {
        let dir = tempdir().unwrap();
        let mut adapter = JsonFileAdapter::new(dir.path().join("absent.json"));
        assert!(adapter.load().unwrap().is_none());
    }

    #[test]
    fn file_uses_legacy_keys() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("save.json");
        let mut adapter = JsonFileAdapter::new(&path);
        save_session(&played_session(&["a", "b"]), &mut adapter).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let json: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert!(json["Reunion_NextEventTick"].as_i64().unwrap() > 0);
        assert_eq!(json["Reunion_AllyAvailable"].as_array().unwrap().len(), 1);
        assert_eq!(json["Reunion_AllySpawned"].as_array().unwrap().len(), 1);
        assert!(!dir.path().join("save.json.tmp").exists());
    }

    #[test]
    fn creates_parent_directories() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("saves").join("slot1").join("reunion.json");
        let mut adapter = JsonFileAdapter::new(&path);
        adapter.save(&SessionState::default()).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn round_trip_preserves_frozen_age() {
        let dir = tempdir().unwrap();
        let mut adapter = JsonFileAdapter::new(dir.path().join("save.json"));

        let (mut s, _) = session(3, 1_000);
        let age = 30 * 60 * TICKS_PER_DAY as i64;
        s.admit(Agent::new("x", "Xan", age)).unwrap();
        save_session(&s, &mut adapter).unwrap();

        // Reload much later: the age still comes back as it was at admission.
        let (mut later, _) = session(3, 500_000);
        load_session(&mut later, &mut adapter).unwrap();
        let back = later.checkout_random().unwrap();
        assert_eq!(back.biological_age_ticks, age);
        assert!(!back.is_dormant());
    }

    #[test]
    fn empty_document_loads_as_absent_collections() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("save.json");
        std::fs::write(&path, "{}").unwrap();

        let state = JsonFileAdapter::new(&path).load().unwrap().unwrap();
        assert_eq!(state.next_event_tick, 0);
        assert!(state.available.is_none());
        assert!(state.dispatched.is_none());
    }

    #[test]
    fn malformed_file_is_a_json_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("save.json");
        std::fs::write(&path, "not json").unwrap();
        let err = JsonFileAdapter::new(&path).load().unwrap_err();
        assert!(matches!(err, crate::PersistError::Json(_)));
    }
}

// ── CSV roster export ────────────────────────────────────────────────────────

#[cfg(test)]
mod csv_tests {
    use super::*;
    use crate::CsvRosterWriter;
    use tempfile::tempdir;

    #[test]
    fn header_and_rows() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("roster.csv");
        let s = played_session(&["a", "b", "c"]);

        let mut w = CsvRosterWriter::new(&path).unwrap();
        w.write_roster(Tick(120_000), s.pool()).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(&path).unwrap();
        let headers = rdr.headers().unwrap().clone();
        assert_eq!(&headers[0], "tick");
        assert_eq!(&headers[1], "agent_id");
        assert_eq!(&headers[3], "status");
        assert_eq!(&headers[4], "age_years");

        let rows: Vec<csv::StringRecord> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 3);
        assert!(rows.iter().all(|r| &r[0] == "120000"));

        let available: Vec<_> = rows.iter().filter(|r| &r[3] == "available").collect();
        assert_eq!(available.len(), 2);
        for row in &available {
            assert!(row[2].starts_with("Name-"));
            assert_eq!(&row[4], "25.00");
        }

        let dispatched: Vec<_> = rows.iter().filter(|r| &r[3] == "dispatched").collect();
        assert_eq!(dispatched.len(), 1);
        assert_eq!(&dispatched[0][2], "");
    }

    #[test]
    fn repeated_snapshots_append() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("roster.csv");
        let s = played_session(&["a", "b"]);

        let mut w = CsvRosterWriter::new(&path).unwrap();
        w.write_roster(Tick(1), s.pool()).unwrap();
        w.write_roster(Tick(2), s.pool()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();

        let rdr = csv::Reader::from_path(&path).unwrap();
        assert_eq!(rdr.into_records().count(), 4);
    }
}

// ── SQLite adapter ───────────────────────────────────────────────────────────

#[cfg(all(test, feature = "sqlite"))]
mod sqlite_tests {
    use super::*;
    use crate::{PersistenceAdapter, SqliteAdapter, load_session, save_session};
    use tempfile::tempdir;

    #[test]
    fn fresh_database_loads_none() {
        let mut adapter = SqliteAdapter::in_memory().unwrap();
        assert!(adapter.load().unwrap().is_none());
    }

    #[test]
    fn round_trip_through_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("reunion.db");
        let original = played_session(&["a", "b", "c"]);

        {
            let mut adapter = SqliteAdapter::open(&path).unwrap();
            save_session(&original, &mut adapter).unwrap();
            // Saving twice replaces rather than duplicating.
            save_session(&original, &mut adapter).unwrap();
        }

        let mut adapter = SqliteAdapter::open(&path).unwrap();
        let state = adapter.load().unwrap().unwrap();
        assert_eq!(state, original.snapshot());

        let (mut restored, _) = session(5, 1_000);
        assert!(load_session(&mut restored, &mut adapter).unwrap());
        assert_eq!(restored.pool().count(), 2);
        assert_eq!(restored.pool().dispatched_count(), 1);
    }

    #[test]
    fn event_agents_are_kept_only_while_held() {
        let mut adapter = SqliteAdapter::in_memory().unwrap();
        let held = SessionState {
            next_event_tick: -1,
            dispatched:      Some(vec!["q".into()]),
            pending:         Some(vec!["q".into()]),
            ..SessionState::default()
        };
        adapter.save(&held).unwrap();
        assert_eq!(adapter.load().unwrap().unwrap().pending, Some(vec!["q".into()]));

        let released = SessionState { next_event_tick: 0, pending: None, ..held };
        adapter.save(&released).unwrap();
        assert!(adapter.load().unwrap().unwrap().pending.is_none());
    }

    #[test]
    fn absent_state_saves_as_empty_lists() {
        let mut adapter = SqliteAdapter::in_memory().unwrap();
        adapter.save(&SessionState::default()).unwrap();
        let state = adapter.load().unwrap().unwrap();
        assert_eq!(state.next_event_tick, 0);
        assert_eq!(state.available, Some(Vec::new()));
        assert_eq!(state.dispatched, Some(Vec::new()));
    }
}
