//! CSV roster export.
//!
//! One row per tracked agent per call to
//! [`write_roster`](CsvRosterWriter::write_roster):
//!
//! ```text
//! tick,agent_id,name,status,age_years
//! 120000,pawn-3,Ann,available,25.00
//! 120000,pawn-9,,dispatched,
//! ```
//!
//! Ages are the age at admission; the freeze offset is added back.
//! Dispatched agents belong to the host while active, so only their ID is
//! known here.

use std::fs::File;
use std::path::Path;

use csv::Writer;

use ru_core::{DAYS_PER_YEAR, TICKS_PER_DAY, Tick};
use ru_pool::AgentPool;

use crate::PersistResult;

const TICKS_PER_YEAR: f64 = (TICKS_PER_DAY * DAYS_PER_YEAR as u64) as f64;

pub struct CsvRosterWriter {
    out:      Writer<File>,
    finished: bool,
}

impl CsvRosterWriter {
    /// Create (or truncate) the file at `path` and write the header row.
    pub fn new(path: &Path) -> PersistResult<Self> {
        let mut out = Writer::from_path(path)?;
        out.write_record(["tick", "agent_id", "name", "status", "age_years"])?;
        Ok(Self { out, finished: false })
    }

    /// Append the pool's membership as seen at `tick`.  Dispatched IDs are
    /// written in sorted order.
    pub fn write_roster(&mut self, tick: Tick, pool: &AgentPool) -> PersistResult<()> {
        let tick = tick.0.to_string();
        for agent in pool.available() {
            let age = agent.biological_age_ticks + agent.reactivation_offset_ticks.unwrap_or(0) as i64;
            self.out.write_record(&[
                tick.clone(),
                agent.id.to_string(),
                agent.name.clone(),
                "available".to_string(),
                format!("{:.2}", age as f64 / TICKS_PER_YEAR),
            ])?;
        }

        let mut dispatched: Vec<_> = pool.dispatched().collect();
        dispatched.sort_unstable();
        for id in dispatched {
            self.out.write_record(&[
                tick.clone(),
                id.to_string(),
                String::new(),
                "dispatched".to_string(),
                String::new(),
            ])?;
        }
        Ok(())
    }

    /// Flush the file.  Idempotent.
    pub fn finish(&mut self) -> PersistResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.out.flush()?;
        Ok(())
    }
}
