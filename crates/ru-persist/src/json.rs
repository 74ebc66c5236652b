//! JSON file backend.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use ru_session::SessionState;

use crate::PersistResult;
use crate::adapter::PersistenceAdapter;

/// Saves the state as one pretty-printed JSON document.
///
/// Writes go to `<path>.tmp` first and are renamed over the target, so a
/// crash mid-save leaves the previous file intact.
#[derive(Debug, Clone)]
pub struct JsonFileAdapter {
    path: PathBuf,
}

impl JsonFileAdapter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self.path.as_os_str().to_owned();
        name.push(".tmp");
        PathBuf::from(name)
    }
}

impl PersistenceAdapter for JsonFileAdapter {
    fn save(&mut self, state: &SessionState) -> PersistResult<()> {
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir)?;
        }
        let tmp = self.tmp_path();
        {
            let mut out = BufWriter::new(File::create(&tmp)?);
            serde_json::to_writer_pretty(&mut out, state)?;
            out.flush()?;
        }
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    fn load(&mut self) -> PersistResult<Option<SessionState>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let reader = BufReader::new(File::open(&self.path)?);
        Ok(Some(serde_json::from_reader(reader)?))
    }
}
