// regexer/src/utils/session_store.rs
//! File-backed session storage for the `regexer` CLI tool.
//!
//! The last pattern and text are kept in a small JSON object so the next run
//! can restore them. Reads take a shared lock, writes go to a temporary file
//! under an exclusive lock and are renamed into place.

use anyhow::{Context, Result};
use log::debug;
use regexer_core::SessionStore;
use std::collections::{BTreeMap, HashMap};
use std::fs::{self, OpenOptions};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

const STATE_DIR_NAME: &str = "regexer";
const STATE_FILE_NAME: &str = "session.json";
const STATE_FILE_TMP_SUFFIX: &str = ".tmp";

/// Default location: `<data dir>/regexer/session.json`.
pub fn default_state_path() -> Option<PathBuf> {
    dirs::data_dir().map(|d| d.join(STATE_DIR_NAME).join(STATE_FILE_NAME))
}

#[derive(Debug, Clone)]
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<BTreeMap<String, String>> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }

        let mut f = OpenOptions::new()
            .read(true)
            .open(&self.path)
            .with_context(|| format!("Failed to open session file {}", self.path.display()))?;
        fs2::FileExt::lock_shared(&f)?;
        let mut raw = Vec::new();
        let read = f.read_to_end(&mut raw);
        fs2::FileExt::unlock(&f)?;
        read?;

        if raw.is_empty() {
            return Ok(BTreeMap::new());
        }
        let entries = serde_json::from_slice(&raw)
            .with_context(|| format!("Session file {} is not valid JSON", self.path.display()))?;
        Ok(entries)
    }

    fn write_all(&self, entries: &BTreeMap<String, String>) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_vec_pretty(entries)?;
        let tmp_path = self.path.with_extension(format!(
            "{}{}",
            self.path.extension().map(|s| s.to_string_lossy()).unwrap_or_default(),
            STATE_FILE_TMP_SUFFIX
        ));
        {
            let mut tmp = OpenOptions::new().create(true).write(true).truncate(true).open(&tmp_path)?;
            fs2::FileExt::lock_exclusive(&tmp)?;
            tmp.write_all(&json)?;
            tmp.flush()?;
            fs2::FileExt::unlock(&tmp)?;
        }

        fs::rename(&tmp_path, &self.path)
            .with_context(|| format!("Failed to write session file {}", self.path.display()))?;
        debug!("Session saved to {}", self.path.display());
        Ok(())
    }

    /// Removes the session file. Returns false when there was nothing to remove.
    pub fn clear(&self) -> Result<bool> {
        if !self.path.exists() {
            return Ok(false);
        }
        fs::remove_file(&self.path)
            .with_context(|| format!("Failed to remove session file {}", self.path.display()))?;
        Ok(true)
    }
}

impl SessionStore for FileSessionStore {
    fn get(&self, keys: &[&str]) -> Result<HashMap<String, String>> {
        let mut all = self.read_all()?;
        Ok(keys
            .iter()
            .filter_map(|k| all.remove(*k).map(|v| (k.to_string(), v)))
            .collect())
    }

    fn set(&mut self, entries: HashMap<String, String>) -> Result<()> {
        let mut all = self.read_all().unwrap_or_default();
        all.extend(entries);
        self.write_all(&all)
    }
}
