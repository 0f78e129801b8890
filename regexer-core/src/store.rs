// regexer-core/src/store.rs
//! The key-value store used to remember the last pattern and text.
//!
//! The core never touches storage itself. Front ends implement
//! [`SessionStore`] and use [`load_session`] / [`save_session`] to read and
//! write the two fixed keys.

use std::collections::HashMap;

use anyhow::Result;
use log::debug;
use serde::{Deserialize, Serialize};

/// Key under which the last pattern is stored.
pub const PATTERN_KEY: &str = "regex";
/// Key under which the last text is stored.
pub const TEXT_KEY: &str = "text";

/// A string-to-string store.
pub trait SessionStore {
    /// Returns the stored values for the keys that exist. Missing keys are
    /// simply absent from the map.
    fn get(&self, keys: &[&str]) -> Result<HashMap<String, String>>;

    /// Stores every entry, replacing existing values.
    fn set(&mut self, entries: HashMap<String, String>) -> Result<()>;
}

/// The last pattern/text pair, as far as the store knows it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedSession {
    pub pattern: Option<String>,
    pub text: Option<String>,
}

pub fn load_session(store: &dyn SessionStore) -> Result<SavedSession> {
    let mut values = store.get(&[PATTERN_KEY, TEXT_KEY])?;
    debug!("Restored {} session value(s).", values.len());
    Ok(SavedSession {
        pattern: values.remove(PATTERN_KEY),
        text: values.remove(TEXT_KEY),
    })
}

pub fn save_session(store: &mut dyn SessionStore, pattern: &str, text: &str) -> Result<()> {
    let entries = HashMap::from([
        (PATTERN_KEY.to_string(), pattern.to_string()),
        (TEXT_KEY.to_string(), text.to_string()),
    ]);
    store.set(entries)
}

/// A store that lives only as long as the value does.
#[derive(Debug, Default, Clone)]
pub struct MemorySessionStore {
    entries: HashMap<String, String>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self, keys: &[&str]) -> Result<HashMap<String, String>> {
        Ok(keys
            .iter()
            .filter_map(|k| self.entries.get(*k).map(|v| (k.to_string(), v.clone())))
            .collect())
    }

    fn set(&mut self, entries: HashMap<String, String>) -> Result<()> {
        self.entries.extend(entries);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_store_restores_nothing() {
        let store = MemorySessionStore::new();
        assert_eq!(load_session(&store).unwrap(), SavedSession::default());
    }

    #[test]
    fn save_then_load() {
        let mut store = MemorySessionStore::new();
        save_session(&mut store, "/test/g", "Yo! test").unwrap();
        let session = load_session(&store).unwrap();
        assert_eq!(session.pattern.as_deref(), Some("/test/g"));
        assert_eq!(session.text.as_deref(), Some("Yo! test"));
    }

    #[test]
    fn get_skips_unknown_keys() {
        let mut store = MemorySessionStore::new();
        store.set(HashMap::from([("a".to_string(), "1".to_string())])).unwrap();
        let got = store.get(&["a", "b"]).unwrap();
        assert_eq!(got.len(), 1);
        assert_eq!(got["a"], "1");
    }
}
