// regexer/tests/session_store_tests.rs
use anyhow::Result;
use log::{debug, LevelFilter};
use std::collections::HashMap;
use tempfile::TempDir;

use regexer::logger;
use regexer::utils::session_store::FileSessionStore;
use regexer_core::store::{PATTERN_KEY, TEXT_KEY};
use regexer_core::{load_session, save_session, SessionStore};

fn store_in(dir: &TempDir) -> FileSessionStore {
    logger::init_logger(Some(LevelFilter::Debug));
    let path = dir.path().join("session.json");
    debug!("Test session file at {:?}", path);
    FileSessionStore::new(path)
}

#[test]
fn later_saves_replace_earlier_ones() -> Result<()> {
    let dir = TempDir::new()?;
    let mut store = store_in(&dir);
    save_session(&mut store, "first", "one")?;
    save_session(&mut store, "second", "two")?;

    let session = load_session(&store)?;
    assert_eq!(session.pattern.as_deref(), Some("second"));
    assert_eq!(session.text.as_deref(), Some("two"));
    Ok(())
}

#[test]
fn unrelated_keys_survive_a_save() -> Result<()> {
    let dir = TempDir::new()?;
    let mut store = store_in(&dir);
    store.set(HashMap::from([("theme".to_string(), "dark".to_string())]))?;
    save_session(&mut store, "p", "t")?;

    let got = store.get(&["theme", PATTERN_KEY, TEXT_KEY, "missing"])?;
    assert_eq!(got.len(), 3);
    assert_eq!(got["theme"], "dark");
    Ok(())
}

#[test]
fn file_is_plain_json_object() -> Result<()> {
    let dir = TempDir::new()?;
    let mut store = store_in(&dir);
    save_session(&mut store, "/a/g", "b")?;

    let raw = std::fs::read_to_string(store.path())?;
    let value: serde_json::Value = serde_json::from_str(&raw)?;
    assert_eq!(value["regex"], "/a/g");
    assert_eq!(value["text"], "b");
    Ok(())
}
