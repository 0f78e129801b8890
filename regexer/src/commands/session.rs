//! The `session` command: inspect or forget the remembered input.

use anyhow::Result;
use log::debug;
use owo_colors::OwoColorize;
use std::io::Write;

use regexer_core::load_session;

use crate::cli::SessionCommand;
use crate::commands::{info_msg, success_msg};
use crate::ui::theme::{style_for, ThemeEntry, ThemeMap};
use crate::utils::session_store::FileSessionStore;

const NOTHING_SAVED: &str = "(nothing saved)";

pub fn run_session<W: Write>(
    cmd: &SessionCommand,
    store: &FileSessionStore,
    theme_map: &ThemeMap,
    writer: &mut W,
    supports_color: bool,
) -> Result<()> {
    match cmd {
        SessionCommand::Show => {
            debug!("Reading session from {}", store.path().display());
            let saved = load_session(store)?;
            let header = style_for(theme_map, ThemeEntry::Header);
            for (title, value) in [("Pattern:", saved.pattern), ("Text:", saved.text)] {
                if supports_color {
                    writeln!(writer, "{}", title.style(header))?;
                } else {
                    writeln!(writer, "{}", title)?;
                }
                writeln!(writer, "{}", value.as_deref().unwrap_or(NOTHING_SAVED))?;
            }
        }
        SessionCommand::Clear => {
            if store.clear()? {
                success_msg("Saved session cleared.", theme_map);
            } else {
                info_msg("No saved session to clear.", theme_map);
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::theme::ThemeStyle;
    use regexer_core::save_session;

    #[test]
    fn show_prints_saved_values() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileSessionStore::new(dir.path().join("s.json"));
        save_session(&mut store, "/a/g", "banana").unwrap();

        let mut out = Vec::new();
        run_session(&SessionCommand::Show, &store, &ThemeStyle::default_theme_map(), &mut out, false).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Pattern:\n/a/g\nText:\nbanana\n");
    }

    #[test]
    fn show_without_session() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileSessionStore::new(dir.path().join("s.json"));
        let mut out = Vec::new();
        run_session(&SessionCommand::Show, &store, &ThemeStyle::default_theme_map(), &mut out, false).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Pattern:\n(nothing saved)\nText:\n(nothing saved)\n"
        );
    }
}
