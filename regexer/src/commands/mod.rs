//! Command implementations and the dispatcher used by `main`.

pub mod session;
pub mod tester;

use anyhow::{anyhow, Context, Result};
use is_terminal::IsTerminal;
use std::io;

use regexer_core::RegexerConfig;

use crate::cli::{Cli, Commands};
use crate::ui::output_format;
use crate::ui::theme::ThemeMap;
use crate::utils::session_store::{default_state_path, FileSessionStore};

/// Helper for printing info messages to stderr.
pub fn info_msg(msg: impl AsRef<str>, theme: &ThemeMap) {
    let stderr_supports_color = io::stderr().is_terminal();
    let _ = output_format::print_info_message(&mut io::stderr(), msg.as_ref(), theme, stderr_supports_color);
}

pub fn success_msg(msg: impl AsRef<str>, theme: &ThemeMap) {
    let stderr_supports_color = io::stderr().is_terminal();
    let _ = output_format::print_success_message(&mut io::stderr(), msg.as_ref(), theme, stderr_supports_color);
}

/// Helper for printing error messages to stderr.
pub fn error_msg(msg: impl AsRef<str>, theme: &ThemeMap) {
    let stderr_supports_color = io::stderr().is_terminal();
    let _ = output_format::print_error_message(&mut io::stderr(), msg.as_ref(), theme, stderr_supports_color);
}

/// Helper for printing warning messages to stderr.
pub fn warn_msg(msg: impl AsRef<str>, theme: &ThemeMap) {
    let stderr_supports_color = io::stderr().is_terminal();
    let _ = output_format::print_warn_message(&mut io::stderr(), msg.as_ref(), theme, stderr_supports_color);
}

fn load_config(cli: &Cli) -> Result<RegexerConfig> {
    match &cli.config {
        Some(path) => RegexerConfig::load_with_file(path),
        None => RegexerConfig::load_default(),
    }
}

fn session_store(cli: &Cli) -> Result<FileSessionStore> {
    let path = cli
        .state_file
        .clone()
        .or_else(default_state_path)
        .ok_or_else(|| anyhow!("Could not determine where to keep the session file; pass --state-file"))?;
    Ok(FileSessionStore::new(path))
}

/// Runs the subcommand selected on the command line.
pub fn dispatch(cli: &Cli, theme_map: &ThemeMap) -> Result<()> {
    let stdout = io::stdout();
    let supports_color = stdout.is_terminal();
    let mut writer = stdout.lock();
    let mut store = session_store(cli)?;

    match &cli.command {
        Commands::Test(cmd) => {
            let config = load_config(cli).context("Failed to load configuration")?;
            let opts = tester::TestOptions::from_command(cmd)?;
            tester::run_test(opts, &config, &mut store, theme_map, &mut writer, supports_color)
        }
        Commands::Session(cmd) => session::run_session(cmd, &store, theme_map, &mut writer, supports_color),
    }
}
