//! The `test` command: validate, compile, render and print.

use anyhow::{Context, Result};
use is_terminal::IsTerminal;
use log::{debug, info};
use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

use regexer_core::{
    load_session, save_session, validate_input, MatchEngine, MatchReport, RegexEngine,
    RegexerConfig, RegexerError, SessionStore,
};

use crate::cli::{OutputFormat, TestCommand};
use crate::commands::warn_msg;
use crate::ui::highlight_view::write_highlighted;
use crate::ui::html::render_html;
use crate::ui::theme::ThemeMap;

/// Inputs for [`run_test`], detached from clap.
#[derive(Debug, Clone)]
pub struct TestOptions {
    pub pattern: Option<String>,
    pub text: Option<String>,
    pub format: OutputFormat,
    pub restore: bool,
    pub save: bool,
}

impl TestOptions {
    /// Resolves the text source of `cmd`: `--text`, then `--input-file`, then
    /// piped stdin. An interactive stdin is never read.
    pub fn from_command(cmd: &TestCommand) -> Result<Self> {
        let text = match (&cmd.text, &cmd.input_file) {
            (Some(text), _) => Some(text.clone()),
            (None, Some(path)) => Some(read_input_file(path)?),
            (None, None) if !io::stdin().is_terminal() => {
                let mut buffer = String::new();
                io::stdin()
                    .read_to_string(&mut buffer)
                    .context("Failed to read text from stdin")?;
                Some(buffer)
            }
            (None, None) => None,
        };

        Ok(Self {
            pattern: cmd.pattern.clone(),
            text,
            format: cmd.format,
            restore: cmd.restore,
            save: !cmd.no_save,
        })
    }
}

fn read_input_file(path: &PathBuf) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read input file {}", path.display()))
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Runs one pattern/text test and writes the result to `writer`.
pub fn run_test<W: Write>(
    opts: TestOptions,
    config: &RegexerConfig,
    store: &mut dyn SessionStore,
    theme_map: &ThemeMap,
    writer: &mut W,
    supports_color: bool,
) -> Result<()> {
    info!("Starting regexer test.");

    let mut pattern = non_empty(opts.pattern);
    let mut text = non_empty(opts.text);
    if opts.restore && (pattern.is_none() || text.is_none()) {
        match load_session(store) {
            Ok(saved) => {
                debug!("Restoring missing input from the saved session.");
                pattern = pattern.or(non_empty(saved.pattern));
                text = text.or(non_empty(saved.text));
            }
            Err(e) => warn_msg(format!("Could not restore the last session: {:#}", e), theme_map),
        }
    }
    let pattern = pattern.unwrap_or_default();
    let text = text.unwrap_or_default();

    validate_input(&pattern, &text).map_err(RegexerError::from)?;

    if opts.save {
        if let Err(e) = save_session(store, &pattern, &text) {
            warn_msg(format!("Could not save this session: {:#}", e), theme_map);
        }
    }

    let engine = RegexEngine::with_config(&pattern, config.clone()).map_err(RegexerError::from)?;
    let output = engine.render(&text).map_err(RegexerError::from)?;
    debug!("{} produced {} match(es).", engine.matcher(), output.match_count());

    let format = match opts.format {
        OutputFormat::Auto if supports_color => OutputFormat::Ansi,
        OutputFormat::Auto => OutputFormat::Plain,
        other => other,
    };
    match format {
        OutputFormat::Html => writeln!(writer, "{}", render_html(&output, engine.config().newlines_as_breaks))?,
        OutputFormat::Json => writeln!(writer, "{}", MatchReport::new(engine.matcher(), &output).to_json()?)?,
        OutputFormat::Ansi => write_highlighted(writer, &output, theme_map, true)?,
        OutputFormat::Plain | OutputFormat::Auto => write_highlighted(writer, &output, theme_map, false)?,
    }

    info!("Regexer test completed.");
    Ok(())
}
