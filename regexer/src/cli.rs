// regexer/src/cli.rs
//! This file defines the command-line interface (CLI) for the regexer
//! application, including all available commands and their arguments.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "regexer",
    author = "Regexer Team",
    version = env!("CARGO_PKG_VERSION"),
    about = "Test a regular expression against some text",
    long_about = "Regexer highlights every match of a regular expression in a piece of text and reports how many matches there were. Patterns may be written as /body/flags (flags: g i m s u y d) or as a bare pattern, which is always matched globally.",
    arg_required_else_help = true,
)]
pub struct Cli {
    /// Disable informational messages
    #[arg(long, short = 'q', global = true, help = "Suppress all informational and debug messages.")]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short = 'd', global = true, help = "Enable debug logging.")]
    pub debug: bool,

    /// Specify the path to a custom YAML theme file.
    #[arg(long = "theme", value_name = "FILE", global = true, help = "Specify the path to a custom YAML theme file.")]
    pub theme: Option<PathBuf>,

    /// Path to a configuration file (YAML) overriding the built-in limits.
    #[arg(long = "config", value_name = "FILE", global = true, help = "Path to a configuration file (YAML).")]
    pub config: Option<PathBuf>,

    /// Where the last pattern and text are remembered.
    #[arg(
        long = "state-file",
        value_name = "FILE",
        env = "REGEXER_STATE_FILE",
        global = true,
        help = "Path of the session file that remembers the last pattern and text."
    )]
    pub state_file: Option<PathBuf>,

    /// The subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// All available commands for the `regexer` CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Tests a pattern against text and highlights the matches.
    #[command(about = "Tests a pattern against text and highlights the matches.")]
    Test(TestCommand),

    /// Shows or clears the remembered pattern and text.
    #[command(subcommand, about = "Shows or clears the remembered pattern and text.")]
    Session(SessionCommand),
}

/// Arguments for the `test` command.
#[derive(Parser, Debug)]
pub struct TestCommand {
    /// The pattern, e.g. `/foo/gi` or `foo`.
    #[arg(value_name = "PATTERN", allow_hyphen_values = true)]
    pub pattern: Option<String>,

    /// Text to search (reads from --input-file or stdin if not provided).
    #[arg(long, short = 't', value_name = "TEXT", conflicts_with = "input_file", allow_hyphen_values = true)]
    pub text: Option<String>,

    /// Path to an input file.
    #[arg(long, short = 'i', value_name = "FILE", help = "Read the text from a file instead of stdin.")]
    pub input_file: Option<PathBuf>,

    /// Output format.
    #[arg(long = "format", short = 'f', value_enum, default_value = "auto")]
    pub format: OutputFormat,

    /// Fill in a missing pattern or text from the remembered session.
    #[arg(long = "restore", short = 'r', help = "Use the remembered pattern/text for whichever is not given.")]
    pub restore: bool,

    /// Do not remember this pattern and text.
    #[arg(long = "no-save", help = "Do not remember this pattern and text for next time.")]
    pub no_save: bool,
}

/// Subcommands for the `session` command.
#[derive(Subcommand, Debug)]
pub enum SessionCommand {
    #[command(about = "Prints the remembered pattern and text.")]
    Show,
    #[command(about = "Forgets the remembered pattern and text.")]
    Clear,
}

/// How results are printed.
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum OutputFormat {
    /// ANSI colours when stdout is a terminal, plain otherwise.
    Auto,
    /// Matches styled with the theme's colours.
    Ansi,
    /// Matches wrapped in square brackets.
    Plain,
    /// One `<span>` per character, for embedding in a web page.
    Html,
    /// Spans, segments and count as JSON.
    Json,
}
