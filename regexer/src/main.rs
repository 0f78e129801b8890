// regexer/src/main.rs
//! Regexer entry point.

use clap::Parser;
use log::LevelFilter;
use std::process::ExitCode;

use regexer::cli::Cli;
use regexer::commands::{dispatch, error_msg};
use regexer::logger;
use regexer::ui::theme::{build_theme_map, ThemeStyle};
use regexer_core::RegexerError;

/// Exit status for input the user has to correct (empty or invalid pattern, missing text).
const EXIT_USER_ERROR: u8 = 2;

fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.quiet {
        logger::init_logger(Some(LevelFilter::Off));
    } else if cli.debug {
        logger::init_logger(Some(LevelFilter::Debug));
    } else {
        logger::init_logger(None);
    }

    let theme_map = match build_theme_map(cli.theme.as_ref()) {
        Ok(map) => map,
        Err(e) => {
            error_msg(format!("{:#}", e), &ThemeStyle::default_theme_map());
            return ExitCode::FAILURE;
        }
    };

    match dispatch(&cli, &theme_map) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error_msg(format!("{:#}", e), &theme_map);
            let user_error = e
                .downcast_ref::<RegexerError>()
                .is_some_and(RegexerError::is_user_error);
            if user_error {
                ExitCode::from(EXIT_USER_ERROR)
            } else {
                ExitCode::FAILURE
            }
        }
    }
}
