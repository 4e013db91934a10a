//! # equisim CLI Library
//!
//! Command-line front end for the `equisim-engine` equity simulator. It
//! parses card text and flags, resolves configuration, runs the engine and
//! formats the results.
//!
//! ## Main Entry Point
//!
//! [`run`] parses the arguments, dispatches to a subcommand and returns the
//! process exit code. Output and errors go to the writers it is handed.
//!
//! ```no_run
//! use std::io;
//! let args = ["equisim", "equity", "--cards", "AsKd", "--iterations", "10000"];
//! let code = equisim_cli::run(args, &mut io::stdout(), &mut io::stderr());
//! assert_eq!(code, 0);
//! ```
//!
//! ## Available Subcommands
//!
//! - `equity`: Win / loss / tie percentages against one random hand
//! - `eval`: Best five-card hand for hole cards plus a full board
//! - `deal`: One random deal around your hole cards
//! - `cfg`: Resolved configuration and the source of each value

use clap::Parser;
use std::io::Write;
use tracing::debug;

pub mod cli;
mod commands;
pub mod config;
mod error;
pub mod exit_code;
pub mod formatters;
pub mod logging;
pub mod ui;
pub mod validation;

use cli::{Commands, EquisimCli};
use commands::{
    EquityOptions, handle_cfg_command, handle_deal_command, handle_equity_command,
    handle_eval_command,
};

pub use error::CliError;

const COMMANDS: &[&str] = &["equity", "eval", "deal", "cfg"];

/// Main entry point for the CLI application.
///
/// # Returns
///
/// [`exit_code::SUCCESS`] on success (including `--help` and `--version`),
/// [`exit_code::ERROR`] for usage errors, invalid input, configuration
/// errors, or failed writes.
///
/// # Example
///
/// ```
/// let mut out = Vec::new();
/// let mut err = Vec::new();
/// let args = ["equisim", "eval", "--cards", "AsKs", "--board", "QsJsTs2h3h"];
/// let code = equisim_cli::run(args, &mut out, &mut err);
/// assert_eq!(code, 0);
/// assert!(String::from_utf8(out).unwrap().contains("Straight Flush"));
/// ```
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    logging::init_logging();
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match EquisimCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => return report_usage_error(e, out, err),
    };
    debug!(command = ?cli.cmd, "dispatching");

    match dispatch(cli.cmd, out, err) {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            // Nothing more can be reported if stderr itself is gone.
            let _ = ui::write_error(err, &e.to_string());
            exit_code::ERROR
        }
    }
}

fn dispatch(cmd: Commands, out: &mut dyn Write, err: &mut dyn Write) -> Result<(), CliError> {
    match cmd {
        Commands::Equity {
            cards,
            iterations,
            seed,
            workers,
            json,
        } => {
            let resolved = config::load_with_sources()?;
            let opts = EquityOptions {
                cards,
                iterations,
                seed,
                workers,
                json,
            };
            handle_equity_command(&opts, &resolved.config, out, err)
        }
        Commands::Eval { cards, board } => handle_eval_command(&cards, &board, out),
        Commands::Deal { cards, seed } => {
            let resolved = config::load_with_sources()?;
            handle_deal_command(&cards, seed, &resolved.config, out)
        }
        Commands::Cfg => {
            let resolved = config::load_with_sources()?;
            handle_cfg_command(&resolved, out)
        }
    }
}

fn report_usage_error(e: clap::Error, out: &mut dyn Write, err: &mut dyn Write) -> i32 {
    use clap::error::ErrorKind;

    // Help and version should print to stdout and exit 0
    if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
        return match write!(out, "{}", e) {
            Ok(()) => exit_code::SUCCESS,
            Err(_) => exit_code::ERROR,
        };
    }

    let _ = write_usage(e, err);
    exit_code::ERROR
}

fn write_usage(e: clap::Error, err: &mut dyn Write) -> std::io::Result<()> {
    writeln!(err, "{}", e)?;
    writeln!(err)?;
    writeln!(err, "equisim Hold'em equity CLI")?;
    writeln!(err, "Usage: equisim <command> [options]\n")?;
    writeln!(err, "Commands:")?;
    for c in COMMANDS {
        writeln!(err, "  {}", c)?;
    }
    writeln!(err, "\nFor full help, run: equisim --help")
}
