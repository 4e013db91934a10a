//! Equity command: Monte Carlo win / loss / tie estimate for two hole
//! cards against one random opponent hand.

use crate::config::Config;
use crate::error::CliError;
use crate::formatters::{format_board, format_card, format_tally};
use crate::ui;
use crate::validation::{iteration_warning, parse_hole_cards, validate_iterations, validate_workers};
use equisim_engine::sim::{SimulationTally, run_simulation_parallel};
use serde::Serialize;
use std::io::Write;
use tracing::info;

/// Flags of the `equity` command; `None` falls back to the configuration.
#[derive(Debug, Clone, Default)]
pub struct EquityOptions {
    pub cards: String,
    pub iterations: Option<u64>,
    pub seed: Option<u64>,
    pub workers: Option<usize>,
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct EquityReport {
    /// Normalized notation, e.g. `AhKd`.
    cards: String,
    iterations: u64,
    seed: u64,
    workers: usize,
    #[serde(flatten)]
    tally: SimulationTally,
    win_pct: f64,
    loss_pct: f64,
    tie_pct: f64,
}

/// Handle the equity command.
///
/// Flags override `config`. Without any seed a random one is drawn and
/// reported, so every run can be repeated.
///
/// # Errors
///
/// Returns `CliError::InvalidInput` for bad cards or zero counts, and
/// `CliError::Io` if writing fails.
pub fn handle_equity_command(
    opts: &EquityOptions,
    config: &Config,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let hole = parse_hole_cards(&opts.cards).map_err(CliError::InvalidInput)?;
    let iterations = opts.iterations.unwrap_or(config.iterations);
    validate_iterations(iterations).map_err(CliError::InvalidInput)?;
    let workers = opts.workers.unwrap_or(config.workers);
    validate_workers(workers).map_err(CliError::InvalidInput)?;
    let seed = opts.seed.or(config.seed).unwrap_or_else(rand::random);

    if let Some(warning) = iteration_warning(iterations, config.warn_below) {
        ui::display_warning(err, &warning)?;
    }

    info!(cards = %opts.cards, iterations, seed, workers, "running equity simulation");
    let tally = run_simulation_parallel(&hole, iterations, seed, workers)?;

    if opts.json {
        let report = EquityReport {
            cards: hole.iter().map(format_card).collect(),
            iterations,
            seed,
            workers,
            tally,
            win_pct: tally.win_pct(),
            loss_pct: tally.loss_pct(),
            tie_pct: tally.tie_pct(),
        };
        let json = serde_json::to_string_pretty(&report).map_err(std::io::Error::other)?;
        writeln!(out, "{}", json)?;
        return Ok(());
    }

    writeln!(out, "Hand: {}", format_board(&hole))?;
    writeln!(
        out,
        "Iterations: {} (seed {}, {} worker{})",
        iterations,
        seed,
        workers,
        if workers == 1 { "" } else { "s" }
    )?;
    for line in format_tally(&tally) {
        writeln!(out, "{}", line)?;
    }
    Ok(())
}
