//! Eval command: best five-card hand from two hole cards and a full board.

use crate::error::CliError;
use crate::formatters::format_board;
use crate::validation::{ensure_disjoint, parse_board, parse_hole_cards};
use equisim_engine::best_five::evaluate_best_five;
use equisim_engine::classify::Category;
use std::io::Write;
use tracing::debug;

/// Handle the eval command.
///
/// Prints the chosen five cards, highest first, and their category.
pub fn handle_eval_command(cards: &str, board: &str, out: &mut dyn Write) -> Result<(), CliError> {
    let hole = parse_hole_cards(cards).map_err(CliError::InvalidInput)?;
    let board = parse_board(board).map_err(CliError::InvalidInput)?;
    ensure_disjoint(&hole, &board).map_err(CliError::InvalidInput)?;

    let best = evaluate_best_five(&hole, &board)?;
    let category = Category::of(&best);
    debug!(?best, %category, "evaluated best five");

    writeln!(out, "Hole:  {}", format_board(&hole))?;
    writeln!(out, "Board: {}", format_board(&board))?;
    writeln!(out, "Best:  {} {}", format_board(best.cards()), category)?;
    Ok(())
}
