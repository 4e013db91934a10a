//! Deal command: one random opponent hand and board around fixed hole
//! cards, the same deal a single simulation trial would use.

use crate::config::Config;
use crate::error::CliError;
use crate::formatters::format_board;
use crate::validation::parse_hole_cards;
use equisim_engine::best_five::evaluate_best_five;
use equisim_engine::classify::Category;
use equisim_engine::compare::{Showdown, compare_hands};
use equisim_engine::deal::Dealer;
use std::io::Write;

/// Handle the deal command.
///
/// `seed` overrides the configured seed; without either a random seed is
/// used and printed.
pub fn handle_deal_command(
    cards: &str,
    seed: Option<u64>,
    config: &Config,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let hole = parse_hole_cards(cards).map_err(CliError::InvalidInput)?;
    let seed = seed.or(config.seed).unwrap_or_else(rand::random);

    let deal = Dealer::new_with_seed(seed).deal(&hole)?;
    let mine = evaluate_best_five(&deal.player, &deal.community)?;
    let theirs = evaluate_best_five(&deal.opponent, &deal.community)?;
    let result = match compare_hands(&mine, &theirs) {
        Showdown::AWins => "player wins",
        Showdown::BWins => "opponent wins",
        Showdown::Tie => "tie",
    };

    writeln!(out, "Seed: {}", seed)?;
    writeln!(
        out,
        "Player:   {} {}",
        format_board(&deal.player),
        Category::of(&mine)
    )?;
    writeln!(
        out,
        "Opponent: {} {}",
        format_board(&deal.opponent),
        Category::of(&theirs)
    )?;
    writeln!(out, "Board:    {}", format_board(&deal.community))?;
    writeln!(out, "Result:   {}", result)?;
    Ok(())
}
