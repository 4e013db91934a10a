//! Command-line argument definitions.

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "equisim",
    version,
    about = "Texas Hold'em equity estimation by Monte Carlo simulation"
)]
pub struct EquisimCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Estimate win / loss / tie odds of two hole cards against one random hand
    Equity {
        /// Your two cards, e.g. "AsKd"
        #[arg(long, visible_alias = "your-cards", alias = "your_cards")]
        cards: String,
        /// Number of simulated deals (defaults to the configured value)
        #[arg(long)]
        iterations: Option<u64>,
        /// Seed for reproducible results
        #[arg(long)]
        seed: Option<u64>,
        /// Worker threads sharing the iterations
        #[arg(long)]
        workers: Option<usize>,
        /// Print the tally as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show the best five-card hand for hole cards and a full board
    Eval {
        #[arg(long, visible_alias = "your-cards", alias = "your_cards")]
        cards: String,
        /// Five community cards, e.g. "QsJsTs2h3h"
        #[arg(long)]
        board: String,
    },
    /// Deal one random opponent hand and board around your cards
    Deal {
        #[arg(long, visible_alias = "your-cards", alias = "your_cards")]
        cards: String,
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Show the resolved configuration and where each value came from
    Cfg,
}
