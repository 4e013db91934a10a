//! Card, hand, and percentage formatting for terminal output.
//!
//! Cards are printed in the same two-character notation the command line
//! accepts (`As`, `Td`, `2c`), so any printed card can be pasted back in.
//!
//! ```rust
//! use equisim_engine::cards::{Card, Rank, Suit};
//! use equisim_cli::formatters::{format_board, format_card};
//!
//! let ace_spades = Card::new(Rank::Ace, Suit::Spades);
//! assert_eq!(format_card(&ace_spades), "As");
//! assert_eq!(format_board(&[ace_spades]), "[As]");
//! ```

use equisim_engine::cards::{Card, Rank, Suit};
use equisim_engine::sim::SimulationTally;

pub fn format_suit(suit: &Suit) -> &'static str {
    match suit {
        Suit::Clubs => "c",
        Suit::Diamonds => "d",
        Suit::Hearts => "h",
        Suit::Spades => "s",
    }
}

/// Single-character rank (2-9, T, J, Q, K, A).
pub fn format_rank(rank: &Rank) -> &'static str {
    match rank {
        Rank::Two => "2",
        Rank::Three => "3",
        Rank::Four => "4",
        Rank::Five => "5",
        Rank::Six => "6",
        Rank::Seven => "7",
        Rank::Eight => "8",
        Rank::Nine => "9",
        Rank::Ten => "T",
        Rank::Jack => "J",
        Rank::Queen => "Q",
        Rank::King => "K",
        Rank::Ace => "A",
    }
}

pub fn format_card(card: &Card) -> String {
    format!("{}{}", format_rank(&card.rank), format_suit(&card.suit))
}

/// Cards in bracket notation, e.g. `[As Kh Qd]`, or `[]` when empty.
pub fn format_board(cards: &[Card]) -> String {
    let formatted: Vec<String> = cards.iter().map(format_card).collect();
    format!("[{}]", formatted.join(" "))
}

/// Percentage with two decimals and a trailing `%`.
pub fn format_pct(pct: f64) -> String {
    format!("{:.2}%", pct)
}

/// Three report lines: win, loss, and tie shares of the tally.
pub fn format_tally(tally: &SimulationTally) -> [String; 3] {
    [
        format!("Win:  {}", format_pct(tally.win_pct())),
        format!("Loss: {}", format_pct(tally.loss_pct())),
        format!("Tie:  {}", format_pct(tally.tie_pct())),
    ]
}
