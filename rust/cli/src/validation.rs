//! Parsing and validation of user-supplied card text and counts.
//!
//! Card notation is a rank character from `23456789TJQKA` followed by a
//! suit character from `cdhs`, both case-insensitive. Several cards are
//! written back to back (`AsKd`), optionally separated by whitespace.
//!
//! Validation functions return `Result<_, String>` with a message meant for
//! the user; commands wrap it in [`crate::CliError::InvalidInput`].

use equisim_engine::cards::{Card, Rank, Suit, first_duplicate};

fn rank_from_char(c: char) -> Option<Rank> {
    Some(match c.to_ascii_uppercase() {
        '2' => Rank::Two,
        '3' => Rank::Three,
        '4' => Rank::Four,
        '5' => Rank::Five,
        '6' => Rank::Six,
        '7' => Rank::Seven,
        '8' => Rank::Eight,
        '9' => Rank::Nine,
        'T' => Rank::Ten,
        'J' => Rank::Jack,
        'Q' => Rank::Queen,
        'K' => Rank::King,
        'A' => Rank::Ace,
        _ => return None,
    })
}

fn suit_from_char(c: char) -> Option<Suit> {
    Some(match c.to_ascii_lowercase() {
        'c' => Suit::Clubs,
        'd' => Suit::Diamonds,
        'h' => Suit::Hearts,
        's' => Suit::Spades,
        _ => return None,
    })
}

/// Parses exactly one card such as `"As"` or `"td"`.
///
/// # Example
///
/// ```rust
/// # use equisim_cli::validation::parse_card;
/// use equisim_engine::cards::{Card, Rank, Suit};
///
/// assert_eq!(parse_card("As"), Ok(Card::new(Rank::Ace, Suit::Spades)));
/// assert_eq!(parse_card("td"), Ok(Card::new(Rank::Ten, Suit::Diamonds)));
/// assert!(parse_card("1s").is_err());
/// ```
pub fn parse_card(text: &str) -> Result<Card, String> {
    let mut chars = text.chars();
    match (chars.next(), chars.next(), chars.next()) {
        (Some(r), Some(s), None) => match (rank_from_char(r), suit_from_char(s)) {
            (Some(rank), Some(suit)) => Ok(Card::new(rank, suit)),
            _ => Err(format!("invalid card '{}'", text)),
        },
        _ => Err(format!("invalid card '{}'", text)),
    }
}

/// Parses a run of cards. Whitespace between or inside cards is ignored.
///
/// Errors name the 1-based position of the first bad card.
pub fn parse_cards(text: &str) -> Result<Vec<Card>, String> {
    let chars: Vec<char> = text.chars().filter(|c| !c.is_whitespace()).collect();
    if chars.is_empty() {
        return Err("no cards given".to_string());
    }
    chars
        .chunks(2)
        .enumerate()
        .map(|(i, chunk)| {
            let token: String = chunk.iter().collect();
            parse_card(&token).map_err(|_| format!("card {} invalid: '{}'", i + 1, token))
        })
        .collect()
}

fn parse_exact<const N: usize>(text: &str, what: &str) -> Result<[Card; N], String> {
    let cards = parse_cards(text)?;
    let count = cards.len();
    let cards: [Card; N] = cards
        .try_into()
        .map_err(|_| format!("{} needs exactly {} cards, got {}", what, N, count))?;
    if let Some(dup) = first_duplicate(&cards) {
        return Err(format!(
            "card '{}' appears more than once",
            crate::formatters::format_card(&dup)
        ));
    }
    Ok(cards)
}

/// Parses the player's two hole cards, e.g. `"AsKd"`.
///
/// # Example
///
/// ```rust
/// # use equisim_cli::validation::parse_hole_cards;
/// assert!(parse_hole_cards("AsKd").is_ok());
/// assert_eq!(parse_hole_cards("AsZx").unwrap_err(), "card 2 invalid: 'Zx'");
/// assert!(parse_hole_cards("AsAs").is_err());
/// ```
pub fn parse_hole_cards(text: &str) -> Result<[Card; 2], String> {
    parse_exact(text, "hole cards")
}

/// Parses a full five-card board.
pub fn parse_board(text: &str) -> Result<[Card; 5], String> {
    parse_exact(text, "board")
}

/// Rejects a board that reuses one of the hole cards.
pub fn ensure_disjoint(hole: &[Card; 2], board: &[Card; 5]) -> Result<(), String> {
    match board.iter().find(|c| hole.contains(c)) {
        Some(c) => Err(format!(
            "card '{}' is both a hole card and a board card",
            crate::formatters::format_card(c)
        )),
        None => Ok(()),
    }
}

pub fn validate_iterations(iterations: u64) -> Result<(), String> {
    if iterations == 0 {
        return Err("iterations must be >= 1".to_string());
    }
    Ok(())
}

pub fn validate_workers(workers: usize) -> Result<(), String> {
    if workers == 0 {
        return Err("workers must be >= 1".to_string());
    }
    Ok(())
}

/// Accuracy warning for short runs, `None` when `iterations` is enough.
pub fn iteration_warning(iterations: u64, warn_below: u64) -> Option<String> {
    (iterations < warn_below).then(|| {
        format!(
            "Number of iterations is less than {}. Results may be inaccurate.",
            warn_below
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_rank_and_suit_in_both_cases() {
        for (i, r) in "23456789TJQKA".chars().enumerate() {
            for (j, s) in "cdhs".chars().enumerate() {
                let upper = format!("{}{}", r, s.to_ascii_uppercase());
                let lower = format!("{}{}", r.to_ascii_lowercase(), s);
                let expected = Card::new(
                    Rank::from_index(i as u8).unwrap(),
                    Suit::from_index(j as u8).unwrap(),
                );
                assert_eq!(parse_card(&upper), Ok(expected));
                assert_eq!(parse_card(&lower), Ok(expected));
            }
        }
    }

    #[test]
    fn rejects_malformed_single_cards() {
        for bad in ["", "A", "Asd", "1s", "Ax", "10h", "♠A"] {
            assert!(parse_card(bad).is_err(), "{bad:?} should be rejected");
        }
    }

    #[test]
    fn parse_cards_ignores_whitespace() {
        let cards = parse_cards(" As Kd\t7c ").unwrap();
        assert_eq!(
            cards,
            vec![
                Card::new(Rank::Ace, Suit::Spades),
                Card::new(Rank::King, Suit::Diamonds),
                Card::new(Rank::Seven, Suit::Clubs),
            ]
        );
    }

    #[test]
    fn errors_name_the_bad_card() {
        assert_eq!(parse_hole_cards("Zx2h").unwrap_err(), "card 1 invalid: 'Zx'");
        assert_eq!(parse_hole_cards("AsZx").unwrap_err(), "card 2 invalid: 'Zx'");
        assert_eq!(parse_hole_cards("AsK").unwrap_err(), "card 2 invalid: 'K'");
        assert_eq!(parse_hole_cards("").unwrap_err(), "no cards given");
    }

    #[test]
    fn hole_cards_need_two_distinct() {
        assert_eq!(
            parse_hole_cards("AsKdQh").unwrap_err(),
            "hole cards needs exactly 2 cards, got 3"
        );
        assert_eq!(
            parse_hole_cards("asAS").unwrap_err(),
            "card 'As' appears more than once"
        );
    }

    #[test]
    fn board_needs_five() {
        assert!(parse_board("QsJsTs2h3h").is_ok());
        assert_eq!(
            parse_board("QsJsTs2h").unwrap_err(),
            "board needs exactly 5 cards, got 4"
        );
    }

    #[test]
    fn disjointness_check() {
        let hole = parse_hole_cards("AsKs").unwrap();
        assert!(ensure_disjoint(&hole, &parse_board("QsJsTs2h3h").unwrap()).is_ok());
        assert_eq!(
            ensure_disjoint(&hole, &parse_board("AsJsTs2h3h").unwrap()).unwrap_err(),
            "card 'As' is both a hole card and a board card"
        );
    }

    #[test]
    fn counts() {
        assert!(validate_iterations(0).is_err());
        assert!(validate_iterations(1).is_ok());
        assert!(validate_workers(0).is_err());
        assert!(validate_workers(8).is_ok());
    }

    #[test]
    fn warns_only_below_threshold() {
        assert_eq!(
            iteration_warning(499, 500).as_deref(),
            Some("Number of iterations is less than 500. Results may be inaccurate.")
        );
        assert_eq!(iteration_warning(500, 500), None);
        assert_eq!(iteration_warning(1, 0), None);
    }
}
