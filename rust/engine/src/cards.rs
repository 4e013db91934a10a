use serde::{Deserialize, Serialize};

/// Represents one of the four suits in a standard 52-card deck.
/// Suits are only ever compared for equality (flush detection), never ranked.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Suit {
    /// Clubs suit (♣)
    Clubs = 0,
    /// Diamonds suit (♦)
    Diamonds,
    /// Hearts suit (♥)
    Hearts,
    /// Spades suit (♠)
    Spades,
}

impl Suit {
    pub fn from_index(v: u8) -> Option<Suit> {
        match v {
            0 => Some(Suit::Clubs),
            1 => Some(Suit::Diamonds),
            2 => Some(Suit::Hearts),
            3 => Some(Suit::Spades),
            _ => None,
        }
    }

    pub fn index(self) -> u8 {
        self as u8
    }
}

/// Represents the rank (face value) of a playing card from Two through Ace.
/// Indices run 0 (Two) through 12 (Ace) in ascending strength.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Rank {
    /// Rank 2 (index 0)
    Two = 0,
    /// Rank 3
    Three,
    /// Rank 4
    Four,
    /// Rank 5
    Five,
    /// Rank 6
    Six,
    /// Rank 7
    Seven,
    /// Rank 8
    Eight,
    /// Rank 9
    Nine,
    /// Rank 10
    Ten,
    /// Jack
    Jack,
    /// Queen
    Queen,
    /// King
    King,
    /// Ace (index 12)
    Ace,
}

impl Rank {
    pub fn from_index(v: u8) -> Option<Rank> {
        all_ranks().get(v as usize).copied()
    }

    pub fn index(self) -> u8 {
        self as u8
    }
}

/// Represents a single playing card with a rank and a suit.
///
/// Field order matters: the derived ordering compares rank first and suit
/// second, so sorting descending yields the rank-descending order every
/// evaluated hand relies on, with a deterministic order among equal ranks.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct Card {
    /// The rank of the card (Two through Ace)
    pub rank: Rank,
    /// The suit of the card (Clubs, Diamonds, Hearts, or Spades)
    pub suit: Suit,
}

impl Card {
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }
}

pub fn all_suits() -> [Suit; 4] {
    [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades]
}

pub fn all_ranks() -> [Rank; 13] {
    [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ]
}

pub fn full_deck() -> Vec<Card> {
    let mut v = Vec::with_capacity(52);
    for &s in &all_suits() {
        for &r in &all_ranks() {
            v.push(Card::new(r, s));
        }
    }
    v
}

/// Sorts cards in place by rank descending (suit breaks ties).
pub fn sort_desc(cards: &mut [Card]) {
    cards.sort_unstable_by(|a, b| b.cmp(a));
}

/// Returns the first card that appears more than once, if any.
pub fn first_duplicate(cards: &[Card]) -> Option<Card> {
    let mut seen = [false; 52];
    for c in cards {
        let slot = &mut seen[c.suit.index() as usize * 13 + c.rank.index() as usize];
        if *slot {
            return Some(*c);
        }
        *slot = true;
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rank_indices_round_trip() {
        for (i, r) in all_ranks().iter().enumerate() {
            assert_eq!(r.index() as usize, i);
            assert_eq!(Rank::from_index(i as u8), Some(*r));
        }
        assert_eq!(Rank::from_index(13), None);
        assert_eq!(Suit::from_index(4), None);
    }

    #[test]
    fn sort_desc_orders_by_rank_then_suit() {
        let mut cards = [
            Card::new(Rank::Two, Suit::Spades),
            Card::new(Rank::Ace, Suit::Clubs),
            Card::new(Rank::Ten, Suit::Hearts),
            Card::new(Rank::Ten, Suit::Spades),
        ];
        sort_desc(&mut cards);
        assert_eq!(cards[0], Card::new(Rank::Ace, Suit::Clubs));
        assert_eq!(cards[1], Card::new(Rank::Ten, Suit::Spades));
        assert_eq!(cards[2], Card::new(Rank::Ten, Suit::Hearts));
        assert_eq!(cards[3], Card::new(Rank::Two, Suit::Spades));
    }

    #[test]
    fn full_deck_has_no_duplicates() {
        let deck = full_deck();
        assert_eq!(deck.len(), 52);
        assert_eq!(first_duplicate(&deck), None);
    }

    #[test]
    fn first_duplicate_reports_repeated_card() {
        let ah = Card::new(Rank::Ace, Suit::Hearts);
        let cards = [ah, Card::new(Rank::King, Suit::Hearts), ah];
        assert_eq!(first_duplicate(&cards), Some(ah));
    }
}
