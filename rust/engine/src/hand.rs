use serde::Serialize;

use crate::cards::{all_ranks, first_duplicate, sort_desc, Card, Rank};
use crate::errors::ContractViolation;

/// An evaluated five-card poker hand.
///
/// Cards are always held sorted by rank descending and are pairwise
/// distinct; both properties are established by the constructor, so every
/// classifier and the comparator can rely on them. A 13-bucket rank
/// frequency table is built once here and shared by all classifiers.
///
/// # Examples
///
/// ```
/// use equisim_engine::cards::{Card, Rank, Suit};
/// use equisim_engine::hand::Hand;
///
/// let hand = Hand::new(&[
///     Card::new(Rank::Two, Suit::Clubs),
///     Card::new(Rank::Ace, Suit::Hearts),
///     Card::new(Rank::Nine, Suit::Spades),
///     Card::new(Rank::Nine, Suit::Diamonds),
///     Card::new(Rank::King, Suit::Clubs),
/// ])
/// .unwrap();
///
/// assert_eq!(
///     hand.ranks(),
///     [Rank::Ace, Rank::King, Rank::Nine, Rank::Nine, Rank::Two]
/// );
/// assert_eq!(hand.count_of(Rank::Nine), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Hand {
    cards: [Card; 5],
    #[serde(skip)]
    counts: [u8; 13],
}

impl Hand {
    pub const SIZE: usize = 5;

    /// Builds a hand from exactly five distinct cards, in any order.
    ///
    /// # Errors
    ///
    /// - [`ContractViolation::CardCount`] if `cards` does not hold five cards
    /// - [`ContractViolation::DuplicateCard`] if a card repeats
    pub fn new(cards: &[Card]) -> Result<Self, ContractViolation> {
        let cards: [Card; 5] = cards
            .try_into()
            .map_err(|_| ContractViolation::CardCount {
                what: "hand",
                expected: Self::SIZE,
                actual: cards.len(),
            })?;
        if let Some(dup) = first_duplicate(&cards) {
            return Err(ContractViolation::DuplicateCard(dup));
        }
        Ok(Self::from_distinct(cards))
    }

    // Callers inside the crate have already checked distinctness.
    pub(crate) fn from_distinct(mut cards: [Card; 5]) -> Self {
        sort_desc(&mut cards);
        let mut counts = [0u8; 13];
        for c in &cards {
            counts[c.rank.index() as usize] += 1;
        }
        Self { cards, counts }
    }

    pub fn cards(&self) -> &[Card; 5] {
        &self.cards
    }

    /// The five ranks, highest first.
    pub fn ranks(&self) -> [Rank; 5] {
        self.cards.map(|c| c.rank)
    }

    pub fn count_of(&self, rank: Rank) -> u8 {
        self.counts[rank.index() as usize]
    }

    /// True when all five cards share one suit.
    pub fn is_suited(&self) -> bool {
        self.cards.iter().all(|c| c.suit == self.cards[0].suit)
    }

    /// Ranks that appear exactly `n` times, highest first.
    pub(crate) fn ranks_with_count(&self, n: u8) -> impl Iterator<Item = Rank> + '_ {
        all_ranks()
            .into_iter()
            .rev()
            .filter(move |r| self.counts[r.index() as usize] == n)
    }
}
