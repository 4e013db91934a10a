//! Five-card category classifiers.
//!
//! Each classifier answers one question about a [`Hand`]: does it belong to
//! this category, and if so, which ranks decide ties inside the category.
//! `None` means "not this category"; since `None` orders below any `Some`,
//! a non-matching hand can never win a tie-break against a matching one.
//!
//! The classifiers are mutually exclusive: [`flush`] and [`straight`] do not
//! match straight flushes, and the grouped categories each require the exact
//! shape of their category, so every hand matches exactly one of them or
//! falls back to [`high_card`].

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cards::Rank;
use crate::hand::Hand;

/// Hand categories from weakest to strongest.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
pub enum Category {
    HighCard = 0,
    OnePair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
}

impl Category {
    /// Every category, strongest first: the order the comparator walks.
    pub const STRENGTH_ORDER: [Category; 9] = [
        Category::StraightFlush,
        Category::FourOfAKind,
        Category::FullHouse,
        Category::Flush,
        Category::Straight,
        Category::ThreeOfAKind,
        Category::TwoPair,
        Category::OnePair,
        Category::HighCard,
    ];

    /// The single category `hand` belongs to.
    pub fn of(hand: &Hand) -> Category {
        Self::STRENGTH_ORDER
            .into_iter()
            .find(|cat| cat.matches(hand))
            .unwrap_or(Category::HighCard)
    }

    /// Whether `hand` belongs to this category.
    pub fn matches(self, hand: &Hand) -> bool {
        match self {
            Category::StraightFlush => straight_flush(hand).is_some(),
            Category::FourOfAKind => four_of_a_kind(hand).is_some(),
            Category::FullHouse => full_house(hand).is_some(),
            Category::Flush => flush(hand).is_some(),
            Category::Straight => straight(hand).is_some(),
            Category::ThreeOfAKind => three_of_a_kind(hand).is_some(),
            Category::TwoPair => two_pair(hand).is_some(),
            Category::OnePair => one_pair(hand).is_some(),
            Category::HighCard => Self::STRENGTH_ORDER[..8]
                .iter()
                .all(|cat| !cat.matches(hand)),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Category::HighCard => "High Card",
            Category::OnePair => "One Pair",
            Category::TwoPair => "Two Pair",
            Category::ThreeOfAKind => "Three of a Kind",
            Category::Straight => "Straight",
            Category::Flush => "Flush",
            Category::FullHouse => "Full House",
            Category::FourOfAKind => "Four of a Kind",
            Category::StraightFlush => "Straight Flush",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The card a straight runs up to.
///
/// The wheel (A-5-4-3-2) is stored as `StraightHigh(Rank::Five)`: its ace
/// plays low, so it sorts below every other straight, including the
/// six-high straight that shares its 5-4-3-2.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
pub struct StraightHigh(pub Rank);

const WHEEL: [Rank; 5] = [Rank::Ace, Rank::Five, Rank::Four, Rank::Three, Rank::Two];

// Five distinct consecutive ranks, or the wheel. Ignores suits.
fn run_high(hand: &Hand) -> Option<StraightHigh> {
    if hand.ranks_with_count(1).count() != Hand::SIZE {
        return None;
    }
    let ranks = hand.ranks();
    if ranks[0].index() - ranks[4].index() == 4 {
        Some(StraightHigh(ranks[0]))
    } else if ranks == WHEEL {
        Some(StraightHigh(Rank::Five))
    } else {
        None
    }
}

pub fn straight_flush(hand: &Hand) -> Option<StraightHigh> {
    if hand.is_suited() {
        run_high(hand)
    } else {
        None
    }
}

/// Quad rank, then the kicker.
pub fn four_of_a_kind(hand: &Hand) -> Option<(Rank, Rank)> {
    let quad = hand.ranks_with_count(4).next()?;
    let kicker = hand.ranks_with_count(1).next()?;
    Some((quad, kicker))
}

/// Trip rank, then pair rank.
pub fn full_house(hand: &Hand) -> Option<(Rank, Rank)> {
    let trip = hand.ranks_with_count(3).next()?;
    let pair = hand.ranks_with_count(2).next()?;
    Some((trip, pair))
}

/// Five suited cards that do not also form a straight. Ties fall through
/// to the five ranks, highest first.
pub fn flush(hand: &Hand) -> Option<[Rank; 5]> {
    if hand.is_suited() && run_high(hand).is_none() {
        Some(hand.ranks())
    } else {
        None
    }
}

pub fn straight(hand: &Hand) -> Option<StraightHigh> {
    if hand.is_suited() {
        None
    } else {
        run_high(hand)
    }
}

/// Trip rank, then the two kickers highest first.
pub fn three_of_a_kind(hand: &Hand) -> Option<(Rank, [Rank; 2])> {
    let trip = hand.ranks_with_count(3).next()?;
    let mut singles = hand.ranks_with_count(1);
    let high = singles.next()?;
    let low = singles.next()?;
    Some((trip, [high, low]))
}

/// Both pair ranks highest first, then the kicker.
pub fn two_pair(hand: &Hand) -> Option<([Rank; 2], Rank)> {
    let mut pairs = hand.ranks_with_count(2);
    let high = pairs.next()?;
    let low = pairs.next()?;
    let kicker = hand.ranks_with_count(1).next()?;
    Some(([high, low], kicker))
}

/// Pair rank, then the three kickers highest first.
pub fn one_pair(hand: &Hand) -> Option<(Rank, [Rank; 3])> {
    let pair = hand.ranks_with_count(2).next()?;
    let mut singles = hand.ranks_with_count(1);
    let kickers = [singles.next()?, singles.next()?, singles.next()?];
    Some((pair, kickers))
}

/// Fallback ordering shared by every hand: the five ranks, highest first.
pub fn high_card(hand: &Hand) -> [Rank; 5] {
    hand.ranks()
}
