use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::classify::{
    flush, four_of_a_kind, full_house, high_card, one_pair, straight, straight_flush,
    three_of_a_kind, two_pair,
};
use crate::hand::Hand;

/// Outcome of comparing hand A against hand B.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Showdown {
    AWins,
    BWins,
    Tie,
}

impl Showdown {
    /// The same outcome seen from the other side of the table.
    pub fn flip(self) -> Showdown {
        match self {
            Showdown::AWins => Showdown::BWins,
            Showdown::BWins => Showdown::AWins,
            Showdown::Tie => Showdown::Tie,
        }
    }
}

impl From<Ordering> for Showdown {
    fn from(ord: Ordering) -> Self {
        match ord {
            Ordering::Greater => Showdown::AWins,
            Ordering::Less => Showdown::BWins,
            Ordering::Equal => Showdown::Tie,
        }
    }
}

// Decides a category level: None when neither hand has the category.
fn settle<P: Ord>(a: Option<P>, b: Option<P>) -> Option<Ordering> {
    match (a, b) {
        (None, None) => None,
        (a, b) => Some(a.cmp(&b)),
    }
}

/// Orders two hands by poker strength.
///
/// Categories are tried strongest first; the first one held by either hand
/// decides. If both hold it their tie-break ranks are compared
/// lexicographically, otherwise the holder wins outright. Hands with no
/// category at all are ordered by their five ranks.
pub fn strength_order(a: &Hand, b: &Hand) -> Ordering {
    settle(straight_flush(a), straight_flush(b))
        .or_else(|| settle(four_of_a_kind(a), four_of_a_kind(b)))
        .or_else(|| settle(full_house(a), full_house(b)))
        .or_else(|| settle(flush(a), flush(b)))
        .or_else(|| settle(straight(a), straight(b)))
        .or_else(|| settle(three_of_a_kind(a), three_of_a_kind(b)))
        .or_else(|| settle(two_pair(a), two_pair(b)))
        .or_else(|| settle(one_pair(a), one_pair(b)))
        .unwrap_or_else(|| high_card(a).cmp(&high_card(b)))
}

/// Compares two five-card hands.
///
/// # Examples
///
/// ```
/// use equisim_engine::cards::{Card, Rank as R, Suit as S};
/// use equisim_engine::compare::{compare_hands, Showdown};
/// use equisim_engine::hand::Hand;
///
/// let quad_deuces = Hand::new(&[
///     Card::new(R::Two, S::Clubs),
///     Card::new(R::Two, S::Diamonds),
///     Card::new(R::Two, S::Hearts),
///     Card::new(R::Two, S::Spades),
///     Card::new(R::Three, S::Clubs),
/// ])
/// .unwrap();
/// let king_flush = Hand::new(&[
///     Card::new(R::King, S::Hearts),
///     Card::new(R::Jack, S::Hearts),
///     Card::new(R::Nine, S::Hearts),
///     Card::new(R::Six, S::Hearts),
///     Card::new(R::Four, S::Hearts),
/// ])
/// .unwrap();
///
/// assert_eq!(compare_hands(&quad_deuces, &king_flush), Showdown::AWins);
/// ```
pub fn compare_hands(a: &Hand, b: &Hand) -> Showdown {
    Showdown::from(strength_order(a, b))
}
