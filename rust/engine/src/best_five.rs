use crate::cards::{first_duplicate, Card};
use crate::compare::{compare_hands, Showdown};
use crate::errors::ContractViolation;
use crate::hand::Hand;

/// Number of five-card subsets of a seven-card pool, C(7, 5).
pub const SUBSETS: usize = 21;

// Every subset is the pool minus one pair of positions.
fn excluded_pairs() -> impl Iterator<Item = (usize, usize)> {
    (0..7).flat_map(|a| ((a + 1)..7).map(move |b| (a, b)))
}

fn subset(pool: &[Card; 7], skip_a: usize, skip_b: usize) -> [Card; 5] {
    let mut out = [pool[0]; 5];
    let kept = pool
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != skip_a && *i != skip_b)
        .map(|(_, c)| *c);
    for (slot, card) in out.iter_mut().zip(kept) {
        *slot = card;
    }
    out
}

/// Picks the strongest five-card hand from two hole cards and five
/// community cards.
///
/// All 21 subsets of the seven cards are tried, each as a freshly sorted
/// [`Hand`]. The search starts from the all-community hand and a candidate
/// replaces the incumbent only when it is strictly stronger, so among
/// equally strong subsets the first one found is kept.
///
/// # Errors
///
/// - [`ContractViolation::CardCount`] unless there are exactly 2 hole cards
///   and 5 community cards
/// - [`ContractViolation::DuplicateCard`] if any of the seven cards repeats
///
/// # Examples
///
/// ```
/// use equisim_engine::best_five::evaluate_best_five;
/// use equisim_engine::cards::{Card, Rank as R, Suit as S};
/// use equisim_engine::classify::Category;
///
/// let hole = [Card::new(R::Ace, S::Spades), Card::new(R::King, S::Spades)];
/// let board = [
///     Card::new(R::Queen, S::Spades),
///     Card::new(R::Jack, S::Spades),
///     Card::new(R::Ten, S::Spades),
///     Card::new(R::Two, S::Hearts),
///     Card::new(R::Three, S::Hearts),
/// ];
/// let best = evaluate_best_five(&hole, &board).unwrap();
/// assert_eq!(Category::of(&best), Category::StraightFlush);
/// ```
pub fn evaluate_best_five(hole: &[Card], community: &[Card]) -> Result<Hand, ContractViolation> {
    let hole: [Card; 2] = hole.try_into().map_err(|_| ContractViolation::CardCount {
        what: "hole cards",
        expected: 2,
        actual: hole.len(),
    })?;
    let community: [Card; 5] =
        community
            .try_into()
            .map_err(|_| ContractViolation::CardCount {
                what: "community cards",
                expected: 5,
                actual: community.len(),
            })?;

    let pool = [
        hole[0],
        hole[1],
        community[0],
        community[1],
        community[2],
        community[3],
        community[4],
    ];
    if let Some(dup) = first_duplicate(&pool) {
        return Err(ContractViolation::DuplicateCard(dup));
    }

    let mut best = Hand::from_distinct(community);
    for (a, b) in excluded_pairs() {
        let candidate = Hand::from_distinct(subset(&pool, a, b));
        if compare_hands(&candidate, &best) == Showdown::AWins {
            best = candidate;
        }
    }
    Ok(best)
}
