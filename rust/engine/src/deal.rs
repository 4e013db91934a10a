use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use serde::{Deserialize, Serialize};

use crate::cards::{all_ranks, all_suits, first_duplicate, Card};
use crate::errors::ContractViolation;

/// One trial's cards: the fixed player hand, a random opponent hand, and
/// five community cards, all nine pairwise distinct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deal {
    pub player: [Card; 2],
    pub opponent: [Card; 2],
    pub community: [Card; 5],
}

impl Deal {
    pub fn cards(&self) -> [Card; 9] {
        [
            self.player[0],
            self.player[1],
            self.opponent[0],
            self.opponent[1],
            self.community[0],
            self.community[1],
            self.community[2],
            self.community[3],
            self.community[4],
        ]
    }
}

// A uniform (rank, suit) pair. Cards are drawn with replacement; collisions
// are rejected by the caller, not prevented here.
fn random_card<R: Rng>(rng: &mut R) -> Card {
    let rank = all_ranks()[rng.random_range(0..13)];
    let suit = all_suits()[rng.random_range(0..4)];
    Card::new(rank, suit)
}

/// Deals a random opponent hand and board around a fixed player hand.
///
/// Sampling is by rejection: the opponent's two cards are redrawn until
/// they differ from each other and from the player's cards, then all five
/// community cards are redrawn until none of the nine cards repeat. Both
/// loops run until they succeed.
///
/// # Errors
///
/// Returns [`ContractViolation::DuplicateCard`] if the two player cards are
/// the same card.
///
/// # Examples
///
/// ```
/// use equisim_engine::cards::{Card, Rank, Suit};
/// use equisim_engine::deal::deal_random;
/// use rand::SeedableRng;
///
/// let mut rng = rand_chacha::ChaCha20Rng::seed_from_u64(7);
/// let player = [Card::new(Rank::Ace, Suit::Spades), Card::new(Rank::King, Suit::Spades)];
/// let deal = deal_random(&player, &mut rng).unwrap();
/// assert_eq!(deal.player, player);
/// assert!(!deal.community.contains(&player[0]));
/// ```
pub fn deal_random<R: Rng>(player: &[Card; 2], rng: &mut R) -> Result<Deal, ContractViolation> {
    if player[0] == player[1] {
        return Err(ContractViolation::DuplicateCard(player[0]));
    }

    let opponent = loop {
        let candidate = [random_card(rng), random_card(rng)];
        if first_duplicate(&[player[0], player[1], candidate[0], candidate[1]]).is_none() {
            break candidate;
        }
    };

    let community = loop {
        let candidate: [Card; 5] = std::array::from_fn(|_| random_card(rng));
        let deal = Deal {
            player: *player,
            opponent,
            community: candidate,
        };
        if first_duplicate(&deal.cards()).is_none() {
            break candidate;
        }
    };

    Ok(Deal {
        player: *player,
        opponent,
        community,
    })
}

/// A deal generator that owns its seeded random stream.
#[derive(Debug)]
pub struct Dealer {
    rng: ChaCha20Rng,
}

impl Dealer {
    pub fn new_with_seed(seed: u64) -> Self {
        Self {
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }

    pub fn deal(&mut self, player: &[Card; 2]) -> Result<Deal, ContractViolation> {
        deal_random(player, &mut self.rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Rank, Suit};

    fn aces() -> [Card; 2] {
        [
            Card::new(Rank::Ace, Suit::Spades),
            Card::new(Rank::Ace, Suit::Hearts),
        ]
    }

    #[test]
    fn dealer_is_deterministic_for_a_seed() {
        let mut d1 = Dealer::new_with_seed(12345);
        let mut d2 = Dealer::new_with_seed(12345);
        for _ in 0..20 {
            assert_eq!(d1.deal(&aces()).unwrap(), d2.deal(&aces()).unwrap());
        }
    }

    #[test]
    fn different_seeds_differ() {
        let a: Vec<Deal> = {
            let mut d = Dealer::new_with_seed(1);
            (0..10).map(|_| d.deal(&aces()).unwrap()).collect()
        };
        let b: Vec<Deal> = {
            let mut d = Dealer::new_with_seed(2);
            (0..10).map(|_| d.deal(&aces()).unwrap()).collect()
        };
        assert_ne!(a, b);
    }

    #[test]
    fn rejects_paired_identical_player_cards() {
        let ah = Card::new(Rank::Ace, Suit::Hearts);
        let mut dealer = Dealer::new_with_seed(3);
        assert_eq!(
            dealer.deal(&[ah, ah]),
            Err(ContractViolation::DuplicateCard(ah))
        );
    }
}
