//! # equisim-engine: Hold'em Equity Core
//!
//! Estimates a two-card Texas Hold'em hand's equity against one random
//! opponent by Monte Carlo simulation. Each trial deals a random opponent
//! hand and board disjoint from the player's cards, picks the best five of
//! seven cards for both sides, and records the showdown.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Rank, Suit, Card) and deck helpers
//! - [`hand`] - Sorted, distinct five-card [`Hand`](hand::Hand)
//! - [`classify`] - Per-category classifiers and [`Category`](classify::Category)
//! - [`compare`] - Total ordering of hands, [`Showdown`](compare::Showdown)
//! - [`best_five`] - Best five-card hand out of hole cards plus board
//! - [`deal`] - Rejection-sampling deal generator with seeded RNG
//! - [`sim`] - Simulation driver and [`SimulationTally`](sim::SimulationTally)
//! - [`errors`] - [`ContractViolation`](errors::ContractViolation)
//!
//! ## Quick Start
//!
//! ```rust
//! use equisim_engine::cards::{Card, Rank, Suit};
//! use equisim_engine::sim::run_simulation_seeded;
//!
//! let pocket_aces = [
//!     Card::new(Rank::Ace, Suit::Spades),
//!     Card::new(Rank::Ace, Suit::Hearts),
//! ];
//! let tally = run_simulation_seeded(&pocket_aces, 1_000, 42).unwrap();
//! assert_eq!(tally.iterations(), 1_000);
//! assert!(tally.win_pct() > 70.0);
//! ```
//!
//! ## Deterministic Simulation
//!
//! Randomness is always passed in or owned, never global. The same seed
//! yields the same deals and therefore the same tally:
//!
//! ```rust
//! use equisim_engine::cards::{Card, Rank, Suit};
//! use equisim_engine::deal::Dealer;
//!
//! let player = [Card::new(Rank::Two, Suit::Clubs), Card::new(Rank::Seven, Suit::Hearts)];
//! let mut d1 = Dealer::new_with_seed(42);
//! let mut d2 = Dealer::new_with_seed(42);
//! assert_eq!(d1.deal(&player).unwrap(), d2.deal(&player).unwrap());
//! ```

pub mod best_five;
pub mod cards;
pub mod classify;
pub mod compare;
pub mod deal;
pub mod errors;
pub mod hand;
pub mod sim;

pub use best_five::evaluate_best_five;
pub use cards::{Card, Rank, Suit};
pub use classify::Category;
pub use compare::{compare_hands, Showdown};
pub use deal::{deal_random, Deal, Dealer};
pub use errors::ContractViolation;
pub use hand::Hand;
pub use sim::{run_simulation, run_simulation_parallel, run_simulation_seeded, SimulationTally};
