use std::thread;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::best_five::evaluate_best_five;
use crate::cards::Card;
use crate::compare::{compare_hands, Showdown};
use crate::deal::deal_random;
use crate::errors::ContractViolation;

/// Win / loss / tie counters from the player's point of view.
///
/// Tallies only ever add, so partial tallies from independent workers can
/// be merged in any order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationTally {
    pub player_wins: u64,
    pub opponent_wins: u64,
    pub ties: u64,
}

impl SimulationTally {
    /// Counts one trial; `AWins` is a player win.
    pub fn record(&mut self, outcome: Showdown) {
        match outcome {
            Showdown::AWins => self.player_wins += 1,
            Showdown::BWins => self.opponent_wins += 1,
            Showdown::Tie => self.ties += 1,
        }
    }

    pub fn merge(&mut self, other: &SimulationTally) {
        self.player_wins += other.player_wins;
        self.opponent_wins += other.opponent_wins;
        self.ties += other.ties;
    }

    pub fn iterations(&self) -> u64 {
        self.player_wins + self.opponent_wins + self.ties
    }

    pub fn win_pct(&self) -> f64 {
        self.pct(self.player_wins)
    }

    pub fn loss_pct(&self) -> f64 {
        self.pct(self.opponent_wins)
    }

    pub fn tie_pct(&self) -> f64 {
        self.pct(self.ties)
    }

    fn pct(&self, count: u64) -> f64 {
        match self.iterations() {
            0 => 0.0,
            n => count as f64 * 100.0 / n as f64,
        }
    }
}

/// Plays one trial from scratch: a fresh deal, both best hands, showdown.
pub fn play_trial<R: Rng>(player: &[Card; 2], rng: &mut R) -> Result<Showdown, ContractViolation> {
    let deal = deal_random(player, rng)?;
    let mine = evaluate_best_five(&deal.player, &deal.community)?;
    let theirs = evaluate_best_five(&deal.opponent, &deal.community)?;
    Ok(compare_hands(&mine, &theirs))
}

/// Estimates equity of `player` against one random hand.
///
/// Runs `iterations` independent trials on the caller's random stream.
///
/// # Errors
///
/// - [`ContractViolation::ZeroIterations`] when `iterations` is 0
/// - [`ContractViolation::DuplicateCard`] when the player cards repeat
pub fn run_simulation<R: Rng>(
    player: &[Card; 2],
    iterations: u64,
    rng: &mut R,
) -> Result<SimulationTally, ContractViolation> {
    if iterations == 0 {
        return Err(ContractViolation::ZeroIterations);
    }
    let mut tally = SimulationTally::default();
    for _ in 0..iterations {
        tally.record(play_trial(player, rng)?);
    }
    Ok(tally)
}

/// [`run_simulation`] on a ChaCha20 stream built from `seed`; the same seed
/// always produces the same tally.
///
/// # Examples
///
/// ```
/// use equisim_engine::cards::{Card, Rank, Suit};
/// use equisim_engine::sim::run_simulation_seeded;
///
/// let player = [Card::new(Rank::Ace, Suit::Spades), Card::new(Rank::King, Suit::Spades)];
/// let a = run_simulation_seeded(&player, 200, 42).unwrap();
/// let b = run_simulation_seeded(&player, 200, 42).unwrap();
/// assert_eq!(a, b);
/// assert_eq!(a.iterations(), 200);
/// ```
pub fn run_simulation_seeded(
    player: &[Card; 2],
    iterations: u64,
    seed: u64,
) -> Result<SimulationTally, ContractViolation> {
    debug!(iterations, seed, ?player, "starting simulation");
    let mut rng = ChaCha20Rng::seed_from_u64(seed);
    let tally = run_simulation(player, iterations, &mut rng)?;
    debug!(?tally, "simulation finished");
    Ok(tally)
}

/// Splits `iterations` across `workers` threads and sums their tallies.
///
/// Worker `i` owns a ChaCha20 stream seeded with `seed + i` and a private
/// tally, so results are reproducible for a given `(seed, workers)` pair.
/// With one worker this matches [`run_simulation_seeded`] exactly. At most
/// `iterations` threads are started; extra workers are ignored.
///
/// # Errors
///
/// - [`ContractViolation::ZeroWorkers`] when `workers` is 0
/// - any error of [`run_simulation`]
pub fn run_simulation_parallel(
    player: &[Card; 2],
    iterations: u64,
    seed: u64,
    workers: usize,
) -> Result<SimulationTally, ContractViolation> {
    if workers == 0 {
        return Err(ContractViolation::ZeroWorkers);
    }
    if iterations == 0 {
        return Err(ContractViolation::ZeroIterations);
    }
    debug!(iterations, seed, workers, ?player, "starting parallel simulation");

    let player = *player;
    // Workers beyond one per iteration would have nothing to do.
    let workers = (workers as u64).min(iterations);
    let base = iterations / workers;
    let extra = iterations % workers;

    let tally = thread::scope(|s| {
        let handles: Vec<_> = (0..workers)
            .map(|i| {
                let share = base + u64::from(i < extra);
                s.spawn(move || {
                    trace!(worker = i, share, "worker started");
                    let mut rng = ChaCha20Rng::seed_from_u64(seed.wrapping_add(i));
                    run_simulation(&player, share, &mut rng)
                })
            })
            .collect();

        let mut total = SimulationTally::default();
        for h in handles {
            let part = h.join().unwrap_or_else(|e| std::panic::resume_unwind(e))?;
            total.merge(&part);
        }
        Ok::<_, ContractViolation>(total)
    })?;

    debug!(?tally, "parallel simulation finished");
    Ok(tally)
}
