use thiserror::Error;

use crate::cards::Card;

/// A caller broke one of the engine's input contracts.
///
/// These are programmer errors: the engine never repairs or clamps the
/// offending input, it reports it and lets the caller decide.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ContractViolation {
    #[error("{what} needs {expected} cards, got {actual}")]
    CardCount {
        what: &'static str,
        expected: usize,
        actual: usize,
    },
    #[error("card {0:?} appears more than once")]
    DuplicateCard(Card),
    #[error("iterations must be >= 1")]
    ZeroIterations,
    #[error("workers must be >= 1")]
    ZeroWorkers,
}
