//! Error types for the CLI application.
//!
//! Every command handler returns `Result<(), CliError>`; [`crate::run`]
//! turns an error into an `Error: ...` line on stderr and exit code 2.

use equisim_engine::ContractViolation;
use thiserror::Error;

use crate::config::ConfigError;

#[derive(Debug, Error)]
pub enum CliError {
    /// Writing to stdout/stderr or reading a file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Bad card text, counts, or flag values
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The engine rejected its input
    #[error("Engine error: {0}")]
    Engine(#[from] ContractViolation),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_carry_their_prefix() {
        let e = CliError::InvalidInput("card 2 invalid: 'Zx'".into());
        assert_eq!(e.to_string(), "Invalid input: card 2 invalid: 'Zx'");

        let e: CliError = ContractViolation::ZeroIterations.into();
        assert_eq!(e.to_string(), "Engine error: iterations must be >= 1");

        let e: CliError = ConfigError::Invalid("workers must be >= 1".into()).into();
        assert_eq!(
            e.to_string(),
            "Configuration error: Invalid configuration: workers must be >= 1"
        );
    }

    #[test]
    fn io_errors_convert() {
        let io = std::io::Error::other("pipe closed");
        let e: CliError = io.into();
        assert!(matches!(e, CliError::Io(_)));
        assert!(e.to_string().contains("pipe closed"));
    }
}
