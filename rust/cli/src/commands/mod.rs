//! Command handlers, one module per subcommand.
//!
//! Every handler has the shape
//! `pub fn handle_COMMAND_command(...) -> Result<(), CliError>` and writes
//! only to the streams it is given, so it can be tested against `Vec<u8>`.

pub mod cfg;
pub mod deal;
pub mod equity;
pub mod eval;

pub use cfg::handle_cfg_command;
pub use deal::handle_deal_command;
pub use equity::{EquityOptions, handle_equity_command};
pub use eval::handle_eval_command;
