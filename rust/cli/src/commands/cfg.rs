//! Configuration command handler.
//!
//! Prints the resolved configuration as pretty JSON, each value paired with
//! where it came from (`default`, `file`, or `env`):
//!
//! ```json
//! {
//!   "iterations": {
//!     "value": 10000,
//!     "source": "default"
//!   },
//!   ...
//! }
//! ```

use crate::config::ConfigResolved;
use crate::error::CliError;
use std::io::Write;

pub fn handle_cfg_command(resolved: &ConfigResolved, out: &mut dyn Write) -> Result<(), CliError> {
    let ConfigResolved { config, sources } = resolved;
    let display = serde_json::json!({
        "iterations": {
            "value": config.iterations,
            "source": sources.iterations,
        },
        "seed": {
            "value": config.seed,
            "source": sources.seed,
        },
        "workers": {
            "value": config.workers,
            "source": sources.workers,
        },
        "warn_below": {
            "value": config.warn_below,
            "source": sources.warn_below,
        }
    });
    let json_str = serde_json::to_string_pretty(&display).map_err(std::io::Error::other)?;
    writeln!(out, "{}", json_str)?;
    Ok(())
}
