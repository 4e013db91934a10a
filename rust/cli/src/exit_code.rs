//! Process exit codes returned by [`crate::run`].

/// Command completed.
pub const SUCCESS: i32 = 0;

/// Usage error, invalid input, configuration error, or failed write.
pub const ERROR: i32 = 2;
