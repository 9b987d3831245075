//! Command-line interface for computing component sizes of instance files.
//!
//! Every positional path is parsed and solved in order, and each result is
//! written and flushed before the next instance starts.

mod commands;

pub use commands::{Cli, CliError, InstanceSummary, render_summary, run_cli, run_instance};

#[cfg(test)]
mod test_helpers;
#[cfg(test)]
mod tests;
