//! Command trait for the jsonnet-hl CLI.
//!
//! Every subcommand implements [`Command`] so that `main` can build and run
//! them the same way.

use crate::config::Config;
use crate::error::Result;

/// Standard command trait that all jsonnet-hl commands implement.
///
/// # Type Parameters
/// * `Args` - The arguments type for this command
/// * `Output` - The output type returned by this command
pub trait Command: Sized {
    /// The arguments type for this command.
    type Args;

    /// The output type returned by this command.
    type Output;

    /// Create a new command instance with the given arguments and
    /// configuration.
    fn new(args: Self::Args, config: Config) -> Self;

    /// Execute the command.
    ///
    /// # Returns
    /// * `Result<Self::Output>` - The command output or an error
    fn execute(&self) -> Result<Self::Output>;

    /// Get the command name.
    fn name() -> &'static str;
}

