//! NOTE: Always use singular names for commands and subcommands.

use std::num::NonZeroUsize;

use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    /// Enable debug logging to the log directory.
    ///
    /// Ignored when `KIKOO_LOG` already holds a filter directive.
    #[arg(long, default_value_t = false, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: TopLevelCommand,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum TopLevelCommand {
    /// Greet exactly one person.
    Hello {
        /// Name to greet. Anything other than exactly one name is an error.
        #[arg(num_args = 0..)]
        names: Vec<String>,
    },

    /// Print one line from each of many threads at once.
    Flood(FloodArgs),
}

#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct FloodArgs {
    /// Number of threads to spawn. Defaults to `KIKOO_FLOOD_THREADS` or 42.
    #[arg(long, short = 't')]
    pub threads: Option<NonZeroUsize>,

    /// Message every thread prints.
    #[arg(long, short = 'm', default_value = "OK", allow_hyphen_values = true)]
    pub message: String,

    /// Print to the error channel instead of the normal one.
    #[arg(long, default_value_t = false)]
    pub error: bool,
}
