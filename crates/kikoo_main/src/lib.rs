mod cli;
mod env;
mod error;
mod flood;
mod greeting;
pub mod logging;

use kikoo_domain::ConsoleWriter;

pub use cli::{Cli, FloodArgs, TopLevelCommand};
pub use env::*;
pub use error::Error;
pub use flood::{FloodPlan, flood};
pub use greeting::greet;

/// Executes the parsed command against `writer`.
pub fn run<W: ConsoleWriter + ?Sized>(cli: &Cli, env: &Environment, writer: &W) -> Result<(), Error> {
    match &cli.command {
        TopLevelCommand::Hello { names } => greet(writer, names),
        TopLevelCommand::Flood(args) => flood(writer, &FloodPlan::new(args, env)).map(|_| ()),
    }
}

/// Prints a failed command's message on the error channel and returns the
/// process exit status.
///
/// A failure to print is only logged: the stream is already broken.
pub fn report<W: ConsoleWriter + ?Sized>(writer: &W, error: &Error) -> u8 {
    tracing::error!(%error, "Command failed");
    if let Err(write_error) = writer.write_error(&error.to_string()) {
        tracing::warn!(error = %write_error, "Could not report failure");
    }
    error.exit_code()
}
