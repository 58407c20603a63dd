use std::panic;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use kikoo_infra::StdConsoleWriter;
use kikoo_main::{Cli, Environment, logging, report, run};

fn main() -> Result<ExitCode> {
    // Set up panic hook for better error display
    panic::set_hook(Box::new(|panic_info| {
        let message = if let Some(s) = panic_info.payload().downcast_ref::<&str>() {
            s.to_string()
        } else if let Some(s) = panic_info.payload().downcast_ref::<String>() {
            s.clone()
        } else {
            "Unexpected error occurred".to_string()
        };

        tracing::error!(%message, "Panic");
        eprintln!("> {message}");
        // Worker panics are collected when the thread is joined.
        if std::thread::current().name() == Some("main") {
            std::process::exit(1);
        }
    }));

    let cli = Cli::parse();

    let cwd = std::env::current_dir().context("Failed to read the working directory")?;
    let env = Environment::from_cwd(&cwd);
    let _guard = logging::init(&env, cli.verbose)?;
    tracing::debug!(command = ?cli.command, "Running command");

    let writer = StdConsoleWriter::default();
    match run(&cli, &env, &writer) {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(error) => Ok(ExitCode::from(report(&writer, &error))),
    }
}
