use std::num::NonZeroUsize;
use std::thread;

use kikoo_domain::{Channel, ConsoleWriter};

use crate::{Environment, Error, FloodArgs};

/// What a flood run prints and from how many threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FloodPlan {
    pub threads: NonZeroUsize,
    pub message: String,
    pub channel: Channel,
}

impl FloodPlan {
    /// Command-line values win over the environment default.
    pub fn new(args: &FloodArgs, env: &Environment) -> Self {
        Self {
            threads: args.threads.unwrap_or(env.flood_threads),
            message: args.message.clone(),
            channel: if args.error { Channel::Error } else { Channel::Normal },
        }
    }
}

/// Spawns one thread per line and waits for all of them.
///
/// Every thread is joined even when some fail; the first failure in thread
/// order is returned. On success returns the number of lines written.
pub fn flood<W: ConsoleWriter + ?Sized>(writer: &W, plan: &FloodPlan) -> Result<usize, Error> {
    let threads = plan.threads.get();
    tracing::info!(threads, channel = %plan.channel, "Starting flood");

    let outcomes: Vec<Result<(), Error>> = thread::scope(|scope| {
        let handles: Vec<_> = (0..threads)
            .map(|index| {
                thread::Builder::new()
                    .name(format!("flood-{index}"))
                    .spawn_scoped(scope, || writer.write_line(plan.channel, &plan.message))
            })
            .collect();

        handles
            .into_iter()
            .enumerate()
            .map(|(index, spawned)| match spawned {
                Ok(handle) => match handle.join() {
                    Ok(written) => written.map_err(Error::Console),
                    Err(_) => Err(Error::WorkerPanicked { index }),
                },
                Err(source) => Err(Error::Spawn { index, source }),
            })
            .collect()
    });

    let written = outcomes.iter().filter(|outcome| outcome.is_ok()).count();
    tracing::info!(written, threads, "Flood finished");

    match outcomes.into_iter().find_map(Result::err) {
        Some(error) => Err(error),
        None => Ok(written),
    }
}
