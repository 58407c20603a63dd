use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I need a (1) name.")]
    MissingName { given: usize },

    #[error("Console write failed: {0}")]
    Console(#[from] io::Error),

    #[error("Failed to spawn worker thread {index}: {source}")]
    Spawn { index: usize, source: io::Error },

    #[error("Worker thread {index} panicked")]
    WorkerPanicked { index: usize },

    #[error("Failed to set up logging: {0}")]
    Logging(String),
}

impl Error {
    /// Process exit status for this failure, `EXIT_FAILURE` for every kind.
    pub fn exit_code(&self) -> u8 {
        1
    }
}
