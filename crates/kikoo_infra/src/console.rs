//! Shared output printer for synchronized line writes to stdout/stderr.
//!
//! Prevents interleaving when multiple threads write to terminal output.

use std::io::{self, Stderr, Stdout, Write};
use std::sync::{Arc, Mutex};

use kikoo_domain::{Channel, ConsoleWriter, Line};

#[derive(Debug)]
struct Streams<O, E> {
    out: O,
    err: E,
}

/// Thread-safe output printer that serializes line writes to stdout/stderr.
///
/// Both streams sit behind one mutex, so a normal line and an error line
/// written from different threads are mutually exclusive as well. Clones share
/// the mutex and the streams; the lock lives as long as the last clone.
///
/// Generic over writer types `O` (stdout) and `E` (stderr) to support testing
/// with mock writers.
#[derive(Debug)]
pub struct StdConsoleWriter<O = Stdout, E = Stderr> {
    streams: Arc<Mutex<Streams<O, E>>>,
}

impl<O, E> Clone for StdConsoleWriter<O, E> {
    fn clone(&self) -> Self {
        Self { streams: self.streams.clone() }
    }
}

impl Default for StdConsoleWriter<Stdout, Stderr> {
    fn default() -> Self {
        Self::with_writers(io::stdout(), io::stderr())
    }
}

impl<O, E> StdConsoleWriter<O, E> {
    /// Creates a new printer bound to custom writers.
    pub fn with_writers(out: O, err: E) -> Self {
        Self { streams: Arc::new(Mutex::new(Streams { out, err })) }
    }
}

fn emit<W: Write>(stream: &mut W, line: &Line) -> io::Result<()> {
    stream.write_all(line.as_bytes())?;
    stream.flush()
}

impl<O: Write + Send, E: Write + Send> ConsoleWriter for StdConsoleWriter<O, E> {
    fn write_line(&self, channel: Channel, message: &str) -> io::Result<()> {
        let line = Line::new(message);

        let result = {
            // A panic mid-write poisons the mutex; the streams are still usable.
            let mut streams = self.streams.lock().unwrap_or_else(|e| e.into_inner());
            match channel {
                Channel::Normal => emit(&mut streams.out, &line),
                Channel::Error => emit(&mut streams.err, &line),
            }
        };

        result.inspect_err(|error| tracing::warn!(%channel, %error, "console write failed"))
    }
}
