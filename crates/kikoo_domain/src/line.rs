use std::fmt;

use strum_macros::{Display, EnumIter};

/// Prefix written in front of every message.
pub const PREFIX: &str = "> ";

/// One of the two fixed output destinations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum Channel {
    /// Bound to standard output.
    Normal,
    /// Bound to the diagnostic stream (standard error).
    Error,
}

/// A fully rendered output line: prefix, message and a single terminator.
///
/// Rendering happens before the writer takes its lock so the critical section
/// is a single `write_all` of contiguous bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line(String);

impl Line {
    pub fn new(message: &str) -> Self {
        let mut buf = String::with_capacity(PREFIX.len() + message.len() + 1);
        buf.push_str(PREFIX);
        buf.push_str(message);
        buf.push('\n');
        Self(buf)
    }

    /// The message without prefix and terminator.
    pub fn message(&self) -> &str {
        &self.0[PREFIX.len()..self.0.len() - 1]
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
