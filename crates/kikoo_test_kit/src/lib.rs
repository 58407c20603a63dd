//! Test utilities and helpers for kikoo tests
//!
//! This crate provides in-memory writers that stand in for stdout/stderr so
//! tests can inspect exactly what a console writer emitted.

use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::thread;

/// Cloneable in-memory sink. All clones append to the same buffer.
#[derive(Debug, Clone, Default)]
pub struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl SharedBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far, lossily decoded.
    pub fn contents(&self) -> String {
        let guard = self.0.lock().unwrap_or_else(|e| e.into_inner());
        String::from_utf8_lossy(&guard).into_owned()
    }

    /// Written content split on `\n`, terminators removed.
    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(str::to_string).collect()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut guard = self.0.lock().unwrap_or_else(|e| e.into_inner());
        guard.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Tracks how many trickle writers are mid-write at the same time.
#[derive(Debug, Clone, Default)]
pub struct OverlapProbe {
    active: Arc<AtomicUsize>,
    overlapped: Arc<AtomicBool>,
}

impl OverlapProbe {
    pub fn new() -> Self {
        Self::default()
    }

    /// True once two writes were ever observed in flight together.
    pub fn overlapped(&self) -> bool {
        self.overlapped.load(Ordering::SeqCst)
    }

    fn enter(&self) {
        if self.active.fetch_add(1, Ordering::SeqCst) > 0 {
            self.overlapped.store(true, Ordering::SeqCst);
        }
    }

    fn exit(&self) {
        self.active.fetch_sub(1, Ordering::SeqCst);
    }
}

/// Accepts one byte per `write` call and yields between bytes, making torn
/// lines very likely if the caller does not hold a lock across the whole line.
///
/// Every byte is reported to the shared [`OverlapProbe`], so two trickle
/// writers bound to different channels can detect cross-channel overlap.
#[derive(Debug, Clone)]
pub struct TrickleWriter {
    sink: SharedBuffer,
    probe: OverlapProbe,
}

impl TrickleWriter {
    pub fn new(sink: SharedBuffer, probe: OverlapProbe) -> Self {
        Self { sink, probe }
    }
}

impl Write for TrickleWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let Some(byte) = buf.first() else {
            return Ok(0);
        };
        self.probe.enter();
        thread::yield_now();
        let result = self.sink.write(std::slice::from_ref(byte));
        thread::yield_now();
        self.probe.exit();
        result
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Fails every write with the configured error kind.
#[derive(Debug, Clone, Copy)]
pub struct FailingWriter(pub io::ErrorKind);

impl Write for FailingWriter {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(self.0, "stream closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Err(io::Error::new(self.0, "stream closed"))
    }
}

/// Panics on the first write.
#[derive(Debug, Clone, Copy, Default)]
pub struct PanickingWriter;

impl Write for PanickingWriter {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        panic!("stream exploded")
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
