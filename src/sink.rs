//! Output sinks.
//!
//! The monitor and the final report format into a reusable `Vec<u8>` and
//! then call `write_all(bytes)`, which takes a lock only for the actual
//! I/O. Formatting never happens under the lock.
//!
//! # Panic policy
//!
//! Implementations panic on I/O errors (fail-fast), except `BrokenPipe` on
//! stdout, which is silently ignored, the standard CLI behavior for
//! `slimescan-rs | head`. The monitor tolerates snapshot-file *creation*
//! failures by skipping the tick's [`FileSink`]; once a sink exists, its
//! writes are fail-fast like any other.

use std::io::{self, BufWriter, ErrorKind, Write};
use std::sync::Mutex;

/// Default sink buffer size (64 KiB): few syscalls, negligible memory.
const DEFAULT_BUF_CAPACITY: usize = 64 * 1024;

/// Lowest common denominator byte sink.
///
/// Batches from different callers are serialized (no byte-level
/// interleaving); ordering between batches follows lock acquisition.
pub trait OutputSink: Send + Sync + 'static {
    /// Write a batch of bytes.
    ///
    /// # Panics
    ///
    /// Panics on I/O error, except `BrokenPipe` which may be ignored.
    fn write_all(&self, bytes: &[u8]);

    /// Flush buffered data to the OS.
    fn flush(&self);
}

/// Stdout sink with internal buffering + a mutex.
pub struct StdoutSink {
    out: Mutex<BufWriter<io::Stdout>>,
}

impl StdoutSink {
    pub fn new() -> Self {
        Self {
            out: Mutex::new(BufWriter::with_capacity(DEFAULT_BUF_CAPACITY, io::stdout())),
        }
    }
}

impl Default for StdoutSink {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputSink for StdoutSink {
    fn write_all(&self, bytes: &[u8]) {
        let mut out = self.out.lock().expect("stdout sink mutex poisoned");
        if let Err(e) = out.write_all(bytes) {
            if e.kind() == ErrorKind::BrokenPipe {
                return;
            }
            panic!("stdout write failed: {}", e);
        }
    }

    fn flush(&self) {
        let mut out = self.out.lock().expect("stdout sink mutex poisoned");
        if let Err(e) = out.flush() {
            if e.kind() == ErrorKind::BrokenPipe {
                return;
            }
            panic!("stdout flush failed: {}", e);
        }
    }
}

/// Test sink: captures all bytes in memory; `take()` extracts them.
pub struct VecSink {
    buf: Mutex<Vec<u8>>,
}

impl VecSink {
    pub fn new() -> Self {
        Self {
            buf: Mutex::new(Vec::new()),
        }
    }

    /// Extract captured bytes, leaving the buffer empty.
    pub fn take(&self) -> Vec<u8> {
        let mut g = self.buf.lock().expect("vec sink mutex poisoned");
        std::mem::take(&mut *g)
    }

    pub fn len(&self) -> usize {
        self.buf.lock().expect("vec sink mutex poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for VecSink {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputSink for VecSink {
    fn write_all(&self, bytes: &[u8]) {
        self.buf
            .lock()
            .expect("vec sink mutex poisoned")
            .extend_from_slice(bytes);
    }

    fn flush(&self) {}
}

/// Null sink: discards everything. For benches and silenced runs.
pub struct NullSink;

impl OutputSink for NullSink {
    fn write_all(&self, _bytes: &[u8]) {}
    fn flush(&self) {}
}

/// File sink: buffered writes to a created (truncated) file.
///
/// The monitor opens a fresh one per snapshot tick, which is what truncates
/// the stats file. Buffering lives in userspace; bytes reach the OS on
/// `flush` or when the buffer fills.
pub struct FileSink {
    out: Mutex<BufWriter<std::fs::File>>,
}

impl FileSink {
    /// Create (or truncate) `path` with the default buffer size.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created or opened.
    pub fn create(path: impl AsRef<std::path::Path>) -> io::Result<Self> {
        Self::create_with_capacity(path, DEFAULT_BUF_CAPACITY)
    }

    /// Create with a custom buffer capacity.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created or opened.
    pub fn create_with_capacity(path: impl AsRef<std::path::Path>, cap: usize) -> io::Result<Self> {
        let file = std::fs::File::create(path)?;
        Ok(Self {
            out: Mutex::new(BufWriter::with_capacity(cap, file)),
        })
    }
}

impl OutputSink for FileSink {
    fn write_all(&self, bytes: &[u8]) {
        let mut out = self.out.lock().expect("file sink mutex poisoned");
        out.write_all(bytes).expect("file write failed");
    }

    fn flush(&self) {
        let mut out = self.out.lock().expect("file sink mutex poisoned");
        out.flush().expect("file flush failed");
    }
}
