//! # Output sinks.
//!
//! A [`LineSink`] receives finished lines from the notifier. Each line must
//! reach the underlying stream in a single write so concurrent handlers never
//! interleave inside a line.
//!
//! - [`WriterSink`] serializes lines onto any [`Write`] behind a mutex.
//! - [`StdoutSink`] is a [`WriterSink`] over process standard output.

use std::io::{self, Stdout, Write};
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Destination for rendered lines.
pub trait LineSink: Send + Sync + 'static {
    /// Writes `line` followed by a newline as one atomic write.
    fn write_line(&self, line: &str) -> io::Result<()>;
}

/// Line sink over an arbitrary writer.
///
/// Each line and its newline are joined into one buffer and handed to the
/// writer with a single `write_all` while the lock is held, then flushed.
#[derive(Debug, Default)]
pub struct WriterSink<W> {
    inner: Mutex<W>,
}

impl<W: Write> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            inner: Mutex::new(writer),
        }
    }

    /// Locks the underlying writer.
    ///
    /// A writer poisoned by a panicking caller is still returned; lines are
    /// written whole, so it holds no half-finished state.
    pub fn lock(&self) -> MutexGuard<'_, W> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Consumes the sink and returns the writer.
    pub fn into_inner(self) -> W {
        self.inner.into_inner().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<W: Write + Send + 'static> LineSink for WriterSink<W> {
    fn write_line(&self, line: &str) -> io::Result<()> {
        let mut buf = String::with_capacity(line.len() + 1);
        buf.push_str(line);
        buf.push('\n');

        let mut out = self.lock();
        out.write_all(buf.as_bytes())?;
        out.flush()
    }
}

/// Process standard output.
#[derive(Debug)]
pub struct StdoutSink(WriterSink<Stdout>);

impl StdoutSink {
    pub fn new() -> Self {
        Self(WriterSink::new(io::stdout()))
    }
}

impl Default for StdoutSink {
    fn default() -> Self {
        Self::new()
    }
}

impl LineSink for StdoutSink {
    fn write_line(&self, line: &str) -> io::Result<()> {
        self.0.write_line(line)
    }
}
