//! Shared test utilities for the verifier integration suites.
//!
//! Import via `mod common;` from any test file.

#![allow(dead_code)]

use std::io;
use std::sync::Once;

use iocontract_core::{
    MemBuffer, MemFile, ReadAt, ReadFrom, SequentialRead, SequentialWrite, StreamError, Transfer,
    WriteAt, WriteTo,
};
use iocontract_verify::{Check, RecordingLedger, Violation};
use tracing_subscriber::EnvFilter;

// ============================================================================
// Initialization
// ============================================================================

static INIT_TRACING: Once = Once::new();

/// Route verifier logs to the test writer. Filter with `RUST_LOG`.
pub fn init_tracing() {
    INIT_TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// First violation recorded by `ledger`; panics if the run passed.
pub fn first_violation(ledger: &RecordingLedger) -> (Check, Violation) {
    ledger
        .outcome()
        .first_violation
        .expect("expected a violation to be recorded")
}

// ============================================================================
// Non-conformant readers
// ============================================================================

/// Reports one byte for an empty request.
pub struct PhantomByteReader(pub MemBuffer);

impl SequentialRead for PhantomByteReader {
    fn read(&mut self, buf: &mut [u8]) -> Transfer {
        if buf.is_empty() {
            return Transfer::ok(1);
        }
        self.0.read(buf)
    }
}

/// Fails an empty request with a timeout.
pub struct FailingProbeReader(pub MemBuffer);

impl SequentialRead for FailingProbeReader {
    fn read(&mut self, buf: &mut [u8]) -> Transfer {
        if buf.is_empty() {
            return Transfer::failed(0, StreamError::Timeout);
        }
        self.0.read(buf)
    }
}

/// Never hands out more than `chunk` bytes per call and never fails in between.
///
/// After a short read the next call keeps delivering data, breaking the
/// grace-call rule.
pub struct TrickleReader {
    pub remaining: usize,
    pub chunk: usize,
}

impl SequentialRead for TrickleReader {
    fn read(&mut self, buf: &mut [u8]) -> Transfer {
        if buf.is_empty() {
            return Transfer::ok(0);
        }
        if self.remaining == 0 {
            return Transfer::end_of_stream();
        }
        let n = buf.len().min(self.chunk).min(self.remaining);
        self.remaining -= n;
        Transfer::ok(n)
    }
}

/// Ends its stream with `terminal` instead of end of stream.
pub struct BadTerminalReader {
    pub inner: MemBuffer,
    pub terminal: StreamError,
}

impl SequentialRead for BadTerminalReader {
    fn read(&mut self, buf: &mut [u8]) -> Transfer {
        let t = self.inner.read(buf);
        if t.is_end_of_stream() {
            Transfer::failed(t.count, self.terminal.clone())
        } else {
            t
        }
    }
}

// ============================================================================
// Non-conformant writers
// ============================================================================

/// Accepts half of every chunk and reports no failure.
pub struct HalfWriter(pub MemBuffer);

impl SequentialWrite for HalfWriter {
    fn write(&mut self, buf: &[u8]) -> Transfer {
        let half = (buf.len() + 1) / 2;
        self.0.write(&buf[..half])
    }
}

/// Accepts nothing and reports nothing.
pub struct StalledWriter;

impl SequentialWrite for StalledWriter {
    fn write(&mut self, _buf: &[u8]) -> Transfer {
        Transfer::ok(0)
    }
}

/// Claims to have written more than it was offered.
pub struct BraggingWriter;

impl SequentialWrite for BraggingWriter {
    fn write(&mut self, buf: &[u8]) -> Transfer {
        Transfer::ok(buf.len() + 1)
    }
}

// ============================================================================
// Non-conformant random access
// ============================================================================

/// Reports end of stream from `cutoff` on, whatever the backing length.
pub struct TruncatedFile {
    pub file: MemFile,
    pub cutoff: u64,
}

impl ReadAt for TruncatedFile {
    fn read_at(&self, buf: &mut [u8], offset: u64) -> Transfer {
        if offset >= self.cutoff && !buf.is_empty() {
            return Transfer::end_of_stream();
        }
        self.file.read_at(buf, offset)
    }
}

/// Fills every request and never ends.
pub struct BottomlessFile;

impl ReadAt for BottomlessFile {
    fn read_at(&self, buf: &mut [u8], _offset: u64) -> Transfer {
        Transfer::ok(buf.len())
    }
}

/// Stores half of every write and reports no failure.
pub struct HalfWriteFile(pub MemFile);

impl WriteAt for HalfWriteFile {
    fn write_at(&self, buf: &[u8], offset: u64) -> Transfer {
        let half = (buf.len() + 1) / 2;
        self.0.write_at(&buf[..half], offset)
    }
}

/// Accepts nothing at any offset and reports nothing.
pub struct StalledFile;

impl WriteAt for StalledFile {
    fn write_at(&self, _buf: &[u8], _offset: u64) -> Transfer {
        Transfer::ok(0)
    }
}

// ============================================================================
// Non-conformant bulk transfers
// ============================================================================

/// Rewrites every source failure to a generic I/O error.
pub struct RewritingReadFrom(pub MemBuffer);

impl ReadFrom for RewritingReadFrom {
    fn read_from(&mut self, src: &mut dyn SequentialRead) -> Transfer {
        let t = self.0.read_from(src);
        match t.error {
            Some(e) => Transfer::failed(
                t.count,
                StreamError::io(io::ErrorKind::Other, e.to_string()),
            ),
            None => t,
        }
    }
}

/// Stops after the first chunk as if the source were exhausted.
pub struct ImpatientReadFrom(pub MemBuffer);

impl ReadFrom for ImpatientReadFrom {
    fn read_from(&mut self, src: &mut dyn SequentialRead) -> Transfer {
        let mut chunk = [0u8; 512];
        let t = src.read(&mut chunk);
        match t.error {
            Some(StreamError::EndOfStream) | None => {
                self.0.write(&chunk[..t.count]);
                Transfer::ok(t.count)
            }
            Some(e) => Transfer::failed(t.count, e),
        }
    }
}

/// Counts every byte twice.
pub struct DoubleCountingReadFrom(pub MemBuffer);

impl ReadFrom for DoubleCountingReadFrom {
    fn read_from(&mut self, src: &mut dyn SequentialRead) -> Transfer {
        let t = self.0.read_from(src);
        Transfer {
            count: t.count * 2,
            error: t.error,
        }
    }
}

/// Reports the sink's fault but claims progress anyway.
pub struct OptimisticWriteTo(pub MemBuffer);

impl WriteTo for OptimisticWriteTo {
    fn write_to(&mut self, dst: &mut dyn SequentialWrite) -> Transfer {
        let offered = self.0.len();
        let t = self.0.write_to(dst);
        match t.error {
            Some(e) => Transfer::failed(offered, e),
            None => t,
        }
    }
}

/// Gives up permanently after the first sink failure.
pub struct BrittleWriteTo {
    pub inner: MemBuffer,
    pub broken: bool,
}

impl WriteTo for BrittleWriteTo {
    fn write_to(&mut self, dst: &mut dyn SequentialWrite) -> Transfer {
        if self.broken {
            return Transfer::failed(0, StreamError::Closed);
        }
        let t = self.inner.write_to(dst);
        if t.is_err() {
            self.broken = true;
        }
        t
    }
}
