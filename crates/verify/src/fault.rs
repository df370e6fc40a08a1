//! Fault-injecting sources and sinks
//!
//! Used by the bulk-transfer verifiers to simulate a transient fault: the
//! first call fails with [`StreamError::Timeout`] without moving any data,
//! every later call is forwarded to the wrapped object.

use crate::util::payload;
use iocontract_core::{MemBuffer, SequentialRead, SequentialWrite, StreamError, Transfer};

/// The fault injected by [`FaultySource`] and [`FaultySink`]
pub const INJECTED_FAULT: StreamError = StreamError::Timeout;

/// Source whose first read fails
#[derive(Debug)]
pub struct FaultySource<S> {
    inner: S,
    armed: bool,
    calls: usize,
}

impl<S: SequentialRead> FaultySource<S> {
    /// Wrap `inner`; the next read fails
    pub fn new(inner: S) -> Self {
        FaultySource {
            inner,
            armed: true,
            calls: 0,
        }
    }

    /// Whether the fault has not fired yet
    pub fn is_armed(&self) -> bool {
        self.armed
    }

    /// Number of reads made against this source
    pub fn calls(&self) -> usize {
        self.calls
    }

    /// Unwrap
    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl FaultySource<MemBuffer> {
    /// Faulty source over `len` bytes of payload
    pub fn with_payload(len: usize) -> Self {
        FaultySource::new(MemBuffer::from(payload(len)))
    }
}

impl<S: SequentialRead> SequentialRead for FaultySource<S> {
    fn read(&mut self, buf: &mut [u8]) -> Transfer {
        self.calls += 1;
        if self.armed {
            self.armed = false;
            return Transfer::failed(0, INJECTED_FAULT);
        }
        self.inner.read(buf)
    }
}

/// Sink whose first write fails
#[derive(Debug)]
pub struct FaultySink<W> {
    inner: W,
    armed: bool,
    accepted: usize,
}

impl<W: SequentialWrite> FaultySink<W> {
    /// Wrap `inner`; the next write fails
    pub fn new(inner: W) -> Self {
        FaultySink {
            inner,
            armed: true,
            accepted: 0,
        }
    }

    /// Whether the fault has not fired yet
    pub fn is_armed(&self) -> bool {
        self.armed
    }

    /// Total bytes the wrapped sink accepted
    pub fn accepted(&self) -> usize {
        self.accepted
    }

    /// Unwrap
    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl FaultySink<MemBuffer> {
    /// Faulty sink backed by a buffer with room for `capacity` bytes
    pub fn with_capacity(capacity: usize) -> Self {
        FaultySink::new(MemBuffer::with_capacity(capacity))
    }
}

impl<W: SequentialWrite> SequentialWrite for FaultySink<W> {
    fn write(&mut self, buf: &[u8]) -> Transfer {
        if self.armed {
            self.armed = false;
            return Transfer::failed(0, INJECTED_FAULT);
        }
        let t = self.inner.write(buf);
        self.accepted += t.count.min(buf.len());
        t
    }
}
