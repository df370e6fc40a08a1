//! Growable in-memory byte queue

use crate::error::StreamError;
use crate::traits::{ReadFrom, SequentialRead, SequentialWrite, WriteTo};
use crate::transfer::Transfer;

/// Chunk size requested from a source by `read_from`
pub const READ_FROM_CHUNK: usize = 512;

/// Consecutive empty reads tolerated by `read_from` before giving up
pub const MAX_EMPTY_READS: usize = 100;

/// In-memory byte queue
///
/// Writes append to the tail, reads consume from the head. Once every byte
/// has been consumed, reads report [`StreamError::EndOfStream`] until more
/// data is written.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemBuffer {
    data: Vec<u8>,
    /// Read cursor into `data`
    pos: usize,
}

impl MemBuffer {
    /// Create an empty buffer
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty buffer with room for `capacity` bytes
    pub fn with_capacity(capacity: usize) -> Self {
        MemBuffer {
            data: Vec::with_capacity(capacity),
            pos: 0,
        }
    }

    /// Number of unread bytes
    pub fn len(&self) -> usize {
        self.data.len() - self.pos
    }

    /// Whether every byte has been consumed
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Unread bytes
    pub fn as_slice(&self) -> &[u8] {
        &self.data[self.pos..]
    }

    /// Unread bytes, consuming the buffer
    pub fn into_vec(mut self) -> Vec<u8> {
        self.data.drain(..self.pos);
        self.data
    }

    /// Advance the read cursor, reclaiming space once drained
    fn consume(&mut self, n: usize) {
        self.pos += n;
        if self.pos == self.data.len() {
            self.data.clear();
            self.pos = 0;
        }
    }
}

impl From<Vec<u8>> for MemBuffer {
    fn from(data: Vec<u8>) -> Self {
        MemBuffer { data, pos: 0 }
    }
}

impl From<&[u8]> for MemBuffer {
    fn from(data: &[u8]) -> Self {
        MemBuffer::from(data.to_vec())
    }
}

impl SequentialRead for MemBuffer {
    fn read(&mut self, buf: &mut [u8]) -> Transfer {
        if buf.is_empty() {
            return Transfer::ok(0);
        }
        if self.is_empty() {
            return Transfer::end_of_stream();
        }
        let n = buf.len().min(self.len());
        buf[..n].copy_from_slice(&self.data[self.pos..self.pos + n]);
        self.consume(n);
        Transfer::ok(n)
    }
}

impl SequentialWrite for MemBuffer {
    fn write(&mut self, buf: &[u8]) -> Transfer {
        self.data.extend_from_slice(buf);
        Transfer::ok(buf.len())
    }
}

impl ReadFrom for MemBuffer {
    fn read_from(&mut self, src: &mut dyn SequentialRead) -> Transfer {
        let mut total = 0;
        let mut empty_reads = 0;
        loop {
            let start = self.data.len();
            self.data.resize(start + READ_FROM_CHUNK, 0);
            let t = src.read(&mut self.data[start..]);
            let count = t.count.min(READ_FROM_CHUNK);
            self.data.truncate(start + count);
            total += count;

            match t.error {
                Some(StreamError::EndOfStream) => return Transfer::ok(total),
                Some(e) => return Transfer::failed(total, e),
                None if count == 0 => {
                    empty_reads += 1;
                    if empty_reads >= MAX_EMPTY_READS {
                        tracing::warn!(total, empty_reads, "Source stalled during read_from");
                        return Transfer::failed(total, StreamError::NoProgress);
                    }
                }
                None => empty_reads = 0,
            }
        }
    }
}

impl WriteTo for MemBuffer {
    fn write_to(&mut self, dst: &mut dyn SequentialWrite) -> Transfer {
        let offered = self.len();
        if offered == 0 {
            return Transfer::ok(0);
        }
        let t = dst.write(self.as_slice());
        let count = t.count.min(offered);
        self.consume(count);

        match t.error {
            Some(e) => Transfer::failed(count, e),
            None if count < offered => Transfer::failed(count, StreamError::ShortWrite),
            None => Transfer::ok(count),
        }
    }
}
