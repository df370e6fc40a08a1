//! In-memory positional file

use crate::error::StreamError;
use crate::traits::{ReadAt, WriteAt};
use crate::transfer::Transfer;
use parking_lot::RwLock;
use std::io;

/// In-memory file supporting positional reads and writes
///
/// Thread-safe through `parking_lot::RwLock`: concurrent `read_at` calls share
/// the lock, `write_at` takes it exclusively. Writing past the end extends the
/// file with zeros.
#[derive(Debug, Default)]
pub struct MemFile {
    data: RwLock<Vec<u8>>,
}

impl MemFile {
    /// Create an empty file
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a zero-filled file of `len` bytes
    pub fn with_len(len: usize) -> Self {
        MemFile::from(vec![0u8; len])
    }

    /// Current length in bytes
    pub fn len(&self) -> usize {
        self.data.read().len()
    }

    /// Whether the file is empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Copy of the current contents
    pub fn snapshot(&self) -> Vec<u8> {
        self.data.read().clone()
    }
}

impl From<Vec<u8>> for MemFile {
    fn from(data: Vec<u8>) -> Self {
        MemFile {
            data: RwLock::new(data),
        }
    }
}

impl ReadAt for MemFile {
    fn read_at(&self, buf: &mut [u8], offset: u64) -> Transfer {
        if buf.is_empty() {
            return Transfer::ok(0);
        }
        let data = self.data.read();
        let start = match usize::try_from(offset) {
            Ok(start) if start < data.len() => start,
            _ => return Transfer::end_of_stream(),
        };
        let n = buf.len().min(data.len() - start);
        buf[..n].copy_from_slice(&data[start..start + n]);
        if n < buf.len() {
            Transfer::failed(n, StreamError::EndOfStream)
        } else {
            Transfer::ok(n)
        }
    }
}

impl WriteAt for MemFile {
    fn write_at(&self, buf: &[u8], offset: u64) -> Transfer {
        let end = usize::try_from(offset)
            .ok()
            .and_then(|start| start.checked_add(buf.len()).map(|end| (start, end)));
        let (start, end) = match end {
            Some(range) => range,
            None => {
                return Transfer::failed(
                    0,
                    StreamError::io(io::ErrorKind::InvalidInput, "offset out of range"),
                )
            }
        };

        let mut data = self.data.write();
        if end > data.len() {
            data.resize(end, 0);
        }
        data[start..end].copy_from_slice(buf);
        Transfer::ok(buf.len())
    }
}
