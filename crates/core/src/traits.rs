//! Stream capability contracts
//!
//! One trait per capability. Each operation returns a [`Transfer`]: the byte
//! count actually moved plus an optional failure.
//!
//! ## Contracts
//!
//! - [`SequentialRead`]: `count <= buf.len()`. An empty buffer yields `(0, None)`.
//!   A short read without failure must be followed by `(0, Some(_))` on the
//!   next call. Exhaustion is reported as `EndOfStream`.
//! - [`SequentialWrite`]: `count <= buf.len()`; a short write carries a failure
//!   on the same call.
//! - [`ReadAt`] / [`WriteAt`]: as above, but positional and independent of
//!   each other. A short transfer carries a failure on the same call. Calls at
//!   disjoint offsets may run concurrently.
//! - [`ReadFrom`] / [`WriteTo`]: loop over a supplied source/sink until it is
//!   exhausted or fails. End of stream from the source is success; every other
//!   failure is returned verbatim.

use crate::transfer::Transfer;
use std::sync::Arc;

/// Cursor-based reading
pub trait SequentialRead {
    /// Read up to `buf.len()` bytes into `buf`
    fn read(&mut self, buf: &mut [u8]) -> Transfer;
}

/// Cursor-based writing
pub trait SequentialWrite {
    /// Write up to `buf.len()` bytes from `buf`
    fn write(&mut self, buf: &[u8]) -> Transfer;
}

/// Positional reading
///
/// Takes `&self`: implementations must tolerate concurrent calls at
/// disjoint offsets.
pub trait ReadAt {
    /// Read up to `buf.len()` bytes starting at `offset`
    fn read_at(&self, buf: &mut [u8], offset: u64) -> Transfer;
}

/// Positional writing
///
/// Takes `&self`: implementations must tolerate concurrent calls at
/// disjoint offsets.
pub trait WriteAt {
    /// Write `buf` starting at `offset`
    fn write_at(&self, buf: &[u8], offset: u64) -> Transfer;
}

/// Bulk transfer from a source
pub trait ReadFrom {
    /// Pull from `src` until it reports end of stream or fails
    ///
    /// Returns the total consumed. End of stream is not reported as a
    /// failure; any other source failure is.
    fn read_from(&mut self, src: &mut dyn SequentialRead) -> Transfer;
}

/// Bulk transfer to a sink
pub trait WriteTo {
    /// Push into `dst` until there is nothing left or `dst` fails
    fn write_to(&mut self, dst: &mut dyn SequentialWrite) -> Transfer;
}

// Forwarding impls so callers can hand over borrows or boxes.

impl<T: SequentialRead + ?Sized> SequentialRead for &mut T {
    fn read(&mut self, buf: &mut [u8]) -> Transfer {
        (**self).read(buf)
    }
}

impl<T: SequentialRead + ?Sized> SequentialRead for Box<T> {
    fn read(&mut self, buf: &mut [u8]) -> Transfer {
        (**self).read(buf)
    }
}

impl<T: SequentialWrite + ?Sized> SequentialWrite for &mut T {
    fn write(&mut self, buf: &[u8]) -> Transfer {
        (**self).write(buf)
    }
}

impl<T: SequentialWrite + ?Sized> SequentialWrite for Box<T> {
    fn write(&mut self, buf: &[u8]) -> Transfer {
        (**self).write(buf)
    }
}

impl<T: ReadAt + ?Sized> ReadAt for &T {
    fn read_at(&self, buf: &mut [u8], offset: u64) -> Transfer {
        (**self).read_at(buf, offset)
    }
}

impl<T: ReadAt + ?Sized> ReadAt for Arc<T> {
    fn read_at(&self, buf: &mut [u8], offset: u64) -> Transfer {
        (**self).read_at(buf, offset)
    }
}

impl<T: WriteAt + ?Sized> WriteAt for &T {
    fn write_at(&self, buf: &[u8], offset: u64) -> Transfer {
        (**self).write_at(buf, offset)
    }
}

impl<T: WriteAt + ?Sized> WriteAt for Arc<T> {
    fn write_at(&self, buf: &[u8], offset: u64) -> Transfer {
        (**self).write_at(buf, offset)
    }
}

impl<T: ReadFrom + ?Sized> ReadFrom for &mut T {
    fn read_from(&mut self, src: &mut dyn SequentialRead) -> Transfer {
        (**self).read_from(src)
    }
}

impl<T: WriteTo + ?Sized> WriteTo for &mut T {
    fn write_to(&mut self, dst: &mut dyn SequentialWrite) -> Transfer {
        (**self).write_to(dst)
    }
}
