//! Sequential views over random-access capabilities
//!
//! A view borrows a positional reader or writer plus a private cursor. Each
//! call is forwarded at the cursor, which then advances by the count actually
//! transferred, partial transfers included.

use iocontract_core::{ReadAt, SequentialRead, SequentialWrite, Transfer, WriteAt};

/// Exposes a [`ReadAt`] as a [`SequentialRead`]
#[derive(Debug)]
pub struct ReadAtView<'a, R: ?Sized> {
    inner: &'a R,
    offset: u64,
}

impl<'a, R: ReadAt + ?Sized> ReadAtView<'a, R> {
    /// Create a view reading from `offset`
    pub fn new(inner: &'a R, offset: u64) -> Self {
        ReadAtView { inner, offset }
    }

    /// Current cursor position
    pub fn offset(&self) -> u64 {
        self.offset
    }
}

impl<R: ReadAt + ?Sized> SequentialRead for ReadAtView<'_, R> {
    fn read(&mut self, buf: &mut [u8]) -> Transfer {
        let t = self.inner.read_at(buf, self.offset);
        self.offset = self.offset.saturating_add(t.count as u64);
        t
    }
}

/// Exposes a [`WriteAt`] as a [`SequentialWrite`]
#[derive(Debug)]
pub struct WriteAtView<'a, W: ?Sized> {
    inner: &'a W,
    offset: u64,
}

impl<'a, W: WriteAt + ?Sized> WriteAtView<'a, W> {
    /// Create a view writing from `offset`
    pub fn new(inner: &'a W, offset: u64) -> Self {
        WriteAtView { inner, offset }
    }

    /// Current cursor position
    pub fn offset(&self) -> u64 {
        self.offset
    }
}

impl<W: WriteAt + ?Sized> SequentialWrite for WriteAtView<'_, W> {
    fn write(&mut self, buf: &[u8]) -> Transfer {
        let t = self.inner.write_at(buf, self.offset);
        self.offset = self.offset.saturating_add(t.count as u64);
        t
    }
}
