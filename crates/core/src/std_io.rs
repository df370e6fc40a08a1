//! Adapters from `std::io` types to the capability traits
//!
//! `std::io::Read` signals end of stream with `Ok(0)` and `std::io::Write` may
//! accept fewer bytes than offered without failing. [`Std`] translates both
//! into the capability contracts: `Ok(0)` on a non-empty buffer becomes
//! [`StreamError::EndOfStream`], and writes are retried until the chunk is
//! fully accepted or a failure is reported.

use crate::error::StreamError;
use crate::traits::{SequentialRead, SequentialWrite};
use crate::transfer::Transfer;
use std::io;

/// Wraps a `std::io` value so it can be verified
#[derive(Debug, Default, Clone)]
pub struct Std<T>(pub T);

impl<T> Std<T> {
    /// Borrow the wrapped value
    pub fn get_ref(&self) -> &T {
        &self.0
    }

    /// Unwrap
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<R: io::Read> SequentialRead for Std<R> {
    fn read(&mut self, buf: &mut [u8]) -> Transfer {
        loop {
            match self.0.read(buf) {
                Ok(0) if !buf.is_empty() => return Transfer::end_of_stream(),
                Ok(n) => return Transfer::ok(n),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
                Err(e) => return Transfer::failed(0, e.into()),
            }
        }
    }
}

impl<W: io::Write> SequentialWrite for Std<W> {
    fn write(&mut self, buf: &[u8]) -> Transfer {
        let mut written = 0;
        while written < buf.len() {
            match self.0.write(&buf[written..]) {
                Ok(0) => return Transfer::failed(written, StreamError::ShortWrite),
                Ok(n) => written += n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
                Err(e) => return Transfer::failed(written, e.into()),
            }
        }
        Transfer::ok(written)
    }
}

#[cfg(unix)]
mod file {
    use super::Std;
    use crate::error::StreamError;
    use crate::traits::{ReadAt, WriteAt};
    use crate::transfer::Transfer;
    use std::fs::File;
    use std::io;
    use std::os::unix::fs::FileExt;

    /// Positional reads fill the whole buffer or report why they could not.
    impl ReadAt for Std<File> {
        fn read_at(&self, buf: &mut [u8], offset: u64) -> Transfer {
            let mut filled = 0;
            while filled < buf.len() {
                match self.0.read_at(&mut buf[filled..], offset + filled as u64) {
                    Ok(0) => return Transfer::failed(filled, StreamError::EndOfStream),
                    Ok(n) => filled += n,
                    Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
                    Err(e) => return Transfer::failed(filled, e.into()),
                }
            }
            Transfer::ok(filled)
        }
    }

    impl WriteAt for Std<File> {
        fn write_at(&self, buf: &[u8], offset: u64) -> Transfer {
            let mut written = 0;
            while written < buf.len() {
                match self.0.write_at(&buf[written..], offset + written as u64) {
                    Ok(0) => return Transfer::failed(written, StreamError::ShortWrite),
                    Ok(n) => written += n,
                    Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
                    Err(e) => return Transfer::failed(written, e.into()),
                }
            }
            Transfer::ok(written)
        }
    }
}
