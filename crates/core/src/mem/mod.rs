//! In-memory reference implementations
//!
//! Conformant subjects for every capability:
//!
//! - [`MemBuffer`]: sequential read/write, transfer-from-source, transfer-to-sink
//! - [`MemFile`]: positional read/write, safe under concurrent access

mod buffer;
mod file;

pub use buffer::{MemBuffer, MAX_EMPTY_READS, READ_FROM_CHUNK};
pub use file::MemFile;
