//! Core types for iocontract
//!
//! This crate defines the stream capability contracts that the verifiers
//! drive, plus conformant implementations of them:
//! - Transfer: per-call outcome (count + optional failure)
//! - StreamError: failure signals, including the end-of-stream signal
//! - Traits: SequentialRead, SequentialWrite, ReadAt, WriteAt, ReadFrom, WriteTo
//! - Std: adapter exposing `std::io` types through the capability traits
//! - MemBuffer / MemFile: in-memory reference subjects

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod mem;
pub mod std_io;
pub mod traits;
pub mod transfer;

pub use error::StreamError;
pub use mem::{MemBuffer, MemFile};
pub use std_io::Std;
pub use traits::{ReadAt, ReadFrom, SequentialRead, SequentialWrite, WriteAt, WriteTo};
pub use transfer::Transfer;
