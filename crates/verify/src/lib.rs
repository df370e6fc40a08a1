//! Conformance verifiers for stream capability contracts
//!
//! One verifier per capability. Each drives the object under test through
//! the edge cases of its contract, reports every check to a [`Ledger`], and
//! returns whether all of them passed:
//!
//! | Capability | Entry points | Default buffer |
//! |---|---|---|
//! | sequential read | [`implements_reader`], [`implements_reader_with`] | 4096 |
//! | sequential write | [`implements_writer`], [`implements_writer_with`] | 409600 |
//! | random-access read | [`implements_read_at`], [`implements_read_at_with`] | 4096 |
//! | random-access write | [`implements_write_at`], [`implements_write_at_with`] | 4096 |
//! | transfer-from-source | [`implements_read_from`], [`implements_read_from_with`] | 409600 |
//! | transfer-to-sink | [`implements_write_to`], [`implements_write_to_with`] | 4096 |
//!
//! Sequential checks run on the calling thread. The random-access verifiers
//! additionally issue up to [`MAX_SWEEP_TASKS`] concurrent calls at distinct
//! offsets and join all of them before reporting.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod fault;
pub mod ledger;
pub mod read_at;
pub mod read_from;
pub mod reader;
pub mod view;
pub mod violation;
pub mod write_at;
pub mod write_to;
pub mod writer;

mod sweep;
mod util;

pub use config::{
    Capability, ConfigError, ReadAtConfig, ReadFromConfig, ReaderConfig, WriteAtConfig,
    WriteToConfig, WriterConfig, DEFAULT_READER_BUFFER_SIZE, DEFAULT_READ_AT_BUFFER_SIZE,
    DEFAULT_READ_FROM_BUFFER_SIZE, DEFAULT_WRITER_BUFFER_SIZE, DEFAULT_WRITE_AT_BUFFER_SIZE,
    DEFAULT_WRITE_TO_BUFFER_SIZE,
};
pub use fault::{FaultySink, FaultySource, INJECTED_FAULT};
pub use ledger::{Ledger, LedgerEntry, RecordingLedger, VerificationOutcome};
pub use read_at::{implements_read_at, implements_read_at_with};
pub use read_from::{implements_read_from, implements_read_from_with};
pub use reader::{implements_reader, implements_reader_with};
pub use sweep::MAX_SWEEP_TASKS;
pub use view::{ReadAtView, WriteAtView};
pub use violation::{Check, SweepFailure, Violation};
pub use write_at::{implements_write_at, implements_write_at_with};
pub use write_to::{implements_write_to, implements_write_to_with};
pub use writer::{implements_writer, implements_writer_with};
