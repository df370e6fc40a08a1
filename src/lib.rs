//! iocontract - Conformance verifier for stream I/O capability contracts
//!
//! iocontract drives an implementation of one of six stream capabilities
//! (sequential read/write, random-access read/write, transfer-from-source,
//! transfer-to-sink) through the edge cases of its contract and reports every
//! violation it observes to an assertion ledger.
//!
//! # Quick Start
//!
//! ```
//! use iocontract::{implements_reader, MemBuffer, RecordingLedger};
//!
//! let mut ledger = RecordingLedger::new();
//! let mut subject = MemBuffer::from(vec![0u8; 4096 * 100]);
//!
//! assert!(implements_reader(&mut ledger, &mut subject));
//! assert!(ledger.outcome().passed);
//! ```
//!
//! # Architecture
//!
//! Capability traits and reference implementations live in `iocontract-core`;
//! the verifiers, their configuration and the ledger live in
//! `iocontract-verify`. Both are re-exported here.

pub use iocontract_core::*;
pub use iocontract_verify::*;
