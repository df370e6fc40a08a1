//! Contract violations and the checks that detect them
//!
//! Every violation carries the expected and observed values so a failure can
//! be diagnosed without re-running the verifier.

use crate::config::ConfigError;
use iocontract_core::{StreamError, Transfer};
use std::fmt;
use thiserror::Error;

/// Individual check performed by a verifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Check {
    /// Configuration accepted
    Configuration,
    /// An empty request transfers nothing and does not fail
    ZeroLengthProbe,
    /// Every call reported `count <= requested`
    TransferBounds,
    /// A short transfer was accompanied by a failure
    ShortTransfer,
    /// The draining loop ended with exactly end of stream
    TerminalSignal,
    /// Every write call made progress and the payload was fully accepted
    WriteCompletion,
    /// Concurrent calls at disjoint offsets all succeeded
    ConcurrentSweep,
    /// An injected fault was reported verbatim with zero progress
    FaultPropagation,
    /// The retry after a fault succeeded and accounted every byte
    Recovery,
}

impl Check {
    /// Stable name used in logs and diagnostics
    pub fn as_str(&self) -> &'static str {
        match self {
            Check::Configuration => "configuration",
            Check::ZeroLengthProbe => "zero_length_probe",
            Check::TransferBounds => "transfer_bounds",
            Check::ShortTransfer => "short_transfer",
            Check::TerminalSignal => "terminal_signal",
            Check::WriteCompletion => "write_completion",
            Check::ConcurrentSweep => "concurrent_sweep",
            Check::FaultPropagation => "fault_propagation",
            Check::Recovery => "recovery",
        }
    }
}

impl fmt::Display for Check {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why a concurrent probe task failed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SweepFailure {
    /// The call returned a failure or an unexpected count
    Failed {
        /// Bytes the task requested
        requested: usize,
        /// What the call returned
        observed: Transfer,
    },
    /// The call panicked
    Panicked(String),
}

impl fmt::Display for SweepFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SweepFailure::Failed { requested, observed } => match &observed.error {
                Some(e) => write!(
                    f,
                    "transferred {}/{} bytes and failed with `{}`",
                    observed.count, requested, e
                ),
                None => write!(
                    f,
                    "transferred {}/{} bytes without a failure",
                    observed.count, requested
                ),
            },
            SweepFailure::Panicked(msg) => write!(f, "task panicked: {}", msg),
        }
    }
}

/// Contract violation observed by a verifier
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Violation {
    /// A call reported a count outside `[0, requested]`
    #[error("transferred {observed} bytes, but only {requested} were requested")]
    NegativeOrOverrunCount {
        /// Bytes requested
        requested: usize,
        /// Bytes reported
        observed: usize,
    },

    /// A short transfer came without the required failure
    ///
    /// `next` holds the grace call's outcome when the contract allowed one.
    #[error(
        "short transfer of {observed}/{requested} bytes without a failure (next call: {next:?})"
    )]
    MissingShortTransferError {
        /// Bytes requested
        requested: usize,
        /// Bytes reported
        observed: usize,
        /// Outcome of the immediately following call, if one was made
        next: Option<Transfer>,
    },

    /// The draining loop ended with the wrong failure
    #[error("expected terminal signal `{expected}`, observed `{observed}`")]
    WrongTerminalSignal {
        /// Signal the contract requires
        expected: StreamError,
        /// Signal actually reported
        observed: StreamError,
    },

    /// A random-access object read sequentially disagrees with its declared length
    ///
    /// Raised when end of stream arrives before `declared` bytes, or when
    /// reading runs past `declared` without any end of stream.
    #[error("declared length is {declared} bytes, but {observed} were read")]
    LengthMismatch {
        /// Length the caller declared
        declared: u64,
        /// Bytes read when the mismatch was detected
        observed: u64,
    },

    /// A write call accepted nothing and reported nothing
    #[error("write of {offered} bytes made no progress after {total} bytes")]
    NonProgressingWrite {
        /// Bytes offered in the stalled call
        offered: usize,
        /// Bytes accepted before it
        total: usize,
    },

    /// A concurrent probe task failed
    #[error("concurrent access at offset {offset} failed: {cause}")]
    ConcurrencyViolation {
        /// Offset probed by the failing task
        offset: u64,
        /// What went wrong
        cause: SweepFailure,
    },

    /// An injected fault was swallowed, altered or reported with progress
    #[error("expected fault `{expected}` with 0 bytes, observed {observed:?} with {count} bytes")]
    FaultNotPropagated {
        /// Fault injected
        expected: StreamError,
        /// Failure reported by the subject
        observed: Option<StreamError>,
        /// Bytes reported by the subject
        count: usize,
    },

    /// Bytes transferred after recovery do not add up
    #[error("recovery accounted {observed} bytes, expected {expected}")]
    RecoveryAccountingMismatch {
        /// Bytes the contract requires (or the upper bound for sinks)
        expected: usize,
        /// Bytes reported
        observed: usize,
    },

    /// A call failed where the contract requires success
    #[error("unexpected failure: {error}")]
    UnexpectedFailure {
        /// Failure reported
        error: StreamError,
    },

    /// The verifier was handed an unusable configuration
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(#[from] ConfigError),
}
