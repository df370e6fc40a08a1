//! Sequential writer verification
//!
//! Properties checked for a [`SequentialWrite`]:
//!
//! 1. `count <= buf.len()` on every call.
//! 2. Every call makes progress while input remains.
//! 3. A short write carries a failure on the same call.
//! 4. The whole payload is accepted without any failure.

use crate::config::{Capability, WriterConfig};
use crate::ledger::Ledger;
use crate::util::{check_config, payload};
use crate::violation::{Check, Violation};
use iocontract_core::SequentialWrite;

/// Verify a sequential writer with [`WriterConfig::default`].
pub fn implements_writer<L, W>(ledger: &mut L, writer: &mut W) -> bool
where
    L: Ledger + ?Sized,
    W: SequentialWrite + ?Sized,
{
    implements_writer_with(ledger, writer, &WriterConfig::default())
}

/// Verify a sequential writer with an explicit configuration.
pub fn implements_writer_with<L, W>(ledger: &mut L, writer: &mut W, config: &WriterConfig) -> bool
where
    L: Ledger + ?Sized,
    W: SequentialWrite + ?Sized,
{
    tracing::debug!(
        capability = %Capability::SequentialWrite,
        buffer_size = config.buffer_size,
        "Verifying writer"
    );
    let passed = check_config(ledger, config.validate()) && fill(ledger, writer, config.buffer_size);
    tracing::debug!(capability = %Capability::SequentialWrite, passed, "Writer verified");
    passed
}

/// Offer the unwritten suffix of a `size`-byte payload until all of it is accepted.
pub(crate) fn fill<L, W>(ledger: &mut L, writer: &mut W, size: usize) -> bool
where
    L: Ledger + ?Sized,
    W: SequentialWrite + ?Sized,
{
    let payload = payload(size);
    let mut total = 0;
    let mut calls = 0u64;

    while total < size {
        let chunk = &payload[total..];
        let t = writer.write(chunk);
        calls += 1;

        if t.count > chunk.len() {
            return ledger.fail(
                Check::TransferBounds,
                Violation::NegativeOrOverrunCount {
                    requested: chunk.len(),
                    observed: t.count,
                },
            );
        }
        match t.error {
            Some(error) => {
                tracing::debug!(total, calls, accepted = t.count, "Writer failed mid-payload");
                return ledger.fail(Check::WriteCompletion, Violation::UnexpectedFailure { error });
            }
            None if t.count == 0 => {
                return ledger.fail(
                    Check::WriteCompletion,
                    Violation::NonProgressingWrite {
                        offered: chunk.len(),
                        total,
                    },
                );
            }
            None if t.is_short(chunk.len()) => {
                return ledger.fail(
                    Check::ShortTransfer,
                    Violation::MissingShortTransferError {
                        requested: chunk.len(),
                        observed: t.count,
                        next: None,
                    },
                );
            }
            None => total += t.count,
        }
    }

    tracing::debug!(total, calls, "Writer accepted payload");
    ledger.pass(Check::TransferBounds) && ledger.pass(Check::WriteCompletion)
}
