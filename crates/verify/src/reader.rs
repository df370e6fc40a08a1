//! Sequential reader verification
//!
//! Properties checked for a [`SequentialRead`]:
//!
//! 1. `read(&mut [])` returns `(0, None)` before any other call.
//! 2. Every call reports `count <= buf.len()`.
//! 3. A short read without a failure is followed by `(0, Some(_))`.
//! 4. Draining ends with exactly [`StreamError::EndOfStream`].
//!
//! The subject must be finite: the draining loop runs until the subject
//! reports a failure. Random-access objects come with a declared length,
//! which both ends the loop and must match where end of stream arrives.

use crate::config::{Capability, ReaderConfig};
use crate::ledger::Ledger;
use crate::util::check_config;
use crate::violation::{Check, Violation};
use iocontract_core::{SequentialRead, StreamError};

/// How a short transfer must be signalled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ShortTransferRule {
    /// The failure accompanies the short call itself
    SameCall,
    /// The failure accompanies the short call or the immediately following one
    SameOrNextCall,
}

/// Verify a sequential reader with [`ReaderConfig::default`].
pub fn implements_reader<L, R>(ledger: &mut L, reader: &mut R) -> bool
where
    L: Ledger + ?Sized,
    R: SequentialRead + ?Sized,
{
    implements_reader_with(ledger, reader, &ReaderConfig::default())
}

/// Verify a sequential reader with an explicit configuration.
pub fn implements_reader_with<L, R>(ledger: &mut L, reader: &mut R, config: &ReaderConfig) -> bool
where
    L: Ledger + ?Sized,
    R: SequentialRead + ?Sized,
{
    tracing::debug!(
        capability = %Capability::SequentialRead,
        buffer_size = config.buffer_size,
        "Verifying reader"
    );
    let passed = check_config(ledger, config.validate())
        && zero_length_probe(ledger, reader)
        && drain(
            ledger,
            reader,
            config.buffer_size,
            ShortTransferRule::SameOrNextCall,
            None,
        );
    tracing::debug!(capability = %Capability::SequentialRead, passed, "Reader verified");
    passed
}

/// An empty request must transfer nothing and report no failure.
pub(crate) fn zero_length_probe<L, R>(ledger: &mut L, reader: &mut R) -> bool
where
    L: Ledger + ?Sized,
    R: SequentialRead + ?Sized,
{
    let t = reader.read(&mut []);
    if t.count != 0 {
        return ledger.fail(
            Check::ZeroLengthProbe,
            Violation::NegativeOrOverrunCount {
                requested: 0,
                observed: t.count,
            },
        );
    }
    if let Some(error) = t.error {
        return ledger.fail(Check::ZeroLengthProbe, Violation::UnexpectedFailure { error });
    }
    ledger.pass(Check::ZeroLengthProbe)
}

/// Read `buffer_size` chunks until the reader fails, checking each call.
///
/// With a `declared` length, reading past it fails immediately and end of
/// stream must arrive exactly at it.
pub(crate) fn drain<L, R>(
    ledger: &mut L,
    reader: &mut R,
    buffer_size: usize,
    rule: ShortTransferRule,
    declared: Option<u64>,
) -> bool
where
    L: Ledger + ?Sized,
    R: SequentialRead + ?Sized,
{
    let mut buf = vec![0u8; buffer_size];
    let mut total: u64 = 0;
    let mut calls: u64 = 0;

    let terminal = loop {
        let t = reader.read(&mut buf);
        calls += 1;
        if t.count > buffer_size {
            return ledger.fail(
                Check::TransferBounds,
                Violation::NegativeOrOverrunCount {
                    requested: buffer_size,
                    observed: t.count,
                },
            );
        }
        total += t.count as u64;
        if let Some(declared) = declared.filter(|&declared| total > declared) {
            return ledger.fail(
                Check::TransferBounds,
                Violation::LengthMismatch {
                    declared,
                    observed: total,
                },
            );
        }

        if let Some(error) = t.error {
            break error;
        }
        if !t.is_short(buffer_size) {
            continue;
        }

        // Short transfer with no failure attached.
        let next = match rule {
            ShortTransferRule::SameCall => None,
            ShortTransferRule::SameOrNextCall => {
                let next = reader.read(&mut buf);
                if next.count == 0 && next.is_err() {
                    tracing::debug!(total, calls, "Short read followed by failure");
                    return ledger.pass(Check::TransferBounds) && ledger.pass(Check::ShortTransfer);
                }
                Some(next)
            }
        };
        return ledger.fail(
            Check::ShortTransfer,
            Violation::MissingShortTransferError {
                requested: buffer_size,
                observed: t.count,
                next,
            },
        );
    };

    tracing::debug!(total, calls, terminal = %terminal, "Reader drained");
    ledger.pass(Check::TransferBounds);
    if !terminal.is_end_of_stream() {
        return ledger.fail(
            Check::TerminalSignal,
            Violation::WrongTerminalSignal {
                expected: StreamError::EndOfStream,
                observed: terminal,
            },
        );
    }
    match declared {
        Some(declared) if total < declared => ledger.fail(
            Check::TerminalSignal,
            Violation::LengthMismatch {
                declared,
                observed: total,
            },
        ),
        _ => ledger.pass(Check::TerminalSignal),
    }
}
