//! Transfer-to-sink verification
//!
//! The subject pushes into a [`FaultySink`] whose first write fails with
//! [`INJECTED_FAULT`]. The first `write_to` must report that fault verbatim
//! with zero bytes; the second must succeed with `0 < count <= buffer_size`,
//! and the count must match what the sink actually accepted.
//!
//! Unlike transfer-from-source, the retry is not required to account for an
//! exact total: `buffer_size` only bounds what the subject may push.

use crate::config::{Capability, WriteToConfig};
use crate::fault::{FaultySink, INJECTED_FAULT};
use crate::ledger::Ledger;
use crate::util::check_config;
use crate::violation::{Check, Violation};
use iocontract_core::WriteTo;

/// Verify a transfer-to-sink implementation with [`WriteToConfig::default`].
pub fn implements_write_to<L, T>(ledger: &mut L, subject: &mut T) -> bool
where
    L: Ledger + ?Sized,
    T: WriteTo + ?Sized,
{
    implements_write_to_with(ledger, subject, &WriteToConfig::default())
}

/// Verify a transfer-to-sink implementation with an explicit configuration.
pub fn implements_write_to_with<L, T>(ledger: &mut L, subject: &mut T, config: &WriteToConfig) -> bool
where
    L: Ledger + ?Sized,
    T: WriteTo + ?Sized,
{
    tracing::debug!(
        capability = %Capability::WriteTo,
        buffer_size = config.buffer_size,
        "Verifying transfer-to-sink"
    );
    if !check_config(ledger, config.validate()) {
        return false;
    }

    let mut sink = FaultySink::with_capacity(config.buffer_size);

    let first = subject.write_to(&mut sink);
    if first.error.as_ref() != Some(&INJECTED_FAULT) || first.count != 0 {
        return ledger.fail(
            Check::FaultPropagation,
            Violation::FaultNotPropagated {
                expected: INJECTED_FAULT,
                observed: first.error,
                count: first.count,
            },
        );
    }
    ledger.pass(Check::FaultPropagation);

    let second = subject.write_to(&mut sink);
    if let Some(error) = second.error {
        return ledger.fail(Check::Recovery, Violation::UnexpectedFailure { error });
    }
    tracing::debug!(count = second.count, accepted = sink.accepted(), "Sink filled after fault");
    if second.count == 0 || second.count > config.buffer_size {
        return ledger.fail(
            Check::Recovery,
            Violation::RecoveryAccountingMismatch {
                expected: config.buffer_size,
                observed: second.count,
            },
        );
    }
    if second.count != sink.accepted() {
        return ledger.fail(
            Check::Recovery,
            Violation::RecoveryAccountingMismatch {
                expected: sink.accepted(),
                observed: second.count,
            },
        );
    }
    ledger.pass(Check::Recovery)
}
