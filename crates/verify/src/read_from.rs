//! Transfer-from-source verification
//!
//! The subject pulls from a [`FaultySource`] whose first read fails with
//! [`INJECTED_FAULT`]. The first `read_from` must report that fault verbatim
//! with zero bytes; the second must succeed, and both counts together must
//! account for the whole payload exactly once.

use crate::config::{Capability, ReadFromConfig};
use crate::fault::{FaultySource, INJECTED_FAULT};
use crate::ledger::Ledger;
use crate::util::check_config;
use crate::violation::{Check, Violation};
use iocontract_core::ReadFrom;

/// Verify a transfer-from-source implementation with [`ReadFromConfig::default`].
pub fn implements_read_from<L, T>(ledger: &mut L, subject: &mut T) -> bool
where
    L: Ledger + ?Sized,
    T: ReadFrom + ?Sized,
{
    implements_read_from_with(ledger, subject, &ReadFromConfig::default())
}

/// Verify a transfer-from-source implementation with an explicit configuration.
pub fn implements_read_from_with<L, T>(
    ledger: &mut L,
    subject: &mut T,
    config: &ReadFromConfig,
) -> bool
where
    L: Ledger + ?Sized,
    T: ReadFrom + ?Sized,
{
    tracing::debug!(
        capability = %Capability::ReadFrom,
        buffer_size = config.buffer_size,
        "Verifying transfer-from-source"
    );
    if !check_config(ledger, config.validate()) {
        return false;
    }

    let mut source = FaultySource::with_payload(config.buffer_size);

    let first = subject.read_from(&mut source);
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

    let second = subject.read_from(&mut source);
    if let Some(error) = second.error {
        return ledger.fail(Check::Recovery, Violation::UnexpectedFailure { error });
    }
    let total = first.count + second.count;
    tracing::debug!(total, source_calls = source.calls(), "Source drained after fault");
    if total != config.buffer_size {
        return ledger.fail(
            Check::Recovery,
            Violation::RecoveryAccountingMismatch {
                expected: config.buffer_size,
                observed: total,
            },
        );
    }
    ledger.pass(Check::Recovery)
}
