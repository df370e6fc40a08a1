//! Helpers shared by every verifier

use crate::ledger::Ledger;
use crate::violation::{Check, Violation};

/// Record configuration validity.
pub(crate) fn check_config<L, E>(ledger: &mut L, result: Result<(), E>) -> bool
where
    L: Ledger + ?Sized,
    E: Into<Violation>,
{
    ledger.record(Check::Configuration, result.map_err(Into::into))
}

/// Deterministic, non-constant payload of `len` bytes
pub(crate) fn payload(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i % 251) as u8).collect()
}
