//! Assertion ledger
//!
//! Verifiers report each check to a [`Ledger`] as they go. The ledger decides
//! how results are surfaced; [`RecordingLedger`] keeps every entry in memory
//! and logs through `tracing`.

use crate::violation::{Check, Violation};

/// Receives the outcome of every individual check
pub trait Ledger {
    /// Record one check
    ///
    /// Returns whether the check passed, so callers can short-circuit.
    fn record(&mut self, check: Check, outcome: Result<(), Violation>) -> bool;

    /// Record a passing check
    fn pass(&mut self, check: Check) -> bool {
        self.record(check, Ok(()))
    }

    /// Record a failing check
    fn fail(&mut self, check: Check, violation: Violation) -> bool {
        self.record(check, Err(violation))
    }
}

impl<L: Ledger + ?Sized> Ledger for &mut L {
    fn record(&mut self, check: Check, outcome: Result<(), Violation>) -> bool {
        (**self).record(check, outcome)
    }
}

/// One recorded check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerEntry {
    /// Which check ran
    pub check: Check,
    /// Violation, if the check failed
    pub violation: Option<Violation>,
}

impl LedgerEntry {
    /// Whether the check passed
    pub fn passed(&self) -> bool {
        self.violation.is_none()
    }
}

/// Summary of a verification run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationOutcome {
    /// Every recorded check passed
    pub passed: bool,
    /// Number of checks recorded
    pub checks: usize,
    /// Number of failed checks
    pub failures: usize,
    /// First violated check, with its violation
    pub first_violation: Option<(Check, Violation)>,
}

/// In-memory ledger
///
/// Logs passing checks at `trace` and violations at `warn`.
#[derive(Debug, Default, Clone)]
pub struct RecordingLedger {
    entries: Vec<LedgerEntry>,
}

impl RecordingLedger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// All entries in recording order
    pub fn entries(&self) -> &[LedgerEntry] {
        &self.entries
    }

    /// All recorded violations in order
    pub fn violations(&self) -> impl Iterator<Item = (Check, &Violation)> + '_ {
        self.entries
            .iter()
            .filter_map(|e| e.violation.as_ref().map(|v| (e.check, v)))
    }

    /// Whether `check` was recorded as passing at least once
    pub fn has_passed(&self, check: Check) -> bool {
        self.entries.iter().any(|e| e.check == check && e.passed())
    }

    /// Summarise the run
    pub fn outcome(&self) -> VerificationOutcome {
        let failures = self.entries.iter().filter(|e| !e.passed()).count();
        VerificationOutcome {
            passed: failures == 0,
            checks: self.entries.len(),
            failures,
            first_violation: self.violations().next().map(|(c, v)| (c, v.clone())),
        }
    }

    /// Forget every entry
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl Ledger for RecordingLedger {
    fn record(&mut self, check: Check, outcome: Result<(), Violation>) -> bool {
        let violation = match outcome {
            Ok(()) => {
                tracing::trace!(check = check.as_str(), "Check passed");
                None
            }
            Err(v) => {
                tracing::warn!(check = check.as_str(), violation = %v, "Contract violation");
                Some(v)
            }
        };
        let passed = violation.is_none();
        self.entries.push(LedgerEntry { check, violation });
        passed
    }
}
