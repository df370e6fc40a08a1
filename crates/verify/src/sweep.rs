//! Concurrent access sweep for random-access capabilities
//!
//! One scoped thread per offset in `0..min(length, MAX_SWEEP_TASKS)`. The
//! threads are released together by a barrier, each makes exactly one call
//! with its own buffer, and every thread is joined before outcomes are
//! recorded. Nothing here serializes the calls under test.

use crate::ledger::Ledger;
use crate::violation::{Check, SweepFailure, Violation};
use iocontract_core::Transfer;
use std::any::Any;
use std::sync::Barrier;
use std::thread;

/// Upper bound on concurrent probe tasks.
pub const MAX_SWEEP_TASKS: u64 = 50;

/// Run `probe` once per offset concurrently; each call must move `expected` bytes.
///
/// Every failing task is recorded; the lowest failing offset is recorded first.
pub(crate) fn sweep<L, F>(ledger: &mut L, length: u64, expected: usize, probe: F) -> bool
where
    L: Ledger + ?Sized,
    F: Fn(u64) -> Transfer + Sync,
{
    let tasks = length.min(MAX_SWEEP_TASKS);
    let barrier = Barrier::new(tasks as usize);

    let results: Vec<(u64, thread::Result<Transfer>)> = thread::scope(|s| {
        let handles: Vec<_> = (0..tasks)
            .map(|offset| {
                let barrier = &barrier;
                let probe = &probe;
                let handle = s.spawn(move || {
                    barrier.wait();
                    probe(offset)
                });
                (offset, handle)
            })
            .collect();
        handles
            .into_iter()
            .map(|(offset, handle)| (offset, handle.join()))
            .collect()
    });

    let mut failures = 0usize;
    for (offset, result) in results {
        let cause = match result {
            Ok(t) if t.error.is_none() && t.count == expected => continue,
            Ok(observed) => SweepFailure::Failed {
                requested: expected,
                observed,
            },
            Err(panic) => SweepFailure::Panicked(panic_message(panic.as_ref())),
        };
        failures += 1;
        ledger.fail(
            Check::ConcurrentSweep,
            Violation::ConcurrencyViolation { offset, cause },
        );
    }

    tracing::debug!(tasks, failures, "Concurrent sweep finished");
    failures == 0 && ledger.pass(Check::ConcurrentSweep)
}

fn panic_message(panic: &(dyn Any + Send)) -> String {
    if let Some(s) = panic.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else {
        "non-string panic payload".to_string()
    }
}
