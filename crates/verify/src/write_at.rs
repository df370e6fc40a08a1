//! Random-access writer verification
//!
//! Properties checked for a [`WriteAt`] of declared `length`:
//!
//! 1. Written sequentially from offset 0 through a [`WriteAtView`], it
//!    satisfies the sequential writer contract.
//! 2. Single-byte writes at offsets `0..min(length, 50)` issued concurrently
//!    all succeed.

use crate::config::{Capability, WriteAtConfig};
use crate::ledger::Ledger;
use crate::sweep::sweep;
use crate::util::check_config;
use crate::view::WriteAtView;
use crate::writer::fill;
use iocontract_core::WriteAt;

/// Verify a random-access writer with [`WriteAtConfig::default`].
pub fn implements_write_at<L, W>(ledger: &mut L, writer: &W, length: u64) -> bool
where
    L: Ledger + ?Sized,
    W: WriteAt + Sync + ?Sized,
{
    implements_write_at_with(ledger, writer, length, &WriteAtConfig::default())
}

/// Verify a random-access writer with an explicit configuration.
pub fn implements_write_at_with<L, W>(
    ledger: &mut L,
    writer: &W,
    length: u64,
    config: &WriteAtConfig,
) -> bool
where
    L: Ledger + ?Sized,
    W: WriteAt + Sync + ?Sized,
{
    tracing::debug!(
        capability = %Capability::WriteAt,
        buffer_size = config.buffer_size,
        length,
        "Verifying random-access writer"
    );
    if !check_config(ledger, config.validate()) {
        return false;
    }

    let mut view = WriteAtView::new(writer, 0);
    if !fill(ledger, &mut view, config.buffer_size) {
        return false;
    }

    let passed = sweep(ledger, length, 1, |offset| writer.write_at(&[offset as u8], offset));
    tracing::debug!(capability = %Capability::WriteAt, passed, "Random-access writer verified");
    passed
}
