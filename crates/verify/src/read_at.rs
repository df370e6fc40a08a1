//! Random-access reader verification
//!
//! Properties checked for a [`ReadAt`] of declared `length`:
//!
//! 1. Read sequentially from offset 0 through a [`ReadAtView`]: empty reads
//!    are no-ops, `count <= buf.len()`, a short read carries a failure on the
//!    same call, and end of stream arrives after exactly `length` bytes.
//! 2. Reads at offsets `0..min(length, 50)` issued concurrently all succeed.
//!
//! This is stricter than the sequential reader contract: positional calls are
//! independent, so there is no grace call after a short read.

use crate::config::{Capability, ReadAtConfig};
use crate::ledger::Ledger;
use crate::reader::{drain, zero_length_probe, ShortTransferRule};
use crate::util::check_config;
use crate::sweep::sweep;
use crate::view::ReadAtView;
use iocontract_core::ReadAt;

/// Verify a random-access reader with [`ReadAtConfig::default`].
pub fn implements_read_at<L, R>(ledger: &mut L, reader: &R, length: u64) -> bool
where
    L: Ledger + ?Sized,
    R: ReadAt + Sync + ?Sized,
{
    implements_read_at_with(ledger, reader, length, &ReadAtConfig::default())
}

/// Verify a random-access reader with an explicit configuration.
pub fn implements_read_at_with<L, R>(
    ledger: &mut L,
    reader: &R,
    length: u64,
    config: &ReadAtConfig,
) -> bool
where
    L: Ledger + ?Sized,
    R: ReadAt + Sync + ?Sized,
{
    tracing::debug!(
        capability = %Capability::ReadAt,
        buffer_size = config.buffer_size,
        length,
        "Verifying random-access reader"
    );
    if !check_config(ledger, config.validate()) {
        return false;
    }

    let mut view = ReadAtView::new(reader, 0);
    if !(zero_length_probe(ledger, &mut view)
        && drain(
            ledger,
            &mut view,
            config.buffer_size,
            ShortTransferRule::SameCall,
            Some(length),
        ))
    {
        return false;
    }
    tracing::debug!(drained = view.offset(), length, "Sequential view drained");

    let buffer_size = config.buffer_size;
    let passed = sweep(ledger, length, buffer_size, |offset| {
        let mut buf = vec![0u8; buffer_size];
        reader.read_at(&mut buf, offset)
    });
    tracing::debug!(capability = %Capability::ReadAt, passed, "Random-access reader verified");
    passed
}
