//! Violation Tests
//!
//! Each non-conformant subject must be rejected with the specific violation
//! for the rule it breaks, recorded against the check that caught it.

mod common;

use common::*;
use iocontract_core::{MemBuffer, MemFile, ReadAt, StreamError, Transfer};
use iocontract_verify::*;

// ============================================================================
// Sequential read
// ============================================================================

#[test]
fn test_zero_length_probe_reporting_bytes() {
    init_tracing();
    let mut ledger = RecordingLedger::new();
    let mut reader = PhantomByteReader(MemBuffer::from(vec![0u8; 100]));

    assert!(!implements_reader(&mut ledger, &mut reader));
    assert_eq!(
        first_violation(&ledger),
        (
            Check::ZeroLengthProbe,
            Violation::NegativeOrOverrunCount {
                requested: 0,
                observed: 1,
            }
        )
    );
    // Nothing runs after the first failed check.
    assert_eq!(ledger.entries().len(), 2);
}

#[test]
fn test_zero_length_probe_reporting_failure() {
    let mut ledger = RecordingLedger::new();
    let mut reader = FailingProbeReader(MemBuffer::new());

    assert!(!implements_reader(&mut ledger, &mut reader));
    assert_eq!(
        first_violation(&ledger),
        (
            Check::ZeroLengthProbe,
            Violation::UnexpectedFailure {
                error: StreamError::Timeout
            }
        )
    );
}

#[test]
fn test_short_read_continued_without_failure() {
    init_tracing();
    let mut ledger = RecordingLedger::new();
    let mut reader = TrickleReader {
        remaining: 100,
        chunk: 10,
    };

    assert!(!implements_reader_with(&mut ledger, &mut reader, &ReaderConfig::new(64)));
    assert_eq!(
        first_violation(&ledger),
        (
            Check::ShortTransfer,
            Violation::MissingShortTransferError {
                requested: 64,
                observed: 10,
                next: Some(Transfer::ok(10)),
            }
        )
    );
}

#[test]
fn test_trickle_reader_passes_when_chunk_fills_buffer() {
    let mut ledger = RecordingLedger::new();
    let mut reader = TrickleReader {
        remaining: 100,
        chunk: 64,
    };

    // 64, then 36 followed by (0, end of stream).
    assert!(implements_reader_with(&mut ledger, &mut reader, &ReaderConfig::new(64)));
}

#[test]
fn test_wrong_terminal_signal() {
    let mut ledger = RecordingLedger::new();
    let mut reader = BadTerminalReader {
        inner: MemBuffer::from(vec![0u8; 128]),
        terminal: StreamError::Closed,
    };

    assert!(!implements_reader_with(&mut ledger, &mut reader, &ReaderConfig::new(64)));
    assert_eq!(
        first_violation(&ledger),
        (
            Check::TerminalSignal,
            Violation::WrongTerminalSignal {
                expected: StreamError::EndOfStream,
                observed: StreamError::Closed,
            }
        )
    );
    assert!(ledger.has_passed(Check::TransferBounds));
}

#[test]
fn test_overrun_read_count() {
    struct Overrun;

    impl iocontract_core::SequentialRead for Overrun {
        fn read(&mut self, buf: &mut [u8]) -> Transfer {
            if buf.is_empty() {
                Transfer::ok(0)
            } else {
                Transfer::ok(buf.len() * 2)
            }
        }
    }

    let mut ledger = RecordingLedger::new();
    assert!(!implements_reader_with(&mut ledger, &mut Overrun, &ReaderConfig::new(32)));
    assert_eq!(
        first_violation(&ledger),
        (
            Check::TransferBounds,
            Violation::NegativeOrOverrunCount {
                requested: 32,
                observed: 64,
            }
        )
    );
}

// ============================================================================
// Sequential write
// ============================================================================

#[test]
fn test_half_writer() {
    init_tracing();
    let mut ledger = RecordingLedger::new();
    let mut writer = HalfWriter(MemBuffer::new());

    assert!(!implements_writer_with(&mut ledger, &mut writer, &WriterConfig::new(64)));
    assert_eq!(
        first_violation(&ledger),
        (
            Check::ShortTransfer,
            Violation::MissingShortTransferError {
                requested: 64,
                observed: 32,
                next: None,
            }
        )
    );
}

#[test]
fn test_stalled_writer() {
    let mut ledger = RecordingLedger::new();

    assert!(!implements_writer_with(&mut ledger, &mut StalledWriter, &WriterConfig::new(64)));
    assert_eq!(
        first_violation(&ledger),
        (
            Check::WriteCompletion,
            Violation::NonProgressingWrite {
                offered: 64,
                total: 0,
            }
        )
    );
}

#[test]
fn test_bragging_writer() {
    let mut ledger = RecordingLedger::new();

    assert!(!implements_writer_with(&mut ledger, &mut BraggingWriter, &WriterConfig::new(64)));
    assert_eq!(
        first_violation(&ledger),
        (
            Check::TransferBounds,
            Violation::NegativeOrOverrunCount {
                requested: 64,
                observed: 65,
            }
        )
    );
}

// ============================================================================
// Random access
// ============================================================================

#[test]
fn test_read_at_sweep_runs_past_end() {
    init_tracing();
    // Offsets past 10 cannot supply a full 64-byte read.
    let file = MemFile::with_len(64 + 10);
    let mut ledger = RecordingLedger::new();

    assert!(!implements_read_at_with(&mut ledger, &file, 74, &ReadAtConfig::new(64)));
    let offsets: Vec<u64> = ledger
        .violations()
        .map(|(check, violation)| {
            assert_eq!(check, Check::ConcurrentSweep);
            match violation {
                Violation::ConcurrencyViolation { offset, .. } => *offset,
                other => panic!("unexpected violation: {:?}", other),
            }
        })
        .collect();
    assert_eq!(offsets, (11..50).collect::<Vec<u64>>());
}

#[test]
fn test_read_at_ending_before_declared_length() {
    let file = TruncatedFile {
        file: MemFile::with_len(409_600),
        cutoff: 8192,
    };
    let mut ledger = RecordingLedger::new();

    assert!(!implements_read_at(&mut ledger, &file, 409_600));
    assert_eq!(
        first_violation(&ledger),
        (
            Check::TerminalSignal,
            Violation::LengthMismatch {
                declared: 409_600,
                observed: 8192,
            }
        )
    );
}

#[test]
fn test_read_at_never_ending() {
    let mut ledger = RecordingLedger::new();

    assert!(!implements_read_at_with(&mut ledger, &BottomlessFile, 100, &ReadAtConfig::new(64)));
    assert_eq!(
        first_violation(&ledger),
        (
            Check::TransferBounds,
            Violation::LengthMismatch {
                declared: 100,
                observed: 128,
            }
        )
    );
}

#[test]
fn test_write_at_short_without_failure() {
    let file = HalfWriteFile(MemFile::new());
    let mut ledger = RecordingLedger::new();

    assert!(!implements_write_at_with(&mut ledger, &file, 64, &WriteAtConfig::new(64)));
    assert_eq!(
        first_violation(&ledger),
        (
            Check::ShortTransfer,
            Violation::MissingShortTransferError {
                requested: 64,
                observed: 32,
                next: None,
            }
        )
    );
    assert!(!ledger.has_passed(Check::ConcurrentSweep));
}

#[test]
fn test_write_at_stalled() {
    let mut ledger = RecordingLedger::new();

    assert!(!implements_write_at_with(&mut ledger, &StalledFile, 64, &WriteAtConfig::new(64)));
    assert_eq!(
        first_violation(&ledger),
        (
            Check::WriteCompletion,
            Violation::NonProgressingWrite {
                offered: 64,
                total: 0,
            }
        )
    );
}

#[test]
fn test_read_at_panicking_subject() {
    struct Fragile(MemFile);

    impl ReadAt for Fragile {
        fn read_at(&self, buf: &mut [u8], offset: u64) -> Transfer {
            if offset == 7 && !buf.is_empty() {
                panic!("offset seven is cursed");
            }
            self.0.read_at(buf, offset)
        }
    }

    let file = Fragile(MemFile::with_len(4096 * 2));
    let mut ledger = RecordingLedger::new();

    assert!(!implements_read_at(&mut ledger, &file, 4096 * 2));
    assert_eq!(
        first_violation(&ledger),
        (
            Check::ConcurrentSweep,
            Violation::ConcurrencyViolation {
                offset: 7,
                cause: SweepFailure::Panicked("offset seven is cursed".to_string()),
            }
        )
    );
    assert_eq!(ledger.violations().count(), 1);
}

// ============================================================================
// Bulk transfers
// ============================================================================

#[test]
fn test_read_from_rewriting_fault() {
    init_tracing();
    let mut ledger = RecordingLedger::new();
    let mut subject = RewritingReadFrom(MemBuffer::new());

    assert!(!implements_read_from_with(&mut ledger, &mut subject, &ReadFromConfig::new(1024)));
    let (check, violation) = first_violation(&ledger);
    assert_eq!(check, Check::FaultPropagation);
    match violation {
        Violation::FaultNotPropagated {
            expected,
            observed: Some(StreamError::Io { .. }),
            count: 0,
        } => assert_eq!(expected, INJECTED_FAULT),
        other => panic!("unexpected violation: {:?}", other),
    }
}

#[test]
fn test_read_from_stopping_early() {
    let mut ledger = RecordingLedger::new();
    let mut subject = ImpatientReadFrom(MemBuffer::new());

    assert!(!implements_read_from_with(&mut ledger, &mut subject, &ReadFromConfig::new(1024)));
    assert!(ledger.has_passed(Check::FaultPropagation));
    assert_eq!(
        first_violation(&ledger),
        (
            Check::Recovery,
            Violation::RecoveryAccountingMismatch {
                expected: 1024,
                observed: 512,
            }
        )
    );
}

#[test]
fn test_read_from_double_counting() {
    let mut ledger = RecordingLedger::new();
    let mut subject = DoubleCountingReadFrom(MemBuffer::new());

    assert!(!implements_read_from_with(&mut ledger, &mut subject, &ReadFromConfig::new(1000)));
    assert_eq!(
        first_violation(&ledger),
        (
            Check::Recovery,
            Violation::RecoveryAccountingMismatch {
                expected: 1000,
                observed: 2000,
            }
        )
    );
}

#[test]
fn test_write_to_claiming_progress_on_fault() {
    let mut ledger = RecordingLedger::new();
    let mut subject = OptimisticWriteTo(MemBuffer::from(vec![0u8; 100]));

    assert!(!implements_write_to(&mut ledger, &mut subject));
    assert_eq!(
        first_violation(&ledger),
        (
            Check::FaultPropagation,
            Violation::FaultNotPropagated {
                expected: StreamError::Timeout,
                observed: Some(StreamError::Timeout),
                count: 100,
            }
        )
    );
}

#[test]
fn test_write_to_not_recovering() {
    let mut ledger = RecordingLedger::new();
    let mut subject = BrittleWriteTo {
        inner: MemBuffer::from(vec![0u8; 100]),
        broken: false,
    };

    assert!(!implements_write_to(&mut ledger, &mut subject));
    assert!(ledger.has_passed(Check::FaultPropagation));
    assert_eq!(
        first_violation(&ledger),
        (
            Check::Recovery,
            Violation::UnexpectedFailure {
                error: StreamError::Closed
            }
        )
    );
}

#[test]
fn test_write_to_with_nothing_to_push() {
    let mut ledger = RecordingLedger::new();
    let mut subject = MemBuffer::new();

    // An empty subject cannot surface the sink's fault.
    assert!(!implements_write_to(&mut ledger, &mut subject));
    assert_eq!(
        first_violation(&ledger),
        (
            Check::FaultPropagation,
            Violation::FaultNotPropagated {
                expected: StreamError::Timeout,
                observed: None,
                count: 0,
            }
        )
    );
}

// ============================================================================
// Configuration
// ============================================================================

#[test]
fn test_zero_buffer_size_is_rejected_by_every_verifier() {
    let file = MemFile::with_len(16);
    let mut ledger = RecordingLedger::new();

    assert!(!implements_reader_with(&mut ledger, &mut MemBuffer::new(), &ReaderConfig::new(0)));
    assert!(!implements_writer_with(&mut ledger, &mut MemBuffer::new(), &WriterConfig::new(0)));
    assert!(!implements_read_at_with(&mut ledger, &file, 16, &ReadAtConfig::new(0)));
    assert!(!implements_write_at_with(&mut ledger, &file, 16, &WriteAtConfig::new(0)));
    assert!(!implements_read_from_with(&mut ledger, &mut MemBuffer::new(), &ReadFromConfig::new(0)));
    assert!(!implements_write_to_with(&mut ledger, &mut MemBuffer::new(), &WriteToConfig::new(0)));

    let capabilities: Vec<Capability> = ledger
        .violations()
        .map(|(check, violation)| {
            assert_eq!(check, Check::Configuration);
            match violation {
                Violation::InvalidConfiguration(ConfigError::ZeroBufferSize { capability }) => {
                    *capability
                }
                other => panic!("unexpected violation: {:?}", other),
            }
        })
        .collect();
    assert_eq!(
        capabilities,
        vec![
            Capability::SequentialRead,
            Capability::SequentialWrite,
            Capability::ReadAt,
            Capability::WriteAt,
            Capability::ReadFrom,
            Capability::WriteTo,
        ]
    );
    // The subject was never touched.
    assert_eq!(file.snapshot(), vec![0u8; 16]);
}

#[test]
fn test_violation_messages_name_the_numbers() {
    let v = Violation::RecoveryAccountingMismatch {
        expected: 1024,
        observed: 512,
    };
    assert_eq!(v.to_string(), "recovery accounted 512 bytes, expected 1024");
}
