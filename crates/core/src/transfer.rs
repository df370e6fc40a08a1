//! Per-call transfer outcome

use crate::error::StreamError;

/// Outcome of a single capability call
///
/// A call reports how many bytes it actually moved and, optionally, why it
/// stopped. Both may be set at once: a reader can deliver its final bytes
/// together with [`StreamError::EndOfStream`].
///
/// Contract shared by every capability: `count <= requested`, and
/// `count < requested` implies a failure on this call (or, for sequential
/// readers only, on the next one).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Transfer {
    /// Bytes actually transferred
    pub count: usize,
    /// Failure signal, if any
    pub error: Option<StreamError>,
}

impl Transfer {
    /// A call that moved `count` bytes and did not fail
    pub fn ok(count: usize) -> Self {
        Transfer { count, error: None }
    }

    /// A call that moved `count` bytes and then failed with `error`
    pub fn failed(count: usize, error: StreamError) -> Self {
        Transfer {
            count,
            error: Some(error),
        }
    }

    /// The end-of-stream outcome: nothing moved, source exhausted
    pub fn end_of_stream() -> Self {
        Transfer::failed(0, StreamError::EndOfStream)
    }

    /// Whether a failure accompanies this call
    pub fn is_err(&self) -> bool {
        self.error.is_some()
    }

    /// Whether this call moved fewer than `requested` bytes
    pub fn is_short(&self, requested: usize) -> bool {
        self.count < requested
    }

    /// Whether this call ended at end of stream
    pub fn is_end_of_stream(&self) -> bool {
        matches!(self.error, Some(StreamError::EndOfStream))
    }
}
