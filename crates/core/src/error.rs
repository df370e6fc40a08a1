//! Failure signals reported by stream capabilities
//!
//! Every capability call yields a count plus an optional [`StreamError`].
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.

use std::io;
use thiserror::Error;

/// Failure signal attached to a [`Transfer`](crate::Transfer)
///
/// `EndOfStream` is the distinguished "source exhausted" signal and must never
/// be conflated with the other variants.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StreamError {
    /// No more data is available
    #[error("end of stream")]
    EndOfStream,

    /// The operation timed out (transient; a retry may succeed)
    #[error("timeout")]
    Timeout,

    /// A write accepted fewer bytes than offered
    #[error("short write")]
    ShortWrite,

    /// The object was closed
    #[error("closed")]
    Closed,

    /// Repeated calls moved no data and reported no failure
    #[error("no progress")]
    NoProgress,

    /// Any other I/O failure
    #[error("I/O error ({kind:?}): {message}")]
    Io {
        /// Kind reported by the underlying error
        kind: io::ErrorKind,
        /// Rendered message of the underlying error
        message: String,
    },
}

impl StreamError {
    /// Whether this is the end-of-stream signal
    pub fn is_end_of_stream(&self) -> bool {
        matches!(self, StreamError::EndOfStream)
    }

    /// Create an `Io` error from a kind and message
    pub fn io(kind: io::ErrorKind, message: impl Into<String>) -> Self {
        StreamError::Io {
            kind,
            message: message.into(),
        }
    }
}

impl From<io::Error> for StreamError {
    fn from(e: io::Error) -> Self {
        match e.kind() {
            io::ErrorKind::UnexpectedEof => StreamError::EndOfStream,
            io::ErrorKind::TimedOut => StreamError::Timeout,
            io::ErrorKind::WriteZero => StreamError::ShortWrite,
            kind => StreamError::Io {
                kind,
                message: e.to_string(),
            },
        }
    }
}
