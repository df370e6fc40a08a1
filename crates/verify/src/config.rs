//! Verification configuration.
//!
//! Each capability has its own configuration carrying a single tunable: the
//! probe buffer size in bytes. Defaults are process-wide constants.

use std::fmt;

/// Default probe size for the sequential reader verifier.
pub const DEFAULT_READER_BUFFER_SIZE: usize = 4096;

/// Default payload size for the sequential writer verifier.
pub const DEFAULT_WRITER_BUFFER_SIZE: usize = 4096 * 100;

/// Default probe size for the random-access reader verifier.
pub const DEFAULT_READ_AT_BUFFER_SIZE: usize = 4096;

/// Default payload size for the random-access writer verifier.
pub const DEFAULT_WRITE_AT_BUFFER_SIZE: usize = 4096;

/// Default payload size for the transfer-from-source verifier.
pub const DEFAULT_READ_FROM_BUFFER_SIZE: usize = 4096 * 100;

/// Default sink size for the transfer-to-sink verifier.
pub const DEFAULT_WRITE_TO_BUFFER_SIZE: usize = 4096;

/// Probe size used by the `for_testing()` configurations.
const TESTING_BUFFER_SIZE: usize = 64;

/// Stream capability under verification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    /// Cursor-based reading
    SequentialRead,
    /// Cursor-based writing
    SequentialWrite,
    /// Positional reading
    ReadAt,
    /// Positional writing
    WriteAt,
    /// Bulk transfer from a source
    ReadFrom,
    /// Bulk transfer to a sink
    WriteTo,
}

impl Capability {
    /// Stable name used in logs and diagnostics.
    pub fn as_str(&self) -> &'static str {
        match self {
            Capability::SequentialRead => "sequential_read",
            Capability::SequentialWrite => "sequential_write",
            Capability::ReadAt => "read_at",
            Capability::WriteAt => "write_at",
            Capability::ReadFrom => "read_from",
            Capability::WriteTo => "write_to",
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Configuration errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A zero-sized probe can never drain or fill anything.
    #[error("{capability} buffer size must be at least 1 byte")]
    ZeroBufferSize {
        /// Capability whose configuration was rejected
        capability: Capability,
    },
}

macro_rules! probe_config {
    ($(#[$meta:meta])* $name:ident, $capability:expr, $default:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub struct $name {
            /// Probe buffer size in bytes.
            pub buffer_size: usize,
        }

        impl Default for $name {
            fn default() -> Self {
                $name {
                    buffer_size: $default,
                }
            }
        }

        impl $name {
            /// Create a configuration with an explicit buffer size.
            pub fn new(buffer_size: usize) -> Self {
                $name { buffer_size }
            }

            /// Set buffer size (builder pattern).
            pub fn with_buffer_size(mut self, buffer_size: usize) -> Self {
                self.buffer_size = buffer_size;
                self
            }

            /// Capability this configuration applies to.
            pub fn capability(&self) -> Capability {
                $capability
            }

            /// Validate configuration.
            pub fn validate(&self) -> Result<(), ConfigError> {
                if self.buffer_size == 0 {
                    return Err(ConfigError::ZeroBufferSize {
                        capability: $capability,
                    });
                }
                Ok(())
            }

            /// Create a configuration with a small buffer for fast test suites.
            pub fn for_testing() -> Self {
                $name {
                    buffer_size: TESTING_BUFFER_SIZE,
                }
            }
        }
    };
}

probe_config!(
    /// Sequential reader verification (default: 4096 bytes).
    ReaderConfig,
    Capability::SequentialRead,
    DEFAULT_READER_BUFFER_SIZE
);

probe_config!(
    /// Sequential writer verification (default: 409600 bytes).
    ///
    /// The buffer size is the payload the writer must fully accept.
    WriterConfig,
    Capability::SequentialWrite,
    DEFAULT_WRITER_BUFFER_SIZE
);

probe_config!(
    /// Random-access reader verification (default: 4096 bytes).
    ReadAtConfig,
    Capability::ReadAt,
    DEFAULT_READ_AT_BUFFER_SIZE
);

probe_config!(
    /// Random-access writer verification (default: 4096 bytes).
    WriteAtConfig,
    Capability::WriteAt,
    DEFAULT_WRITE_AT_BUFFER_SIZE
);

probe_config!(
    /// Transfer-from-source verification (default: 409600 bytes).
    ///
    /// The buffer size is the payload held by the injected source.
    ReadFromConfig,
    Capability::ReadFrom,
    DEFAULT_READ_FROM_BUFFER_SIZE
);

probe_config!(
    /// Transfer-to-sink verification (default: 4096 bytes).
    ///
    /// The buffer size bounds what the subject may push after recovering.
    WriteToConfig,
    Capability::WriteTo,
    DEFAULT_WRITE_TO_BUFFER_SIZE
);
