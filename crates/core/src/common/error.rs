//! Error definitions.
//!
//! Every fallible operation in the simulator reports a [`VmError`]. The variants split into:
//! 1. **Fatal I/O:** backing-store reads that cannot deliver a full page.
//! 2. **Invariant violations:** frame or offset out of range, inconsistent tables.
//! 3. **Input errors:** malformed or oversized addresses in the trace.
//! 4. **Configuration errors:** invalid geometry or unreadable config files.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for simulator operations.
pub type Result<T> = std::result::Result<T, VmError>;

/// Simulator error types.
#[derive(Error, Debug)]
pub enum VmError {
    /// The backing store could not deliver a full page (seek failure, short read, I/O error).
    #[error("backing store read failed for page {page}: {source}")]
    BackingStore {
        /// Page being read.
        page: usize,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// A frame number or offset outside the declared bounds was used.
    #[error("invalid frame access: frame {frame}, offset {offset}")]
    InvalidFrameAccess {
        /// Frame number requested.
        frame: usize,
        /// Byte offset requested.
        offset: usize,
    },

    /// A logical address does not fit the configured address width.
    #[error("logical address {addr} does not fit in {bits} bits")]
    AddressOutOfRange {
        /// Offending address.
        addr: u64,
        /// Configured address width.
        bits: u32,
    },

    /// An address line in the trace could not be parsed.
    #[error("malformed address on line {line}: {text:?}")]
    MalformedAddress {
        /// One-based line number.
        line: usize,
        /// Raw text of the line.
        text: String,
    },

    /// The configuration describes an impossible geometry.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Page table, TLB and physical memory disagree.
    #[error("invariant violation: {0}")]
    InvariantViolation(String),

    /// A file could not be opened.
    #[error("cannot open {path}: {source}")]
    Open {
        /// Path that failed to open.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// Generic I/O error (reading the trace, writing the report).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The JSON configuration could not be parsed.
    #[error("configuration parse error: {0}")]
    Config(#[from] serde_json::Error),
}

impl VmError {
    /// Process exit code for this error.
    ///
    /// `2` invalid invocation or configuration, `3` malformed input, `4` backing-store
    /// failure, `5` internal invariant violation, `1` any other I/O failure.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::InvalidConfig(_) | Self::Config(_) => 2,
            Self::MalformedAddress { .. } | Self::AddressOutOfRange { .. } => 3,
            Self::BackingStore { .. } => 4,
            Self::InvalidFrameAccess { .. } | Self::InvariantViolation(_) => 5,
            Self::Open { .. } | Self::Io(_) => 1,
        }
    }
}
