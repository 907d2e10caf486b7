//! Address trace parsing.
//!
//! A trace is decimal text with one logical address per line. Blank lines are
//! ignored. Anything else that is not a non-negative integer fitting in the
//! configured address width is handled per [`MalformedLinePolicy`].

use std::io::BufRead;

use tracing::warn;

use crate::common::{Result, VirtAddr, VmError};
use crate::config::MalformedLinePolicy;

/// Parsed address trace.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressTrace {
    /// Addresses in file order.
    pub addresses: Vec<VirtAddr>,
    /// One-based line numbers that were skipped as malformed.
    pub skipped: Vec<usize>,
}

impl AddressTrace {
    /// Number of addresses.
    pub fn len(&self) -> usize {
        self.addresses.len()
    }

    /// Returns `true` if the trace holds no addresses.
    pub fn is_empty(&self) -> bool {
        self.addresses.is_empty()
    }
}

/// Parses one trace line.
///
/// # Errors
///
/// [`VmError::MalformedAddress`] if the text is not a decimal integer, and
/// [`VmError::AddressOutOfRange`] if it needs more than `address_bits` bits.
pub fn parse_address(text: &str, line: usize, address_bits: u32) -> Result<VirtAddr> {
    let raw: u64 = text.trim().parse().map_err(|_| VmError::MalformedAddress {
        line,
        text: text.to_owned(),
    })?;
    if address_bits < 64 && raw >> address_bits != 0 {
        return Err(VmError::AddressOutOfRange {
            addr: raw,
            bits: address_bits,
        });
    }
    Ok(VirtAddr::new(raw))
}

/// Reads a whole trace.
///
/// # Errors
///
/// I/O errors from `reader` always abort. Parse errors, including lines that
/// are not valid UTF-8, abort under
/// [`MalformedLinePolicy::Abort`] and are logged and skipped under
/// [`MalformedLinePolicy::Skip`].
pub fn read_trace<R: BufRead>(
    reader: R,
    policy: MalformedLinePolicy,
    address_bits: u32,
) -> Result<AddressTrace> {
    let mut trace = AddressTrace::default();
    for (idx, raw) in reader.split(b'\n').enumerate() {
        let raw = raw?;
        let line_no = idx + 1;
        let parsed = match std::str::from_utf8(&raw) {
            Ok(text) if text.trim().is_empty() => continue,
            Ok(text) => parse_address(text, line_no, address_bits),
            Err(_) => Err(VmError::MalformedAddress {
                line: line_no,
                text: String::from_utf8_lossy(&raw).into_owned(),
            }),
        };
        match parsed {
            Ok(addr) => trace.addresses.push(addr),
            Err(e) if policy == MalformedLinePolicy::Skip => {
                warn!(line = line_no, "skipping address: {e}");
                trace.skipped.push(line_no);
            }
            Err(e) => return Err(e),
        }
    }
    Ok(trace)
}
