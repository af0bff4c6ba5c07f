//! Error types for header decoding.

use thiserror::Error;

/// Result type for header operations.
pub type HeaderResult<T> = Result<T, HeaderError>;

/// Errors that can occur while decoding a shared header.
///
/// Encoding has no failure path: fields are fixed-width and out-of-range
/// values wrap per their encoding, which is the caller's problem to avoid.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum HeaderError {
    /// Input shorter than the fixed header size.
    #[error("header too short: expected at least {expected} bytes, found {found}")]
    TooShort {
        /// Required byte count.
        expected: usize,
        /// Bytes actually supplied.
        found: usize,
    },

    /// Magic number does not match; the region is not a pcmbridge header.
    #[error("bad header magic: expected {expected:#010x}, found {found:#010x}")]
    BadMagic {
        /// Expected magic value.
        expected: u32,
        /// Value found at offset 0.
        found: u32,
    },

    /// Header version is newer (or older) than this codec understands.
    #[error("unsupported header version: {found} (supported: {supported})")]
    UnsupportedVersion {
        /// Version found at offset 4.
        found: u32,
        /// Version this codec supports.
        supported: u32,
    },
}
