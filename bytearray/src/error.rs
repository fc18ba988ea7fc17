//! Error types for byte array operations.

use std::io;

/// Result type alias for byte array operations.
pub type Result<T> = std::result::Result<T, ByteArrayError>;

/// Byte array operation error.
///
/// Both variants are routine, recoverable outcomes. `Eof` in particular is the
/// expected signal at a framing boundary when decoding a stream incrementally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ByteArrayError {
    /// A read asked for more bytes than remain between position and length.
    #[error("EOFError: not enough bytes available")]
    Eof,

    /// An offset/length computation does not fit the representable size.
    #[error("RangeError: value out of acceptable range")]
    Range,
}

impl From<ByteArrayError> for io::Error {
    fn from(e: ByteArrayError) -> Self {
        match e {
            ByteArrayError::Eof => io::Error::new(io::ErrorKind::UnexpectedEof, e),
            ByteArrayError::Range => io::Error::new(io::ErrorKind::InvalidInput, e),
        }
    }
}
