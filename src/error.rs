//! Error types for RESP decoding.

use std::io;
use std::sync::Arc;

use thiserror::Error;

/// Errors that can occur while decoding a RESP value.
///
/// Cloneable so a poisoned decoder handle can keep returning the failure
/// that killed it; the wrapped I/O error is shared behind an `Arc`.
#[derive(Error, Debug, Clone)]
pub enum DecodeError {
    /// A line or length-prefixed block did not end with CRLF
    #[error("bad CRLF end")]
    BadCrlfEnd,

    /// Bulk bytes length below -1
    #[error("invalid bulk bytes length: {0}")]
    InvalidBulkLength(i64),

    /// Array length below -1
    #[error("invalid array length: {0}")]
    InvalidArrayLength(i64),

    /// Unknown type marker encountered inside an array
    #[error("invalid type marker: {0:?}")]
    InvalidTypeMarker(char),

    /// A length, count or integer line was not a valid decimal integer
    #[error("invalid integer: {0}")]
    InvalidInteger(String),

    /// Array nesting deeper than the configured limit
    #[error("array nesting exceeds maximum depth of {0}")]
    MaxDepthExceeded(usize),

    /// The underlying byte source failed or ended mid-frame
    #[error("read error: {0}")]
    Io(Arc<io::Error>),
}

impl From<io::Error> for DecodeError {
    fn from(e: io::Error) -> Self {
        DecodeError::Io(Arc::new(e))
    }
}

// `io::Error` has no `PartialEq`; two `Io` errors compare by kind, which
// is as fine-grained as callers ever need to distinguish.
impl PartialEq for DecodeError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (DecodeError::BadCrlfEnd, DecodeError::BadCrlfEnd) => true,
            (DecodeError::InvalidBulkLength(a), DecodeError::InvalidBulkLength(b)) => a == b,
            (DecodeError::InvalidArrayLength(a), DecodeError::InvalidArrayLength(b)) => a == b,
            (DecodeError::InvalidTypeMarker(a), DecodeError::InvalidTypeMarker(b)) => a == b,
            (DecodeError::InvalidInteger(a), DecodeError::InvalidInteger(b)) => a == b,
            (DecodeError::MaxDepthExceeded(a), DecodeError::MaxDepthExceeded(b)) => a == b,
            (DecodeError::Io(a), DecodeError::Io(b)) => a.kind() == b.kind(),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_errors_compare_by_kind() {
        let a: DecodeError = io::Error::new(io::ErrorKind::UnexpectedEof, "short read").into();
        let b: DecodeError = io::Error::new(io::ErrorKind::UnexpectedEof, "closed").into();
        assert_eq!(a, b);

        let c: DecodeError = io::Error::new(io::ErrorKind::ConnectionReset, "reset").into();
        assert_ne!(a, c);
    }

    #[test]
    fn test_display_messages() {
        assert_eq!(DecodeError::BadCrlfEnd.to_string(), "bad CRLF end");
        assert_eq!(
            DecodeError::InvalidBulkLength(-2).to_string(),
            "invalid bulk bytes length: -2"
        );
        assert_eq!(
            DecodeError::InvalidTypeMarker('P').to_string(),
            "invalid type marker: 'P'"
        );
    }
}
