//! RESP data types and value representation.

use bytes::Bytes;

use crate::utils;

/// The five RESP wire types and their marker bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RespType {
    /// Simple string: `+OK\r\n`
    SimpleString,

    /// Error: `-ERR message\r\n`
    Error,

    /// Integer: `:1000\r\n`
    Integer,

    /// Bulk bytes: `$6\r\nfoobar\r\n`
    BulkBytes,

    /// Array: `*2\r\n$3\r\nfoo\r\n$3\r\nbar\r\n`
    Array,
}

impl RespType {
    /// The wire marker byte for this type.
    pub const fn marker(self) -> u8 {
        match self {
            RespType::SimpleString => b'+',
            RespType::Error => b'-',
            RespType::Integer => b':',
            RespType::BulkBytes => b'$',
            RespType::Array => b'*',
        }
    }

    /// Map a wire marker byte back to its type.
    ///
    /// Returns `None` for any other byte. Whether that is a protocol error
    /// or the start of an inline command depends on nesting depth, which
    /// is the decoder's call, not this one's.
    pub const fn from_marker(marker: u8) -> Option<RespType> {
        match marker {
            b'+' => Some(RespType::SimpleString),
            b'-' => Some(RespType::Error),
            b':' => Some(RespType::Integer),
            b'$' => Some(RespType::BulkBytes),
            b'*' => Some(RespType::Array),
            _ => None,
        }
    }
}

/// A decoded RESP value.
///
/// Nullability is explicit: `BulkBytes(None)` is the RESP null bulk
/// (`$-1\r\n`), distinct from the zero-length `BulkBytes(Some(b""))`;
/// likewise `Array(None)` (`*-1\r\n`) is distinct from
/// `Array(Some(vec![]))`. Redis clients rely on the difference, so the
/// decoder preserves it exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RespValue {
    /// Simple string payload
    SimpleString(Bytes),

    /// Error payload
    Error(Bytes),

    /// Integer as its raw decimal text; see [`RespValue::as_integer`]
    Integer(Bytes),

    /// Length-prefixed binary payload; `None` is the null bulk
    BulkBytes(Option<Bytes>),

    /// Nested values; `None` is the null array
    Array(Option<Vec<RespValue>>),
}

impl RespValue {
    /// The wire type this value decoded from.
    pub fn resp_type(&self) -> RespType {
        match self {
            RespValue::SimpleString(_) => RespType::SimpleString,
            RespValue::Error(_) => RespType::Error,
            RespValue::Integer(_) => RespType::Integer,
            RespValue::BulkBytes(_) => RespType::BulkBytes,
            RespValue::Array(_) => RespType::Array,
        }
    }

    /// Check if the value is an error
    pub fn is_error(&self) -> bool {
        matches!(self, RespValue::Error(_))
    }

    /// Check if the value is a null bulk or a null array
    pub fn is_null(&self) -> bool {
        matches!(self, RespValue::BulkBytes(None) | RespValue::Array(None))
    }

    /// Try to view the payload bytes of a scalar value
    pub fn as_bytes(&self) -> Option<&Bytes> {
        match self {
            RespValue::SimpleString(b) | RespValue::Error(b) | RespValue::Integer(b) => Some(b),
            RespValue::BulkBytes(b) => b.as_ref(),
            RespValue::Array(_) => None,
        }
    }

    /// Try to view the payload as UTF-8 text
    pub fn as_str(&self) -> Option<&str> {
        match self {
            RespValue::SimpleString(b) | RespValue::BulkBytes(Some(b)) => {
                std::str::from_utf8(b).ok()
            }
            _ => None,
        }
    }

    /// Parse the decimal text of an `Integer` value
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            RespValue::Integer(b) => utils::btoi(b).ok(),
            _ => None,
        }
    }

    /// Try to view the elements of a non-null array
    pub fn as_array(&self) -> Option<&[RespValue]> {
        match self {
            RespValue::Array(Some(a)) => Some(a),
            _ => None,
        }
    }

    /// Try to consume into the elements of a non-null array
    pub fn into_vec(self) -> Option<Vec<RespValue>> {
        match self {
            RespValue::Array(Some(a)) => Some(a),
            _ => None,
        }
    }

    // Convenience constructors

    /// Create a simple string value
    pub fn simple_string(s: impl Into<Bytes>) -> Self {
        RespValue::SimpleString(s.into())
    }

    /// Create an error value
    pub fn error(e: impl Into<Bytes>) -> Self {
        RespValue::Error(e.into())
    }

    /// Create an integer value from its numeric form
    pub fn integer(i: i64) -> Self {
        RespValue::Integer(Bytes::from(i.to_string()))
    }

    /// Create a non-null bulk bytes value
    pub fn bulk(b: impl Into<Bytes>) -> Self {
        RespValue::BulkBytes(Some(b.into()))
    }

    /// Create the null bulk bytes value
    pub fn null_bulk() -> Self {
        RespValue::BulkBytes(None)
    }

    /// Create a non-null array value from an iterator
    pub fn array(items: impl IntoIterator<Item = RespValue>) -> Self {
        RespValue::Array(Some(items.into_iter().collect()))
    }

    /// Create the null array value
    pub fn null_array() -> Self {
        RespValue::Array(None)
    }
}
