//! Recursive-descent RESP decoder over a buffered byte source.

use std::io::Read;

use bytes::Bytes;

use crate::error::DecodeError;
use crate::source::ByteSource;
use crate::types::RespType;
use crate::types::RespValue;
use crate::utils::CRLF;
use crate::utils::btoi;

/// Default cap on array nesting.
pub const DEFAULT_MAX_DEPTH: usize = 512;

/// A stateful RESP decoder over a blocking byte source.
///
/// One [`decode`](Decoder::decode) call produces one value, and the
/// handle may be reused for successive values on the same stream. The
/// first failure poisons it: RESP framing is stateful, so after a partial
/// or misaligned read the stream position cannot be trusted, and every
/// later call returns the original error without reading further.
/// Callers are expected to drop the connection along with the handle.
pub struct Decoder<R> {
    src: ByteSource<R>,
    err: Option<DecodeError>,
    max_depth: usize,
}

impl<R: Read> Decoder<R> {
    /// Create a decoder with the default buffer size.
    pub fn new(inner: R) -> Self {
        Self::from_source(ByteSource::new(inner))
    }

    /// Create a decoder with an explicit source buffer capacity.
    pub fn with_capacity(capacity: usize, inner: R) -> Self {
        Self::from_source(ByteSource::with_capacity(capacity, inner))
    }

    /// Wrap an already-buffered source.
    pub fn from_source(src: ByteSource<R>) -> Self {
        Decoder {
            src,
            err: None,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Replace the nesting limit. Values nested `max_depth` levels deep
    /// or deeper fail with [`DecodeError::MaxDepthExceeded`].
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Decode the next value from the source.
    ///
    /// Once a call has failed, the same error comes back from every
    /// subsequent call and the source is never touched again.
    pub fn decode(&mut self) -> Result<RespValue, DecodeError> {
        if let Some(err) = &self.err {
            return Err(err.clone());
        }
        match self.decode_value(0) {
            Ok(value) => Ok(value),
            Err(err) => {
                self.err = Some(err.clone());
                Err(err)
            }
        }
    }

    fn decode_value(&mut self, depth: usize) -> Result<RespValue, DecodeError> {
        if depth >= self.max_depth {
            return Err(DecodeError::MaxDepthExceeded(self.max_depth));
        }
        let marker = self.src.read_byte()?;
        match RespType::from_marker(marker) {
            Some(RespType::SimpleString) => Ok(RespValue::SimpleString(self.decode_text_line()?)),
            Some(RespType::Error) => Ok(RespValue::Error(self.decode_text_line()?)),
            Some(RespType::Integer) => Ok(RespValue::Integer(self.decode_text_line()?)),
            Some(RespType::BulkBytes) => Ok(RespValue::BulkBytes(self.decode_bulk_payload()?)),
            Some(RespType::Array) => Ok(RespValue::Array(self.decode_array_items(depth)?)),
            None if depth == 0 => {
                // Inline commands only exist at the top level; the marker
                // is the first byte of the command line.
                self.src.unread_byte();
                self.decode_inline_array()
            }
            None => Err(DecodeError::InvalidTypeMarker(marker as char)),
        }
    }

    /// Read one CRLF-terminated line, stripping the terminator.
    fn decode_text_line(&mut self) -> Result<Bytes, DecodeError> {
        let mut line = self.src.read_until(b'\n')?;
        if line.len() < 2 || line[line.len() - 2] != b'\r' {
            return Err(DecodeError::BadCrlfEnd);
        }
        line.truncate(line.len() - 2);
        Ok(Bytes::from(line))
    }

    fn decode_int_line(&mut self) -> Result<i64, DecodeError> {
        let line = self.decode_text_line()?;
        btoi(&line)
    }

    /// `$` payload: length line, then exactly that many bytes plus CRLF.
    fn decode_bulk_payload(&mut self) -> Result<Option<Bytes>, DecodeError> {
        let n = self.decode_int_line()?;
        if n < -1 {
            return Err(DecodeError::InvalidBulkLength(n));
        }
        if n == -1 {
            return Ok(None);
        }
        let n = n as usize;
        let mut block = self.src.read_exact(n + 2)?;
        if &block[n..] != CRLF {
            return Err(DecodeError::BadCrlfEnd);
        }
        block.truncate(n);
        Ok(Some(Bytes::from(block)))
    }

    /// `*` payload: count line, then that many recursively decoded
    /// elements. The first failing element aborts the whole decode.
    fn decode_array_items(&mut self, depth: usize) -> Result<Option<Vec<RespValue>>, DecodeError> {
        let n = self.decode_int_line()?;
        if n < -1 {
            return Err(DecodeError::InvalidArrayLength(n));
        }
        if n == -1 {
            return Ok(None);
        }
        let mut items = Vec::with_capacity(n as usize);
        for _ in 0..n {
            items.push(self.decode_value(depth + 1)?);
        }
        Ok(Some(items))
    }

    /// Legacy inline command: one line, split on spaces into bulk tokens.
    ///
    /// A token is a maximal run of non-space bytes, so runs of spaces
    /// collapse and an empty or all-space line yields a zero-length
    /// array rather than an error.
    fn decode_inline_array(&mut self) -> Result<RespValue, DecodeError> {
        let line = self.decode_text_line()?;
        let tokens = line
            .split(|b| *b == b' ')
            .filter(|token| !token.is_empty())
            .map(|token| RespValue::BulkBytes(Some(line.slice_ref(token))))
            .collect();
        Ok(RespValue::Array(Some(tokens)))
    }
}

/// Decode a single value from a blocking byte source.
pub fn decode<R: Read>(inner: R) -> Result<RespValue, DecodeError> {
    Decoder::new(inner).decode()
}

/// Decode a single value from an in-memory buffer.
pub fn decode_from_slice(buf: &[u8]) -> Result<RespValue, DecodeError> {
    decode(buf)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_simple_string() {
        let value = decode_from_slice(b"+OK\r\n").unwrap();
        assert_eq!(value, RespValue::simple_string("OK"));
    }

    #[test]
    fn test_decode_error_value() {
        let value = decode_from_slice(b"-ERR unknown command\r\n").unwrap();
        assert_eq!(value, RespValue::error("ERR unknown command"));
    }

    #[test]
    fn test_decode_integer_keeps_text() {
        let value = decode_from_slice(b":1000\r\n").unwrap();
        assert_eq!(value, RespValue::Integer(Bytes::from("1000")));
        assert_eq!(value.as_integer(), Some(1000));
    }

    #[test]
    fn test_decode_bulk_bytes() {
        let value = decode_from_slice(b"$6\r\nfoobar\r\n").unwrap();
        assert_eq!(value, RespValue::bulk("foobar"));
    }

    #[test]
    fn test_decode_bulk_carries_raw_bytes() {
        let value = decode_from_slice(b"$4\r\n\x00\xff\r\x0a\r\n").unwrap();
        assert_eq!(value, RespValue::bulk(&b"\x00\xff\r\n"[..]));
    }

    #[test]
    fn test_decode_array() {
        let value = decode_from_slice(b"*2\r\n$3\r\nfoo\r\n$3\r\nbar\r\n").unwrap();
        assert_eq!(
            value,
            RespValue::array([RespValue::bulk("foo"), RespValue::bulk("bar")])
        );
    }

    #[test]
    fn test_decode_mixed_array() {
        let value = decode_from_slice(b"*3\r\n+OK\r\n:42\r\n$-1\r\n").unwrap();
        let items = value.into_vec().unwrap();
        assert_eq!(items[0].as_str(), Some("OK"));
        assert_eq!(items[1].as_integer(), Some(42));
        assert!(items[2].is_null());
    }

    #[test]
    fn test_decode_inline_command() {
        let value = decode_from_slice(b"PING\r\n").unwrap();
        assert_eq!(value, RespValue::array([RespValue::bulk("PING")]));
    }

    #[test]
    fn test_unread_marker_lands_in_first_token() {
        let value = decode_from_slice(b"SET foo bar\r\n").unwrap();
        let items = value.into_vec().unwrap();
        assert_eq!(items[0].as_str(), Some("SET"));
    }
}
