//! Shared constants and the integer fast path.

use crate::error::DecodeError;

/// CRLF line ending
pub const CRLF: &[u8] = b"\r\n";

/// Parse a signed decimal integer from a byte slice.
///
/// RESP integers are overwhelmingly short (lengths and element counts),
/// so slices of at most nine bytes take an accumulating fast path whose
/// magnitude always fits an `i64`. Anything the shape check rejects
/// (empty, ten bytes or longer, a bare sign, an embedded non-digit)
/// falls back to `str::parse`, which owns the full grammar including
/// overflow detection.
#[inline]
pub fn btoi(b: &[u8]) -> Result<i64, DecodeError> {
    if !b.is_empty() && b.len() < 10 {
        let (neg, digits) = match b[0] {
            b'-' => (true, &b[1..]),
            b'+' => (false, &b[1..]),
            _ => (false, b),
        };
        if !digits.is_empty() && digits.iter().all(u8::is_ascii_digit) {
            let mut n: i64 = 0;
            for &d in digits {
                n = n * 10 + i64::from(d - b'0');
            }
            return Ok(if neg { -n } else { n });
        }
    }

    std::str::from_utf8(b)
        .map_err(|e| DecodeError::InvalidInteger(e.to_string()))?
        .parse::<i64>()
        .map_err(|e| DecodeError::InvalidInteger(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_btoi_fast_path() {
        assert_eq!(btoi(b"0").unwrap(), 0);
        assert_eq!(btoi(b"123").unwrap(), 123);
        assert_eq!(btoi(b"-123").unwrap(), -123);
        assert_eq!(btoi(b"+7").unwrap(), 7);
        assert_eq!(btoi(b"999999999").unwrap(), 999_999_999);
        assert_eq!(btoi(b"-99999999").unwrap(), -99_999_999);
    }

    #[test]
    fn test_btoi_fallback_path() {
        // Ten or more bytes miss the fast path and go through str::parse.
        assert_eq!(btoi(b"1234567890").unwrap(), 1_234_567_890);
        assert_eq!(btoi(b"-1234567890").unwrap(), -1_234_567_890);
        assert_eq!(btoi(b"9223372036854775807").unwrap(), i64::MAX);
        assert_eq!(btoi(b"-9223372036854775808").unwrap(), i64::MIN);
    }

    #[test]
    fn test_btoi_agrees_with_str_parse() {
        for s in ["1", "-1", "+42", "987654321", "9876543210", "0"] {
            assert_eq!(btoi(s.as_bytes()).unwrap(), s.parse::<i64>().unwrap());
        }
    }

    #[test]
    fn test_btoi_rejects_malformed() {
        assert!(matches!(btoi(b""), Err(DecodeError::InvalidInteger(_))));
        assert!(matches!(btoi(b"-"), Err(DecodeError::InvalidInteger(_))));
        assert!(matches!(btoi(b"+"), Err(DecodeError::InvalidInteger(_))));
        assert!(matches!(btoi(b"abc"), Err(DecodeError::InvalidInteger(_))));
        assert!(matches!(btoi(b"12a"), Err(DecodeError::InvalidInteger(_))));
        assert!(matches!(btoi(b" 12"), Err(DecodeError::InvalidInteger(_))));
        assert!(matches!(btoi(b"1 2"), Err(DecodeError::InvalidInteger(_))));
    }

    #[test]
    fn test_btoi_rejects_overflow() {
        assert!(matches!(
            btoi(b"9223372036854775808"),
            Err(DecodeError::InvalidInteger(_))
        ));
        assert!(matches!(
            btoi(b"99999999999999999999"),
            Err(DecodeError::InvalidInteger(_))
        ));
    }
}
