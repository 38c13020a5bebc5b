//! # resp-decode - Redis Serialization Protocol stream decoder
//!
//! A recursive-descent RESP decoder that turns a blocking byte stream
//! into a typed value tree.
//!
//! This library covers the decoding core only: tokenizing the byte
//! stream, parsing the five RESP wire types (`+ - : $ *`), the legacy
//! inline-command fallback, and the error taxonomy for malformed input.
//! Encoding and connection handling belong to the surrounding layers.
//!
//! ## Features
//!
//! - **Any blocking source**: decodes from anything implementing
//!   [`std::io::Read`], with internal buffering
//! - **Null-aware value model**: null bulk bytes and null arrays stay
//!   distinct from their empty counterparts
//! - **Poisoned on failure**: a decoder handle that has failed once keeps
//!   returning that error, because a misframed stream cannot be resynced
//! - **Bounded nesting**: a configurable depth cap rejects pathologically
//!   nested arrays
//!
//! ## Example
//!
//! ```rust
//! use resp_decode::RespValue;
//!
//! let value = resp_decode::decode_from_slice(b"*2\r\n$4\r\nECHO\r\n$2\r\nhi\r\n").unwrap();
//! let items = value.into_vec().unwrap();
//! assert_eq!(items[0].as_str(), Some("ECHO"));
//! assert_eq!(items[1].as_str(), Some("hi"));
//! ```

mod decode;
mod error;
mod source;
mod types;
mod utils;

pub use decode::DEFAULT_MAX_DEPTH;
pub use decode::Decoder;
pub use decode::decode;
pub use decode::decode_from_slice;
pub use error::DecodeError;
pub use source::ByteSource;
pub use types::RespType;
pub use types::RespValue;
