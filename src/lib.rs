//! Decoder for fully buffered RESP2/RESP3 byte sequences.
//!
//! ```
//! use rresp::{decode, BulkString, RespArray};
//!
//! let frames = decode(b"*2\r\n$3\r\nfoo\r\n$3\r\nbar\r\n").unwrap();
//! let expected = RespArray::new(vec![BulkString::new("foo").into(), BulkString::new("bar").into()]);
//! assert_eq!(frames, vec![expected.into()]);
//! ```

mod err;
mod resp;

pub use err::RespError;
pub use resp::*;
