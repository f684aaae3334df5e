mod array;
mod boolean;
mod bulk_error;
mod bulk_string;
mod config;
mod decode;
mod double;
mod integer;
mod map;
mod null;
mod resp_frame;
mod simple_error;
mod simple_string;

pub use array::RespArray;
pub use bulk_error::BulkError;
pub use bulk_string::BulkString;
pub use config::{DecodeConfig, DEFAULT_MAX_DEPTH};
pub use decode::{decode, decode_with, RespReader};
pub use map::RespMap;
pub use null::RespNull;
pub use resp_frame::RespFrame;
pub use simple_error::SimpleError;
pub use simple_string::SimpleString;

use crate::err::RespError;

/// A RESP type that can be read from a [`RespReader`].
///
/// `decode` is called with the cursor just past the `PREFIX` tag byte and
/// must leave it after the value's last CRLF.
pub trait RespDecode: Sized {
    const PREFIX: u8;

    fn decode(reader: &mut RespReader<'_>) -> Result<Self, RespError>;
}
