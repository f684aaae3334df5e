use std::ops::Deref;

use tracing::trace;

use crate::{err::RespError, RespDecode, RespFrame, RespReader};

/// Clients send commands to the Redis server as RESP arrays.
/// Similarly, some Redis commands that return collections of
/// elements use arrays as their replies.
///
/// Format:
///     *<number-of-elements>\r\n<element-1>...<element-n>
///
/// - An asterisk (*) as the first byte.
/// - One or more decimal digits (0..9) as the number of elements in the array as an unsigned, base-10 value.
/// - The CRLF terminator.
/// - An additional RESP type for every element of the array.
///
/// `*-1\r\n` is the null array.
#[derive(Debug, Clone, PartialEq, PartialOrd)]
pub struct RespArray(pub(crate) Option<Vec<RespFrame>>);

impl RespDecode for RespArray {
    const PREFIX: u8 = b'*';

    fn decode(reader: &mut RespReader<'_>) -> Result<Self, RespError> {
        let Some(len) = reader.read_length()? else {
            return Ok(RespArray::null());
        };
        trace!(len, "decoding array");
        reader.nested(|reader| {
            let mut array = Vec::with_capacity(reader.capacity_hint(len));
            for _ in 0..len {
                array.push(RespFrame::read(reader)?);
            }
            Ok(RespArray::new(array))
        })
    }
}

impl RespArray {
    pub fn new(s: impl Into<Vec<RespFrame>>) -> Self {
        RespArray(Some(s.into()))
    }

    pub fn null() -> Self {
        RespArray(None)
    }

    pub fn is_null(&self) -> bool {
        self.0.is_none()
    }
}

impl Deref for RespArray {
    type Target = [RespFrame];
    fn deref(&self) -> &Self::Target {
        self.0.as_deref().unwrap_or_default()
    }
}
