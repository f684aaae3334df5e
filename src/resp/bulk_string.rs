use std::ops::Deref;

use bytes::Bytes;

use crate::{err::RespError, RespDecode, RespReader};

const MINUS_ONE: &[u8] = b"-1";

/// A bulk string represents a single binary string.
///
/// Format:
///     $<length>\r\n<data>\r\n
///
/// - The dollar sign ($) as the first byte.
/// - One or more decimal digits (0..9) as the string's length, in bytes, as an unsigned, base-10 value.
/// - The CRLF terminator.
/// - The data.
/// - A final CRLF.
///
/// `$-1\r\n` is the null bulk string, it carries no data and no final CRLF.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd)]
pub struct BulkString(pub(crate) Option<Bytes>);

impl RespDecode for BulkString {
    const PREFIX: u8 = b'$';

    fn decode(reader: &mut RespReader<'_>) -> Result<Self, RespError> {
        Ok(BulkString(
            read_bulk(reader)?.map(Bytes::copy_from_slice),
        ))
    }
}

/// Reads `<length>\r\n<data>\r\n`, shared by bulk strings and bulk errors.
/// `None` is the `-1` length, or a literal `-1` payload when the reader is
/// configured to treat it as null.
pub(crate) fn read_bulk<'a>(reader: &mut RespReader<'a>) -> Result<Option<&'a [u8]>, RespError> {
    let Some(len) = reader.read_length()? else {
        return Ok(None);
    };
    let data = reader.take(len)?;
    reader.expect_crlf()?;
    if reader.config().minus_one_payload_as_null && data == MINUS_ONE {
        return Ok(None);
    }
    Ok(Some(data))
}

impl BulkString {
    pub fn new(s: impl Into<Bytes>) -> Self {
        BulkString(Some(s.into()))
    }

    pub fn null() -> Self {
        BulkString(None)
    }

    pub fn is_null(&self) -> bool {
        self.0.is_none()
    }
}

impl Deref for BulkString {
    type Target = [u8];
    fn deref(&self) -> &Self::Target {
        self.0.as_deref().unwrap_or_default()
    }
}

impl From<Option<Bytes>> for BulkString {
    fn from(value: Option<Bytes>) -> Self {
        BulkString(value)
    }
}
