use crate::{err::RespError, RespDecode, RespReader};

/// #<t|f>\r\n
///
/// Only `t` reads as true. Any other byte in that position reads as false.
impl RespDecode for bool {
    const PREFIX: u8 = b'#';

    fn decode(reader: &mut RespReader<'_>) -> Result<Self, RespError> {
        let value = reader.next_byte()? == b't';
        reader.expect_crlf()?;
        Ok(value)
    }
}
