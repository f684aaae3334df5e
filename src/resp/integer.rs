use crate::{err::RespError, RespDecode, RespReader};

/// This type is a CRLF-terminated string that represents a signed, base-10, 64-bit integer.
///
/// Format:
///     :[<+|->]<value>\r\n
///
/// - The colon (:) as the first byte.
/// - An optional plus (+) or minus (-) as the sign.
/// - One or more decimal digits (0..9) as the integer's unsigned, base-10 value.
/// - The CRLF terminator.
impl RespDecode for i64 {
    const PREFIX: u8 = b':';

    fn decode(reader: &mut RespReader<'_>) -> Result<Self, RespError> {
        reader.read_integer()
    }
}
