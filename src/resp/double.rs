use super::decode::parse_double;
use crate::{err::RespError, RespDecode, RespReader};

/// The Double RESP type encodes a double-precision floating point value.
/// Format:
///     ,[<+|->]<integral>[.<fractional>][<E|e>[sign]<exponent>]\r\n
///
/// Example:
///     1.23
///     ,1.23\r\n
///
/// Other examples:
///     ,inf\r\n
///     ,-inf\r\n
///     ,nan\r\n
impl RespDecode for f64 {
    const PREFIX: u8 = b',';

    fn decode(reader: &mut RespReader<'_>) -> Result<Self, RespError> {
        let line = reader.read_line()?;
        parse_double(line)
    }
}
