use crate::{err::RespError, RespDecode, RespReader};

/// The null data type represents non-existent values.
///
/// Examples: _\r\n
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd)]
pub struct RespNull;

impl RespDecode for RespNull {
    const PREFIX: u8 = b'_';

    fn decode(reader: &mut RespReader<'_>) -> Result<Self, RespError> {
        reader.expect_crlf()?;
        Ok(RespNull)
    }
}
