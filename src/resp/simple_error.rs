use super::decode::lossy_string;
use crate::{err::RespError, RespDecode, RespReader};

/// Simple errors, or simply just errors, are similar to simple strings,
/// but their first character is the minus (-) character.
///
/// A decoded simple error is an ordinary frame: it is the reply the server
/// sent, not a failure to decode.
///
/// Examples: -Error message\r\n
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd)]
pub struct SimpleError(pub(crate) String);

impl RespDecode for SimpleError {
    const PREFIX: u8 = b'-';

    fn decode(reader: &mut RespReader<'_>) -> Result<Self, RespError> {
        let line = reader.read_line()?;
        Ok(SimpleError::new(lossy_string(line)))
    }
}

impl SimpleError {
    pub fn new(s: impl Into<String>) -> Self {
        SimpleError(s.into())
    }

    pub fn message(&self) -> &str {
        &self.0
    }
}

impl From<&str> for SimpleError {
    fn from(value: &str) -> Self {
        SimpleError(value.to_string())
    }
}

impl From<String> for SimpleError {
    fn from(value: String) -> Self {
        SimpleError(value)
    }
}
