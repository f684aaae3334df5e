use super::decode::lossy_string;
use crate::{err::RespError, RespDecode, RespReader};

/// Simple strings are encoded as a plus (+) character, followed by a string.
/// The string mustn't contain a CR (\r) or LF (\n) character and is terminated by CRLF (i.e., \r\n).
///
/// Examples: +OK\r\n
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd)]
pub struct SimpleString(pub(crate) String);

impl RespDecode for SimpleString {
    const PREFIX: u8 = b'+';

    fn decode(reader: &mut RespReader<'_>) -> Result<Self, RespError> {
        let line = reader.read_line()?;
        Ok(SimpleString::new(lossy_string(line)))
    }
}

impl SimpleString {
    pub fn new(s: impl Into<String>) -> Self {
        SimpleString(s.into())
    }
}

impl From<&str> for SimpleString {
    fn from(s: &str) -> Self {
        SimpleString(s.to_string())
    }
}

impl AsRef<str> for SimpleString {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
