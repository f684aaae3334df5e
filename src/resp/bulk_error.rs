use super::{bulk_string::read_bulk, decode::lossy_string};
use crate::{err::RespError, RespDecode, RespReader};

/// This type combines the purpose of simple errors with the expressive power of bulk strings.
///
/// Format:
///     !<length>\r\n<error>\r\n
///
/// Like a bulk string, `!-1\r\n` is the null form.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd)]
pub struct BulkError(pub(crate) Option<String>);

impl RespDecode for BulkError {
    const PREFIX: u8 = b'!';

    fn decode(reader: &mut RespReader<'_>) -> Result<Self, RespError> {
        Ok(BulkError(read_bulk(reader)?.map(lossy_string)))
    }
}

impl BulkError {
    pub fn new(s: impl Into<String>) -> Self {
        BulkError(Some(s.into()))
    }

    pub fn null() -> Self {
        BulkError(None)
    }

    pub fn is_null(&self) -> bool {
        self.0.is_none()
    }

    pub fn message(&self) -> Option<&str> {
        self.0.as_deref()
    }
}
