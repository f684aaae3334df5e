use std::ops::Deref;

use tracing::trace;

use crate::{err::RespError, RespDecode, RespFrame, RespReader};

/// The RESP map encodes a collection of key-value tuples, i.e., a dictionary or a hash.
/// Format:
///     %<number-of-entries>\r\n<key-1><value-1>...<key-n><value-n>
///
/// - A percent character (%) as the first byte.
/// - One or more decimal digits (0..9) as the number of entries, or key-value tuples, in the map as an unsigned, base-10 value.
/// - The CRLF terminator.
/// - Two additional RESP types for every key and value in the map.
///
/// Examples:
///     {
///         "first": 1,
///         "second": 2
///     }
///            ↓
///         %2\r\n
///         +first\r\n
///         :1\r\n
///         +second\r\n
///         :2\r\n
/// (The raw RESP encoding is split into multiple lines for readability).
///
/// Keys may be any frame. Entries are kept in wire order and duplicate keys
/// are not merged.
#[derive(Debug, Clone, PartialEq, PartialOrd)]
pub struct RespMap(pub(crate) Option<Vec<(RespFrame, RespFrame)>>);

impl RespDecode for RespMap {
    const PREFIX: u8 = b'%';

    fn decode(reader: &mut RespReader<'_>) -> Result<Self, RespError> {
        let Some(len) = reader.read_length()? else {
            return Ok(RespMap::null());
        };
        trace!(len, "decoding map");
        reader.nested(|reader| {
            let mut entries = Vec::with_capacity(reader.capacity_hint(len));
            for _ in 0..len {
                let key = RespFrame::read(reader)?;
                let value = RespFrame::read(reader)?;
                entries.push((key, value));
            }
            Ok(RespMap::new(entries))
        })
    }
}

impl RespMap {
    pub fn new(entries: impl Into<Vec<(RespFrame, RespFrame)>>) -> Self {
        RespMap(Some(entries.into()))
    }

    pub fn null() -> Self {
        RespMap(None)
    }

    pub fn is_null(&self) -> bool {
        self.0.is_none()
    }

    /// Value of the first entry whose key equals `key`.
    pub fn get(&self, key: &RespFrame) -> Option<&RespFrame> {
        self.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }
}

impl Default for RespMap {
    fn default() -> Self {
        RespMap::new(vec![])
    }
}

impl Deref for RespMap {
    type Target = [(RespFrame, RespFrame)];
    fn deref(&self) -> &Self::Target {
        self.0.as_deref().unwrap_or_default()
    }
}
