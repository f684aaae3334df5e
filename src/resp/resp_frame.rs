use crate::{
    err::RespError, BulkError, BulkString, RespArray, RespDecode, RespMap, RespNull, RespReader,
    SimpleError, SimpleString,
};

/// RESP(Redis serialization protocol specification).
/// According to https://redis.io/docs/latest/develop/reference/protocol-spec/.
#[derive(Debug, Clone, PartialEq, PartialOrd)]
pub enum RespFrame {
    Null(RespNull),
    SimpleString(SimpleString),
    Error(SimpleError),
    Integer(i64),
    Double(f64),
    Boolean(bool),
    BulkString(BulkString),
    BulkError(BulkError),
    Array(RespArray),
    Map(RespMap),
}

impl RespFrame {
    /// Reads one tag byte and hands the rest of the frame to its reader.
    pub(crate) fn read(reader: &mut RespReader<'_>) -> Result<Self, RespError> {
        let offset = reader.position();
        let tag = reader.next_byte()?;
        let frame: RespFrame = match tag {
            SimpleString::PREFIX => SimpleString::decode(reader)?.into(),
            SimpleError::PREFIX => SimpleError::decode(reader)?.into(),
            i64::PREFIX => i64::decode(reader)?.into(),
            BulkString::PREFIX => BulkString::decode(reader)?.into(),
            RespArray::PREFIX => RespArray::decode(reader)?.into(),
            RespNull::PREFIX => RespNull::decode(reader)?.into(),
            bool::PREFIX => bool::decode(reader)?.into(),
            f64::PREFIX => f64::decode(reader)?.into(),
            BulkError::PREFIX => BulkError::decode(reader)?.into(),
            RespMap::PREFIX => RespMap::decode(reader)?.into(),
            _ => return Err(RespError::UnsupportedType { tag, offset }),
        };
        Ok(frame)
    }

    /// `_\r\n` as well as the `-1` length forms of bulk strings, bulk errors,
    /// arrays and maps.
    pub fn is_null(&self) -> bool {
        match self {
            RespFrame::Null(_) => true,
            RespFrame::BulkString(s) => s.is_null(),
            RespFrame::BulkError(e) => e.is_null(),
            RespFrame::Array(a) => a.is_null(),
            RespFrame::Map(m) => m.is_null(),
            _ => false,
        }
    }
}

macro_rules! impl_from_for_frame {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for RespFrame {
                fn from(value: $ty) -> Self {
                    RespFrame::$variant(value)
                }
            }
        )*
    };
}

impl_from_for_frame! {
    RespNull => Null,
    SimpleString => SimpleString,
    SimpleError => Error,
    i64 => Integer,
    f64 => Double,
    bool => Boolean,
    BulkString => BulkString,
    BulkError => BulkError,
    RespArray => Array,
    RespMap => Map,
}

impl From<&[u8]> for RespFrame {
    fn from(value: &[u8]) -> Self {
        BulkString::new(value.to_vec()).into()
    }
}

impl<const N: usize> From<&[u8; N]> for RespFrame {
    fn from(value: &[u8; N]) -> Self {
        BulkString::new(value.to_vec()).into()
    }
}
