use thiserror::Error;

/// Failures that abort a decode call.
///
/// RESP error replies (`-ERR ...`, `!<len>...`) are not reported here, they
/// decode into [`crate::RespFrame::Error`] and [`crate::RespFrame::BulkError`].
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RespError {
    #[error("Terminator CRLF not found after offset {offset}")]
    TerminatorNotFound { offset: usize },

    #[error("Length mismatch: declared {declared} bytes, only {available} available")]
    LengthMismatch { declared: usize, available: usize },

    #[error("Parse {expected} error: invalid text {text:?}")]
    Parse { expected: &'static str, text: String },

    #[error("Unsupported frame type {tag:#04x} at offset {offset}")]
    UnsupportedType { tag: u8, offset: usize },

    #[error("Unexpected end of input at offset {offset}")]
    UnexpectedEof { offset: usize },

    #[error("Invalid length: {0}")]
    InvalidLength(i64),

    #[error("Nesting depth exceeds the limit of {0}")]
    DepthLimitExceeded(usize),
}
