use memchr::memmem;
use tracing::{debug, trace};
use winnow::{
    ascii::{digit1, float},
    combinator::opt,
    error::{ContextError, ErrMode},
    token::one_of,
    Parser,
};

use crate::{err::RespError, DecodeConfig, RespFrame};

pub(crate) const CRLF: &[u8] = b"\r\n";
pub(crate) const CRLF_LEN: usize = CRLF.len();

/// Decodes every top-level frame in `buf` with the default [`DecodeConfig`].
///
/// The buffer must hold zero or more complete frames back to back. The first
/// failure aborts the call and nothing decoded so far is returned.
pub fn decode(buf: &[u8]) -> Result<Vec<RespFrame>, RespError> {
    decode_with(buf, &DecodeConfig::default())
}

/// Same as [`decode`], with an explicit configuration.
pub fn decode_with(buf: &[u8], config: &DecodeConfig) -> Result<Vec<RespFrame>, RespError> {
    debug!(len = buf.len(), "decoding resp buffer");
    let mut reader = RespReader::new(buf, *config);
    let mut frames = Vec::new();
    while !reader.is_exhausted() {
        let start = reader.position();
        match reader.read_frame() {
            Ok(frame) => {
                trace!(start, end = reader.position(), "decoded top-level frame");
                frames.push(frame);
            }
            Err(e) => {
                debug!(error = %e, start, "failed to decode resp buffer");
                return Err(e);
            }
        }
    }
    Ok(frames)
}

/// Cursor over a fully buffered RESP byte sequence.
///
/// Every reader takes the cursor by `&mut` and leaves it just past what it
/// consumed, so the position after [`RespReader::read_frame`] is the encoded
/// length of the frame.
#[derive(Debug, Clone)]
pub struct RespReader<'a> {
    buf: &'a [u8],
    pos: usize,
    depth: usize,
    config: DecodeConfig,
}

impl<'a> RespReader<'a> {
    pub fn new(buf: &'a [u8], config: DecodeConfig) -> Self {
        RespReader {
            buf,
            pos: 0,
            depth: 0,
            config,
        }
    }

    /// Offset of the next unread byte.
    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn is_exhausted(&self) -> bool {
        self.pos >= self.buf.len()
    }

    pub fn config(&self) -> &DecodeConfig {
        &self.config
    }

    /// Decodes the frame starting at the current position.
    pub fn read_frame(&mut self) -> Result<RespFrame, RespError> {
        RespFrame::read(self)
    }

    pub(crate) fn remaining(&self) -> &'a [u8] {
        &self.buf[self.pos..]
    }

    pub(crate) fn next_byte(&mut self) -> Result<u8, RespError> {
        let byte = *self
            .buf
            .get(self.pos)
            .ok_or(RespError::UnexpectedEof { offset: self.pos })?;
        self.pos += 1;
        Ok(byte)
    }

    /// Returns the bytes up to the next CRLF and moves past the CRLF.
    pub(crate) fn read_line(&mut self) -> Result<&'a [u8], RespError> {
        let rest = self.remaining();
        let end = memmem::find(rest, CRLF)
            .ok_or(RespError::TerminatorNotFound { offset: self.pos })?;
        self.pos += end + CRLF_LEN;
        Ok(&rest[..end])
    }

    pub(crate) fn expect_crlf(&mut self) -> Result<(), RespError> {
        if !self.remaining().starts_with(CRLF) {
            return Err(RespError::TerminatorNotFound { offset: self.pos });
        }
        self.pos += CRLF_LEN;
        Ok(())
    }

    /// Takes exactly `len` raw bytes.
    pub(crate) fn take(&mut self, len: usize) -> Result<&'a [u8], RespError> {
        let rest = self.remaining();
        if rest.len() < len {
            return Err(RespError::LengthMismatch {
                declared: len,
                available: rest.len(),
            });
        }
        self.pos += len;
        Ok(&rest[..len])
    }

    pub(crate) fn read_integer(&mut self) -> Result<i64, RespError> {
        let line = self.read_line()?;
        parse_integer(line)
    }

    /// Reads a length or count line. `None` is the `-1` null sentinel.
    pub(crate) fn read_length(&mut self) -> Result<Option<usize>, RespError> {
        match self.read_integer()? {
            -1 => Ok(None),
            len if len < 0 => Err(RespError::InvalidLength(len)),
            len => usize::try_from(len)
                .map(Some)
                .map_err(|_| RespError::InvalidLength(len)),
        }
    }

    /// Runs `f` one nesting level deeper. The level is released whether or
    /// not `f` succeeds.
    pub(crate) fn nested<T>(
        &mut self,
        f: impl FnOnce(&mut Self) -> Result<T, RespError>,
    ) -> Result<T, RespError> {
        if self.depth >= self.config.max_depth {
            return Err(RespError::DepthLimitExceeded(self.config.max_depth));
        }
        self.depth += 1;
        let result = f(self);
        self.depth -= 1;
        result
    }

    /// Every element takes at least one byte, so a declared count never
    /// needs more capacity than the bytes left.
    pub(crate) fn capacity_hint(&self, count: usize) -> usize {
        count.min(self.remaining().len())
    }
}

// [<+|->]<digits>, the whole line must be consumed. Leading zeros and
// signed zero are accepted.
pub(crate) fn parse_integer(text: &[u8]) -> Result<i64, RespError> {
    let mut input = text;
    let parsed: Result<_, ErrMode<ContextError>> =
        (opt(one_of([b'+', b'-'])), digit1).parse_next(&mut input);
    match parsed {
        Ok(_) if input.is_empty() => std::str::from_utf8(text)
            .ok()
            .and_then(|s| s.parse::<i64>().ok())
            .ok_or_else(|| parse_error("integer", text)),
        _ => Err(parse_error("integer", text)),
    }
}

pub(crate) fn parse_double(text: &[u8]) -> Result<f64, RespError> {
    let mut input = text;
    let parsed: Result<f64, ErrMode<ContextError>> = float(&mut input);
    match parsed {
        Ok(v) if input.is_empty() => Ok(v),
        _ => Err(parse_error("double", text)),
    }
}

pub(crate) fn lossy_string(data: &[u8]) -> String {
    String::from_utf8_lossy(data).into_owned()
}

fn parse_error(expected: &'static str, text: &[u8]) -> RespError {
    RespError::Parse {
        expected,
        text: lossy_string(text),
    }
}
