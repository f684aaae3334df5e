/// Nesting limit applied when no other limit is configured.
pub const DEFAULT_MAX_DEPTH: usize = 512;

/// Knobs for a single decode call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeConfig {
    /// Maximum number of arrays/maps open at the same time.
    pub max_depth: usize,
    /// Treat a bulk string/error whose payload is literally `-1` as null,
    /// even when its declared length is 2. Off by default: only the `-1`
    /// length sentinel means null.
    pub minus_one_payload_as_null: bool,
}

impl DecodeConfig {
    pub fn new() -> Self {
        DecodeConfig {
            max_depth: DEFAULT_MAX_DEPTH,
            minus_one_payload_as_null: false,
        }
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_minus_one_payload_as_null(mut self, enabled: bool) -> Self {
        self.minus_one_payload_as_null = enabled;
        self
    }
}

impl Default for DecodeConfig {
    fn default() -> Self {
        DecodeConfig::new()
    }
}
