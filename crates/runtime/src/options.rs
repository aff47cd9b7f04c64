//! Decoder limits.

/// Default nesting depth accepted by the decoder.
pub const DEFAULT_RECURSION_LIMIT: u32 = 100;
/// Default upper bound on a top-level encoded message (64 MiB).
pub const DEFAULT_MAX_MESSAGE_SIZE: usize = 64 * 1024 * 1024;

/// Limits applied while decoding untrusted input.
///
/// ```
/// use vision_proto_runtime::DecodeOptions;
///
/// let options = DecodeOptions::default()
///     .with_recursion_limit(16)
///     .with_max_message_size(1 << 20);
/// assert_eq!(options.recursion_limit, 16);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeOptions {
    /// Maximum depth of nested messages and groups.
    pub recursion_limit: u32,
    /// Maximum size in bytes of the top-level input.
    pub max_message_size: usize,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            recursion_limit: DEFAULT_RECURSION_LIMIT,
            max_message_size: DEFAULT_MAX_MESSAGE_SIZE,
        }
    }
}

impl DecodeOptions {
    pub fn with_recursion_limit(mut self, limit: u32) -> Self {
        self.recursion_limit = limit;
        self
    }

    pub fn with_max_message_size(mut self, size: usize) -> Self {
        self.max_message_size = size;
        self
    }
}
