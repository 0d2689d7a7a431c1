use crate::grammar::MAX_RULE_LEN;

/// Configuration for a [`Parser`](crate::Parser).
///
/// # Default
///
/// `context_width` is [`MAX_RULE_LEN`], `read_chunk` is 8 KiB.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserOptions {
    /// How many stack tokens a structural error message shows.
    ///
    /// The window ends at the most recent reduction, so the default covers
    /// one complete right-hand side. Zero suppresses structural error
    /// reports altogether.
    pub context_width: usize,

    /// How many bytes to request per read when feeding from a reader.
    ///
    /// Values below four are raised to four so that any UTF-8 sequence fits.
    pub read_chunk: usize,
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            context_width: MAX_RULE_LEN,
            read_chunk: 8 * 1024,
        }
    }
}
