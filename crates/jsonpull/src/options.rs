/// Default for [`ParserOptions::max_depth`].
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Configuration options for the pull parser.
///
/// # Examples
///
/// ```rust
/// use jsonpull::{Parser, ParserOptions};
///
/// let options = ParserOptions {
///     max_depth: Some(16),
///     max_token_len: Some(64 * 1024),
///     ..Default::default()
/// };
/// let parser = Parser::with_options(&b"[1, 2, 3]"[..], options);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserOptions {
    /// Maximum number of containers that may be open at the same time.
    ///
    /// The parser itself never recurses, but callers that walk containers
    /// recursively can exhaust their own stack on adversarial input. Opening a
    /// container beyond this limit fails with
    /// [`ErrorKind::DepthLimitExceeded`](crate::ErrorKind::DepthLimitExceeded).
    /// `None` disables the check.
    ///
    /// # Default
    ///
    /// `Some(128)`
    pub max_depth: Option<usize>,

    /// Maximum size in bytes of a single decoded string or number.
    ///
    /// Exceeding it fails with
    /// [`ErrorKind::TokenTooLong`](crate::ErrorKind::TokenTooLong). `None`
    /// lets the accumulation buffer grow until allocation fails.
    ///
    /// # Default
    ///
    /// `None`
    pub max_token_len: Option<usize>,

    /// Capacity reserved for the accumulation buffer up front.
    ///
    /// # Default
    ///
    /// `0`
    pub initial_buffer_capacity: usize,
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            max_depth: Some(DEFAULT_MAX_DEPTH),
            max_token_len: None,
            initial_buffer_capacity: 0,
        }
    }
}
