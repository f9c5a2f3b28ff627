use std::io;

use thiserror::Error;

use crate::parser::Cursor;

/// A failure latched by the parser.
///
/// Once a `ParserError` has been returned, the parser is stuck: every later
/// call returns an identical error and no further input is read.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{kind} at {line}:{column}")]
pub struct ParserError {
    /// What went wrong.
    pub kind: ErrorKind,
    /// Line (1-based) of the input byte where the failure was detected.
    pub line: usize,
    /// Column (1-based, in bytes) of the input byte where the failure was
    /// detected.
    pub column: usize,
}

impl ParserError {
    pub(crate) fn new(kind: ErrorKind, line: usize, column: usize) -> Self {
        Self { kind, line, column }
    }

    /// Returns `true` for grammar violations.
    #[must_use]
    pub fn is_syntax(&self) -> bool {
        matches!(self.kind, ErrorKind::Syntax(_))
    }
}

/// The category of a [`ParserError`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// Reading from the underlying stream failed.
    #[error("i/o error: {message}")]
    Io {
        /// Kind reported by the reader.
        kind: io::ErrorKind,
        /// Rendered message of the original `io::Error`.
        message: String,
    },
    /// The accumulation buffer could not grow.
    #[error("out of memory")]
    OutOfMemory,
    /// A string or number exceeded `ParserOptions::max_token_len`.
    #[error("token exceeds the limit of {limit} bytes")]
    TokenTooLong {
        /// The configured limit.
        limit: usize,
    },
    /// A container was opened beyond `ParserOptions::max_depth`.
    #[error("nesting depth exceeds the limit of {limit}")]
    DepthLimitExceeded {
        /// The configured limit.
        limit: usize,
    },
    /// The caller invoked an entry point that does not match the innermost
    /// open container.
    #[error("{requested} called where {expected} was expected")]
    Misuse {
        /// The entry point the parser state required.
        expected: Cursor,
        /// The entry point that was called.
        requested: Cursor,
    },
    /// The input violates the JSON grammar.
    #[error("{0}")]
    Syntax(String),
}

impl From<io::Error> for ErrorKind {
    fn from(err: io::Error) -> Self {
        ErrorKind::Io {
            kind: err.kind(),
            message: err.to_string(),
        }
    }
}
