//! The pull parser.
//!
//! [`Parser`] hands out one token per call. Containers are never walked by
//! the parser itself: a [`TokenKind::DictHead`] or [`TokenKind::ListHead`]
//! obliges the caller to drive [`Parser::parse_dict_entry`] or
//! [`Parser::parse_list_entry`] until the matching tail, and every
//! [`TokenKind::DictKey`] must be followed by a [`Parser::parse_value`] call
//! for the member's value. The parser tracks the open containers and rejects
//! a call to the wrong entry point with [`ErrorKind::Misuse`].
//!
//! # Examples
//!
//! ```rust
//! use jsonpull::{Parser, TokenKind};
//!
//! let mut parser = Parser::new(&b"[1, 2]"[..]);
//! assert_eq!(parser.parse_value().unwrap().kind, TokenKind::ListHead);
//! assert_eq!(parser.parse_list_entry().unwrap().kind, TokenKind::Number(1.0));
//! assert_eq!(parser.parse_list_entry().unwrap().kind, TokenKind::Number(2.0));
//! assert_eq!(parser.parse_list_entry().unwrap().kind, TokenKind::ListTail);
//! assert!(parser.is_at_end());
//! ```
use std::{
    fs::File,
    io::{BufReader, Read},
    path::Path,
};

use tracing::{debug, trace};

use crate::{
    cursor::{ByteCursor, Position},
    error::{ErrorKind, ParserError},
    options::ParserOptions,
    scratch::ScratchBuffer,
    token::{Token, TokenKind, TokenRef},
};

mod frames;
mod scan;

pub use frames::Cursor;
use frames::FrameStack;

/// What a scan recognized; the payload of strings and keys stays in the
/// scratch buffer until the token is built.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Scanned {
    True,
    False,
    Null,
    String,
    Number(f64),
    ListHead,
    ListTail,
    DictHead,
    DictKey,
    DictTail,
}

impl Scanned {
    fn is_head(self) -> bool {
        matches!(self, Scanned::ListHead | Scanned::DictHead)
    }
}

/// A pull-style JSON tokenizer over a byte stream.
///
/// One `Parser` walks one input stream. The stream may hold several
/// top-level values one after another; call [`Parser::parse_value`] for each
/// until [`Parser::is_at_end`] returns `true`.
///
/// All failures are sticky: after the first `Err`, every entry point returns
/// the same error and no more input is read.
#[derive(Debug)]
pub struct Parser<R> {
    cursor: ByteCursor<R>,
    scratch: ScratchBuffer,
    frames: FrameStack,
    options: ParserOptions,
}

impl Parser<BufReader<File>> {
    /// Opens `path` with default options.
    ///
    /// # Errors
    ///
    /// Returns the error of [`File::open`]. Read errors after opening are
    /// reported through the entry points instead.
    pub fn open(path: impl AsRef<Path>) -> std::io::Result<Self> {
        Self::open_with(path, ParserOptions::default())
    }

    /// Opens `path` with the given options.
    ///
    /// # Errors
    ///
    /// Returns the error of [`File::open`].
    pub fn open_with(path: impl AsRef<Path>, options: ParserOptions) -> std::io::Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)?;
        debug!(path = %path.display(), "opened document");
        Ok(Self::with_options(BufReader::new(file), options))
    }
}

impl<R: Read> Parser<R> {
    /// Creates a parser over `reader` with default options.
    ///
    /// The first byte is read immediately. Wrap unbuffered readers in a
    /// [`BufReader`]: the parser reads one byte at a time.
    #[must_use]
    pub fn new(reader: R) -> Self {
        Self::with_options(reader, ParserOptions::default())
    }

    /// Creates a parser over `reader` with the given options.
    #[must_use]
    pub fn with_options(reader: R, options: ParserOptions) -> Self {
        Self {
            cursor: ByteCursor::new(reader),
            scratch: ScratchBuffer::new(options.initial_buffer_capacity, options.max_token_len),
            frames: FrameStack::new(),
            options,
        }
    }

    /// Reads the next value.
    ///
    /// Scalars are returned complete. For `{` and `[` the parser returns
    /// [`TokenKind::DictHead`] / [`TokenKind::ListHead`] without consuming the
    /// bracket; the container's members are then read with
    /// [`Parser::parse_dict_entry`] / [`Parser::parse_list_entry`].
    ///
    /// # Errors
    ///
    /// Returns the latched [`ParserError`] on malformed input, read failure,
    /// or when a list member or a dict key is expected instead of a value.
    pub fn parse_value(&mut self) -> Result<TokenRef<'_>, ParserError> {
        self.enter(Cursor::Value)?;
        let scanned = self.scan_value();
        self.emit(Cursor::Value, scanned)
    }

    /// Reads the next member key of the innermost dict, or its tail.
    ///
    /// After a [`TokenKind::DictKey`], call [`Parser::parse_value`] for the
    /// member's value before calling this again.
    ///
    /// # Errors
    ///
    /// Returns the latched [`ParserError`] on malformed input, read failure,
    /// or when the innermost open container is not a dict awaiting a key.
    pub fn parse_dict_entry(&mut self) -> Result<TokenRef<'_>, ParserError> {
        self.enter(Cursor::DictEntry)?;
        let scanned = self.scan_dict_entry();
        self.emit(Cursor::DictEntry, scanned)
    }

    /// Reads the next member value of the innermost list, or its tail.
    ///
    /// # Errors
    ///
    /// Returns the latched [`ParserError`] on malformed input, read failure,
    /// or when the innermost open container is not a list.
    pub fn parse_list_entry(&mut self) -> Result<TokenRef<'_>, ParserError> {
        self.enter(Cursor::ListEntry)?;
        let scanned = self.scan_list_entry();
        self.emit(Cursor::ListEntry, scanned)
    }

    /// `true` once the whole input has been consumed without failure.
    #[must_use]
    pub fn is_at_end(&self) -> bool {
        self.cursor.is_at_end()
    }

    /// Number of containers currently open.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.frames.depth()
    }

    /// The entry point that has to be called next.
    #[must_use]
    pub fn expected_cursor(&self) -> Cursor {
        self.frames.expected_cursor()
    }

    /// The options this parser was created with.
    #[must_use]
    pub fn options(&self) -> &ParserOptions {
        &self.options
    }

    /// Releases the parser and returns the underlying reader.
    pub fn into_inner(self) -> R {
        self.cursor.into_inner()
    }

    fn enter(&mut self, requested: Cursor) -> Result<(), ParserError> {
        if let Some(err) = self.cursor.failure() {
            return Err(err.clone());
        }
        let expected = self.frames.expected_cursor();
        if expected != requested {
            return Err(self.cursor.fail(ErrorKind::Misuse {
                expected,
                requested,
            }));
        }
        Ok(())
    }

    fn emit(
        &mut self,
        via: Cursor,
        scanned: Result<(Position, Scanned), ParserError>,
    ) -> Result<TokenRef<'_>, ParserError> {
        let (start, scanned) = scanned?;

        if scanned.is_head() {
            if let Some(limit) = self.options.max_depth {
                if self.frames.depth() >= limit {
                    return Err(self.cursor.fail(ErrorKind::DepthLimitExceeded { limit }));
                }
            }
        }

        self.skip_whitespace()?;
        self.frames.record(via, scanned);

        let kind = match scanned {
            Scanned::True => TokenKind::True,
            Scanned::False => TokenKind::False,
            Scanned::Null => TokenKind::Null,
            Scanned::String => TokenKind::String(self.scratch.as_bstr()),
            Scanned::Number(n) => TokenKind::Number(n),
            Scanned::ListHead => TokenKind::ListHead,
            Scanned::ListTail => TokenKind::ListTail,
            Scanned::DictHead => TokenKind::DictHead,
            Scanned::DictKey => TokenKind::DictKey(self.scratch.as_bstr()),
            Scanned::DictTail => TokenKind::DictTail,
        };
        trace!(
            line = start.line,
            column = start.column,
            ?kind,
            depth = self.frames.depth(),
            "token"
        );
        Ok(Token {
            kind,
            line: start.line,
            column: start.column,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parser_is_send_when_reader_is() {
        fn assert_send<T: Send>() {}
        assert_send::<Parser<&[u8]>>();
        assert_send::<Parser<BufReader<File>>>();
    }

    #[test]
    fn into_inner_returns_unread_input() {
        let mut parser = Parser::new(&b"1 2"[..]);
        assert_eq!(parser.parse_value().unwrap().kind, TokenKind::Number(1.0));
        // The lookahead `2` has already been pulled from the reader.
        assert_eq!(parser.into_inner(), b"");
    }

    #[test]
    fn options_are_kept() {
        let options = ParserOptions {
            max_depth: None,
            ..Default::default()
        };
        let parser = Parser::with_options(&b""[..], options);
        assert_eq!(parser.options(), &options);
    }
}
