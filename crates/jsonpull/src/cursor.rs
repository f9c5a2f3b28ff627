//! Byte cursor: one byte of lookahead over a reader.
//!
//! The cursor owns the reader, the current lookahead and the line/column of
//! that lookahead. End-of-input and failures are terminal: once reached,
//! [`ByteCursor::advance`] no longer touches the reader. A latched failure is
//! never replaced by a later one.
use std::io::{self, Read};

use tracing::debug;

use crate::error::{ErrorKind, ParserError};

/// Current state of the lookahead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Lookahead {
    /// The next unconsumed input byte.
    Byte(u8),
    /// The reader reported end of input.
    EndOfInput,
    /// A failure was latched; nothing is read any more.
    Failed(ParserError),
}

/// Line and column of an input byte, both 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Position {
    pub(crate) line: usize,
    pub(crate) column: usize,
}

#[derive(Debug)]
pub(crate) struct ByteCursor<R> {
    reader: R,
    lookahead: Lookahead,
    line: usize,
    column: usize,
}

impl<R: Read> ByteCursor<R> {
    /// Wraps `reader` and reads the first lookahead byte.
    pub(crate) fn new(reader: R) -> Self {
        let mut cursor = Self {
            reader,
            lookahead: Lookahead::EndOfInput,
            line: 1,
            column: 1,
        };
        cursor.lookahead = cursor.read_byte();
        cursor
    }

    fn read_byte(&mut self) -> Lookahead {
        let mut byte = [0u8; 1];
        loop {
            match self.reader.read(&mut byte) {
                Ok(0) => return Lookahead::EndOfInput,
                Ok(_) => return Lookahead::Byte(byte[0]),
                Err(err) if err.kind() == io::ErrorKind::Interrupted => {}
                Err(err) => {
                    debug!(line = self.line, column = self.column, error = %err, "read failed");
                    return Lookahead::Failed(ParserError::new(
                        err.into(),
                        self.line,
                        self.column,
                    ));
                }
            }
        }
    }

    /// Moves past the current byte. No-op in a terminal state.
    pub(crate) fn advance(&mut self) {
        let Lookahead::Byte(current) = self.lookahead else {
            return;
        };
        if current == b'\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        self.lookahead = self.read_byte();
    }

    /// The lookahead byte, `None` at end of input, or the latched failure.
    #[inline]
    pub(crate) fn peek(&self) -> Result<Option<u8>, ParserError> {
        match &self.lookahead {
            Lookahead::Byte(b) => Ok(Some(*b)),
            Lookahead::EndOfInput => Ok(None),
            Lookahead::Failed(err) => Err(err.clone()),
        }
    }

    /// Latches `kind` at the current position and returns the latched error.
    ///
    /// If a failure is already latched it is kept and returned instead.
    pub(crate) fn fail(&mut self, kind: ErrorKind) -> ParserError {
        if let Lookahead::Failed(err) = &self.lookahead {
            return err.clone();
        }
        let err = ParserError::new(kind, self.line, self.column);
        debug!(%err, "parser failed");
        self.lookahead = Lookahead::Failed(err.clone());
        err
    }

    pub(crate) fn failure(&self) -> Option<&ParserError> {
        match &self.lookahead {
            Lookahead::Failed(err) => Some(err),
            _ => None,
        }
    }

    pub(crate) fn is_at_end(&self) -> bool {
        self.lookahead == Lookahead::EndOfInput
    }

    pub(crate) fn position(&self) -> Position {
        Position {
            line: self.line,
            column: self.column,
        }
    }

    pub(crate) fn into_inner(self) -> R {
        self.reader
    }
}
