//! Drivers that pick the right entry point on the caller's behalf.
use std::{io::Read, iter::FusedIterator};

use crate::{
    error::ParserError,
    parser::{Cursor, Parser},
    token::{OwnedToken, TokenRef},
};

impl<R: Read> Parser<R> {
    /// Reads the next token through whichever entry point
    /// [`Parser::expected_cursor`] names.
    ///
    /// # Errors
    ///
    /// See [`Parser::parse_value`].
    pub fn next_token(&mut self) -> Result<TokenRef<'_>, ParserError> {
        match self.expected_cursor() {
            Cursor::Value => self.parse_value(),
            Cursor::DictEntry => self.parse_dict_entry(),
            Cursor::ListEntry => self.parse_list_entry(),
        }
    }

    /// Skips the rest of the innermost open container, including everything
    /// nested in it, up to and including its tail.
    ///
    /// Does nothing when no container is open.
    ///
    /// # Errors
    ///
    /// Returns the first error met while skipping.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use jsonpull::{Parser, TokenKind};
    ///
    /// let mut parser = Parser::new(&b"[[1, {\"a\": []}], 2]"[..]);
    /// parser.parse_value().unwrap();
    /// assert_eq!(parser.parse_list_entry().unwrap().kind, TokenKind::ListHead);
    /// parser.finish_container().unwrap();
    /// assert_eq!(parser.parse_list_entry().unwrap().kind, TokenKind::Number(2.0));
    /// ```
    pub fn finish_container(&mut self) -> Result<(), ParserError> {
        let depth = self.depth();
        if depth == 0 {
            return Ok(());
        }
        while self.depth() >= depth {
            self.next_token()?;
        }
        Ok(())
    }

    /// Iterates over the tokens of the rest of the current document.
    ///
    /// The iterator ends once no container is open any more, after the first
    /// error, or straight away when only whitespace is left before the end of
    /// input. Payloads are copied out, so tokens may be kept.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use jsonpull::{Parser, TokenKind};
    ///
    /// let mut parser = Parser::new(&b"[true, null] 7"[..]);
    /// let kinds: Vec<_> = parser.tokens().map(|t| t.unwrap().kind).collect();
    /// assert_eq!(
    ///     kinds,
    ///     [TokenKind::ListHead, TokenKind::True, TokenKind::Null, TokenKind::ListTail]
    /// );
    /// assert_eq!(parser.tokens().count(), 1);
    /// assert_eq!(parser.tokens().count(), 0);
    /// ```
    pub fn tokens(&mut self) -> Tokens<'_, R> {
        Tokens {
            parser: self,
            finished: false,
        }
    }
}

/// Iterator returned by [`Parser::tokens`].
#[derive(Debug)]
pub struct Tokens<'p, R> {
    parser: &'p mut Parser<R>,
    finished: bool,
}

impl<R: Read> Iterator for Tokens<'_, R> {
    type Item = Result<OwnedToken, ParserError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        if self.parser.depth() == 0 {
            if let Err(err) = self.parser.skip_whitespace() {
                self.finished = true;
                return Some(Err(err));
            }
            if self.parser.is_at_end() {
                self.finished = true;
                return None;
            }
        }
        let item = self.parser.next_token().map(TokenRef::into_owned);
        self.finished = item.is_err() || self.parser.depth() == 0;
        Some(item)
    }
}

impl<R: Read> FusedIterator for Tokens<'_, R> {}
