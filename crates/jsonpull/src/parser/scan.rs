//! Scanners behind the entry points.
//!
//! Every scanner leaves the cursor on the first byte it did not consume. On
//! failure the error is latched on the cursor before it is returned, so a
//! later call sees the same error.
use std::io::Read;

use super::{Parser, Scanned};
use crate::{
    cursor::Position,
    error::{ErrorKind, ParserError},
    literal::{ExpectedLiteral, Literal, Step},
};

type ScanResult = Result<(Position, Scanned), ParserError>;

/// Bytes that may directly follow a literal.
fn ends_literal(byte: u8) -> bool {
    byte.is_ascii_whitespace() || matches!(byte, b',' | b']' | b'}')
}

impl<R: Read> Parser<R> {
    fn syntax_error(&mut self, message: impl Into<String>) -> ParserError {
        self.cursor.fail(ErrorKind::Syntax(message.into()))
    }

    fn unexpected(&mut self, byte: Option<u8>) -> ParserError {
        match byte {
            Some(b) => self.syntax_error(format!("unexpected character '{}'", b.escape_ascii())),
            None => self.syntax_error("unexpected end of file"),
        }
    }

    fn push_byte(&mut self, byte: u8) -> Result<(), ParserError> {
        self.scratch
            .push(byte)
            .map_err(|err| self.cursor.fail(err.into()))
    }

    /// Copies the lookahead into the scratch buffer and advances past it.
    fn consume(&mut self) -> Result<(), ParserError> {
        if let Some(b) = self.cursor.peek()? {
            self.push_byte(b)?;
        }
        self.cursor.advance();
        Ok(())
    }

    pub(crate) fn skip_whitespace(&mut self) -> Result<(), ParserError> {
        while let Some(b) = self.cursor.peek()? {
            if !b.is_ascii_whitespace() {
                break;
            }
            self.cursor.advance();
        }
        Ok(())
    }

    pub(super) fn scan_value(&mut self) -> ScanResult {
        self.skip_whitespace()?;
        let start = self.cursor.position();
        let scanned = match self.cursor.peek()? {
            Some(b'{') => Scanned::DictHead,
            Some(b'[') => Scanned::ListHead,
            Some(b'"') => {
                self.scan_string()?;
                Scanned::String
            }
            Some(b'-' | b'0'..=b'9') => Scanned::Number(self.scan_number()?),
            Some(lead) => match Literal::from_lead(lead) {
                Some(literal) => {
                    self.scan_literal(literal)?;
                    match literal {
                        Literal::Null => Scanned::Null,
                        Literal::True => Scanned::True,
                        Literal::False => Scanned::False,
                    }
                }
                None => return Err(self.unexpected(Some(lead))),
            },
            None => return Err(self.unexpected(None)),
        };
        Ok((start, scanned))
    }

    pub(super) fn scan_dict_entry(&mut self) -> ScanResult {
        self.skip_whitespace()?;
        let opening = !self.frames.last().is_some_and(|frame| frame.is_opened());
        let start = self.cursor.position();
        match self.cursor.peek()? {
            Some(b'{') if opening => {
                self.cursor.advance();
                self.skip_whitespace()?;
                if self.cursor.peek()? == Some(b'}') {
                    let start = self.cursor.position();
                    self.cursor.advance();
                    return Ok((start, Scanned::DictTail));
                }
            }
            Some(b'}') if !opening => {
                self.cursor.advance();
                return Ok((start, Scanned::DictTail));
            }
            Some(b',') if !opening => self.cursor.advance(),
            Some(_) => return Err(self.syntax_error("expected ',' after entry")),
            None => return Err(self.unexpected(None)),
        }

        self.skip_whitespace()?;
        let start = self.cursor.position();
        self.scan_string()?;

        self.skip_whitespace()?;
        if self.cursor.peek()? != Some(b':') {
            return Err(self.syntax_error("expected ':' after dictionary key"));
        }
        self.cursor.advance();
        Ok((start, Scanned::DictKey))
    }

    pub(super) fn scan_list_entry(&mut self) -> ScanResult {
        self.skip_whitespace()?;
        let opening = !self.frames.last().is_some_and(|frame| frame.is_opened());
        let start = self.cursor.position();
        match self.cursor.peek()? {
            Some(b'[') if opening => {
                self.cursor.advance();
                self.skip_whitespace()?;
                if self.cursor.peek()? == Some(b']') {
                    let start = self.cursor.position();
                    self.cursor.advance();
                    return Ok((start, Scanned::ListTail));
                }
            }
            Some(b']') if !opening => {
                self.cursor.advance();
                return Ok((start, Scanned::ListTail));
            }
            Some(b',') if !opening => self.cursor.advance(),
            Some(_) => return Err(self.syntax_error("expected ',' after entry")),
            None => return Err(self.unexpected(None)),
        }
        self.scan_value()
    }

    /// Scans a string into the scratch buffer, decoding escapes.
    fn scan_string(&mut self) -> Result<(), ParserError> {
        if self.cursor.peek()? != Some(b'"') {
            return Err(self.syntax_error("expected string starting with '\"'"));
        }
        self.cursor.advance();
        self.scratch.reset();
        loop {
            match self.cursor.peek()? {
                Some(b'"') => {
                    self.cursor.advance();
                    return Ok(());
                }
                Some(b'\\') => {
                    self.cursor.advance();
                    self.scan_escape()?;
                }
                Some(_) => self.consume()?,
                None => return Err(self.syntax_error("unexpected end of file")),
            }
        }
    }

    fn scan_escape(&mut self) -> Result<(), ParserError> {
        let decoded = match self.cursor.peek()? {
            Some(b'b') => 0x08,
            Some(b'f') => 0x0C,
            Some(b'n') => b'\n',
            Some(b'r') => b'\r',
            Some(b @ (b'"' | b'\\' | b'/')) => b,
            Some(b'u' | b'U') => return Err(self.syntax_error("unicode is not supported yet")),
            Some(other) => {
                return Err(self.syntax_error(format!(
                    "invalid escaped character '{}'",
                    other.escape_ascii()
                )));
            }
            None => return Err(self.syntax_error("unexpected end of file")),
        };
        self.push_byte(decoded)?;
        self.cursor.advance();
        Ok(())
    }

    fn scan_digits(&mut self) -> Result<(), ParserError> {
        if !self.cursor.peek()?.is_some_and(|b| b.is_ascii_digit()) {
            return Err(self.syntax_error("expected digit"));
        }
        while self.cursor.peek()?.is_some_and(|b| b.is_ascii_digit()) {
            self.consume()?;
        }
        Ok(())
    }

    /// Scans `-? (0 | digit+) (. digit+)? ([eE] [+-]? digit+)?`.
    fn scan_number(&mut self) -> Result<f64, ParserError> {
        self.scratch.reset();
        if self.cursor.peek()? == Some(b'-') {
            self.consume()?;
        }
        if self.cursor.peek()? == Some(b'0') {
            self.consume()?;
        } else {
            self.scan_digits()?;
        }
        if self.cursor.peek()? == Some(b'.') {
            self.consume()?;
            self.scan_digits()?;
        }
        if matches!(self.cursor.peek()?, Some(b'e' | b'E')) {
            self.consume()?;
            if matches!(self.cursor.peek()?, Some(b'+' | b'-')) {
                self.consume()?;
            }
            self.scan_digits()?;
        }

        let parsed = core::str::from_utf8(self.scratch.as_bytes())
            .ok()
            .and_then(|text| text.parse::<f64>().ok());
        match parsed {
            Some(n) => Ok(n),
            None => {
                let message = format!(
                    "failed to parse a number from '{}'",
                    self.scratch.as_bstr()
                );
                Err(self.syntax_error(message))
            }
        }
    }

    fn scan_literal(&mut self, literal: Literal) -> Result<(), ParserError> {
        let mut expected = ExpectedLiteral::new(literal);
        loop {
            let step = match self.cursor.peek()? {
                Some(b) => expected.step(b),
                None => Step::Reject,
            };
            match step {
                Step::NeedMore => self.cursor.advance(),
                Step::Done => {
                    self.cursor.advance();
                    break;
                }
                Step::Reject => return Err(self.expected_literal(expected)),
            }
        }
        match self.cursor.peek()? {
            Some(b) if !ends_literal(b) => Err(self.expected_literal(expected)),
            _ => Ok(()),
        }
    }

    fn expected_literal(&mut self, expected: ExpectedLiteral) -> ParserError {
        self.syntax_error(format!("expected '{}'", expected.literal().text()))
    }
}
