//! Tokens handed back by the parser entry points.
//!
//! A token is generic over its string payload `S`. The entry points return
//! [`TokenRef`], which borrows the parser's accumulation buffer and is only
//! usable until the next call on the same parser. [`Token::into_owned`] turns
//! it into an [`OwnedToken`] that can be kept around.
//!
//! # Examples
//!
//! ```
//! use bstr::BStr;
//! use jsonpull::{Parser, TokenKind};
//!
//! let mut parser = Parser::new(&b"{\"name\": \"ada\"}"[..]);
//! assert_eq!(parser.parse_value().unwrap().kind, TokenKind::DictHead);
//!
//! let key = parser.parse_dict_entry().unwrap();
//! assert_eq!(key.kind, TokenKind::DictKey(BStr::new("name")));
//! assert_eq!((key.line, key.column), (1, 2));
//!
//! // Keep the key past the next call.
//! let key = key.into_owned();
//! let value = parser.parse_value().unwrap();
//! assert_eq!(value.kind.as_bstr(), Some(BStr::new("ada")));
//! assert_eq!(key.kind.as_bstr(), Some(BStr::new("name")));
//! ```
use bstr::{BStr, BString};

/// Token borrowing its payload from the parser that produced it.
pub type TokenRef<'p> = Token<&'p BStr>;

/// Token owning its payload.
pub type OwnedToken = Token<BString>;

/// One token together with the position where scanning of it began.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Token<S> {
    /// What was recognized.
    pub kind: TokenKind<S>,
    /// Line (1-based) of the token's first byte.
    pub line: usize,
    /// Column (1-based, in bytes) of the token's first byte.
    pub column: usize,
}

/// The kind of a [`Token`] and, for strings, keys and numbers, its payload.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TokenKind<S> {
    /// The literal `true`.
    True,
    /// The literal `false`.
    False,
    /// The literal `null`.
    Null,
    /// A string value with escapes decoded. The bytes are not necessarily
    /// UTF-8.
    String(S),
    /// A number value.
    Number(f64),
    /// A list was opened. Drive [`Parser::parse_list_entry`] until
    /// [`TokenKind::ListTail`].
    ///
    /// [`Parser::parse_list_entry`]: crate::Parser::parse_list_entry
    ListHead,
    /// The innermost list was closed.
    ListTail,
    /// A dict was opened. Drive [`Parser::parse_dict_entry`] until
    /// [`TokenKind::DictTail`].
    ///
    /// [`Parser::parse_dict_entry`]: crate::Parser::parse_dict_entry
    DictHead,
    /// A dict member's key. The member's value follows from
    /// [`Parser::parse_value`].
    ///
    /// [`Parser::parse_value`]: crate::Parser::parse_value
    DictKey(S),
    /// The innermost dict was closed.
    DictTail,
}

impl<S> TokenKind<S> {
    /// Returns `true` for [`TokenKind::ListHead`] and [`TokenKind::DictHead`].
    #[must_use]
    pub fn is_head(&self) -> bool {
        matches!(self, Self::ListHead | Self::DictHead)
    }

    /// Returns `true` for [`TokenKind::ListTail`] and [`TokenKind::DictTail`].
    #[must_use]
    pub fn is_tail(&self) -> bool {
        matches!(self, Self::ListTail | Self::DictTail)
    }

    /// Returns `true` for strings, numbers and literals.
    #[must_use]
    pub fn is_scalar(&self) -> bool {
        matches!(
            self,
            Self::True | Self::False | Self::Null | Self::String(_) | Self::Number(_)
        )
    }

    /// The numeric payload, if this is a [`TokenKind::Number`].
    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Applies `f` to the string payload, keeping everything else.
    pub fn map<T, F: FnOnce(S) -> T>(self, f: F) -> TokenKind<T> {
        match self {
            Self::True => TokenKind::True,
            Self::False => TokenKind::False,
            Self::Null => TokenKind::Null,
            Self::String(s) => TokenKind::String(f(s)),
            Self::Number(n) => TokenKind::Number(n),
            Self::ListHead => TokenKind::ListHead,
            Self::ListTail => TokenKind::ListTail,
            Self::DictHead => TokenKind::DictHead,
            Self::DictKey(s) => TokenKind::DictKey(f(s)),
            Self::DictTail => TokenKind::DictTail,
        }
    }
}

impl<S: AsRef<[u8]>> TokenKind<S> {
    /// The string payload of a [`TokenKind::String`] or
    /// [`TokenKind::DictKey`].
    #[must_use]
    pub fn as_bstr(&self) -> Option<&BStr> {
        match self {
            Self::String(s) | Self::DictKey(s) => Some(BStr::new(s.as_ref())),
            _ => None,
        }
    }
}

impl Token<&BStr> {
    /// Copies the payload out of the parser's buffer.
    #[must_use]
    pub fn into_owned(self) -> OwnedToken {
        Token {
            kind: self.kind.map(<BStr as ToOwned>::to_owned),
            line: self.line,
            column: self.column,
        }
    }
}
