//! A pull-style, incremental JSON tokenizer over byte streams.
//!
//! [`Parser`] reads from any [`std::io::Read`] one byte at a time and hands
//! back exactly one [`Token`] per call. No document tree is ever built:
//! memory use is bounded by the largest single string or number plus one
//! frame per open container.
//!
//! The caller walks containers itself. After a [`TokenKind::ListHead`] it
//! calls [`Parser::parse_list_entry`] until [`TokenKind::ListTail`]; after a
//! [`TokenKind::DictHead`] it alternates [`Parser::parse_dict_entry`] (keys)
//! and [`Parser::parse_value`] (values) until [`TokenKind::DictTail`]. The
//! helpers [`Parser::next_token`], [`Parser::finish_container`] and
//! [`Parser::tokens`] pick the right entry point automatically.
//!
//! ```rust
//! use jsonpull::{Parser, TokenKind};
//!
//! let mut parser = Parser::new(&br#"{"id": 7, "tags": ["a", "b"]}"#[..]);
//! assert_eq!(parser.parse_value().unwrap().kind, TokenKind::DictHead);
//!
//! let key = parser.parse_dict_entry().unwrap();
//! assert_eq!(key.kind.as_bstr().unwrap(), "id");
//! assert_eq!(parser.parse_value().unwrap().kind.as_number(), Some(7.0));
//!
//! let key = parser.parse_dict_entry().unwrap();
//! assert_eq!(key.kind.as_bstr().unwrap(), "tags");
//! assert_eq!(parser.parse_value().unwrap().kind, TokenKind::ListHead);
//! parser.finish_container().unwrap();
//!
//! assert_eq!(parser.parse_dict_entry().unwrap().kind, TokenKind::DictTail);
//! assert!(parser.is_at_end());
//! ```
//!
//! Strings are delivered as raw bytes ([`BStr`]) with escapes decoded; the
//! input does not have to be UTF-8. `\u` escapes are rejected.
//!
//! Every failure is sticky: once an entry point has returned an error, all
//! entry points keep returning that same [`ParserError`].

mod cursor;
mod error;
mod literal;
mod options;
mod parser;
mod scratch;
mod token;
mod walk;

#[cfg(test)]
mod tests;

pub use bstr::{BStr, BString};
pub use error::{ErrorKind, ParserError};
pub use options::{DEFAULT_MAX_DEPTH, ParserOptions};
pub use parser::{Cursor, Parser};
pub use token::{OwnedToken, Token, TokenKind, TokenRef};
pub use walk::Tokens;
