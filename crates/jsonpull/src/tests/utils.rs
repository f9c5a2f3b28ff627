use std::io::{self, Write};

use crate::{OwnedToken, Parser, ParserError, ParserOptions, TokenKind};

/// Walks every document in `input` and collects the tokens.
pub(crate) fn collect_tokens(input: &[u8]) -> Result<Vec<OwnedToken>, ParserError> {
    collect_tokens_with(input, ParserOptions::default())
}

pub(crate) fn collect_tokens_with(
    input: &[u8],
    options: ParserOptions,
) -> Result<Vec<OwnedToken>, ParserError> {
    let mut parser = Parser::with_options(input, options);
    let mut tokens = Vec::new();
    while parser.depth() > 0 || !parser.is_at_end() {
        tokens.push(parser.next_token()?.into_owned());
    }
    Ok(tokens)
}

/// Drives `input` until the first error and returns it.
pub(crate) fn first_error(input: &[u8]) -> ParserError {
    let mut parser = Parser::new(input);
    for _ in 0..=2 * input.len() + 2 {
        if let Err(err) = parser.next_token() {
            return err;
        }
    }
    panic!("no error for {:?}", bstr::BStr::new(input));
}

pub(crate) fn write_escaped<W: Write>(bytes: &[u8], out: &mut W) -> io::Result<()> {
    out.write_all(b"\"")?;
    for &b in bytes {
        match b {
            b'"' => out.write_all(b"\\\"")?,
            b'\\' => out.write_all(b"\\\\")?,
            b'\n' => out.write_all(b"\\n")?,
            b'\r' => out.write_all(b"\\r")?,
            0x08 => out.write_all(b"\\b")?,
            0x0C => out.write_all(b"\\f")?,
            _ => out.write_all(&[b])?,
        }
    }
    out.write_all(b"\"")
}

/// Renders tokens back into compact JSON. Top-level documents are separated
/// by a single space.
pub(crate) fn write_rendered_tokens<W: Write>(tokens: &[OwnedToken], out: &mut W) -> io::Result<()> {
    // One entry per open container: has it written a member yet?
    let mut open: Vec<bool> = Vec::new();
    let mut after_key = false;
    let mut wrote_document = false;

    for token in tokens {
        if token.kind.is_tail() {
            open.pop();
            out.write_all(if token.kind == TokenKind::ListTail { b"]" } else { b"}" })?;
            continue;
        }

        if after_key {
            after_key = false;
        } else if let Some(has_members) = open.last_mut() {
            if *has_members {
                out.write_all(b",")?;
            }
            *has_members = true;
        } else if wrote_document {
            out.write_all(b" ")?;
        }
        if open.is_empty() {
            wrote_document = true;
        }

        match &token.kind {
            TokenKind::True => out.write_all(b"true")?,
            TokenKind::False => out.write_all(b"false")?,
            TokenKind::Null => out.write_all(b"null")?,
            TokenKind::Number(n) => write!(out, "{n}")?,
            TokenKind::String(s) => write_escaped(s, out)?,
            TokenKind::DictKey(k) => {
                write_escaped(k, out)?;
                out.write_all(b":")?;
                after_key = true;
            }
            TokenKind::ListHead => {
                out.write_all(b"[")?;
                open.push(false);
            }
            TokenKind::DictHead => {
                out.write_all(b"{")?;
                open.push(false);
            }
            TokenKind::ListTail | TokenKind::DictTail => unreachable!(),
        }
    }
    Ok(())
}

pub(crate) fn render_tokens(tokens: &[OwnedToken]) -> Vec<u8> {
    let mut rendered = Vec::new();
    write_rendered_tokens(tokens, &mut rendered).unwrap();
    rendered
}

#[test]
fn rendering_restores_compact_json() {
    let input = br#" { "a" : [ 1 , true , { } ] , "b\n" : "x\"y" } [ ] 3 "#;
    let tokens = collect_tokens(input).unwrap();
    assert_eq!(
        bstr::BStr::new(&render_tokens(&tokens)),
        bstr::BStr::new(br#"{"a":[1,true,{}],"b\n":"x\"y"} [] 3"#)
    );
}
