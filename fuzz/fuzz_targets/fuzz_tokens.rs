#![no_main]
use jsonpull::{OwnedToken, Parser, ParserOptions, TokenKind};
use libfuzzer_sys::fuzz_target;
use serde_json::{Map, Value};

/// Walks `data` to the end or to the first error, checking that errors stick.
fn walk(data: &[u8]) -> Result<Vec<OwnedToken>, jsonpull::ParserError> {
    let options = ParserOptions {
        max_depth: None,
        ..Default::default()
    };
    let mut parser = Parser::with_options(data, options);
    let mut tokens = Vec::new();
    // Every byte yields at most a head and the token that consumes it.
    for _ in 0..=2 * data.len() + 2 {
        if parser.depth() == 0 && parser.is_at_end() {
            return Ok(tokens);
        }
        match parser.next_token() {
            Ok(token) => tokens.push(token.into_owned()),
            Err(err) => {
                assert!(!parser.is_at_end());
                assert_eq!(parser.parse_value().unwrap_err(), err);
                assert_eq!(parser.parse_dict_entry().unwrap_err(), err);
                assert_eq!(parser.parse_list_entry().unwrap_err(), err);
                return Err(err);
            }
        }
    }
    panic!("walk did not terminate");
}

fn build(tokens: &mut std::vec::IntoIter<OwnedToken>) -> Value {
    let token = tokens.next().expect("truncated token stream");
    match token.kind {
        TokenKind::Null => Value::Null,
        TokenKind::True => Value::Bool(true),
        TokenKind::False => Value::Bool(false),
        TokenKind::Number(n) => Value::from(n),
        TokenKind::String(s) => Value::String(String::from_utf8(s.into()).expect("utf-8")),
        TokenKind::ListHead => {
            let mut items = Vec::new();
            loop {
                let rest = tokens.as_slice();
                if rest.first().map(|t| &t.kind) == Some(&TokenKind::ListTail) {
                    tokens.next();
                    return Value::Array(items);
                }
                items.push(build(tokens));
            }
        }
        TokenKind::DictHead => {
            let mut map = Map::new();
            loop {
                match tokens.next().expect("truncated dict").kind {
                    TokenKind::DictTail => return Value::Object(map),
                    TokenKind::DictKey(key) => {
                        let key = String::from_utf8(key.into()).expect("utf-8");
                        let value = build(tokens);
                        map.insert(key, value);
                    }
                    other => panic!("unexpected {other:?} in dict"),
                }
            }
        }
        other => panic!("unexpected {other:?}"),
    }
}

/// serde_json's default float parsing may be off by an ulp.
fn close(x: f64, y: f64) -> bool {
    let diff = (x - y).abs();
    x == y || diff < f64::MIN_POSITIVE || diff <= 4.0 * f64::EPSILON * x.abs().max(y.abs())
}

fn same(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => match (x.as_f64(), y.as_f64()) {
            (Some(x), Some(y)) => close(x, y),
            _ => false,
        },
        (Value::Array(x), Value::Array(y)) => {
            x.len() == y.len() && x.iter().zip(y).all(|(x, y)| same(x, y))
        }
        (Value::Object(x), Value::Object(y)) => {
            x.len() == y.len() && x.iter().all(|(k, v)| y.get(k).is_some_and(|w| same(v, w)))
        }
        _ => a == b,
    }
}

fuzz_target!(|data: &[u8]| {
    let walked = walk(data);

    // `\u` and `\t` escapes are rejected on purpose.
    if data.windows(2).any(|w| w == b"\\u" || w == b"\\t") {
        return;
    }
    let Ok(expected) = serde_json::from_slice::<Value>(data) else {
        return;
    };
    let tokens = walked.expect("serde_json accepted input that jsonpull rejected");
    let actual = build(&mut tokens.into_iter());
    assert!(same(&actual, &expected), "{actual} != {expected}");
});
