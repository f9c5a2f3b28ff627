use std::{fs, io};

use crate::{BStr, Parser, ParserOptions, TokenKind};

#[test]
fn open_reads_a_file() {
    let path = std::env::temp_dir().join(format!("jsonpull-open-{}.json", std::process::id()));
    fs::write(&path, b"{\"path\": \"on disk\"}\n").unwrap();

    let mut parser = Parser::open(&path).unwrap();
    assert_eq!(parser.parse_value().unwrap().kind, TokenKind::DictHead);
    assert_eq!(
        parser.parse_dict_entry().unwrap().kind.as_bstr(),
        Some(BStr::new("path"))
    );
    assert_eq!(
        parser.parse_value().unwrap().kind.as_bstr(),
        Some(BStr::new("on disk"))
    );
    assert_eq!(parser.parse_dict_entry().unwrap().kind, TokenKind::DictTail);
    assert!(parser.is_at_end());

    drop(parser);
    fs::remove_file(&path).unwrap();
}

#[test]
fn open_with_keeps_options() {
    let path = std::env::temp_dir().join(format!("jsonpull-open-with-{}.json", std::process::id()));
    fs::write(&path, b"[[0]]").unwrap();

    let options = ParserOptions {
        max_depth: Some(1),
        ..Default::default()
    };
    let mut parser = Parser::open_with(&path, options).unwrap();
    assert_eq!(parser.options().max_depth, Some(1));
    parser.parse_value().unwrap();
    assert!(parser.parse_list_entry().is_err());

    drop(parser);
    fs::remove_file(&path).unwrap();
}

#[test]
fn open_missing_file() {
    let path = std::env::temp_dir().join("jsonpull-definitely-missing/none.json");
    let err = Parser::open(path).unwrap_err();
    assert_eq!(err.kind(), io::ErrorKind::NotFound);
}
