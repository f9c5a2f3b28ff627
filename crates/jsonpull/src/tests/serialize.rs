use serde_json::json;

use super::utils::collect_tokens;

#[test]
fn tokens_serialize_with_positions() {
    let tokens = collect_tokens(br#"{"k": [1.5, null]}"#).unwrap();
    let value = serde_json::to_value(&tokens).unwrap();
    assert_eq!(
        value,
        json!([
            {"kind": "DictHead", "line": 1, "column": 1},
            {"kind": {"DictKey": [107]}, "line": 1, "column": 2},
            {"kind": "ListHead", "line": 1, "column": 7},
            {"kind": {"Number": 1.5}, "line": 1, "column": 8},
            {"kind": "Null", "line": 1, "column": 13},
            {"kind": "ListTail", "line": 1, "column": 17},
            {"kind": "DictTail", "line": 1, "column": 18},
        ])
    );
}
