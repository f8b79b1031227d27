use crate::{Token, parse_tokens};

const SAMPLE_JSON: &str = r#"[
    {"kind": "number", "lexeme": "1", "line": 1, "column": 1, "offset": 0},
    {"kind": "op", "lexeme": "+", "line": 1, "column": 3, "offset": 2},
    {"kind": "number", "lexeme": "2", "line": 1, "column": 5}
]"#;

#[test]
fn parse_token_stream() {
    let tokens = parse_tokens(SAMPLE_JSON).unwrap();

    assert_eq!(tokens.len(), 3);
    assert_eq!(tokens[0], Token::new("number", "1", 1, 1, 0));
    assert_eq!(tokens[1].lexeme, "+");
    assert_eq!(tokens[1].column, 3);
}

#[test]
fn offset_defaults_to_zero() {
    let tokens = parse_tokens(SAMPLE_JSON).unwrap();
    assert_eq!(tokens[2].offset, 0);
}

#[test]
fn rejects_missing_lexeme() {
    let err = parse_tokens(r#"[{"kind": "number", "line": 1, "column": 1}]"#);
    assert!(err.is_err());
}

#[test]
fn display_shows_kind_and_lexeme() {
    let token = Token::new("identifier", "foo", 2, 4, 10);
    assert_eq!(token.to_string(), r#"identifier "foo""#);
}
