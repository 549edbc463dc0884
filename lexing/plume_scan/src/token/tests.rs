use pretty_assertions::assert_eq;

use super::{Token, TokenKind};

#[test]
fn token_exposes_all_fields() {
    let token = Token::new(TokenKind::Word, "name", 2, 7);
    assert_eq!(token.kind(), TokenKind::Word);
    assert_eq!(token.value(), "name");
    assert_eq!(token.line(), 2);
    assert_eq!(token.column(), 7);
}

#[test]
fn tokens_with_equal_fields_are_equal() {
    let a = Token::new(TokenKind::Symbol, "<=", 1, 1);
    let b = Token::new(TokenKind::Symbol, "<=", 1, 1);
    assert_eq!(a, b);
}

#[test]
fn display_includes_kind_value_and_position() {
    let token = Token::new(TokenKind::Quoted, "'a'", 3, 9);
    assert_eq!(token.to_string(), "quoted(\"'a'\") at 3:9");
}

#[test]
fn kind_display_names_are_lowercase() {
    assert_eq!(TokenKind::Eof.to_string(), "eof");
    assert_eq!(TokenKind::Whitespace.to_string(), "whitespace");
    assert_eq!(TokenKind::Float.to_string(), "float");
}
