use plume_scan::{Scanner, TokenKind};
use pretty_assertions::assert_eq;

use super::SpecialState;

#[test]
fn consumes_literal_text_up_to_tag_opener() {
    let state = SpecialState::new();
    let mut scanner = Scanner::new("Hello, {{ Name }}!");
    let token = state
        .next_token(&mut scanner)
        .unwrap_or_else(|| panic!("expected a literal run"));
    assert_eq!(token.kind(), TokenKind::Special);
    assert_eq!(token.value(), "Hello, ");
    assert_eq!(scanner.peek(), '{');
}

#[test]
fn lone_brace_is_literal_content() {
    let state = SpecialState::new();
    let mut scanner = Scanner::new("a { b");
    let token = state
        .next_token(&mut scanner)
        .unwrap_or_else(|| panic!("expected a literal run"));
    assert_eq!(token.value(), "a { b");
    assert!(scanner.is_eof());
}

#[test]
fn empty_run_before_tag_yields_none() {
    let state = SpecialState::new();
    let mut scanner = Scanner::new("{{x}}");
    assert_eq!(state.next_token(&mut scanner), None);
    assert_eq!(scanner.peek(), '{');
}

#[test]
fn eof_yields_none() {
    let state = SpecialState::new();
    let mut scanner = Scanner::new("");
    assert_eq!(state.next_token(&mut scanner), None);
}

#[test]
fn stamps_position_of_first_code_point() {
    let state = SpecialState::new();
    let mut scanner = Scanner::new("ab\ncd{{e}}");
    let token = state
        .next_token(&mut scanner)
        .unwrap_or_else(|| panic!("expected a literal run"));
    assert_eq!((token.line(), token.column()), (1, 1));
    assert_eq!(token.value(), "ab\ncd");
}
