use plume_scan::{Scanner, TokenKind};
use pretty_assertions::assert_eq;

use super::super::symbol::SymbolState;
use super::NumberState;

fn lex(source: &str) -> (plume_scan::Token, Scanner) {
    let state = NumberState::new();
    let symbol = SymbolState::new();
    let mut scanner = Scanner::new(source);
    let token = state.next_token(&mut scanner, &symbol);
    (token, scanner)
}

#[test]
fn plain_integer() {
    let (token, scanner) = lex("123");
    assert_eq!(token.kind(), TokenKind::Integer);
    assert_eq!(token.value(), "123");
    assert!(scanner.is_eof());
}

#[test]
fn trailing_dot_is_a_float() {
    let (token, _) = lex("123.");
    assert_eq!(token.kind(), TokenKind::Float);
    assert_eq!(token.value(), "123.");
}

#[test]
fn full_float() {
    let (token, _) = lex("123.456");
    assert_eq!(token.kind(), TokenKind::Float);
    assert_eq!(token.value(), "123.456");
}

#[test]
fn negative_float() {
    let (token, _) = lex("-123.456");
    assert_eq!(token.kind(), TokenKind::Float);
    assert_eq!(token.value(), "-123.456");
}

#[test]
fn fraction_only_float() {
    let (token, _) = lex(".5");
    assert_eq!(token.kind(), TokenKind::Float);
    assert_eq!(token.value(), ".5");
}

#[test]
fn number_stops_before_second_dot() {
    let (token, scanner) = lex("12.3.4");
    assert_eq!(token.value(), "12.3");
    assert_eq!(scanner.peek(), '.');
}

#[test]
fn bare_minus_falls_back_to_symbol() {
    let (token, scanner) = lex("- x");
    assert_eq!(token.kind(), TokenKind::Symbol);
    assert_eq!(token.value(), "-");
    assert_eq!(scanner.peek(), ' ');
}

#[test]
fn bare_dot_falls_back_to_symbol() {
    let (token, scanner) = lex(". x");
    assert_eq!(token.kind(), TokenKind::Symbol);
    assert_eq!(token.value(), ".");
    assert_eq!(scanner.peek(), ' ');
}

#[test]
fn minus_dot_yields_minus_symbol_only() {
    let (token, scanner) = lex("-.5");
    assert_eq!(token.value(), "-");
    assert_eq!(scanner.peek(), '.');
}

#[test]
#[should_panic(expected = "non-numeric code point")]
fn non_numeric_lead_is_a_contract_violation() {
    lex("abc");
}
