use plume_scan::{Scanner, TokenKind};
use pretty_assertions::assert_eq;

use super::{decode_string, encode_string, QuoteState};

fn lex(source: &str, decode: bool) -> (plume_scan::Token, Scanner) {
    let state = QuoteState::new();
    let mut scanner = Scanner::new(source);
    let token = state.next_token(&mut scanner, decode);
    (token, scanner)
}

// === Scanning ===

#[test]
fn simple_quoted_string_keeps_delimiters() {
    let (token, scanner) = lex("'ABC' rest", false);
    assert_eq!(token.kind(), TokenKind::Quoted);
    assert_eq!(token.value(), "'ABC'");
    assert_eq!(scanner.peek(), ' ');
}

#[test]
fn double_quotes_match_double_quotes_only() {
    let (token, _) = lex("\"A'B\"x", false);
    assert_eq!(token.value(), "\"A'B\"");
}

#[test]
fn doubled_quote_is_escape_not_terminator() {
    let (token, scanner) = lex("'it''s'?", false);
    assert_eq!(token.value(), "'it''s'");
    assert_eq!(scanner.peek(), '?');
}

#[test]
fn decode_flag_unwraps_and_collapses() {
    let (token, _) = lex("'it''s'", true);
    assert_eq!(token.value(), "it's");
}

#[test]
fn eof_before_closer_keeps_partial_value() {
    let (token, scanner) = lex("'ABC", false);
    assert_eq!(token.value(), "'ABC");
    assert!(scanner.is_eof());
}

#[test]
fn empty_string() {
    let (token, _) = lex("''x", false);
    assert_eq!(token.value(), "''");
}

// === Standalone helpers ===

#[test]
fn encode_wraps_value() {
    assert_eq!(encode_string("ABC", '\''), "'ABC'");
}

#[test]
fn encode_doubles_embedded_quotes() {
    assert_eq!(encode_string("it's", '\''), "'it''s'");
}

#[test]
fn decode_unwraps_value() {
    assert_eq!(decode_string("'ABC'", '\''), "ABC");
}

#[test]
fn decode_collapses_doubled_quote_before_final_terminator() {
    assert_eq!(decode_string("'ABC'DEF'", '\''), "ABC'DEF");
}

#[test]
fn decode_without_delimiters_only_collapses() {
    assert_eq!(decode_string("A''B", '\''), "A'B");
}

#[test]
fn encode_decode_round_trip() {
    let original = "a 'quoted' piece";
    assert_eq!(decode_string(&encode_string(original, '\''), '\''), original);
}
