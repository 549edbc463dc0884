//! Whitespace state: one token per maximal whitespace run.

use plume_scan::{Scanner, Token, TokenKind};

use crate::char_map::CharRangeMap;

/// Consumes a maximal run of whitespace code points.
///
/// Which code points count as whitespace is configurable; by default
/// every code point up to and including the space character
/// (`0x00..=0x20`) qualifies, which covers space, tab, CR, and LF.
#[derive(Clone, Debug)]
pub struct WhitespaceState {
    chars: CharRangeMap<bool>,
}

impl WhitespaceState {
    pub fn new() -> Self {
        let mut chars = CharRangeMap::new();
        chars.add_interval('\u{0000}', ' ', true);
        Self { chars }
    }

    /// Enable or disable a code-point range as whitespace.
    /// Later calls override earlier ones where they overlap.
    pub fn set_whitespace_chars(&mut self, from: char, to: char, enable: bool) {
        self.chars.add_interval(from, to, enable);
    }

    /// Consume the whitespace run starting at the scanner position and
    /// return it as a single `Whitespace` token.
    pub fn next_token(&self, scanner: &mut Scanner) -> Token {
        let line = scanner.peek_line();
        let column = scanner.peek_column();
        let mut value = String::new();
        while !scanner.is_eof() && self.chars.contains(scanner.peek()) {
            value.push(scanner.read());
        }
        Token::new(TokenKind::Whitespace, value, line, column)
    }
}

impl Default for WhitespaceState {
    fn default() -> Self {
        Self::new()
    }
}
