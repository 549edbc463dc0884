//! Word state: identifiers and identifier-like runs.

use plume_scan::{Scanner, Token, TokenKind};

use crate::char_map::CharRangeMap;

/// Consumes a maximal run of word code points.
///
/// Defaults to ASCII letters, digits, and underscore; tokenizers extend
/// the set (the expression tokenizer adds the Latin-1 supplement range)
/// through [`set_word_chars`](Self::set_word_chars).
#[derive(Clone, Debug)]
pub struct WordState {
    chars: CharRangeMap<bool>,
}

impl WordState {
    pub fn new() -> Self {
        let mut chars = CharRangeMap::new();
        chars.add_interval('a', 'z', true);
        chars.add_interval('A', 'Z', true);
        chars.add_interval('0', '9', true);
        chars.add_interval('_', '_', true);
        Self { chars }
    }

    /// Enable or disable a code-point range as word characters.
    /// Later calls override earlier ones where they overlap.
    pub fn set_word_chars(&mut self, from: char, to: char, enable: bool) {
        self.chars.add_interval(from, to, enable);
    }

    /// Consume the word starting at the scanner position.
    pub fn next_token(&self, scanner: &mut Scanner) -> Token {
        let line = scanner.peek_line();
        let column = scanner.peek_column();
        let mut value = String::new();
        while !scanner.is_eof() && self.chars.contains(scanner.peek()) {
            value.push(scanner.read());
        }
        Token::new(TokenKind::Word, value, line, column)
    }
}

impl Default for WordState {
    fn default() -> Self {
        Self::new()
    }
}
