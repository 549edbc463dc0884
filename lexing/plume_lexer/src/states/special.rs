//! Special state: literal template text between Mustache tags.
//!
//! Range dispatch alone cannot tell "literal text containing `{`" from
//! "the start of a `{{` tag"; that needs one code point of lookahead.
//! This state consumes raw text up to, but not including, the next
//! `{{`, and reports "nothing to emit" when the scanner already sits
//! on one so the tokenizer can fall through to symbol dispatch.

use plume_scan::{Scanner, Token, TokenKind};

/// Consumes a run of literal template text.
#[derive(Clone, Copy, Debug, Default)]
pub struct SpecialState;

impl SpecialState {
    pub fn new() -> Self {
        Self
    }

    /// Consume literal text up to the next `{{` marker or EOF.
    ///
    /// A lone `{` not followed by another `{` is literal content.
    /// Returns `None` instead of an empty token when there is nothing
    /// before the marker (or the scanner is at EOF).
    pub fn next_token(&self, scanner: &mut Scanner) -> Option<Token> {
        let line = scanner.peek_line();
        let column = scanner.peek_column();
        let mut value = String::new();

        while !scanner.is_eof() {
            let ch = scanner.read();
            if ch == '{' && scanner.peek() == '{' {
                scanner.unread();
                break;
            }
            value.push(ch);
        }

        if value.is_empty() {
            None
        } else {
            Some(Token::new(TokenKind::Special, value, line, column))
        }
    }
}

#[cfg(test)]
mod tests;
