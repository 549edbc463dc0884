//! Quote state: quoted strings with doubled-quote escaping.
//!
//! A quote character inside a string is escaped by doubling it:
//! `'it''s'` is one token whose decoded value is `it's`. Deciding
//! whether a quote terminates the string therefore needs one code
//! point of lookahead past it.

use plume_scan::{Scanner, Token, TokenKind};

/// Consumes from an opening quote through the matching closing quote
/// of the same kind.
///
/// The token value keeps the delimiters; when the tokenizer's
/// `decode_strings` flag is set the value is run through
/// [`decode_string`] instead. Reaching EOF before the closer ends the
/// token with what was read — truncated input degrades, it does not
/// abort the pass.
#[derive(Clone, Copy, Debug, Default)]
pub struct QuoteState;

impl QuoteState {
    pub fn new() -> Self {
        Self
    }

    /// Consume the quoted string starting at the scanner position.
    /// The code point at that position is the quote kind to match.
    pub fn next_token(&self, scanner: &mut Scanner, decode: bool) -> Token {
        let line = scanner.peek_line();
        let column = scanner.peek_column();
        let open = scanner.read();
        let mut value = String::new();
        value.push(open);

        while !scanner.is_eof() {
            let ch = scanner.read();
            value.push(ch);
            if ch == open {
                if scanner.peek() == open && !scanner.is_eof() {
                    // Doubled quote: escaped literal, keep scanning.
                    value.push(scanner.read());
                } else {
                    break;
                }
            }
        }

        let value = if decode {
            decode_string(&value, open)
        } else {
            value
        };
        Token::new(TokenKind::Quoted, value, line, column)
    }
}

/// Wrap `value` in `quote` characters, doubling any embedded quotes.
///
/// Usable without a scanner; the inverse of [`decode_string`].
pub fn encode_string(value: &str, quote: char) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push(quote);
    for ch in value.chars() {
        out.push(ch);
        if ch == quote {
            out.push(quote);
        }
    }
    out.push(quote);
    out
}

/// Strip the surrounding `quote` characters from `value` (when both are
/// present) and collapse each doubled quote to a single one.
pub fn decode_string(value: &str, quote: char) -> String {
    let chars: Vec<char> = value.chars().collect();
    let inner = if chars.len() >= 2 && chars[0] == quote && chars[chars.len() - 1] == quote {
        &chars[1..chars.len() - 1]
    } else {
        &chars[..]
    };

    let mut out = String::with_capacity(inner.len());
    let mut i = 0;
    while i < inner.len() {
        out.push(inner[i]);
        if inner[i] == quote && i + 1 < inner.len() && inner[i + 1] == quote {
            i += 2;
        } else {
            i += 1;
        }
    }
    out
}

#[cfg(test)]
mod tests;
