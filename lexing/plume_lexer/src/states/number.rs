//! Number state: integers and floats, with symbol fallback for a bare
//! `-` or `.`.

use plume_scan::{Scanner, Token, TokenKind};

use super::symbol::SymbolState;

/// Consumes an optional leading `-`, integer digits, and an optional
/// `.` with fraction digits. The decimal point decides `Integer` vs
/// `Float`; `123.` is a `Float` with value `"123."`.
///
/// A `-` or `.` that absorbs no digit is an operator, not a number: the
/// state unreads the single consumed code point and delegates to the
/// symbol state, so `a - b` and a lone `.` lex as symbols.
#[derive(Clone, Copy, Debug, Default)]
pub struct NumberState;

impl NumberState {
    pub fn new() -> Self {
        Self
    }

    /// Consume the number starting at the scanner position.
    ///
    /// # Panics
    ///
    /// Panics if the scanner is not positioned on a digit, `-`, or `.`.
    /// Dispatch only routes those code points here; anything else is a
    /// caller bug, not malformed input.
    pub fn next_token(&self, scanner: &mut Scanner, symbol: &SymbolState) -> Token {
        let line = scanner.peek_line();
        let column = scanner.peek_column();
        let lead = scanner.peek();
        assert!(
            lead.is_ascii_digit() || lead == '-' || lead == '.',
            "number state invoked on non-numeric code point {lead:?}"
        );

        let mut value = String::new();
        let mut got_digit = false;
        let mut absorbed_dot = false;

        if lead == '-' {
            scanner.read();
            if !scanner.peek().is_ascii_digit() {
                // Minus operator, not a sign.
                scanner.unread();
                return symbol.next_token(scanner);
            }
            value.push('-');
        }

        // The EOF sentinel is neither a digit nor '.', so these loops
        // terminate at end of input without an explicit check.
        while scanner.peek().is_ascii_digit() {
            got_digit = true;
            value.push(scanner.read());
        }

        if scanner.peek() == '.' {
            scanner.read();
            value.push('.');
            absorbed_dot = true;
            while scanner.peek().is_ascii_digit() {
                got_digit = true;
                value.push(scanner.read());
            }
        }

        if !got_digit {
            // Only a lone '.' reaches here: the '-' path bailed out
            // above and any digit sets the flag.
            scanner.unread();
            return symbol.next_token(scanner);
        }

        let kind = if absorbed_dot {
            TokenKind::Float
        } else {
            TokenKind::Integer
        };
        Token::new(kind, value, line, column)
    }
}

#[cfg(test)]
mod tests;
