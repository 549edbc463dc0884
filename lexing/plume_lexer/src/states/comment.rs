//! Comment state: line comments and C-style block comments.

use plume_scan::{Scanner, Token, TokenKind, EOF_CHAR};

use crate::error::LexError;

/// Which comment syntax this state recognizes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CommentStyle {
    /// From the marker code point to the end of the line. The CR/LF
    /// terminator is left unconsumed and is not part of the token.
    Line,
    /// `/* ... */`. The closing `*/` is required: reaching EOF first
    /// aborts the pass with [`LexError::UnterminatedComment`].
    CBlock,
}

/// Consumes one comment in the configured style.
#[derive(Clone, Copy, Debug)]
pub struct CommentState {
    style: CommentStyle,
}

impl CommentState {
    /// Line-comment state (`# ...`, `// ...`, any single-marker style:
    /// the dispatch range decides which code point starts it).
    pub fn line() -> Self {
        Self {
            style: CommentStyle::Line,
        }
    }

    /// C-style block-comment state.
    pub fn c_style() -> Self {
        Self {
            style: CommentStyle::CBlock,
        }
    }

    /// The style this state was built with.
    pub fn style(&self) -> CommentStyle {
        self.style
    }

    /// Consume the comment starting at the scanner position.
    pub fn next_token(&self, scanner: &mut Scanner) -> Result<Token, LexError> {
        match self.style {
            CommentStyle::Line => Ok(line_comment(scanner)),
            CommentStyle::CBlock => block_comment(scanner),
        }
    }
}

fn line_comment(scanner: &mut Scanner) -> Token {
    let line = scanner.peek_line();
    let column = scanner.peek_column();
    let mut value = String::new();
    while !scanner.is_eof() {
        let ch = scanner.peek();
        if ch == '\n' || ch == '\r' {
            break;
        }
        value.push(scanner.read());
    }
    Token::new(TokenKind::Comment, value, line, column)
}

fn block_comment(scanner: &mut Scanner) -> Result<Token, LexError> {
    let line = scanner.peek_line();
    let column = scanner.peek_column();
    let mut value = String::new();
    value.push(scanner.read()); // opening '/'

    // Seek the '*' that opens the comment body.
    loop {
        if scanner.is_eof() {
            return Err(LexError::UnterminatedComment { line, column });
        }
        let ch = scanner.read();
        value.push(ch);
        if ch == '*' {
            break;
        }
    }

    // Consume through the closing "*/". The opener's '*' must not pair
    // with an immediately following '/' ("/*/" stays open), which falls
    // out of starting `prev` at the sentinel.
    let mut prev = EOF_CHAR;
    loop {
        if scanner.is_eof() {
            return Err(LexError::UnterminatedComment { line, column });
        }
        let ch = scanner.read();
        value.push(ch);
        if prev == '*' && ch == '/' {
            break;
        }
        prev = ch;
    }

    Ok(Token::new(TokenKind::Comment, value, line, column))
}
