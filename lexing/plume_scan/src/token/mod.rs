//! Token model shared by every tokenizer in the framework.
//!
//! A [`Token`] is immutable once produced: a kind, the literal source
//! text it covers, and the 1-based line/column of its first code point.
//! Character states build tokens; tokenizer callers consume them.

use std::fmt;

/// Classification of a lexical token.
///
/// This is a closed set. Numeric tokens are split into [`Integer`] and
/// [`Float`] by the number state rather than carrying a separate
/// sub-kind; everything a downstream parser needs is the kind plus the
/// literal value.
///
/// [`Integer`]: TokenKind::Integer
/// [`Float`]: TokenKind::Float
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// A code point owned by no registered character state.
    Unknown,
    /// A maximal run of whitespace code points.
    Whitespace,
    /// A maximal run of word code points (identifier-like).
    Word,
    /// A number without a decimal point.
    Integer,
    /// A number with a decimal point (`123.` qualifies).
    Float,
    /// An operator or punctuation sequence, single- or multi-character.
    Symbol,
    /// A quoted string, delimiters included.
    Quoted,
    /// A line or block comment, markers included.
    Comment,
    /// Literal template text outside `{{ }}` markup.
    Special,
    /// End of the source buffer. Value is always empty.
    Eof,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::Unknown => "unknown",
            TokenKind::Whitespace => "whitespace",
            TokenKind::Word => "word",
            TokenKind::Integer => "integer",
            TokenKind::Float => "float",
            TokenKind::Symbol => "symbol",
            TokenKind::Quoted => "quoted",
            TokenKind::Comment => "comment",
            TokenKind::Special => "special",
            TokenKind::Eof => "eof",
        };
        f.write_str(name)
    }
}

/// One lexical unit: kind, literal text, and source position.
///
/// Positions are 1-based and refer to the first code point of the
/// token's text. Tokens never overlap and, with all skip filters
/// disabled, concatenating their values reproduces the source exactly.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    kind: TokenKind,
    value: String,
    line: u32,
    column: u32,
}

impl Token {
    /// Create a token. Called by character states at the moment the
    /// full token text has been consumed.
    pub fn new(kind: TokenKind, value: impl Into<String>, line: u32, column: u32) -> Self {
        Self {
            kind,
            value: value.into(),
            line,
            column,
        }
    }

    /// The token's classification.
    #[inline]
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// The literal source text covered by this token.
    #[inline]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// 1-based line of the token's first code point.
    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }

    /// 1-based column of the token's first code point.
    #[inline]
    pub fn column(&self) -> u32 {
        self.column
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}({:?}) at {}:{}",
            self.kind, self.value, self.line, self.column
        )
    }
}

#[cfg(test)]
mod tests;
