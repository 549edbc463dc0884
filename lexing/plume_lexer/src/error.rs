//! Error type for tokenization.
//!
//! Only genuinely malformed source aborts a tokenization pass. EOF
//! during normal scanning is the `Eof` token, not an error, and
//! unregistered symbols degrade to single-character `Symbol` tokens so
//! lexing always makes progress. Contract violations by callers (for
//! example invoking the number state on a non-numeric code point, or a
//! double `unread`) panic rather than surfacing here.

use thiserror::Error;

/// A fatal tokenization failure. The pass aborts; nothing is retried.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum LexError {
    /// A C-style block comment reached end of input before its `*/`
    /// closer. The position is where the comment opener started.
    #[error("unterminated block comment starting at line {line}, column {column}")]
    UnterminatedComment {
        /// 1-based line of the comment opener.
        line: u32,
        /// 1-based column of the comment opener.
        column: u32,
    },
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::LexError;

    #[test]
    fn unterminated_comment_names_the_opener_position() {
        let err = LexError::UnterminatedComment { line: 3, column: 14 };
        assert_eq!(
            err.to_string(),
            "unterminated block comment starting at line 3, column 14"
        );
    }
}
