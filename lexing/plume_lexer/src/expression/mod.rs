//! Ready-made tokenizer for expression languages.
//!
//! Recognizes identifiers (including the Latin-1 supplement letters),
//! signed integers and floats, single- and double-quoted strings,
//! C-style block comments, and the usual two-character comparison and
//! shift operators. Everything not claimed by one of those classes is
//! a symbol.

use plume_scan::{Token, TokenKind};

use crate::error::LexError;
use crate::states::CommentState;
use crate::tokenizer::{StateSlot, TokenizerSettings, Tokenizer};

/// [`Tokenizer`] preconfigured for expression syntax.
#[derive(Debug)]
pub struct ExpressionTokenizer {
    inner: Tokenizer,
}

impl ExpressionTokenizer {
    pub fn new() -> Self {
        let mut inner = Tokenizer::new();

        // Symbols everywhere, then carve the narrower classes on top.
        inner.set_character_state('\u{0000}', '\u{ffff}', StateSlot::Symbol);
        inner.set_character_state('\u{0000}', ' ', StateSlot::Whitespace);
        inner.set_character_state('a', 'z', StateSlot::Word);
        inner.set_character_state('A', 'Z', StateSlot::Word);
        inner.set_character_state('\u{00c0}', '\u{00ff}', StateSlot::Word);
        inner.set_character_state('_', '_', StateSlot::Word);
        inner.set_character_state('0', '9', StateSlot::Number);
        inner.set_character_state('-', '-', StateSlot::Number);
        inner.set_character_state('.', '.', StateSlot::Number);
        inner.set_character_state('"', '"', StateSlot::Quote);
        inner.set_character_state('\'', '\'', StateSlot::Quote);
        inner.set_character_state('/', '/', StateSlot::Comment);

        inner.set_comment_state(CommentState::c_style());
        inner
            .word_state_mut()
            .set_word_chars('\u{00c0}', '\u{00ff}', true);

        let symbols = ["<=", ">=", "<>", "!=", ">>", "<<"];
        for symbol in symbols {
            inner.symbol_state_mut().add(symbol, TokenKind::Symbol);
        }

        Self { inner }
    }

    /// See [`Tokenizer::attach_buffer`].
    pub fn attach_buffer(&mut self, source: &str) {
        self.inner.attach_buffer(source);
    }

    /// See [`Tokenizer::read_next_token`].
    pub fn read_next_token(&mut self) -> Result<Option<Token>, LexError> {
        self.inner.read_next_token()
    }

    /// See [`Tokenizer::tokenize_buffer`].
    pub fn tokenize_buffer(&mut self, source: &str) -> Result<Vec<Token>, LexError> {
        self.inner.tokenize_buffer(source)
    }

    pub fn set_skip_whitespace(&mut self, skip: bool) {
        self.inner.set_skip_whitespace(skip);
    }

    pub fn set_skip_comments(&mut self, skip: bool) {
        self.inner.set_skip_comments(skip);
    }

    pub fn set_skip_eof(&mut self, skip: bool) {
        self.inner.set_skip_eof(skip);
    }

    pub fn set_decode_strings(&mut self, decode: bool) {
        self.inner.set_decode_strings(decode);
    }

    /// The current filtering and decoding flags.
    pub fn settings(&self) -> &TokenizerSettings {
        self.inner.settings()
    }
}

impl Default for ExpressionTokenizer {
    fn default() -> Self {
        Self::new()
    }
}
