//! Ready-made tokenizer for Mustache-style templates.
//!
//! Template source alternates between literal text and `{{ ... }}`
//! tags. Inside a tag the usual range dispatch applies (words, numbers,
//! quotes, whitespace, symbols); outside, everything up to the next
//! `{{` is one `Special` token. The tokenizer tracks which side of a
//! tag boundary it is on: it starts in literal mode and re-enters it
//! after each closing `}}` or `}}}`.

use plume_scan::{Token, TokenKind};

use crate::error::LexError;
use crate::states::SpecialState;
use crate::tokenizer::{StateSlot, TokenizerSettings, Tokenizer};

/// [`Tokenizer`] preconfigured for Mustache template syntax.
#[derive(Debug)]
pub struct MustacheTokenizer {
    inner: Tokenizer,
    special_state: SpecialState,
    special: bool,
}

impl MustacheTokenizer {
    pub fn new() -> Self {
        let mut inner = Tokenizer::new();

        inner.set_character_state('\u{0000}', '\u{ffff}', StateSlot::Symbol);
        inner.set_character_state('\u{0000}', ' ', StateSlot::Whitespace);
        inner.set_character_state('a', 'z', StateSlot::Word);
        inner.set_character_state('A', 'Z', StateSlot::Word);
        inner.set_character_state('\u{00c0}', '\u{00ff}', StateSlot::Word);
        inner.set_character_state('_', '_', StateSlot::Word);
        inner.set_character_state('0', '9', StateSlot::Number);
        inner.set_character_state('"', '"', StateSlot::Quote);
        inner.set_character_state('\'', '\'', StateSlot::Quote);

        inner
            .word_state_mut()
            .set_word_chars('\u{00c0}', '\u{00ff}', true);

        let symbols = ["{{", "}}", "{{{", "}}}"];
        for symbol in symbols {
            inner.symbol_state_mut().add(symbol, TokenKind::Symbol);
        }

        Self {
            inner,
            special_state: SpecialState::new(),
            special: true,
        }
    }

    /// Attach a source buffer, starting over in literal mode.
    pub fn attach_buffer(&mut self, source: &str) {
        self.inner.attach_buffer(source);
        self.special = true;
    }

    /// Produce the next token, alternating between literal text and
    /// tag-interior dispatch. `Ok(None)` when no buffer is attached.
    pub fn read_next_token(&mut self) -> Result<Option<Token>, LexError> {
        if self.special {
            let Some(scanner) = self.inner.scanner_mut() else {
                return Ok(None);
            };
            self.special = false;
            if let Some(token) = self.special_state.next_token(scanner) {
                return Ok(Some(token));
            }
            // Nothing before the tag opener (or at EOF): fall through.
        }

        let token = self.inner.read_next_token()?;
        self.special = matches!(
            &token,
            Some(t) if t.kind() == TokenKind::Symbol
                && (t.value() == "}}" || t.value() == "}}}")
        );
        Ok(token)
    }

    /// Tokenize `source` in one pass, applying the skip flags, and
    /// detach the buffer afterwards (on error too).
    pub fn tokenize_buffer(&mut self, source: &str) -> Result<Vec<Token>, LexError> {
        self.attach_buffer(source);
        let result = self.run_to_eof();
        self.inner.detach();
        result
    }

    fn run_to_eof(&mut self) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();
        while let Some(token) = self.read_next_token()? {
            let kind = token.kind();
            if self.inner.settings().keeps(kind) {
                tokens.push(token);
            }
            if kind == TokenKind::Eof {
                break;
            }
        }
        Ok(tokens)
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

impl Default for MustacheTokenizer {
    fn default() -> Self {
        Self::new()
    }
}
