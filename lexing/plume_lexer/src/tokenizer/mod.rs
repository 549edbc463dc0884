//! The generic table-driven tokenizer.
//!
//! A [`Tokenizer`] owns one instance of each character state and a
//! dispatch table mapping code-point ranges to [`StateSlot`]s. Each call
//! to [`read_next_token`](Tokenizer::read_next_token) peeks one code
//! point, looks up the owning slot, and lets that state consume the
//! whole token. Ranges registered later override earlier ones, so a
//! configuration can map the full code-point range to the symbol state
//! and then carve out the narrower classes on top.

use plume_scan::{Scanner, Token, TokenKind};
use tracing::trace;

use crate::char_map::CharRangeMap;
use crate::error::LexError;
use crate::states::{
    CommentState, NumberState, QuoteState, SymbolState, WhitespaceState, WordState,
};

/// Which character state a dispatch range routes to.
///
/// The special state is absent on purpose: it is not range-dispatched,
/// the Mustache tokenizer drives it by mode instead.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StateSlot {
    Whitespace,
    Word,
    Number,
    Quote,
    Symbol,
    Comment,
}

/// Output filtering and decoding flags. Everything defaults to off:
/// a fresh tokenizer reproduces its input losslessly.
#[derive(Clone, Copy, Debug, Default)]
pub struct TokenizerSettings {
    skip_whitespace: bool,
    skip_comments: bool,
    skip_eof: bool,
    decode_strings: bool,
}

impl TokenizerSettings {
    /// Whether a token of `kind` survives output filtering.
    pub fn keeps(&self, kind: TokenKind) -> bool {
        match kind {
            TokenKind::Whitespace => !self.skip_whitespace,
            TokenKind::Comment => !self.skip_comments,
            TokenKind::Eof => !self.skip_eof,
            _ => true,
        }
    }
}

/// The generic tokenizer. Concrete configurations (expression,
/// Mustache) wrap one of these and register their own tables.
#[derive(Debug)]
pub struct Tokenizer {
    scanner: Option<Scanner>,
    dispatch: CharRangeMap<StateSlot>,
    whitespace: WhitespaceState,
    word: WordState,
    number: NumberState,
    quote: QuoteState,
    symbol: SymbolState,
    comment: CommentState,
    settings: TokenizerSettings,
}

impl Tokenizer {
    /// A tokenizer with default-configured states and an empty dispatch
    /// table: until ranges are registered, every token is `Unknown`.
    pub fn new() -> Self {
        Self {
            scanner: None,
            dispatch: CharRangeMap::new(),
            whitespace: WhitespaceState::new(),
            word: WordState::new(),
            number: NumberState::new(),
            quote: QuoteState::new(),
            symbol: SymbolState::new(),
            comment: CommentState::line(),
            settings: TokenizerSettings::default(),
        }
    }

    // === Configuration ===

    /// Route every code point in `from..=to` to `slot`. Overrides any
    /// earlier registration where the ranges overlap.
    pub fn set_character_state(&mut self, from: char, to: char, slot: StateSlot) {
        self.dispatch.add_interval(from, to, slot);
    }

    /// Drop every dispatch registration. Code points fall back to
    /// producing single-character `Unknown` tokens.
    pub fn clear_character_states(&mut self) {
        self.dispatch.clear();
    }

    /// Replace the whitespace state wholesale.
    pub fn set_whitespace_state(&mut self, state: WhitespaceState) {
        self.whitespace = state;
    }

    /// Replace the word state wholesale.
    pub fn set_word_state(&mut self, state: WordState) {
        self.word = state;
    }

    /// Replace the number state wholesale.
    pub fn set_number_state(&mut self, state: NumberState) {
        self.number = state;
    }

    /// Replace the quote state wholesale.
    pub fn set_quote_state(&mut self, state: QuoteState) {
        self.quote = state;
    }

    /// Replace the symbol state wholesale, discarding any registered
    /// symbols.
    pub fn set_symbol_state(&mut self, state: SymbolState) {
        self.symbol = state;
    }

    /// Replace the comment state (line vs C-style block).
    pub fn set_comment_state(&mut self, state: CommentState) {
        self.comment = state;
    }

    /// The whitespace state, for adjusting its character class.
    pub fn whitespace_state_mut(&mut self) -> &mut WhitespaceState {
        &mut self.whitespace
    }

    /// The word state, for adjusting its character class.
    pub fn word_state_mut(&mut self) -> &mut WordState {
        &mut self.word
    }

    /// The symbol state, for registering multi-character symbols.
    pub fn symbol_state_mut(&mut self) -> &mut SymbolState {
        &mut self.symbol
    }

    pub fn set_skip_whitespace(&mut self, skip: bool) {
        self.settings.skip_whitespace = skip;
    }

    pub fn set_skip_comments(&mut self, skip: bool) {
        self.settings.skip_comments = skip;
    }

    pub fn set_skip_eof(&mut self, skip: bool) {
        self.settings.skip_eof = skip;
    }

    pub fn set_decode_strings(&mut self, decode: bool) {
        self.settings.decode_strings = decode;
    }

    /// The current filtering and decoding flags.
    pub fn settings(&self) -> &TokenizerSettings {
        &self.settings
    }

    // === Tokenizing ===

    /// Attach a source buffer, replacing any previous one. Reading
    /// resumes from the start of the new buffer.
    pub fn attach_buffer(&mut self, source: &str) {
        trace!(len = source.len(), "attaching source buffer");
        self.scanner = Some(Scanner::new(source));
    }

    pub(crate) fn scanner_mut(&mut self) -> Option<&mut Scanner> {
        self.scanner.as_mut()
    }

    pub(crate) fn detach(&mut self) {
        self.scanner = None;
    }

    /// Produce the next token from the attached buffer.
    ///
    /// Returns `Ok(None)` when no buffer is attached. At end of input
    /// this keeps returning an `Eof` token; callers that loop must stop
    /// on it. Skip flags do not apply here, only in
    /// [`tokenize_buffer`](Self::tokenize_buffer).
    pub fn read_next_token(&mut self) -> Result<Option<Token>, LexError> {
        let Some(scanner) = self.scanner.as_mut() else {
            return Ok(None);
        };
        if scanner.is_eof() {
            let token = Token::new(
                TokenKind::Eof,
                "",
                scanner.peek_line(),
                scanner.peek_column(),
            );
            return Ok(Some(token));
        }

        let token = match self.dispatch.lookup(scanner.peek()).copied() {
            None => {
                let line = scanner.peek_line();
                let column = scanner.peek_column();
                let ch = scanner.read();
                Token::new(TokenKind::Unknown, ch.to_string(), line, column)
            }
            Some(StateSlot::Whitespace) => self.whitespace.next_token(scanner),
            Some(StateSlot::Word) => self.word.next_token(scanner),
            Some(StateSlot::Number) => self.number.next_token(scanner, &self.symbol),
            Some(StateSlot::Quote) => self.quote.next_token(scanner, self.settings.decode_strings),
            Some(StateSlot::Symbol) => self.symbol.next_token(scanner),
            Some(StateSlot::Comment) => self.comment.next_token(scanner)?,
        };
        trace!(kind = %token.kind(), line = token.line(), column = token.column(), "token");
        Ok(Some(token))
    }

    /// Tokenize `source` in one pass, applying the skip flags, and
    /// detach the buffer afterwards (on error too).
    pub fn tokenize_buffer(&mut self, source: &str) -> Result<Vec<Token>, LexError> {
        self.attach_buffer(source);
        let result = self.run_to_eof();
        self.detach();
        result
    }

    fn run_to_eof(&mut self) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();
        while let Some(token) = self.read_next_token()? {
            let kind = token.kind();
            if self.settings.keeps(kind) {
                tokens.push(token);
            }
            if kind == TokenKind::Eof {
                break;
            }
        }
        trace!(count = tokens.len(), "tokenized buffer");
        Ok(tokens)
    }
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new()
    }
}
