//! Tokenizer framework for Plume.
//!
//! This crate layers a table-driven tokenizer on top of the scanning
//! primitives in `plume_scan`:
//!
//! - [`CharRangeMap`]: code-point interval table with
//!   last-registered-wins lookup, used for dispatch and for character
//!   classes.
//! - [`SymbolTrie`]: arena-based prefix tree for greedy longest-match
//!   recognition of multi-character symbols.
//! - [`states`]: the character states (whitespace, word, number, quote,
//!   comment, symbol, special), each of which consumes one full token.
//! - [`Tokenizer`]: the generic driver that maps code-point ranges to
//!   states and applies skip/decode settings.
//! - [`ExpressionTokenizer`] and [`MustacheTokenizer`]: the two
//!   ready-made configurations.
//!
//! # Example
//!
//! ```
//! use plume_lexer::ExpressionTokenizer;
//!
//! let mut tokenizer = ExpressionTokenizer::new();
//! tokenizer.set_skip_whitespace(true);
//! tokenizer.set_skip_eof(true);
//! let tokens = tokenizer.tokenize_buffer("rate <= 123.5")?;
//! let values: Vec<&str> = tokens.iter().map(|t| t.value()).collect();
//! assert_eq!(values, ["rate", "<=", "123.5"]);
//! # Ok::<(), plume_lexer::LexError>(())
//! ```

mod char_map;
mod error;
mod expression;
mod mustache;
pub mod states;
mod symbol_trie;
mod tokenizer;

pub use char_map::CharRangeMap;
pub use error::LexError;
pub use expression::ExpressionTokenizer;
pub use mustache::MustacheTokenizer;
pub use states::{decode_string, encode_string};
pub use symbol_trie::SymbolTrie;
pub use tokenizer::{StateSlot, Tokenizer, TokenizerSettings};

// Re-export the scan-level types so callers need only one crate.
pub use plume_scan::{Scanner, Token, TokenKind, EOF_CHAR};
