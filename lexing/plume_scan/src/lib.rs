//! Low-level scanning primitives for the Plume tokenizer framework.
//!
//! This crate is standalone: it knows nothing about character states,
//! symbol tries, or concrete tokenizers. It provides exactly two things:
//!
//! - [`Scanner`]: a cursor over an in-memory string, presented as a
//!   sequence of Unicode code points, with single-step backtracking and
//!   line/column bookkeeping.
//! - [`Token`] / [`TokenKind`]: the immutable lexical unit produced by
//!   the tokenizer layer and consumed by downstream parsers.
//!
//! Keeping these in a leaf crate lets external tools (highlighters,
//! formatters) consume scan output without pulling in the framework.

mod scanner;
mod token;

pub use scanner::{Scanner, EOF_CHAR};
pub use token::{Token, TokenKind};
