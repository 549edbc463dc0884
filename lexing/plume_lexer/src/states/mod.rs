//! Character states: the strategies that consume one full token each.
//!
//! Dispatch hands a state the scanner positioned at the first code
//! point of the token it owns. The state consumes every code point
//! belonging to that token and leaves the scanner at the first code
//! point of the next token (or at EOF). States never skip anything:
//! filtering is the tokenizer's job.

mod comment;
mod number;
mod quote;
mod special;
mod symbol;
mod whitespace;
mod word;

pub use comment::{CommentState, CommentStyle};
pub use number::NumberState;
pub use quote::{decode_string, encode_string, QuoteState};
pub use special::SpecialState;
pub use symbol::SymbolState;
pub use whitespace::WhitespaceState;
pub use word::WordState;
