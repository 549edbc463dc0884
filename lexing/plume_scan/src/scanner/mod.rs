//! Backtracking code-point scanner with line/column bookkeeping.
//!
//! The scanner decodes the source into code points up front and walks
//! them one at a time. EOF is reported as the sentinel value
//! [`EOF_CHAR`] (`'\0'`) once the position reaches the end of the
//! buffer. Reading past the end never panics and never advances.
//!
//! # Interior Null Code Points
//!
//! The sentinel is a value, not a marker byte in the buffer: a `'\0'`
//! inside the source is ordinary content. [`Scanner::is_eof`] compares
//! the position against the buffer length, so callers that loop on
//! scanner state (rather than on the returned value) handle interior
//! nulls correctly.
//!
//! # Backtracking
//!
//! [`Scanner::unread`] undoes exactly one prior [`Scanner::read`] by
//! restoring a saved `(position, line, column)` triple. One step is all
//! any character state ever needs; a second `unread` without an
//! intervening successful `read` is a caller bug and panics.

/// Sentinel value returned by [`Scanner::read`] and [`Scanner::peek`]
/// at end of input.
pub const EOF_CHAR: char = '\0';

/// Snapshot of scanner state before a `read`, used to undo it.
#[derive(Clone, Copy, Debug)]
struct Snapshot {
    pos: usize,
    line: u32,
    column: u32,
}

/// Cursor over an in-memory string, one Unicode code point at a time.
///
/// Line and column track the *next unconsumed* code point and are both
/// 1-based: the first code point of the source is at `1:1`, and the
/// code point after a `\n` is at the start of the next line, column 1.
///
/// # Invariant
///
/// `0 <= position <= buffer.len()` at all times. `read()` at the end of
/// the buffer returns [`EOF_CHAR`] without advancing.
#[derive(Clone, Debug)]
pub struct Scanner {
    /// Source decoded into code points. Indexing by position keeps
    /// line/column meaningful for any code point, not just the BMP.
    buffer: Vec<char>,
    /// Index of the next code point to read.
    pos: usize,
    /// 1-based line of the next code point.
    line: u32,
    /// 1-based column of the next code point.
    column: u32,
    /// State before the most recent `read`, consumed by `unread`.
    prev: Option<Snapshot>,
}

impl Scanner {
    /// Create a scanner positioned at the start of `source`.
    pub fn new(source: &str) -> Self {
        Self {
            buffer: source.chars().collect(),
            pos: 0,
            line: 1,
            column: 1,
            prev: None,
        }
    }

    /// Returns the current code point and advances past it.
    ///
    /// Consuming a `\n` moves the line counter forward and resets the
    /// column to 1. At end of input, returns [`EOF_CHAR`] without
    /// advancing and without refreshing the `unread` snapshot.
    pub fn read(&mut self) -> char {
        let Some(&ch) = self.buffer.get(self.pos) else {
            return EOF_CHAR;
        };
        self.prev = Some(Snapshot {
            pos: self.pos,
            line: self.line,
            column: self.column,
        });
        self.pos += 1;
        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        ch
    }

    /// Returns the current code point without advancing.
    ///
    /// Returns [`EOF_CHAR`] at end of input.
    #[inline]
    pub fn peek(&self) -> char {
        self.buffer.get(self.pos).copied().unwrap_or(EOF_CHAR)
    }

    /// 1-based line of the next unconsumed code point.
    ///
    /// Character states call this before their first `read` to stamp
    /// the token they are about to build.
    #[inline]
    pub fn peek_line(&self) -> u32 {
        self.line
    }

    /// 1-based column of the next unconsumed code point.
    #[inline]
    pub fn peek_column(&self) -> u32 {
        self.column
    }

    /// Returns `true` once the position has reached the end of the
    /// buffer. Positional: interior `'\0'` code points are not EOF.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.buffer.len()
    }

    /// Undo exactly one prior [`read`](Self::read).
    ///
    /// Restores the position, line, and column saved by that read.
    ///
    /// # Panics
    ///
    /// Panics if called twice without an intervening successful read,
    /// or before any read. Only a single step of history is kept; a
    /// deeper undo would be a contract violation by the calling state.
    pub fn unread(&mut self) {
        let Some(snapshot) = self.prev.take() else {
            panic!("Scanner::unread called without a preceding read to undo");
        };
        self.pos = snapshot.pos;
        self.line = snapshot.line;
        self.column = snapshot.column;
    }
}
