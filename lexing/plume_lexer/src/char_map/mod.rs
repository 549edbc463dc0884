//! Code-point interval table with last-registered-wins lookup.
//!
//! Both the tokenizer dispatch table and the per-state character
//! classes (word characters, whitespace characters) share this
//! structure. Registration order is significant: a tokenizer first maps
//! the full range to its symbol state and then narrows specific ranges,
//! so lookup must prefer the most recently registered matching entry.

/// One registered interval. `from..=to` inclusive on both ends.
#[derive(Clone, Debug)]
struct RangeEntry<T> {
    from: char,
    to: char,
    value: T,
}

/// Ordered list of `(from, to, value)` code-point intervals.
///
/// Lookup is a linear scan from the most recent entry backwards; the
/// table is built once during tokenizer construction and is small (a
/// dozen entries or so), so no sorted structure is warranted.
#[derive(Clone, Debug, Default)]
pub struct CharRangeMap<T> {
    entries: Vec<RangeEntry<T>>,
}

impl<T> CharRangeMap<T> {
    /// Create an empty table.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Register `value` for every code point in `from..=to`.
    ///
    /// Later registrations override earlier ones wherever they overlap.
    ///
    /// # Panics
    ///
    /// Panics if `from > to`.
    pub fn add_interval(&mut self, from: char, to: char, value: T) {
        assert!(
            from <= to,
            "invalid interval: {from:?} is greater than {to:?}"
        );
        self.entries.push(RangeEntry { from, to, value });
    }

    /// Returns the value of the last registered interval containing
    /// `ch`, or `None` if no interval covers it.
    pub fn lookup(&self, ch: char) -> Option<&T> {
        self.entries
            .iter()
            .rev()
            .find(|entry| entry.from <= ch && ch <= entry.to)
            .map(|entry| &entry.value)
    }

    /// Remove every registered interval.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl CharRangeMap<bool> {
    /// Membership test for tables used as character classes, where the
    /// value marks a range as enabled (`true`) or carved out (`false`).
    #[inline]
    pub fn contains(&self, ch: char) -> bool {
        self.lookup(ch).copied().unwrap_or(false)
    }
}

#[cfg(test)]
mod tests;
