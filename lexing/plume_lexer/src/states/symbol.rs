//! Symbol state: a thin wrapper over the symbol trie.

use plume_scan::{Scanner, Token, TokenKind};

use crate::symbol_trie::SymbolTrie;

/// Recognizes single- and multi-character symbols via longest-match
/// lookup in a [`SymbolTrie`]. Starts empty; tokenizers register their
/// operator sets during construction.
#[derive(Debug, Default)]
pub struct SymbolState {
    trie: SymbolTrie,
}

impl SymbolState {
    pub fn new() -> Self {
        Self {
            trie: SymbolTrie::new(),
        }
    }

    /// Register a symbol sequence and the kind its match should carry.
    pub fn add(&mut self, symbol: &str, kind: TokenKind) {
        self.trie.add(symbol, kind);
    }

    /// Consume the longest registered symbol at the scanner position,
    /// or a single code point as an ad hoc `Symbol` if none matches.
    pub fn next_token(&self, scanner: &mut Scanner) -> Token {
        self.trie.next_token(scanner)
    }
}
