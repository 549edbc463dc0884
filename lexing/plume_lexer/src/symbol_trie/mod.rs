//! Prefix tree for greedy longest-match symbol recognition.
//!
//! The trie stores multi-character symbol sequences (`<=`, `<>`,
//! `{{{`, ...) and matches them one code point at a time against the
//! scanner. Matching is greedy: among all registered symbols starting
//! at the current position, the longest one wins. A code point that
//! starts no registered symbol is consumed as an ad hoc
//! single-character `Symbol` token, so lexing never rejects input here.
//!
//! Nodes live in an arena indexed by `u32` handle rather than behind
//! pointers; handle 0 is the root.

use plume_scan::{Scanner, Token, TokenKind};
use rustc_hash::FxHashMap;

/// One arena node: child edges keyed by code point, plus an optional
/// marker that the path from the root to this node is itself a
/// complete registered symbol.
#[derive(Debug, Default)]
struct TrieNode {
    children: FxHashMap<char, u32>,
    terminal: Option<TokenKind>,
}

/// Arena-based symbol trie with longest-match lookup.
#[derive(Debug)]
pub struct SymbolTrie {
    nodes: Vec<TrieNode>,
}

impl SymbolTrie {
    /// Create a trie containing only the root node.
    pub fn new() -> Self {
        Self {
            nodes: vec![TrieNode::default()],
        }
    }

    /// Register `symbol` with the token kind its match should carry.
    ///
    /// Matching backtracks at most one step past the deepest complete
    /// symbol on the descent path. Symbol sets where every entry of
    /// length `n >= 3` has its length-`n-1` prefix registered (as both
    /// built-in tokenizers do, e.g. `{{` under `{{{`) always stay
    /// within that bound.
    ///
    /// # Panics
    ///
    /// Panics if `symbol` is empty.
    pub fn add(&mut self, symbol: &str, kind: TokenKind) {
        assert!(!symbol.is_empty(), "cannot register an empty symbol");
        let mut node = 0u32;
        for ch in symbol.chars() {
            let existing = self.nodes[node as usize].children.get(&ch).copied();
            node = match existing {
                Some(child) => child,
                None => {
                    let handle = u32::try_from(self.nodes.len())
                        .unwrap_or_else(|_| panic!("symbol trie exceeded u32 node handles"));
                    self.nodes.push(TrieNode::default());
                    self.nodes[node as usize].children.insert(ch, handle);
                    handle
                }
            };
        }
        self.nodes[node as usize].terminal = Some(kind);
    }

    /// Match the longest registered symbol at the scanner position.
    ///
    /// Descends the trie while a child exists for the peeked code
    /// point, remembering the deepest terminal node passed, then
    /// unreads back to that boundary. With no terminal on the path the
    /// fallback is exactly one consumed code point as a generic
    /// `Symbol`.
    ///
    /// # Contract
    ///
    /// The scanner must not be at EOF; dispatch guarantees this.
    pub fn next_token(&self, scanner: &mut Scanner) -> Token {
        let line = scanner.peek_line();
        let column = scanner.peek_column();

        let mut node = 0u32;
        let mut value = String::new();
        let mut consumed = 0usize;
        let mut best: Option<(usize, TokenKind)> = None;

        while !scanner.is_eof() {
            let ch = scanner.peek();
            let Some(&child) = self.nodes[node as usize].children.get(&ch) else {
                break;
            };
            value.push(scanner.read());
            consumed += 1;
            node = child;
            if let Some(kind) = self.nodes[node as usize].terminal {
                best = Some((consumed, kind));
            }
        }

        let (keep, kind) = match best {
            Some((depth, kind)) => (depth, kind),
            None => {
                if consumed == 0 {
                    // Unregistered lead code point: consume it ad hoc.
                    value.push(scanner.read());
                    consumed = 1;
                }
                (1, TokenKind::Symbol)
            }
        };

        for _ in keep..consumed {
            scanner.unread();
            value.pop();
        }

        Token::new(kind, value, line, column)
    }
}

impl Default for SymbolTrie {
    fn default() -> Self {
        Self::new()
    }
}
