//! Reverse trie interface.

mod reverse_trie;

pub use self::reverse_trie::{NodeId, ReverseTrie, Terminals, TerminalsIter, TrieNode};

/// How a query discovers stored words that are longer than the query word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, clap::ValueEnum)]
pub enum TrieStrategy {
    /// Walk the subtree below the query's final node and test each path.
    Traversal,
    /// Read the list precomputed during insertion; no walk at query time.
    #[default]
    PalindromesBelow,
}

impl TrieStrategy {
    /// Whether insertion must record `palindromes_below` lists.
    #[inline]
    pub fn precomputes(self) -> bool {
        matches!(self, Self::PalindromesBelow)
    }
}
