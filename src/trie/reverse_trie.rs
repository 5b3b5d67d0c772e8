//! Arena-backed trie over reversed, case-folded words.
//!
//! Every word is inserted back to front, so walking the trie forward along a
//! query word follows exactly the stored words that could close a palindrome
//! after it. Nodes live in a single `Vec` owned by the trie and refer to their
//! children by [`NodeId`].

use std::collections::BTreeMap;

use super::TrieStrategy;
use crate::palindrome::{folded_chars, is_palindrome};

/// Position of a node in the trie's arena.
pub type NodeId = usize;

const ROOT: NodeId = 0;

/// Indices of the words whose full reversal ends at a node.
/// Most nodes hold nothing and most terminals hold a single word; several
/// indices only appear for words sharing the same folded reversal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Terminals {
    #[default]
    Empty,
    Single(usize),
    Multiple(Vec<usize>),
}

impl Terminals {
    fn add(&mut self, index: usize) {
        match self {
            Self::Empty => *self = Self::Single(index),
            Self::Single(existing) if *existing != index => {
                *self = Self::Multiple(vec![*existing, index]);
            }
            Self::Single(_) => {}
            Self::Multiple(indices) => {
                if !indices.contains(&index) {
                    indices.push(index);
                }
            }
        }
    }

    pub fn contains(&self, index: usize) -> bool {
        match self {
            Self::Empty => false,
            Self::Single(existing) => *existing == index,
            Self::Multiple(indices) => indices.contains(&index),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    pub fn len(&self) -> usize {
        match self {
            Self::Empty => 0,
            Self::Single(_) => 1,
            Self::Multiple(indices) => indices.len(),
        }
    }

    /// Indices in insertion order.
    pub fn iter(&self) -> TerminalsIter<'_> {
        TerminalsIter {
            terminals: self,
            position: 0,
        }
    }
}

pub struct TerminalsIter<'a> {
    terminals: &'a Terminals,
    position: usize,
}

impl<'a> Iterator for TerminalsIter<'a> {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        let item = match self.terminals {
            Terminals::Empty => None,
            Terminals::Single(index) if self.position == 0 => Some(*index),
            Terminals::Single(_) => None,
            Terminals::Multiple(indices) => indices.get(self.position).copied(),
        };
        if item.is_some() {
            self.position += 1;
        }
        item
    }
}

/// One prefix of some reversed word.
#[derive(Debug, Clone, Default)]
pub struct TrieNode {
    children: BTreeMap<char, NodeId>,
    terminals: Terminals,
    /// Words whose reversal continues below this node with a palindromic
    /// remainder. Only filled under [`TrieStrategy::PalindromesBelow`].
    palindromes_below: Vec<usize>,
}

impl TrieNode {
    pub fn terminals(&self) -> &Terminals {
        &self.terminals
    }

    pub fn palindromes_below(&self) -> &[usize] {
        &self.palindromes_below
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    pub fn child_count(&self) -> usize {
        self.children.len()
    }
}

/// Trie of reversed words answering "which stored words complete a
/// palindrome after this one".
#[derive(Debug, Clone)]
pub struct ReverseTrie {
    nodes: Vec<TrieNode>,
    strategy: TrieStrategy,
    word_count: usize,
}

impl ReverseTrie {
    pub fn new(strategy: TrieStrategy) -> Self {
        Self {
            nodes: vec![TrieNode::default()],
            strategy,
            word_count: 0,
        }
    }

    /// Insert every word under its position in `words`.
    pub fn build<S: AsRef<str>>(words: &[S], strategy: TrieStrategy) -> Self {
        let mut trie = Self::new(strategy);
        for (index, word) in words.iter().enumerate() {
            trie.add_word(word.as_ref(), index);
        }
        log::debug!(
            "Reverse trie built ({:?}): {} words, {} nodes",
            strategy,
            trie.word_count,
            trie.nodes.len()
        );
        trie
    }

    /// Insert `word` reversed and record `index` at its terminal node.
    /// The empty word terminates at the root.
    pub fn add_word(&mut self, word: &str, index: usize) {
        let chars = folded_chars(word);
        let precompute = self.strategy.precomputes();
        let mut node = ROOT;

        for (consumed, &c) in chars.iter().rev().enumerate() {
            // Unconsumed part of the reversal == original prefix chars[..remaining].
            let remaining = chars.len() - consumed;
            if precompute && is_palindrome(&chars[..remaining]) {
                self.nodes[node].palindromes_below.push(index);
            }
            node = self.child_or_insert(node, c);
        }

        self.nodes[node].terminals.add(index);
        self.word_count += 1;
    }

    /// Indices of stored words `w` such that `word + w` is a palindrome,
    /// possibly including the query's own index.
    ///
    /// Order: partners shorter than `word` by increasing depth, then exact
    /// reverses, then longer partners.
    pub fn palindromes_for(&self, word: &str) -> Vec<usize> {
        let chars = folded_chars(word);
        let mut candidates = Vec::new();
        let mut node = ROOT;

        for (idx, &c) in chars.iter().enumerate() {
            // stored word shorter than query: its tail must be self-palindromic
            let current = &self.nodes[node];
            if !current.terminals.is_empty() && is_palindrome(&chars[idx..]) {
                candidates.extend(current.terminals.iter());
            }

            match self.child(node, c) {
                Some(next) => node = next,
                None => return candidates,
            }
        }

        // same length: exact reverse
        let last = &self.nodes[node];
        candidates.extend(last.terminals.iter());

        // stored word longer than query
        match self.strategy {
            TrieStrategy::Traversal => {
                if last.has_children() {
                    self.collect_palindromic_descendants(node, &mut candidates);
                }
            }
            TrieStrategy::PalindromesBelow => {
                candidates.extend_from_slice(&last.palindromes_below);
            }
        }

        candidates
    }

    /// Depth-first walk below `start`, emitting the terminals of every node
    /// whose path from `start` is a non-empty palindrome.
    fn collect_palindromic_descendants(&self, start: NodeId, out: &mut Vec<usize>) {
        let mut path: Vec<char> = Vec::new();
        // (node, depth of its parent below start, edge label)
        let mut stack: Vec<(NodeId, usize, char)> = Vec::new();
        for (&c, &child) in self.nodes[start].children.iter().rev() {
            stack.push((child, 0, c));
        }

        while let Some((node, depth, label)) = stack.pop() {
            path.truncate(depth);
            path.push(label);

            let current = &self.nodes[node];
            if !current.terminals.is_empty() && is_palindrome(&path) {
                log::trace!("Palindromic tail {:?} below node {}", path, start);
                out.extend(current.terminals.iter());
            }

            for (&c, &child) in current.children.iter().rev() {
                stack.push((child, depth + 1, c));
            }
        }
    }

    fn child(&self, node: NodeId, c: char) -> Option<NodeId> {
        self.nodes[node].children.get(&c).copied()
    }

    fn child_or_insert(&mut self, node: NodeId, c: char) -> NodeId {
        if let Some(child) = self.child(node, c) {
            return child;
        }
        let child = self.nodes.len();
        self.nodes.push(TrieNode::default());
        self.nodes[node].children.insert(c, child);
        child
    }

    /// Node reached by inserting `word`, if that path exists.
    pub fn node_for(&self, word: &str) -> Option<&TrieNode> {
        let mut node = ROOT;
        for c in folded_chars(word).into_iter().rev() {
            node = self.child(node, c)?;
        }
        self.nodes.get(node)
    }

    pub fn root(&self) -> &TrieNode {
        &self.nodes[ROOT]
    }

    pub fn strategy(&self) -> TrieStrategy {
        self.strategy
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn word_count(&self) -> usize {
        self.word_count
    }

    pub fn is_empty(&self) -> bool {
        self.word_count == 0
    }
}

impl Default for ReverseTrie {
    fn default() -> Self {
        Self::new(TrieStrategy::default())
    }
}
