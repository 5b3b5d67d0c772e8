//! Palindrome pair enumeration on top of the reverse trie.

use crate::palindrome::{folded_chars, is_palindrome};
use crate::trie::{ReverseTrie, TrieStrategy};

/// An ordered pair `(i, j)` meaning `words[i] + words[j]` is a palindrome.
pub type Pair = (usize, usize);

/// Configuration options for pair enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PairConfig {
    /// How the trie answers queries for partners longer than the query word.
    pub strategy: TrieStrategy,
}

impl PairConfig {
    pub fn with_strategy(strategy: TrieStrategy) -> Self {
        Self { strategy }
    }
}

/// Find every ordered pair of distinct indices whose concatenation is a
/// palindrome, using the default configuration.
///
/// ```
/// use palindrome_pairs::find_pairs;
///
/// let pairs = find_pairs(&["bat", "tab", "cat"]);
/// assert_eq!(pairs, vec![(0, 1), (1, 0)]);
/// ```
pub fn find_pairs<S: AsRef<str>>(words: &[S]) -> Vec<Pair> {
    find_pairs_with(words, PairConfig::default())
}

/// Same as [`find_pairs`] with an explicit configuration.
///
/// Pairs are grouped by their first index in ascending order; within a group
/// they follow the trie's discovery order.
pub fn find_pairs_with<S: AsRef<str>>(words: &[S], config: PairConfig) -> Vec<Pair> {
    let trie = ReverseTrie::build(words, config.strategy);

    let mut pairs = Vec::new();
    for (index, word) in words.iter().enumerate() {
        for partner in trie.palindromes_for(word.as_ref()) {
            if partner != index {
                pairs.push((index, partner));
            }
        }
    }

    log::debug!(
        "Found {} palindrome pairs among {} words",
        pairs.len(),
        words.len()
    );
    pairs
}

/// Reference enumeration that tests every ordered pair directly.
/// Quadratic in the number of words; output sorted by `(i, j)`.
pub fn naive_pairs<S: AsRef<str>>(words: &[S]) -> Vec<Pair> {
    let folded: Vec<Vec<char>> = words.iter().map(|w| folded_chars(w.as_ref())).collect();

    let mut pairs = Vec::new();
    let mut joined: Vec<char> = Vec::new();
    for (i, left) in folded.iter().enumerate() {
        for (j, right) in folded.iter().enumerate() {
            if i == j {
                continue;
            }
            joined.clear();
            joined.extend_from_slice(left);
            joined.extend_from_slice(right);
            if is_palindrome(&joined) {
                pairs.push((i, j));
            }
        }
    }
    pairs
}
