//! palindrome_pairs
//!
//! Enumerates every ordered pair `(i, j)` of distinct word indices such that
//! `words[i] + words[j]` reads the same in both directions, ignoring case.
//!
//! Words are indexed in a [`ReverseTrie`] keyed by their reversed characters,
//! so each query walks only the stored words that could complete a palindrome
//! after it. Overall cost is `O(k² · n)` for `n` words of length at most `k`.
//! Two strategies are available for partners longer than the query word, see
//! [`TrieStrategy`].

pub mod palindrome;
pub mod pairs;
pub mod trie;
pub mod words;

pub use palindrome::{fold_char, is_palindrome, is_palindrome_range, is_palindrome_str};
pub use pairs::{find_pairs, find_pairs_with, naive_pairs, Pair, PairConfig};
pub use trie::{ReverseTrie, TrieStrategy};
pub use words::{load_words, parse_words, WordFormat, WordListError, WordListOptions};
