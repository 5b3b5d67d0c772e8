//! Known inputs with hand-checked answers, run against both trie strategies.

#[cfg(test)]
mod tests {
    use palindrome_pairs::{find_pairs, find_pairs_with, naive_pairs, Pair, PairConfig, TrieStrategy};

    const STRATEGIES: [TrieStrategy; 2] =
        [TrieStrategy::Traversal, TrieStrategy::PalindromesBelow];

    fn pairs_sorted(words: &[&str], strategy: TrieStrategy) -> Vec<Pair> {
        let mut pairs = find_pairs_with(words, PairConfig::with_strategy(strategy));
        pairs.sort_unstable();
        pairs
    }

    fn assert_pairs(words: &[&str], expected: &[Pair]) {
        let mut expected = expected.to_vec();
        expected.sort_unstable();
        for strategy in STRATEGIES {
            assert_eq!(
                pairs_sorted(words, strategy),
                expected,
                "strategy {strategy:?} on {words:?}"
            );
        }
        assert_eq!(naive_pairs(words), expected, "naive on {words:?}");
    }

    #[test]
    fn mixed_lengths() {
        assert_pairs(
            &["abcd", "dcba", "lls", "s", "sssll"],
            &[(0, 1), (1, 0), (3, 2), (2, 4)],
        );
    }

    #[test]
    fn exact_reverses() {
        assert_pairs(&["bat", "tab", "cat"], &[(0, 1), (1, 0)]);
    }

    #[test]
    fn empty_word_with_single_letter() {
        assert_pairs(&["a", ""], &[(0, 1), (1, 0)]);
    }

    #[test]
    fn degenerate_inputs() {
        assert_pairs(&[], &[]);
        assert_pairs(&["abc"], &[]);
        assert_pairs(&[""], &[]);
    }

    #[test]
    fn only_empty_words() {
        assert_pairs(&["", ""], &[(0, 1), (1, 0)]);
    }

    #[test]
    fn duplicate_words_keep_every_index() {
        assert_pairs(&["aa", "aa"], &[(0, 1), (1, 0)]);
        assert_pairs(&["ab", "ab", "ba"], &[(0, 2), (1, 2), (2, 0), (2, 1)]);
    }

    #[test]
    fn comparison_ignores_case() {
        assert_pairs(&["Ab", "bA"], &[(0, 1), (1, 0)]);
        assert_pairs(&["Race", "CAR"], &[(0, 1)]);
    }

    #[test]
    fn pairs_are_not_assumed_symmetric() {
        // "ab" + "a" = "aba", but "a" + "ab" = "aab".
        assert_pairs(&["ab", "a"], &[(0, 1)]);
    }

    #[test]
    fn palindromic_words_pair_with_empty_word() {
        assert_pairs(
            &["aba", "", "xy", "c"],
            &[(0, 1), (1, 0), (1, 3), (3, 1)],
        );
    }

    #[test]
    fn repeated_runs_are_identical() {
        let words = ["abcd", "dcba", "lls", "s", "sssll", "", "a", "aa"];
        assert_eq!(find_pairs(&words), find_pairs(&words));
        for strategy in STRATEGIES {
            let config = PairConfig::with_strategy(strategy);
            assert_eq!(
                find_pairs_with(&words, config),
                find_pairs_with(&words, config)
            );
        }
    }
}
