//! Case-insensitive palindrome tests over character sequences.
//!
//! Every comparison goes through [`fold_char`], the same fold the reverse trie
//! uses for its child keys, so a trie answer and a direct test always agree.

use std::ops::{Bound, RangeBounds};

/// Fold a character for case-insensitive comparison.
///
/// Characters whose lowercase form is a single character map to it; the rare
/// characters that lowercase to several characters are kept as they are.
#[inline]
pub fn fold_char(c: char) -> char {
    let mut lower = c.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(single), None) => single,
        _ => c,
    }
}

/// Folded characters of `word`, in order.
pub fn folded_chars(word: &str) -> Vec<char> {
    word.chars().map(fold_char).collect()
}

/// True when the whole of `seq` reads the same in both directions.
#[inline]
pub fn is_palindrome(seq: &[char]) -> bool {
    if seq.len() < 2 {
        return true;
    }

    let mut lo = 0;
    let mut hi = seq.len() - 1;
    while lo < hi {
        if fold_char(seq[lo]) != fold_char(seq[hi]) {
            return false;
        }
        lo += 1;
        hi -= 1;
    }
    true
}

/// Palindrome test over a contiguous sub-range of `seq`.
///
/// Inclusive bounds are written `start..=end`; an empty range such as `3..3`
/// is always a palindrome.
///
/// # Panics
///
/// Panics if the range reaches past the end of `seq`, like slice indexing.
pub fn is_palindrome_range<R: RangeBounds<usize>>(seq: &[char], range: R) -> bool {
    let start = match range.start_bound() {
        Bound::Included(&s) => s,
        Bound::Excluded(&s) => s + 1,
        Bound::Unbounded => 0,
    };
    let end = match range.end_bound() {
        Bound::Included(&e) => e + 1,
        Bound::Excluded(&e) => e,
        Bound::Unbounded => seq.len(),
    };
    if start >= end {
        return true;
    }
    is_palindrome(&seq[start..end])
}

/// Convenience wrapper for string slices.
pub fn is_palindrome_str(s: &str) -> bool {
    let chars: Vec<char> = s.chars().collect();
    is_palindrome(&chars)
}
