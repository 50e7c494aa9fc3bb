//! Word-link adjacency rules.
//!
//! A candidate word may follow the previous word in a chain when it is one
//! "step" away under any of these rules:
//!
//! 1. Edit distance of exactly one (add, remove or replace a letter).
//! 2. Swap of two letters at any two positions.
//! 3. Reversal of the whole word.
//! 4. Shift: within the differing span, move the first letter to the end or
//!    the last letter to the front.
//! 5. Single-letter insertion/deletion, checked by removing each letter of
//!    the longer word in turn. Agrees with rule 1 for unequal lengths.
//!
//! All functions here are pure and expect lowercase input. A word is never
//! adjacent to itself, and empty input is never adjacent to anything.

use serde::{Deserialize, Serialize};

/// Which rule linked two words.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LinkKind {
    /// One letter replaced.
    Substitution,
    /// One letter added.
    Insertion,
    /// One letter removed.
    Deletion,
    /// Two letters traded places.
    Swap,
    /// The word spelled backwards.
    Reversal,
    /// The differing span rotated by one position.
    Shift,
}

impl LinkKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Substitution => "Substitution",
            Self::Insertion => "Insertion",
            Self::Deletion => "Deletion",
            Self::Swap => "Swap",
            Self::Reversal => "Reversal",
            Self::Shift => "Shift",
        }
    }
}

/// Whether `next` may legally follow `previous`.
///
/// # Example
///
/// ```rust
/// use wordchain::core::is_adjacent;
///
/// assert!(is_adjacent("care", "scare"));
/// assert!(is_adjacent("race", "care"));
/// assert!(is_adjacent("free", "reef"));
/// assert!(is_adjacent("grin", "ring"));
/// assert!(!is_adjacent("care", "care"));
/// assert!(!is_adjacent("hello", "world"));
/// ```
pub fn is_adjacent(previous: &str, next: &str) -> bool {
    link_kind(previous, next).is_some()
}

/// Classify the link between two words, or `None` if they are not adjacent.
///
/// When several rules match, the cheapest one checked wins: reversal, swap,
/// shift, then edit distance.
pub fn link_kind(previous: &str, next: &str) -> Option<LinkKind> {
    if previous.is_empty() || next.is_empty() || previous == next {
        return None;
    }

    let a: Vec<char> = previous.chars().collect();
    let b: Vec<char> = next.chars().collect();

    match b.len() as isize - a.len() as isize {
        0 => {
            if reversal(&a, &b) {
                Some(LinkKind::Reversal)
            } else if letter_swap(&a, &b) {
                Some(LinkKind::Swap)
            } else if span_shift(&a, &b) {
                Some(LinkKind::Shift)
            } else if distance(&a, &b) == 1 {
                Some(LinkKind::Substitution)
            } else {
                None
            }
        }
        1 => (single_letter_add(&a, &b) || distance(&a, &b) == 1).then_some(LinkKind::Insertion),
        -1 => (single_letter_add(&b, &a) || distance(&a, &b) == 1).then_some(LinkKind::Deletion),
        _ => None,
    }
}

/// Levenshtein distance with unit costs for insertion, deletion and
/// substitution.
pub fn edit_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    distance(&a, &b)
}

/// Whether `longer` is `shorter` with exactly one letter inserted.
pub fn is_single_letter_add(shorter: &str, longer: &str) -> bool {
    let shorter: Vec<char> = shorter.chars().collect();
    let longer: Vec<char> = longer.chars().collect();
    single_letter_add(&shorter, &longer)
}

/// Whether `b` is `a` spelled backwards (and not a palindrome of itself).
pub fn is_reversal(a: &str, b: &str) -> bool {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    reversal(&a, &b)
}

/// Whether `b` is `a` with exactly two letters traded.
pub fn is_letter_swap(a: &str, b: &str) -> bool {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    letter_swap(&a, &b)
}

/// Whether the differing span of `a` and `b` is a one-position rotation.
pub fn is_span_shift(a: &str, b: &str) -> bool {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    span_shift(&a, &b)
}

fn distance(a: &[char], b: &[char]) -> usize {
    let mut previous: Vec<usize> = (0..=b.len()).collect();
    let mut current = vec![0; b.len() + 1];

    for (i, ca) in a.iter().enumerate() {
        current[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let substitution = previous[j] + usize::from(ca != cb);
            let deletion = previous[j + 1] + 1;
            let insertion = current[j] + 1;
            current[j + 1] = substitution.min(deletion).min(insertion);
        }
        std::mem::swap(&mut previous, &mut current);
    }

    previous[b.len()]
}

fn single_letter_add(shorter: &[char], longer: &[char]) -> bool {
    if longer.len() != shorter.len() + 1 {
        return false;
    }
    (0..longer.len()).any(|skip| {
        longer[..skip]
            .iter()
            .chain(&longer[skip + 1..])
            .eq(shorter.iter())
    })
}

fn reversal(a: &[char], b: &[char]) -> bool {
    a.len() == b.len() && a != b && a.iter().rev().eq(b.iter())
}

fn letter_swap(a: &[char], b: &[char]) -> bool {
    if a.len() != b.len() || a == b {
        return false;
    }

    let mut differing = a
        .iter()
        .zip(b)
        .enumerate()
        .filter(|(_, (x, y))| x != y)
        .map(|(i, _)| i);

    match (differing.next(), differing.next(), differing.next()) {
        (Some(i), Some(j), None) => a[i] == b[j] && a[j] == b[i],
        _ => false,
    }
}

fn span_shift(a: &[char], b: &[char]) -> bool {
    if a.len() != b.len() || a == b {
        return false;
    }

    let Some(start) = (0..a.len()).find(|&i| a[i] != b[i]) else {
        return false;
    };
    let Some(end) = (0..a.len()).rev().find(|&i| a[i] != b[i]) else {
        return false;
    };

    let a_span = &a[start..=end];
    let b_span = &b[start..=end];
    is_rotated_right(a_span, b_span) || is_rotated_right(b_span, a_span)
}

/// `rotated` equals `original` with its last letter moved to the front.
fn is_rotated_right(original: &[char], rotated: &[char]) -> bool {
    match original.split_last() {
        Some((last, rest)) => std::iter::once(last).chain(rest).eq(rotated.iter()),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_is_never_adjacent_to_itself() {
        for word in ["a", "care", "noon", "level", "abba"] {
            assert!(!is_adjacent(word, word), "{word} linked to itself");
        }
    }

    #[test]
    fn empty_input_is_never_adjacent() {
        assert!(!is_adjacent("", "a"));
        assert!(!is_adjacent("a", ""));
        assert!(!is_adjacent("", ""));
    }

    #[test]
    fn insertion_and_deletion_work_both_ways() {
        assert_eq!(link_kind("sit", "site"), Some(LinkKind::Insertion));
        assert_eq!(link_kind("site", "sit"), Some(LinkKind::Deletion));
        assert_eq!(link_kind("care", "scare"), Some(LinkKind::Insertion));
        assert_eq!(link_kind("care", "cre"), Some(LinkKind::Deletion));
    }

    #[test]
    fn substitution_links() {
        assert_eq!(link_kind("care", "cure"), Some(LinkKind::Substitution));
        assert_eq!(link_kind("a", "b"), Some(LinkKind::Substitution));
    }

    #[test]
    fn swap_links_non_neighbouring_letters() {
        assert_eq!(link_kind("race", "care"), Some(LinkKind::Swap));
        assert_eq!(link_kind("mite", "time"), Some(LinkKind::Swap));
    }

    #[test]
    fn reversal_links() {
        assert_eq!(link_kind("free", "reef"), Some(LinkKind::Reversal));
        assert!(is_reversal("stop", "pots"));
        assert!(!is_reversal("noon", "noon"));
    }

    #[test]
    fn shift_moves_span_ends() {
        assert_eq!(link_kind("grin", "ring"), Some(LinkKind::Shift));
        assert_eq!(link_kind("kiss", "skis"), Some(LinkKind::Shift));
        assert_eq!(link_kind("ring", "grin"), Some(LinkKind::Shift));
        assert!(is_span_shift("skis", "kiss"));
    }

    #[test]
    fn shift_only_considers_differing_span() {
        // span "ear" -> "are" inside shared "b...d"
        assert!(is_span_shift("beard", "bared"));
        assert!(is_span_shift("beard", "bread"));
        assert!(!is_span_shift("abcde", "adcbe"));
    }

    #[test]
    fn unrelated_words_are_not_adjacent() {
        assert!(!is_adjacent("hello", "world"));
        assert!(!is_adjacent("care", "scares"));
        assert!(!is_adjacent("cat", "dog"));
    }

    #[test]
    fn swap_requires_exactly_two_differences() {
        assert!(!is_letter_swap("abc", "abd"));
        assert!(!is_letter_swap("abcd", "badc"));
        assert!(!is_letter_swap("ab", "ab"));
        assert!(is_letter_swap("ab", "ba"));
    }

    #[test]
    fn single_letter_add_matches_edit_distance() {
        for (shorter, longer) in [("sit", "site"), ("care", "scare"), ("ar", "arc")] {
            assert!(is_single_letter_add(shorter, longer));
            assert_eq!(edit_distance(shorter, longer), 1);
        }
        assert!(!is_single_letter_add("sit", "sits!"));
        assert!(!is_single_letter_add("site", "sit"));
    }

    #[test]
    fn edit_distance_classic_values() {
        assert_eq!(edit_distance("kitten", "sitting"), 3);
        assert_eq!(edit_distance("", "abc"), 3);
        assert_eq!(edit_distance("flaw", "lawn"), 2);
        assert_eq!(edit_distance("same", "same"), 0);
    }

    #[test]
    fn length_gap_of_two_is_rejected() {
        assert_eq!(link_kind("at", "cats"), None);
        assert_eq!(link_kind("cats", "at"), None);
    }
}
