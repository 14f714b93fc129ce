//! Unit-cost edit distance.
//!
//! Insertions, deletions, and substitutions each cost 1. Distances are over
//! Unicode scalar values, not bytes. The fuzzy score thresholds are tuned to
//! exactly these distances.

/// Edit distance between two strings.
pub fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    levenshtein_chars(&a, &b)
}

/// Edit distance between two char slices.
///
/// Two-row dynamic programming, `O(|a|·|b|)` time and `O(|b|)` space.
pub fn levenshtein_chars(a: &[char], b: &[char]) -> usize {
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut dp: Vec<usize> = (0..=b.len()).collect();
    for (i, ac) in a.iter().enumerate() {
        let mut prev = dp[0];
        dp[0] = i + 1;

        for (j, bc) in b.iter().enumerate() {
            let temp = dp[j + 1];
            let cost = usize::from(ac != bc);
            dp[j + 1] = (dp[j + 1] + 1).min(dp[j] + 1).min(prev + cost);
            prev = temp;
        }
    }

    dp[b.len()]
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_identical() {
        assert_eq!(levenshtein("smith", "smith"), 0);
        assert_eq!(levenshtein("", ""), 0);
    }

    #[test]
    fn test_empty_side() {
        assert_eq!(levenshtein("", "abc"), 3);
        assert_eq!(levenshtein("abcd", ""), 4);
    }

    #[test]
    fn test_single_edits() {
        assert_eq!(levenshtein("smith", "smyth"), 1);
        assert_eq!(levenshtein("john", "jon"), 1);
        assert_eq!(levenshtein("jon", "john"), 1);
        assert_eq!(levenshtein("cardiology", "cardiolgy"), 1);
    }

    #[test]
    fn test_transposition_costs_two() {
        assert_eq!(levenshtein("jane", "jnae"), 2);
        assert_eq!(levenshtein("jane", "jae "), 2);
    }

    #[test]
    fn test_classic_pairs() {
        assert_eq!(levenshtein("kitten", "sitting"), 3);
        assert_eq!(levenshtein("flaw", "lawn"), 2);
    }

    #[test]
    fn test_unicode_scalars() {
        assert_eq!(levenshtein("café", "cafe"), 1);
        assert_eq!(levenshtein("müller", "muller"), 1);
    }

    proptest! {
        #[test]
        fn prop_symmetric(a in "\\PC{0,12}", b in "\\PC{0,12}") {
            prop_assert_eq!(levenshtein(&a, &b), levenshtein(&b, &a));
        }

        #[test]
        fn prop_identity(a in "\\PC{0,16}") {
            prop_assert_eq!(levenshtein(&a, &a), 0);
        }

        #[test]
        fn prop_bounded_by_longer_length(a in "[a-z]{0,10}", b in "[a-z]{0,10}") {
            let d = levenshtein(&a, &b);
            prop_assert!(d <= a.len().max(b.len()));
            prop_assert!(d >= a.len().abs_diff(b.len()));
        }

        #[test]
        fn prop_triangle_inequality(
            a in "[a-c]{0,6}",
            b in "[a-c]{0,6}",
            c in "[a-c]{0,6}",
        ) {
            prop_assert!(levenshtein(&a, &c) <= levenshtein(&a, &b) + levenshtein(&b, &c));
        }
    }
}
