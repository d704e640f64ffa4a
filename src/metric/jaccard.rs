//! Jaccard similarity over character sets.

use std::collections::HashSet;

/// `|A ∩ B| / |A ∪ B|` where `A` and `B` are the sets of chars in each string.
///
/// Two empty strings score 0.
pub fn jaccard(a: &str, b: &str) -> f64 {
    let set_a: HashSet<char> = a.chars().collect();
    let set_b: HashSet<char> = b.chars().collect();

    let union = set_a.union(&set_b).count();
    if union == 0 {
        return 0.0;
    }
    let intersection = set_a.intersection(&set_b).count();
    intersection as f64 / union as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical() {
        assert_eq!(jaccard("bank", "bank"), 1.0);
    }

    #[test]
    fn test_both_empty_is_zero() {
        assert_eq!(jaccard("", ""), 0.0);
    }

    #[test]
    fn test_one_empty_is_zero() {
        assert_eq!(jaccard("bank", ""), 0.0);
    }

    #[test]
    fn test_disjoint() {
        assert_eq!(jaccard("abc", "xyz"), 0.0);
    }

    #[test]
    fn test_sets_ignore_order_and_repeats() {
        // {p, a, y, l} for both
        assert_eq!(jaccard("paypal", "lapy"), 1.0);
    }

    #[test]
    fn test_partial_overlap() {
        // {p,a,y,1} vs {p,a,y,l}: 3 shared of 5
        assert!((jaccard("paypa1", "paypal") - 0.6).abs() < 1e-12);
    }

    #[test]
    fn test_symmetric() {
        for (a, b) in [("amazon", "amaz0n"), ("g00gle", "google"), ("x", "")] {
            assert_eq!(jaccard(a, b), jaccard(b, a));
        }
    }
}
