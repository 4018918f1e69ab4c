use serde::{Deserialize, Serialize};

use crate::core::matrix::SubstringMatrix;

/// A maximal run of identical bytes shared by two strings.
///
/// "Maximal" means extending the run by one byte in either direction breaks
/// the equality. Offsets are byte offsets into each string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubstringMatch {
    /// Byte offset of the run in the first string.
    pub start_a: usize,

    /// Byte offset of the run in the second string.
    pub start_b: usize,

    /// Run length in bytes.
    pub length: usize,
}

impl SubstringMatch {
    /// The matched bytes as seen in `s`, starting at `start`.
    ///
    /// Lossy on purpose: a run may split a multi-byte character, since
    /// matching is byte-wise.
    #[must_use]
    pub fn text_at(self, s: &str, start: usize) -> std::borrow::Cow<'_, str> {
        String::from_utf8_lossy(&s.as_bytes()[start..start + self.length])
    }
}

/// Extract all maximal substring runs longer than `minimum_length`.
///
/// Scans the run-length table in row-major order over the original string
/// index space. A run has ended at `(i, j)` when that cell is zero but the
/// cell diagonally before it was positive; the run's length is read from the
/// prior cell and its start offsets recovered by subtracting the length.
/// Because the table carries a zero border, runs reaching the end of either
/// string terminate against the border and are detected by the same rule.
///
/// The filter is strict: a run of exactly `minimum_length` is dropped.
/// Results are in scan order, not sorted by any match property.
#[must_use]
pub fn calculate_substring_tuples(
    s1: &str,
    s2: &str,
    sm: &SubstringMatrix,
    minimum_length: usize,
) -> Vec<SubstringMatch> {
    let mut matches = Vec::new();

    for i in 2..s1.len() + 2 {
        for j in 2..s2.len() + 2 {
            if sm.get(i, j) == 0 && sm.get(i - 1, j - 1) > 0 {
                let length = sm.get(i - 1, j - 1);
                if length > minimum_length {
                    matches.push(SubstringMatch {
                        start_a: i - 1 - length,
                        start_b: j - 1 - length,
                        length,
                    });
                }
            }
        }
    }

    matches
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::matrix::{calculate_comparison_matrix, calculate_substring_matrix};

    fn matches_for(s1: &str, s2: &str, minimum_length: usize) -> Vec<SubstringMatch> {
        let cm = calculate_comparison_matrix(s1, s2);
        let sm = calculate_substring_matrix(s1, s2, &cm);
        calculate_substring_tuples(s1, s2, &sm, minimum_length)
    }

    #[test]
    fn kitten_sitting_contains_itt_run() {
        let matches = matches_for("kitten", "sitting", 0);
        assert!(matches.contains(&SubstringMatch {
            start_a: 1,
            start_b: 1,
            length: 3,
        }));
    }

    #[test]
    fn every_match_reads_back_identically() {
        for (s1, s2) in [("kitten", "sitting"), ("banana", "bandana")] {
            for m in matches_for(s1, s2, 0) {
                assert_eq!(m.text_at(s1, m.start_a), m.text_at(s2, m.start_b));
            }
        }
    }

    #[test]
    fn minimum_length_filter_is_strict() {
        // "itt" is the longest shared run; a minimum of exactly 3 drops it.
        let matches = matches_for("kitten", "sitting", 2);
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].length, 3);

        let matches = matches_for("kitten", "sitting", 3);
        assert!(matches.is_empty());
    }

    #[test]
    fn run_reaching_string_end_is_detected() {
        // The shared suffix terminates against the zero border, not a
        // mismatching byte.
        let matches = matches_for("xyzabc", "qqqabc", 0);
        assert!(matches.contains(&SubstringMatch {
            start_a: 3,
            start_b: 3,
            length: 3,
        }));
    }

    #[test]
    fn identical_strings_yield_full_length_self_match() {
        let matches = matches_for("abcdef", "abcdef", 0);
        assert!(matches.contains(&SubstringMatch {
            start_a: 0,
            start_b: 0,
            length: 6,
        }));
    }

    #[test]
    fn disjoint_strings_yield_no_matches() {
        assert!(matches_for("abc", "xyz", 0).is_empty());
        assert!(matches_for("", "", 0).is_empty());
        assert!(matches_for("abc", "", 0).is_empty());
    }

    #[test]
    fn repeated_content_emits_one_match_per_alignment() {
        // "aa" vs "aa" has runs ending at every diagonal drop-off: the full
        // run plus the two shifted single-byte alignments.
        let matches = matches_for("aa", "aa", 0);
        assert_eq!(matches.len(), 3);
        assert!(matches.iter().any(|m| m.length == 2));
    }
}
