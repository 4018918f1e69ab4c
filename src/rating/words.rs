use std::cmp;

use tracing::debug;

use crate::core::matrix::{calculate_comparison_matrix, calculate_substring_matrix};
use crate::core::substring::calculate_substring_tuples;
use crate::core::words::{words_in_string, WordFrequencies, WordPattern};
use crate::rating::count_to_f64;
use crate::rating::substrings::{rate_strings_1, DEFAULT_WEIGHT};

/// Rate whole-string similarity word by word.
///
/// Both strings are tokenized with `pattern`; every ordered word pair
/// (repeats included) is pushed through the full substring pipeline and
/// [`rate_strings_1`] with default minimum length and weight. Each pair's
/// rating is scaled by two bias factors before accumulating:
///
/// - a length-similarity factor `min(len(w1), len(w2)) * 0.6^|len(w1) - len(w2)|`
///   rewarding words of near-equal length, and
/// - a rarity factor `(1 / max(freq(w1), freq(w2)))^2`, where a word absent
///   from `frequencies` counts as frequency 1 (maximally rare), never zero.
///
/// This is O(words(s1) × words(s2)) invocations of the substring pipeline,
/// each allocating its own matrix pair; repeated word pairs are recomputed
/// rather than memoized. The quadratic cost is inherent to the design, and
/// matrix storage dominates memory use for long words.
#[must_use]
pub fn rate_strings_2(
    s1: &str,
    s2: &str,
    frequencies: &WordFrequencies,
    pattern: &WordPattern,
) -> f64 {
    let words_a = words_in_string(s1, pattern);
    let words_b = words_in_string(s2, pattern);
    debug!(
        words_a = words_a.len(),
        words_b = words_b.len(),
        pairs = words_a.len() * words_b.len(),
        "rating word pairs"
    );

    let mut total_rating = 0.0;

    for &word_a in &words_a {
        let freq_a = frequencies.frequency(word_a);

        for &word_b in &words_b {
            let freq_b = frequencies.frequency(word_b);

            let cm = calculate_comparison_matrix(word_a, word_b);
            let sm = calculate_substring_matrix(word_a, word_b, &cm);
            let matches = calculate_substring_tuples(word_a, word_b, &sm, 0);
            let rating = rate_strings_1(word_a, word_b, &matches, DEFAULT_WEIGHT);

            // bias towards same length words
            let len_diff = word_a.len().abs_diff(word_b.len());
            let len_factor = count_to_f64(cmp::min(word_a.len(), word_b.len()))
                * 0.6_f64.powf(count_to_f64(len_diff));

            // bias towards low frequency words
            let freq_factor = (1.0 / count_to_f64(cmp::max(freq_a, freq_b))).powi(2);

            total_rating += rating * len_factor * freq_factor;
        }
    }

    total_rating
}
