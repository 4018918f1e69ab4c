use std::cmp;

use crate::core::substring::SubstringMatch;
use crate::rating::count_to_f64;

/// Default exponent for [`rate_strings_1`].
///
/// Values above 1 favor a few long matches over many short ones; this
/// default was chosen empirically. Callers may override it per call.
pub const DEFAULT_WEIGHT: f64 = 3.0;

/// Rate a set of substring matches between two strings.
///
/// Each match contributes `len_factor * length^weight` to a running sum,
/// where `len_factor` biases toward matches that consume nearly all of both
/// strings: the shorter leftover (`min(len(s1), len(s2)) - length`) discounts
/// the contribution by `0.3^leftover`, scaled by the shorter string's length.
/// The final rating is the sum raised to `1 / weight`.
///
/// An empty match set rates 0. Ratings have no fixed upper bound; callers
/// compare them relatively.
#[must_use]
pub fn rate_strings_1(s1: &str, s2: &str, substrings: &[SubstringMatch], weight: f64) -> f64 {
    let mut rating = 0.0;

    for m in substrings {
        let length = count_to_f64(m.length);

        // bias towards same length matches
        let leftover = f64::min(
            count_to_f64(s1.len()) - length,
            count_to_f64(s2.len()) - length,
        );
        let len_factor = count_to_f64(cmp::min(s1.len(), s2.len())) * 0.3_f64.powf(leftover);

        rating += len_factor * length.powf(weight);
    }

    rating.powf(weight.recip())
}
