//! Rating functions that turn raw matches into a similarity score.
//!
//! Two independent, composable scorers:
//!
//! - [`rate_strings_1`]: rates a set of substring matches between two
//!   strings, weighting each match by its length raised to a caller-tunable
//!   exponent and by how much of both strings it consumes.
//! - [`rate_strings_2`]: rates whole-string similarity by comparing every
//!   word pair through the full substring pipeline, biased toward words of
//!   similar length and toward words that are rare in a reference document.
//!
//! Ratings are non-negative with no fixed upper bound; compare them
//! relatively, not against a scale.
//!
//! ## Example
//!
//! ```rust
//! use soft_compare::core::{
//!     calculate_comparison_matrix, calculate_substring_matrix,
//!     calculate_substring_tuples,
//! };
//! use soft_compare::rating::{rate_strings_1, DEFAULT_WEIGHT};
//!
//! let (s1, s2) = ("kitten", "sitting");
//! let cm = calculate_comparison_matrix(s1, s2);
//! let sm = calculate_substring_matrix(s1, s2, &cm);
//! let matches = calculate_substring_tuples(s1, s2, &sm, 0);
//!
//! let rating = rate_strings_1(s1, s2, &matches, DEFAULT_WEIGHT);
//! assert!(rating > 0.0);
//! ```

pub mod substrings;
pub mod words;

pub use substrings::{rate_strings_1, DEFAULT_WEIGHT};
pub use words::rate_strings_2;

/// Safely convert usize to f64 for rating arithmetic.
///
/// String lengths and run lengths are well within the f64 mantissa range, so
/// the precision loss this silences cannot occur in practice.
#[inline]
pub(crate) fn count_to_f64(count: usize) -> f64 {
    #[allow(clippy::cast_precision_loss)]
    {
        count as f64
    }
}
