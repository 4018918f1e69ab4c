//! # soft-compare
//!
//! A library for scoring how similar two text strings are.
//!
//! Rather than a single edit-distance number, `soft-compare` works from the
//! substrings and words the strings have in common: long shared substrings
//! count for a lot, and shared words count for more when they are rare in a
//! reference document.
//!
//! ## Features
//!
//! - **Substring matching**: longest-common-substring dynamic programming
//!   over a byte-equality grid, extracting every maximal shared run
//! - **Substring rating**: weighted scoring that favors matches consuming
//!   most of both strings
//! - **Word-level rating**: every word pair is compared through the full
//!   substring pipeline, biased by word-length similarity and word rarity
//! - **Diagnostics**: render the match matrices and an aligned, masked view
//!   of the shared substrings
//!
//! ## Example
//!
//! ```rust
//! use soft_compare::core::{
//!     calculate_comparison_matrix, calculate_substring_matrix,
//!     calculate_substring_tuples, calculate_word_frequencies, WordPattern,
//! };
//! use soft_compare::rating::{rate_strings_1, rate_strings_2, DEFAULT_WEIGHT};
//!
//! // Substring pipeline on a single pair of strings
//! let (s1, s2) = ("kitten", "sitting");
//! let cm = calculate_comparison_matrix(s1, s2);
//! let sm = calculate_substring_matrix(s1, s2, &cm);
//! let matches = calculate_substring_tuples(s1, s2, &sm, 0);
//! let rating = rate_strings_1(s1, s2, &matches, DEFAULT_WEIGHT);
//! assert!(rating > 0.0);
//!
//! // Word-level rating against a reference document
//! let pattern = WordPattern::default();
//! let frequencies = calculate_word_frequencies(&["the cat sat on the mat"], &pattern);
//! let word_rating = rate_strings_2("the cat", "a cat", &frequencies, &pattern);
//! assert!(word_rating > 0.0);
//! ```
//!
//! ## Byte-wise comparison
//!
//! Strings are compared byte by byte, not codepoint by codepoint. Identical
//! multi-byte UTF-8 sequences still match in full, but this is a documented,
//! accepted imprecision for multi-byte text.
//!
//! ## Modules
//!
//! - [`core`]: Matrices, substring extraction, tokenization, word counts
//! - [`rating`]: The two rating functions
//! - [`render`]: Diagnostic text renderers for matrices and alignments
//! - [`cli`]: Command-line interface implementation

pub mod cli;
pub mod core;
pub mod rating;
pub mod render;

// Re-export the public pipeline for convenience
pub use crate::core::matrix::{
    calculate_comparison_matrix, calculate_substring_matrix, ComparisonMatrix, SubstringMatrix,
};
pub use crate::core::substring::{calculate_substring_tuples, SubstringMatch};
pub use crate::core::words::{
    calculate_word_frequencies, words_in_string, WordFrequencies, WordPattern,
};
pub use crate::rating::{rate_strings_1, rate_strings_2, DEFAULT_WEIGHT};
pub use crate::render::{print_comparison_matrix, print_substring_matrix, print_substring_tuples};
