//! Core data types and pipeline stages for soft string comparison.
//!
//! This module provides the building blocks the rating engine composes:
//!
//! - [`ComparisonMatrix`]: byte-equality grid between two strings
//! - [`SubstringMatrix`]: longest-common-substring run-length table with a
//!   one-cell zero border
//! - [`SubstringMatch`]: a maximal shared run and where it occurs
//! - [`WordPattern`], [`WordFrequencies`]: tokenization and word counts
//!
//! Data flows strictly upward: raw strings → comparison matrix → run-length
//! table → substring matches. Every structure is produced fresh per call and
//! carries no hidden state; only [`WordFrequencies`] is meant to be retained
//! across calls, and that reuse is the caller's choice.
//!
//! ## Byte-wise comparison
//!
//! Strings are compared one byte at a time, not one codepoint at a time.
//! This handles UTF-8, but crudely: identical multi-byte sequences match in
//! full, while unrelated characters can share prefix bytes. This is
//! documented, accepted behavior.

pub mod matrix;
pub mod substring;
pub mod words;

pub use matrix::{
    calculate_comparison_matrix, calculate_substring_matrix, ComparisonMatrix, SubstringMatrix,
};
pub use substring::{calculate_substring_tuples, SubstringMatch};
pub use words::{
    calculate_word_frequencies, read_document, words_in_string, DocumentError, WordFrequencies,
    WordPattern,
};
