//! Diagnostic renderers for the comparison pipeline.
//!
//! Purely presentational: render a [`SubstringMatrix`] or
//! [`ComparisonMatrix`] as an aligned grid, or a set of
//! [`SubstringMatch`]es as a two-string alignment, to any [`io::Write`]
//! sink. The exact formatting is human-readable output, not a stable
//! contract.

use std::io;

use crate::core::matrix::{ComparisonMatrix, SubstringMatrix};
use crate::core::substring::SubstringMatch;

const CELL_WIDTH: usize = 2;

/// Render a run-length table as an aligned grid.
///
/// Row headers are the bytes of `s1`, column headers the bytes of `s2`; zero
/// cells print blank. Border rows beyond the headers are omitted.
///
/// # Errors
///
/// Returns any error raised by the sink.
pub fn print_substring_matrix<W: io::Write>(
    s1: &str,
    s2: &str,
    sm: &SubstringMatrix,
    sink: &mut W,
) -> io::Result<()> {
    let bytes_a = s1.as_bytes();
    let bytes_b = s2.as_bytes();
    debug_assert_eq!(sm.rows(), bytes_a.len() + 2);
    debug_assert_eq!(sm.cols(), bytes_b.len() + 2);
    let width = CELL_WIDTH;

    for i in 0..=bytes_a.len() {
        for j in 0..=bytes_b.len() {
            let cell = if i == 0 && j == 0 {
                String::new()
            } else if j == 0 {
                char::from(bytes_a[i - 1]).to_string()
            } else if i == 0 {
                char::from(bytes_b[j - 1]).to_string()
            } else if sm.get(i, j) > 0 {
                sm.get(i, j).to_string()
            } else {
                String::new()
            };
            write!(sink, "{cell:>width$}, ")?;
        }
        writeln!(sink)?;
    }

    Ok(())
}

/// Render a comparison matrix as an aligned grid.
///
/// Converts the boolean grid into a 0/1 run-length table and reuses the grid
/// renderer, so matching cells print `1` and mismatches print blank.
///
/// # Errors
///
/// Returns any error raised by the sink.
pub fn print_comparison_matrix<W: io::Write>(
    s1: &str,
    s2: &str,
    cm: &ComparisonMatrix,
    sink: &mut W,
) -> io::Result<()> {
    // A comparison matrix is a run-length table truncated at 1; rebuilding
    // through the DP builder would lengthen runs, so copy cell by cell.
    let mut ones = SubstringMatrix::zeroed(s1.len() + 2, s2.len() + 2);
    for i in 0..cm.rows() {
        for j in 0..cm.cols() {
            if cm.get(i, j) {
                ones.set(i + 1, j + 1, 1);
            }
        }
    }

    print_substring_matrix(s1, s2, &ones, sink)
}

/// Render substring matches as a two-string alignment.
///
/// Prints `s1`, then one line per match with the matched bytes in place and
/// every other position masked by underscores, then the same for `s2`, so
/// the matched regions line up visually under each full string. Matches are
/// ordered by length: descending for the first string's lines, ascending for
/// the second's, keeping the longest match adjacent to each full string.
///
/// # Errors
///
/// Returns any error raised by the sink.
pub fn print_substring_tuples<W: io::Write>(
    s1: &str,
    s2: &str,
    substrings: &[SubstringMatch],
    sink: &mut W,
) -> io::Result<()> {
    let mut sorted: Vec<SubstringMatch> = substrings.to_vec();
    sorted.sort_by_key(|m| m.length);

    writeln!(sink, "1: {s1}")?;
    for m in sorted.iter().rev() {
        writeln!(sink, "++ {}", masked_line(s1, *m, m.start_a))?;
    }
    for m in &sorted {
        writeln!(sink, "-- {}", masked_line(s2, *m, m.start_b))?;
    }
    writeln!(sink, "2: {s2}")?;

    Ok(())
}

/// The matched run in place, with non-matched regions masked by underscores.
fn masked_line(s: &str, m: SubstringMatch, start: usize) -> String {
    format!(
        "{}{}{}",
        "_".repeat(start),
        m.text_at(s, start),
        "_".repeat(s.len() - start - m.length)
    )
}
