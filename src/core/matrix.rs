/// A byte-equality grid between two strings.
///
/// Cell `(i, j)` is `true` iff byte `i` of the first string equals byte `j`
/// of the second. Dimensions are `len(s1) x len(s2)`; either dimension may be
/// zero for empty inputs.
#[derive(Debug, Clone)]
pub struct ComparisonMatrix {
    rows: usize,
    cols: usize,
    cells: Vec<Vec<bool>>,
}

impl ComparisonMatrix {
    /// Number of rows (bytes in the first string).
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns (bytes in the second string).
    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Whether byte `i` of the first string equals byte `j` of the second.
    ///
    /// # Panics
    ///
    /// Panics if `i >= rows()` or `j >= cols()`.
    #[must_use]
    pub fn get(&self, i: usize, j: usize) -> bool {
        self.cells[i][j]
    }
}

/// A longest-common-substring run-length table.
///
/// Dimensions are `(len(s1) + 2) x (len(s2) + 2)` with a one-cell border of
/// zeros on all four sides. Interior cell `(i + 1, j + 1)` holds the length
/// of the matching run ending at byte `i` of the first string and byte `j`
/// of the second: `0` when the bytes differ, otherwise one more than the
/// upper-left diagonal neighbor.
///
/// The border serves two purposes: runs starting at offset 0 in either
/// string read a zero predecessor, and a zero always follows the last
/// possible match position, so run termination is detected uniformly without
/// special-casing string ends.
#[derive(Debug, Clone)]
pub struct SubstringMatrix {
    rows: usize,
    cols: usize,
    cells: Vec<Vec<usize>>,
}

impl SubstringMatrix {
    /// An all-zero table with the given bordered dimensions.
    #[must_use]
    pub fn zeroed(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![vec![0; cols]; rows],
        }
    }

    /// Overwrite the run length at cell `(i, j)` in bordered coordinates.
    ///
    /// # Panics
    ///
    /// Panics if `i >= rows()` or `j >= cols()`.
    pub fn set(&mut self, i: usize, j: usize, value: usize) {
        self.cells[i][j] = value;
    }

    /// Number of rows, including the two border rows.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns, including the two border columns.
    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Run length at cell `(i, j)` in bordered coordinates.
    ///
    /// # Panics
    ///
    /// Panics if `i >= rows()` or `j >= cols()`.
    #[must_use]
    pub fn get(&self, i: usize, j: usize) -> usize {
        self.cells[i][j]
    }

    /// Length of the longest common substring recorded in the table.
    ///
    /// Zero when the two strings share no bytes.
    #[must_use]
    pub fn longest_run(&self) -> usize {
        self.cells
            .iter()
            .flat_map(|row| row.iter().copied())
            .max()
            .unwrap_or(0)
    }
}

/// Build the byte-equality grid for two strings.
///
/// Comparison is byte-by-byte, so multi-byte UTF-8 characters are compared
/// crudely rather than codepoint-by-codepoint. This is documented behavior:
/// identical multi-byte sequences still match in full, but partial byte
/// overlaps between distinct characters can also match.
#[must_use]
pub fn calculate_comparison_matrix(s1: &str, s2: &str) -> ComparisonMatrix {
    let a = s1.as_bytes();
    let b = s2.as_bytes();

    let cells = a
        .iter()
        .map(|&byte_a| b.iter().map(|&byte_b| byte_a == byte_b).collect())
        .collect();

    ComparisonMatrix {
        rows: a.len(),
        cols: b.len(),
        cells,
    }
}

/// Build the run-length table from a comparison matrix.
///
/// Standard longest-common-substring dynamic programming: wherever the bytes
/// match, propagate `1 +` the diagonal predecessor; otherwise reset to zero.
/// The result carries the one-cell zero border described on
/// [`SubstringMatrix`].
#[must_use]
pub fn calculate_substring_matrix(s1: &str, s2: &str, cm: &ComparisonMatrix) -> SubstringMatrix {
    let rows = s1.len() + 2;
    let cols = s2.len() + 2;
    let mut cells = vec![vec![0usize; cols]; rows];

    for i in 0..s1.len() {
        for j in 0..s2.len() {
            if cm.get(i, j) {
                cells[i + 1][j + 1] = cells[i][j] + 1;
            }
        }
    }

    SubstringMatrix { rows, cols, cells }
}
