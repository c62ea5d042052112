use crate::types::{LcsLength, Word};

/// Longest-common-subsequence lengths for every prefix pair of two word sequences.
///
/// Cell `(i, j)` holds the LCS length of `original[..i]` and `typed[..j]`. The table is
/// stored row-major in a single buffer of `(m + 1) * (n + 1)` cells, sized once up front.
#[derive(Debug, Clone)]
pub struct LcsTable {
    rows: usize,
    cols: usize,
    cells: Vec<LcsLength>,
}

impl LcsTable {
    pub fn build(original: &[Word], typed: &[Word]) -> Self {
        let rows = original.len() + 1;
        let cols = typed.len() + 1;
        let mut cells = vec![0; rows * cols];

        for i in 1..rows {
            for j in 1..cols {
                let cell = if original[i - 1] == typed[j - 1] {
                    cells[(i - 1) * cols + (j - 1)] + 1
                } else {
                    cells[(i - 1) * cols + j].max(cells[i * cols + (j - 1)])
                };

                cells[i * cols + j] = cell;
            }
        }

        LcsTable { rows, cols, cells }
    }

    /// Panics if `i` or `j` fall outside the table.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> LcsLength {
        assert!(
            i < self.rows && j < self.cols,
            "LCS table index ({}, {}) out of bounds",
            i,
            j
        );

        self.cells[i * self.cols + j]
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Length of the longest common subsequence of the full sequences.
    pub fn lcs_length(&self) -> LcsLength {
        self.get(self.rows - 1, self.cols - 1)
    }
}
