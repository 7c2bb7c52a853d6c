//! Variable-to-axis mapping of a Karnaugh map.
//!
//! For `n` variables the map has `2^(n/2)` rows and `2^(n - n/2)` columns. The
//! first `n/2` variables (`A`, `B`, ...) are read off the row index, the rest off
//! the column index. Indices are interpreted in reflected Gray code, so any two
//! neighbouring rows (or columns), including the last and the first, differ in
//! exactly one variable.
//!
//! ```text
//! n = 4         CD
//!          00  01  11  10
//!  AB 00 |  0   1   3   2
//!     01 |  4   5   7   6
//!     11 | 12  13  15  14
//!     10 |  8   9  11  10
//! ```
//!
//! The numbers above are minterm indices: `(gray(row) << col_bits) | gray(col)`.

use std::ops::Range;

use crate::error::DimensionError;
use crate::types::{Var, MAX_VARIABLES};
use crate::utils::{gray, gray_inverse, log2_exact};

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct AxisMapping {
    variables: u32,
    row_bits: u32,
    col_bits: u32,
}

impl AxisMapping {
    /// Creates the mapping for `variables` variables.
    pub fn new(variables: usize) -> Result<Self, DimensionError> {
        if !(1..=MAX_VARIABLES).contains(&variables) {
            return Err(DimensionError::VariableCount { count: variables });
        }
        let variables = variables as u32;
        let row_bits = variables / 2;
        Ok(Self {
            variables,
            row_bits,
            col_bits: variables - row_bits,
        })
    }

    pub fn variable_count(&self) -> usize {
        self.variables as usize
    }

    pub fn row_bits(&self) -> u32 {
        self.row_bits
    }

    pub fn col_bits(&self) -> u32 {
        self.col_bits
    }

    pub fn rows(&self) -> usize {
        1 << self.row_bits
    }

    pub fn cols(&self) -> usize {
        1 << self.col_bits
    }

    /// Number of cells, which equals the number of minterms.
    pub fn cells(&self) -> usize {
        1 << self.variables
    }

    /// Variables labelling the rows, most significant first.
    pub fn row_vars(&self) -> impl Iterator<Item = Var> {
        (0..self.row_bits).map(Var::new)
    }

    /// Variables labelling the columns, most significant first.
    pub fn column_vars(&self) -> impl Iterator<Item = Var> {
        (self.row_bits..self.variables).map(Var::new)
    }

    pub fn vars(&self) -> impl Iterator<Item = Var> {
        (0..self.variables).map(Var::new)
    }

    pub fn is_row_var(&self, var: Var) -> bool {
        var.id() < self.row_bits
    }

    /// Minterm bit corresponding to `var`.
    pub fn var_mask(&self, var: Var) -> u32 {
        debug_assert!(var.id() < self.variables);
        1 << (self.variables - 1 - var.id())
    }

    /// Gray code of a row index, in the row variables' own bit space.
    pub fn row_gray(&self, row: usize) -> u32 {
        gray(row as u32)
    }

    /// Gray code of a column index, in the column variables' own bit space.
    pub fn column_gray(&self, col: usize) -> u32 {
        gray(col as u32)
    }

    /// Values of the row variables at `row`, positioned in minterm space.
    pub fn row_code(&self, row: usize) -> u32 {
        debug_assert!(row < self.rows());
        self.row_gray(row) << self.col_bits
    }

    /// Values of the column variables at `col`, positioned in minterm space.
    pub fn column_code(&self, col: usize) -> u32 {
        debug_assert!(col < self.cols());
        self.column_gray(col)
    }

    /// Minterm index of the cell at `(row, col)`.
    pub fn minterm(&self, row: usize, col: usize) -> usize {
        (self.row_code(row) | self.column_code(col)) as usize
    }

    /// The `(row, col)` of the cell holding `minterm`.
    pub fn cell_of(&self, minterm: usize) -> (usize, usize) {
        debug_assert!(minterm < self.cells());
        let minterm = minterm as u32;
        let col_mask = (1u32 << self.col_bits) - 1;
        let row = gray_inverse(minterm >> self.col_bits);
        let col = gray_inverse(minterm & col_mask);
        (row as usize, col as usize)
    }

    pub fn row_range(&self) -> Range<usize> {
        0..self.rows()
    }

    pub fn column_range(&self) -> Range<usize> {
        0..self.cols()
    }

    /// Bit summary of the rows `start, start + 1, ...` (`extent` of them, wrapping).
    pub fn row_span(&self, start: usize, extent: usize) -> SpanBits {
        SpanBits::over(start, extent, self.rows())
    }

    /// Bit summary of the columns `start, start + 1, ...` (`extent` of them, wrapping).
    pub fn column_span(&self, start: usize, extent: usize) -> SpanBits {
        SpanBits::over(start, extent, self.cols())
    }
}

/// Which Gray-code bits stay constant across a run of axis indices.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct SpanBits {
    /// Bits set in every code of the run.
    all: u32,
    /// Bits set in at least one code of the run.
    any: u32,
}

impl SpanBits {
    fn over(start: usize, extent: usize, len: usize) -> Self {
        debug_assert!(extent >= 1 && extent <= len);
        let mut all = u32::MAX;
        let mut any = 0;
        for k in 0..extent {
            let code = gray(((start + k) % len) as u32);
            all &= code;
            any |= code;
        }
        Self { all, any }
    }

    /// Bits taking both values somewhere in the run.
    pub fn varying(&self) -> u32 {
        self.all ^ self.any
    }

    /// Value of `bit` if it is constant over the run.
    pub fn constant(&self, bit: u32) -> Option<bool> {
        if self.varying() & bit != 0 {
            None
        } else {
            Some(self.all & bit != 0)
        }
    }

    /// A run of `extent` codes is a subcube iff exactly `log2(extent)` bits vary.
    pub fn is_subcube(&self, extent: usize) -> bool {
        log2_exact(extent).is_some_and(|k| self.varying().count_ones() == k)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimensions() {
        // n     1  2  3  4  5  6  7   8   9  10
        // rows  1  2  2  4  4  8  8  16  16  32
        // cols  2  2  4  4  8  8 16  16  32  32
        let dims: Vec<(usize, usize)> = (1..=10)
            .map(|n| {
                let m = AxisMapping::new(n).unwrap();
                (m.rows(), m.cols())
            })
            .collect();
        assert_eq!(
            dims,
            vec![
                (1, 2),
                (2, 2),
                (2, 4),
                (4, 4),
                (4, 8),
                (8, 8),
                (8, 16),
                (16, 16),
                (16, 32),
                (32, 32)
            ]
        );
    }

    #[test]
    fn test_out_of_range() {
        assert_eq!(
            AxisMapping::new(0),
            Err(DimensionError::VariableCount { count: 0 })
        );
        assert_eq!(
            AxisMapping::new(11),
            Err(DimensionError::VariableCount { count: 11 })
        );
    }

    #[test]
    fn test_minterm_layout_four_vars() {
        let m = AxisMapping::new(4).unwrap();
        let layout: Vec<Vec<usize>> = m
            .row_range()
            .map(|r| m.column_range().map(|c| m.minterm(r, c)).collect())
            .collect();
        assert_eq!(
            layout,
            vec![
                vec![0, 1, 3, 2],
                vec![4, 5, 7, 6],
                vec![12, 13, 15, 14],
                vec![8, 9, 11, 10]
            ]
        );
    }

    #[test]
    fn test_cell_of_inverts_minterm() {
        for n in 1..=10 {
            let m = AxisMapping::new(n).unwrap();
            for r in m.row_range() {
                for c in m.column_range() {
                    assert_eq!(m.cell_of(m.minterm(r, c)), (r, c));
                }
            }
        }
    }

    #[test]
    fn test_axis_variables() {
        let m = AxisMapping::new(5).unwrap();
        let rows: Vec<_> = m.row_vars().map(|v| v.to_string()).collect();
        let cols: Vec<_> = m.column_vars().map(|v| v.to_string()).collect();
        assert_eq!(rows, vec!["A", "B"]);
        assert_eq!(cols, vec!["C", "D", "E"]);
        assert!(m.is_row_var(Var::new(1)));
        assert!(!m.is_row_var(Var::new(2)));
        assert_eq!(m.var_mask(Var::new(0)), 0b10000);
        assert_eq!(m.var_mask(Var::new(4)), 0b00001);
    }

    #[test]
    fn test_span_bits() {
        let m = AxisMapping::new(6).unwrap();
        // Columns 1, 2: codes 001, 011
        let span = m.column_span(1, 2);
        assert_eq!(span.varying(), 0b010);
        assert_eq!(span.constant(0b001), Some(true));
        assert_eq!(span.constant(0b100), Some(false));
        assert_eq!(span.constant(0b010), None);
        assert!(span.is_subcube(2));

        // Columns 1..=4: codes 001, 011, 010, 110
        assert!(!m.column_span(1, 4).is_subcube(4));
        // Columns 6, 7, 0, 1: codes 101, 100, 000, 001
        let wrapped = m.column_span(6, 4);
        assert!(wrapped.is_subcube(4));
        assert_eq!(wrapped.constant(0b010), Some(false));
        // The whole axis
        assert!(m.column_span(3, 8).is_subcube(8));
    }

    #[test]
    fn test_single_variable_lives_on_columns() {
        let m = AxisMapping::new(1).unwrap();
        assert_eq!(m.row_vars().count(), 0);
        assert_eq!(m.column_vars().collect::<Vec<_>>(), vec![Var::new(0)]);
        assert_eq!(m.minterm(0, 0), 0);
        assert_eq!(m.minterm(0, 1), 1);
    }
}
