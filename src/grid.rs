//! The truth table of a function laid out as a Karnaugh map.
//!
//! A [`Grid`] is built once per solve request and is read-only afterwards. Besides
//! the cell values it keeps a summed-area table over the map tiled 2×2, so the
//! number of true cells in any rectangle (wrapping past the right and bottom
//! edges) is answered in constant time.

use log::debug;

use crate::axis::AxisMapping;
use crate::bitset::BitSet;
use crate::error::{DimensionError, Result};

/// A cell coordinate.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

#[derive(Clone)]
pub struct Grid {
    mapping: AxisMapping,
    /// Row-major cell values.
    values: Vec<bool>,
    /// Summed-area table over the 2×2-tiled map, `(2 * rows + 1) x (2 * cols + 1)`.
    prefix: Vec<u32>,
}

impl Grid {
    /// Creates a map for `variables` variables from an explicit `rows x cols` matrix.
    pub fn new<R: AsRef<[bool]>>(variables: usize, matrix: &[R]) -> Result<Self> {
        let mapping = AxisMapping::new(variables)?;
        let (rows, cols) = (mapping.rows(), mapping.cols());

        if matrix.len() != rows {
            return Err(DimensionError::RowCount {
                expected: rows,
                actual: matrix.len(),
            }
            .into());
        }
        let mut values = Vec::with_capacity(rows * cols);
        for (row, line) in matrix.iter().enumerate() {
            let line = line.as_ref();
            if line.len() != cols {
                return Err(DimensionError::ColumnCount {
                    row,
                    expected: cols,
                    actual: line.len(),
                }
                .into());
            }
            values.extend_from_slice(line);
        }

        Ok(Self::from_values(mapping, values))
    }

    /// Creates a map whose true cells are exactly the given minterms.
    pub fn from_minterms(variables: usize, minterms: &[usize]) -> Result<Self> {
        let mapping = AxisMapping::new(variables)?;
        let mut values = vec![false; mapping.cells()];
        for &m in minterms {
            if m >= mapping.cells() {
                return Err(DimensionError::Minterm {
                    minterm: m,
                    max: mapping.cells() - 1,
                }
                .into());
            }
            let (row, col) = mapping.cell_of(m);
            values[row * mapping.cols() + col] = true;
        }
        Ok(Self::from_values(mapping, values))
    }

    /// Creates a map by evaluating `f` on every minterm.
    pub fn from_fn(variables: usize, f: impl Fn(usize) -> bool) -> Result<Self> {
        let mapping = AxisMapping::new(variables)?;
        let values = mapping
            .row_range()
            .flat_map(|row| mapping.column_range().map(move |col| (row, col)))
            .map(|(row, col)| f(mapping.minterm(row, col)))
            .collect();
        Ok(Self::from_values(mapping, values))
    }

    fn from_values(mapping: AxisMapping, values: Vec<bool>) -> Self {
        let (rows, cols) = (mapping.rows(), mapping.cols());
        let width = 2 * cols + 1;
        let mut prefix = vec![0u32; (2 * rows + 1) * width];
        for i in 0..2 * rows {
            for j in 0..2 * cols {
                let v = values[(i % rows) * cols + (j % cols)] as u32;
                prefix[(i + 1) * width + (j + 1)] =
                    v + prefix[i * width + (j + 1)] + prefix[(i + 1) * width + j]
                        - prefix[i * width + j];
            }
        }

        let grid = Self {
            mapping,
            values,
            prefix,
        };
        debug!(
            "grid(n = {}, {}x{}, true = {})",
            mapping.variable_count(),
            rows,
            cols,
            grid.count_all_true()
        );
        grid
    }

    pub fn mapping(&self) -> &AxisMapping {
        &self.mapping
    }

    pub fn variable_count(&self) -> usize {
        self.mapping.variable_count()
    }

    pub fn rows(&self) -> usize {
        self.mapping.rows()
    }

    pub fn cols(&self) -> usize {
        self.mapping.cols()
    }

    /// Linear index of a cell, as used in cell [`BitSet`]s.
    pub fn index_of(&self, cell: Cell) -> usize {
        cell.row * self.cols() + cell.col
    }

    /// The cell at a linear index.
    pub fn cell_at(&self, index: usize) -> Cell {
        Cell::new(index / self.cols(), index % self.cols())
    }

    pub fn value_at(&self, row: usize, col: usize) -> bool {
        self.values[row * self.cols() + col]
    }

    /// Minterm bits contributed by the row variables at `row`.
    pub fn variable_bits_for_row(&self, row: usize) -> u32 {
        self.mapping.row_code(row)
    }

    /// Minterm bits contributed by the column variables at `col`.
    pub fn variable_bits_for_column(&self, col: usize) -> u32 {
        self.mapping.column_code(col)
    }

    pub fn minterm(&self, row: usize, col: usize) -> usize {
        self.mapping.minterm(row, col)
    }

    /// Value of the function at `minterm`.
    pub fn value_of_minterm(&self, minterm: usize) -> bool {
        let (row, col) = self.mapping.cell_of(minterm);
        self.value_at(row, col)
    }

    /// Number of true cells in the `height x width` rectangle anchored at `anchor`,
    /// wrapping around both edges.
    ///
    /// Requires `height <= rows` and `width <= cols`.
    pub fn count_true(&self, anchor: Cell, height: usize, width: usize) -> usize {
        debug_assert!(height <= self.rows() && width <= self.cols());
        let width_p = 2 * self.cols() + 1;
        let (top, left) = (anchor.row % self.rows(), anchor.col % self.cols());
        let (bottom, right) = (top + height, left + width);
        let at = |i: usize, j: usize| self.prefix[i * width_p + j];
        (at(bottom, right) + at(top, left) - at(top, right) - at(bottom, left)) as usize
    }

    fn count_all_true(&self) -> usize {
        self.values.iter().filter(|&&v| v).count()
    }

    /// True cells in row-major order.
    pub fn true_cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.values
            .iter()
            .enumerate()
            .filter(|&(_, &v)| v)
            .map(|(i, _)| self.cell_at(i))
    }

    /// Linear indices of all true cells.
    pub fn true_cell_set(&self) -> BitSet {
        let mut set = BitSet::new(self.values.len());
        set.extend(
            self.values
                .iter()
                .enumerate()
                .filter(|&(_, &v)| v)
                .map(|(i, _)| i),
        );
        set
    }

    /// The cell values as a `rows x cols` matrix.
    pub fn to_matrix(&self) -> Vec<Vec<bool>> {
        self.values.chunks(self.cols()).map(|r| r.to_vec()).collect()
    }
}

impl std::fmt::Debug for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Grid")
            .field("variables", &self.variable_count())
            .field("rows", &self.rows())
            .field("cols", &self.cols())
            .field("true_cells", &self.count_all_true())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;
    use crate::error::KmapError;

    #[test]
    fn test_new_from_matrix() {
        let grid = Grid::new(2, &[[true, false], [false, true]]).unwrap();
        assert_eq!(grid.rows(), 2);
        assert_eq!(grid.cols(), 2);
        assert!(grid.value_at(0, 0));
        assert!(!grid.value_at(0, 1));
        assert!(grid.value_at(1, 1));
        assert_eq!(grid.true_cells().collect::<Vec<_>>(), vec![Cell::new(0, 0), Cell::new(1, 1)]);
    }

    #[test]
    fn test_invalid_variable_count() {
        let matrix: [[bool; 2]; 1] = [[false, false]];
        assert_eq!(
            Grid::new(0, &matrix).unwrap_err(),
            KmapError::InvalidDimension(DimensionError::VariableCount { count: 0 })
        );
        assert_eq!(
            Grid::new(11, &matrix).unwrap_err(),
            KmapError::InvalidDimension(DimensionError::VariableCount { count: 11 })
        );
    }

    #[test]
    fn test_shape_mismatch() {
        let err = Grid::new(3, &[[true, false], [false, true]]).unwrap_err();
        assert_eq!(
            err,
            KmapError::InvalidDimension(DimensionError::ColumnCount {
                row: 0,
                expected: 4,
                actual: 2
            })
        );

        let err = Grid::new(2, &[[true, false]]).unwrap_err();
        assert_eq!(
            err,
            KmapError::InvalidDimension(DimensionError::RowCount {
                expected: 2,
                actual: 1
            })
        );

        let ragged: Vec<Vec<bool>> = vec![vec![true, true], vec![true]];
        assert!(matches!(
            Grid::new(2, &ragged),
            Err(KmapError::InvalidDimension(DimensionError::ColumnCount { row: 1, .. }))
        ));
    }

    #[test]
    fn test_from_minterms() {
        // n = 3: rows A, columns BC in order 00 01 11 10
        let grid = Grid::from_minterms(3, &[0, 3, 6]).unwrap();
        assert_eq!(
            grid.to_matrix(),
            vec![vec![true, false, true, false], vec![false, false, false, true]]
        );
        assert!(grid.value_of_minterm(6));
        assert!(!grid.value_of_minterm(7));

        assert_eq!(
            Grid::from_minterms(2, &[4]).unwrap_err(),
            KmapError::InvalidDimension(DimensionError::Minterm { minterm: 4, max: 3 })
        );
    }

    #[test]
    fn test_from_fn_matches_minterms() {
        let odd = Grid::from_fn(4, |m| m % 2 == 1).unwrap();
        let listed = Grid::from_minterms(4, &[1, 3, 5, 7, 9, 11, 13, 15]).unwrap();
        assert_eq!(odd.to_matrix(), listed.to_matrix());
    }

    #[test]
    fn test_variable_bits() {
        let grid = Grid::from_minterms(4, &[]).unwrap();
        assert_eq!(grid.variable_bits_for_row(2), 0b1100);
        assert_eq!(grid.variable_bits_for_row(3), 0b1000);
        assert_eq!(grid.variable_bits_for_column(2), 0b0011);
        assert_eq!(grid.true_cells().count(), 0);
    }

    #[test]
    fn test_count_true_wraps() {
        // 1 0 0 1
        // 1 0 0 1
        let grid = Grid::new(3, &[[true, false, false, true], [true, false, false, true]]).unwrap();
        assert_eq!(grid.count_true(Cell::new(0, 3), 2, 2), 4);
        assert_eq!(grid.count_true(Cell::new(1, 3), 2, 2), 4);
        assert_eq!(grid.count_true(Cell::new(0, 0), 2, 2), 2);
        assert_eq!(grid.count_true(Cell::new(0, 0), 2, 4), 4);
        assert_eq!(grid.count_true(Cell::new(1, 2), 1, 1), 0);
    }

    #[test]
    fn test_index_round_trip() {
        let grid = Grid::from_minterms(5, &[]).unwrap();
        for i in 0..grid.rows() * grid.cols() {
            assert_eq!(grid.index_of(grid.cell_at(i)), i);
        }
    }
}
