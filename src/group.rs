//! Rectangular groups of cells.

use crate::bitset::BitSet;
use crate::grid::{Cell, Grid};

/// A `height x width` rectangle anchored at its top-left cell.
///
/// Rows and columns past the bottom or right edge wrap around to the top or left,
/// so a group anchored in the last column with width 2 also spans column 0.
/// Groups are compared by anchor first, which gives the deterministic order used
/// throughout cover selection.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Group {
    pub anchor: Cell,
    pub height: usize,
    pub width: usize,
}

impl Group {
    pub const fn new(anchor: Cell, height: usize, width: usize) -> Self {
        Self {
            anchor,
            height,
            width,
        }
    }

    /// Number of cells spanned.
    pub fn size(&self) -> usize {
        self.height * self.width
    }

    /// The same group with a canonical anchor: spans covering a whole axis start at 0.
    pub fn canonical(self, grid: &Grid) -> Self {
        let row = if self.height == grid.rows() { 0 } else { self.anchor.row };
        let col = if self.width == grid.cols() { 0 } else { self.anchor.col };
        Self::new(Cell::new(row, col), self.height, self.width)
    }

    /// Does the group cross the bottom edge back to row 0?
    pub fn wraps_rows(&self, grid: &Grid) -> bool {
        self.height < grid.rows() && self.anchor.row + self.height > grid.rows()
    }

    /// Does the group cross the right edge back to column 0?
    pub fn wraps_columns(&self, grid: &Grid) -> bool {
        self.width < grid.cols() && self.anchor.col + self.width > grid.cols()
    }

    /// Row indices spanned, top to bottom, wrap resolved.
    pub fn rows<'a>(&self, grid: &'a Grid) -> impl Iterator<Item = usize> + 'a {
        let (start, rows) = (self.anchor.row, grid.rows());
        (0..self.height).map(move |k| (start + k) % rows)
    }

    /// Column indices spanned, left to right, wrap resolved.
    pub fn columns<'a>(&self, grid: &'a Grid) -> impl Iterator<Item = usize> + 'a {
        let (start, cols) = (self.anchor.col, grid.cols());
        (0..self.width).map(move |k| (start + k) % cols)
    }

    /// Every cell spanned, row by row.
    pub fn cells<'a>(&self, grid: &'a Grid) -> impl Iterator<Item = Cell> + 'a {
        let columns: Vec<usize> = self.columns(grid).collect();
        self.rows(grid)
            .flat_map(move |row| columns.clone().into_iter().map(move |col| Cell::new(row, col)))
    }

    /// Linear indices of every cell spanned.
    pub fn cell_set(&self, grid: &Grid) -> BitSet {
        let mut set = BitSet::new(grid.rows() * grid.cols());
        set.extend(self.cells(grid).map(|cell| grid.index_of(cell)));
        set
    }
}
