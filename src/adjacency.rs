//! Validity of candidate groups on the toroidal map.
//!
//! Row and column indices are always taken modulo the map size, so a group that
//! runs off the bottom or right edge simply continues at the top or left. No
//! separate bookkeeping for "edge" groups exists.

use crate::grid::{Cell, Grid};
use crate::group::Group;
use crate::utils::is_power_of_two;

/// Checks whether the `height x width` rectangle at `anchor` is a valid group.
///
/// A group is valid iff:
/// - `height` and `width` are powers of two not exceeding the map's rows and columns,
/// - the rows it spans (and the columns it spans) form a subcube of the row (column)
///   variables, i.e. exactly `log2(extent)` of them vary along the span,
/// - every spanned cell is true.
///
/// On maps with at most four rows and columns every power-of-two run is a subcube,
/// so the second condition only bites on larger maps, where it rejects runs like
/// columns `001, 011, 010, 110` whose product term would cover false cells.
pub fn is_valid_group(grid: &Grid, anchor: Cell, height: usize, width: usize) -> bool {
    if !is_power_of_two(height) || !is_power_of_two(width) {
        return false;
    }
    if height > grid.rows() || width > grid.cols() {
        return false;
    }
    let mapping = grid.mapping();
    if !mapping.row_span(anchor.row, height).is_subcube(height) {
        return false;
    }
    if !mapping.column_span(anchor.col, width).is_subcube(width) {
        return false;
    }
    grid.count_true(anchor, height, width) == height * width
}

/// [`is_valid_group`] for an existing [`Group`].
pub fn is_valid(grid: &Grid, group: &Group) -> bool {
    is_valid_group(grid, group.anchor, group.height, group.width)
}
