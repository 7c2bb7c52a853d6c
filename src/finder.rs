//! Enumeration of maximal groups.
//!
//! Every true cell is tried as the anchor of every power-of-two `height x width`
//! rectangle. Valid rectangles are kept only if they cannot be doubled along either
//! axis while staying valid; a doubled rectangle containing the original must start
//! between `extent` cells before the anchor and the anchor itself.
//!
//! Doubling is enough to decide maximality: if a valid group is contained in a
//! larger valid group, the larger one's span along some axis contains an aligned
//! run of twice the smaller extent around the smaller span.

use std::collections::BTreeSet;

use log::{debug, trace};

use crate::adjacency::is_valid_group;
use crate::grid::{Cell, Grid};
use crate::group::Group;
use crate::utils::powers_of_two;

/// Finds all maximal groups of the map, in anchor order.
///
/// Returns an empty list when the map has no true cells. An isolated true cell
/// yields a `1x1` group. All maximal groups are returned, including ones of equal
/// size covering the same cell; choosing between them is left to cover selection.
pub fn find_maximal_groups(grid: &Grid) -> Vec<Group> {
    let heights: Vec<usize> = powers_of_two(grid.rows()).collect();
    let widths: Vec<usize> = powers_of_two(grid.cols()).collect();

    let mut found = BTreeSet::new();
    let mut checked = 0usize;
    for anchor in grid.true_cells() {
        for &height in &heights {
            for &width in &widths {
                checked += 1;
                if !is_valid_group(grid, anchor, height, width) {
                    continue;
                }
                let group = Group::new(anchor, height, width).canonical(grid);
                if found.contains(&group) || !is_maximal(grid, &group) {
                    continue;
                }
                trace!("maximal group {:?}", group);
                found.insert(group);
            }
        }
    }

    debug!(
        "find_maximal_groups: {} candidates checked, {} maximal",
        checked,
        found.len()
    );
    found.into_iter().collect()
}

/// Is `group` (assumed valid) free of valid groups twice as tall or twice as wide
/// that contain it?
pub fn is_maximal(grid: &Grid, group: &Group) -> bool {
    let Group {
        anchor,
        height,
        width,
    } = *group;

    if 2 * height <= grid.rows() {
        for back in 0..=height {
            let row = (anchor.row + grid.rows() - back) % grid.rows();
            if is_valid_group(grid, Cell::new(row, anchor.col), 2 * height, width) {
                return false;
            }
        }
    }
    if 2 * width <= grid.cols() {
        for back in 0..=width {
            let col = (anchor.col + grid.cols() - back) % grid.cols();
            if is_valid_group(grid, Cell::new(anchor.row, col), height, 2 * width) {
                return false;
            }
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;

    fn group(row: usize, col: usize, height: usize, width: usize) -> Group {
        Group::new(Cell::new(row, col), height, width)
    }

    #[test]
    fn test_no_true_cells() {
        let grid = Grid::from_minterms(4, &[]).unwrap();
        assert!(find_maximal_groups(&grid).is_empty());
    }

    #[test]
    fn test_all_true() {
        let grid = Grid::new(2, &[[true, true], [true, true]]).unwrap();
        assert_eq!(find_maximal_groups(&grid), vec![group(0, 0, 2, 2)]);
    }

    #[test]
    fn test_diagonal_isolated_cells() {
        let grid = Grid::new(2, &[[true, false], [false, true]]).unwrap();
        assert_eq!(
            find_maximal_groups(&grid),
            vec![group(0, 0, 1, 1), group(1, 1, 1, 1)]
        );
    }

    #[test]
    fn test_wrapping_pair() {
        // n = 3, row 0: columns 0 and 3 true
        let grid = Grid::new(3, &[[true, false, false, true], [false; 4]]).unwrap();
        assert_eq!(find_maximal_groups(&grid), vec![group(0, 3, 1, 2)]);
    }

    #[test]
    fn test_corners_form_one_quad() {
        // n = 4, the four corners: minterms 0, 2, 8, 10
        let grid = Grid::from_minterms(4, &[0, 2, 8, 10]).unwrap();
        assert_eq!(find_maximal_groups(&grid), vec![group(3, 3, 2, 2)]);
    }

    #[test]
    fn test_equal_sized_alternatives_kept() {
        // 1 1 0 0
        // 0 1 1 0
        let grid = Grid::new(3, &[[true, true, false, false], [false, true, true, false]]).unwrap();
        assert_eq!(
            find_maximal_groups(&grid),
            vec![group(0, 0, 1, 2), group(0, 1, 2, 1), group(1, 1, 1, 2)]
        );
    }

    #[test]
    fn test_overlapping_strips() {
        // 1 1 1 1
        // 0 1 1 0
        let grid = Grid::new(3, &[[true, true, true, true], [false, true, true, false]]).unwrap();
        assert_eq!(
            find_maximal_groups(&grid),
            vec![group(0, 0, 1, 4), group(0, 1, 2, 2)]
        );
    }

    #[test]
    fn test_is_maximal() {
        let grid = Grid::new(3, &[[true, true, true, true], [false, true, true, false]]).unwrap();
        assert!(!is_maximal(&grid, &group(0, 1, 1, 2)));
        assert!(!is_maximal(&grid, &group(1, 2, 1, 1)));
        assert!(is_maximal(&grid, &group(0, 1, 2, 2)));
    }
}
