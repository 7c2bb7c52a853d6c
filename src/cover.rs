//! Selection of a minimal covering subset of maximal groups.
//!
//! Selection runs in three phases:
//!
//! 1. **Essential groups.** A group that is the only candidate covering some true
//!    cell must be part of every cover, so all of them are taken first.
//! 2. **Greedy completion.** While true cells remain uncovered, take the candidate
//!    covering the most of them. Ties go to the larger group (fewer literals), then
//!    to the lowest anchor, row before column.
//! 3. **Redundancy pass.** Drop every selected group whose cells are all covered by
//!    the other selected groups, trying the smallest groups first.
//!
//! Set cover is NP-hard and the result is not guaranteed to be globally minimum,
//! but it always covers every true cell and no single group can be removed from it.

use std::cmp::{Ordering, Reverse};

use log::{debug, trace};

use crate::bitset::BitSet;
use crate::error::{KmapError, Result};
use crate::grid::Grid;
use crate::group::Group;

/// A set of groups covering every true cell of a map.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cover {
    groups: Vec<Group>,
}

impl Cover {
    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Group> {
        self.groups.iter()
    }

    /// Union of the cells of all groups, as linear indices.
    pub fn covered_cells(&self, grid: &Grid) -> BitSet {
        let mut covered = BitSet::new(grid.rows() * grid.cols());
        for group in &self.groups {
            covered.union_with(&group.cell_set(grid));
        }
        covered
    }
}

impl<'a> IntoIterator for &'a Cover {
    type Item = &'a Group;
    type IntoIter = std::slice::Iter<'a, Group>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.iter()
    }
}

/// Selects a cover of `true_cells` from `candidates`.
///
/// Candidates are expected to be valid maximal groups of `grid`, as returned by
/// [`find_maximal_groups`][crate::finder::find_maximal_groups]. Fails with
/// [`KmapError::UnsatisfiableCover`] if some true cell lies in no candidate.
pub fn select_minimal_cover(candidates: &[Group], true_cells: &BitSet, grid: &Grid) -> Result<Cover> {
    if true_cells.is_empty() {
        return Ok(Cover::default());
    }
    if candidates.is_empty() {
        return Err(KmapError::UnsatisfiableCover {
            uncovered: true_cells.len(),
        });
    }

    let num_cells = grid.rows() * grid.cols();
    let sets: Vec<BitSet> = candidates.iter().map(|g| g.cell_set(grid)).collect();

    // Candidates covering each cell
    let mut owners: Vec<Vec<usize>> = vec![Vec::new(); num_cells];
    for (i, set) in sets.iter().enumerate() {
        for cell in set.iter() {
            owners[cell].push(i);
        }
    }

    let uncoverable = true_cells.iter().filter(|&c| owners[c].is_empty()).count();
    if uncoverable > 0 {
        return Err(KmapError::UnsatisfiableCover {
            uncovered: uncoverable,
        });
    }

    let mut selected = vec![false; candidates.len()];
    let mut essential = vec![false; candidates.len()];
    let mut covered = BitSet::new(num_cells);

    for cell in true_cells.iter() {
        if let [only] = owners[cell][..] {
            if !essential[only] {
                trace!("essential {:?} (sole cover of {:?})", candidates[only], grid.cell_at(cell));
                essential[only] = true;
                selected[only] = true;
                covered.union_with(&sets[only]);
            }
        }
    }
    debug!(
        "select_minimal_cover: {} candidates, {} essential",
        candidates.len(),
        essential.iter().filter(|&&e| e).count()
    );

    while true_cells.count_missing_from(&covered) > 0 {
        let best = (0..candidates.len())
            .filter(|&i| !selected[i])
            .map(|i| (i, sets[i].count_missing_from(&covered)))
            .max_by(|&(i, gain_i), &(j, gain_j)| {
                gain_i
                    .cmp(&gain_j)
                    .then_with(|| candidates[i].size().cmp(&candidates[j].size()))
                    .then_with(|| candidates[j].cmp(&candidates[i]))
            });
        match best {
            Some((i, gain)) if gain > 0 => {
                trace!("greedy pick {:?} (+{} cells)", candidates[i], gain);
                selected[i] = true;
                covered.union_with(&sets[i]);
            }
            _ => {
                return Err(KmapError::UnsatisfiableCover {
                    uncovered: true_cells.count_missing_from(&covered),
                })
            }
        }
    }

    // Redundancy pass
    let mut multiplicity = vec![0u32; num_cells];
    for i in (0..candidates.len()).filter(|&i| selected[i]) {
        for cell in sets[i].iter() {
            multiplicity[cell] += 1;
        }
    }
    let mut removable: Vec<usize> = (0..candidates.len())
        .filter(|&i| selected[i] && !essential[i])
        .collect();
    removable.sort_by_key(|&i| (candidates[i].size(), Reverse(candidates[i])));
    for i in removable {
        if sets[i].iter().all(|cell| multiplicity[cell] >= 2) {
            trace!("redundant {:?}", candidates[i]);
            selected[i] = false;
            for cell in sets[i].iter() {
                multiplicity[cell] -= 1;
            }
        }
    }

    let mut groups: Vec<Group> = (0..candidates.len())
        .filter(|&i| selected[i])
        .map(|i| candidates[i])
        .collect();
    groups.sort_by(|a, b| match a.anchor.cmp(&b.anchor) {
        Ordering::Equal => b.size().cmp(&a.size()).then_with(|| a.cmp(b)),
        other => other,
    });
    debug!("select_minimal_cover: {} groups selected", groups.len());

    Ok(Cover { groups })
}
