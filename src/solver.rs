//! The solve pipeline: map, maximal groups, cover, expression.
//!
//! ```
//! use kmap_rs::solver::{Solver, SolverConfig};
//! use kmap_rs::expr::{Negation, Notation, VariableNames};
//!
//! let solver = Solver::new(SolverConfig {
//!     notation: Notation {
//!         names: VariableNames::Letters,
//!         negation: Negation::Tilde,
//!     },
//! });
//! // n = 3, row A = 0: columns BC = 10 and 00
//! let solution = solver
//!     .solve(3, &[[true, false, false, true], [false, false, false, false]])
//!     .unwrap();
//! assert_eq!(solution.to_string(), "~A*~C");
//! assert!(solution.cover.groups()[0].wraps_columns(&solution.grid));
//! ```

use std::fmt;

use log::debug;

use crate::cover::{select_minimal_cover, Cover};
use crate::error::Result;
use crate::expr::{build_expression, Notation, SumOfProducts};
use crate::finder::find_maximal_groups;
use crate::grid::Grid;

/// Solver options.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct SolverConfig {
    /// Notation used when a [`Solution`] is displayed
    pub notation: Notation,
}

/// Everything computed for one map.
#[derive(Debug, Clone)]
pub struct Solution {
    /// The map that was solved
    pub grid: Grid,
    /// Selected groups, for highlighting on a map display
    pub cover: Cover,
    /// The minimized expression
    pub expression: SumOfProducts,
    /// Number of maximal groups the cover was chosen from
    pub groups_considered: usize,
    notation: Notation,
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.expression.display(self.notation))
    }
}

/// Runs solve requests. Holds only configuration, so one solver can serve any
/// number of independent maps.
#[derive(Debug, Clone, Default)]
pub struct Solver {
    config: SolverConfig,
}

impl Solver {
    pub fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    /// Solves the map of `variables` variables given as a `rows x cols` matrix.
    pub fn solve<R: AsRef<[bool]>>(&self, variables: usize, matrix: &[R]) -> Result<Solution> {
        let grid = Grid::new(variables, matrix)?;
        self.solve_grid(grid)
    }

    /// Solves an already constructed map.
    pub fn solve_grid(&self, grid: Grid) -> Result<Solution> {
        debug!("solve_grid:\n{}", grid);
        let candidates = find_maximal_groups(&grid);
        let cover = select_minimal_cover(&candidates, &grid.true_cell_set(), &grid)?;
        let expression = build_expression(&cover, grid.mapping());
        debug!("solve_grid: {}", expression.display(self.config.notation));
        Ok(Solution {
            grid,
            cover,
            expression,
            groups_considered: candidates.len(),
            notation: self.config.notation,
        })
    }
}

/// Minimizes the map of `variables` variables given as a `rows x cols` matrix.
///
/// This is the single entry point for callers that only need the expression.
pub fn solve<R: AsRef<[bool]>>(variables: usize, matrix: &[R]) -> Result<SumOfProducts> {
    Solver::default()
        .solve(variables, matrix)
        .map(|solution| solution.expression)
}
