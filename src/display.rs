//! Text rendering of maps and groups.
//!
//! The map is printed with its Gray-coded row and column labels, which is handy
//! in logs and when checking a cover by eye:
//!
//! ```text
//! AB\CD 00 01 11 10
//!    00  1  0  0  1
//!    01  0  1  1  0
//!    11  0  1  1  0
//!    10  1  0  0  1
//! ```

use std::fmt;

use crate::grid::Grid;
use crate::group::Group;

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let m = self.mapping();
        let row_names: String = m.row_vars().map(|v| v.letter()).collect();
        let col_names: String = m.column_vars().map(|v| v.letter()).collect();
        let corner = format!("{}\\{}", row_names, col_names);
        let row_w = m.row_bits() as usize;
        let cell_w = m.col_bits() as usize;

        write!(f, "{}", corner)?;
        for col in m.column_range() {
            write!(f, " {:0w$b}", m.column_gray(col), w = cell_w)?;
        }
        for row in m.row_range() {
            writeln!(f)?;
            let label = if row_w == 0 {
                String::new()
            } else {
                format!("{:0w$b}", m.row_gray(row), w = row_w)
            };
            write!(f, "{:>w$}", label, w = corner.len())?;
            for col in m.column_range() {
                let v = if self.value_at(row, col) { 1 } else { 0 };
                write!(f, " {:>w$}", v, w = cell_w)?;
            }
        }
        Ok(())
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}x{}@({}, {})",
            self.height, self.width, self.anchor.row, self.anchor.col
        )
    }
}
