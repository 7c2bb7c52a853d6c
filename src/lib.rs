//! # kmap-rs: Karnaugh map minimization in Rust
//!
//! **`kmap-rs`** turns the truth table of a boolean function over 1 to 10 variables,
//! laid out as a Karnaugh map, into a minimal sum-of-products expression.
//!
//! ## What is a Karnaugh map?
//!
//! A Karnaugh map arranges the `2^n` values of a function in a grid whose row and
//! column indices are read in Gray code. Neighbouring cells, including cells on
//! opposite edges, differ in exactly one variable, so a rectangle of `2^k` true
//! cells is a product term with `k` fewer literals than a single minterm.
//! Minimization is then a covering problem: pick few, large rectangles that
//! together cover every true cell.
//!
//! ## Basic Usage
//!
//! ```rust
//! use kmap_rs::solver::solve;
//!
//! // n = 3: A on rows, BC on columns (00, 01, 11, 10)
//! let sop = solve(3, &[
//!     [true, true, false, false],
//!     [false, true, true, false],
//! ])
//! .unwrap();
//! assert_eq!(sop.to_string(), "A'B' + AC");
//!
//! // The result evaluates to the input on every minterm
//! assert_eq!(sop.truth_table(), vec![true, true, false, false, false, true, false, true]);
//! ```
//!
//! ## Pipeline
//!
//! 1. [`grid`]: the map, built once per request and read-only afterwards.
//! 2. [`finder`]: every maximal power-of-two rectangle of true cells, wrapping at the edges,
//!    with validity decided by [`adjacency`].
//! 3. [`cover`]: essential groups, greedy completion and a redundancy pass.
//! 4. [`expr`]: one product term per selected group, joined into a [`SumOfProducts`][expr::SumOfProducts].
//!
//! [`solver`] ties the stages together; nothing is kept between requests.

pub mod adjacency;
pub mod axis;
pub mod bitset;
pub mod cover;
pub mod display;
pub mod error;
pub mod expr;
pub mod finder;
pub mod grid;
pub mod group;
pub mod solver;
pub mod types;
pub mod utils;

pub use error::{KmapError, Result};
pub use solver::solve;
