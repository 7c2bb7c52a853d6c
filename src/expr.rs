//! Sum-of-products expressions built from a cover.
//!
//! Each group becomes a product term holding one literal per variable that is
//! constant over the group: positive if the variable is 1 on every spanned cell,
//! negative if it is 0 on every spanned cell. Variables that vary within the group
//! contribute nothing. The terms are joined by OR.
//!
//! ```
//! use kmap_rs::solver::solve;
//!
//! let sop = solve(2, &[[true, false], [false, true]]).unwrap();
//! assert_eq!(sop.to_string(), "A'B' + AB");
//! ```

use std::fmt;

use log::debug;

use crate::axis::AxisMapping;
use crate::cover::Cover;
use crate::group::Group;
use crate::types::{Lit, Var};

/// A product of literals, ordered by variable.
///
/// The empty product is the constant `1`.
#[derive(Debug, Clone, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Term {
    literals: Vec<Lit>,
}

impl Term {
    pub fn new(mut literals: Vec<Lit>) -> Self {
        literals.sort();
        literals.dedup();
        Self { literals }
    }

    /// The product term matching the cells of `group`.
    pub fn from_group(group: &Group, mapping: &AxisMapping) -> Self {
        let row_span = mapping.row_span(group.anchor.row, group.height);
        let column_span = mapping.column_span(group.anchor.col, group.width);

        let literals = mapping
            .vars()
            .filter_map(|var| {
                // Bit of `var` within its own axis code
                let value = if mapping.is_row_var(var) {
                    row_span.constant(mapping.var_mask(var) >> mapping.col_bits())
                } else {
                    column_span.constant(mapping.var_mask(var))
                };
                value.map(|v| Lit::with_value(var, v))
            })
            .collect();
        Self { literals }
    }

    pub fn literals(&self) -> &[Lit] {
        &self.literals
    }

    /// Is this the empty product (constant `1`)?
    pub fn is_one(&self) -> bool {
        self.literals.is_empty()
    }

    /// Evaluates the term on `minterm` over `variables` variables, `A` being the
    /// most significant bit.
    pub fn eval(&self, minterm: usize, variables: usize) -> bool {
        self.literals.iter().all(|lit| {
            let shift = variables - 1 - lit.var().index();
            lit.holds((minterm >> shift) & 1 == 1)
        })
    }
}

/// A sum of products over a fixed number of variables.
///
/// No terms means the constant `0`; a term with no literals means the constant `1`.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct SumOfProducts {
    variables: usize,
    terms: Vec<Term>,
}

impl SumOfProducts {
    pub fn new(variables: usize, terms: Vec<Term>) -> Self {
        debug_assert!(
            terms
                .iter()
                .flat_map(|t| t.literals())
                .all(|lit| lit.var().index() < variables),
            "Literal variable out of range for {} variables",
            variables
        );
        let terms = if terms.iter().any(Term::is_one) {
            vec![Term::default()]
        } else {
            terms
        };
        Self { variables, terms }
    }

    /// The constant `0` function.
    pub fn zero(variables: usize) -> Self {
        Self::new(variables, Vec::new())
    }

    /// The constant `1` function.
    pub fn one(variables: usize) -> Self {
        Self::new(variables, vec![Term::default()])
    }

    pub fn variable_count(&self) -> usize {
        self.variables
    }

    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    pub fn is_zero(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn is_one(&self) -> bool {
        self.terms.iter().any(Term::is_one)
    }

    /// Total number of literals across all terms.
    pub fn literal_count(&self) -> usize {
        self.terms.iter().map(|t| t.literals.len()).sum()
    }

    pub fn eval(&self, minterm: usize) -> bool {
        self.terms.iter().any(|t| t.eval(minterm, self.variables))
    }

    /// Values on every minterm `0..2^n`, in order.
    pub fn truth_table(&self) -> Vec<bool> {
        (0..1usize << self.variables).map(|m| self.eval(m)).collect()
    }

    /// Renders the expression with the given notation.
    pub fn display(&self, notation: Notation) -> SopDisplay<'_> {
        SopDisplay {
            sop: self,
            notation,
        }
    }
}

/// Builds the expression for `cover` under `mapping`.
///
/// An empty cover gives `0`; a cover containing a group over the whole map gives `1`.
pub fn build_expression(cover: &Cover, mapping: &AxisMapping) -> SumOfProducts {
    let terms: Vec<Term> = cover
        .iter()
        .map(|group| Term::from_group(group, mapping))
        .collect();
    let sop = SumOfProducts::new(mapping.variable_count(), terms);
    debug!(
        "build_expression: {} terms, {} literals",
        sop.terms.len(),
        sop.literal_count()
    );
    sop
}

/// How variables are named in rendered expressions.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum VariableNames {
    /// `A, B, C, ...`
    #[default]
    Letters,
    /// `x1, x2, x3, ...`
    Indexed,
}

/// How negation and conjunction are written.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum Negation {
    /// `A'B + AB'`
    #[default]
    Prime,
    /// `~A*B + A*~B`
    Tilde,
}

/// Rendering options for [`SumOfProducts`].
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct Notation {
    pub names: VariableNames,
    pub negation: Negation,
}

impl Notation {
    fn write_var(&self, f: &mut fmt::Formatter<'_>, var: Var) -> fmt::Result {
        match self.names {
            VariableNames::Letters => write!(f, "{}", var.letter()),
            VariableNames::Indexed => write!(f, "x{}", var.id() + 1),
        }
    }

    fn write_lit(&self, f: &mut fmt::Formatter<'_>, lit: Lit) -> fmt::Result {
        match self.negation {
            Negation::Prime => {
                self.write_var(f, lit.var())?;
                if lit.is_negated() {
                    write!(f, "'")?;
                }
                Ok(())
            }
            Negation::Tilde => {
                if lit.is_negated() {
                    write!(f, "~")?;
                }
                self.write_var(f, lit.var())
            }
        }
    }

    fn write_term(&self, f: &mut fmt::Formatter<'_>, term: &Term) -> fmt::Result {
        if term.is_one() {
            return write!(f, "1");
        }
        for (i, &lit) in term.literals.iter().enumerate() {
            if i > 0 && self.negation == Negation::Tilde {
                write!(f, "*")?;
            }
            self.write_lit(f, lit)?;
        }
        Ok(())
    }
}

/// Display adapter returned by [`SumOfProducts::display`].
pub struct SopDisplay<'a> {
    sop: &'a SumOfProducts,
    notation: Notation,
}

impl fmt::Display for SopDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.sop.is_zero() {
            return write!(f, "0");
        }
        for (i, term) in self.sop.terms.iter().enumerate() {
            if i > 0 {
                write!(f, " + ")?;
            }
            self.notation.write_term(f, term)?;
        }
        Ok(())
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Notation::default().write_term(f, self)
    }
}

impl fmt::Display for SumOfProducts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display(Notation::default()))
    }
}
