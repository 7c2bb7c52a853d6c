//! Type-safe wrappers for map variables and literals.
//!
//! Variables are numbered from zero in naming order: variable 0 is `A`, the most
//! significant bit of a minterm index. A [`Lit`] pairs a variable with a polarity
//! and is the building block of product terms.
use std::fmt;
use std::ops::Neg;

/// Largest number of variables a map can carry.
pub const MAX_VARIABLES: usize = 10;

/// A variable identifier (0-indexed).
///
/// # Invariants
///
/// - Variable IDs are below [`MAX_VARIABLES`]
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Var(u32);

impl Var {
    /// Creates a new variable with the given ID.
    ///
    /// # Panics
    ///
    /// Panics if `id >= MAX_VARIABLES`.
    pub fn new(id: u32) -> Self {
        assert!(
            (id as usize) < MAX_VARIABLES,
            "Variable IDs must be below {}",
            MAX_VARIABLES
        );
        Var(id)
    }

    /// Returns the raw variable ID as a `u32`.
    pub fn id(self) -> u32 {
        self.0
    }

    /// Returns the variable's position as a `usize`.
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// The letter naming this variable: `A` for 0, `B` for 1, and so on.
    pub fn letter(self) -> char {
        (b'A' + self.0 as u8) as char
    }

    /// Positive literal of this variable.
    pub fn pos(self) -> Lit {
        Lit::positive(self)
    }

    /// Negative literal of this variable.
    pub fn neg(self) -> Lit {
        Lit::negative(self)
    }
}

impl fmt::Display for Var {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

impl From<Var> for u32 {
    fn from(var: Var) -> Self {
        var.0
    }
}

/// A literal: a variable or its complement.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Lit {
    var: Var,
    negated: bool,
}

impl Lit {
    pub fn positive(var: Var) -> Self {
        Lit { var, negated: false }
    }

    pub fn negative(var: Var) -> Self {
        Lit { var, negated: true }
    }

    /// Builds a literal that is true exactly when `var` has the given value.
    pub fn with_value(var: Var, value: bool) -> Self {
        Lit {
            var,
            negated: !value,
        }
    }

    pub fn var(self) -> Var {
        self.var
    }

    pub fn is_positive(self) -> bool {
        !self.negated
    }

    pub fn is_negated(self) -> bool {
        self.negated
    }

    /// Evaluates the literal under the given variable value.
    pub fn holds(self, value: bool) -> bool {
        value != self.negated
    }
}

impl Neg for Lit {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Lit {
            var: self.var,
            negated: !self.negated,
        }
    }
}

impl fmt::Display for Lit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negated {
            write!(f, "{}'", self.var)
        } else {
            write!(f, "{}", self.var)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_var_creation() {
        let a = Var::new(0);
        let b = Var::new(1);
        assert_eq!(a.id(), 0);
        assert_eq!(b.index(), 1);
        assert!(a < b);
        assert_eq!(a.to_string(), "A");
        assert_eq!(Var::new(9).to_string(), "J");
    }

    #[test]
    #[should_panic(expected = "Variable IDs must be below 10")]
    fn test_var_out_of_range_panics() {
        Var::new(10);
    }

    #[test]
    fn test_lit_polarity() {
        let a = Var::new(0);
        let pos = a.pos();
        let neg = a.neg();
        assert!(pos.is_positive());
        assert!(neg.is_negated());
        assert_eq!(-pos, neg);
        assert_eq!(-neg, pos);
        assert_eq!(Lit::with_value(a, true), pos);
        assert_eq!(Lit::with_value(a, false), neg);
    }

    #[test]
    fn test_lit_holds() {
        let b = Var::new(1);
        assert!(b.pos().holds(true));
        assert!(!b.pos().holds(false));
        assert!(b.neg().holds(false));
        assert!(!b.neg().holds(true));
    }

    #[test]
    fn test_lit_display() {
        let c = Var::new(2);
        assert_eq!(c.pos().to_string(), "C");
        assert_eq!(c.neg().to_string(), "C'");
    }
}
