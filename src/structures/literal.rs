//! Literals are atoms paired with a (boolean) polarity.
//!
//! Or, rather, anything which has methods for returning an atom and a polarity (and a few other useful things).
//!
//! Throughout the library a literal is an [IntLiteral], a non-zero integer whose magnitude is the atom and whose sign is the polarity.
//!
//! ```rust
//! # use otter_twise::structures::literal::{IntLiteral, Literal};
//! let literal = IntLiteral::new(79, false);
//!
//! assert_eq!(literal, -79);
//! assert_eq!(literal.atom(), 79);
//! assert!(!literal.polarity());
//! assert!(literal.negate().polarity());
//! assert_eq!(literal.index() + 1, literal.negate().index());
//! ```

use crate::structures::atom::Atom;

/// Something which has methods for returning an atom and a polarity, etc.
pub trait Literal: std::cmp::Ord + std::hash::Hash + Copy {
    /// A fresh literal, specified by pairing an atom with a boolean.
    fn new(atom: Atom, polarity: bool) -> Self;

    /// The negation of the literal.
    fn negate(&self) -> Self;

    /// The atom of the literal.
    fn atom(&self) -> Atom;

    /// The polarity of the literal.
    fn polarity(&self) -> bool;

    /// A dense index of the literal, for structures indexed by literals.
    ///
    /// The index of the negative literal of an atom *a* is 2*a*, and the index of the positive literal is 2*a* + 1.
    fn index(&self) -> usize {
        ((self.atom() as usize) << 1) | (self.polarity() as usize)
    }
}

/// The representation of a literal as a signed integer.
pub type IntLiteral = i32;

impl Literal for IntLiteral {
    fn new(atom: Atom, polarity: bool) -> Self {
        match polarity {
            true => atom as IntLiteral,
            false => -(atom as IntLiteral),
        }
    }

    fn negate(&self) -> Self {
        -self
    }

    fn atom(&self) -> Atom {
        self.unsigned_abs()
    }

    fn polarity(&self) -> bool {
        self.is_positive()
    }
}

#[cfg(test)]
mod literal_tests {
    use super::*;

    #[test]
    fn indicies_are_dense() {
        let mut indicies = Vec::new();
        for atom in 1..=3 {
            indicies.push(IntLiteral::new(atom, false).index());
            indicies.push(IntLiteral::new(atom, true).index());
        }
        assert_eq!(indicies, vec![2, 3, 4, 5, 6, 7]);
    }
}
