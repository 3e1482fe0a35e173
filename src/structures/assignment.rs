//! Assignments, aka. an ordered collection of literals.
//!
//! An assignment is read as a conjunction (a configuration, or a combination of literals) or as a disjunction (a clause) depending on where it is used.
//!
//! - No two literals of an assignment share an atom. This is not checked, though readers such as [read_dimacs](crate::builder::dimacs::read_dimacs) drop duplicate literals.
//! - An empty assignment is a configuration which says nothing, and a clause which is always false.

use crate::{
    structures::{
        atom::Atom,
        literal::{IntLiteral, Literal},
        variable_map::VariableMap,
    },
    types::err::{self},
};

/// An ordered collection of literals.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Assignment {
    literals: Vec<IntLiteral>,
}

impl Assignment {
    pub fn new() -> Self {
        Assignment::default()
    }

    /// The assignment read from a string of whitespace separated variable names, with a leading '-' as negation.
    ///
    /// ```rust
    /// # use otter_twise::structures::{assignment::Assignment, variable_map::VariableMap};
    /// let map = VariableMap::from_names(["p", "q", "r"]);
    /// let assignment = Assignment::from_names(&map, "p -r").unwrap();
    /// assert_eq!(assignment.literals(), &[1, -3]);
    /// ```
    pub fn from_names(map: &VariableMap, string: &str) -> Result<Self, err::ErrorKind> {
        let mut literals = Vec::default();
        for item in string.split_whitespace() {
            let literal = map.literal_from_string(item)?;
            if !literals.contains(&literal) {
                literals.push(literal);
            }
        }
        Ok(Assignment { literals })
    }

    pub fn literals(&self) -> &[IntLiteral] {
        &self.literals
    }

    pub fn push(&mut self, literal: IntLiteral) {
        self.literals.push(literal)
    }

    pub fn len(&self) -> usize {
        self.literals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.literals.is_empty()
    }

    pub fn contains(&self, literal: IntLiteral) -> bool {
        self.literals.contains(&literal)
    }

    /// The atoms of the assignment, in order.
    pub fn variables(&self) -> impl Iterator<Item = Atom> + '_ {
        self.literals.iter().map(|literal| literal.atom())
    }

    /// The assignment, as read against `from`, moved to `to`.
    pub fn adapt(&self, from: &VariableMap, to: &VariableMap) -> Result<Self, err::VariableMapError> {
        let literals = self
            .literals
            .iter()
            .map(|literal| from.adapt_literal(*literal, to))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Assignment { literals })
    }

    /// A string of the assignment in DIMACS form, with the terminating `0` as optional.
    pub fn as_dimacs(&self, zero: bool) -> String {
        let mut dimacs = self
            .literals
            .iter()
            .map(|literal| literal.to_string())
            .collect::<Vec<_>>()
            .join(" ");
        if zero {
            if !dimacs.is_empty() {
                dimacs.push(' ');
            }
            dimacs.push('0');
        }
        dimacs
    }
}

impl From<Vec<IntLiteral>> for Assignment {
    fn from(literals: Vec<IntLiteral>) -> Self {
        Assignment { literals }
    }
}

impl From<&[IntLiteral]> for Assignment {
    fn from(literals: &[IntLiteral]) -> Self {
        Assignment {
            literals: literals.to_vec(),
        }
    }
}

impl<'a> IntoIterator for &'a Assignment {
    type Item = &'a IntLiteral;
    type IntoIter = std::slice::Iter<'a, IntLiteral>;

    fn into_iter(self) -> Self::IntoIter {
        self.literals.iter()
    }
}

#[cfg(test)]
mod assignment_tests {
    use super::*;

    #[test]
    fn dimacs_strings() {
        assert_eq!(Assignment::from(vec![1, -2]).as_dimacs(true), "1 -2 0");
        assert_eq!(Assignment::from(vec![1, -2]).as_dimacs(false), "1 -2");
        assert_eq!(Assignment::new().as_dimacs(true), "0");
    }

    #[test]
    fn adapt_preserves_order() {
        let from = VariableMap::from_names(["a", "b", "c"]);
        let to = VariableMap::from_names(["c", "b", "a"]);

        let assignment = Assignment::from(vec![-1, 2, 3]);
        assert_eq!(assignment.adapt(&from, &to).unwrap().literals(), &[-3, 2, 1]);
    }
}
