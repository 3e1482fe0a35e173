//! Traversal state for queries of a [modal implication graph](super::ModalImplicationGraph).
//!
//! A visitor marks each atom with a byte, noting whether the atom has been valued true, false, or not at all.
//! The marks are reset at the start of each query, though only for those atoms marked by the previous query.
//!
//! A visitor is built for one graph, and the core of the graph is marked once, when the visitor is built.
//! So, a visitor should only be used with the graph it was built from.

use crate::{
    mig::ModalImplicationGraph,
    structures::literal::{IntLiteral, Literal},
};

const UNSET: u8 = 0;
const POSITIVE: u8 = 1;
const NEGATIVE: u8 = 2;

/// The result of propagating some literals through a graph.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Propagation {
    /// Propagation ended without contradiction, and nothing is known about the literals.
    Complete,

    /// Propagation found some literal and its negation, and so the literals have no model.
    Contradiction,
}

impl Propagation {
    pub fn is_contradiction(&self) -> bool {
        matches!(self, Propagation::Contradiction)
    }
}

pub struct MigVisitor {
    marks: Vec<u8>,

    /// Marked literals, in order of marking.
    /// The first `core_length` literals are the core of the graph, which are kept between queries.
    marked: Vec<IntLiteral>,

    core_length: usize,
}

impl MigVisitor {
    pub fn new(mig: &ModalImplicationGraph) -> Self {
        let mut visitor = MigVisitor {
            marks: vec![UNSET; mig.atom_count() + 1],
            marked: Vec::default(),
            core_length: 0,
        };
        for literal in mig.core() {
            visitor.mark(*literal);
        }
        visitor.core_length = visitor.marked.len();
        visitor
    }

    /// The value of a literal on the current marks, if the atom of the literal has been marked.
    fn value_of(&self, literal: IntLiteral) -> Option<bool> {
        match self.marks.get(literal.atom() as usize) {
            Some(&POSITIVE) => Some(literal.polarity()),
            Some(&NEGATIVE) => Some(!literal.polarity()),
            _ => None,
        }
    }

    fn mark(&mut self, literal: IntLiteral) {
        self.marks[literal.atom() as usize] = match literal.polarity() {
            true => POSITIVE,
            false => NEGATIVE,
        };
        self.marked.push(literal);
    }

    /// Clears every mark made since the visitor was built.
    pub fn reset(&mut self) {
        for literal in self.marked.drain(self.core_length..) {
            self.marks[literal.atom() as usize] = UNSET;
        }
    }

    /// Literals marked by the most recent query, including the core of the graph.
    pub fn assigned(&self) -> &[IntLiteral] {
        &self.marked
    }

    /// Propagates `literals` through the strong edges and weak clauses of the graph, until either a contradiction is found or nothing further follows.
    ///
    /// Literals of atoms outside of the graph are unconstrained by the graph, and are ignored.
    pub fn propagate(&mut self, mig: &ModalImplicationGraph, literals: &[IntLiteral]) -> Propagation {
        self.reset();

        if mig.is_contradictory() {
            return Propagation::Contradiction;
        }

        let mut head = self.marked.len();

        for &literal in literals {
            if literal.atom() == 0 || literal.atom() as usize >= self.marks.len() {
                continue;
            }
            match self.value_of(literal) {
                Some(true) => {}
                Some(false) => return Propagation::Contradiction,
                None => self.mark(literal),
            }
        }

        while let Some(&literal) = self.marked.get(head) {
            head += 1;

            for implied in mig.strong_implications(literal) {
                match self.value_of(implied) {
                    Some(true) => {}
                    Some(false) => return Propagation::Contradiction,
                    None => self.mark(implied),
                }
            }

            'clause_loop: for &index in mig.weak_watches(literal) {
                let mut open = None;
                let mut open_count = 0;

                for &clause_literal in mig.weak_clause(index) {
                    match self.value_of(clause_literal) {
                        Some(true) => continue 'clause_loop,
                        Some(false) => {}
                        None => {
                            open_count += 1;
                            open = Some(clause_literal);
                        }
                    }
                }

                match (open_count, open) {
                    (0, _) => return Propagation::Contradiction,
                    (1, Some(unit)) => self.mark(unit),
                    _ => {}
                }
            }
        }

        Propagation::Complete
    }
}
