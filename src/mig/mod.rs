/*!
A modal implication graph, for (sound, incomplete) detection of unsatisfiable combinations.

# Overview

The graph is built once from a formula and is read-only thereafter.

- *Strong* edges are direct implications between literals, from binary clauses.
  For a binary clause *a* ∨ *b*, there is an edge from -*a* to *b* and an edge from -*b* to *a*.
  Strong edges are stored in a [petgraph] graph with a node for each literal.
- *Weak* clauses are the clauses of three or more literals.
  Each weak clause is noted with each literal whose value falsifies one of the literals of the clause.
- *Core* literals hold in every model of the formula.
  These are unit clauses, together with anything derived from the unit clauses, together with any literal whose negation leads to a contradiction by propagation alone (aka. failed literals).

If the core itself leads to a contradiction, or the formula contains an empty clause, the graph is *contradictory* and every combination is invalid.

# Queries

Queries are made through a [visitor](MigVisitor), which holds the (mutable) state of a traversal.
The graph itself is never mutated by a query, and so may be shared by any number of visitors.

A [Contradiction](Propagation::Contradiction) from a visitor is exact: the combination has no model.
Whereas, [Complete](Propagation::Complete) says nothing either way, as propagation does not search.

```rust
# use otter_twise::mig::{ModalImplicationGraph, Propagation};
# use otter_twise::structures::{assignment::Assignment, assignment_list::AssignmentList, variable_map::VariableMap};
let mut formula = AssignmentList::new(VariableMap::with_count(3));
formula.push(Assignment::from(vec![-1, 2]));
formula.push(Assignment::from(vec![-2, 3]));

let mig = ModalImplicationGraph::build(&formula);
let mut visitor = mig.visitor();

assert_eq!(visitor.propagate(&mig, &[1, -3]), Propagation::Contradiction);
assert_eq!(visitor.propagate(&mig, &[1, 3]), Propagation::Complete);
```
*/

mod visitor;
pub use visitor::{MigVisitor, Propagation};

use petgraph::graph::{DiGraph, NodeIndex};

use crate::{
    misc::log::targets::{self},
    structures::{
        assignment_list::AssignmentList,
        atom::Atom,
        literal::{IntLiteral, Literal},
    },
};

/// The node of a literal in the graph of strong edges.
///
/// # Soundness
/// Only sound for literals of an atom of the graph, as atom 0 has no node.
fn node_of(literal: IntLiteral) -> NodeIndex {
    NodeIndex::new(literal.index() - 2)
}

pub struct ModalImplicationGraph {
    /// Strong edges, with a node for each literal.
    strong: DiGraph<IntLiteral, ()>,

    /// Clauses of three or more literals.
    weak_clauses: Vec<Vec<IntLiteral>>,

    /// For each literal, the weak clauses which contain the negation of the literal.
    weak_watches: Vec<Vec<usize>>,

    /// Literals which hold on every model.
    core: Vec<IntLiteral>,

    /// Whether the formula is known to be unsatisfiable.
    contradictory: bool,

    atom_count: usize,
}

impl ModalImplicationGraph {
    /// Builds the graph of a formula.
    ///
    /// Tautological clauses are ignored, and duplicate literals within a clause are dropped.
    pub fn build(clauses: &AssignmentList) -> Self {
        let atom_count = clauses
            .iter()
            .flat_map(|clause| clause.variables())
            .map(|atom| atom as usize)
            .max()
            .unwrap_or(0)
            .max(clauses.variable_map().len());

        let mut strong = DiGraph::with_capacity(atom_count * 2, 0);
        for atom in 1..=(atom_count as Atom) {
            strong.add_node(IntLiteral::new(atom, false));
            strong.add_node(IntLiteral::new(atom, true));
        }

        let mut mig = ModalImplicationGraph {
            strong,
            weak_clauses: Vec::default(),
            weak_watches: vec![Vec::default(); (atom_count + 1) * 2],
            core: Vec::default(),
            contradictory: false,
            atom_count,
        };

        let mut units = Vec::default();

        for clause in clauses {
            let mut literals = clause.literals().to_vec();
            literals.sort_unstable();
            literals.dedup();

            if literals
                .iter()
                .any(|literal| literals.contains(&literal.negate()))
            {
                continue;
            }

            match literals.as_slice() {
                [] => mig.contradictory = true,

                [unit] => units.push(*unit),

                [a, b] => {
                    mig.strong.add_edge(node_of(a.negate()), node_of(*b), ());
                    mig.strong.add_edge(node_of(b.negate()), node_of(*a), ());
                }

                _ => {
                    let index = mig.weak_clauses.len();
                    for literal in &literals {
                        mig.weak_watches[literal.negate().index()].push(index);
                    }
                    mig.weak_clauses.push(literals);
                }
            }
        }

        if !mig.contradictory {
            match mig.derive_core(&units) {
                Some(core) => mig.core = core,
                None => mig.contradictory = true,
            }
        }

        log::info!(target: targets::MIG, "Built graph over {} atoms: {} strong edges, {} weak clauses, {} core literals{}",
            mig.atom_count,
            mig.strong.edge_count(),
            mig.weak_clauses.len(),
            mig.core.len(),
            if mig.contradictory { ", contradictory" } else { "" },
        );

        mig
    }

    /// Derives the core from the unit clauses of the formula, and then from failed literals.
    ///
    /// Returns None if the core leads to a contradiction.
    fn derive_core(&self, units: &[IntLiteral]) -> Option<Vec<IntLiteral>> {
        let mut visitor = MigVisitor::new(self);

        if visitor.propagate(self, units).is_contradiction() {
            return None;
        }

        let mut core = visitor.assigned().to_vec();
        let mut known = vec![false; self.atom_count + 1];
        for literal in &core {
            known[literal.atom() as usize] = true;
        }

        let mut probe = Vec::default();

        for atom in 1..=(self.atom_count as Atom) {
            for polarity in [true, false] {
                if known[atom as usize] {
                    break;
                }

                let literal = IntLiteral::new(atom, polarity);

                probe.clear();
                probe.extend_from_slice(&core);
                probe.push(literal);

                if visitor.propagate(self, &probe).is_contradiction() {
                    log::trace!(target: targets::MIG, "Failed literal {literal}");

                    probe.pop();
                    probe.push(literal.negate());

                    if visitor.propagate(self, &probe).is_contradiction() {
                        return None;
                    }

                    core = visitor.assigned().to_vec();
                    for literal in &core {
                        known[literal.atom() as usize] = true;
                    }
                }
            }
        }

        Some(core)
    }

    /// A fresh visitor of the graph.
    pub fn visitor(&self) -> MigVisitor {
        MigVisitor::new(self)
    }

    /// True if propagation of `literals` leads to a contradiction, and so the literals have no model.
    ///
    /// False if propagation completes, in which case the literals may or may not have a model.
    pub fn is_invalid(&self, visitor: &mut MigVisitor, literals: &[IntLiteral]) -> bool {
        visitor.propagate(self, literals).is_contradiction()
    }

    /// Literals directly implied by a literal, through strong edges.
    pub fn strong_implications(&self, literal: IntLiteral) -> impl Iterator<Item = IntLiteral> + '_ {
        self.strong
            .neighbors(node_of(literal))
            .map(|node| self.strong[node])
    }

    /// The weak clauses which contain the negation of a literal, as indicies.
    pub fn weak_watches(&self, literal: IntLiteral) -> &[usize] {
        &self.weak_watches[literal.index()]
    }

    pub fn weak_clause(&self, index: usize) -> &[IntLiteral] {
        &self.weak_clauses[index]
    }

    pub fn core(&self) -> &[IntLiteral] {
        &self.core
    }

    pub fn is_contradictory(&self) -> bool {
        self.contradictory
    }

    pub fn atom_count(&self) -> usize {
        self.atom_count
    }

    pub fn strong_edge_count(&self) -> usize {
        self.strong.edge_count()
    }
}
