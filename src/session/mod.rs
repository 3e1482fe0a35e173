/*!
An incremental solver session, for deciding the satisfiability of a formula under assumptions.

# Overview

A session holds:
- A database of clauses, as a [slotmap] keyed by [ClauseKey].
  Clauses are kept in order of addition, and may be removed last-in-first-out.
- A stack of *assumptions*, literals which hold for each solve until popped.
- A valuation and a trail of assigned literals, rebuilt by each [solve](crate::procedures::solve).
- An order over atoms, which decides the atom of each decision, and a [strategy](SelectionStrategy) to decide its value.

Clauses of two or more literals are watched through their first two literals, for [bcp](crate::procedures::bcp).
Unit clauses and empty clauses are kept aside, as these are applied before any propagation.

```rust
# use otter_twise::session::{Report, Session};
# use otter_twise::config::SessionConfig;
let mut session = Session::from_config(SessionConfig::default());

session.add_clause(&[1, 2]);
session.add_clause(&[-1, -2]);
assert_eq!(session.solve(), Ok(Report::Satisfiable));

session.push_assumptions(&[1, 2]);
assert_eq!(session.solve(), Ok(Report::Unsatisfiable));

session.pop_assumptions(0);
assert_eq!(session.solve(), Ok(Report::Satisfiable));

let model = session.model().unwrap();
assert_ne!(model.contains(&1), model.contains(&2));
```

# Removal

Removal of a clause is lazy with respect to watches.
The clause is dropped from the database, and the key of the clause is dropped from a watch list the next time the list is inspected.
*/

mod selection;
pub use selection::SelectionStrategy;

use rand::{seq::SliceRandom, SeedableRng};
use slotmap::SlotMap;

use crate::{
    config::SessionConfig,
    generic::minimal_pcg::MinimalPCG32,
    misc::log::targets::{self},
    structures::{
        atom::Atom,
        literal::{IntLiteral, Literal},
    },
};

slotmap::new_key_type! {
    /// The key of a clause in the clause database of a session.
    pub struct ClauseKey;
}

/// The result of a solve.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Report {
    /// The clauses and assumptions have a model.
    Satisfiable,

    /// The clauses and assumptions have no model.
    Unsatisfiable,

    /// The time limit of the session was reached before the solve completed.
    TimeUp,
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Satisfiable => write!(f, "Satisfiable"),
            Self::Unsatisfiable => write!(f, "Unsatisfiable"),
            Self::TimeUp => write!(f, "Unknown"),
        }
    }
}

/// The status of a literal on the current valuation of a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValuationStatus {
    /// The atom of the literal has no value.
    None,

    /// The literal holds.
    Set,

    /// The negation of the literal holds.
    Conflict,
}

/// A decision, and the position on the trail the decision was made at.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Level {
    pub start: usize,
    pub decision: IntLiteral,

    /// Whether the decision is the negation of some earlier decision.
    pub flipped: bool,
}

/// Counts of things in a session.
#[derive(Clone, Debug, Default)]
pub struct Counters {
    pub solves: usize,
    pub decisions: usize,
    pub conflicts: usize,
    pub propagations: usize,
}

pub struct GenericSession<R: rand::Rng + SeedableRng> {
    pub config: SessionConfig,

    pub counters: Counters,

    /// Every clause of the session.
    pub(crate) clause_db: SlotMap<ClauseKey, Vec<IntLiteral>>,

    /// Keys to each clause, in order of addition.
    pub(crate) clause_stack: Vec<ClauseKey>,

    /// Keys to each unit clause, in order of addition.
    pub(crate) units: Vec<ClauseKey>,

    /// A count of clauses with no literals, as these are never satisfied.
    pub(crate) empty_clauses: usize,

    /// For each literal, keys to the clauses watching the literal.
    pub(crate) watches: Vec<Vec<ClauseKey>>,

    /// The value of each atom, with the value of atom 0 unused.
    pub(crate) valuation: Vec<Option<bool>>,

    /// Assigned literals, in order of assignment.
    pub(crate) trail: Vec<IntLiteral>,

    /// The first literal of the trail yet to be propagated.
    pub(crate) q_head: usize,

    pub(crate) levels: Vec<Level>,

    pub(crate) assumptions: Vec<IntLiteral>,

    /// The order in which atoms are considered for a decision.
    pub(crate) order: Vec<Atom>,

    pub(crate) rng: R,

    /// The model found by the most recent solve, if the most recent solve was satisfiable.
    pub(crate) model: Option<Vec<IntLiteral>>,
}

/// A session, with [MinimalPCG32] as the source of rng.
pub type Session = GenericSession<MinimalPCG32>;

impl<R: rand::Rng + SeedableRng> GenericSession<R> {
    pub fn from_config(config: SessionConfig) -> Self {
        let rng = R::seed_from_u64(config.seed);

        GenericSession {
            config,
            counters: Counters::default(),
            clause_db: SlotMap::default(),
            clause_stack: Vec::default(),
            units: Vec::default(),
            empty_clauses: 0,
            watches: vec![Vec::default(); 2],
            valuation: vec![None],
            trail: Vec::default(),
            q_head: 0,
            levels: Vec::default(),
            assumptions: Vec::default(),
            order: Vec::default(),
            rng,
            model: None,
        }
    }

    /// A count of atoms in the session.
    pub fn atom_count(&self) -> usize {
        self.valuation.len() - 1
    }

    /// Extends the session to include each atom up to and including `atom`.
    pub fn ensure_atom(&mut self, atom: Atom) {
        let required = atom as usize + 1;
        if self.valuation.len() < required {
            for fresh in self.valuation.len()..required {
                self.order.push(fresh as Atom);
            }
            self.valuation.resize(required, None);
            self.watches.resize(required * 2, Vec::default());
        }
    }

    /// A count of clauses in the session.
    pub fn clause_count(&self) -> usize {
        self.clause_stack.len()
    }

    /// Adds a clause to the session, with duplicate literals dropped, and returns the key of the clause.
    ///
    /// Any clause is accepted, including the empty clause and tautologies.
    pub fn add_clause(&mut self, clause: &[IntLiteral]) -> ClauseKey {
        let mut literals = Vec::with_capacity(clause.len());
        for literal in clause {
            if !literals.contains(literal) {
                literals.push(*literal);
            }
        }
        for literal in &literals {
            self.ensure_atom(literal.atom());
        }

        let tautology = literals
            .iter()
            .any(|literal| literals.contains(&literal.negate()));

        let length = literals.len();
        let watched = match tautology {
            true => None,
            false if length >= 2 => Some((literals[0], literals[1])),
            false => None,
        };

        let key = self.clause_db.insert(literals);
        self.clause_stack.push(key);

        match (length, watched) {
            (0, _) => self.empty_clauses += 1,
            (1, _) => self.units.push(key),
            (_, Some((a, b))) => {
                self.watches[a.index()].push(key);
                self.watches[b.index()].push(key);
            }
            (_, None) => {
                log::trace!(target: targets::SESSION, "Tautology {key:?} is unwatched");
            }
        }

        key
    }

    /// Removes the most recently added clause from the session, and returns the literals of the clause.
    pub fn remove_last_clause(&mut self) -> Option<Vec<IntLiteral>> {
        let key = self.clause_stack.pop()?;
        let clause = self.clause_db.remove(key)?;

        match clause.len() {
            0 => self.empty_clauses -= 1,
            1 => {
                if self.units.last() == Some(&key) {
                    self.units.pop();
                }
            }
            _ => {}
        }

        Some(clause)
    }

    /// The literal of each unit clause of the session.
    pub fn unit_literals(&self) -> impl Iterator<Item = IntLiteral> + '_ {
        self.units
            .iter()
            .filter_map(|key| self.clause_db.get(*key))
            .filter_map(|clause| clause.first().copied())
    }

    /// True if the clause is empty, or if the negation of every literal of the clause is a unit clause of the session.
    ///
    /// Only unit clauses are considered, and so a clause may be unsatisfiable with the session without being trivially contradicted.
    pub fn is_trivially_contradicted(&self, clause: &[IntLiteral]) -> bool {
        clause.iter().all(|literal| {
            self.unit_literals()
                .any(|unit| unit == literal.negate())
        })
    }

    /// Pushes literals to the assumption stack.
    pub fn push_assumptions(&mut self, literals: &[IntLiteral]) {
        for literal in literals {
            self.ensure_atom(literal.atom());
            self.assumptions.push(*literal);
        }
    }

    /// Pops assumptions until `count` assumptions remain.
    pub fn pop_assumptions(&mut self, count: usize) {
        self.assumptions.truncate(count);
    }

    pub fn assumption_count(&self) -> usize {
        self.assumptions.len()
    }

    pub fn assumptions(&self) -> &[IntLiteral] {
        &self.assumptions
    }

    pub fn set_selection_strategy(&mut self, strategy: SelectionStrategy) {
        self.config.selection = strategy;
    }

    /// Shuffles the order in which atoms are considered for a decision.
    pub fn shuffle_order(&mut self) {
        self.order.shuffle(&mut self.rng);
    }

    /// The model found by the most recent solve, as a literal for each atom of the session, ordered by atom.
    ///
    /// None, unless the most recent solve was satisfiable.
    pub fn model(&self) -> Option<&[IntLiteral]> {
        self.model.as_deref()
    }

    /// The status of a literal on the current valuation.
    pub fn check_assignment(&self, literal: IntLiteral) -> ValuationStatus {
        match self.valuation[literal.atom() as usize] {
            None => ValuationStatus::None,
            Some(value) if value == literal.polarity() => ValuationStatus::Set,
            Some(_) => ValuationStatus::Conflict,
        }
    }

    /// Values the atom of a literal to satisfy the literal, and queues the literal for propagation.
    ///
    /// # Soundness
    /// The atom of the literal should have no value.
    pub(crate) fn record_assignment(&mut self, literal: IntLiteral) {
        self.valuation[literal.atom() as usize] = Some(literal.polarity());
        self.trail.push(literal);
    }

    /// Clears the valuation, the trail, and all decisions.
    pub(crate) fn clear_valuation(&mut self) {
        for literal in self.trail.drain(..) {
            self.valuation[literal.atom() as usize] = None;
        }
        self.q_head = 0;
        self.levels.clear();
    }
}

#[cfg(test)]
mod session_tests {
    use super::*;

    #[test]
    fn clauses_are_removed_in_reverse() {
        let mut session = Session::from_config(SessionConfig::default());
        session.add_clause(&[1, 1, 2]);
        session.add_clause(&[-1]);
        session.add_clause(&[]);

        assert_eq!(session.clause_count(), 3);
        assert_eq!(session.empty_clauses, 1);

        assert_eq!(session.remove_last_clause(), Some(vec![]));
        assert_eq!(session.remove_last_clause(), Some(vec![-1]));
        assert!(session.units.is_empty());
        assert_eq!(session.remove_last_clause(), Some(vec![1, 2]));
        assert_eq!(session.remove_last_clause(), None);
    }

    #[test]
    fn trivial_contradictions() {
        let mut session = Session::from_config(SessionConfig::default());
        session.add_clause(&[1]);
        session.add_clause(&[-2]);

        assert!(session.is_trivially_contradicted(&[]));
        assert!(session.is_trivially_contradicted(&[-1]));
        assert!(session.is_trivially_contradicted(&[-1, 2]));
        assert!(!session.is_trivially_contradicted(&[-1, 3]));
        assert!(!session.is_trivially_contradicted(&[1]));
    }

    #[test]
    fn assumptions_are_a_stack() {
        let mut session = Session::from_config(SessionConfig::default());
        session.push_assumptions(&[1, -2]);
        session.push_assumptions(&[5]);

        assert_eq!(session.assumption_count(), 3);
        assert_eq!(session.atom_count(), 5);

        session.pop_assumptions(2);
        assert_eq!(session.assumptions(), &[1, -2]);
    }
}
