//! Determines the satisfiability of the clauses of a session, under the assumptions of the session.
//!
//! # Overview
//!
//! Each solve starts from an empty valuation:
//! 1. If the session contains an empty clause, the session is unsatisfiable.
//! 2. Each unit clause and each assumption is [asserted](crate::procedures::assumptions).
//! 3. Propagation and decisions alternate, with [chronological backtracking](crate::procedures::backtrack) on each conflict.
//!
//! Roughly, the loop is:
//!
//! ```rust,ignore
//! loop {
//!     match self.propagate() {
//!         Ok(()) => match self.make_decision() {
//!             DecisionOk::Literal(decision) => self.record_decision(decision),
//!             DecisionOk::Exhausted => break, // satisfiable
//!         },
//!
//!         Err(err::BCPError::Conflict(_)) => match self.backtrack() {
//!             BacktrackOk::Flipped(_) => continue,
//!             BacktrackOk::Exhausted => break, // unsatisfiable
//!         },
//!         ...
//!     }
//! }
//! ```
//!
//! The time limit of the session is checked on each pass through the loop.
//! If the limit is reached the solve ends with [TimeUp](Report::TimeUp), and nothing is known about the clauses.
//!
//! Clauses and assumptions are not changed by a solve, and so a session may be solved any number of times, with clauses and assumptions revised between solves.

use std::time::Instant;

use rand::SeedableRng;

use crate::{
    misc::log::targets::{self},
    procedures::{assumptions::AssumptionOk, backtrack::BacktrackOk, decision::DecisionOk},
    session::{GenericSession, Report},
    structures::{
        atom::Atom,
        literal::{IntLiteral, Literal},
    },
    types::err::{self, ErrorKind},
};

impl<R: rand::Rng + SeedableRng> GenericSession<R> {
    pub fn solve(&mut self) -> Result<Report, ErrorKind> {
        let start = Instant::now();
        let time_limit = self.config.time_limit();

        self.counters.solves += 1;
        self.model = None;
        self.clear_valuation();

        if self.empty_clauses > 0 {
            log::trace!(target: targets::SESSION, "Unsatisfiable by an empty clause");
            return Ok(Report::Unsatisfiable);
        }

        if let AssumptionOk::Conflict(_) = self.assert_assumptions() {
            return Ok(Report::Unsatisfiable);
        }

        'solve_loop: loop {
            if time_limit.is_some_and(|limit| start.elapsed() > limit) {
                log::info!(target: targets::SESSION, "Time limit reached after {} decisions", self.counters.decisions);
                self.clear_valuation();
                return Ok(Report::TimeUp);
            }

            match self.propagate() {
                Ok(()) => match self.make_decision() {
                    DecisionOk::Literal(decision) => {
                        self.record_decision(decision);
                        continue 'solve_loop;
                    }

                    DecisionOk::Exhausted => break 'solve_loop,
                },

                Err(err::BCPError::Conflict(_)) => {
                    self.counters.conflicts += 1;

                    match self.backtrack() {
                        BacktrackOk::Flipped(_) => continue 'solve_loop,
                        BacktrackOk::Exhausted => {
                            self.clear_valuation();
                            return Ok(Report::Unsatisfiable);
                        }
                    }
                }

                Err(corrupt) => {
                    self.clear_valuation();
                    return Err(ErrorKind::from(corrupt));
                }
            }
        }

        let model = (1..self.valuation.len())
            .map(|atom| IntLiteral::new(atom as Atom, self.valuation[atom].unwrap_or(false)))
            .collect();
        self.model = Some(model);
        self.clear_valuation();

        Ok(Report::Satisfiable)
    }
}

#[cfg(test)]
mod solve_tests {
    use crate::{
        config::SessionConfig,
        session::{Report, SelectionStrategy, Session},
    };

    #[test]
    fn selection_strategies() {
        let mut config = SessionConfig::default();
        config.selection = SelectionStrategy::Negative;

        let mut session = Session::from_config(config);
        session.add_clause(&[1, 2, 3]);

        assert_eq!(session.solve(), Ok(Report::Satisfiable));
        assert_eq!(session.model().unwrap().iter().filter(|l| **l > 0).count(), 1);

        session.set_selection_strategy(SelectionStrategy::Positive);
        assert_eq!(session.solve(), Ok(Report::Satisfiable));
        assert_eq!(session.model(), Some([1, 2, 3].as_slice()));
    }

    #[test]
    fn empty_clause() {
        let mut session = Session::from_config(SessionConfig::default());
        session.add_clause(&[1]);
        session.add_clause(&[]);

        assert_eq!(session.solve(), Ok(Report::Unsatisfiable));
        assert!(session.model().is_none());

        session.remove_last_clause();
        assert_eq!(session.solve(), Ok(Report::Satisfiable));
        assert_eq!(session.model(), Some([1].as_slice()));
    }

    #[test]
    fn unit_conflicts_with_assumption() {
        let mut session = Session::from_config(SessionConfig::default());
        session.add_clause(&[-2]);
        session.push_assumptions(&[2]);

        assert_eq!(session.solve(), Ok(Report::Unsatisfiable));
    }
}
