//! Chronological backtracking.
//!
//! On a conflict, the most recent decision which has not already been flipped is flipped, and any later decision is forgotten.
//! If every decision has been flipped, the search is exhausted and the clauses and assumptions have no model.
//!
//! Flipping a decision keeps the level of the decision, now marked as flipped, and so the level is forgotten if the flipped decision leads to a conflict.

use rand::SeedableRng;

use crate::{
    misc::log::targets::{self},
    session::{GenericSession, Level},
    structures::literal::{IntLiteral, Literal},
};

/// Possible 'Ok' results from backtracking.
pub enum BacktrackOk {
    /// Some decision was flipped, and the flipped decision is on the trail.
    Flipped(IntLiteral),

    /// No decision remains to be flipped.
    Exhausted,
}

impl<R: rand::Rng + SeedableRng> GenericSession<R> {
    /// Records a decision at a fresh level.
    pub fn record_decision(&mut self, decision: IntLiteral) {
        self.levels.push(Level {
            start: self.trail.len(),
            decision,
            flipped: false,
        });
        self.record_assignment(decision);
    }

    /// Removes the value of each atom assigned at or after `start` on the trail.
    fn unassign_from(&mut self, start: usize) {
        for literal in self.trail.drain(start..) {
            self.valuation[literal.atom() as usize] = None;
        }
        self.q_head = self.q_head.min(start);
    }

    /// Flips the most recent decision which has not been flipped.
    pub fn backtrack(&mut self) -> BacktrackOk {
        while let Some(level) = self.levels.pop() {
            self.unassign_from(level.start);

            if !level.flipped {
                let flipped = level.decision.negate();
                log::trace!(target: targets::SESSION, "Flipped {} to {flipped}", level.decision);

                self.levels.push(Level {
                    start: level.start,
                    decision: flipped,
                    flipped: true,
                });
                self.record_assignment(flipped);

                return BacktrackOk::Flipped(flipped);
            }
        }

        BacktrackOk::Exhausted
    }

    /// The count of decisions on the current valuation.
    pub fn level(&self) -> usize {
        self.levels.len()
    }
}

#[cfg(test)]
mod backtrack_tests {
    use super::*;
    use crate::{config::SessionConfig, session::Session};

    #[test]
    fn flips_most_recent_unflipped() {
        let mut session = Session::from_config(SessionConfig::default());
        session.ensure_atom(3);

        session.record_decision(1);
        session.record_decision(-2);
        session.record_decision(3);

        assert!(matches!(session.backtrack(), BacktrackOk::Flipped(-3)));
        assert_eq!(session.trail, vec![1, -2, -3]);

        assert!(matches!(session.backtrack(), BacktrackOk::Flipped(2)));
        assert_eq!(session.trail, vec![1, 2]);
        assert_eq!(session.level(), 2);

        assert!(matches!(session.backtrack(), BacktrackOk::Flipped(-1)));
        assert_eq!(session.trail, vec![-1]);
    }

    #[test]
    fn exhausted() {
        let mut session = Session::from_config(SessionConfig::default());
        session.ensure_atom(1);

        session.record_decision(1);
        assert!(matches!(session.backtrack(), BacktrackOk::Flipped(-1)));
        assert!(matches!(session.backtrack(), BacktrackOk::Exhausted));
        assert!(session.trail.is_empty());
    }
}
