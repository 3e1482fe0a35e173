//! Assumptions
//!
//! # Overview
//!
//! Assumptions are *pushed* to a session through the [push_assumptions](GenericSession::push_assumptions) method, and *popped* through the [pop_assumptions](GenericSession::pop_assumptions) method. \
//! Assumptions are *asserted* at the start of each solve through the [assert_assumptions](GenericSession::assert_assumptions) method.
//!
//! All assumptions are asserted before any decision, together with each unit clause, and BCP is delayed until each has been asserted.
//! So, an assumption is never undone by backtracking, and a conflict between assumptions (or between an assumption and a unit clause) is found without any propagation.
//!
//! ```rust
//! # use otter_twise::session::{Report, Session};
//! # use otter_twise::config::SessionConfig;
//! let mut session = Session::from_config(SessionConfig::default());
//! session.add_clause(&[-1, 2]);
//!
//! let base = session.assumption_count();
//! session.push_assumptions(&[1, -2]);
//! assert_eq!(session.solve(), Ok(Report::Unsatisfiable));
//!
//! session.pop_assumptions(base);
//! assert_eq!(session.solve(), Ok(Report::Satisfiable));
//! ```

use rand::SeedableRng;

use crate::{
    misc::log::targets::{self},
    session::{GenericSession, ValuationStatus},
    structures::literal::IntLiteral,
};

/// Possible 'Ok' results from asserting assumptions.
pub enum AssumptionOk {
    /// Each assumption and unit clause was asserted.
    Asserted,

    /// Some assumption or unit clause conflicts with some other assumption or unit clause.
    Conflict(IntLiteral),
}

impl<R: rand::Rng + SeedableRng> GenericSession<R> {
    /// Asserts each unit clause and then each assumption, without propagation.
    ///
    /// # Soundness
    /// Should only be called on an empty valuation.
    pub fn assert_assumptions(&mut self) -> AssumptionOk {
        for index in 0..self.units.len() {
            let unit = match self.clause_db.get(self.units[index]) {
                Some(clause) => clause[0],
                None => continue,
            };

            if let AssumptionOk::Conflict(literal) = self.assert_literal(unit) {
                return AssumptionOk::Conflict(literal);
            }
        }

        for index in 0..self.assumptions.len() {
            let assumption = self.assumptions[index];

            if let AssumptionOk::Conflict(literal) = self.assert_literal(assumption) {
                log::trace!(target: targets::SESSION, "Assumption {literal} conflicts with the valuation");
                return AssumptionOk::Conflict(literal);
            }
        }

        AssumptionOk::Asserted
    }

    fn assert_literal(&mut self, literal: IntLiteral) -> AssumptionOk {
        match self.check_assignment(literal) {
            ValuationStatus::None => {
                self.record_assignment(literal);
                AssumptionOk::Asserted
            }
            ValuationStatus::Set => AssumptionOk::Asserted,
            ValuationStatus::Conflict => AssumptionOk::Conflict(literal),
        }
    }
}
