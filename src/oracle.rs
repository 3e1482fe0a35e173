/*!
An oracle, for deciding whether some combination of literals extends to a model of a formula.

The oracle wraps a [session](crate::session), configured once with:
- The clauses of a formula, together with any assumed clauses.
- An assumed assignment, kept at the bottom of the assumption stack of the session.

Each query pushes the literals of a combination above the assumed assignment, solves, and pops the literals.
The assumption stack is restored on every path, including a time out, and so each query is independent of the queries before.

After a satisfiable query the order of atoms of the session is shuffled, so successive models tend to differ.

```rust
# use otter_twise::oracle::{Decision, SatOracle};
# use otter_twise::config::SessionConfig;
# use otter_twise::structures::{assignment::Assignment, assignment_list::AssignmentList, variable_map::VariableMap};
let mut formula = AssignmentList::new(VariableMap::with_count(2));
formula.push(Assignment::from(vec![-1, 2]));

let mut oracle = SatOracle::new(
    2,
    &formula,
    &Assignment::default(),
    &AssignmentList::default(),
    SessionConfig::default(),
);

assert_eq!(oracle.decide(&[1, -2]), Ok(Decision::Unsatisfiable));

match oracle.decide(&[1]) {
    Ok(Decision::Satisfiable(model)) => assert!(model.contains(&2)),
    _ => panic!(),
}
```
*/

use std::time::Duration;

use crate::{
    config::SessionConfig,
    misc::log::targets::{self},
    session::{Report, Session},
    structures::{assignment::Assignment, assignment_list::AssignmentList, literal::IntLiteral},
    types::err::ErrorKind,
};

/// The decision of an oracle on some combination.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Decision {
    /// The combination extends to a model, given as a literal for each atom.
    Satisfiable(Vec<IntLiteral>),

    /// The combination does not extend to a model.
    Unsatisfiable,

    /// No decision was made within the given duration.
    TimedOut(Duration),
}

pub struct SatOracle {
    session: Session,

    /// A count of queries made.
    queries: usize,
}

impl SatOracle {
    /// An oracle over atoms [1..=atom_count], for the clauses and assumed clauses, under the assumed assignment.
    pub fn new(
        atom_count: usize,
        clauses: &AssignmentList,
        assumed_assignment: &Assignment,
        assumed_clauses: &AssignmentList,
        config: SessionConfig,
    ) -> Self {
        let mut session = Session::from_config(config);
        session.ensure_atom(atom_count as u32);

        for clause in clauses.iter().chain(assumed_clauses.iter()) {
            session.add_clause(clause.literals());
        }
        session.push_assumptions(assumed_assignment.literals());

        log::info!(target: targets::ORACLE, "Oracle over {} atoms with {} clauses and {} assumptions",
            session.atom_count(),
            session.clause_count(),
            session.assumption_count(),
        );

        SatOracle {
            session,
            queries: 0,
        }
    }

    /// Decides whether the literals extend to a model, under the assumed assignment.
    ///
    /// An error from the session is returned as is, and a time out is returned as [TimedOut](Decision::TimedOut).
    pub fn decide(&mut self, literals: &[IntLiteral]) -> Result<Decision, ErrorKind> {
        self.queries += 1;

        let base = self.session.assumption_count();
        self.session.push_assumptions(literals);
        let result = self.session.solve();
        self.session.pop_assumptions(base);

        match result? {
            Report::Satisfiable => {
                let model = self.session.model().map(|model| model.to_vec()).unwrap_or_default();
                self.session.shuffle_order();
                Ok(Decision::Satisfiable(model))
            }

            Report::Unsatisfiable => Ok(Decision::Unsatisfiable),

            Report::TimeUp => {
                let limit = self.session.config.time_limit.value;
                log::warn!(target: targets::ORACLE, "Query {} timed out after {limit:?}", self.queries);
                Ok(Decision::TimedOut(limit))
            }
        }
    }

    pub fn queries(&self) -> usize {
        self.queries
    }

    pub fn session(&self) -> &Session {
        &self.session
    }
}
