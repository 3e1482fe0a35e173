/*!
Contradicting clauses of a list of clauses.

A clause *contradicts* if it is unsatisfiable together with the base clauses, the assumed assignment, and every earlier clause of the list which did not contradict.

Clauses are considered in order, and each clause is either:
- *Trivially* contradicting, if the clause is empty or the negation of every literal of the clause is a unit clause seen so far.
- Added to a [session](crate::session), and then:
  + Kept, if the session remains satisfiable.
  + Removed and noted as contradicting, if not.

As each clause is judged against those kept before it, the result depends on the order of the list.
For example, of [(x1 ∨ x2), (¬x1), (¬x2)] only (¬x2) contradicts, while of [(¬x1), (¬x2), (x1 ∨ x2)] only (x1 ∨ x2) contradicts.

```rust
# use otter_twise::analysis::contradictions::{compute_contradicting_clauses, ContradictionInput};
# use otter_twise::config::SessionConfig;
# use otter_twise::structures::{assignment::Assignment, assignment_list::AssignmentList, variable_map::VariableMap};
let mut clauses = AssignmentList::new(VariableMap::from_names(["x"]));
clauses.push(Assignment::from(vec![1]));
clauses.push(Assignment::from(vec![-1]));

let input = ContradictionInput::new(clauses);
let report = compute_contradicting_clauses(input, &SessionConfig::default(), &mut ()).unwrap();

assert_eq!(report.contradicting.assignments(), &[Assignment::from(vec![-1])]);
assert_eq!(report.surviving.assignments(), &[Assignment::from(vec![1])]);
```

A time out of the session ends the filter with [Timeout](crate::types::err::ErrorKind::Timeout), as nothing can be said of the clause.
*/

use crate::{
    analysis::{Completion, Monitor},
    config::SessionConfig,
    misc::log::targets::{self},
    session::{Report, Session},
    structures::{assignment::Assignment, assignment_list::AssignmentList, reconcile::Reconciler},
    types::err::ErrorKind,
};

/// The input to a contradiction filter.
#[derive(Clone, Debug, Default)]
pub struct ContradictionInput {
    /// The clauses to filter, in order.
    pub clauses: AssignmentList,

    /// Clauses assumed to hold, which are never filtered.
    pub base: AssignmentList,

    /// Literals assumed to hold, over the variable map of `clauses`.
    pub assumed_assignment: Assignment,
}

impl ContradictionInput {
    pub fn new(clauses: AssignmentList) -> Self {
        ContradictionInput {
            clauses,
            ..Default::default()
        }
    }

    pub fn with_base(mut self, base: AssignmentList) -> Self {
        self.base = base;
        self
    }

    pub fn with_assumed_assignment(mut self, assignment: Assignment) -> Self {
        self.assumed_assignment = assignment;
        self
    }
}

/// The result of a contradiction filter, with clauses over the variable map of the input clauses.
#[derive(Clone, Debug)]
pub struct ContradictionReport {
    /// Contradicting clauses, in order.
    pub contradicting: AssignmentList,

    /// Clauses which did not contradict, in order.
    pub surviving: AssignmentList,

    pub completion: Completion,
}

/// Filters the contradicting clauses of the input.
///
/// If cancelled, the clauses not yet considered are in neither list of the report.
pub fn compute_contradicting_clauses(
    input: ContradictionInput,
    config: &SessionConfig,
    monitor: &mut impl Monitor,
) -> Result<ContradictionReport, ErrorKind> {
    let ContradictionInput {
        clauses,
        mut base,
        assumed_assignment,
    } = input;

    let mut reconciler = Reconciler::from_reference(clauses.variable_map());
    reconciler.include(base.variable_map());
    let variable_map = reconciler.finish();
    base.adapt(&variable_map)?;

    let mut session = Session::from_config(config.clone());
    session.ensure_atom(variable_map.len() as u32);
    for clause in &base {
        session.add_clause(clause.literals());
    }
    session.push_assumptions(assumed_assignment.literals());

    let mut contradicting = AssignmentList::new(clauses.variable_map().clone());
    let mut surviving = AssignmentList::new(clauses.variable_map().clone());
    let mut completion = Completion::Complete;

    let total = clauses.len();

    for (index, clause) in clauses.iter().enumerate() {
        if monitor.cancelled() {
            log::info!(target: targets::CONTRADICTION, "Cancelled after {index} of {total} clauses");
            completion = Completion::Cancelled;
            break;
        }

        if session.is_trivially_contradicted(clause.literals()) {
            log::debug!(target: targets::CONTRADICTION, "Trivial contradiction: {}", clause.as_dimacs(false));
            contradicting.push(clause.clone());
        } else {
            session.add_clause(clause.literals());

            match session.solve()? {
                Report::Satisfiable => surviving.push(clause.clone()),

                Report::Unsatisfiable => {
                    log::debug!(target: targets::CONTRADICTION, "Contradiction: {}", clause.as_dimacs(false));
                    session.remove_last_clause();
                    contradicting.push(clause.clone());
                }

                Report::TimeUp => {
                    log::error!(target: targets::CONTRADICTION, "Time out on clause {index}: {}", clause.as_dimacs(false));
                    return Err(ErrorKind::Timeout(session.config.time_limit.value));
                }
            }
        }

        monitor.progress(index + 1, total);
    }

    log::info!(target: targets::CONTRADICTION, "{} of {total} clauses contradict", contradicting.len());

    Ok(ContradictionReport {
        contradicting,
        surviving,
        completion,
    })
}
