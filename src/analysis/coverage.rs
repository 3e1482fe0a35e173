/*!
Coverage of the t-wise interactions of a formula by a sample.

# Overview

An *interaction* of strength *t* is a set of *t* literals over distinct variables.
Interactions are enumerated as combinations of *t* variables, and for each combination every one of the 2^*t* polarity patterns.
Patterns run from all negative to all positive, with the polarity of the last variable varying fastest.

Each interaction is classified by the first of the following to apply:
1. *Covered*, if some configuration of the sample contains the interaction.
2. *Uncovered*, if some configuration found so far contains the interaction.
3. *Invalid*, if propagation through the [modal implication graph](crate::mig) of the formula leads to a contradiction.
4. Otherwise, the [oracle](crate::oracle) decides:
   + *Uncovered*, if the interaction extends to a model, and the model is added to the configurations found.
   + *Invalid*, if the interaction does not extend to a model.
   + A time out of the oracle ends the computation with [Timeout](crate::types::err::ErrorKind::Timeout).

The graph is built from the clauses of the formula alone, while the oracle also respects the assumed assignment and assumed clauses of the input.
As assumptions only constrain, an interaction invalid on the graph is invalid under the assumptions.

# Variables

On construction the variable map of the sample is taken as reference, and extended with the variables of the clauses and of the assumed clauses.
So, the literals of the sample are unchanged, and the configurations found are given over the extended map.

# Partitions

The combinations of variables have a fixed order, and [compute_range](CoverageComputation::compute_range) classifies the interactions of any contiguous range of combinations.
The classification of an interaction does not depend on the interactions classified before, and so the statistics of disjoint ranges (even from distinct computations) may be [merged](CoverageStatistic::merge).

```rust
# use otter_twise::analysis::coverage::{CoverageComputation, CoverageInput};
# use otter_twise::config::CoverageConfig;
# use otter_twise::structures::{assignment::Assignment, assignment_list::AssignmentList, variable_map::VariableMap};
let variables = VariableMap::from_names(["a", "b", "c"]);

let mut formula = AssignmentList::new(variables.clone());
formula.push(Assignment::from(vec![-1, 2]));

let mut sample = AssignmentList::new(variables);
sample.push(Assignment::from(vec![1, 2, 3]));
sample.push(Assignment::from(vec![-1, -2, -3]));

let input = CoverageInput::new(sample, formula);
let mut computation = CoverageComputation::new(input, &CoverageConfig::default()).unwrap();
assert_eq!(computation.combination_count(), 3);

let first = computation.compute_range(0..1, &mut ()).unwrap();
let rest = computation.compute_range(1..3, &mut ()).unwrap();

let mut statistic = first.statistic;
statistic.merge(&rest.statistic);
assert_eq!(statistic.total(), 12);
assert_eq!(statistic.invalid, 1);
```
*/

use std::ops::Range;

use crate::{
    analysis::{
        combinations::{binomial, LexicographicIterator},
        statistic::CoverageStatistic,
        Completion, Monitor,
    },
    config::CoverageConfig,
    db::sample_index::SampleIndex,
    mig::{MigVisitor, ModalImplicationGraph},
    misc::log::targets::{self},
    oracle::{Decision, SatOracle},
    structures::{
        assignment::Assignment,
        assignment_list::AssignmentList,
        atom::Atom,
        literal::{IntLiteral, Literal},
        reconcile::Reconciler,
        variable_map::VariableMap,
    },
    types::err::{self, ErrorKind},
};

/// The input to a coverage computation.
#[derive(Clone, Debug, Default)]
pub struct CoverageInput {
    /// The configurations to measure.
    pub sample: AssignmentList,

    /// The clauses of the formula.
    pub clauses: AssignmentList,

    /// Literals which hold in any valid configuration, over the variable map of `clauses`.
    pub assumed_assignment: Assignment,

    /// Further clauses which hold in any valid configuration.
    pub assumed_clauses: AssignmentList,
}

impl CoverageInput {
    pub fn new(sample: AssignmentList, clauses: AssignmentList) -> Self {
        CoverageInput {
            sample,
            clauses,
            ..Default::default()
        }
    }

    pub fn with_assumed_assignment(mut self, assignment: Assignment) -> Self {
        self.assumed_assignment = assignment;
        self
    }

    pub fn with_assumed_clauses(mut self, clauses: AssignmentList) -> Self {
        self.assumed_clauses = clauses;
        self
    }
}

/// The classification of an interaction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Interaction {
    Covered,
    Uncovered,
    Invalid,
}

/// The result of a coverage computation.
#[derive(Clone, Debug)]
pub struct CoverageReport {
    pub strength: usize,

    pub statistic: CoverageStatistic,

    pub completion: Completion,

    /// Configurations found by the oracle while classifying the range of the report, over the variable map of the computation.
    ///
    /// Configurations found past the internal solution limit are not kept.
    pub discovered: AssignmentList,
}

pub struct CoverageComputation {
    strength: usize,

    /// The extended variable map, with the variable map of the sample as reference.
    variable_map: VariableMap,

    sample_index: SampleIndex,

    /// An index of the configurations found, up to the internal solution limit.
    discovered_index: SampleIndex,

    discovered: Vec<Assignment>,

    /// A count of all configurations found, including those past the internal solution limit.
    discovered_count: usize,

    internal_solution_limit: usize,

    mig: ModalImplicationGraph,

    visitor: MigVisitor,

    oracle: SatOracle,
}

impl CoverageComputation {
    /// Reconciles the variables of the input, and builds the indicies, graph, and oracle of the computation.
    pub fn new(input: CoverageInput, config: &CoverageConfig) -> Result<Self, ErrorKind> {
        let strength = config.strength.value;
        let (min, max) = config.strength.min_max();
        if strength < min || strength > max {
            log::error!(target: targets::COVERAGE, "Strength {strength} is outside of {min}..={max}");
            return Err(err::ErrorKind::from(err::ConfigError::OutOfBounds(
                config.strength.name,
            )));
        }

        let CoverageInput {
            mut sample,
            mut clauses,
            assumed_assignment,
            mut assumed_clauses,
        } = input;

        let mut reconciler = Reconciler::from_reference(sample.variable_map());
        reconciler
            .include(clauses.variable_map())
            .include(assumed_clauses.variable_map());
        let variable_map = reconciler.finish();

        let assumed_assignment = assumed_assignment.adapt(clauses.variable_map(), &variable_map)?;
        sample.adapt(&variable_map)?;
        clauses.adapt(&variable_map)?;
        assumed_clauses.adapt(&variable_map)?;

        let atom_count = variable_map.len();

        let sample_index = SampleIndex::from_list(&sample);
        let mig = ModalImplicationGraph::build(&clauses);
        let visitor = mig.visitor();
        let oracle = SatOracle::new(
            atom_count,
            &clauses,
            &assumed_assignment,
            &assumed_clauses,
            config.session_config(),
        );

        log::info!(target: targets::COVERAGE, "Coverage of strength {strength} over {atom_count} variables, with a sample of {}", sample.len());

        Ok(CoverageComputation {
            strength,
            variable_map,
            sample_index,
            discovered_index: SampleIndex::new(atom_count),
            discovered: Vec::default(),
            discovered_count: 0,
            internal_solution_limit: config.internal_solution_limit.value,
            mig,
            visitor,
            oracle,
        })
    }

    /// The variable map the computation works over.
    pub fn variable_map(&self) -> &VariableMap {
        &self.variable_map
    }

    /// A count of combinations of variables, each with 2^t interactions.
    pub fn combination_count(&self) -> usize {
        binomial(self.variable_map.len(), self.strength)
    }

    /// A count of configurations found, including any not kept.
    pub fn discovered_count(&self) -> usize {
        self.discovered_count
    }

    /// Classifies the interactions of every combination of variables.
    pub fn compute(&mut self, monitor: &mut impl Monitor) -> Result<CoverageReport, ErrorKind> {
        self.compute_range(0..self.combination_count(), monitor)
    }

    /// Classifies the interactions of each combination of variables with rank in `range`.
    ///
    /// The monitor is asked whether the computation is cancelled before each combination, and told of progress after.
    pub fn compute_range(
        &mut self,
        range: Range<usize>,
        monitor: &mut impl Monitor,
    ) -> Result<CoverageReport, ErrorKind> {
        let t = self.strength;
        let mut statistic = CoverageStatistic::default();
        let mut completion = Completion::Complete;
        let kept_before = self.discovered.len();

        let mut combinations = LexicographicIterator::with_range(t, self.variable_map.len(), range);
        let total = combinations.remaining();
        let mut done = 0;

        let mut interaction = vec![0 as IntLiteral; t];

        while let Some(combination) = combinations.next_combination() {
            if monitor.cancelled() {
                log::info!(target: targets::COVERAGE, "Cancelled after {done} of {total} combinations");
                completion = Completion::Cancelled;
                break;
            }

            for pattern in 0..(1_usize << t) {
                for (position, variable) in combination.iter().enumerate() {
                    let polarity = (pattern >> (t - 1 - position)) & 1 == 1;
                    interaction[position] = IntLiteral::new(*variable as Atom + 1, polarity);
                }

                match self.classify(&interaction)? {
                    Interaction::Covered => statistic.covered += 1,
                    Interaction::Uncovered => statistic.uncovered += 1,
                    Interaction::Invalid => statistic.invalid += 1,
                }
            }

            done += 1;
            monitor.progress(done, total);
        }

        log::info!(target: targets::COVERAGE, "{statistic}");

        Ok(CoverageReport {
            strength: t,
            statistic,
            completion,
            discovered: AssignmentList::from_assignments(
                self.variable_map.clone(),
                self.discovered[kept_before..].to_vec(),
            ),
        })
    }

    /// Classifies a single interaction.
    pub fn classify(&mut self, interaction: &[IntLiteral]) -> Result<Interaction, ErrorKind> {
        if self.sample_index.test(interaction) {
            return Ok(Interaction::Covered);
        }

        if self.discovered_index.test(interaction) {
            return Ok(Interaction::Uncovered);
        }

        if self.mig.is_invalid(&mut self.visitor, interaction) {
            log::trace!(target: targets::COVERAGE, "Invalid on the graph: {interaction:?}");
            return Ok(Interaction::Invalid);
        }

        match self.oracle.decide(interaction)? {
            Decision::Satisfiable(model) => {
                self.record_discovery(model);
                Ok(Interaction::Uncovered)
            }

            Decision::Unsatisfiable => {
                log::trace!(target: targets::COVERAGE, "Invalid by the oracle: {interaction:?}");
                Ok(Interaction::Invalid)
            }

            Decision::TimedOut(limit) => Err(ErrorKind::Timeout(limit)),
        }
    }

    fn record_discovery(&mut self, model: Vec<IntLiteral>) {
        self.discovered_count += 1;

        if self.discovered.len() < self.internal_solution_limit {
            self.discovered_index.add(&model);
            self.discovered.push(Assignment::from(model));
        } else if self.discovered_count - 1 == self.internal_solution_limit {
            log::debug!(target: targets::COVERAGE, "Internal solution limit of {} reached", self.internal_solution_limit);
        }
    }
}

#[cfg(test)]
mod coverage_tests {
    use super::*;

    fn list(map: &VariableMap, assignments: &[&[IntLiteral]]) -> AssignmentList {
        let mut list = AssignmentList::new(map.clone());
        for assignment in assignments {
            list.push(Assignment::from(*assignment));
        }
        list
    }

    #[test]
    fn strength_zero_is_rejected() {
        let map = VariableMap::from_names(["a"]);
        let mut config = CoverageConfig::default();
        config.strength.value = 0;

        let input = CoverageInput::new(list(&map, &[]), list(&map, &[]));
        assert!(matches!(
            CoverageComputation::new(input, &config),
            Err(ErrorKind::Config(err::ConfigError::OutOfBounds("strength")))
        ));
    }

    #[test]
    fn discoveries_are_reused() {
        let map = VariableMap::from_names(["a", "b"]);
        let input = CoverageInput::new(list(&map, &[]), list(&map, &[&[1, 2]]));
        let mut computation = CoverageComputation::new(input, &CoverageConfig::default()).unwrap();

        let report = computation.compute(&mut ()).unwrap();
        assert_eq!(report.statistic.invalid, 1);
        assert_eq!(report.statistic.uncovered, 3);
        // Each uncovered interaction fixes both variables, so each is found by a fresh query.
        assert_eq!(report.discovered.len(), 3);
        assert_eq!(computation.discovered_count(), 3);
        assert_eq!(computation.oracle.queries(), 3);
    }

    #[test]
    fn discoveries_by_range() {
        let map = VariableMap::from_names(["a", "b"]);
        let input = CoverageInput::new(list(&map, &[]), list(&map, &[]));

        let mut config = CoverageConfig::default();
        config.strength.value = 1;
        let mut computation = CoverageComputation::new(input, &config).unwrap();

        let first = computation.compute_range(0..1, &mut ()).unwrap();
        assert_eq!(first.discovered.len(), 2);

        let second = computation.compute_range(1..2, &mut ()).unwrap();
        assert_eq!(
            first.discovered.len() + second.discovered.len(),
            computation.discovered_count()
        );
        assert!(second
            .discovered
            .iter()
            .all(|found| !first.discovered.assignments().contains(found)));
    }

    #[test]
    fn internal_solution_limit() {
        let map = VariableMap::from_names(["a", "b"]);
        let mut config = CoverageConfig::default();
        config.internal_solution_limit.value = 0;

        let input = CoverageInput::new(list(&map, &[]), list(&map, &[]));
        let mut computation = CoverageComputation::new(input, &config).unwrap();

        let report = computation.compute(&mut ()).unwrap();
        assert_eq!(report.statistic.uncovered, 4);
        assert!(report.discovered.is_empty());
        assert_eq!(computation.discovered_count(), 4);
    }

    #[test]
    fn assumed_assignment_over_clause_variables() {
        let sample_map = VariableMap::from_names(["b"]);
        let clause_map = VariableMap::from_names(["a", "b"]);

        let input = CoverageInput::new(list(&sample_map, &[&[1]]), list(&clause_map, &[]))
            .with_assumed_assignment(Assignment::from(vec![-1]));

        let mut config = CoverageConfig::default();
        config.strength.value = 1;
        let mut computation = CoverageComputation::new(input, &config).unwrap();

        // b is atom 1 and a is atom 2 in the extended map.
        assert_eq!(computation.variable_map().id_of("a"), Some(2));

        let report = computation.compute(&mut ()).unwrap();
        assert_eq!(report.statistic.covered, 1);
        assert_eq!(report.statistic.uncovered, 2);
        assert_eq!(report.statistic.invalid, 1);
        assert!(report.discovered.iter().all(|found| found.contains(-2)));
    }
}
