use std::time::Duration;

use rand::{Rng, SeedableRng};

use otter_twise::{
    analysis::{
        combinations::{binomial, LexicographicIterator},
        coverage::{CoverageComputation, CoverageInput},
        statistic::CoverageStatistic,
        Completion, Monitor,
    },
    builder::dimacs::read_dimacs,
    config::CoverageConfig,
    generic::minimal_pcg::MinimalPCG32,
    mig::ModalImplicationGraph,
    structures::{
        assignment::Assignment, assignment_list::AssignmentList, literal::IntLiteral,
        variable_map::VariableMap,
    },
    types::err::ErrorKind,
};

fn list(names: &[&str], assignments: &[&[IntLiteral]]) -> AssignmentList {
    let mut list = AssignmentList::new(VariableMap::from_names(names.iter().copied()));
    for assignment in assignments {
        list.push(Assignment::from(assignment.to_vec()));
    }
    list
}

fn config_of_strength(strength: usize) -> CoverageConfig {
    let mut config = CoverageConfig::default();
    config.strength.value = strength;
    config
}

/// Every model over atoms [1..=atom_count] of the clauses.
fn models(atom_count: usize, clauses: &AssignmentList) -> Vec<Vec<IntLiteral>> {
    (0..(1_u32 << atom_count))
        .map(|bits| {
            (1..=atom_count as IntLiteral)
                .map(|atom| match (bits >> (atom - 1)) & 1 {
                    1 => atom,
                    _ => -atom,
                })
                .collect::<Vec<_>>()
        })
        .filter(|model| {
            clauses
                .iter()
                .all(|clause| clause.literals().iter().any(|literal| model.contains(literal)))
        })
        .collect()
}

/// Every interaction of strength `t` over `n` variables, in the order of a computation.
fn interactions(t: usize, n: usize) -> Vec<Vec<IntLiteral>> {
    let mut all = Vec::new();
    let mut combinations = LexicographicIterator::new(t, n);
    while let Some(combination) = combinations.next_combination() {
        for pattern in 0..(1_usize << t) {
            all.push(
                combination
                    .iter()
                    .enumerate()
                    .map(|(position, variable)| {
                        let atom = *variable as IntLiteral + 1;
                        match (pattern >> (t - 1 - position)) & 1 {
                            1 => atom,
                            _ => -atom,
                        }
                    })
                    .collect(),
            );
        }
    }
    all
}

fn random_list(rng: &mut MinimalPCG32, atom_count: usize, count: usize, length: usize) -> AssignmentList {
    let mut list = AssignmentList::new(VariableMap::with_count(atom_count));
    for _ in 0..count {
        let mut assignment = Assignment::new();
        for _ in 0..rng.gen_range(1..=length) {
            let atom = rng.gen_range(1..=atom_count as IntLiteral);
            if !assignment.contains(atom) && !assignment.contains(-atom) {
                assignment.push(match rng.gen_bool(0.5) {
                    true => atom,
                    false => -atom,
                });
            }
        }
        list.push(assignment);
    }
    list
}

/// The clauses of the pigeonhole problem with `pigeons` pigeons and `holes` holes.
fn pigeonhole(pigeons: IntLiteral, holes: IntLiteral) -> AssignmentList {
    let atom = |pigeon: IntLiteral, hole: IntLiteral| pigeon * holes + hole + 1;
    let mut clauses = AssignmentList::new(VariableMap::with_count((pigeons * holes) as usize));

    for pigeon in 0..pigeons {
        clauses.push(Assignment::from(
            (0..holes).map(|hole| atom(pigeon, hole)).collect::<Vec<_>>(),
        ));
    }
    for hole in 0..holes {
        for a in 0..pigeons {
            for b in (a + 1)..pigeons {
                clauses.push(Assignment::from(vec![-atom(a, hole), -atom(b, hole)]));
            }
        }
    }
    clauses
}

struct StopAfter(usize);

impl Monitor for StopAfter {
    fn cancelled(&mut self) -> bool {
        self.0 == 0
    }

    fn progress(&mut self, _done: usize, _total: usize) {
        self.0 = self.0.saturating_sub(1);
    }
}

mod coverage {
    use super::*;

    #[test]
    fn exclusive_pair() {
        let formula = list(&["x", "y"], &[&[1, 2], &[-1, -2]]);
        let sample = list(&["x", "y"], &[&[1, -2]]);

        let mut computation =
            CoverageComputation::new(CoverageInput::new(sample, formula), &config_of_strength(2)).unwrap();
        let report = computation.compute(&mut ()).unwrap();

        assert_eq!(
            report.statistic,
            CoverageStatistic {
                covered: 1,
                uncovered: 1,
                invalid: 2,
            }
        );
        assert_eq!(report.completion, Completion::Complete);
        assert_eq!(report.discovered.assignments(), &[Assignment::from(vec![-1, 2])]);
        assert!((report.statistic.coverage() - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn three_variables() {
        let formula = list(&["a", "b", "c"], &[]);
        let sample = list(&["a", "b", "c"], &[&[1, 2, 3], &[-1, -2, -3]]);

        let mut computation =
            CoverageComputation::new(CoverageInput::new(sample, formula), &config_of_strength(2)).unwrap();
        assert_eq!(computation.combination_count(), 3);

        let report = computation.compute(&mut ()).unwrap();
        assert_eq!(report.statistic.total(), 12);
        assert_eq!(report.statistic.covered, 6);
        assert_eq!(report.statistic.uncovered, 6);
        assert_eq!(report.statistic.invalid, 0);
    }

    #[test]
    fn strength_past_variables() {
        let formula = list(&["x", "y"], &[&[1, 2]]);
        let sample = list(&["x", "y"], &[&[1, 2]]);

        let mut computation =
            CoverageComputation::new(CoverageInput::new(sample, formula), &config_of_strength(3)).unwrap();
        let report = computation.compute(&mut ()).unwrap();

        assert_eq!(report.statistic, CoverageStatistic::default());
        assert!(report.completion.is_complete());
        assert_eq!(report.statistic.coverage(), 1.0);
    }

    #[test]
    fn sample_map_is_the_reference() {
        let formula = list(&["x", "y"], &[&[1, 2]]);
        let sample = list(&["y", "z"], &[&[1, 2]]);

        let computation =
            CoverageComputation::new(CoverageInput::new(sample, formula), &config_of_strength(1)).unwrap();

        let names = computation.variable_map().names().collect::<Vec<_>>();
        assert_eq!(names, vec!["y", "z", "x"]);
    }

    #[test]
    fn agrees_with_enumeration() {
        let mut rng = MinimalPCG32::seed_from_u64(3);
        let atom_count = 5;

        for round in 0..40 {
            let formula = random_list(&mut rng, atom_count, 2 + round % 6, 3);
            let sample = random_list(&mut rng, atom_count, 3, atom_count);
            let strength = 1 + round % 3;

            let mut expected = CoverageStatistic::default();
            let all_models = models(atom_count, &formula);
            for interaction in interactions(strength, atom_count) {
                let contains = |configuration: &[IntLiteral]| {
                    interaction.iter().all(|literal| configuration.contains(literal))
                };
                if sample.iter().any(|configuration| contains(configuration.literals())) {
                    expected.covered += 1;
                } else if all_models.iter().any(|model| contains(model)) {
                    expected.uncovered += 1;
                } else {
                    expected.invalid += 1;
                }
            }

            let input = CoverageInput::new(sample.clone(), formula.clone());
            let mut computation = CoverageComputation::new(input, &config_of_strength(strength)).unwrap();
            let report = computation.compute(&mut ()).unwrap();

            assert_eq!(report.statistic, expected, "{formula:?} {sample:?}");
            assert_eq!(
                report.statistic.total(),
                (binomial(atom_count, strength) << strength) as u64
            );

            for configuration in report.discovered.iter() {
                let configuration = configuration.literals().to_vec();
                assert!(all_models.contains(&configuration));
            }
        }
    }

    #[test]
    fn graph_invalid_has_no_model() {
        let mut rng = MinimalPCG32::seed_from_u64(5);
        let atom_count = 6;

        for round in 0..40 {
            let formula = random_list(&mut rng, atom_count, 4 + round % 8, 3);
            let all_models = models(atom_count, &formula);

            let mig = ModalImplicationGraph::build(&formula);
            let mut visitor = mig.visitor();

            for interaction in interactions(2, atom_count) {
                if mig.is_invalid(&mut visitor, &interaction) {
                    assert!(
                        !all_models
                            .iter()
                            .any(|model| interaction.iter().all(|literal| model.contains(literal))),
                        "{formula:?} {interaction:?}"
                    );
                }
            }
        }
    }

    #[test]
    fn cancelled() {
        let formula = list(&["a", "b", "c", "d"], &[]);
        let sample = list(&["a", "b", "c", "d"], &[]);

        let mut computation =
            CoverageComputation::new(CoverageInput::new(sample, formula), &config_of_strength(2)).unwrap();
        let report = computation.compute(&mut StopAfter(2)).unwrap();

        assert_eq!(report.completion, Completion::Cancelled);
        assert_eq!(report.statistic.total(), 2 * 4);
    }

    #[test]
    fn time_out_is_fatal() {
        let formula = pigeonhole(6, 5);
        let sample = AssignmentList::new(VariableMap::with_count(30));

        let mut config = config_of_strength(1);
        config.timeout.value = Duration::from_nanos(1);

        let mut computation = CoverageComputation::new(CoverageInput::new(sample, formula), &config).unwrap();
        assert_eq!(
            computation.compute(&mut ()).unwrap_err(),
            ErrorKind::Timeout(Duration::from_nanos(1))
        );
    }

    #[test]
    fn seeded_reproducibility() {
        let names = ["a", "b", "c", "d", "e", "f", "g", "h"];
        let formula = list(&names, &[&[1, 2, 3], &[-1, -4], &[5, -6, 7], &[-2, 8]]);
        let sample = list(&names, &[&[1, -2, 3, -4, 5, -6, 7, -8]]);

        let run = |seed: u64| {
            let mut config = config_of_strength(2);
            config.seed = seed;
            let input = CoverageInput::new(sample.clone(), formula.clone());
            CoverageComputation::new(input, &config)
                .unwrap()
                .compute(&mut ())
                .unwrap()
        };

        let first = run(4);
        let again = run(4);
        assert_eq!(first.statistic, again.statistic);
        assert_eq!(first.discovered, again.discovered);

        let others = (5..13).map(run).collect::<Vec<_>>();
        assert!(others.iter().all(|other| other.statistic == first.statistic));
        assert!(others.iter().any(|other| other.discovered != first.discovered));
    }

    #[test]
    fn assumed_clauses() {
        let formula = list(&["x", "y"], &[]);
        let sample = list(&["x", "y"], &[]);
        let assumed = list(&["y"], &[&[1]]);

        let input = CoverageInput::new(sample, formula).with_assumed_clauses(assumed);
        let mut computation = CoverageComputation::new(input, &config_of_strength(1)).unwrap();
        let report = computation.compute(&mut ()).unwrap();

        assert_eq!(report.statistic.invalid, 1);
        assert_eq!(report.statistic.uncovered, 3);
    }
}

mod partition {
    use super::*;

    #[test]
    fn ranges_merge_to_the_whole() {
        let dimacs = "\
c 1 a
c 2 b
c 3 c
c 4 d
c 5 e
c 6 f
p cnf 6 4
1 2 3 0
-1 -4 0
-2 5 6 0
-5 -6 0
";
        let formula = read_dimacs(dimacs.as_bytes()).unwrap();
        let sample = list(&["a", "b", "c", "d", "e", "f"], &[&[1, -2, 3, -4, 5, -6], &[-1, 2, -3, 4, -5, 6]]);
        let input = CoverageInput::new(sample, formula);
        let config = config_of_strength(3);

        let mut whole = CoverageComputation::new(input.clone(), &config).unwrap();
        let total = whole.combination_count();
        let expected = whole.compute(&mut ()).unwrap().statistic;

        let chunk = total.div_ceil(3);
        let parts = crossbeam::scope(|scope| {
            let handles = (0..3)
                .map(|part| {
                    let input = input.clone();
                    let config = config.clone();
                    scope.spawn(move |_| {
                        let mut computation = CoverageComputation::new(input, &config).unwrap();
                        let range = (part * chunk)..((part + 1) * chunk);
                        computation.compute_range(range, &mut ()).unwrap().statistic
                    })
                })
                .collect::<Vec<_>>();

            handles
                .into_iter()
                .map(|handle| handle.join().unwrap())
                .collect::<Vec<_>>()
        })
        .unwrap();

        let mut merged = CoverageStatistic::default();
        for part in &parts {
            merged.merge(part);
        }
        assert_eq!(merged, expected);
    }
}
