use std::time::Duration;

use rand::{Rng, SeedableRng};

use otter_twise::{
    config::SessionConfig,
    generic::minimal_pcg::MinimalPCG32,
    oracle::{Decision, SatOracle},
    session::{Report, SelectionStrategy, Session},
    structures::{
        assignment::Assignment, assignment_list::AssignmentList, literal::IntLiteral,
        variable_map::VariableMap,
    },
};

/// Every model over atoms [1..=atom_count] of the clauses.
fn models(atom_count: usize, clauses: &[Vec<IntLiteral>]) -> Vec<Vec<IntLiteral>> {
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
                .all(|clause| clause.iter().any(|literal| model.contains(literal)))
        })
        .collect()
}

fn random_clauses(rng: &mut MinimalPCG32, atom_count: usize, clause_count: usize) -> Vec<Vec<IntLiteral>> {
    (0..clause_count)
        .map(|_| {
            let length = rng.gen_range(1..=3);
            (0..length)
                .map(|_| {
                    let atom = rng.gen_range(1..=atom_count as IntLiteral);
                    match rng.gen_bool(0.5) {
                        true => atom,
                        false => -atom,
                    }
                })
                .collect()
        })
        .collect()
}

/// The clauses of the pigeonhole problem with `pigeons` pigeons and `holes` holes.
fn pigeonhole(pigeons: IntLiteral, holes: IntLiteral) -> Vec<Vec<IntLiteral>> {
    let atom = |pigeon: IntLiteral, hole: IntLiteral| pigeon * holes + hole + 1;
    let mut clauses = Vec::new();

    for pigeon in 0..pigeons {
        clauses.push((0..holes).map(|hole| atom(pigeon, hole)).collect());
    }
    for hole in 0..holes {
        for a in 0..pigeons {
            for b in (a + 1)..pigeons {
                clauses.push(vec![-atom(a, hole), -atom(b, hole)]);
            }
        }
    }
    clauses
}

mod session {
    use super::*;

    #[test]
    fn agrees_with_enumeration() {
        let mut rng = MinimalPCG32::seed_from_u64(7);

        for round in 0..300 {
            let atom_count = 6;
            let clauses = random_clauses(&mut rng, atom_count, 4 + round % 24);

            let mut config = SessionConfig::default();
            config.seed = round as u64;
            let mut session = Session::from_config(config);
            session.ensure_atom(atom_count as u32);
            for clause in &clauses {
                session.add_clause(clause);
            }

            let expected = models(atom_count, &clauses);

            match session.solve() {
                Ok(Report::Satisfiable) => {
                    let model = session.model().unwrap().to_vec();
                    assert!(expected.contains(&model), "{clauses:?} {model:?}");
                }
                Ok(Report::Unsatisfiable) => assert!(expected.is_empty(), "{clauses:?}"),
                other => panic!("{other:?}"),
            }
        }
    }

    #[test]
    fn assumptions_agree_with_enumeration() {
        let mut rng = MinimalPCG32::seed_from_u64(11);
        let atom_count = 5;

        let clauses = random_clauses(&mut rng, atom_count, 6);
        let expected = models(atom_count, &clauses);

        let mut session = Session::from_config(SessionConfig::default());
        session.ensure_atom(atom_count as u32);
        for clause in &clauses {
            session.add_clause(clause);
        }

        for a in 1..=atom_count as IntLiteral {
            for b in (a + 1)..=atom_count as IntLiteral {
                for assumption in [[a, b], [-a, b], [a, -b], [-a, -b]] {
                    session.push_assumptions(&assumption);
                    let report = session.solve();
                    session.pop_assumptions(0);

                    let possible = expected
                        .iter()
                        .any(|model| assumption.iter().all(|literal| model.contains(literal)));

                    match report {
                        Ok(Report::Satisfiable) => {
                            assert!(possible);
                            let model = session.model().unwrap();
                            assert!(assumption.iter().all(|literal| model.contains(literal)));
                        }
                        Ok(Report::Unsatisfiable) => assert!(!possible),
                        other => panic!("{other:?}"),
                    }
                }
            }
        }
    }

    #[test]
    fn pigeonhole_is_unsatisfiable() {
        let mut session = Session::from_config(SessionConfig::default());
        for clause in pigeonhole(5, 4) {
            session.add_clause(&clause);
        }
        assert_eq!(session.solve(), Ok(Report::Unsatisfiable));

        let mut session = Session::from_config(SessionConfig::default());
        for clause in pigeonhole(4, 4) {
            session.add_clause(&clause);
        }
        assert_eq!(session.solve(), Ok(Report::Satisfiable));
    }

    #[test]
    fn time_up() {
        let mut config = SessionConfig::default();
        config.time_limit.value = Duration::from_nanos(1);

        let mut session = Session::from_config(config);
        for clause in pigeonhole(6, 5) {
            session.add_clause(&clause);
        }
        assert_eq!(session.solve(), Ok(Report::TimeUp));
        assert!(session.model().is_none());
    }

    #[test]
    fn clauses_removed_after_solves() {
        let mut session = Session::from_config(SessionConfig::default());
        session.add_clause(&[1, 2, 3]);
        session.add_clause(&[-1]);
        session.add_clause(&[-2]);
        assert_eq!(session.solve(), Ok(Report::Satisfiable));

        session.add_clause(&[-3]);
        assert_eq!(session.solve(), Ok(Report::Unsatisfiable));

        let removed = session.remove_last_clause();
        assert_eq!(removed, Some(vec![-3]));
        assert_eq!(session.solve(), Ok(Report::Satisfiable));
        assert_eq!(session.model(), Some([-1, -2, 3].as_slice()));
    }

    #[test]
    fn shuffled_order_varies_models() {
        let mut config = SessionConfig::default();
        config.selection = SelectionStrategy::Negative;

        let mut session = Session::from_config(config);
        session.add_clause(&[1, 2, 3, 4, 5, 6, 7, 8]);

        let mut seen = std::collections::HashSet::new();
        for _ in 0..32 {
            assert_eq!(session.solve(), Ok(Report::Satisfiable));
            seen.insert(session.model().unwrap().to_vec());
            session.shuffle_order();
        }

        // Each model has exactly one positive literal, given by the last atom in the order.
        assert!(seen.len() > 1);
        assert!(seen
            .iter()
            .all(|model| model.iter().filter(|literal| **literal > 0).count() == 1));
    }
}

mod oracle {
    use super::*;

    #[test]
    fn time_out_restores_assumptions() {
        let mut formula = AssignmentList::new(VariableMap::with_count(30));
        for clause in pigeonhole(6, 5) {
            formula.push(Assignment::from(clause));
        }

        let mut config = SessionConfig::default();
        config.time_limit.value = Duration::from_nanos(1);

        let mut oracle = SatOracle::new(
            30,
            &formula,
            &Assignment::from(vec![-30]),
            &AssignmentList::default(),
            config,
        );

        assert_eq!(
            oracle.decide(&[1, 7]),
            Ok(Decision::TimedOut(Duration::from_nanos(1)))
        );
        assert_eq!(oracle.session().assumptions(), &[-30]);
    }
}
