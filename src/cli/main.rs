#[cfg(not(target_env = "msvc"))]
#[cfg(feature = "jemalloc")]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[cfg(feature = "jemalloc")]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

use std::path::Path;

use clap::Parser;
use serde::Serialize;

use otter_twise::{
    analysis::{
        contradictions::{compute_contradicting_clauses, ContradictionInput},
        coverage::{CoverageComputation, CoverageInput, CoverageReport},
        dirty_feature::DirtyFeature,
        Completion,
    },
    builder::dimacs::write_dimacs,
    config::{CoverageConfig, SessionConfig},
    structures::{assignment::Assignment, assignment_list::AssignmentList, literal::Literal},
    types::err::{self, ErrorKind},
};

mod args;
mod read;
mod window;

use args::{Args, Command, ContradictionArgs, CoverageArgs, DirtyArgs};
use window::ProgressWindow;

/// Exit code on a malformed input or configuration.
const EXIT_INPUT: i32 = 1;

/// Exit code on a time out of the decision procedure.
const EXIT_TIMEOUT: i32 = 2;

fn main() {
    #[cfg(feature = "log")]
    env_logger::init();

    let args = Args::parse();

    let result = match args.command {
        Command::Coverage(args) => coverage(args),
        Command::Contradictions(args) => contradictions(args),
        Command::Dirty(args) => dirty(args),
    };

    if let Err(e) = result {
        match e {
            ErrorKind::Timeout(limit) => {
                eprintln!("c Time out after {limit:.2?}");
                std::process::exit(EXIT_TIMEOUT);
            }
            e => {
                eprintln!("c Error: {e:?}");
                std::process::exit(EXIT_INPUT);
            }
        }
    }
}

fn load(path: &Path) -> AssignmentList {
    match read::load_dimacs(path) {
        Ok(list) => {
            eprintln!("c Read {} assignments over {} variables from {path:?}", list.len(), list.variable_map().len());
            list
        }
        Err(e) => {
            eprintln!("c Error reading {path:?}: {e}");
            std::process::exit(EXIT_INPUT);
        }
    }
}

fn assumption(clauses: &AssignmentList, assume: Option<&str>) -> Result<Assignment, ErrorKind> {
    match assume {
        Some(names) => Assignment::from_names(clauses.variable_map(), names),
        None => Ok(Assignment::default()),
    }
}

/// A clause, with each literal named by its variable.
fn named(clauses: &AssignmentList, clause: &Assignment) -> Vec<String> {
    clause
        .literals()
        .iter()
        .map(|literal| {
            let name = clauses.variable_map().name_of(literal.atom()).unwrap_or("?");
            match literal.polarity() {
                true => name.to_owned(),
                false => format!("-{name}"),
            }
        })
        .collect()
}

#[derive(Serialize)]
struct CoverageRecord {
    strength: usize,
    seed: u64,
    covered: u64,
    uncovered: u64,
    invalid: u64,
    coverage: f64,
    completion: Completion,
    discovered: usize,
}

fn coverage(args: CoverageArgs) -> Result<(), ErrorKind> {
    let mut config = CoverageConfig::default();
    config.strength.set(args.strength)?;
    config.iterations.set(args.iterations)?;
    config.internal_solution_limit.set(args.internal_limit)?;
    if let Some(timeout) = args.timeout {
        config.timeout.set(timeout)?;
    }
    config.seed = args.seed;
    config.incremental = args.incremental;
    config.selection = args.strategy;

    let clauses = load(&args.cnf);
    let sample = load(&args.sample);
    let assumed_clauses = match &args.assumed_clauses {
        Some(path) => load(path),
        None => AssignmentList::default(),
    };
    let assumed_assignment = assumption(&clauses, args.assume.as_deref())?;

    let input = CoverageInput::new(sample, clauses)
        .with_assumed_assignment(assumed_assignment)
        .with_assumed_clauses(assumed_clauses);

    let mut records = Vec::default();
    let mut last_report: Option<CoverageReport> = None;

    for strength in config.strengths() {
        for seed in config.seeds() {
            let mut run_config = config.clone();
            run_config.strength.set(strength)?;
            run_config.seed = seed;

            let mut computation = CoverageComputation::new(input.clone(), &run_config)?;

            let report = match args.progress {
                true => {
                    let mut window = ProgressWindow::new(format!("t={strength} seed={seed}"));
                    let report = computation.compute(&mut window);
                    window.finish();
                    report?
                }
                false => computation.compute(&mut ())?,
            };

            if !args.json {
                println!("c t={strength} seed={seed} {}", report.statistic);
            }

            records.push(CoverageRecord {
                strength,
                seed,
                covered: report.statistic.covered,
                uncovered: report.statistic.uncovered,
                invalid: report.statistic.invalid,
                coverage: report.statistic.coverage(),
                completion: report.completion,
                discovered: computation.discovered_count(),
            });

            last_report = Some(report);
        }
    }

    if args.json {
        print_json(&records);
    }

    if let (Some(path), Some(report)) = (&args.discovered, &last_report) {
        if std::fs::write(path, write_dimacs(&report.discovered)).is_err() {
            eprintln!("c Failed to write discovered configurations to {path:?}");
            std::process::exit(EXIT_INPUT);
        }
        eprintln!("c Wrote {} configurations to {path:?}", report.discovered.len());
    }

    Ok(())
}

#[derive(Serialize)]
struct ContradictionRecord {
    contradicting: Vec<Vec<String>>,
    surviving: usize,
    completion: Completion,
}

fn contradictions(args: ContradictionArgs) -> Result<(), ErrorKind> {
    let mut config = SessionConfig {
        seed: args.seed,
        ..Default::default()
    };
    if let Some(timeout) = args.timeout {
        config.time_limit.set(timeout)?;
    }

    let clauses = load(&args.cnf);
    let base = match &args.base {
        Some(path) => load(path),
        None => AssignmentList::default(),
    };
    let assumed_assignment = assumption(&clauses, args.assume.as_deref())?;

    let input = ContradictionInput::new(clauses)
        .with_base(base)
        .with_assumed_assignment(assumed_assignment);

    let report = match args.progress {
        true => {
            let mut window = ProgressWindow::new("clauses");
            let report = compute_contradicting_clauses(input, &config, &mut window);
            window.finish();
            report?
        }
        false => compute_contradicting_clauses(input, &config, &mut ())?,
    };

    match args.json {
        true => print_json(&ContradictionRecord {
            contradicting: report
                .contradicting
                .iter()
                .map(|clause| named(&report.contradicting, clause))
                .collect(),
            surviving: report.surviving.len(),
            completion: report.completion,
        }),

        false => {
            println!("c {} contradicting clauses, {} surviving", report.contradicting.len(), report.surviving.len());
            print!("{}", write_dimacs(&report.contradicting));
        }
    }

    Ok(())
}

#[derive(Serialize)]
struct DirtyRecord<'a> {
    name: &'a str,
    clause_count: i64,
    positive: i64,
    negative: i64,
    mixed: i64,
}

fn dirty(args: DirtyArgs) -> Result<(), ErrorKind> {
    let clauses = load(&args.cnf);

    let mut features = match &args.remove {
        Some(names) => {
            let mut atoms = Vec::default();
            for name in names.split_whitespace() {
                match clauses.variable_map().id_of(name) {
                    Some(atom) => atoms.push(atom),
                    None => {
                        return Err(ErrorKind::from(err::VariableMapError::Unmapped(
                            name.to_owned(),
                        )))
                    }
                }
            }
            DirtyFeature::count_clauses_of(&clauses, &atoms)
        }
        None => DirtyFeature::count_clauses(&clauses),
    };
    DirtyFeature::rank(&mut features);

    let records = features
        .iter()
        .map(|feature| DirtyRecord {
            name: clauses.variable_map().name_of(feature.atom).unwrap_or("?"),
            clause_count: feature.clause_count(),
            positive: feature.positive,
            negative: feature.negative,
            mixed: feature.mixed,
        })
        .collect::<Vec<_>>();

    match args.json {
        true => print_json(&records),
        false => {
            for record in records {
                println!(
                    "{} {} (+{} -{} mixed {})",
                    record.name, record.clause_count, record.positive, record.negative, record.mixed
                );
            }
        }
    }

    Ok(())
}

fn print_json(value: &impl Serialize) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{json}"),
        Err(e) => {
            eprintln!("c Failed to write JSON: {e}");
            std::process::exit(EXIT_INPUT);
        }
    }
}
