//! A library for measuring how well a sample of boolean configurations covers the t-wise interactions permitted by a formula in conjunctive normal form.
//!
//! otter_twise takes a *sample* (a list of, possibly partial, configurations) and a *formula* (a list of clauses), and classifies every combination of *t* literals as one of:
//! - *Covered*, as some configuration of the sample contains each literal of the combination.
//! - *Uncovered*, as no configuration of the sample contains the combination, though some configuration satisfying the formula does.
//! - *Invalid*, as no configuration satisfying the formula contains the combination.
//!
//! Invalid combinations can never be covered, and so are not counted against the coverage of a sample.
//!
//! # Orientation
//!
//! The sample and the formula are [assignment lists](structures::assignment_list), each with its own [variable map](structures::variable_map).
//! Before anything else the variable maps are [reconciled](structures::reconcile) into a single map.
//!
//! A [coverage computation](analysis::coverage) then checks each combination against a sequence of increasingly expensive procedures:
//! 1. A [bit index](db::sample_index) of the sample, to find covered combinations.
//! 2. A bit index of configurations found so far, to find (other) uncovered combinations.
//! 3. A [modal implication graph](mig), to find (many) invalid combinations through propagation alone.
//! 4. An [oracle](oracle) wrapping an incremental [solver session](session), to settle the remaining combinations.
//!
//! Configurations found by the oracle are added to the index of found configurations, and are returned with the [statistic](analysis::statistic) of a computation.
//!
//! Separately, a [contradiction filter](analysis::contradictions) uses the same incremental solver to find those clauses of a list which contradict the clauses before them.
//!
//! # Example
//!
//! ```rust
//! # use otter_twise::analysis::coverage::{CoverageComputation, CoverageInput};
//! # use otter_twise::config::CoverageConfig;
//! # use otter_twise::structures::{assignment::Assignment, assignment_list::AssignmentList, variable_map::VariableMap};
//! let variables = VariableMap::from_names(["x", "y"]);
//!
//! let mut formula = AssignmentList::new(variables.clone());
//! formula.push(Assignment::from(vec![1, 2]));
//! formula.push(Assignment::from(vec![-1, -2]));
//!
//! let mut sample = AssignmentList::new(variables);
//! sample.push(Assignment::from(vec![1, -2]));
//!
//! let input = CoverageInput::new(sample, formula);
//! let mut computation = CoverageComputation::new(input, &CoverageConfig::default()).unwrap();
//! let report = computation.compute(&mut ()).unwrap();
//!
//! assert_eq!(report.statistic.covered, 1);
//! assert_eq!(report.statistic.uncovered, 1);
//! assert_eq!(report.statistic.invalid, 2);
//! ```
//!
//! # Logs
//!
//! Calls to [log!](log) are made throughout, with targets listed in [misc::log].
//! No log implementation is provided by the library.

pub mod analysis;
pub mod builder;
pub mod config;
pub mod db;
pub mod generic;
pub mod mig;
pub mod misc;
pub mod oracle;
pub mod procedures;
pub mod session;
pub mod structures;
pub mod types;
