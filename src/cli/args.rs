use std::{path::PathBuf, time::Duration};

use clap::{Parser, Subcommand};

use otter_twise::{config::defaults, session::SelectionStrategy};

fn seconds(seconds: &str) -> Result<Duration, std::num::ParseIntError> {
    seconds.parse().map(Duration::from_secs)
}

/// Measures t-wise coverage of configuration samples, and filters contradicting clauses.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Classify each t-wise interaction of a formula as covered, uncovered, or invalid with respect to a sample
    Coverage(CoverageArgs),

    /// List the clauses of a formula which contradict the clauses before them
    Contradictions(ContradictionArgs),

    /// Rank the variables of a formula by the change to the count of clauses from their removal
    Dirty(DirtyArgs),
}

#[derive(clap::Args, Debug)]
pub struct CoverageArgs {
    /// The DIMACS form CNF file of the formula
    #[arg(long)]
    pub cnf: PathBuf,

    /// The DIMACS form file of the sample, with a configuration in place of each clause
    #[arg(long)]
    pub sample: PathBuf,

    /// The size of each interaction
    #[arg(short = 't', long, default_value_t = defaults::STRENGTH)]
    pub strength: usize,

    /// The seed of the oracle, incremented with each iteration
    #[arg(long, default_value_t = defaults::SEED)]
    pub seed: u64,

    /// Time limit of each query of the oracle, in seconds, with 0 as no limit
    #[arg(long, value_parser = seconds)]
    pub timeout: Option<Duration>,

    /// Literals assumed to hold, named by the variables of the formula, e.g. "a -b"
    #[arg(long)]
    pub assume: Option<String>,

    /// A DIMACS form CNF file of clauses assumed to hold
    #[arg(long)]
    pub assumed_clauses: Option<PathBuf>,

    /// How many times to repeat the computation
    #[arg(short, long, default_value_t = defaults::ITERATIONS)]
    pub iterations: usize,

    /// The most configurations found by the oracle to keep
    #[arg(long, default_value_t = defaults::INTERNAL_SOLUTION_LIMIT)]
    pub internal_limit: usize,

    /// Compute coverage for each strength from 1 up to the given strength
    #[arg(long, default_value_t = false)]
    pub incremental: bool,

    /// How the oracle values free variables
    #[arg(long, default_value_t, value_enum)]
    pub strategy: SelectionStrategy,

    /// Write results as JSON
    #[arg(long, default_value_t = false)]
    pub json: bool,

    /// Display progress
    #[arg(long, default_value_t = false)]
    pub progress: bool,

    /// Write the configurations found by the oracle in the final run to a DIMACS form file
    #[arg(long)]
    pub discovered: Option<PathBuf>,
}

#[derive(clap::Args, Debug)]
pub struct ContradictionArgs {
    /// The DIMACS form CNF file of the clauses to filter
    #[arg(long)]
    pub cnf: PathBuf,

    /// A DIMACS form CNF file of clauses assumed to hold, which are not filtered
    #[arg(long)]
    pub base: Option<PathBuf>,

    /// Literals assumed to hold, named by the variables of the clauses, e.g. "a -b"
    #[arg(long)]
    pub assume: Option<String>,

    /// The seed of the session
    #[arg(long, default_value_t = defaults::SEED)]
    pub seed: u64,

    /// Time limit of each solve, in seconds, with 0 as no limit
    #[arg(long, value_parser = seconds)]
    pub timeout: Option<Duration>,

    /// Write results as JSON
    #[arg(long, default_value_t = false)]
    pub json: bool,

    /// Display progress
    #[arg(long, default_value_t = false)]
    pub progress: bool,
}

#[derive(clap::Args, Debug)]
pub struct DirtyArgs {
    /// The DIMACS form CNF file of the formula
    #[arg(long)]
    pub cnf: PathBuf,

    /// Variables to rank, separated by whitespace, with every variable ranked if absent
    #[arg(long)]
    pub remove: Option<String>,

    /// Write results as JSON
    #[arg(long, default_value_t = false)]
    pub json: bool,
}
