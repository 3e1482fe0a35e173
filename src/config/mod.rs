/*!
Configuration of sessions and computations.

Configuration is explicit: a computation is given a configuration when built, and reads nothing else.

- [SessionConfig] configures a [session](crate::session), e.g. when filtering contradictions.
- [CoverageConfig] configures a [coverage computation](crate::analysis::coverage), and contains everything needed to configure the session of the computation.

Bounded values are [ConfigOption]s, to be revised through [ConfigOption::set].

```rust
# use otter_twise::config::CoverageConfig;
let mut config = CoverageConfig::default();
assert_eq!(config.strength.value, 2);

assert!(config.strength.set(3).is_ok());
assert!(config.strength.set(0).is_err());
assert_eq!(config.strengths().collect::<Vec<_>>(), vec![3]);

config.incremental = true;
assert_eq!(config.strengths().collect::<Vec<_>>(), vec![1, 2, 3]);
```
*/

mod config_option;
pub use config_option::ConfigOption;

use std::time::Duration;

use crate::session::SelectionStrategy;

/// Defaults, shared by the library and the cli.
pub mod defaults {
    pub const STRENGTH: usize = 2;
    pub const SEED: u64 = 1;
    pub const ITERATIONS: usize = 1;
    pub const INTERNAL_SOLUTION_LIMIT: usize = 65_536;
}

/// The greatest strength supported, as each combination of a strength has 2^strength interactions.
pub const STRENGTH_MAX: usize = 31;

/// The configuration of a session.
#[derive(Clone, Debug)]
pub struct SessionConfig {
    /// The seed of the source of randomness of the session.
    pub seed: u64,

    /// The time limit of a single solve, with zero as no limit.
    pub time_limit: ConfigOption<Duration>,

    /// How to choose a value for an atom, when a choice is free.
    pub selection: SelectionStrategy,
}

impl SessionConfig {
    /// The time limit of a solve, if any.
    pub fn time_limit(&self) -> Option<Duration> {
        match self.time_limit.value.is_zero() {
            true => None,
            false => Some(self.time_limit.value),
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        SessionConfig {
            seed: defaults::SEED,

            time_limit: ConfigOption {
                name: "time_limit",
                min: Duration::from_secs(0),
                max: Duration::MAX,
                value: Duration::from_secs(0),
            },

            selection: SelectionStrategy::default(),
        }
    }
}

/// The configuration of a coverage computation.
#[derive(Clone, Debug)]
pub struct CoverageConfig {
    /// The size *t* of each combination.
    pub strength: ConfigOption<usize>,

    /// The seed of the source of randomness of the computation.
    pub seed: u64,

    /// The time limit of a single query of the oracle, with zero as no limit.
    pub timeout: ConfigOption<Duration>,

    /// The most configurations to index, after which found configurations are counted though not kept.
    pub internal_solution_limit: ConfigOption<usize>,

    /// How many times to repeat a computation, with successive seeds.
    pub iterations: ConfigOption<usize>,

    /// Compute coverage for each strength from 1 up to the configured strength.
    pub incremental: bool,

    /// How the oracle chooses a value for an atom, when a choice is free.
    pub selection: SelectionStrategy,
}

impl CoverageConfig {
    /// The strengths to compute coverage for, in order.
    pub fn strengths(&self) -> std::ops::RangeInclusive<usize> {
        match self.incremental {
            true => 1..=self.strength.value,
            false => self.strength.value..=self.strength.value,
        }
    }

    /// The seeds of each iteration, in order.
    pub fn seeds(&self) -> impl Iterator<Item = u64> {
        let seed = self.seed;
        (0..self.iterations.value as u64).map(move |iteration| seed.wrapping_add(iteration))
    }

    /// The configuration of the session of the oracle.
    pub fn session_config(&self) -> SessionConfig {
        let mut config = SessionConfig {
            seed: self.seed,
            selection: self.selection,
            ..Default::default()
        };
        config.time_limit.value = self.timeout.value;
        config
    }
}

impl Default for CoverageConfig {
    fn default() -> Self {
        CoverageConfig {
            strength: ConfigOption {
                name: "strength",
                min: 1,
                max: STRENGTH_MAX,
                value: defaults::STRENGTH,
            },

            seed: defaults::SEED,

            timeout: ConfigOption {
                name: "timeout",
                min: Duration::from_secs(0),
                max: Duration::MAX,
                value: Duration::from_secs(0),
            },

            internal_solution_limit: ConfigOption {
                name: "internal_solution_limit",
                min: 0,
                max: usize::MAX,
                value: defaults::INTERNAL_SOLUTION_LIMIT,
            },

            iterations: ConfigOption {
                name: "iterations",
                min: 1,
                max: usize::MAX,
                value: defaults::ITERATIONS,
            },

            incremental: false,

            selection: SelectionStrategy::default(),
        }
    }
}
