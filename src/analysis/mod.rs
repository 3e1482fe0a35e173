/*!
Analyses built over the structures of the library.

- [Coverage](coverage) of the t-wise interactions of a formula by a sample.
- [Contradicting clauses](contradictions) of a list of clauses.
- [Dirty features](dirty_feature), for ranking variables by the cost of their removal from a formula.

# Monitors

Long running analyses are given a [Monitor], which is asked whether the analysis has been cancelled and is told of progress.
A cancelled analysis stops early, and returns what was found with [Completion::Cancelled].
As cancellation is noted on the result, cancellation is never an error.

The unit type is a monitor which is never cancelled and ignores progress.

```rust
# use otter_twise::analysis::Monitor;
struct StopAfter(usize);

impl Monitor for StopAfter {
    fn cancelled(&mut self) -> bool {
        self.0 == 0
    }

    fn progress(&mut self, _done: usize, _total: usize) {
        self.0 = self.0.saturating_sub(1);
    }
}
```
*/

pub mod combinations;
pub mod contradictions;
pub mod coverage;
pub mod dirty_feature;
pub mod statistic;

use serde::Serialize;

/// Observes an analysis.
pub trait Monitor {
    /// True if the analysis should stop.
    fn cancelled(&mut self) -> bool;

    /// Called with the units of work done so far, of the total units of work.
    fn progress(&mut self, done: usize, total: usize);
}

impl Monitor for () {
    fn cancelled(&mut self) -> bool {
        false
    }

    fn progress(&mut self, _done: usize, _total: usize) {}
}

/// Whether an analysis ran to completion.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Completion {
    Complete,

    /// The analysis was cancelled, and results are partial.
    Cancelled,
}

impl Completion {
    pub fn is_complete(&self) -> bool {
        matches!(self, Completion::Complete)
    }
}
