/*!
Miscelanous items related to [logging](log).

Calls to the log macro are made throughout the library.
These are intended to provide useful information when inspecting a computation, or fixing issues.

Note, no log implementation is provided.
For more details, see [log].
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to [reading](crate::builder) formulas.
    pub const BUILDER: &str = "builder";

    /// Logs related to [configuration](crate::config).
    pub const CONFIG: &str = "config";

    /// Logs related to [reconciliation](crate::structures::reconcile) of variable maps.
    pub const RECONCILE: &str = "reconcile";

    /// Logs related to the [sample index](crate::db::sample_index).
    pub const SAMPLE_INDEX: &str = "sample_index";

    /// Logs related to the [modal implication graph](crate::mig).
    pub const MIG: &str = "mig";

    /// Logs related to a [session](crate::session).
    pub const SESSION: &str = "session";

    /// Logs related to [BCP](crate::procedures::bcp).
    pub const PROPAGATION: &str = "propagation";

    /// Logs related to the [oracle](crate::oracle).
    pub const ORACLE: &str = "oracle";

    /// Logs related to [coverage](crate::analysis::coverage).
    pub const COVERAGE: &str = "coverage";

    /// Logs related to [contradiction filtering](crate::analysis::contradictions).
    pub const CONTRADICTION: &str = "contradiction";
}
