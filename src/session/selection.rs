use serde::Serialize;

/// How a session values an atom, when the value of the atom is free.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SelectionStrategy {
    /// Value each free atom false.
    Negative,

    /// Value each free atom true.
    Positive,

    /// Value each free atom at random, from the rng of the session.
    #[default]
    Random,
}

impl std::fmt::Display for SelectionStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Negative => write!(f, "negative"),
            Self::Positive => write!(f, "positive"),
            Self::Random => write!(f, "random"),
        }
    }
}
