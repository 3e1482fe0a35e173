//! Generic structures, not specific to coverage.

pub mod minimal_pcg;
