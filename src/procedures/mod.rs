//! Various procedures for mutating a session.
//!
//! For the most part these are methods accessed via a session, and primarily placed here for documentation.

pub mod assumptions;
pub mod backtrack;
pub mod bcp;
pub mod decision;
pub mod solve;
