//! Structures shared throughout the library.
//!
//! - [Atoms](atom) and [literals](literal), as integers.
//! - [Assignments](assignment), ordered collections of literals read as a configuration or as a clause depending on context.
//! - [Assignment lists](assignment_list), assignments which share a [variable map](variable_map).
//! - [Reconciliation](reconcile) of variable maps, to compare literals from different lists.

pub mod assignment;
pub mod assignment_list;
pub mod atom;
pub mod literal;
pub mod reconcile;
pub mod variable_map;
