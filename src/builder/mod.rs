//! Building structures of the library from external formats.
//!
//! At present, only [DIMACS](dimacs) is supported, for both formulas and samples.

pub mod dimacs;
