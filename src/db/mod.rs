//! Databases of configurations.
//!
//! At present, only the [sample index](sample_index).

pub mod sample_index;
