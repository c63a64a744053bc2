//! Redblack Benchmark Library
//!
//! Provides workload generators and sizing for comparing the red-black tree
//! against `std::collections::BTreeMap`.

pub mod config;
pub mod data_gen;
