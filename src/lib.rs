//! Codegen: Unique Code Generation Library
//!
//! Builds character pools, generates sets of distinct fixed-length random
//! codes and saves them as single-column CSV files in a chosen encoding.

pub mod cli;
pub mod pipeline;
pub mod report;
pub mod utils;
