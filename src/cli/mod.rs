//! CLI module - argument parsing and interactive prompts

mod args;
pub mod flow;
pub mod prompts;

pub use args::Cli;
pub use prompts::*;
