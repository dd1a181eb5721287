//! Command-line argument definitions using clap
//!
//! Every generation parameter is collected interactively; flags only tune
//! where output goes and how the run behaves.

use clap::{ArgAction, Parser};
use std::path::PathBuf;

use crate::pipeline::DEFAULT_OUTPUT_DIR;

/// Codegen - generate unique random codes into a CSV file
#[derive(Parser, Debug)]
#[command(name = "codegen")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Directory the CSV file is written to (created if missing)
    #[arg(short, long, default_value = DEFAULT_OUTPUT_DIR)]
    pub output_dir: PathBuf,

    /// Seed for the random generator, for reproducible output
    #[arg(long)]
    pub seed: Option<u64>,

    /// Give up after this many draws, duplicates included.
    /// Without it, generation keeps drawing until enough unique codes exist.
    #[arg(long, value_parser = validate_max_attempts)]
    pub max_attempts: Option<u64>,

    /// Disable colored output
    #[arg(long, default_value = "false")]
    pub plain: bool,

    /// Increase log verbosity on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

/// Validator for max_attempts parameter
fn validate_max_attempts(s: &str) -> Result<u64, String> {
    let value: u64 = s
        .parse()
        .map_err(|_| format!("'{}' is not a valid number", s))?;

    if value == 0 {
        Err("max_attempts must be at least 1".to_string())
    } else {
        Ok(value)
    }
}
