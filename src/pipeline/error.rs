//! Error types for code generation and persistence.
//!
//! Input mistakes made at the prompts never show up here; they are recovered
//! by re-prompting (see `cli::flow::InputError`). Every variant below aborts
//! the run.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while generating or saving codes.
#[derive(Debug, Error)]
pub enum CodegenError {
    /// The character pool contains no characters to sample from.
    #[error("the character pool is empty")]
    EmptyPool,

    /// More unique codes were requested than the pool can produce.
    ///
    /// `available` is `None` when the code space does not fit in a `u128`,
    /// which in practice never triggers this error.
    #[error(
        "cannot generate {requested} unique codes: only {} distinct codes of length {length} exist for this character set",
        format_space(.available)
    )]
    Infeasible {
        /// Number of codes requested
        requested: usize,
        /// Code length in characters
        length: usize,
        /// Size of the code space
        available: Option<u128>,
    },

    /// The configured draw limit was reached before enough codes were found.
    #[error(
        "gave up after {attempts} draws with {generated} of {requested} unique codes generated"
    )]
    AttemptsExhausted {
        /// Draws performed, including rejected duplicates
        attempts: u64,
        /// Unique codes collected so far
        generated: usize,
        /// Number of codes requested
        requested: usize,
    },

    /// A code contains a character the target encoding cannot represent.
    #[error("character '{character}' in code '{code}' cannot be encoded as {encoding}")]
    Unrepresentable {
        /// Offending code
        code: String,
        /// First character that failed to encode
        character: char,
        /// Display name of the target encoding
        encoding: &'static str,
    },

    /// Filesystem failure while preparing or writing the output.
    #[error("failed to write {}: {source}", .path.display())]
    Io {
        /// Path being created or written
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// CSV serialization failure.
    #[error("failed to serialize codes as CSV: {0}")]
    Csv(#[from] csv::Error),
}

fn format_space(available: &Option<u128>) -> String {
    match available {
        Some(n) => n.to_string(),
        None => "more than u128::MAX".to_string(),
    }
}
