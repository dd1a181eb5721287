//! Unique code generation by rejection sampling
//!
//! Candidates are drawn one character at a time, uniformly from the pool,
//! and discarded when they duplicate an accepted code. A feasibility check
//! against the size of the code space runs first, so an impossible request
//! fails immediately instead of sampling forever.

use std::collections::hash_set;
use std::collections::HashSet;

use rand::Rng;

use super::charset::CharacterPool;
use super::error::CodegenError;
use crate::utils::CodeProgress;

/// Upper bound on the up-front set allocation; larger sets grow on demand
const PREALLOCATE_LIMIT: usize = 1 << 16;

/// Distinct generated codes; iteration order is unspecified
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodeSet {
    codes: HashSet<String>,
}

impl CodeSet {
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    pub fn contains(&self, code: &str) -> bool {
        self.codes.contains(code)
    }

    pub fn iter(&self) -> hash_set::Iter<'_, String> {
        self.codes.iter()
    }

    pub fn into_inner(self) -> HashSet<String> {
        self.codes
    }
}

impl<'a> IntoIterator for &'a CodeSet {
    type Item = &'a String;
    type IntoIter = hash_set::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.codes.iter()
    }
}

/// Generator for fixed-length codes over a character pool
#[derive(Debug, Clone)]
pub struct CodeGenerator {
    pool: CharacterPool,
    length: usize,
    max_attempts: Option<u64>,
}

impl CodeGenerator {
    pub fn new(pool: CharacterPool, length: usize) -> Self {
        Self {
            pool,
            length,
            max_attempts: None,
        }
    }

    /// Cap the total number of draws, duplicates included. `None` is unbounded.
    pub fn with_max_attempts(mut self, max_attempts: Option<u64>) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// Reject requests for more codes than the pool can produce
    pub fn check_feasible(&self, count: usize) -> Result<(), CodegenError> {
        if self.pool.is_empty() {
            return Err(CodegenError::EmptyPool);
        }

        match self.pool.code_space(self.length) {
            Some(space) if (count as u128) > space => Err(CodegenError::Infeasible {
                requested: count,
                length: self.length,
                available: Some(space),
            }),
            _ => Ok(()),
        }
    }

    /// Draw a single candidate code. The pool must not be empty.
    fn draw<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        let chars = self.pool.chars();
        (0..self.length)
            .map(|_| chars[rng.gen_range(0..chars.len())])
            .collect()
    }

    /// Generate `count` distinct codes, reporting progress on `progress`.
    ///
    /// The bar message is refreshed whenever the displayed percentage changes.
    pub fn generate<R: Rng + ?Sized>(
        &self,
        count: usize,
        rng: &mut R,
        progress: &CodeProgress,
    ) -> Result<CodeSet, CodegenError> {
        self.check_feasible(count)?;

        let mut codes = HashSet::with_capacity(count.min(PREALLOCATE_LIMIT));
        let mut attempts: u64 = 0;
        let mut last_permille = None;

        progress.update(0, count);

        while codes.len() < count {
            if let Some(limit) = self.max_attempts {
                if attempts >= limit {
                    progress.abandon();
                    return Err(CodegenError::AttemptsExhausted {
                        attempts,
                        generated: codes.len(),
                        requested: count,
                    });
                }
            }
            attempts += 1;

            let candidate = self.draw(rng);
            if !codes.insert(candidate) {
                continue;
            }

            let accepted = codes.len();
            let permille = accepted as u128 * 1000 / count as u128;
            if last_permille != Some(permille) {
                progress.update(accepted, count);
                last_permille = Some(permille);
            }
        }

        progress.finish();
        tracing::debug!(
            count,
            attempts,
            duplicates = attempts - count as u64,
            "code generation finished"
        );

        Ok(CodeSet { codes })
    }
}
