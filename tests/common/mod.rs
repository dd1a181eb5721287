//! Shared test utilities and fixtures

#![allow(dead_code)]

use std::collections::HashSet;
use std::path::Path;

use codegen::pipeline::{CharacterPool, CodeGenerator, CodeSet, CodegenError, TextEncoding};
use codegen::utils::CodeProgress;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Generate codes with a fixed seed and no visible progress
pub fn generate(pool: &str, length: usize, count: usize, seed: u64) -> Result<CodeSet, CodegenError> {
    let generator = CodeGenerator::new(CharacterPool::from(pool), length);
    let mut rng = StdRng::seed_from_u64(seed);
    generator.generate(count, &mut rng, &CodeProgress::hidden())
}

/// Assert cardinality, length and pool membership of a generated set
pub fn assert_code_invariants(codes: &CodeSet, pool: &str, length: usize, count: usize) {
    assert_eq!(codes.len(), count, "Code count mismatch: expected {}, got {}", count, codes.len());
    for code in codes {
        assert_eq!(
            code.chars().count(),
            length,
            "Code '{}' should have {} characters",
            code,
            length
        );
        for c in code.chars() {
            assert!(pool.contains(c), "Character '{}' of code '{}' is not in pool '{}'", c, code, pool);
        }
    }
}

/// Decode a written CSV file and return its lines as a set
pub fn read_back(path: &Path, encoding: TextEncoding) -> HashSet<String> {
    let bytes = std::fs::read(path).unwrap();
    let (text, _, had_errors) = encoding.encoding().decode(&bytes);
    assert!(!had_errors, "File should decode cleanly as {}", encoding);
    text.lines().map(|line| line.to_string()).collect()
}

/// Join prompt answers into piped stdin content
pub fn answers(lines: &[&str]) -> String {
    let mut input = lines.join("\n");
    input.push('\n');
    input
}
