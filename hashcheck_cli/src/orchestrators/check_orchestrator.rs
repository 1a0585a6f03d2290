//! Check command orchestrator
//!
//! Resolves the algorithm, streams the file through the core calculator and
//! compares the digest with the expected value.

use crate::error::CliResult;
use hashcheck_core::{CheckerConfig, HashAlgorithm, HashCalculator, HashComparison};
use log::debug;
use std::path::Path;

/// Orchestrator for a single file check
#[derive(Debug)]
pub struct CheckOrchestrator {
    calculator: HashCalculator,
}

impl CheckOrchestrator {
    /// Create a new check orchestrator
    pub fn new(config: CheckerConfig) -> CliResult<Self> {
        debug!("Creating check orchestrator with buffer size {}", config.buffer_size);
        let calculator = HashCalculator::with_config(config)?;
        Ok(Self { calculator })
    }

    /// Hash `path` with `algorithm` and compare against `expected`
    ///
    /// The algorithm is resolved before the file is touched, so an unknown
    /// name never opens anything. A mismatch is a successful check.
    pub fn check(&self, path: &Path, algorithm: &str, expected: &str) -> CliResult<HashComparison> {
        let algorithm: HashAlgorithm = algorithm.parse()?;
        debug!("Checking {} with {}", path.display(), algorithm.display_name());

        let result = self.calculator.calculate_file(path, algorithm)?;
        debug!(
            "Calculated {} over {} bytes in {:?}",
            result.hash, result.input_size, result.duration
        );

        let comparison = HashComparison::from_result(&result, expected);
        debug!("Match: {}", comparison.is_match());
        Ok(comparison)
    }
}
