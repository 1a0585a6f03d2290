//! Checksum comparison and the match/mismatch report

use crate::hashing::{HashAlgorithm, HashResult};
use std::fmt;

/// Headline printed when the digests agree
pub const MATCH_MESSAGE: &str = "Hashes match!";
/// Headline printed when the digests differ
pub const MISMATCH_MESSAGE: &str = "Hashes do not match.";

/// Outcome of comparing a calculated digest with the expected one
///
/// Both values are held lowercased; hex case carries no meaning for a
/// checksum. The expected value is not length-checked, so a truncated or
/// padded expectation is just a mismatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HashComparison {
    algorithm: HashAlgorithm,
    calculated: String,
    expected: String,
}

impl HashComparison {
    /// Compare a calculated hex digest against an expected one
    pub fn new(algorithm: HashAlgorithm, calculated: &str, expected: &str) -> Self {
        Self {
            algorithm,
            calculated: calculated.to_lowercase(),
            expected: expected.to_lowercase(),
        }
    }

    /// Compare a finished hash result against an expected hex digest
    pub fn from_result(result: &HashResult, expected: &str) -> Self {
        Self::new(result.algorithm, &result.hash, expected)
    }

    pub fn algorithm(&self) -> HashAlgorithm {
        self.algorithm
    }

    /// Whether the two digests are equal, ignoring case
    pub fn is_match(&self) -> bool {
        self.calculated == self.expected
    }

    /// Lowercase calculated digest
    pub fn calculated(&self) -> &str {
        &self.calculated
    }

    /// Lowercase expected digest
    pub fn expected(&self) -> &str {
        &self.expected
    }

    /// Calculated digest as shown in the mismatch report
    pub fn calculated_display(&self) -> String {
        self.calculated.to_uppercase()
    }

    /// Expected digest as shown in the mismatch report
    pub fn expected_display(&self) -> String {
        self.expected.to_uppercase()
    }

    /// First line of the report
    pub fn headline(&self) -> &'static str {
        if self.is_match() {
            MATCH_MESSAGE
        } else {
            MISMATCH_MESSAGE
        }
    }

    /// Lines following the headline; empty on a match
    pub fn detail_lines(&self) -> Vec<String> {
        if self.is_match() {
            return Vec::new();
        }
        vec![
            format!("Calculated hash: {}", self.calculated_display()),
            format!("Expected hash:   {}", self.expected_display()),
        ]
    }
}

impl fmt::Display for HashComparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.headline())?;
        for line in self.detail_lines() {
            write!(f, "\n{line}")?;
        }
        Ok(())
    }
}
