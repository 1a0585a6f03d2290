//! hashcheck Core Library
//!
//! Streaming file digest computation and checksum comparison for the
//! `hashcheck` command line tool.

pub mod error;
pub mod hashing;
pub mod verify;

// Re-export main types
pub use error::{Error, Result};
pub use hashing::{DigestState, HashAlgorithm, HashCalculator, HashResult, StreamingHasher};
pub use verify::HashComparison;

/// Default read chunk size, the classic 32KB copy buffer
pub const DEFAULT_BUFFER_SIZE: usize = 32 * 1024;

/// Largest read buffer the engine will allocate
pub const MAX_BUFFER_SIZE: usize = 1024 * 1024 * 1024;

/// Core checker configuration
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct CheckerConfig {
    /// Size of each read from the input file, in bytes
    pub buffer_size: usize,
}

impl Default for CheckerConfig {
    fn default() -> Self {
        Self {
            buffer_size: DEFAULT_BUFFER_SIZE,
        }
    }
}

impl CheckerConfig {
    /// Create a test configuration
    pub fn test() -> Self {
        Self {
            buffer_size: 1024, // 1KB chunks so small fixtures span several reads
        }
    }

    /// Check that the configuration can drive the engine
    pub fn validate(&self) -> Result<()> {
        if self.buffer_size == 0 {
            return Err(Error::Validation(
                error::ValidationError::invalid_configuration("buffer_size must be positive"),
            ));
        }
        if self.buffer_size > MAX_BUFFER_SIZE {
            return Err(Error::Validation(
                error::ValidationError::invalid_configuration(&format!(
                    "buffer_size of {} MB exceeds the {} MB limit",
                    self.buffer_size / 1024 / 1024,
                    MAX_BUFFER_SIZE / 1024 / 1024
                )),
            ));
        }
        Ok(())
    }
}
