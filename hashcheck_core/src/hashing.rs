//! Hash calculation functionality for the hashcheck Core Library
//!
//! [`HashAlgorithm`] selects one of the supported digests by name and
//! [`HashCalculator`] streams a file or reader through it.

use crate::{
    CheckerConfig, Error, Result,
    error::{IoError, ValidationError},
};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::time::{Duration, Instant};

mod algorithms;
mod sequential;
mod traits;

pub use algorithms::DigestState;
pub use traits::StreamingHasher;

/// Hash algorithms supported by the checker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HashAlgorithm {
    /// MD5 hash algorithm
    MD5,
    /// SHA-1 hash algorithm
    SHA1,
    /// SHA-256 hash algorithm
    SHA256,
    /// SHA-512 hash algorithm
    SHA512,
}

impl HashAlgorithm {
    /// All supported algorithms, in canonical order
    pub const ALL: [HashAlgorithm; 4] = [
        HashAlgorithm::MD5,
        HashAlgorithm::SHA1,
        HashAlgorithm::SHA256,
        HashAlgorithm::SHA512,
    ];

    /// Identifier accepted on the command line
    pub fn id(&self) -> &'static str {
        match self {
            HashAlgorithm::MD5 => "md5",
            HashAlgorithm::SHA1 => "sha1",
            HashAlgorithm::SHA256 => "sha256",
            HashAlgorithm::SHA512 => "sha512",
        }
    }

    /// Display name for user interfaces
    pub fn display_name(&self) -> &'static str {
        match self {
            HashAlgorithm::MD5 => "MD5",
            HashAlgorithm::SHA1 => "SHA-1",
            HashAlgorithm::SHA256 => "SHA-256",
            HashAlgorithm::SHA512 => "SHA-512",
        }
    }

    /// Length of the finalized digest in bytes
    pub fn digest_len(&self) -> usize {
        match self {
            HashAlgorithm::MD5 => 16,
            HashAlgorithm::SHA1 => 20,
            HashAlgorithm::SHA256 => 32,
            HashAlgorithm::SHA512 => 64,
        }
    }

    /// Length of the lowercase hex rendering of the digest
    pub fn hex_len(&self) -> usize {
        self.digest_len() * 2
    }

    /// Create a fresh digest producer for this algorithm
    pub fn create_hasher(&self) -> DigestState {
        DigestState::new(*self)
    }

    /// Comma separated list of accepted identifiers
    pub fn supported_names() -> String {
        Self::ALL
            .iter()
            .map(|algorithm| algorithm.id())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl std::fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

impl std::str::FromStr for HashAlgorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "md5" => Ok(HashAlgorithm::MD5),
            "sha1" => Ok(HashAlgorithm::SHA1),
            "sha256" => Ok(HashAlgorithm::SHA256),
            "sha512" => Ok(HashAlgorithm::SHA512),
            _ => Err(Error::Validation(ValidationError::unsupported_algorithm(s))),
        }
    }
}

/// Result of hash calculation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HashResult {
    pub algorithm: HashAlgorithm,
    /// Raw digest bytes
    pub digest: Vec<u8>,
    /// Lowercase hex rendering of `digest`
    pub hash: String,
    pub input_size: u64,
    pub duration: Duration,
}

impl HashResult {
    fn new(algorithm: HashAlgorithm, digest: Vec<u8>, input_size: u64, duration: Duration) -> Self {
        let hash = hex::encode(&digest);
        Self {
            algorithm,
            digest,
            hash,
            input_size,
            duration,
        }
    }
}

/// Hash calculator for streaming file digests
#[derive(Debug, Clone, Default)]
pub struct HashCalculator {
    config: CheckerConfig,
}

impl HashCalculator {
    /// Create a new hash calculator with the default buffer size
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a hash calculator with custom configuration
    pub fn with_config(config: CheckerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Create a hash calculator with a custom read buffer size
    pub fn with_buffer_size(buffer_size: usize) -> Result<Self> {
        Self::with_config(CheckerConfig { buffer_size })
    }

    /// Size of each read from the input
    pub fn buffer_size(&self) -> usize {
        self.config.buffer_size
    }

    /// Calculate hash for byte data in one shot
    pub fn calculate_bytes(&self, algorithm: HashAlgorithm, data: &[u8]) -> Result<HashResult> {
        let start_time = Instant::now();

        let mut hasher = algorithm.create_hasher();
        hasher.update(data);
        let digest = hasher.finalize();

        Ok(HashResult::new(
            algorithm,
            digest,
            data.len() as u64,
            start_time.elapsed(),
        ))
    }

    /// Calculate hash for everything a reader yields, streaming in fixed-size chunks
    pub fn calculate_reader<R: Read + ?Sized>(
        &self,
        reader: &mut R,
        algorithm: HashAlgorithm,
    ) -> Result<HashResult> {
        let start_time = Instant::now();

        let outcome = sequential::digest_stream(reader, algorithm, self.config.buffer_size)
            .map_err(IoError::read_failed)?;

        Ok(HashResult::new(
            algorithm,
            outcome.digest,
            outcome.bytes_processed,
            start_time.elapsed(),
        ))
    }

    /// Calculate hash for a file using streaming to avoid loading entire file into memory
    ///
    /// The file handle lives only for the duration of this call and is closed
    /// on every return path.
    pub fn calculate_file(&self, file_path: &Path, algorithm: HashAlgorithm) -> Result<HashResult> {
        let start_time = Instant::now();

        let mut file = File::open(file_path).map_err(|e| IoError::open_failed(file_path, e))?;
        let metadata = file
            .metadata()
            .map_err(|e| IoError::open_failed(file_path, e))?;
        if metadata.is_dir() {
            return Err(Error::Io(IoError::is_directory(file_path)));
        }

        log::debug!(
            "Hashing {} ({} bytes) with {} using {} byte reads",
            file_path.display(),
            metadata.len(),
            algorithm.display_name(),
            self.config.buffer_size
        );

        let outcome = sequential::digest_stream(&mut file, algorithm, self.config.buffer_size)
            .map_err(|e| IoError::read_failed(e).with_path(file_path))?;
        log::debug!(
            "Read {} in {} operations",
            file_path.display(),
            outcome.io_operations
        );

        Ok(HashResult::new(
            algorithm,
            outcome.digest,
            outcome.bytes_processed,
            start_time.elapsed(),
        ))
    }
}
