//! Test data builders for creating files to check

use hashcheck_core::{HashAlgorithm, Result};
use md5::Md5;
use sha1::Sha1;
use sha2::{Digest, Sha256, Sha512};
use std::path::{Path, PathBuf};

/// Deterministic pseudo-random content for a given seed
pub fn deterministic_content(size: usize, seed: u64) -> Vec<u8> {
    let mut content = Vec::with_capacity(size);
    let mut state = seed ^ 0x9e37_79b9_7f4a_7c15;

    for _ in 0..size {
        content.push((state >> 24) as u8);
        state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
    }

    content
}

/// One-shot digest computed directly with the RustCrypto hashers
///
/// Used as the reference the streaming engine is checked against.
pub fn reference_hash(algorithm: HashAlgorithm, data: &[u8]) -> String {
    match algorithm {
        HashAlgorithm::MD5 => hex::encode(Md5::digest(data)),
        HashAlgorithm::SHA1 => hex::encode(Sha1::digest(data)),
        HashAlgorithm::SHA256 => hex::encode(Sha256::digest(data)),
        HashAlgorithm::SHA512 => hex::encode(Sha512::digest(data)),
    }
}

/// Builder for files on disk that tests hash
pub struct TestFileBuilder {
    base_dir: PathBuf,
    generated_files: Vec<PathBuf>,
}

impl TestFileBuilder {
    /// Create a new test file builder rooted at `base_dir`
    pub fn new(base_dir: &Path) -> Self {
        Self {
            base_dir: base_dir.to_path_buf(),
            generated_files: Vec::new(),
        }
    }

    /// Check if the builder is ready to use
    pub fn is_ready(&self) -> bool {
        self.base_dir.exists() && self.base_dir.is_dir()
    }

    /// Write a file with the given content
    pub fn generate_file(&mut self, name: &str, content: &[u8]) -> Result<PathBuf> {
        let file_path = self.base_dir.join(name);
        std::fs::write(&file_path, content)?;
        self.generated_files.push(file_path.clone());
        Ok(file_path)
    }

    /// Write a zero-byte file
    pub fn generate_empty_file(&mut self, name: &str) -> Result<PathBuf> {
        self.generate_file(name, &[])
    }

    /// Write a file with specific size and seed
    pub fn generate_deterministic_file(
        &mut self,
        name: &str,
        size: usize,
        seed: u64,
    ) -> Result<PathBuf> {
        let content = deterministic_content(size, seed);
        self.generate_file(name, &content)
    }

    /// Files written so far
    pub fn generated_files(&self) -> &[PathBuf] {
        &self.generated_files
    }

    /// Remove every generated file
    pub fn cleanup(&mut self) {
        for file in self.generated_files.drain(..) {
            let _ = std::fs::remove_file(file);
        }
    }
}

impl Drop for TestFileBuilder {
    fn drop(&mut self) {
        self.cleanup();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_content_is_deterministic_per_seed() {
        assert_eq!(deterministic_content(4096, 7), deterministic_content(4096, 7));
        assert_ne!(deterministic_content(4096, 7), deterministic_content(4096, 8));
        assert_eq!(deterministic_content(10, 1).len(), 10);
    }

    #[test]
    fn test_reference_hash_known_values() {
        assert_eq!(
            reference_hash(HashAlgorithm::MD5, b""),
            "d41d8cd98f00b204e9800998ecf8427e"
        );
        assert_eq!(
            reference_hash(HashAlgorithm::SHA256, b""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn test_builder_writes_and_cleans_up() {
        let temp_dir = TempDir::new().unwrap();

        let path = {
            let mut builder = TestFileBuilder::new(temp_dir.path());
            assert!(builder.is_ready());
            let path = builder.generate_deterministic_file("data.bin", 1000, 3).unwrap();
            assert_eq!(std::fs::metadata(&path).unwrap().len(), 1000);
            assert_eq!(builder.generated_files().len(), 1);
            path
        };

        assert!(!path.exists());
    }
}
