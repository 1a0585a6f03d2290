//! Core trait shared by all digest producers

/// Trait for streaming hash calculation
pub trait StreamingHasher {
    /// Update the hasher with new data
    fn update(&mut self, data: &[u8]);

    /// Finalize the hash calculation and return the raw digest bytes
    fn finalize(self) -> Vec<u8>;
}
