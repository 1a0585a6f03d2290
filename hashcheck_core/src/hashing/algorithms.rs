//! Hash algorithm implementations
//!
//! Every supported algorithm is a variant of [`DigestState`], so dispatch is a
//! plain `match` over a closed set.

use super::HashAlgorithm;
use super::traits::StreamingHasher;
use md5::Md5;
use sha1::Sha1;
use sha2::{Digest, Sha256, Sha512};

/// In-progress digest for one of the supported algorithms
#[derive(Clone)]
pub enum DigestState {
    Md5(Md5),
    Sha1(Sha1),
    Sha256(Sha256),
    Sha512(Sha512),
}

impl DigestState {
    /// Create a fresh digest state for the given algorithm
    pub fn new(algorithm: HashAlgorithm) -> Self {
        match algorithm {
            HashAlgorithm::MD5 => Self::Md5(Md5::new()),
            HashAlgorithm::SHA1 => Self::Sha1(Sha1::new()),
            HashAlgorithm::SHA256 => Self::Sha256(Sha256::new()),
            HashAlgorithm::SHA512 => Self::Sha512(Sha512::new()),
        }
    }

    /// Algorithm this state accumulates
    pub fn algorithm(&self) -> HashAlgorithm {
        match self {
            Self::Md5(_) => HashAlgorithm::MD5,
            Self::Sha1(_) => HashAlgorithm::SHA1,
            Self::Sha256(_) => HashAlgorithm::SHA256,
            Self::Sha512(_) => HashAlgorithm::SHA512,
        }
    }
}

impl std::fmt::Debug for DigestState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("DigestState")
            .field(&self.algorithm())
            .finish()
    }
}

impl StreamingHasher for DigestState {
    fn update(&mut self, data: &[u8]) {
        match self {
            Self::Md5(hasher) => Digest::update(hasher, data),
            Self::Sha1(hasher) => Digest::update(hasher, data),
            Self::Sha256(hasher) => Digest::update(hasher, data),
            Self::Sha512(hasher) => Digest::update(hasher, data),
        }
    }

    fn finalize(self) -> Vec<u8> {
        match self {
            Self::Md5(hasher) => hasher.finalize().to_vec(),
            Self::Sha1(hasher) => hasher.finalize().to_vec(),
            Self::Sha256(hasher) => hasher.finalize().to_vec(),
            Self::Sha512(hasher) => hasher.finalize().to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn digest_hex(algorithm: HashAlgorithm, data: &[u8]) -> String {
        let mut state = DigestState::new(algorithm);
        state.update(data);
        hex::encode(state.finalize())
    }

    #[test]
    fn test_known_answers_for_abc() {
        assert_eq!(
            digest_hex(HashAlgorithm::MD5, b"abc"),
            "900150983cd24fb0d6963f7d28e17f72"
        );
        assert_eq!(
            digest_hex(HashAlgorithm::SHA1, b"abc"),
            "a9993e364706816aba3e25717850c26c9cd0d89d"
        );
        assert_eq!(
            digest_hex(HashAlgorithm::SHA256, b"abc"),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
        assert_eq!(
            digest_hex(HashAlgorithm::SHA512, b"abc"),
            "ddaf35a193617abacc417349ae20413112e6fa4e89a97ea20a9eeee64b55d39a\
             2192992a274fc1a836ba3c23a3feebbd454d4423643ce80e2a9ac94fa54ca49f"
        );
    }

    #[test]
    fn test_digest_lengths_match_algorithm() {
        for algorithm in HashAlgorithm::ALL {
            let digest = DigestState::new(algorithm).finalize();
            assert_eq!(digest.len(), algorithm.digest_len(), "{algorithm}");
        }
    }

    #[test]
    fn test_split_updates_equal_single_update() {
        let mut split = DigestState::new(HashAlgorithm::SHA256);
        split.update(b"hello ");
        split.update(b"world");

        assert_eq!(
            hex::encode(split.finalize()),
            digest_hex(HashAlgorithm::SHA256, b"hello world")
        );
    }

    #[test]
    fn test_update_order_matters() {
        let mut forward = DigestState::new(HashAlgorithm::MD5);
        forward.update(b"ab");
        forward.update(b"cd");

        let mut reversed = DigestState::new(HashAlgorithm::MD5);
        reversed.update(b"cd");
        reversed.update(b"ab");

        assert_ne!(forward.finalize(), reversed.finalize());
    }

    #[test]
    fn test_state_reports_its_algorithm() {
        for algorithm in HashAlgorithm::ALL {
            assert_eq!(DigestState::new(algorithm).algorithm(), algorithm);
        }
    }
}
