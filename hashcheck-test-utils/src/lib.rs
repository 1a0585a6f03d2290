//! Test utilities for hashcheck
//!
//! This crate provides deterministic test files, independent reference
//! digests, and readers that misbehave on demand.

pub mod builders;
pub mod mocks;

// Re-export commonly used types
pub use builders::{TestFileBuilder, deterministic_content, reference_hash};
pub use mocks::{FailingReader, InterruptingReader};
