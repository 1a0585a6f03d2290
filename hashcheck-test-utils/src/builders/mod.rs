//! Test data builders

mod test_data;

pub use test_data::{TestFileBuilder, deterministic_content, reference_hash};
