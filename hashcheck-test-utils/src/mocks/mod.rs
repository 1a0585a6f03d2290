//! Readers with scripted failures

mod reader;

pub use reader::{FailingReader, InterruptingReader};
