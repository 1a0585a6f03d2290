//! Rendering of check results for the terminal

mod formatters;

pub use formatters::render_report;
