use colored::*;
use hashcheck_core::HashComparison;

/// Render the match/mismatch report, one line per entry
///
/// Only the headline is colored; the hashes stay plain so they can be
/// copied straight out of the terminal.
pub fn render_report(comparison: &HashComparison, use_color: bool) -> String {
    let headline = comparison.headline();
    let mut output = if !use_color {
        headline.to_string()
    } else if comparison.is_match() {
        headline.green().bold().to_string()
    } else {
        headline.red().bold().to_string()
    };

    for line in comparison.detail_lines() {
        output.push('\n');
        output.push_str(&line);
    }

    output
}
