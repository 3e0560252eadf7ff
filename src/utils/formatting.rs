//! Formatting utilities used for CLI and export outputs.

/// Hour totals always render with two decimals, matching the historic
/// report numbers.
pub fn hours2str(hours: f64) -> String {
    format!("{:.2}", hours)
}
