/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const CYAN: &str = "\x1b[36m";

use crate::models::status::PresenceStatus;

/// Presence badge color:
/// Present → green, Break → yellow, Absent → grey
pub fn color_for_status(status: PresenceStatus) -> &'static str {
    match status {
        PresenceStatus::Present => GREEN,
        PresenceStatus::Break => YELLOW,
        PresenceStatus::Absent => GREY,
    }
}

/// Hour totals color: negative totals (reversed manual entries) show red.
pub fn color_for_hours(value: f64) -> &'static str {
    if value < 0.0 { RED } else { RESET }
}
