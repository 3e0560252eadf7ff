use crate::models::status::PresenceStatus;
use serde::Serialize;

/// One of the four clock-station buttons.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum ClockAction {
    ClockIn,
    BreakStart,
    BreakEnd,
    ClockOut,
}

impl ClockAction {
    /// Convert enum → stored string (document-store compatible values)
    pub fn to_db_str(&self) -> &'static str {
        match self {
            ClockAction::ClockIn => "clockIn",
            ClockAction::BreakStart => "breakStart",
            ClockAction::BreakEnd => "breakEnd",
            ClockAction::ClockOut => "clockOut",
        }
    }

    /// Convert stored string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "clockIn" => Some(ClockAction::ClockIn),
            "breakStart" => Some(ClockAction::BreakStart),
            "breakEnd" => Some(ClockAction::BreakEnd),
            "clockOut" => Some(ClockAction::ClockOut),
            _ => None,
        }
    }

    /// Helper: convert input code from CLI (kebab-case or camelCase)
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_lowercase().as_str() {
            "in" | "clock-in" | "clockin" => Some(ClockAction::ClockIn),
            "break-start" | "breakstart" => Some(ClockAction::BreakStart),
            "break-end" | "breakend" => Some(ClockAction::BreakEnd),
            "out" | "clock-out" | "clockout" => Some(ClockAction::ClockOut),
            _ => None,
        }
    }

    /// Presence status an employee ends up in after this action.
    pub fn status_after(&self) -> PresenceStatus {
        match self {
            ClockAction::ClockIn | ClockAction::BreakEnd => PresenceStatus::Present,
            ClockAction::BreakStart => PresenceStatus::Break,
            ClockAction::ClockOut => PresenceStatus::Absent,
        }
    }
}
