use serde::Serialize;

/// Current presence of an employee, updated on every clock action.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Default)]
pub enum PresenceStatus {
    #[default]
    Absent,
    Present,
    Break,
}

impl PresenceStatus {
    pub fn to_db_str(&self) -> &'static str {
        match self {
            PresenceStatus::Absent => "Absent",
            PresenceStatus::Present => "Present",
            PresenceStatus::Break => "Break",
        }
    }

    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "Absent" => Some(PresenceStatus::Absent),
            "Present" => Some(PresenceStatus::Present),
            "Break" => Some(PresenceStatus::Break),
            _ => None,
        }
    }
}
