use crate::models::action::ClockAction;
use crate::models::status::PresenceStatus;
use chrono::{DateTime, NaiveDate, Utc};

/// One attendance record. The two shapes the original store mixes in a
/// single collection (probed at runtime via an `isManual` flag) are an
/// explicit sum type here so the metrics calculator can match exhaustively.
#[derive(Debug, Clone, PartialEq)]
pub enum EntryKind {
    /// Produced by a clock-station action. Never paired into a duration;
    /// contributes zero hours to every aggregate.
    Clock {
        timestamp: DateTime<Utc>,
        action: ClockAction,
        status: PresenceStatus,
    },
    /// Recorded after the fact by a manager. `timestamp_out` is not
    /// required to be later than `timestamp_in`; a reversed pair yields
    /// negative hours downstream.
    Manual {
        timestamp_in: DateTime<Utc>,
        timestamp_out: DateTime<Utc>,
        break_minutes: i64,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct TimeEntry {
    pub id: i64,
    pub employee_id: i64,
    pub shop_id: i64,
    /// Calendar day the entry logically belongs to (local, no timezone).
    pub date: NaiveDate,
    pub recorded_by: String,
    pub kind: EntryKind,
}

impl TimeEntry {
    pub fn is_manual(&self) -> bool {
        matches!(self.kind, EntryKind::Manual { .. })
    }

    /// Instant used when ordering mixed entry shapes: the clock action
    /// timestamp when present, else the manual entry's clock-in.
    pub fn sort_timestamp(&self) -> DateTime<Utc> {
        match &self.kind {
            EntryKind::Clock { timestamp, .. } => *timestamp,
            EntryKind::Manual { timestamp_in, .. } => *timestamp_in,
        }
    }

    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}
