//! Time utilities: parsing HH:MM and RFC 3339 instants, local formatting.

use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Local, NaiveTime, Utc};

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t, "%H:%M").ok()
}

/// Parse a stored RFC 3339 instant (the store writes UTC).
pub fn parse_timestamp(s: &str) -> AppResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| AppError::InvalidTime(s.to_string()))
}

/// Format an instant as a local wall-clock string for report rows.
pub fn local_hhmm(ts: DateTime<Utc>) -> String {
    ts.with_timezone(&Local).format("%H:%M").to_string()
}
