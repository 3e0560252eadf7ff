//! Per-entry time metrics.
//!
//! Weekend attribution is deliberately coarse: when a shift touches any
//! Saturday or Sunday, the entire shift's work hours count as weekend
//! hours. Downstream reports depend on these numbers, so the policy is
//! kept as-is rather than pro-rated per day.

use crate::models::entry::{EntryKind, TimeEntry};
use crate::utils::date::is_weekend;
use chrono::NaiveDate;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TimeMetrics {
    pub work_hours: f64,
    pub break_hours: f64,
    pub weekend_hours: f64,
}

/// Compute work/break/weekend hours for a single entry.
///
/// Clock actions are never paired into durations; they carry no hours.
/// Manual entries are not clamped: a `timestamp_out` earlier than
/// `timestamp_in` produces negative work hours that flow through to the
/// totals unchanged.
pub fn entry_metrics(entry: &TimeEntry) -> TimeMetrics {
    match &entry.kind {
        EntryKind::Clock { .. } => TimeMetrics::default(),
        EntryKind::Manual {
            timestamp_in,
            timestamp_out,
            break_minutes,
        } => {
            let total_minutes = (*timestamp_out - *timestamp_in).num_seconds() as f64 / 60.0;
            let break_mins = *break_minutes as f64;

            let work_hours = (total_minutes - break_mins) / 60.0;
            let break_hours = break_mins / 60.0;

            let weekend_hours =
                if span_touches_weekend(timestamp_in.date_naive(), timestamp_out.date_naive()) {
                    work_hours
                } else {
                    0.0
                };

            TimeMetrics {
                work_hours,
                break_hours,
                weekend_hours,
            }
        }
    }
}

/// Walk each calendar day from `from` through `to` inclusive and stop at
/// the first Saturday or Sunday. A reversed range (to < from) never
/// iterates and therefore never touches a weekend.
fn span_touches_weekend(from: NaiveDate, to: NaiveDate) -> bool {
    let mut day = from;
    while day <= to {
        if is_weekend(day) {
            return true;
        }
        day = match day.succ_opt() {
            Some(next) => next,
            None => return false,
        };
    }
    false
}
