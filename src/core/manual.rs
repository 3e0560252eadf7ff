use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries::{insert_entry, load_employee};
use crate::errors::{AppError, AppResult};
use crate::models::entry::{EntryKind, TimeEntry};
use chrono::offset::LocalResult;
use chrono::{DateTime, Local, NaiveDate, NaiveTime, TimeZone, Utc};

/// High-level business logic for the `add` (manual entry) command.
pub struct ManualEntryLogic;

impl ManualEntryLogic {
    /// Record a manual entry. Both instants are built on the entry date
    /// in local time, so an `--out` earlier than `--in` yields a
    /// reversed pair and, downstream, negative hours — recorded anyway,
    /// the caller decides whether to warn.
    pub fn apply(
        pool: &mut DbPool,
        employee_id: i64,
        date: NaiveDate,
        time_in: NaiveTime,
        time_out: NaiveTime,
        break_minutes: i64,
        recorded_by: &str,
    ) -> AppResult<TimeEntry> {
        if break_minutes < 0 {
            return Err(AppError::InvalidTime(format!(
                "break duration must be non-negative, got {}",
                break_minutes
            )));
        }

        let employee = load_employee(&pool.conn, employee_id)?;

        let entry = TimeEntry {
            id: 0,
            employee_id,
            shop_id: employee.shop_id,
            date,
            recorded_by: recorded_by.to_string(),
            kind: EntryKind::Manual {
                timestamp_in: local_instant(date, time_in)?,
                timestamp_out: local_instant(date, time_out)?,
                break_minutes,
            },
        };

        let id = insert_entry(&pool.conn, &entry)?;

        ttlog(
            &pool.conn,
            "add",
            &id.to_string(),
            &format!(
                "Manual entry for {} on {} ({} → {})",
                employee.name, date, time_in, time_out
            ),
        )?;

        Ok(TimeEntry { id, ..entry })
    }
}

/// Interpret date+time as local wall clock and store the UTC instant.
fn local_instant(date: NaiveDate, time: NaiveTime) -> AppResult<DateTime<Utc>> {
    match Local.from_local_datetime(&date.and_time(time)) {
        LocalResult::Single(dt) => Ok(dt.with_timezone(&Utc)),
        // DST fold: take the earlier reading
        LocalResult::Ambiguous(dt, _) => Ok(dt.with_timezone(&Utc)),
        LocalResult::None => Err(AppError::InvalidTime(format!(
            "{} {} does not exist in the local timezone",
            date, time
        ))),
    }
}
