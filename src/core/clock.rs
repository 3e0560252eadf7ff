use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries::{insert_entry, load_employee, update_employee_status};
use crate::errors::{AppError, AppResult};
use crate::models::action::ClockAction;
use crate::models::entry::{EntryKind, TimeEntry};
use crate::models::status::PresenceStatus;
use chrono::{Local, Utc};

/// High-level business logic for the `clock` command.
pub struct ClockLogic;

impl ClockLogic {
    /// Record a clock action for an employee: insert the entry stamped
    /// with the current instant and the local calendar date, then move
    /// the employee to the derived presence status.
    pub fn apply(
        pool: &mut DbPool,
        employee_id: i64,
        action: ClockAction,
        recorded_by: &str,
    ) -> AppResult<TimeEntry> {
        let employee = load_employee(&pool.conn, employee_id)?;

        validate_transition(employee.status, action)?;

        let entry = TimeEntry {
            id: 0,
            employee_id,
            shop_id: employee.shop_id,
            date: Local::now().date_naive(),
            recorded_by: recorded_by.to_string(),
            kind: EntryKind::Clock {
                timestamp: Utc::now(),
                action,
                status: action.status_after(),
            },
        };

        let id = insert_entry(&pool.conn, &entry)?;
        update_employee_status(&pool.conn, employee_id, action.status_after())?;

        ttlog(
            &pool.conn,
            "clock",
            &id.to_string(),
            &format!("{} {}", employee.name, action.to_db_str()),
        )?;

        Ok(TimeEntry { id, ..entry })
    }
}

/// The station only ever offers the actions that make sense for the
/// employee's current status; reject everything else.
fn validate_transition(status: PresenceStatus, action: ClockAction) -> AppResult<()> {
    let ok = matches!(
        (status, action),
        (PresenceStatus::Absent, ClockAction::ClockIn)
            | (PresenceStatus::Present, ClockAction::BreakStart)
            | (PresenceStatus::Break, ClockAction::BreakEnd)
            | (PresenceStatus::Present, ClockAction::ClockOut)
            | (PresenceStatus::Break, ClockAction::ClockOut)
    );

    if ok {
        Ok(())
    } else {
        Err(AppError::InvalidTransition(format!(
            "cannot {} while {}",
            action.to_db_str(),
            status.to_db_str()
        )))
    }
}
