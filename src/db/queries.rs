use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::action::ClockAction;
use crate::models::employee::{Employee, OWNER_ID};
use crate::models::entry::{EntryKind, TimeEntry};
use crate::models::role::Role;
use crate::models::shop::Shop;
use crate::models::status::PresenceStatus;
use crate::utils::time::parse_timestamp;
use chrono::{Local, NaiveDate};
use rusqlite::{Connection, Result, Row, params};

fn conversion_err(e: AppError) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Text, Box::new(e))
}

// ------------------------------------------------------------------
// Employees
// ------------------------------------------------------------------

pub fn map_employee_row(row: &Row) -> Result<Employee> {
    let role_str: String = row.get("role")?;
    let role = Role::from_db_str(&role_str)
        .ok_or_else(|| conversion_err(AppError::InvalidRole(role_str.clone())))?;

    let status_str: String = row.get("status")?;
    let status = PresenceStatus::from_db_str(&status_str).ok_or_else(|| {
        conversion_err(AppError::Other(format!("Invalid status: {}", status_str)))
    })?;

    Ok(Employee {
        id: row.get("id")?,
        name: row.get("name")?,
        role,
        shop_id: row.get("shop_id")?,
        full_access: row.get::<_, i64>("full_access")? == 1,
        status,
    })
}

pub fn load_employees(pool: &mut DbPool) -> AppResult<Vec<Employee>> {
    let mut stmt = pool
        .conn
        .prepare("SELECT * FROM employees ORDER BY id ASC")?;

    let rows = stmt.query_map([], map_employee_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn load_employee(conn: &Connection, id: i64) -> AppResult<Employee> {
    let mut stmt = conn.prepare("SELECT * FROM employees WHERE id = ?1")?;
    let mut rows = stmt.query_map([id], map_employee_row)?;

    match rows.next() {
        Some(r) => Ok(r?),
        None => Err(AppError::UnknownEmployee(id)),
    }
}

pub fn insert_employee(conn: &Connection, emp: &Employee) -> AppResult<()> {
    conn.execute(
        "INSERT INTO employees (id, name, role, shop_id, full_access, status, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        params![
            emp.id,
            emp.name,
            emp.role.to_db_str(),
            emp.shop_id,
            if emp.full_access { 1 } else { 0 },
            emp.status.to_db_str(),
            Local::now().to_rfc3339(),
        ],
    )?;
    Ok(())
}

pub fn update_employee_status(
    conn: &Connection,
    id: i64,
    status: PresenceStatus,
) -> AppResult<()> {
    conn.execute(
        "UPDATE employees SET status = ?1 WHERE id = ?2",
        params![status.to_db_str(), id],
    )?;
    Ok(())
}

pub fn delete_employee(conn: &Connection, id: i64) -> AppResult<()> {
    conn.execute("DELETE FROM employees WHERE id = ?1", [id])?;
    Ok(())
}

/// Move every employee of a shop back to "unassigned" (shop 0).
pub fn unassign_shop_employees(conn: &Connection, shop_id: i64) -> AppResult<usize> {
    let n = conn.execute(
        "UPDATE employees SET shop_id = 0 WHERE shop_id = ?1",
        [shop_id],
    )?;
    Ok(n)
}

/// Next free employee id. The fixed owner record sits at a reserved high
/// id and is excluded so regular ids stay in the 1001+ range.
pub fn next_employee_id(conn: &Connection) -> AppResult<i64> {
    let max: i64 = conn.query_row(
        "SELECT IFNULL(MAX(id), 1000) FROM employees WHERE id != ?1",
        [OWNER_ID],
        |row| row.get(0),
    )?;
    Ok(max + 1)
}

// ------------------------------------------------------------------
// Shops
// ------------------------------------------------------------------

pub fn map_shop_row(row: &Row) -> Result<Shop> {
    Ok(Shop {
        id: row.get("id")?,
        name: row.get("name")?,
        manager_id: row.get("manager_id")?,
    })
}

pub fn load_shops(pool: &mut DbPool) -> AppResult<Vec<Shop>> {
    let mut stmt = pool.conn.prepare("SELECT * FROM shops ORDER BY id ASC")?;

    let rows = stmt.query_map([], map_shop_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn load_shop(conn: &Connection, id: i64) -> AppResult<Shop> {
    let mut stmt = conn.prepare("SELECT * FROM shops WHERE id = ?1")?;
    let mut rows = stmt.query_map([id], map_shop_row)?;

    match rows.next() {
        Some(r) => Ok(r?),
        None => Err(AppError::UnknownShop(id)),
    }
}

pub fn insert_shop(conn: &Connection, shop: &Shop) -> AppResult<()> {
    conn.execute(
        "INSERT INTO shops (id, name, manager_id, created_at)
         VALUES (?1, ?2, ?3, ?4)",
        params![
            shop.id,
            shop.name,
            shop.manager_id,
            Local::now().to_rfc3339(),
        ],
    )?;
    Ok(())
}

pub fn delete_shop(conn: &Connection, id: i64) -> AppResult<()> {
    conn.execute("DELETE FROM shops WHERE id = ?1", [id])?;
    Ok(())
}

pub fn next_shop_id(conn: &Connection) -> AppResult<i64> {
    let max: i64 = conn.query_row("SELECT IFNULL(MAX(id), 0) FROM shops", [], |row| {
        row.get(0)
    })?;
    Ok(max + 1)
}

// ------------------------------------------------------------------
// Time entries
// ------------------------------------------------------------------

/// Raw row as stored; decoding into a typed entry happens in a second
/// step so one malformed record can be skipped instead of failing the
/// whole query.
struct RawEntry {
    id: i64,
    employee_id: i64,
    shop_id: i64,
    date: String,
    kind: String,
    timestamp: Option<String>,
    action: Option<String>,
    status: Option<String>,
    timestamp_in: Option<String>,
    timestamp_out: Option<String>,
    break_minutes: i64,
    recorded_by: String,
}

fn map_raw_entry(row: &Row) -> Result<RawEntry> {
    Ok(RawEntry {
        id: row.get("id")?,
        employee_id: row.get("employee_id")?,
        shop_id: row.get("shop_id")?,
        date: row.get("date")?,
        kind: row.get("kind")?,
        timestamp: row.get("timestamp")?,
        action: row.get("action")?,
        status: row.get("status")?,
        timestamp_in: row.get("timestamp_in")?,
        timestamp_out: row.get("timestamp_out")?,
        break_minutes: row.get("break_minutes")?,
        recorded_by: row.get("recorded_by")?,
    })
}

fn decode_entry(raw: RawEntry) -> AppResult<TimeEntry> {
    let invalid = |reason: String| AppError::ValidationError {
        id: raw.id,
        reason,
    };

    let date = NaiveDate::parse_from_str(&raw.date, "%Y-%m-%d")
        .map_err(|_| invalid(format!("unparseable date '{}'", raw.date)))?;

    let kind = match raw.kind.as_str() {
        "clock" => {
            let ts = raw
                .timestamp
                .as_deref()
                .ok_or_else(|| invalid("clock entry without timestamp".into()))?;
            let timestamp = parse_timestamp(ts)
                .map_err(|_| invalid(format!("unparseable timestamp '{}'", ts)))?;

            let action_str = raw
                .action
                .as_deref()
                .ok_or_else(|| invalid("clock entry without action".into()))?;
            let action = ClockAction::from_db_str(action_str)
                .ok_or_else(|| invalid(format!("unknown action '{}'", action_str)))?;

            let status = raw
                .status
                .as_deref()
                .and_then(PresenceStatus::from_db_str)
                .unwrap_or_else(|| action.status_after());

            EntryKind::Clock {
                timestamp,
                action,
                status,
            }
        }
        "manual" => {
            let ts_in = raw
                .timestamp_in
                .as_deref()
                .ok_or_else(|| invalid("manual entry without timestamp_in".into()))?;
            let ts_out = raw
                .timestamp_out
                .as_deref()
                .ok_or_else(|| invalid("manual entry without timestamp_out".into()))?;

            EntryKind::Manual {
                timestamp_in: parse_timestamp(ts_in)
                    .map_err(|_| invalid(format!("unparseable timestamp '{}'", ts_in)))?,
                timestamp_out: parse_timestamp(ts_out)
                    .map_err(|_| invalid(format!("unparseable timestamp '{}'", ts_out)))?,
                break_minutes: raw.break_minutes,
            }
        }
        other => return Err(invalid(format!("unknown entry kind '{}'", other))),
    };

    Ok(TimeEntry {
        id: raw.id,
        employee_id: raw.employee_id,
        shop_id: raw.shop_id,
        date,
        recorded_by: raw.recorded_by,
        kind,
    })
}

#[derive(Debug)]
pub struct SkippedEntry {
    pub id: i64,
    pub reason: String,
}

/// In-memory snapshot handed to the reporting engine. Malformed rows end
/// up in `skipped` with their id and reason; they never abort the load.
#[derive(Debug, Default)]
pub struct EntrySnapshot {
    pub entries: Vec<TimeEntry>,
    pub skipped: Vec<SkippedEntry>,
}

pub fn load_entries(pool: &mut DbPool) -> AppResult<EntrySnapshot> {
    let mut stmt = pool
        .conn
        .prepare("SELECT * FROM time_entries ORDER BY id ASC")?;

    let rows = stmt.query_map([], map_raw_entry)?;

    let mut snapshot = EntrySnapshot::default();
    for r in rows {
        let raw = r?;
        let id = raw.id;
        match decode_entry(raw) {
            Ok(entry) => snapshot.entries.push(entry),
            Err(e) => snapshot.skipped.push(SkippedEntry {
                id,
                reason: e.to_string(),
            }),
        }
    }

    Ok(snapshot)
}

/// Insert a new entry; the id is assigned by the store (creation order).
pub fn insert_entry(conn: &Connection, entry: &TimeEntry) -> AppResult<i64> {
    let (timestamp, action, status, timestamp_in, timestamp_out, break_minutes) =
        match &entry.kind {
            EntryKind::Clock {
                timestamp,
                action,
                status,
            } => (
                Some(timestamp.to_rfc3339()),
                Some(action.to_db_str()),
                Some(status.to_db_str()),
                None,
                None,
                0,
            ),
            EntryKind::Manual {
                timestamp_in,
                timestamp_out,
                break_minutes,
            } => (
                None,
                None,
                None,
                Some(timestamp_in.to_rfc3339()),
                Some(timestamp_out.to_rfc3339()),
                *break_minutes,
            ),
        };

    conn.execute(
        "INSERT INTO time_entries
         (employee_id, shop_id, date, kind, timestamp, action, status,
          timestamp_in, timestamp_out, break_minutes, recorded_by, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)",
        params![
            entry.employee_id,
            entry.shop_id,
            entry.date_str(),
            if entry.is_manual() { "manual" } else { "clock" },
            timestamp,
            action,
            status,
            timestamp_in,
            timestamp_out,
            break_minutes,
            entry.recorded_by,
            Local::now().to_rfc3339(),
        ],
    )?;

    Ok(conn.last_insert_rowid())
}

pub fn entry_exists(conn: &Connection, id: i64) -> AppResult<bool> {
    let mut stmt = conn.prepare("SELECT 1 FROM time_entries WHERE id = ?1 LIMIT 1")?;
    Ok(stmt.exists([id])?)
}

pub fn delete_entry(conn: &Connection, id: i64) -> AppResult<()> {
    if !entry_exists(conn, id)? {
        return Err(AppError::UnknownEntry(id));
    }
    conn.execute("DELETE FROM time_entries WHERE id = ?1", [id])?;
    Ok(())
}
