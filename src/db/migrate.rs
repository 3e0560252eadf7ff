//! Migration engine. Schema changes are applied exactly once; applied
//! versions are recorded in the internal `log` table.

use crate::db::log::ttlog;
use crate::errors::AppResult;
use crate::models::employee::OWNER_ID;
use crate::ui::messages::success;
use chrono::Local;
use rusqlite::{Connection, OptionalExtension, Result, params};

/// Ensure that the `log` table exists with the modern schema.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn migration_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut stmt = conn.prepare(
        "SELECT 1 FROM log WHERE operation = 'migration_applied' AND target = ?1 LIMIT 1",
    )?;
    Ok(stmt.query_row([version], |_| Ok(())).optional()?.is_some())
}

/// Create the core tables: employees, shops, time_entries.
fn create_core_tables(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS employees (
            id          INTEGER PRIMARY KEY,
            name        TEXT NOT NULL,
            role        TEXT NOT NULL DEFAULT 'Staff' CHECK(role IN ('Owner','Manager','Staff')),
            shop_id     INTEGER NOT NULL DEFAULT 0,
            full_access INTEGER NOT NULL DEFAULT 0,
            status      TEXT NOT NULL DEFAULT 'Absent' CHECK(status IN ('Absent','Present','Break')),
            created_at  TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS shops (
            id         INTEGER PRIMARY KEY,
            name       TEXT NOT NULL,
            manager_id INTEGER NOT NULL DEFAULT 0,
            created_at TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS time_entries (
            id            INTEGER PRIMARY KEY AUTOINCREMENT,
            employee_id   INTEGER NOT NULL,
            shop_id       INTEGER NOT NULL DEFAULT 0,
            date          TEXT NOT NULL,
            kind          TEXT NOT NULL CHECK(kind IN ('clock','manual')),
            timestamp     TEXT,
            action        TEXT CHECK(action IN ('clockIn','breakStart','breakEnd','clockOut')),
            status        TEXT,
            timestamp_in  TEXT,
            timestamp_out TEXT,
            break_minutes INTEGER NOT NULL DEFAULT 0,
            recorded_by   TEXT NOT NULL DEFAULT 'cli',
            created_at    TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_entries_date ON time_entries(date);
        CREATE INDEX IF NOT EXISTS idx_entries_shop_date ON time_entries(shop_id, date);
        "#,
    )?;
    Ok(())
}

/// Seed the fixed system-owner record on a fresh database.
fn seed_owner(conn: &Connection) -> Result<()> {
    conn.execute(
        "INSERT OR IGNORE INTO employees (id, name, role, shop_id, full_access, status, created_at)
         VALUES (?1, 'System Owner', 'Owner', 0, 1, 'Absent', ?2)",
        params![OWNER_ID, Local::now().to_rfc3339()],
    )?;
    Ok(())
}

/// Add the per-employee lookup index used by the status table.
fn add_employee_entry_index(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        "CREATE INDEX IF NOT EXISTS idx_entries_employee_date
         ON time_entries(employee_id, date);",
    )?;
    Ok(())
}

/// Run all migrations that have not been applied yet.
pub fn run_pending_migrations(conn: &Connection) -> AppResult<()> {
    ensure_log_table(conn)?;

    let migrations: [(&str, fn(&Connection) -> Result<()>); 3] = [
        ("20260112_0001_create_core_tables", create_core_tables),
        ("20260112_0002_seed_owner", seed_owner),
        ("20260305_0003_employee_entry_index", add_employee_entry_index),
    ];

    for (version, migration) in migrations {
        if migration_applied(conn, version)? {
            continue;
        }

        migration(conn)?;

        ttlog(conn, "migration_applied", version, "Migration applied")?;
        success(format!("Migration applied: {}", version));
    }

    Ok(())
}
