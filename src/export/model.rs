//! Flat export rows. Field names follow the historic document-store
//! schema (camelCase), so `--entries` dumps interoperate with the data
//! the original application persisted.

use crate::core::report::ReportRow;
use crate::models::entry::{EntryKind, TimeEntry};
use crate::utils::hours2str;
use serde::Serialize;

/// One generated report row.
#[derive(Serialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ReportRowExport {
    pub employee: String,
    pub shop: String,
    pub date: String,
    pub clock_in: String,
    pub clock_out: String,
    pub break_hours: String,
    pub work_hours: String,
    pub weekend_hours: String,
}

impl From<&ReportRow> for ReportRowExport {
    fn from(row: &ReportRow) -> Self {
        Self {
            employee: row.employee.clone(),
            shop: row.shop.clone(),
            date: row.date.format("%Y-%m-%d").to_string(),
            clock_in: row.clock_in.clone(),
            clock_out: row.clock_out.clone(),
            break_hours: hours2str(row.metrics.break_hours),
            work_hours: hours2str(row.metrics.work_hours),
            weekend_hours: hours2str(row.metrics.weekend_hours),
        }
    }
}

pub(crate) fn report_headers() -> Vec<&'static str> {
    vec![
        "employee",
        "shop",
        "date",
        "clockIn",
        "clockOut",
        "breakHours",
        "workHours",
        "weekendHours",
    ]
}

pub(crate) fn report_row_to_cells(r: &ReportRowExport) -> Vec<String> {
    vec![
        r.employee.clone(),
        r.shop.clone(),
        r.date.clone(),
        r.clock_in.clone(),
        r.clock_out.clone(),
        r.break_hours.clone(),
        r.work_hours.clone(),
        r.weekend_hours.clone(),
    ]
}

/// One raw time entry in the wire schema.
#[derive(Serialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct EntryExport {
    pub id: i64,
    pub employee_id: i64,
    pub shop_id: i64,
    pub date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp_in: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp_out: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub break_duration: Option<i64>,
    pub is_manual: bool,
    pub recorded_by: String,
}

impl From<&TimeEntry> for EntryExport {
    fn from(entry: &TimeEntry) -> Self {
        let mut out = Self {
            id: entry.id,
            employee_id: entry.employee_id,
            shop_id: entry.shop_id,
            date: entry.date_str(),
            timestamp: None,
            action: None,
            status: None,
            timestamp_in: None,
            timestamp_out: None,
            break_duration: None,
            is_manual: entry.is_manual(),
            recorded_by: entry.recorded_by.clone(),
        };

        match &entry.kind {
            EntryKind::Clock {
                timestamp,
                action,
                status,
            } => {
                out.timestamp = Some(timestamp.to_rfc3339());
                out.action = Some(action.to_db_str().to_string());
                out.status = Some(status.to_db_str().to_string());
            }
            EntryKind::Manual {
                timestamp_in,
                timestamp_out,
                break_minutes,
            } => {
                out.timestamp_in = Some(timestamp_in.to_rfc3339());
                out.timestamp_out = Some(timestamp_out.to_rfc3339());
                out.break_duration = Some(*break_minutes);
            }
        }

        out
    }
}

pub(crate) fn entry_headers() -> Vec<&'static str> {
    vec![
        "id",
        "employeeId",
        "shopId",
        "date",
        "timestamp",
        "action",
        "status",
        "timestampIn",
        "timestampOut",
        "breakDuration",
        "isManual",
        "recordedBy",
    ]
}

pub(crate) fn entry_to_cells(e: &EntryExport) -> Vec<String> {
    let opt = |v: &Option<String>| v.clone().unwrap_or_default();

    vec![
        e.id.to_string(),
        e.employee_id.to_string(),
        e.shop_id.to_string(),
        e.date.clone(),
        opt(&e.timestamp),
        opt(&e.action),
        opt(&e.status),
        opt(&e.timestamp_in),
        opt(&e.timestamp_out),
        e.break_duration.map(|m| m.to_string()).unwrap_or_default(),
        e.is_manual.to_string(),
        e.recorded_by.clone(),
    ]
}
