//! Report builder: period filter → per-row metrics → summary totals.

use crate::core::aggregate::{Totals, aggregate};
use crate::core::metrics::{TimeMetrics, entry_metrics};
use crate::core::period::{ReportScope, filter_entries};
use crate::models::directory::Directory;
use crate::models::entry::{EntryKind, TimeEntry};
use crate::utils::time::local_hhmm;
use chrono::NaiveDate;

#[derive(Debug, Clone)]
pub struct ReportRow {
    pub employee: String,
    pub shop: String,
    pub date: NaiveDate,
    pub clock_in: String,
    pub clock_out: String,
    pub metrics: TimeMetrics,
}

#[derive(Debug, Default)]
pub struct Report {
    pub rows: Vec<ReportRow>,
    pub summary: Totals,
}

/// Build a report over a snapshot of entries.
///
/// Only manual entries produce rows, and the summary aggregates that same
/// manual-only set. The dashboard counts all entry kinds instead, so its
/// "Employees Worked" can exceed the report's "Employees Reported"; the
/// two numbers are intentionally not reconciled.
///
/// An empty in-scope set is not an error: the report simply carries zero
/// rows and zero-valued totals.
pub fn build_report(entries: &[TimeEntry], scope: &ReportScope, names: &Directory) -> Report {
    let in_scope = filter_entries(entries, scope);

    let manual: Vec<&TimeEntry> = in_scope.into_iter().filter(|e| e.is_manual()).collect();

    let rows = manual
        .iter()
        .map(|entry| {
            let (clock_in, clock_out) = match &entry.kind {
                EntryKind::Manual {
                    timestamp_in,
                    timestamp_out,
                    ..
                } => (local_hhmm(*timestamp_in), local_hhmm(*timestamp_out)),
                EntryKind::Clock { .. } => unreachable!("rows are manual entries only"),
            };

            ReportRow {
                employee: names.employee_name(entry.employee_id),
                shop: names.shop_name(entry.shop_id),
                date: entry.date,
                clock_in,
                clock_out,
                metrics: entry_metrics(entry),
            }
        })
        .collect();

    Report {
        rows,
        summary: aggregate(manual.iter().copied()),
    }
}
