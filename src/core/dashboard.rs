//! At-a-glance shop performance: the report pipeline specialized to the
//! current week across all shops, all entry kinds included.

use crate::core::aggregate::{Totals, aggregate};
use crate::core::period::{ReportKind, ReportScope, filter_entries, week_bounds};
use crate::models::directory::Directory;
use crate::models::entry::{EntryKind, TimeEntry};
use crate::utils::time::local_hhmm;
use chrono::NaiveDate;

#[derive(Debug, Clone)]
pub struct RecentEntry {
    pub employee: String,
    pub shop: String,
    pub time: String,
    pub action: String,
}

#[derive(Debug)]
pub struct Dashboard {
    pub week_start: NaiveDate,
    pub week_end: NaiveDate,
    pub summary: Totals,
    pub recent: Vec<RecentEntry>,
}

/// Build the dashboard for the week containing `today`.
///
/// The recent list is sorted by effective timestamp descending — the
/// clock-action instant when present, else the manual entry's clock-in —
/// with a stable sort so same-instant entries keep their stored order.
pub fn build_dashboard(
    entries: &[TimeEntry],
    today: NaiveDate,
    names: &Directory,
    recent_limit: usize,
) -> Dashboard {
    let scope = ReportScope {
        kind: ReportKind::Weekly,
        reference: today,
        shop_id: 0,
    };
    let (week_start, week_end) = week_bounds(today);

    let in_scope = filter_entries(entries, &scope);

    let summary = aggregate(in_scope.iter().copied());

    let mut sorted = in_scope;
    sorted.sort_by(|a, b| b.sort_timestamp().cmp(&a.sort_timestamp()));

    let recent = sorted
        .into_iter()
        .take(recent_limit)
        .map(|entry| RecentEntry {
            employee: names.employee_name(entry.employee_id),
            shop: names.shop_name(entry.shop_id),
            time: local_hhmm(entry.sort_timestamp()),
            action: match &entry.kind {
                EntryKind::Clock { action, .. } => action.to_db_str().to_string(),
                EntryKind::Manual { .. } => "manual".to_string(),
            },
        })
        .collect();

    Dashboard {
        week_start,
        week_end,
        summary,
        recent,
    }
}
