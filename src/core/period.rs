//! Report scopes and period filtering.

use crate::errors::{AppError, AppResult};
use crate::models::entry::TimeEntry;
use chrono::{Datelike, Duration, NaiveDate};
use clap::ValueEnum;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ReportKind {
    Daily,
    Weekly,
    Monthly,
}

impl ReportKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportKind::Daily => "daily",
            ReportKind::Weekly => "weekly",
            ReportKind::Monthly => "monthly",
        }
    }
}

/// Which entries a report covers: a period around a reference date plus
/// an optional shop restriction (0 = all shops).
#[derive(Debug, Clone, Copy)]
pub struct ReportScope {
    pub kind: ReportKind,
    pub reference: NaiveDate,
    pub shop_id: i64,
}

impl ReportScope {
    /// Build a scope; a missing reference date is the caller's error
    /// ("select a date"), not an empty report.
    pub fn new(kind: ReportKind, reference: Option<NaiveDate>, shop_id: i64) -> AppResult<Self> {
        let reference = reference.ok_or(AppError::MissingScope)?;
        Ok(Self {
            kind,
            reference,
            shop_id,
        })
    }

    pub fn matches(&self, entry: &TimeEntry) -> bool {
        if self.shop_id != 0 && entry.shop_id != self.shop_id {
            return false;
        }

        match self.kind {
            ReportKind::Daily => entry.date == self.reference,
            ReportKind::Weekly => {
                let (start, end) = week_bounds(self.reference);
                entry.date >= start && entry.date <= end
            }
            ReportKind::Monthly => {
                entry.date.month() == self.reference.month()
                    && entry.date.year() == self.reference.year()
            }
        }
    }
}

/// Monday–Sunday week containing `d`. A Sunday reference is the *last*
/// day of its week, so its Monday lies six days earlier.
pub fn week_bounds(d: NaiveDate) -> (NaiveDate, NaiveDate) {
    let monday = d - Duration::days(d.weekday().num_days_from_monday() as i64);
    (monday, monday + Duration::days(6))
}

/// Order-preserving selection of the entries a scope covers.
pub fn filter_entries<'a>(entries: &'a [TimeEntry], scope: &ReportScope) -> Vec<&'a TimeEntry> {
    entries.iter().filter(|e| scope.matches(e)).collect()
}
