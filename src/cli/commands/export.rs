use crate::cli::commands::warn_skipped;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::period::{ReportScope, filter_entries};
use crate::core::report::build_report;
use crate::db::pool::DbPool;
use crate::db::queries::{load_employees, load_entries, load_shops};
use crate::errors::{AppError, AppResult};
use crate::export::ExportLogic;
use crate::models::directory::Directory;
use crate::models::entry::TimeEntry;
use crate::utils::date;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        kind,
        date: date_str,
        shop,
        entries: raw_entries,
        force,
    } = cmd
    {
        let reference = match date_str {
            Some(s) => {
                Some(date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.to_string()))?)
            }
            None => None,
        };

        let mut pool = DbPool::new(&cfg.database)?;

        let snapshot = load_entries(&mut pool)?;
        warn_skipped(&snapshot.skipped);

        if *raw_entries {
            // Raw dump: the scope is optional; with no date, everything goes.
            let selected: Vec<TimeEntry> = match reference {
                Some(_) => {
                    let scope =
                        ReportScope::new(*kind, reference, shop.unwrap_or(cfg.default_shop))?;
                    filter_entries(&snapshot.entries, &scope)
                        .into_iter()
                        .cloned()
                        .collect()
                }
                None => snapshot.entries,
            };

            let title = format!("{} — Time entries", cfg.company_name);
            return ExportLogic::export_entries(
                &selected,
                format.clone(),
                file,
                &title,
                *force,
            );
        }

        let scope = ReportScope::new(*kind, reference, shop.unwrap_or(cfg.default_shop))?;

        let employees = load_employees(&mut pool)?;
        let shops = load_shops(&mut pool)?;
        let names = Directory::new(&employees, &shops);

        let report = build_report(&snapshot.entries, &scope, &names);

        let title = format!(
            "{} — {} report for {}",
            cfg.company_name,
            scope.kind.as_str(),
            scope.reference
        );

        ExportLogic::export_report(&report, format.clone(), file, &title, *force)?;
    }

    Ok(())
}
