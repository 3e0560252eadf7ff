use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::manual::ManualEntryLogic;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};
use crate::utils::date;
use crate::utils::time::parse_time;

/// Record a manual time entry.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        employee,
        date: date_str,
        start,
        end,
        break_minutes,
    } = cmd
    {
        //
        // 1. Parse date (mandatory)
        //
        let d = date::parse_date(date_str)
            .ok_or_else(|| AppError::InvalidDate(date_str.to_string()))?;

        //
        // 2. Parse times
        //
        let time_in =
            parse_time(start).ok_or_else(|| AppError::InvalidTime(start.to_string()))?;
        let time_out = parse_time(end).ok_or_else(|| AppError::InvalidTime(end.to_string()))?;

        // Both instants land on the entry date, so a reversed pair is
        // recorded as-is and produces negative hours downstream.
        if time_out <= time_in {
            warning(format!(
                "Clock-out {} is not after clock-in {}; the entry will carry negative hours.",
                end, start
            ));
        }

        //
        // 3. Execute logic
        //
        let mut pool = DbPool::new(&cfg.database)?;

        let entry = ManualEntryLogic::apply(
            &mut pool,
            *employee,
            d,
            time_in,
            time_out,
            break_minutes.unwrap_or(0),
            "cli",
        )?;

        success(format!(
            "Manual entry {} recorded for employee {} on {} ({} → {}).",
            entry.id, entry.employee_id, d, start, end
        ));
    }

    Ok(())
}
