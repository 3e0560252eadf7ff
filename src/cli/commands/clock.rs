use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::clock::ClockLogic;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::action::ClockAction;
use crate::ui::messages::success;
use crate::utils::time::local_hhmm;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Clock { employee, action } = cmd {
        let action = ClockAction::from_code(action).ok_or_else(|| {
            AppError::InvalidAction(format!(
                "'{}'. Use one of: in, break-start, break-end, out",
                action
            ))
        })?;

        let mut pool = DbPool::new(&cfg.database)?;

        let entry = ClockLogic::apply(&mut pool, *employee, action, "cli")?;

        success(format!(
            "Employee {} clocked {} at {} (entry {}).",
            entry.employee_id,
            action.to_db_str(),
            local_hhmm(entry.sort_timestamp()),
            entry.id
        ));
    }

    Ok(())
}
