use crate::cli::commands::ask_confirmation;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries::delete_entry;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { entry, yes } = cmd {
        if !*yes
            && !ask_confirmation(&format!(
                "Delete time entry #{}? This action is irreversible.",
                entry
            ))
        {
            info("Operation cancelled.");
            return Ok(());
        }

        let pool = DbPool::new(&cfg.database)?;

        delete_entry(&pool.conn, *entry)?;
        ttlog(
            &pool.conn,
            "del",
            &entry.to_string(),
            "Time entry deleted",
        )?;

        success(format!("Time entry #{} has been deleted.", entry));
    }

    Ok(())
}
