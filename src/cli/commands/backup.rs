use crate::cli::commands::ask_confirmation;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::backup::BackupLogic;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use std::path::Path;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Backup { file, compress } = cmd {
        if Path::new(file).exists()
            && !ask_confirmation(&format!("The file '{}' already exists. Overwrite?", file))
        {
            info("Backup cancelled.");
            return Ok(());
        }

        let final_path = BackupLogic::backup(cfg, file, *compress)?;

        success(format!("Backup created: {}", final_path.display()));
    }

    Ok(())
}
