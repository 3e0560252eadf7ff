use crate::cli::parser::Commands;
use crate::config::{Config, migrate};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success, warning};
use std::fs;
use std::process::Command;

pub fn handle(cmd: &Commands) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
        migrate: do_migrate,
        edit_config,
        editor,
    } = cmd
    {
        if *print_config {
            let path = Config::config_file();
            let content = fs::read_to_string(&path).map_err(|_| AppError::ConfigLoad)?;
            println!("📄 Current configuration:");
            println!("{}", content);
        }

        if *check {
            let missing = migrate::missing_fields()?;
            if missing.is_empty() {
                success("Configuration file is complete.");
            } else {
                for field in &missing {
                    warning(format!("Missing field: {}", field));
                }
                info("Run `timetrack config --migrate` to add defaults.");
            }
        }

        if *do_migrate {
            let added = migrate::run_config_migration()?;
            if added.is_empty() {
                info("Nothing to migrate.");
            } else {
                success(format!("Added fields: {}", added.join(", ")));
            }
        }

        if *edit_config {
            let path = Config::config_file();

            let ed = editor
                .clone()
                .or_else(|| std::env::var("EDITOR").ok())
                .or_else(|| std::env::var("VISUAL").ok())
                .unwrap_or_else(|| {
                    if cfg!(target_os = "windows") {
                        "notepad".to_string()
                    } else {
                        "nano".to_string()
                    }
                });

            Command::new(ed)
                .arg(&path)
                .status()
                .map_err(|e| AppError::Config(e.to_string()))?;
        }
    }

    Ok(())
}
