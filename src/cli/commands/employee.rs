use crate::cli::commands::ask_confirmation;
use crate::cli::parser::{Commands, EmployeeCmd};
use crate::config::Config;
use crate::core::roster::EmployeeLogic;
use crate::db::pool::DbPool;
use crate::db::queries::{load_employees, load_shops};
use crate::errors::{AppError, AppResult};
use crate::models::directory::Directory;
use crate::models::role::Role;
use crate::ui::messages::{info, success};
use crate::utils::colors::{RESET, color_for_status};
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Employee { action } = cmd else {
        return Ok(());
    };

    let mut pool = DbPool::new(&cfg.database)?;

    match action {
        EmployeeCmd::Add {
            name,
            role,
            shop,
            full_access,
        } => {
            let role = Role::from_code(role)
                .ok_or_else(|| AppError::InvalidRole(role.to_string()))?;

            let emp = EmployeeLogic::add(&mut pool, name, role, *shop, *full_access)?;

            success(format!(
                "Employee {} added with id {}.",
                emp.name, emp.id
            ));
        }

        EmployeeCmd::List => {
            let employees = load_employees(&mut pool)?;
            let shops = load_shops(&mut pool)?;
            let names = Directory::new(&employees, &shops);

            let mut table = Table::new(vec!["ID", "Name", "Role", "Shop", "Status"]);

            for emp in &employees {
                let badge = if emp.full_access { " [FULL ACCESS]" } else { "" };
                table.add_row(vec![
                    emp.id.to_string(),
                    format!("{}{}", emp.name, badge),
                    emp.role.to_db_str().to_string(),
                    names.shop_name(emp.shop_id),
                    format!(
                        "{}{}{}",
                        color_for_status(emp.status),
                        emp.status.to_db_str(),
                        RESET
                    ),
                ]);
            }

            println!("{}", table.render());
        }

        EmployeeCmd::Del { id, yes } => {
            if !*yes
                && !ask_confirmation(&format!(
                    "Delete employee #{}? This action is irreversible.",
                    id
                ))
            {
                info("Operation cancelled.");
                return Ok(());
            }

            let emp = EmployeeLogic::remove(&mut pool, *id)?;
            success(format!("Employee {} deleted.", emp.name));
        }
    }

    Ok(())
}
