use crate::cli::commands::ask_confirmation;
use crate::cli::parser::{Commands, ShopCmd};
use crate::config::Config;
use crate::core::roster::ShopLogic;
use crate::db::pool::DbPool;
use crate::db::queries::{load_employees, load_shops};
use crate::errors::AppResult;
use crate::models::directory::Directory;
use crate::ui::messages::{info, success};
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Shop { action } = cmd else {
        return Ok(());
    };

    let mut pool = DbPool::new(&cfg.database)?;

    match action {
        ShopCmd::Add { name, manager } => {
            let shop = ShopLogic::add(&mut pool, name, *manager)?;
            success(format!("Shop {} added with id {}.", shop.name, shop.id));
        }

        ShopCmd::List => {
            let employees = load_employees(&mut pool)?;
            let shops = load_shops(&mut pool)?;
            let names = Directory::new(&employees, &shops);

            let mut table = Table::new(vec!["ID", "Name", "Manager"]);

            for shop in &shops {
                let manager = if shop.manager_id == 0 {
                    "Unassigned".to_string()
                } else {
                    names.employee_name(shop.manager_id)
                };

                table.add_row(vec![shop.id.to_string(), shop.name.clone(), manager]);
            }

            println!("{}", table.render());
        }

        ShopCmd::Del { id, yes } => {
            if !*yes
                && !ask_confirmation(&format!(
                    "Delete shop #{}? Its employees will become unassigned.",
                    id
                ))
            {
                info("Operation cancelled.");
                return Ok(());
            }

            let (shop, unassigned) = ShopLogic::remove(&mut pool, *id)?;
            success(format!(
                "Shop {} deleted ({} employees unassigned).",
                shop.name, unassigned
            ));
        }
    }

    Ok(())
}
