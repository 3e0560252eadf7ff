use crate::cli::commands::warn_skipped;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::dashboard::build_dashboard;
use crate::db::pool::DbPool;
use crate::db::queries::{load_employees, load_entries, load_shops};
use crate::errors::AppResult;
use crate::models::directory::Directory;
use crate::utils::colors::{BLUE, CYAN, GREEN, RED, RESET, color_for_hours};
use crate::utils::date::today;
use crate::utils::hours2str;
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if !matches!(cmd, Commands::Dashboard) {
        return Ok(());
    }

    let mut pool = DbPool::new(&cfg.database)?;

    let snapshot = load_entries(&mut pool)?;
    let employees = load_employees(&mut pool)?;
    let shops = load_shops(&mut pool)?;
    let names = Directory::new(&employees, &shops);

    warn_skipped(&snapshot.skipped);

    let dashboard = build_dashboard(&snapshot.entries, today(), &names, cfg.recent_entries);

    println!(
        "\n🏪 {} — Shop Performance Overview ({} → {})\n",
        cfg.company_name, dashboard.week_start, dashboard.week_end
    );

    let s = &dashboard.summary;
    println!(
        "{}Total Work (hrs):{} {}{}{}",
        CYAN,
        RESET,
        color_for_hours(s.work_hours),
        hours2str(s.work_hours),
        RESET
    );
    println!("{}Total Break (hrs):{} {}", BLUE, RESET, hours2str(s.break_hours));
    println!(
        "{}Total Weekend (hrs):{} {}",
        RED,
        RESET,
        hours2str(s.weekend_hours)
    );
    println!("{}Employees Worked:{} {}\n", GREEN, RESET, s.distinct_employees);

    if dashboard.recent.is_empty() {
        println!("No time entries this week.");
        return Ok(());
    }

    println!("Recent Time Entries:\n");

    let mut table = Table::new(vec!["Employee", "Shop", "Time", "Action"]);
    for entry in &dashboard.recent {
        table.add_row(vec![
            entry.employee.clone(),
            entry.shop.clone(),
            entry.time.clone(),
            entry.action.clone(),
        ]);
    }

    println!("{}", table.render());

    Ok(())
}
