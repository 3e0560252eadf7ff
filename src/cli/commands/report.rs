use crate::cli::commands::warn_skipped;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::period::{ReportScope, week_bounds};
use crate::core::report::{Report, build_report};
use crate::db::pool::DbPool;
use crate::db::queries::{load_employees, load_entries, load_shops};
use crate::errors::{AppError, AppResult};
use crate::models::directory::Directory;
use crate::utils::colors::{BLUE, CYAN, GREEN, RED, RESET, color_for_hours};
use crate::utils::date;
use crate::utils::hours2str;
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Report { kind, date: date_str, shop } = cmd {
        let reference = match date_str {
            Some(s) => {
                Some(date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.to_string()))?)
            }
            None => None,
        };

        let scope = ReportScope::new(*kind, reference, shop.unwrap_or(cfg.default_shop))?;

        let mut pool = DbPool::new(&cfg.database)?;

        let snapshot = load_entries(&mut pool)?;
        let employees = load_employees(&mut pool)?;
        let shops = load_shops(&mut pool)?;
        let names = Directory::new(&employees, &shops);

        warn_skipped(&snapshot.skipped);

        let report = build_report(&snapshot.entries, &scope, &names);

        print_report(cfg, &scope, &names, &report);
    }

    Ok(())
}

fn print_report(cfg: &Config, scope: &ReportScope, names: &Directory, report: &Report) {
    let period = match scope.kind {
        crate::core::period::ReportKind::Daily => scope.reference.to_string(),
        crate::core::period::ReportKind::Weekly => {
            let (start, end) = week_bounds(scope.reference);
            format!("{} → {}", start, end)
        }
        crate::core::period::ReportKind::Monthly => scope.reference.format("%B %Y").to_string(),
    };

    println!(
        "\n📊 {} — {} report for {} — Shop: {}\n",
        cfg.company_name,
        scope.kind.as_str(),
        period,
        names.shop_name(scope.shop_id)
    );

    if report.rows.is_empty() {
        println!("No manual entries in this period.\n");
    } else {
        let mut table = Table::new(vec![
            "Employee", "Shop", "Date", "Clock In", "Clock Out", "Break (hrs)", "Work (hrs)",
            "Weekend (hrs)",
        ]);

        for row in &report.rows {
            table.add_row(vec![
                row.employee.clone(),
                row.shop.clone(),
                row.date.to_string(),
                row.clock_in.clone(),
                row.clock_out.clone(),
                hours2str(row.metrics.break_hours),
                hours2str(row.metrics.work_hours),
                hours2str(row.metrics.weekend_hours),
            ]);
        }

        println!("{}", table.render());
    }

    let s = &report.summary;
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
    println!(
        "{}Employees Reported:{} {}\n",
        GREEN, RESET, s.distinct_employees
    );
}
