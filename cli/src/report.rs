use chrono::NaiveDate;
use gitshelves_core::{blocks_for_count, MonthlyCounts};
use tabled::settings::object::Rows;
use tabled::settings::{Color, Modify, Style};
use tabled::{Table, Tabled};

#[derive(Tabled)]
struct MonthRow {
    #[tabled(rename = "Month")]
    month: String,
    #[tabled(rename = "Contributions")]
    count: u64,
    #[tabled(rename = "Cubes")]
    cubes: u32,
}

fn month_title(year: i32, month: u32) -> String {
    NaiveDate::from_ymd_opt(year, month, 1)
        .map(|d| d.format("%b %Y").to_string())
        .unwrap_or_else(|| format!("{year}-{month:02}"))
}

/// Monthly counts and the cubes they turn into, oldest first.
pub fn monthly_table(monthly: &MonthlyCounts) -> String {
    let rows: Vec<MonthRow> = monthly
        .iter()
        .map(|(&(year, month), &count)| MonthRow {
            month: month_title(year, month),
            count,
            cubes: blocks_for_count(count),
        })
        .collect();

    let mut table = Table::new(rows);
    table
        .with(Style::modern())
        .with(Modify::new(Rows::first()).with(Color::FG_CYAN));
    table.to_string()
}

pub fn totals_line(monthly: &MonthlyCounts) -> String {
    let contributions: u64 = monthly.values().sum();
    let cubes: u64 = monthly.values().map(|&c| u64::from(blocks_for_count(c))).sum();
    format!("Total: {contributions} contributions, {cubes} cubes")
}
