use std::collections::BTreeMap;

use crate::error::{Result, ShelfError};
use crate::model::contribution::{DailyCounts, MonthlyKey};
use crate::model::layout::{GeometryConfig, PlacedCell};
use crate::service::layout_service::LayoutAssigner;
use crate::service::scad_service::generate_scad_monthly;
use crate::time::days_in_month;

/// Every day of the month, zero-filled and laid out from index 0.
pub fn layout_month_days(
    year: i32,
    month: u32,
    daily: &DailyCounts,
    days_per_row: usize,
) -> Result<Vec<PlacedCell>> {
    let assigner = LayoutAssigner::new(days_per_row)?;
    let days = days_in_month(year, month)
        .ok_or_else(|| ShelfError::config(format!("{year}-{month} is not a calendar month")))?;

    let cells = (1..=days).map(|day| {
        let count = daily.get(&(year, month, day)).copied().unwrap_or(0);
        (format!("{:04}-{:02}-{:02}", year, month, day), count)
    });
    Ok(assigner.assign(cells, 0))
}

pub fn generate_month_calendar_scad(
    year: i32,
    month: u32,
    daily: &DailyCounts,
    days_per_row: usize,
    config: &GeometryConfig,
) -> Result<String> {
    let cells = layout_month_days(year, month, daily, days_per_row)?;
    let mut text = format!("// {:04}-{:02} daily contributions\n", year, month);
    text.push_str(&generate_scad_monthly(&cells, config));
    Ok(text)
}

/// One calendar per month in `[start_year, end_year]`.
pub fn generate_monthly_calendar_scads(
    start_year: i32,
    end_year: i32,
    daily: &DailyCounts,
    days_per_row: usize,
    config: &GeometryConfig,
) -> Result<BTreeMap<MonthlyKey, String>> {
    if start_year > end_year {
        return Err(ShelfError::InvalidRange {
            start: start_year,
            end: end_year,
        });
    }

    let mut calendars = BTreeMap::new();
    for year in start_year..=end_year {
        for month in 1..=12 {
            let text = generate_month_calendar_scad(year, month, daily, days_per_row, config)?;
            calendars.insert((year, month), text);
        }
    }
    Ok(calendars)
}
