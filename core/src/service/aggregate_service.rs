use log::debug;

use crate::error::Result;
use crate::model::contribution::{ContributionRecord, DailyCounts, MonthlyCounts};
use crate::time::{current_year, determine_year_range, parse_record_date};
use chrono::Datelike;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ContributionMaps {
    pub start_year: i32,
    pub end_year: i32,
    pub monthly: MonthlyCounts,
    pub daily: DailyCounts,
}

/// Aggregate records into monthly and daily counters. The monthly map holds
/// exactly the months of the resolved range, zero when nothing was recorded;
/// days stay sparse and are not limited to the range.
pub fn build_contribution_maps(
    records: &[ContributionRecord],
    start_year: Option<i32>,
    end_year: Option<i32>,
) -> Result<ContributionMaps> {
    build_contribution_maps_with(records, start_year, end_year, current_year())
}

pub fn build_contribution_maps_with(
    records: &[ContributionRecord],
    start_year: Option<i32>,
    end_year: Option<i32>,
    current_year: i32,
) -> Result<ContributionMaps> {
    let (start_year, end_year) = determine_year_range(start_year, end_year, current_year)?;

    let mut raw_monthly = MonthlyCounts::new();
    let mut daily = DailyCounts::new();
    let mut skipped = 0usize;

    for record in records {
        let Some(date) = record.created_at.as_deref().and_then(parse_record_date) else {
            skipped += 1;
            continue;
        };
        *raw_monthly.entry((date.year(), date.month())).or_default() += 1;
        *daily.entry((date.year(), date.month(), date.day())).or_default() += 1;
    }

    if skipped > 0 {
        debug!("skipped {} record(s) without a parsable created_at", skipped);
    }

    let monthly: MonthlyCounts = (start_year..=end_year)
        .flat_map(|year| (1..=12).map(move |month| (year, month)))
        .map(|key| (key, raw_monthly.get(&key).copied().unwrap_or(0)))
        .collect();

    Ok(ContributionMaps {
        start_year,
        end_year,
        monthly,
        daily,
    })
}
