use chrono::{Datelike, NaiveDate, Utc};

use crate::error::{Result, ShelfError};

pub fn current_year() -> i32 {
    Utc::now().year()
}

/// Inclusive start and end years. A missing end falls back to
/// `current_year`, a missing start to the end year.
pub fn determine_year_range(
    start_year: Option<i32>,
    end_year: Option<i32>,
    current_year: i32,
) -> Result<(i32, i32)> {
    let end = end_year.unwrap_or(current_year);
    let start = start_year.unwrap_or(end);
    if start > end {
        return Err(ShelfError::InvalidRange { start, end });
    }
    Ok((start, end))
}

/// Date portion of an ISO-8601 timestamp such as `2021-02-01T12:00:00Z`.
pub fn parse_record_date(input: &str) -> Option<NaiveDate> {
    let date_part = input.get(..10)?;
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
}

pub fn days_in_month(year: i32, month: u32) -> Option<u32> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?
    };
    u32::try_from(next.signed_duration_since(first).num_days()).ok()
}

pub fn month_name(month: u32) -> Option<String> {
    NaiveDate::from_ymd_opt(2000, month, 1).map(|d| d.format("%B").to_string())
}
