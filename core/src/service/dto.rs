use serde::{Deserialize, Serialize};

use crate::model::artifact::ArtifactKind;
use crate::model::contribution::{DailyCounts, MonthlyCounts};
use crate::service::blocks::blocks_for_count;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct MonthlyEntry {
    pub year: i32,
    pub month: u32,
    pub count: u64,
    pub blocks: u32,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct DailyEntry {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub count: u64,
    pub blocks: u32,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ZeroMonth {
    pub year: i32,
    pub month: u32,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct YearRange {
    pub start: i32,
    pub end: i32,
}

/// Fields shared by every sidecar and the run summary.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RunSettings {
    pub username: String,
    pub year_range: YearRange,
    pub months_per_row: usize,
    pub calendar_days_per_row: usize,
    pub colors: u32,
    pub color_groups: u32,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ArtifactMetadata {
    #[serde(flatten)]
    pub settings: RunSettings,
    pub scad: String,
    pub kind: ArtifactKind,
    pub stl: Option<String>,
    pub stl_generated: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub month: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color_index: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub levels: Option<Vec<u32>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monthly_contributions: Option<Vec<MonthlyEntry>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub daily_contributions: Option<Vec<DailyEntry>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zero_months: Option<Vec<ZeroMonth>>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SummaryEntry {
    #[serde(flatten)]
    pub artifact: ArtifactMetadata,
    pub metadata: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RunSummary {
    #[serde(flatten)]
    pub settings: RunSettings,
    pub outputs: Vec<SummaryEntry>,
}

/// Monthly counts, optionally restricted to one year and/or month.
pub fn monthly_payload(
    counts: &MonthlyCounts,
    year: Option<i32>,
    month: Option<u32>,
) -> Vec<MonthlyEntry> {
    counts
        .iter()
        .filter(|&(&(y, m), _)| year.map_or(true, |v| v == y) && month.map_or(true, |v| v == m))
        .map(|(&(year, month), &count)| MonthlyEntry {
            year,
            month,
            count,
            blocks: blocks_for_count(count),
        })
        .collect()
}

pub fn daily_payload(
    counts: &DailyCounts,
    year: Option<i32>,
    month: Option<u32>,
) -> Vec<DailyEntry> {
    counts
        .iter()
        .filter(|&(&(y, m, _), _)| year.map_or(true, |v| v == y) && month.map_or(true, |v| v == m))
        .map(|(&(year, month, day), &count)| DailyEntry {
            year,
            month,
            day,
            count,
            blocks: blocks_for_count(count),
        })
        .collect()
}

pub fn zero_months(counts: &MonthlyCounts) -> Vec<ZeroMonth> {
    counts
        .iter()
        .filter(|&(_, &count)| count == 0)
        .map(|(&(year, month), _)| ZeroMonth { year, month })
        .collect()
}
