use anyhow::Result;

use crate::model::artifact::{Artifact, ArtifactKind};
use crate::model::contribution::{DailyCounts, MonthlyCounts};
use crate::service::blocks::blocks_for_count;
use crate::service::dto::{
    daily_payload, monthly_payload, zero_months, ArtifactMetadata, RunSettings, RunSummary,
    SummaryEntry, YearRange,
};
use crate::usecase::shelf::MAX_COLORS;

/// Active color groups: 0 when colors are disabled or nothing has blocks,
/// otherwise the highest level reached, capped by the requested colors.
pub fn color_groups(colors: u32, monthly: &MonthlyCounts) -> u32 {
    if colors == 0 {
        return 0;
    }
    let max_level = monthly.values().map(|&c| blocks_for_count(c)).max().unwrap_or(0);
    max_level.min(colors).min(MAX_COLORS)
}

pub struct RunDescription<'a> {
    pub username: &'a str,
    pub start_year: i32,
    pub end_year: i32,
    pub months_per_row: usize,
    pub calendar_days_per_row: usize,
    pub colors: u32,
}

/// Collects per-artifact metadata during a run and builds the run summary.
pub struct MetadataRecorder<'a> {
    settings: RunSettings,
    monthly: &'a MonthlyCounts,
    daily: &'a DailyCounts,
    records: Vec<SummaryEntry>,
}

impl<'a> MetadataRecorder<'a> {
    pub fn new(run: RunDescription<'_>, monthly: &'a MonthlyCounts, daily: &'a DailyCounts) -> Self {
        let settings = RunSettings {
            username: run.username.to_string(),
            year_range: YearRange {
                start: run.start_year,
                end: run.end_year,
            },
            months_per_row: run.months_per_row,
            calendar_days_per_row: run.calendar_days_per_row,
            colors: run.colors,
            color_groups: color_groups(run.colors, monthly),
        };
        Self {
            settings,
            monthly,
            daily,
            records: Vec::new(),
        }
    }

    pub fn settings(&self) -> &RunSettings {
        &self.settings
    }

    pub fn describe(
        &self,
        artifact: &Artifact,
        scad_path: &str,
        stl_path: Option<&str>,
    ) -> ArtifactMetadata {
        let (monthly_contributions, daily_contributions, zero) = match artifact.kind {
            ArtifactKind::Monthly | ArtifactKind::MonthlyColor => {
                let scoped: MonthlyCounts = self
                    .monthly
                    .iter()
                    .filter(|&(&(y, _), _)| artifact.year.map_or(true, |year| year == y))
                    .map(|(&k, &v)| (k, v))
                    .collect();
                (
                    Some(monthly_payload(&scoped, None, None)),
                    None,
                    Some(zero_months(&scoped)),
                )
            }
            ArtifactKind::Calendar => (
                Some(monthly_payload(self.monthly, artifact.year, artifact.month)),
                Some(daily_payload(self.daily, artifact.year, artifact.month)),
                None,
            ),
        };

        ArtifactMetadata {
            settings: self.settings.clone(),
            scad: scad_path.to_string(),
            kind: artifact.kind,
            stl: stl_path.map(str::to_string),
            stl_generated: stl_path.is_some(),
            year: artifact.year,
            month: artifact.month,
            color_index: artifact.color_index,
            levels: artifact.color_index.map(|_| artifact.levels.clone()),
            monthly_contributions,
            daily_contributions,
            zero_months: zero,
        }
    }

    pub fn record(&mut self, artifact: ArtifactMetadata, metadata_path: &str) {
        self.records.push(SummaryEntry {
            artifact,
            metadata: metadata_path.to_string(),
        });
    }

    pub fn summary(&self) -> RunSummary {
        RunSummary {
            settings: self.settings.clone(),
            outputs: self.records.clone(),
        }
    }
}

/// Pretty JSON with a trailing newline.
pub fn to_json<T: serde::Serialize>(value: &T) -> Result<String> {
    let mut text = serde_json::to_string_pretty(value)?;
    text.push('\n');
    Ok(text)
}
