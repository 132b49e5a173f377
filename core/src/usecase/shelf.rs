use log::debug;

use crate::error::{Result, ShelfError};
use crate::model::artifact::{color_stem, Artifact, ArtifactKind};
use crate::model::contribution::{DailyCounts, MonthlyCounts};
use crate::model::layout::{GeometryConfig, IndexBaseMode, LayoutSheet};
use crate::service::blocks::blocks_for_count;
use crate::service::calendar_service::generate_monthly_calendar_scads;
use crate::service::color_service::group_levels;
use crate::service::layout_service::layout_sheets;
use crate::service::scad_service::{
    annotate_zero_cells, append_lines, generate_scad_monthly, generate_scad_monthly_levels,
};

pub const MAX_COLORS: u32 = 4;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShelfOptions {
    pub months_per_row: usize,
    /// Number of color groups; 1 produces a single file.
    pub colors: u32,
    pub index_mode: IndexBaseMode,
    pub geometry: GeometryConfig,
}

impl Default for ShelfOptions {
    fn default() -> Self {
        Self {
            months_per_row: 12,
            colors: 1,
            index_mode: IndexBaseMode::Continuous,
            geometry: GeometryConfig::default(),
        }
    }
}

pub struct ShelfPlanner {
    options: ShelfOptions,
}

impl ShelfPlanner {
    pub fn new(options: ShelfOptions) -> Result<Self> {
        if options.months_per_row == 0 {
            return Err(ShelfError::config("months per row must be at least 1"));
        }
        if options.colors == 0 {
            return Err(ShelfError::config("colors must be at least 1"));
        }
        options.geometry.validate()?;
        Ok(Self { options })
    }

    pub fn options(&self) -> &ShelfOptions {
        &self.options
    }

    /// Monthly shelf artifacts for `monthly`, named from `stem`. Per-year
    /// layouts append `_{year}` before any color suffix.
    pub fn plan(&self, stem: &str, monthly: &MonthlyCounts) -> Result<Vec<Artifact>> {
        let sheets = layout_sheets(monthly, self.options.months_per_row, self.options.index_mode)?;
        let mut artifacts = Vec::new();

        for sheet in &sheets {
            let sheet_stem = match sheet.year {
                Some(year) => format!("{stem}_{year}"),
                None => stem.to_string(),
            };
            if self.options.colors == 1 {
                artifacts.push(self.single_color(sheet_stem, sheet));
            } else {
                artifacts.extend(self.split_colors(&sheet_stem, sheet)?);
            }
        }

        debug!("planned {} artifact(s) from {} sheet(s)", artifacts.len(), sheets.len());
        Ok(artifacts)
    }

    fn single_color(&self, stem: String, sheet: &LayoutSheet) -> Artifact {
        let max_level = sheet
            .cells
            .iter()
            .map(|cell| blocks_for_count(cell.count))
            .max()
            .unwrap_or(0);
        Artifact {
            stem,
            kind: ArtifactKind::Monthly,
            year: sheet.year,
            month: None,
            color_index: None,
            levels: (1..=max_level).collect(),
            scad: generate_scad_monthly(&sheet.cells, &self.options.geometry),
        }
    }

    fn split_colors(&self, stem: &str, sheet: &LayoutSheet) -> Result<Vec<Artifact>> {
        let geometry = &self.options.geometry;
        let level_texts = generate_scad_monthly_levels(&sheet.cells, geometry);
        let grouped = group_levels(&level_texts, self.options.colors)?;
        let annotations = annotate_zero_cells(&sheet.cells, geometry);

        let artifacts = grouped
            .texts
            .into_iter()
            .map(|(group, mut scad)| {
                append_lines(&mut scad, &annotations);
                Artifact {
                    stem: color_stem(stem, group),
                    kind: ArtifactKind::MonthlyColor,
                    year: sheet.year,
                    month: None,
                    color_index: Some(group),
                    levels: grouped.levels.get(&group).cloned().unwrap_or_default(),
                    scad,
                }
            })
            .collect();
        Ok(artifacts)
    }

    /// Daily calendar artifacts, one per month, stored under
    /// `{year}/{calendar_slug}/{YYYY-MM}`.
    pub fn plan_calendars(
        &self,
        start_year: i32,
        end_year: i32,
        daily: &DailyCounts,
        days_per_row: usize,
    ) -> Result<Vec<Artifact>> {
        let slug = calendar_slug(days_per_row)?;
        let calendars = generate_monthly_calendar_scads(
            start_year,
            end_year,
            daily,
            days_per_row,
            &self.options.geometry,
        )?;

        Ok(calendars
            .into_iter()
            .map(|((year, month), scad)| {
                let max_level = daily
                    .iter()
                    .filter(|&(&(y, m, _), _)| y == year && m == month)
                    .map(|(_, &count)| blocks_for_count(count))
                    .max()
                    .unwrap_or(0);
                Artifact {
                    stem: format!("{year}/{slug}/{:04}-{:02}", year, month),
                    kind: ArtifactKind::Calendar,
                    year: Some(year),
                    month: Some(month),
                    color_index: None,
                    levels: (1..=max_level).collect(),
                    scad,
                }
            })
            .collect())
    }
}

/// Directory name for daily calendars: days per row by rows needed for a
/// 31-day month.
pub fn calendar_slug(days_per_row: usize) -> Result<String> {
    if days_per_row == 0 {
        return Err(ShelfError::config("calendar days per row must be at least 1"));
    }
    let rows = 31usize.div_ceil(days_per_row);
    Ok(format!("monthly-{days_per_row}x{rows}"))
}
