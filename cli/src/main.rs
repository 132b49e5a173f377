mod github;
mod output;
mod render;
mod report;

use std::collections::BTreeSet;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use gitshelves_core::time::current_year;
use gitshelves_core::usecase::metadata::to_json;
use gitshelves_core::{
    build_contribution_maps, calendar_slug, determine_year_range, render_year_readme,
    resolve_token_from_env, ArtifactRepository, ContributionCache, FileArtifactRepository,
    GeometryConfig, IndexBaseMode, MetadataRecorder, RunDescription, SearchQuery, ShelfOptions,
    ShelfPlanner, MAX_COLORS,
};
use log::{debug, info};

use crate::github::GithubSearch;
use crate::output::{remove_stale_color_outputs, stl_path_for, ArtifactWriter, OutputTarget};

#[derive(Parser)]
#[command(name = "gitshelves")]
#[command(about = "Generate 3D GitHub contribution charts", long_about = None)]
struct Cli {
    /// GitHub username
    username: String,

    /// GitHub API token (fallback order: --token value, GH_TOKEN, then GITHUB_TOKEN)
    #[arg(long)]
    token: Option<String>,

    /// First year of contributions (defaults to the end year)
    #[arg(long)]
    start_year: Option<i32>,

    /// Last year of contributions (defaults to the current year)
    #[arg(long)]
    end_year: Option<i32>,

    /// Output .scad file; color splits are written next to it as NAME_colorN.scad
    #[arg(long, default_value = "contributions.scad")]
    output: PathBuf,

    /// Number of months displayed across each row
    #[arg(long, default_value_t = 12, value_parser = clap::value_parser!(u16).range(1..))]
    months_per_row: u16,

    /// Optional output STL file (requires openscad)
    #[arg(long)]
    stl: Option<PathBuf>,

    /// Number of print colors
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..=MAX_COLORS as i64))]
    colors: u32,

    /// Restart the grid for every year and write one shelf per year
    #[arg(long)]
    per_year: bool,

    /// Directory for per-year READMEs and daily calendars
    #[arg(long, default_value = "stl")]
    readme_dir: PathBuf,

    /// Also write one daily calendar .scad per month
    #[arg(long)]
    calendars: bool,

    /// Days displayed across each row of a daily calendar
    #[arg(long, default_value_t = 12, value_parser = clap::value_parser!(u16).range(1..))]
    calendar_days_per_row: u16,

    /// Write a .json metadata sidecar next to every .scad
    #[arg(long)]
    metadata: bool,

    /// Write a run summary covering every generated file
    #[arg(long)]
    summary: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();
    run(cli)
}

fn run(cli: Cli) -> Result<()> {
    let (start_year, end_year) = determine_year_range(cli.start_year, cli.end_year, current_year())?;
    let token = resolve_token_from_env(cli.token.as_deref());
    debug!("token provided: {}", token.is_some());

    let source = GithubSearch::new();
    let mut cache = ContributionCache::new();
    let query = SearchQuery::new(&cli.username, start_year, end_year);
    let records = cache
        .fetch(&source, &query, token.as_deref())
        .with_context(|| format!("fetching contributions for {}", cli.username))?;
    info!("fetched {} record(s)", records.len());

    let maps = build_contribution_maps(&records, Some(start_year), Some(end_year))?;
    println!("{}", report::monthly_table(&maps.monthly));
    println!("{}", report::totals_line(&maps.monthly));

    let months_per_row = usize::from(cli.months_per_row);
    let days_per_row = usize::from(cli.calendar_days_per_row);
    let planner = ShelfPlanner::new(ShelfOptions {
        months_per_row,
        colors: cli.colors,
        index_mode: if cli.per_year {
            IndexBaseMode::PerYear
        } else {
            IndexBaseMode::Continuous
        },
        geometry: GeometryConfig::default(),
    })?;

    let scad_target = OutputTarget::parse(&cli.output)?;
    let stl_target = cli.stl.as_deref().map(OutputTarget::parse).transpose()?;
    let repo = FileArtifactRepository::new(&scad_target.dir)?;

    let mut recorder = MetadataRecorder::new(
        RunDescription {
            username: &cli.username,
            start_year,
            end_year,
            months_per_row,
            calendar_days_per_row: days_per_row,
            colors: cli.colors,
        },
        &maps.monthly,
        &maps.daily,
    );
    let record_metadata = cli.metadata || cli.summary.is_some();

    let artifacts = planner.plan(&scad_target.stem, &maps.monthly)?;

    // Sheet stems are the artifact stems minus any color suffix.
    let sheet_stems: BTreeSet<String> = artifacts
        .iter()
        .map(|a| match a.color_index {
            Some(index) => a
                .stem
                .strip_suffix(format!("_color{index}").as_str())
                .unwrap_or(&a.stem)
                .to_string(),
            None => a.stem.clone(),
        })
        .collect();
    let keep = if cli.colors > 1 { cli.colors } else { 0 };
    let removed = remove_stale_color_outputs(
        sheet_stems.iter().map(String::as_str),
        keep,
        &scad_target,
        stl_target.as_ref(),
    )?;
    for path in removed {
        println!("Removed {}", path.display());
    }

    let writer = ArtifactWriter::new(&repo);
    for artifact in &artifacts {
        let stl_path = stl_target
            .as_ref()
            .map(|stl| stl_path_for(&artifact.stem, &scad_target, stl));
        writer.write(
            artifact,
            stl_path.as_deref(),
            record_metadata.then_some(&mut recorder),
        )?;
    }

    let readme_repo = FileArtifactRepository::new(&cli.readme_dir)?;
    let slug = calendar_slug(days_per_row)?;
    for year in start_year..=end_year {
        let path = readme_repo.write(
            &format!("{year}/README.md"),
            &render_year_readme(year, &maps.monthly, &slug),
        )?;
        println!("Wrote {}", path.display());
    }

    if cli.calendars {
        let calendar_writer = ArtifactWriter::new(&readme_repo);
        for calendar in planner.plan_calendars(start_year, end_year, &maps.daily, days_per_row)? {
            let stl_path = stl_target
                .as_ref()
                .map(|_| readme_repo.path_for(&format!("{}.stl", calendar.stem)));
            calendar_writer.write(
                &calendar,
                stl_path.as_deref(),
                record_metadata.then_some(&mut recorder),
            )?;
        }
    }

    if let Some(summary_path) = &cli.summary {
        let target = OutputTarget::parse(summary_path)?;
        let summary_repo = FileArtifactRepository::new(&target.dir)?;
        let file_name = summary_path
            .file_name()
            .and_then(|n| n.to_str())
            .map(str::to_string)
            .unwrap_or_else(|| format!("{}.json", target.stem));
        let path = summary_repo.write(&file_name, &to_json(&recorder.summary())?)?;
        println!("Wrote {}", path.display());
    }

    Ok(())
}
