pub mod error;
pub mod input;
pub mod model;
pub mod repository;
pub mod service;
pub mod time;
pub mod usecase;

pub use error::{Result, ShelfError};
pub use input::{resolve_token, resolve_token_from_env, TOKEN_FALLBACK_ORDER};
pub use model::artifact::{color_stem, Artifact, ArtifactKind};
pub use model::contribution::{
    ContributionRecord, DailyCounts, DailyKey, MonthlyCounts, MonthlyKey, SearchQuery,
};
pub use model::layout::{GeometryConfig, GridCoordinate, IndexBaseMode, LayoutSheet, PlacedCell};
pub use repository::{ArtifactRepository, ContributionCache, ContributionSource, FileArtifactRepository};
pub use service::aggregate_service::{build_contribution_maps, build_contribution_maps_with, ContributionMaps};
pub use service::blocks::{blocks_for_contributions, blocks_for_count};
pub use service::color_service::{group_levels, GroupedLevels};
pub use service::layout_service::{coordinate_for, layout_sheets, LayoutAssigner};
pub use service::scad_service::{
    annotate_zero_cells, emit_cell_geometry, emit_stack, generate_scad_monthly,
    generate_scad_monthly_levels,
};
pub use time::determine_year_range;
pub use usecase::metadata::{MetadataRecorder, RunDescription};
pub use usecase::readme::render_year_readme;
pub use usecase::shelf::{calendar_slug, ShelfOptions, ShelfPlanner, MAX_COLORS};
