use std::path::PathBuf;

use anyhow::Result;

use crate::model::contribution::{ContributionRecord, SearchQuery};

/// Where contribution records come from (the GitHub search API in the
/// binary, fixtures in tests).
pub trait ContributionSource {
    fn search(&self, query: &SearchQuery, token: Option<&str>) -> Result<Vec<ContributionRecord>>;
}

/// Destination for generated text artifacts.
pub trait ArtifactRepository {
    /// Writes `contents` to `file_name` and returns the full path.
    fn write(&self, file_name: &str, contents: &str) -> Result<PathBuf>;
    fn path_for(&self, file_name: &str) -> PathBuf;
    /// Removes `{stem}_color{N}.*` outputs with `N > keep` left behind by an
    /// earlier run with more color groups.
    fn remove_stale_color_files(&self, stem: &str, keep: u32) -> Result<Vec<PathBuf>>;
    fn remove(&self, file_name: &str) -> Result<bool>;
}
