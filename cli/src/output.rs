use std::path::{Path, PathBuf};

use anyhow::{anyhow, Result};
use gitshelves_core::usecase::metadata::to_json;
use gitshelves_core::{Artifact, ArtifactRepository, FileArtifactRepository, MetadataRecorder};

use crate::render::scad_to_stl;

/// Directory and extension-less file name taken from a `--output` or
/// `--stl` argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputTarget {
    pub dir: PathBuf,
    pub stem: String,
}

impl OutputTarget {
    pub fn parse(path: &Path) -> Result<Self> {
        let stem = path
            .file_stem()
            .and_then(|s| s.to_str())
            .filter(|s| !s.is_empty())
            .ok_or_else(|| anyhow!("output path {} has no file name", path.display()))?;
        Ok(Self {
            dir: path.parent().map(Path::to_path_buf).unwrap_or_default(),
            stem: stem.to_string(),
        })
    }
}

/// STL path for an artifact named from `scad`, renamed onto `stl`:
/// `shelf_color2` with targets `shelf` and `print` → `print_color2.stl`.
pub fn stl_path_for(artifact_stem: &str, scad: &OutputTarget, stl: &OutputTarget) -> PathBuf {
    stl.dir.join(format!("{}.stl", stl_stem_for(artifact_stem, scad, stl)))
}

fn stl_stem_for(artifact_stem: &str, scad: &OutputTarget, stl: &OutputTarget) -> String {
    let suffix = artifact_stem.strip_prefix(scad.stem.as_str()).unwrap_or(artifact_stem);
    format!("{}{}", stl.stem, suffix)
}

/// Deletes `_colorN` outputs with `N > keep` for every sheet stem, beside
/// the `.scad` files and, with `--stl`, beside the STLs under their renamed
/// stem.
pub fn remove_stale_color_outputs<'a, I>(
    sheet_stems: I,
    keep: u32,
    scad: &OutputTarget,
    stl: Option<&OutputTarget>,
) -> Result<Vec<PathBuf>>
where
    I: IntoIterator<Item = &'a str>,
{
    let scad_repo = FileArtifactRepository::new(&scad.dir)?;
    let stl_repo = stl.map(|t| FileArtifactRepository::new(&t.dir)).transpose()?;

    let mut removed = Vec::new();
    for stem in sheet_stems {
        removed.extend(scad_repo.remove_stale_color_files(stem, keep)?);
        if let (Some(repo), Some(target)) = (&stl_repo, stl) {
            let stl_stem = stl_stem_for(stem, scad, target);
            removed.extend(repo.remove_stale_color_files(&stl_stem, keep)?);
        }
    }
    Ok(removed)
}

pub struct ArtifactWriter<'r, R: ArtifactRepository> {
    repo: &'r R,
}

impl<'r, R: ArtifactRepository> ArtifactWriter<'r, R> {
    pub fn new(repo: &'r R) -> Self {
        Self { repo }
    }

    /// Writes the `.scad`, optionally compiles it, then writes or clears the
    /// `.json` sidecar depending on whether metadata is being recorded.
    pub fn write(
        &self,
        artifact: &Artifact,
        stl_path: Option<&Path>,
        recorder: Option<&mut MetadataRecorder<'_>>,
    ) -> Result<PathBuf> {
        let scad_path = self.repo.write(&artifact.file_name(), &artifact.scad)?;
        println!("Wrote {}", scad_path.display());

        if let Some(stl) = stl_path {
            scad_to_stl(&scad_path, stl)?;
            println!("Wrote {}", stl.display());
        }

        let sidecar = format!("{}.json", artifact.stem);
        match recorder {
            Some(recorder) => {
                let scad_str = scad_path.display().to_string();
                let stl_str = stl_path.map(|p| p.display().to_string());
                let meta = recorder.describe(artifact, &scad_str, stl_str.as_deref());
                let json_path = self.repo.write(&sidecar, &to_json(&meta)?)?;
                println!("Wrote {}", json_path.display());
                recorder.record(meta, &json_path.display().to_string());
            }
            None => {
                self.repo.remove(&sidecar)?;
            }
        }
        Ok(scad_path)
    }
}
