use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::debug;

use crate::repository::traits::ArtifactRepository;

const COLOR_EXTENSIONS: &[&str] = &["scad", "stl", "json"];

#[derive(Clone, Debug)]
pub struct FileArtifactRepository {
    base_dir: PathBuf,
}

impl FileArtifactRepository {
    pub fn new(base_dir: impl Into<PathBuf>) -> Result<Self> {
        let base_dir = base_dir.into();
        if !base_dir.as_os_str().is_empty() {
            fs::create_dir_all(&base_dir)
                .with_context(|| format!("creating {}", base_dir.display()))?;
        }
        Ok(FileArtifactRepository { base_dir })
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }
}

/// Color index of `file_name` when it is `{stem}_color{N}.{ext}` with a
/// known extension.
fn color_index_of(file_name: &str, stem: &str) -> Option<u32> {
    let (name, ext) = file_name.rsplit_once('.')?;
    if !COLOR_EXTENSIONS.contains(&ext) {
        return None;
    }
    let digits = name.strip_prefix(stem)?.strip_prefix("_color")?;
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

impl ArtifactRepository for FileArtifactRepository {
    fn write(&self, file_name: &str, contents: &str) -> Result<PathBuf> {
        let path = self.path_for(file_name);
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("creating {}", parent.display()))?;
            }
        }
        let file = File::create(&path).with_context(|| format!("writing {}", path.display()))?;
        let mut writer = BufWriter::new(file);
        writer.write_all(contents.as_bytes())?;
        writer.flush()?;
        Ok(path)
    }

    fn path_for(&self, file_name: &str) -> PathBuf {
        self.base_dir.join(file_name)
    }

    fn remove_stale_color_files(&self, stem: &str, keep: u32) -> Result<Vec<PathBuf>> {
        let mut removed = Vec::new();
        let dir = if self.base_dir.as_os_str().is_empty() {
            Path::new(".")
        } else {
            self.base_dir.as_path()
        };
        if !dir.exists() {
            return Ok(removed);
        }

        for entry in fs::read_dir(dir)? {
            let entry = entry?;
            let Some(name) = entry.file_name().to_str().map(str::to_owned) else {
                continue;
            };
            match color_index_of(&name, stem) {
                Some(index) if index > keep => {
                    let path = entry.path();
                    fs::remove_file(&path)
                        .with_context(|| format!("removing {}", path.display()))?;
                    debug!("removed stale color output {}", path.display());
                    removed.push(path);
                }
                _ => {}
            }
        }
        removed.sort();
        Ok(removed)
    }

    fn remove(&self, file_name: &str) -> Result<bool> {
        let path = self.path_for(file_name);
        if path.exists() {
            fs::remove_file(&path).with_context(|| format!("removing {}", path.display()))?;
            return Ok(true);
        }
        Ok(false)
    }
}
