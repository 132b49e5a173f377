use std::path::Path;
use std::process::Command;

use anyhow::{bail, Context, Result};
use log::info;

pub const OPENSCAD: &str = "openscad";

pub fn openscad_command(scad_path: &Path, stl_path: &Path) -> Command {
    let mut command = Command::new(OPENSCAD);
    command.arg("-o").arg(stl_path).arg(scad_path);
    command
}

/// Compiles `scad_path` to `stl_path` with the external `openscad` binary.
pub fn scad_to_stl(scad_path: &Path, stl_path: &Path) -> Result<()> {
    if let Some(parent) = stl_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }

    info!("rendering {} -> {}", scad_path.display(), stl_path.display());
    let output = openscad_command(scad_path, stl_path)
        .output()
        .with_context(|| format!("failed to run {OPENSCAD}; is it installed and on PATH?"))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        bail!(
            "{OPENSCAD} failed for {} ({}): {}",
            scad_path.display(),
            output.status,
            stderr.trim()
        );
    }
    Ok(())
}
