use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum ArtifactKind {
    Monthly,
    MonthlyColor,
    Calendar,
}

/// A generated OpenSCAD document ready to be written. `stem` is the file
/// name without extension.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub stem: String,
    pub kind: ArtifactKind,
    pub year: Option<i32>,
    pub month: Option<u32>,
    pub color_index: Option<u32>,
    pub levels: Vec<u32>,
    pub scad: String,
}

impl Artifact {
    pub fn file_name(&self) -> String {
        format!("{}.scad", self.stem)
    }
}

pub fn color_stem(stem: &str, color_index: u32) -> String {
    format!("{stem}_color{color_index}")
}
