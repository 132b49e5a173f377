use std::collections::BTreeMap;

use crate::model::layout::{GeometryConfig, PlacedCell};
use crate::service::blocks::blocks_for_count;

/// One cube statement for `level` (1-based) of `cell`'s stack.
pub fn emit_cell_geometry(cell: &PlacedCell, level: u32, config: &GeometryConfig) -> String {
    let (x, y) = config.position(cell.coordinate);
    let z = u64::from(level.saturating_sub(1)) * u64::from(config.block_height);
    format!(
        "translate([{}, {}, {}]) cube({}); // {} level {}",
        x, y, z, config.cube_size, cell.label, level
    )
}

/// Statements for levels `1..=block_count`, bottom first.
pub fn emit_stack(cell: &PlacedCell, block_count: u32, config: &GeometryConfig) -> Vec<String> {
    (1..=block_count)
        .map(|level| emit_cell_geometry(cell, level, config))
        .collect()
}

/// Placeholder comments for cells without contributions, positioned where
/// their stack would have been.
pub fn annotate_zero_cells(cells: &[PlacedCell], config: &GeometryConfig) -> Vec<String> {
    cells
        .iter()
        .filter(|cell| cell.count == 0)
        .map(|cell| {
            let (x, y) = config.position(cell.coordinate);
            format!("// {} (0 contributions) reserved at [{}, {}]", cell.label, x, y)
        })
        .collect()
}

/// Whole-stack emission for a single-color model.
pub fn generate_scad_monthly(cells: &[PlacedCell], config: &GeometryConfig) -> String {
    let mut out = String::new();
    for cell in cells {
        for line in emit_stack(cell, blocks_for_count(cell.count), config) {
            out.push_str(&line);
            out.push('\n');
        }
    }
    out
}

/// Per-level emission: level → statements of that level across all cells.
/// Levels nobody reaches are absent.
pub fn generate_scad_monthly_levels(
    cells: &[PlacedCell],
    config: &GeometryConfig,
) -> BTreeMap<u32, String> {
    let mut levels: BTreeMap<u32, String> = BTreeMap::new();
    for cell in cells {
        for level in 1..=blocks_for_count(cell.count) {
            let text = levels.entry(level).or_default();
            text.push_str(&emit_cell_geometry(cell, level, config));
            text.push('\n');
        }
    }
    levels
}

pub fn append_lines(text: &mut String, lines: &[String]) {
    for line in lines {
        text.push_str(line);
        text.push('\n');
    }
}
