use serde::{Deserialize, Serialize};

use crate::error::{Result, ShelfError};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridCoordinate {
    pub column: usize,
    pub row: usize,
}

impl GridCoordinate {
    pub fn new(column: usize, row: usize) -> Self {
        Self { column, row }
    }
}

/// How cell indices are counted when the range spans several years.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IndexBaseMode {
    /// One index sequence across the whole range, one sheet.
    #[default]
    Continuous,
    /// Index restarts at 0 for each year, one sheet per year.
    PerYear,
}

/// Physical dimensions of the emitted geometry, in OpenSCAD units (mm).
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeometryConfig {
    /// Center-to-center distance between neighbouring cells.
    pub spacing: u32,
    /// Vertical offset between stacked levels.
    pub block_height: u32,
    /// Edge length of each cube.
    pub cube_size: u32,
}

impl Default for GeometryConfig {
    fn default() -> Self {
        Self {
            spacing: 12,
            block_height: 10,
            cube_size: 10,
        }
    }
}

impl GeometryConfig {
    pub fn validate(&self) -> Result<()> {
        if self.spacing == 0 || self.block_height == 0 || self.cube_size == 0 {
            return Err(ShelfError::config("geometry dimensions must be positive"));
        }
        if self.spacing < self.cube_size {
            return Err(ShelfError::config(format!(
                "spacing {} is smaller than cube size {}; stacks would overlap",
                self.spacing, self.cube_size
            )));
        }
        if self.block_height < self.cube_size {
            return Err(ShelfError::config(format!(
                "block height {} is smaller than cube size {}; levels would overlap",
                self.block_height, self.cube_size
            )));
        }
        Ok(())
    }

    /// Emitted (x, y) position of a grid coordinate.
    pub fn position(&self, coordinate: GridCoordinate) -> (u64, u64) {
        let spacing = u64::from(self.spacing);
        (coordinate.column as u64 * spacing, coordinate.row as u64 * spacing)
    }
}

/// A cell with its identity, contribution count and grid slot.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PlacedCell {
    /// `YYYY-MM` for months, `YYYY-MM-DD` for calendar days.
    pub label: String,
    pub count: u64,
    pub coordinate: GridCoordinate,
}

/// One independent grid: the whole range, or a single year.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutSheet {
    pub year: Option<i32>,
    pub cells: Vec<PlacedCell>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_geometry_validation() {
        assert!(GeometryConfig::default().validate().is_ok());

        let overlapping = GeometryConfig { spacing: 8, ..GeometryConfig::default() };
        assert!(matches!(
            overlapping.validate(),
            Err(ShelfError::InvalidConfiguration(_))
        ));

        let flat = GeometryConfig { block_height: 0, ..GeometryConfig::default() };
        assert!(flat.validate().is_err());

        let sunken = GeometryConfig { block_height: 6, ..GeometryConfig::default() };
        assert!(matches!(
            sunken.validate(),
            Err(ShelfError::InvalidConfiguration(_))
        ));

        let tall = GeometryConfig { block_height: 14, ..GeometryConfig::default() };
        assert!(tall.validate().is_ok());

        let touching = GeometryConfig { spacing: 10, block_height: 10, cube_size: 10 };
        assert!(touching.validate().is_ok());
    }

    #[test]
    fn test_position_scales_by_spacing() {
        let config = GeometryConfig::default();
        assert_eq!(config.position(GridCoordinate::new(1, 0)), (12, 0));
        assert_eq!(config.position(GridCoordinate::new(3, 2)), (36, 24));
    }
}
