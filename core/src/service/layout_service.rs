use crate::error::{Result, ShelfError};
use crate::model::contribution::MonthlyCounts;
use crate::model::layout::{GridCoordinate, IndexBaseMode, LayoutSheet, PlacedCell};

pub fn coordinate_for(index: usize, width: usize) -> Result<GridCoordinate> {
    if width == 0 {
        return Err(ShelfError::config("row width must be at least 1"));
    }
    Ok(GridCoordinate::new(index % width, index / width))
}

pub fn month_label(year: i32, month: u32) -> String {
    format!("{:04}-{:02}", year, month)
}

/// Assigns grid slots to cells in traversal order. Reordering the input
/// changes the coordinates.
#[derive(Debug, Clone, Copy)]
pub struct LayoutAssigner {
    width: usize,
}

impl LayoutAssigner {
    pub fn new(width: usize) -> Result<Self> {
        coordinate_for(0, width)?;
        Ok(Self { width })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn coordinate(&self, index: usize) -> GridCoordinate {
        GridCoordinate::new(index % self.width, index / self.width)
    }

    /// `start_index` is the index given to the first cell.
    pub fn assign<I>(&self, cells: I, start_index: usize) -> Vec<PlacedCell>
    where
        I: IntoIterator<Item = (String, u64)>,
    {
        cells
            .into_iter()
            .enumerate()
            .map(|(offset, (label, count))| PlacedCell {
                label,
                count,
                coordinate: self.coordinate(start_index + offset),
            })
            .collect()
    }
}

/// Lays out every month of `monthly` in chronological order.
pub fn layout_sheets(
    monthly: &MonthlyCounts,
    width: usize,
    mode: IndexBaseMode,
) -> Result<Vec<LayoutSheet>> {
    let assigner = LayoutAssigner::new(width)?;
    let entries = monthly
        .iter()
        .map(|(&(year, month), &count)| (year, month_label(year, month), count));

    match mode {
        IndexBaseMode::Continuous => {
            let cells = assigner.assign(entries.map(|(_, label, count)| (label, count)), 0);
            Ok(vec![LayoutSheet { year: None, cells }])
        }
        IndexBaseMode::PerYear => {
            let mut sheets: Vec<LayoutSheet> = Vec::new();
            let mut pending: Vec<(String, u64)> = Vec::new();
            let mut current: Option<i32> = None;

            for (year, label, count) in entries {
                if current.is_some_and(|y| y != year) {
                    sheets.push(LayoutSheet {
                        year: current,
                        cells: assigner.assign(std::mem::take(&mut pending), 0),
                    });
                }
                current = Some(year);
                pending.push((label, count));
            }
            if current.is_some() {
                sheets.push(LayoutSheet {
                    year: current,
                    cells: assigner.assign(pending, 0),
                });
            }
            Ok(sheets)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_years() -> MonthlyCounts {
        let mut counts = MonthlyCounts::new();
        for year in [2020, 2021] {
            for month in 1..=12 {
                counts.insert((year, month), u64::from(month));
            }
        }
        counts
    }

    #[test]
    fn test_coordinate_for_row_width_twelve() {
        assert_eq!(coordinate_for(0, 12).unwrap(), GridCoordinate::new(0, 0));
        assert_eq!(coordinate_for(11, 12).unwrap(), GridCoordinate::new(11, 0));
        assert_eq!(coordinate_for(13, 12).unwrap(), GridCoordinate::new(1, 1));
    }

    #[test]
    fn test_zero_width_is_rejected() {
        assert!(matches!(coordinate_for(3, 0), Err(ShelfError::InvalidConfiguration(_))));
        assert!(LayoutAssigner::new(0).is_err());
    }

    #[test]
    fn test_assign_honours_start_offset() {
        let assigner = LayoutAssigner::new(4).unwrap();
        let cells = assigner.assign(
            vec![("a".to_string(), 1), ("b".to_string(), 2)],
            3,
        );
        assert_eq!(cells[0].coordinate, GridCoordinate::new(3, 0));
        assert_eq!(cells[1].coordinate, GridCoordinate::new(0, 1));
    }

    #[test]
    fn test_continuous_layout_spans_years() {
        let sheets = layout_sheets(&two_years(), 12, IndexBaseMode::Continuous).unwrap();
        assert_eq!(sheets.len(), 1);
        assert_eq!(sheets[0].year, None);

        let cells = &sheets[0].cells;
        assert_eq!(cells.len(), 24);
        assert_eq!(cells[0].label, "2020-01");
        assert_eq!(cells[12].label, "2021-01");
        assert_eq!(cells[12].coordinate, GridCoordinate::new(0, 1));
        assert_eq!(cells[13].coordinate, GridCoordinate::new(1, 1));
    }

    #[test]
    fn test_per_year_layout_restarts_index() {
        let sheets = layout_sheets(&two_years(), 6, IndexBaseMode::PerYear).unwrap();
        assert_eq!(sheets.len(), 2);
        assert_eq!(sheets[0].year, Some(2020));
        assert_eq!(sheets[1].year, Some(2021));

        let second = &sheets[1].cells;
        assert_eq!(second[0].label, "2021-01");
        assert_eq!(second[0].coordinate, GridCoordinate::new(0, 0));
        assert_eq!(second[7].coordinate, GridCoordinate::new(1, 1));
    }

    #[test]
    fn test_same_input_same_layout() {
        let a = layout_sheets(&two_years(), 5, IndexBaseMode::Continuous).unwrap();
        let b = layout_sheets(&two_years(), 5, IndexBaseMode::Continuous).unwrap();
        assert_eq!(a, b);
    }
}
