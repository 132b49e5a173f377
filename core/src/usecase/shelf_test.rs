
#[cfg(test)]
mod tests {
    use crate::error::ShelfError;
    use crate::model::artifact::ArtifactKind;
    use crate::model::contribution::{ContributionRecord, DailyCounts, MonthlyCounts};
    use crate::model::layout::IndexBaseMode;
    use crate::service::aggregate_service::build_contribution_maps;
    use crate::usecase::shelf::{calendar_slug, ShelfOptions, ShelfPlanner};

    fn year_of(year: i32, counts: &[(u32, u64)]) -> MonthlyCounts {
        let mut monthly: MonthlyCounts = (1..=12).map(|m| ((year, m), 0)).collect();
        for &(month, count) in counts {
            monthly.insert((year, month), count);
        }
        monthly
    }

    fn planner(colors: u32, mode: IndexBaseMode) -> ShelfPlanner {
        ShelfPlanner::new(ShelfOptions {
            colors,
            index_mode: mode,
            ..ShelfOptions::default()
        })
        .unwrap()
    }

    #[test]
    fn test_single_color_plan() {
        let monthly = year_of(2021, &[(2, 2), (3, 100)]);
        let artifacts = planner(1, IndexBaseMode::Continuous).plan("contributions", &monthly).unwrap();

        assert_eq!(artifacts.len(), 1);
        let shelf = &artifacts[0];
        assert_eq!(shelf.stem, "contributions");
        assert_eq!(shelf.kind, ArtifactKind::Monthly);
        assert_eq!(shelf.levels, vec![1, 2, 3]);

        let lines: Vec<&str> = shelf.scad.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "translate([12, 0, 0]) cube(10); // 2021-02 level 1");
        assert_eq!(lines[3], "translate([24, 0, 20]) cube(10); // 2021-03 level 3");
        assert!(!shelf.scad.contains("reserved at"));
    }

    #[test]
    fn test_color_split_keeps_every_group_and_annotations() {
        let monthly = year_of(2021, &[(1, 5)]);
        let artifacts = planner(3, IndexBaseMode::Continuous).plan("shelf", &monthly).unwrap();

        let stems: Vec<&str> = artifacts.iter().map(|a| a.stem.as_str()).collect();
        assert_eq!(stems, vec!["shelf_color1", "shelf_color2", "shelf_color3"]);

        for artifact in &artifacts {
            assert_eq!(artifact.kind, ArtifactKind::MonthlyColor);
            assert!(artifact
                .scad
                .contains("// 2021-02 (0 contributions) reserved at [12, 0]"));
            assert_eq!(artifact.scad.matches("reserved at").count(), 11);
        }
        assert!(artifacts[0].scad.starts_with("translate([0, 0, 0]) cube(10); // 2021-01 level 1\n"));
        assert!(!artifacts[1].scad.contains("translate"));
        assert_eq!(artifacts[0].levels, vec![1]);
        assert!(artifacts[2].levels.is_empty());
    }

    #[test]
    fn test_overflow_levels_land_in_last_group() {
        // 10_000 contributions → five levels
        let monthly = year_of(2022, &[(6, 10_000)]);
        let artifacts = planner(4, IndexBaseMode::Continuous).plan("s", &monthly).unwrap();

        let levels: Vec<Vec<u32>> = artifacts.iter().map(|a| a.levels.clone()).collect();
        assert_eq!(levels, vec![vec![1], vec![2], vec![3], vec![4, 5]]);
        assert!(artifacts[3].scad.contains("// 2022-06 level 5"));
    }

    #[test]
    fn test_per_year_sheets_get_year_suffix() {
        let mut monthly = year_of(2020, &[(12, 1)]);
        monthly.extend(year_of(2021, &[(1, 1)]));

        let artifacts = planner(2, IndexBaseMode::PerYear).plan("shelf", &monthly).unwrap();
        let stems: Vec<&str> = artifacts.iter().map(|a| a.stem.as_str()).collect();
        assert_eq!(
            stems,
            vec!["shelf_2020_color1", "shelf_2020_color2", "shelf_2021_color1", "shelf_2021_color2"]
        );
        // January of the second year restarts at the origin.
        assert!(artifacts[2].scad.starts_with("translate([0, 0, 0]) cube(10); // 2021-01 level 1"));
    }

    #[test]
    fn test_continuous_plan_wraps_second_year() {
        let mut monthly = year_of(2020, &[]);
        monthly.extend(year_of(2021, &[(2, 3)]));

        let artifacts = planner(1, IndexBaseMode::Continuous).plan("shelf", &monthly).unwrap();
        assert_eq!(artifacts[0].scad, "translate([12, 12, 0]) cube(10); // 2021-02 level 1\n");
    }

    #[test]
    fn test_end_to_end_from_records() {
        let records = vec![
            ContributionRecord::new("2021-02-01T12:00:00Z"),
            ContributionRecord::new("2021-02-15T12:00:00Z"),
            ContributionRecord { created_at: None },
        ];
        let maps = build_contribution_maps(&records, Some(2021), Some(2021)).unwrap();
        let artifacts = planner(1, IndexBaseMode::Continuous).plan("out", &maps.monthly).unwrap();

        assert_eq!(artifacts[0].scad, "translate([12, 0, 0]) cube(10); // 2021-02 level 1\n");
    }

    #[test]
    fn test_invalid_options_rejected() {
        let zero_width = ShelfPlanner::new(ShelfOptions { months_per_row: 0, ..ShelfOptions::default() });
        assert!(matches!(zero_width, Err(ShelfError::InvalidConfiguration(_))));

        let zero_colors = ShelfPlanner::new(ShelfOptions { colors: 0, ..ShelfOptions::default() });
        assert!(matches!(zero_colors, Err(ShelfError::InvalidConfiguration(_))));
    }

    #[test]
    fn test_calendar_plan_paths() {
        let mut daily = DailyCounts::new();
        daily.insert((2023, 5, 4), 12);

        let artifacts = planner(1, IndexBaseMode::Continuous)
            .plan_calendars(2023, 2023, &daily, 12)
            .unwrap();

        assert_eq!(artifacts.len(), 12);
        let may = &artifacts[4];
        assert_eq!(may.stem, "2023/monthly-12x3/2023-05");
        assert_eq!(may.kind, ArtifactKind::Calendar);
        assert_eq!(may.levels, vec![1, 2]);
        assert!(artifacts[0].levels.is_empty());
    }

    #[test]
    fn test_calendar_slug() {
        assert_eq!(calendar_slug(12).unwrap(), "monthly-12x3");
        assert_eq!(calendar_slug(7).unwrap(), "monthly-7x5");
        assert!(calendar_slug(0).is_err());
    }
}
