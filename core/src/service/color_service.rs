use std::collections::BTreeMap;

use crate::error::{Result, ShelfError};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GroupedLevels {
    /// Color group → concatenated geometry, keys `1..=group_count`.
    pub texts: BTreeMap<u32, String>,
    /// Color group → levels it contains, ascending.
    pub levels: BTreeMap<u32, Vec<u32>>,
}

/// Color group that `level` lands in.
///
/// Level 1 is the base color and sits alone in group 1. Higher levels take
/// one group each in ascending order and the last group absorbs whatever is
/// left over.
pub fn group_for_level(level: u32, group_count: u32) -> u32 {
    if group_count <= 1 || level <= 1 {
        return 1;
    }
    level.min(group_count)
}

pub fn group_levels(
    level_to_text: &BTreeMap<u32, String>,
    group_count: u32,
) -> Result<GroupedLevels> {
    if group_count == 0 {
        return Err(ShelfError::config("group count must be at least 1"));
    }

    let mut grouped = GroupedLevels::default();
    for group in 1..=group_count {
        grouped.texts.insert(group, String::new());
        grouped.levels.insert(group, Vec::new());
    }

    // Ranks rather than raw level numbers, so a sparse level set still
    // fills groups 2, 3, ... in order.
    let mut rank = 1;
    for (&level, text) in level_to_text {
        let group = if level == 1 {
            1
        } else {
            rank += 1;
            group_for_level(rank, group_count)
        };
        if let Some(combined) = grouped.texts.get_mut(&group) {
            combined.push_str(text);
        }
        if let Some(levels) = grouped.levels.get_mut(&group) {
            levels.push(level);
        }
    }

    Ok(grouped)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn levels(upto: u32) -> BTreeMap<u32, String> {
        (1..=upto).map(|l| (l, format!("L{l}\n"))).collect()
    }

    #[test]
    fn test_five_levels_into_four_groups() {
        let grouped = group_levels(&levels(5), 4).unwrap();

        assert_eq!(grouped.levels.keys().copied().collect::<Vec<_>>(), vec![1, 2, 3, 4]);
        assert_eq!(grouped.levels[&1], vec![1]);
        assert_eq!(grouped.levels[&2], vec![2]);
        assert_eq!(grouped.levels[&3], vec![3]);
        assert_eq!(grouped.levels[&4], vec![4, 5]);
        assert_eq!(grouped.texts[&4], "L4\nL5\n");
    }

    #[test]
    fn test_missing_groups_are_present_and_empty() {
        let grouped = group_levels(&levels(1), 3).unwrap();

        assert_eq!(grouped.texts.len(), 3);
        assert_eq!(grouped.texts[&1], "L1\n");
        assert_eq!(grouped.texts[&2], "");
        assert_eq!(grouped.texts[&3], "");
        assert!(grouped.levels[&2].is_empty());
        assert!(grouped.levels[&3].is_empty());
    }

    #[test]
    fn test_single_group_combines_everything() {
        let grouped = group_levels(&levels(3), 1).unwrap();
        assert_eq!(grouped.texts.len(), 1);
        assert_eq!(grouped.texts[&1], "L1\nL2\nL3\n");
        assert_eq!(grouped.levels[&1], vec![1, 2, 3]);
    }

    #[test]
    fn test_no_levels_still_yields_every_group() {
        let grouped = group_levels(&BTreeMap::new(), 2).unwrap();
        assert_eq!(grouped.texts.keys().copied().collect::<Vec<_>>(), vec![1, 2]);
        assert!(grouped.texts.values().all(String::is_empty));
    }

    #[test]
    fn test_sparse_levels_without_base() {
        let mut sparse = BTreeMap::new();
        sparse.insert(2, "L2\n".to_string());
        sparse.insert(3, "L3\n".to_string());
        let grouped = group_levels(&sparse, 3).unwrap();

        assert!(grouped.levels[&1].is_empty());
        assert_eq!(grouped.levels[&2], vec![2]);
        assert_eq!(grouped.levels[&3], vec![3]);
    }

    #[test]
    fn test_zero_groups_rejected() {
        assert!(matches!(
            group_levels(&levels(2), 0),
            Err(ShelfError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_group_for_level() {
        assert_eq!(group_for_level(1, 4), 1);
        assert_eq!(group_for_level(3, 4), 3);
        assert_eq!(group_for_level(9, 4), 4);
        assert_eq!(group_for_level(9, 1), 1);
    }
}
