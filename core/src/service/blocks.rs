/// Number of stacked cubes for a contribution count: one per decimal
/// digit, so 1..=9 → 1, 10..=99 → 2, 100..=999 → 3. Non-positive counts
/// produce no blocks.
pub fn blocks_for_contributions(count: i64) -> u32 {
    if count <= 0 {
        return 0;
    }
    let mut remaining = count;
    let mut blocks = 0;
    while remaining > 0 {
        remaining /= 10;
        blocks += 1;
    }
    blocks
}

/// Convenience for the unsigned counters produced by aggregation.
pub fn blocks_for_count(count: u64) -> u32 {
    blocks_for_contributions(i64::try_from(count).unwrap_or(i64::MAX))
}
