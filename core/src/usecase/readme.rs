use crate::model::contribution::MonthlyCounts;
use crate::service::blocks::blocks_for_count;
use crate::time::month_name;

fn plural(n: u64, word: &str) -> String {
    if n == 1 {
        format!("{n} {word}")
    } else {
        format!("{n} {word}s")
    }
}

/// Materials list for one year's shelf: contributions and cube counts per
/// month, and where the daily calendars live. No baseplate section is
/// written since baseplate templates are not generated.
pub fn render_year_readme(year: i32, counts: &MonthlyCounts, calendar_slug: &str) -> String {
    let mut lines = vec![
        format!("# {year} Materials"),
        String::new(),
        "## Monthly Cubes".to_string(),
    ];

    for month in 1..=12 {
        let count = counts.get(&(year, month)).copied().unwrap_or(0);
        let cubes = u64::from(blocks_for_count(count));
        let name = month_name(month).unwrap_or_default();
        lines.push(format!(
            "- {}: {} \u{2192} {}",
            name,
            plural(count, "contribution"),
            plural(cubes, "cube")
        ));
    }

    lines.push(String::new());
    lines.push("## Versions".to_string());
    lines.push(format!(
        "- `{calendar_slug}`: daily calendars in [`{calendar_slug}/`]({calendar_slug}) that fit a 256 mm square bed"
    ));

    lines.join("\n")
}
