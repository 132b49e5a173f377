use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// (year, month)
pub type MonthlyKey = (i32, u32);
/// (year, month, day)
pub type DailyKey = (i32, u32, u32);

pub type MonthlyCounts = BTreeMap<MonthlyKey, u64>;
pub type DailyCounts = BTreeMap<DailyKey, u64>;

/// One search hit. Only the creation timestamp matters here; every other
/// field of the API item is ignored on deserialization.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct ContributionRecord {
    #[serde(default)]
    pub created_at: Option<String>,
}

impl ContributionRecord {
    pub fn new(created_at: &str) -> Self {
        Self {
            created_at: Some(created_at.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SearchQuery {
    pub username: String,
    pub start_year: i32,
    pub end_year: i32,
}

impl SearchQuery {
    pub fn new(username: &str, start_year: i32, end_year: i32) -> Self {
        Self {
            username: username.to_string(),
            start_year,
            end_year,
        }
    }

    /// Search API `q` parameter covering Jan 1 of the start year through
    /// Dec 31 of the end year.
    pub fn to_query_string(&self) -> String {
        format!(
            "author:{} created:{:04}-01-01..{:04}-12-31",
            self.username, self.start_year, self.end_year
        )
    }
}
