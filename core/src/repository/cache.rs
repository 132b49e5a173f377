use std::collections::HashMap;

use anyhow::Result;
use log::debug;

use crate::model::contribution::{ContributionRecord, SearchQuery};
use crate::repository::traits::ContributionSource;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct CacheKey {
    query: SearchQuery,
    token: Option<String>,
}

/// Memoizes search results per (username, token, year range). Owned by the
/// caller, so its lifetime and hit counts are explicit.
#[derive(Debug, Default)]
pub struct ContributionCache {
    entries: HashMap<CacheKey, Vec<ContributionRecord>>,
    hits: usize,
    misses: usize,
}

impl ContributionCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fetch<S: ContributionSource>(
        &mut self,
        source: &S,
        query: &SearchQuery,
        token: Option<&str>,
    ) -> Result<Vec<ContributionRecord>> {
        let key = CacheKey {
            query: query.clone(),
            token: token.map(str::to_string),
        };

        if let Some(records) = self.entries.get(&key) {
            self.hits += 1;
            debug!("cache hit for {}", query.to_query_string());
            return Ok(records.clone());
        }

        self.misses += 1;
        let records = source.search(query, token)?;
        self.entries.insert(key, records.clone());
        Ok(records)
    }

    pub fn hits(&self) -> usize {
        self.hits
    }

    pub fn misses(&self) -> usize {
        self.misses
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
