use std::time::Duration;

use anyhow::{Context, Result};
use gitshelves_core::{ContributionRecord, ContributionSource, SearchQuery};
use log::{debug, info};
use serde::Deserialize;
use ureq::Agent;

pub const GITHUB_API: &str = "https://api.github.com/search/issues";
const PER_PAGE: &str = "100";
const TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Deserialize)]
struct SearchPage {
    #[serde(default)]
    items: Vec<ContributionRecord>,
}

/// GitHub Search API client. Follows `Link: rel="next"` until the last page.
pub struct GithubSearch {
    agent: Agent,
    endpoint: String,
}

impl GithubSearch {
    pub fn new() -> Self {
        Self::with_endpoint(GITHUB_API)
    }

    pub fn with_endpoint(endpoint: &str) -> Self {
        let agent: Agent = Agent::config_builder()
            .timeout_global(Some(TIMEOUT))
            .build()
            .into();
        Self {
            agent,
            endpoint: endpoint.to_string(),
        }
    }

    fn fetch_page(
        &self,
        query: &str,
        token: Option<&str>,
        page: u32,
    ) -> Result<(Vec<ContributionRecord>, bool)> {
        let mut request = self
            .agent
            .get(&self.endpoint)
            .query("q", query)
            .query("per_page", PER_PAGE)
            .query("page", page.to_string())
            .header("Accept", "application/vnd.github+json");
        if let Some(token) = token {
            request = request.header("Authorization", format!("token {token}"));
        }

        let mut response = request
            .call()
            .with_context(|| format!("GitHub search request for page {page} failed"))?;
        let has_next = response
            .headers()
            .get("link")
            .and_then(|value| value.to_str().ok())
            .is_some_and(has_next_page);
        let body: SearchPage = response
            .body_mut()
            .read_json()
            .context("GitHub search returned malformed JSON")?;

        debug!("page {} returned {} item(s)", page, body.items.len());
        Ok((body.items, has_next))
    }
}

impl Default for GithubSearch {
    fn default() -> Self {
        Self::new()
    }
}

impl ContributionSource for GithubSearch {
    fn search(&self, query: &SearchQuery, token: Option<&str>) -> Result<Vec<ContributionRecord>> {
        let q = query.to_query_string();
        info!("searching GitHub: {}", q);
        collect_pages(|page| self.fetch_page(&q, token, page))
    }
}

/// Calls `fetch` with pages 1, 2, ... while it reports another page.
pub fn collect_pages<F>(mut fetch: F) -> Result<Vec<ContributionRecord>>
where
    F: FnMut(u32) -> Result<(Vec<ContributionRecord>, bool)>,
{
    let mut records = Vec::new();
    let mut page = 1;
    loop {
        let (items, has_next) = fetch(page)?;
        records.extend(items);
        if !has_next {
            break;
        }
        page += 1;
    }
    Ok(records)
}

/// True when a `Link` header advertises a `rel="next"` target.
pub fn has_next_page(link: &str) -> bool {
    link.split(',').any(|part| {
        part.split(';')
            .skip(1)
            .any(|param| matches!(param.trim(), "rel=\"next\"" | "rel=next"))
    })
}
