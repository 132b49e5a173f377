/// Environment variables consulted, in order, when no token is passed.
pub const TOKEN_FALLBACK_ORDER: &[&str] = &["GH_TOKEN", "GITHUB_TOKEN"];

/// Picks the API token: an explicit non-empty value wins, then the first
/// non-empty variable from [`TOKEN_FALLBACK_ORDER`] as seen by `lookup`.
pub fn resolve_token<F>(explicit: Option<&str>, lookup: F) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(token) = explicit.filter(|t| !t.is_empty()) {
        return Some(token.to_string());
    }
    TOKEN_FALLBACK_ORDER
        .iter()
        .filter_map(|&name| lookup(name))
        .find(|value| !value.is_empty())
}

pub fn resolve_token_from_env(explicit: Option<&str>) -> Option<String> {
    resolve_token(explicit, |name| std::env::var(name).ok())
}
