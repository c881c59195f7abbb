//! Name suggestion index
//!
//! The full name listing is pulled once and filtered locally per
//! keystroke-sized query; no further requests are made while suggesting.

use crate::api::client::ApiClient;
use crate::core::error::Result;

/// Every catalog name, in listing order
#[derive(Debug, Default)]
pub struct NameIndex {
    names: Vec<String>,
}

impl NameIndex {
    /// Build an index from already-known names
    pub fn from_names(names: Vec<String>) -> Self {
        Self { names }
    }

    /// Pull the full name listing in one request
    pub async fn load(client: &ApiClient, limit: u32) -> Result<Self> {
        let page = client.listing(limit, 0).await?;
        let names = page.results.into_iter().map(|entry| entry.name).collect();
        Ok(Self::from_names(names))
    }

    /// Case-insensitive substring matches for `query`, capped at `cap`
    ///
    /// An empty query suggests nothing rather than everything.
    pub fn suggest(&self, query: &str, cap: usize) -> Vec<&str> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }
        self.names
            .iter()
            .filter(|name| name.to_lowercase().contains(&needle))
            .take(cap)
            .map(String::as_str)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn index() -> NameIndex {
        NameIndex::from_names(vec![
            "bulbasaur".into(),
            "ivysaur".into(),
            "venusaur".into(),
            "charmander".into(),
            "charmeleon".into(),
            "charizard".into(),
        ])
    }

    #[test]
    fn test_substring_match_is_case_insensitive() {
        let idx = index();
        let matches = idx.suggest("SAUR", 250);
        assert_eq!(matches, vec!["bulbasaur", "ivysaur", "venusaur"]);
    }

    #[test]
    fn test_empty_query_suggests_nothing() {
        assert!(index().suggest("", 250).is_empty());
        assert!(index().suggest("   ", 250).is_empty());
    }

    #[test]
    fn test_cap_limits_results() {
        let idx = index();
        let matches = idx.suggest("char", 2);
        assert_eq!(matches, vec!["charmander", "charmeleon"]);
    }

    #[test]
    fn test_no_match_is_empty() {
        assert!(index().suggest("mew", 250).is_empty());
    }
}
