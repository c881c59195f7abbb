//! Viewer configuration with documented constants
//!
//! The remote API contract is fixed; everything tunable about how this
//! client consumes it is collected here.

use crate::core::error::{AtlasError, Result};
use serde::Deserialize;
use std::path::Path;

/// Configuration for the catalog viewer
///
/// Defaults reproduce the behavior of the reference deployment against
/// the public PokeAPI instance.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AtlasConfig {
    // === API ===
    /// Base URL of the creature-data API, without a trailing slash
    ///
    /// All endpoint paths are joined onto this. The schema behind it is
    /// treated as an immutable external contract.
    pub api_base: String,

    // === COLLECTION ===
    /// Number of entries fetched for the initial collection page
    ///
    /// A single page is loaded; no pagination cursor is followed. Each
    /// listed entry costs one additional detail request, so this value
    /// directly sets the size of the startup fan-out.
    pub page_limit: u32,

    /// Offset of the initial collection page
    pub page_offset: u32,

    // === SEARCH ===
    /// Number of names pulled into the suggestion index
    ///
    /// Large enough to cover the full catalog in one request. The index
    /// is fetched once and filtered locally.
    pub name_index_limit: u32,

    /// Maximum suggestions returned for one query
    pub suggestion_cap: usize,

    // === EVOLUTION ===
    /// Recursion ceiling when flattening an evolution chain
    ///
    /// Real chains are at most a few nodes deep; the cap only matters for
    /// malformed cyclic input, where traversal truncates instead of
    /// recursing forever.
    pub max_chain_depth: usize,
}

impl Default for AtlasConfig {
    fn default() -> Self {
        Self {
            api_base: "https://pokeapi.co/api/v2".into(),
            page_limit: 25,
            page_offset: 0,
            name_index_limit: 10_000,
            suggestion_cap: 250,
            max_chain_depth: 16,
        }
    }
}

impl AtlasConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a TOML file, falling back to defaults
    /// when no path is given
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config = match path {
            Some(path) => {
                let raw = std::fs::read_to_string(path)?;
                toml::from_str(&raw)
                    .map_err(|e| AtlasError::Config(format!("{}: {}", path.display(), e)))?
            }
            None => Self::default(),
        };
        config.validate().map_err(AtlasError::Config)?;
        Ok(config)
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> std::result::Result<(), String> {
        if self.api_base.is_empty() {
            return Err("api_base must not be empty".into());
        }

        if self.api_base.ends_with('/') {
            return Err(format!(
                "api_base ({}) must not end with a slash",
                self.api_base
            ));
        }

        if self.page_limit == 0 {
            return Err("page_limit must be positive".into());
        }

        // The suggestion index is only useful if it can hold more names
        // than one page of results
        if self.name_index_limit < self.page_limit {
            return Err(format!(
                "name_index_limit ({}) should be >= page_limit ({})",
                self.name_index_limit, self.page_limit
            ));
        }

        if self.suggestion_cap == 0 {
            return Err("suggestion_cap must be positive".into());
        }

        if self.max_chain_depth == 0 {
            return Err("max_chain_depth must be positive".into());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(AtlasConfig::default().validate().is_ok());
    }

    #[test]
    fn test_trailing_slash_rejected() {
        let config = AtlasConfig {
            api_base: "https://pokeapi.co/api/v2/".into(),
            ..AtlasConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_page_limit_rejected() {
        let config = AtlasConfig {
            page_limit: 0,
            ..AtlasConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_index_smaller_than_page_rejected() {
        let config = AtlasConfig {
            page_limit: 100,
            name_index_limit: 50,
            ..AtlasConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_without_path_uses_defaults() {
        let config = AtlasConfig::load(None).unwrap();
        assert_eq!(config.page_limit, 25);
        assert_eq!(config.suggestion_cap, 250);
    }
}
