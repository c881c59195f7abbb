//! Async HTTP client for the creature-data API
//!
//! One GET round trip per call: no retries, no timeout beyond the
//! transport default, no caching. Failures propagate to the caller, which
//! decides whether they are fatal (collection load) or degrade to an
//! empty result (search and nested chases).

use crate::api::models::{EntityDetail, ListingPage, SpeciesDetail};
use crate::core::config::AtlasConfig;
use crate::core::error::Result;
use reqwest::Client;
use serde::de::DeserializeOwned;

/// Async API client; cheap to clone per reqwest's internal pooling
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base: String,
}

impl ApiClient {
    /// Create a client against an explicit base URL (no trailing slash)
    pub fn new(base: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base: base.into(),
        }
    }

    /// Create a client from the viewer configuration
    pub fn from_config(config: &AtlasConfig) -> Self {
        Self::new(config.api_base.clone())
    }

    /// Fetch a resource URL and decode its JSON body
    ///
    /// This is the single round-trip primitive every other call is built
    /// on; non-2xx statuses and undecodable bodies both surface as errors.
    pub async fn fetch_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let response = self.client.get(url).send().await?.error_for_status()?;
        Ok(response.json().await?)
    }

    /// Fetch one page of the entity listing
    pub async fn listing(&self, limit: u32, offset: u32) -> Result<ListingPage> {
        let url = format!("{}/pokemon?limit={}&offset={}", self.base, limit, offset);
        self.fetch_json(&url).await
    }

    /// Direct lookup of one entity by numeric id or exact lowercase name
    pub async fn entity(&self, id_or_name: &str) -> Result<EntityDetail> {
        let url = format!("{}/pokemon/{}", self.base, id_or_name);
        self.fetch_json(&url).await
    }

    /// Direct lookup of one species by numeric id or exact lowercase name
    pub async fn species(&self, id_or_name: &str) -> Result<SpeciesDetail> {
        let url = format!("{}/pokemon-species/{}", self.base, id_or_name);
        self.fetch_json(&url).await
    }

    /// Total number of species in the catalog, read off the species
    /// listing page; bounds id-based previous/next navigation
    pub async fn species_count(&self) -> Result<u32> {
        let url = format!("{}/pokemon-species?limit=1&offset=0", self.base);
        let page: ListingPage = self.fetch_json(&url).await?;
        Ok(page.count)
    }

    pub fn base(&self) -> &str {
        &self.base
    }
}
