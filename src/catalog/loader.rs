//! Collection loading: one listing page, then a concurrent detail fan-out
//!
//! All detail requests are dispatched together and joined by a
//! wait-for-all barrier, so total latency is bounded by the slowest
//! single request rather than the sum. The fan-out is all-or-nothing:
//! any single failure fails the whole load with no partial list.

use crate::api::client::ApiClient;
use crate::api::models::{EntityDetail, EntitySummary};
use crate::core::error::Result;
use futures_util::future::try_join_all;
use std::future::Future;

/// Load the initial collection: the fixed listing page followed by one
/// detail fetch per listed entry
///
/// The returned order matches the listing order, not completion order.
/// No pagination cursor is followed.
pub async fn load_collection(
    client: &ApiClient,
    limit: u32,
    offset: u32,
) -> Result<Vec<EntityDetail>> {
    let page = client.listing(limit, offset).await?;
    tracing::debug!(entries = page.results.len(), "listing page fetched");
    fetch_details(client, &page.results).await
}

/// Resolve every summary in `refs` to its full detail record
pub async fn fetch_details(
    client: &ApiClient,
    refs: &[EntitySummary],
) -> Result<Vec<EntityDetail>> {
    join_ordered(refs.iter().map(|entry| client.fetch_json(&entry.url))).await
}

/// Wait-for-all barrier over per-item fetches
///
/// Results come back in input order regardless of completion order; the
/// first failure fails the whole join.
pub(crate) async fn join_ordered<T, F>(fetches: impl IntoIterator<Item = F>) -> Result<Vec<T>>
where
    F: Future<Output = Result<T>>,
{
    try_join_all(fetches).await
}
