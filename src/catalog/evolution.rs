//! Evolution-chain traversal
//!
//! The chain resource is a branching tree of species references. Display
//! wants an ordered sequence, produced by a pre-order walk: parent before
//! children, siblings in listing order.

use crate::api::client::ApiClient;
use crate::api::models::{EntitySummary, EvolutionChain, EvolutionNode, SpeciesDetail};
use crate::core::error::Result;

/// Default recursion ceiling; see `AtlasConfig::max_chain_depth`
pub const DEFAULT_MAX_CHAIN_DEPTH: usize = 16;

/// Flatten an evolution tree into display order
///
/// The source data carries no cycles, but traversal still truncates at
/// `max_depth` so malformed input cannot recurse forever.
pub fn flatten_chain(root: &EvolutionNode, max_depth: usize) -> Vec<EntitySummary> {
    let mut flattened = Vec::new();
    walk(root, 0, max_depth, &mut flattened);
    flattened
}

fn walk(node: &EvolutionNode, depth: usize, max_depth: usize, out: &mut Vec<EntitySummary>) {
    if depth >= max_depth {
        tracing::warn!(
            species = %node.species.name,
            max_depth,
            "evolution chain exceeds depth cap, truncating"
        );
        return;
    }
    out.push(node.species.clone());
    for successor in &node.evolves_to {
        walk(successor, depth + 1, max_depth, out);
    }
}

/// Fetch a species' evolution chain and flatten it
///
/// A species without a chain link yields an empty sequence.
pub async fn load_evolutions(
    client: &ApiClient,
    species: &SpeciesDetail,
    max_depth: usize,
) -> Result<Vec<EntitySummary>> {
    let Some(link) = &species.evolution_chain else {
        tracing::debug!(species = %species.name, "species has no evolution chain link");
        return Ok(Vec::new());
    };
    let chain: EvolutionChain = client.fetch_json(&link.url).await?;
    Ok(flatten_chain(&chain.chain, max_depth))
}
