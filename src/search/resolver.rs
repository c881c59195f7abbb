//! Query resolution against the entity-by-id-or-name endpoint
//!
//! The displayed list and the query that produced it live in one state
//! machine, updated atomically per resolution. Each resolution carries a
//! generation ticket; an outcome settling after a newer query began is
//! dropped instead of overwriting the newer state.

use crate::api::client::ApiClient;
use crate::api::models::EntityDetail;

/// Where a resolution currently stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchStatus {
    /// No query has run; the full collection is displayed
    #[default]
    Idle,
    /// A lookup is in flight
    Resolving,
    /// The last lookup matched exactly one entity
    Found,
    /// The last lookup matched nothing
    NotFound,
}

/// Layout mode, derived solely from the resolved set's length
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// Empty set: render the not-found view
    NotFound,
    /// Single match: render the detail panel
    Detail,
    /// Multiple entries: render the browsing grid
    Browsing,
}

/// Authorization to settle one resolution; stale tickets are refused
#[derive(Debug, Clone, Copy)]
pub struct SearchTicket {
    generation: u64,
}

/// The current query, its resolved set, and the resolution status
#[derive(Debug, Default)]
pub struct SearchState {
    query: String,
    results: Vec<EntityDetail>,
    status: SearchStatus,
    generation: u64,
}

impl SearchState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install the initial collection as the displayed set
    pub fn install_collection(&mut self, collection: Vec<EntityDetail>) {
        self.query.clear();
        self.results = collection;
        self.status = SearchStatus::Idle;
    }

    /// Start a resolution for `term`
    ///
    /// The term is trimmed and lowercased. An empty or whitespace-only
    /// term performs no fetch and leaves the current set unchanged:
    /// no ticket is issued.
    pub fn begin(&mut self, term: &str) -> Option<SearchTicket> {
        let normalized = term.trim().to_lowercase();
        if normalized.is_empty() {
            return None;
        }
        self.generation += 1;
        self.query = normalized;
        self.status = SearchStatus::Resolving;
        Some(SearchTicket {
            generation: self.generation,
        })
    }

    /// Apply a resolution outcome, fully replacing the previous set
    ///
    /// Returns false (and changes nothing) when the ticket belongs to a
    /// superseded query whose response arrived late.
    pub fn settle(&mut self, ticket: SearchTicket, results: Vec<EntityDetail>) -> bool {
        if ticket.generation != self.generation {
            tracing::debug!(
                stale = ticket.generation,
                current = self.generation,
                "dropping outcome of superseded query"
            );
            return false;
        }
        self.status = if results.is_empty() {
            SearchStatus::NotFound
        } else {
            SearchStatus::Found
        };
        self.results = results;
        true
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn results(&self) -> &[EntityDetail] {
        &self.results
    }

    pub fn status(&self) -> SearchStatus {
        self.status
    }

    /// The single match, when the detail layout applies
    pub fn single_match(&self) -> Option<&EntityDetail> {
        match self.results.as_slice() {
            [only] => Some(only),
            _ => None,
        }
    }

    pub fn layout(&self) -> Layout {
        match self.results.len() {
            0 => Layout::NotFound,
            1 => Layout::Detail,
            _ => Layout::Browsing,
        }
    }
}

/// Resolve a user query: numeric id or exact lowercase name
///
/// Success narrows the set to exactly that entity; any failure degrades
/// the set to empty (logged, never an error to the caller). An empty
/// term is a no-op.
pub async fn resolve_query(client: &ApiClient, state: &mut SearchState, term: &str) {
    let Some(ticket) = state.begin(term) else {
        return;
    };
    let query = state.query().to_owned();
    let outcome = match client.entity(&query).await {
        Ok(found) => vec![found],
        Err(err) => {
            tracing::warn!(%query, error = %err, "entity lookup failed");
            Vec::new()
        }
    };
    state.settle(ticket, outcome);
}

/// Species-oriented resolution, used by previous/next navigation: look
/// up the species, then its default variety's detail record
pub async fn resolve_species_query(client: &ApiClient, state: &mut SearchState, term: &str) {
    let Some(ticket) = state.begin(term) else {
        return;
    };
    let query = state.query().to_owned();
    let outcome = match lookup_default_variety(client, &query).await {
        Ok(found) => vec![found],
        Err(err) => {
            tracing::warn!(%query, error = %err, "species lookup failed");
            Vec::new()
        }
    };
    state.settle(ticket, outcome);
}

async fn lookup_default_variety(
    client: &ApiClient,
    id_or_name: &str,
) -> crate::core::error::Result<EntityDetail> {
    let species = client.species(id_or_name).await?;
    let target = species
        .varieties
        .iter()
        .find(|slot| slot.is_default)
        .map(|slot| slot.pokemon.url.clone());
    match target {
        Some(url) => client.fetch_json(&url).await,
        // No flagged variety: fall back to the entity endpoint, which
        // accepts the same id-or-name key
        None => client.entity(id_or_name).await,
    }
}
