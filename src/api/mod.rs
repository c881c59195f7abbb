//! API module - HTTP client and wire schema for the remote catalog

pub mod client;
pub mod models;

pub use client::ApiClient;
pub use models::{
    AbilitySlot, EntityDetail, EntitySummary, EvolutionChain, EvolutionNode, FlavorTextEntry,
    ListingPage, SpeciesDetail, VarietySlot,
};
