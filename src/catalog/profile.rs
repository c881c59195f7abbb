//! Species profile composition for the single-match detail layout
//!
//! When the resolved set narrows to one entity, the detail panel chases
//! its nested relations: species flavor text, the flattened evolution
//! sequence, every variety's detail record, and the default variety.
//! Each chase is independent and non-fatal: a failure is logged and the
//! corresponding field degrades to empty, never crashing the view.

use crate::api::client::ApiClient;
use crate::api::models::{EntityDetail, EntitySummary, SpeciesDetail};
use crate::catalog::evolution::load_evolutions;
use crate::catalog::loader::fetch_details;
use crate::core::config::AtlasConfig;

/// Everything the detail layout renders for one matched entity
#[derive(Debug, Clone)]
pub struct SpeciesProfile {
    pub species: SpeciesDetail,
    /// Cleaned English flavor text; `None` when no English entry exists
    pub description: Option<String>,
    /// Pre-order flattened evolution sequence
    pub evolutions: Vec<EntitySummary>,
    /// Full detail record per variety, in listing order
    pub varieties: Vec<EntityDetail>,
    /// The variety flagged as the species' canonical form
    pub default_variety: Option<EntityDetail>,
}

impl SpeciesProfile {
    /// Whether the species evolves at all: a chain containing only the
    /// species itself renders as "no evolutions"
    pub fn has_evolutions(&self) -> bool {
        self.evolutions.len() > 1
    }
}

/// Chase the nested relations behind one matched entity
///
/// The species fetch is the root of the chase: if it fails there is no
/// profile (logged, `None`). Every downstream chase degrades
/// independently.
pub async fn load_profile(
    client: &ApiClient,
    entity: &EntityDetail,
    config: &AtlasConfig,
) -> Option<SpeciesProfile> {
    let species = match client.fetch_json::<SpeciesDetail>(&entity.species.url).await {
        Ok(species) => species,
        Err(err) => {
            tracing::warn!(entity = %entity.name, error = %err, "species fetch failed");
            return None;
        }
    };

    let description = crate::display::format::english_flavor_text(&species);

    let evolutions = match load_evolutions(client, &species, config.max_chain_depth).await {
        Ok(evolutions) => evolutions,
        Err(err) => {
            tracing::warn!(species = %species.name, error = %err, "evolution chain fetch failed");
            Vec::new()
        }
    };

    let variety_refs: Vec<EntitySummary> = species
        .varieties
        .iter()
        .map(|slot| slot.pokemon.clone())
        .collect();
    let varieties = match fetch_details(client, &variety_refs).await {
        Ok(varieties) => varieties,
        Err(err) => {
            tracing::warn!(species = %species.name, error = %err, "variety fetch failed");
            Vec::new()
        }
    };

    let default_variety = default_variety(&species, &varieties, entity);

    Some(SpeciesProfile {
        species,
        description,
        evolutions,
        varieties,
        default_variety,
    })
}

/// Pick the variety flagged `is_default`, reusing an already-fetched
/// record where possible
fn default_variety(
    species: &SpeciesDetail,
    varieties: &[EntityDetail],
    entity: &EntityDetail,
) -> Option<EntityDetail> {
    let flagged = species.varieties.iter().find(|slot| slot.is_default)?;
    if flagged.pokemon.name == entity.name {
        return Some(entity.clone());
    }
    varieties
        .iter()
        .find(|detail| detail.name == flagged.pokemon.name)
        .cloned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::models::VarietySlot;

    fn summary(name: &str) -> EntitySummary {
        EntitySummary {
            name: name.into(),
            url: format!("https://pokeapi.co/api/v2/pokemon/{}/", name),
        }
    }

    fn species_with_varieties(slots: Vec<(bool, &str)>) -> SpeciesDetail {
        SpeciesDetail {
            id: 6,
            name: "charizard".into(),
            flavor_text_entries: Vec::new(),
            evolution_chain: None,
            varieties: slots
                .into_iter()
                .map(|(is_default, name)| VarietySlot {
                    is_default,
                    pokemon: summary(name),
                })
                .collect(),
        }
    }

    fn entity(name: &str) -> EntityDetail {
        let json = format!(
            r#"{{
                "id": 6,
                "name": "{}",
                "height": 17,
                "weight": 905,
                "sprites": {{ "front_default": null }},
                "species": {{ "name": "charizard", "url": "https://pokeapi.co/api/v2/pokemon-species/6/" }}
            }}"#,
            name
        );
        serde_json::from_str(&json).unwrap()
    }

    #[test]
    fn test_default_variety_reuses_matched_entity() {
        let species = species_with_varieties(vec![(true, "charizard"), (false, "charizard-mega-x")]);
        let matched = entity("charizard");
        let picked = default_variety(&species, &[], &matched).unwrap();
        assert_eq!(picked.name, "charizard");
    }

    #[test]
    fn test_default_variety_found_among_fetched() {
        let species = species_with_varieties(vec![(true, "charizard"), (false, "charizard-mega-x")]);
        let matched = entity("charizard-mega-x");
        let fetched = vec![entity("charizard"), entity("charizard-mega-x")];
        let picked = default_variety(&species, &fetched, &matched).unwrap();
        assert_eq!(picked.name, "charizard");
    }

    #[test]
    fn test_no_default_flag_yields_none() {
        let species = species_with_varieties(vec![(false, "charizard-mega-x")]);
        let matched = entity("charizard-mega-x");
        assert!(default_variety(&species, &[], &matched).is_none());
    }

    #[test]
    fn test_single_species_chain_counts_as_no_evolutions() {
        let profile = SpeciesProfile {
            species: species_with_varieties(vec![]),
            description: None,
            evolutions: vec![summary("tauros")],
            varieties: Vec::new(),
            default_variety: None,
        };
        assert!(!profile.has_evolutions());
    }
}
