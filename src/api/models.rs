//! Wire types for the creature-data API
//!
//! The remote schema is an immutable external contract: these types
//! consume the known fields and ignore the rest. Sprite and cry URLs are
//! nullable on the wire and deserialize to `None`; callers must render a
//! fallback for missing assets.

use serde::Deserialize;

/// A name + URL handle, as returned in listing pages and nested resource
/// links. Discarded once the referenced detail record is resolved.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EntitySummary {
    pub name: String,
    pub url: String,
}

/// One page of a paginated listing
///
/// `count` is the catalog-wide total, not the page length; the species
/// listing's count bounds id-based navigation.
#[derive(Debug, Clone, Deserialize)]
pub struct ListingPage {
    pub count: u32,
    pub results: Vec<EntitySummary>,
}

/// Full record for one creature, owned by whichever caller requested it
/// and never mutated after creation
#[derive(Debug, Clone, Deserialize)]
pub struct EntityDetail {
    pub id: u32,
    pub name: String,
    /// Tenths of a meter
    pub height: u32,
    /// Tenths of a kilogram
    pub weight: u32,
    pub sprites: SpriteSet,
    #[serde(default)]
    pub types: Vec<TypeSlot>,
    #[serde(default)]
    pub abilities: Vec<AbilitySlot>,
    #[serde(default)]
    pub cries: CrySet,
    pub species: EntitySummary,
}

/// Sprite references; any of them may be absent
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SpriteSet {
    pub front_default: Option<String>,
    #[serde(default)]
    pub other: OtherSprites,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct OtherSprites {
    #[serde(rename = "official-artwork", default)]
    pub official_artwork: ArtworkSprites,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ArtworkSprites {
    pub front_default: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TypeSlot {
    pub slot: u32,
    #[serde(rename = "type")]
    pub kind: EntitySummary,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AbilitySlot {
    pub is_hidden: bool,
    pub ability: EntitySummary,
}

/// Sound cue references
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CrySet {
    pub latest: Option<String>,
}

/// Descriptive metadata grouping one or more entity variants
#[derive(Debug, Clone, Deserialize)]
pub struct SpeciesDetail {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub flavor_text_entries: Vec<FlavorTextEntry>,
    pub evolution_chain: Option<UrlRef>,
    #[serde(default)]
    pub varieties: Vec<VarietySlot>,
}

/// Localized descriptive prose; only the English entry is consumed
#[derive(Debug, Clone, Deserialize)]
pub struct FlavorTextEntry {
    pub flavor_text: String,
    pub language: EntitySummary,
}

/// An alternate physical form of a species
#[derive(Debug, Clone, Deserialize)]
pub struct VarietySlot {
    pub is_default: bool,
    pub pokemon: EntitySummary,
}

/// A bare URL link
#[derive(Debug, Clone, Deserialize)]
pub struct UrlRef {
    pub url: String,
}

/// Root of an evolution tree
#[derive(Debug, Clone, Deserialize)]
pub struct EvolutionChain {
    pub chain: EvolutionNode,
}

/// One node of the branching evolution tree: a species plus zero or more
/// successor nodes, in listing order
#[derive(Debug, Clone, Deserialize)]
pub struct EvolutionNode {
    pub species: EntitySummary,
    #[serde(default)]
    pub evolves_to: Vec<EvolutionNode>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_sprite_is_valid() {
        let json = r#"{
            "id": 10143,
            "name": "mewtwo-gmax",
            "height": 280,
            "weight": 10000,
            "sprites": { "front_default": null },
            "types": [],
            "abilities": [],
            "species": { "name": "mewtwo", "url": "https://pokeapi.co/api/v2/pokemon-species/150/" }
        }"#;
        let entity: EntityDetail = serde_json::from_str(json).unwrap();
        assert!(entity.sprites.front_default.is_none());
        assert!(entity.sprites.other.official_artwork.front_default.is_none());
        assert!(entity.cries.latest.is_none());
    }

    #[test]
    fn test_unknown_fields_ignored() {
        let json = r#"{
            "count": 1302,
            "next": "https://pokeapi.co/api/v2/pokemon?offset=25&limit=25",
            "previous": null,
            "results": [
                { "name": "bulbasaur", "url": "https://pokeapi.co/api/v2/pokemon/1/" }
            ]
        }"#;
        let page: ListingPage = serde_json::from_str(json).unwrap();
        assert_eq!(page.count, 1302);
        assert_eq!(page.results[0].name, "bulbasaur");
    }
}
