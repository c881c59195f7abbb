//! Poke Atlas - Entry Point
//!
//! Interactive catalog browser over the PokeAPI. Loads the initial
//! collection behind a suspense gate, then runs a prompt loop: searches
//! replace the displayed set, a single match opens the detail panel with
//! its nested relation chases, and id-based previous/next navigation
//! walks the species catalog.

use poke_atlas::api::client::ApiClient;
use poke_atlas::api::models::EntityDetail;
use poke_atlas::catalog::profile::{load_profile, SpeciesProfile};
use poke_atlas::catalog::{load_collection, SuspenseGate};
use poke_atlas::core::config::AtlasConfig;
use poke_atlas::core::error::{AtlasError, Result};
use poke_atlas::display::format::{
    format_name, normalize_height, normalize_weight, type_color,
};
use poke_atlas::search::{resolve_query, resolve_species_query, Layout, NameIndex, SearchState};

use clap::Parser;
use crossterm::style::Stylize;
use std::io::{self, Write};
use std::path::PathBuf;
use tokio::runtime::Runtime;

#[derive(Parser)]
#[command(name = "poke-atlas")]
#[command(about = "Terminal catalog browser for the PokeAPI creature database")]
struct Cli {
    /// Path to a TOML config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the collection page size
    #[arg(long)]
    limit: Option<u32>,

    /// Override the collection page offset
    #[arg(long)]
    offset: Option<u32>,

    /// Resolve a single query, print the result, and exit
    #[arg(long)]
    query: Option<String>,
}

fn main() -> Result<()> {
    // Initialize tracing for logging
    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "poke_atlas=info".into()),
        )
        .init();

    let cli = Cli::parse();
    let mut config = AtlasConfig::load(cli.config.as_deref())?;
    if let Some(limit) = cli.limit {
        config.page_limit = limit;
    }
    if let Some(offset) = cli.offset {
        config.page_offset = offset;
    }
    config.validate().map_err(AtlasError::Config)?;

    tracing::info!(api_base = %config.api_base, "Poke Atlas starting");

    // Create the async runtime driving all API calls
    let rt = Runtime::new()?;
    let client = ApiClient::from_config(&config);

    // One-shot mode: resolve and exit
    if let Some(term) = cli.query {
        let mut state = SearchState::new();
        rt.block_on(resolve_query(&client, &mut state, &term));
        match state.single_match() {
            Some(entity) => {
                let profile = rt.block_on(load_profile(&client, entity, &config));
                display_detail(entity, profile.as_ref(), None);
            }
            None => display_not_found(state.query()),
        }
        return Ok(());
    }

    // Kick off the collection load before entering the prompt loop; the
    // gate lets us render a loading line while the fan-out is in flight
    let gate = {
        let client = client.clone();
        let (limit, offset) = (config.page_limit, config.page_offset);
        let _guard = rt.enter();
        SuspenseGate::spawn(async move { load_collection(&client, limit, offset).await })
    };

    println!("\n=== POKE ATLAS ===");
    if gate.poll().is_pending() {
        println!("Loading catalog...");
    }

    // A failed collection load is fatal: render the failure view and exit
    let collection = match rt.block_on(gate.read()) {
        Ok(collection) => collection.clone(),
        Err(err) => {
            println!("Could not load the catalog: {}", err);
            return Err(AtlasError::CollectionLoad(err.to_string()));
        }
    };

    let mut state = SearchState::new();
    state.install_collection(collection.clone());

    // Both of these degrade quietly: suggestions and navigation bounds
    // are conveniences, not requirements
    let name_index = match rt.block_on(NameIndex::load(&client, config.name_index_limit)) {
        Ok(index) => index,
        Err(err) => {
            tracing::warn!(error = %err, "name index unavailable, suggestions disabled");
            NameIndex::default()
        }
    };
    let species_count = match rt.block_on(client.species_count()) {
        Ok(count) => Some(count),
        Err(err) => {
            tracing::warn!(error = %err, "species count unavailable, navigation unbounded");
            None
        }
    };

    display_help(&name_index);

    // Main prompt loop
    loop {
        display_set(&state);

        print!("> ");
        io::stdout().flush()?;

        let mut input = String::new();
        if io::stdin().read_line(&mut input)? == 0 {
            break;
        }
        let input = input.trim();

        if input.is_empty() {
            continue;
        }

        if input == "quit" || input == "q" {
            break;
        }

        if input == "help" || input == "h" {
            display_help(&name_index);
            continue;
        }

        if input == "list" || input == "l" {
            state.install_collection(collection.clone());
            continue;
        }

        if input == "cry" {
            display_cry(&state);
            continue;
        }

        if let Some(text) = input.strip_prefix("suggest ") {
            let suggestions = name_index.suggest(text, config.suggestion_cap);
            if suggestions.is_empty() {
                println!("No matching names.");
            } else {
                println!("{}", suggestions.join(", "));
            }
            continue;
        }

        if input == "next" || input == "prev" {
            let Some(current) = state.single_match() else {
                println!("Open a single creature first (search <name or number>).");
                continue;
            };
            let target = match input {
                "next" => {
                    let next = current.id + 1;
                    match species_count {
                        Some(count) if next > count => None,
                        _ => Some(next),
                    }
                }
                _ => current.id.checked_sub(1).filter(|id| *id >= 1),
            };
            let Some(target) = target else {
                println!("No creature in that direction.");
                continue;
            };
            rt.block_on(resolve_species_query(&client, &mut state, &target.to_string()));
            display_match(&rt, &client, &config, &state, species_count);
            continue;
        }

        if let Some(term) = input.strip_prefix("search ") {
            rt.block_on(resolve_query(&client, &mut state, term));
            display_match(&rt, &client, &config, &state, species_count);
            continue;
        }

        // Bare input is treated as a search term, like typing into the
        // original search bar
        rt.block_on(resolve_query(&client, &mut state, input));
        display_match(&rt, &client, &config, &state, species_count);
    }

    println!("\nGoodbye!");
    Ok(())
}

/// Render the detail panel (or not-found view) after a resolution
fn display_match(
    rt: &Runtime,
    client: &ApiClient,
    config: &AtlasConfig,
    state: &SearchState,
    species_count: Option<u32>,
) {
    match state.single_match() {
        Some(entity) => {
            let profile = rt.block_on(load_profile(client, entity, config));
            display_detail(entity, profile.as_ref(), species_count);
        }
        None => {
            if state.layout() == Layout::NotFound {
                display_not_found(state.query());
            }
        }
    }
}

/// One line per displayed entity in the browsing layout
fn display_set(state: &SearchState) {
    if state.layout() != Layout::Browsing {
        return;
    }
    println!();
    println!("--- Catalog ({} creatures) ---", state.results().len());
    for entity in state.results() {
        println!("  {}", summary_line(entity));
    }
    println!();
}

fn summary_line(entity: &EntityDetail) -> String {
    let height = normalize_height(entity.height);
    let weight = normalize_weight(entity.weight);
    format!(
        "#{:<4} {:<20} {} {} | {} {} | {}",
        entity.id,
        format_name(&entity.name),
        height.value,
        height.unit,
        weight.value,
        weight.unit,
        type_badges(entity)
    )
}

fn type_badges(entity: &EntityDetail) -> String {
    entity
        .types
        .iter()
        .map(|slot| {
            slot.kind
                .name
                .as_str()
                .with(type_color(&slot.kind.name))
                .to_string()
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// Full detail panel for a single match
fn display_detail(
    entity: &EntityDetail,
    profile: Option<&SpeciesProfile>,
    species_count: Option<u32>,
) {
    let height = normalize_height(entity.height);
    let weight = normalize_weight(entity.weight);

    println!();
    println!("=== {} (#{}) ===", format_name(&entity.name), entity.id);
    println!(
        "Height: {} {} | Weight: {} {}",
        height.value, height.unit, weight.value, weight.unit
    );
    println!("Types: {}", type_badges(entity));

    for slot in &entity.abilities {
        let kind = if slot.is_hidden { "Hidden" } else { "Regular" };
        println!("Ability ({}): {}", kind, format_name(&slot.ability.name));
    }

    match &entity.sprites.front_default {
        Some(url) => println!("Sprite: {}", url),
        None => println!("Sprite: (no image available)"),
    }

    if let Some(profile) = profile {
        if let Some(url) = &profile
            .default_variety
            .as_ref()
            .and_then(|v| v.sprites.other.official_artwork.front_default.clone())
        {
            println!("Artwork: {}", url);
        }

        println!();
        println!("Description:");
        match &profile.description {
            Some(description) => println!("  {}", description),
            None => println!("  (no description available)"),
        }

        println!();
        if profile.has_evolutions() {
            let line = profile
                .evolutions
                .iter()
                .map(|s| format_name(&s.name))
                .collect::<Vec<_>>()
                .join(" > ");
            println!("Evolutions: {}", line);
        } else {
            println!("Evolutions: none");
        }

        if profile.varieties.len() > 1 {
            let line = profile
                .varieties
                .iter()
                .map(|v| format_name(&v.name))
                .collect::<Vec<_>>()
                .join(", ");
            println!("Varieties: {}", line);
        }
    }

    println!();
    let previous = entity.id.checked_sub(1).filter(|id| *id >= 1);
    let next = match species_count {
        Some(count) if entity.id + 1 > count => None,
        _ => Some(entity.id + 1),
    };
    match (previous, next) {
        (Some(p), Some(n)) => println!("Navigation: prev (#{}) | next (#{})", p, n),
        (Some(p), None) => println!("Navigation: prev (#{})", p),
        (None, Some(n)) => println!("Navigation: next (#{})", n),
        (None, None) => {}
    }
    println!();
}

/// The "Pokémon not found" view
fn display_not_found(query: &str) {
    println!();
    println!("Pokemon not found: {}", query);
    println!("Type 'list' to go back to the catalog.");
    println!();
}

/// Print the sound cue reference of the current single match
fn display_cry(state: &SearchState) {
    let Some(entity) = state.single_match() else {
        println!("Open a single creature first (search <name or number>).");
        return;
    };
    match &entity.cries.latest {
        Some(url) => println!("Cry: {}", url),
        None => println!("No recorded cry for {}.", format_name(&entity.name)),
    }
}

fn display_help(name_index: &NameIndex) {
    println!();
    println!("Commands:");
    println!("  search <name|number>  - Look up one creature (or just type the name)");
    println!("  next / prev           - Walk the catalog from the open creature");
    if !name_index.is_empty() {
        println!("  suggest <text>        - Names containing <text>");
    }
    println!("  cry                   - Sound cue URL of the open creature");
    println!("  list / l              - Back to the full catalog");
    println!("  help / h              - Show this help");
    println!("  quit / q              - Exit");
    println!();
}
