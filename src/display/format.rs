//! Unit and text normalization for display
//!
//! The API reports physical attributes in tenths of the metric base unit
//! and ships flavor text with embedded layout control characters; these
//! helpers turn both into something printable.

use crate::api::models::SpeciesDetail;
use crossterm::style::Color;

/// A display-ready magnitude with its unit label
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measure {
    pub value: f64,
    pub unit: &'static str,
}

/// Convert API weight units (tenths of a kilogram) to kilograms
pub fn normalize_weight(raw: u32) -> Measure {
    Measure {
        value: raw as f64 / 10.0,
        unit: "kg",
    }
}

/// Convert API height units (tenths of a meter) for display
///
/// Creatures a meter or taller read in meters; sub-meter creatures read
/// in centimeters. Raw 10 (exactly one meter) takes the meters path.
pub fn normalize_height(raw: u32) -> Measure {
    if raw >= 10 {
        Measure {
            value: raw as f64 / 10.0,
            unit: "m",
        }
    } else {
        Measure {
            value: (raw * 10) as f64,
            unit: "cm",
        }
    }
}

/// Strip layout control characters from flavor text
///
/// Form feeds, newlines, and carriage returns each become one space;
/// leading and trailing whitespace is trimmed. Idempotent.
pub fn clean_flavor_text(raw: &str) -> String {
    raw.replace(['\u{c}', '\n', '\r'], " ").trim().to_string()
}

/// The species' first English flavor entry, cleaned for display
///
/// Entries in other languages are ignored. A species without an English
/// entry is a logged condition, not an error.
pub fn english_flavor_text(species: &SpeciesDetail) -> Option<String> {
    let entry = species
        .flavor_text_entries
        .iter()
        .find(|entry| entry.language.name == "en");
    match entry {
        Some(entry) => Some(clean_flavor_text(&entry.flavor_text)),
        None => {
            tracing::warn!(species = %species.name, "no English flavor text entry");
            None
        }
    }
}

/// Format an API slug for display: hyphens become spaces and every word
/// is capitalized ("ho-oh" -> "Ho Oh")
pub fn format_name(raw: &str) -> String {
    raw.replace('-', " ")
        .split(' ')
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Badge color for a type tag; unknown types render unstyled
pub fn type_color(type_name: &str) -> Color {
    match type_name {
        "normal" => Color::Grey,
        "fire" => Color::Red,
        "water" => Color::Blue,
        "electric" => Color::Yellow,
        "grass" => Color::Green,
        "ice" => Color::Cyan,
        "fighting" => Color::DarkRed,
        "poison" => Color::Magenta,
        "ground" => Color::DarkYellow,
        "flying" => Color::DarkCyan,
        "psychic" => Color::DarkMagenta,
        "bug" => Color::DarkGreen,
        "rock" => Color::DarkGrey,
        "ghost" => Color::DarkBlue,
        "dragon" => Color::DarkBlue,
        "dark" => Color::DarkGrey,
        "steel" => Color::Grey,
        "fairy" => Color::Magenta,
        _ => Color::Reset,
    }
}
