//! Display module - normalization helpers for the terminal views

pub mod format;

pub use format::{
    clean_flavor_text, english_flavor_text, format_name, normalize_height, normalize_weight,
    type_color, Measure,
};
