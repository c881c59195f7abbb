//! Property tests for the display normalizers

use poke_atlas::display::format::{
    clean_flavor_text, format_name, normalize_height, normalize_weight,
};
use proptest::prelude::*;

proptest! {
    /// Weight always converts to kilograms by dividing by ten
    #[test]
    fn prop_weight_is_tenths_of_kilograms(raw in 0u32..1_000_000) {
        let weight = normalize_weight(raw);
        prop_assert_eq!(weight.unit, "kg");
        prop_assert_eq!(weight.value, raw as f64 / 10.0);
    }

    /// Heights of a meter or more read in meters, the rest in centimeters
    #[test]
    fn prop_height_unit_splits_at_one_meter(raw in 0u32..100_000) {
        let height = normalize_height(raw);
        if raw >= 10 {
            prop_assert_eq!(height.unit, "m");
            prop_assert_eq!(height.value, raw as f64 / 10.0);
        } else {
            prop_assert_eq!(height.unit, "cm");
            prop_assert_eq!(height.value, (raw * 10) as f64);
        }
    }

    /// Cleaning flavor text twice is the same as cleaning it once
    #[test]
    fn prop_flavor_cleanup_idempotent(raw in "\\PC{0,200}") {
        let once = clean_flavor_text(&raw);
        prop_assert_eq!(clean_flavor_text(&once), once);
    }

    /// Cleaned flavor text never retains layout control characters
    #[test]
    fn prop_flavor_cleanup_strips_controls(raw in "[a-z \\n\\r\\x0c]{0,100}") {
        let cleaned = clean_flavor_text(&raw);
        prop_assert!(!cleaned.contains(['\u{c}', '\n', '\r']), "cleaned text retains a layout control character");
        prop_assert_eq!(cleaned.trim(), cleaned.as_str());
    }

    /// Formatted names never retain hyphens
    #[test]
    fn prop_format_name_removes_hyphens(raw in "[a-z]{1,10}(-[a-z]{1,10}){0,3}") {
        prop_assert!(!format_name(&raw).contains('-'));
    }
}
