//! Color-option lookups over a product's variant list.
//!
//! Variant lists are small (a handful per product), so every lookup is a
//! linear scan in input order.

use crate::color::normalize;
use crate::products::Variant;

/// Option names that mark a variant's color, matched case-insensitively.
pub const COLOR_OPTION_NAMES: [&str; 2] = ["color", "colour"];

/// Returns `true` if `name` is a recognized color option name.
#[must_use]
pub fn is_color_option_name(name: &str) -> bool {
    COLOR_OPTION_NAMES
        .iter()
        .any(|known| name.to_lowercase() == *known)
}

/// Value of the variant's first color option, if it has one. The value may
/// be empty.
#[must_use]
pub fn color_option_value(variant: &Variant) -> Option<&str> {
    variant
        .selected_options
        .iter()
        .find(|option| is_color_option_name(&option.name))
        .map(|option| option.value.as_str())
}

/// The color a variant answers to: its color option value when non-empty,
/// otherwise its title (single-option products often carry the color only
/// in the title).
#[must_use]
pub fn resolved_color(variant: &Variant) -> &str {
    color_option_value(variant)
        .filter(|value| !value.is_empty())
        .unwrap_or(variant.title.as_str())
}

/// Color labels of the variants that carry a color option, in input order.
///
/// Empty values are dropped. Labels are not de-duplicated: the same color in
/// two sizes yields two entries.
#[must_use]
pub fn extract_color_variants(variants: &[Variant]) -> Vec<&str> {
    variants
        .iter()
        .filter_map(color_option_value)
        .filter(|value| !value.is_empty())
        .collect()
}

/// Position of the first variant whose resolved color matches `label`.
#[must_use]
pub fn position_by_color(label: &str, variants: &[Variant]) -> Option<usize> {
    let wanted = normalize(label);
    variants
        .iter()
        .position(|variant| normalize(resolved_color(variant)) == wanted)
}

/// First variant whose resolved color matches `label`, case-insensitively.
#[must_use]
pub fn find_variant_by_color<'a>(label: &str, variants: &'a [Variant]) -> Option<&'a Variant> {
    position_by_color(label, variants).map(|idx| &variants[idx])
}
