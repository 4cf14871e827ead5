//! Swatch list presentation data.

use std::collections::HashSet;

use serde::Serialize;

use crate::color::{is_selected, normalize, ColorResolver};

/// Preferred swatch order. Colors not listed go to the end in input order.
pub const PREFERRED_COLOR_ORDER: [&str; 6] = ["orange", "green", "blue", "yellow", "pink", "navy"];

/// One rendered color swatch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Swatch {
    pub label: String,
    pub hex: String,
    pub selected: bool,
    /// Accessible label, e.g. `"Navy color (selected)"`.
    pub aria_label: String,
}

#[must_use]
pub fn aria_label(label: &str, selected: bool) -> String {
    if selected {
        format!("{label} color (selected)")
    } else {
        format!("{label} color")
    }
}

/// De-duplicates `labels` case-insensitively (first occurrence wins) and
/// stable-sorts them by [`PREFERRED_COLOR_ORDER`].
#[must_use]
pub fn order_labels<'a>(labels: &[&'a str]) -> Vec<&'a str> {
    let mut seen = HashSet::new();
    let mut unique: Vec<&str> = labels
        .iter()
        .copied()
        .filter(|label| seen.insert(normalize(label)))
        .collect();
    unique.sort_by_key(|label| {
        let normalized = normalize(label);
        PREFERRED_COLOR_ORDER
            .iter()
            .position(|known| *known == normalized)
            .unwrap_or(PREFERRED_COLOR_ORDER.len())
    });
    unique
}

/// Builds the swatch row for a card.
#[must_use]
pub fn build_swatches(labels: &[&str], selected: Option<&str>, resolver: &ColorResolver) -> Vec<Swatch> {
    order_labels(labels)
        .into_iter()
        .map(|label| {
            let selected = is_selected(label, selected);
            Swatch {
                label: label.to_string(),
                hex: resolver.resolve(label).to_string(),
                selected,
                aria_label: aria_label(label, selected),
            }
        })
        .collect()
}
