//! Color label normalization and swatch color resolution.
//!
//! Lookups go through three tiers: the external palette, then the built-in
//! named colors, then [`DEFAULT_COLOR`]. A non-empty external palette replaces
//! the built-in map wholesale in [`build_color_map`]; the resolver still falls
//! through to the named colors for labels the palette lacks.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Generic gray for labels no palette knows about.
pub const DEFAULT_COLOR: &str = "#cccccc";

const BUILT_IN_COLORS: [(&str, &str); 6] = [
    ("orange", "#FF6633"),
    ("green", "#006600"),
    ("blue", "#00639C"),
    ("yellow", "#FCE78D"),
    ("pink", "#FFCCFF"),
    ("navy", "#19264B"),
];

/// Lower-cases and trims a color label.
#[must_use]
pub fn normalize(label: &str) -> String {
    label.trim().to_lowercase()
}

/// Whether `hex` is `#` followed by 3, 6, or 8 hex digits.
#[must_use]
pub fn is_hex_color(hex: &str) -> bool {
    hex.strip_prefix('#').is_some_and(|digits| {
        matches!(digits.len(), 3 | 6 | 8) && digits.chars().all(|c| c.is_ascii_hexdigit())
    })
}

/// One label/hex pair from the external palette. Either side may be missing
/// in the source data; such entries are skipped when building a map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaletteEntry {
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub hex: Option<String>,
}

impl PaletteEntry {
    #[must_use]
    pub fn new(label: impl Into<String>, hex: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
            hex: Some(hex.into()),
        }
    }
}

/// Normalized color label → hex string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColorMap(BTreeMap<String, String>);

impl ColorMap {
    /// The six built-in named colors.
    #[must_use]
    pub fn built_in() -> Self {
        BUILT_IN_COLORS
            .iter()
            .map(|(label, hex)| ((*label).to_string(), (*hex).to_string()))
            .collect()
    }

    /// Looks up a label after normalizing it.
    #[must_use]
    pub fn get(&self, label: &str) -> Option<&str> {
        self.0.get(&normalize(label)).map(String::as_str)
    }

    pub fn insert(&mut self, label: &str, hex: impl Into<String>) {
        self.0.insert(normalize(label), hex.into());
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl FromIterator<(String, String)> for ColorMap {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        let mut map = Self::default();
        for (label, hex) in iter {
            map.insert(&label, hex);
        }
        map
    }
}

/// Builds a color map from palette entries, falling back to the built-in map
/// when `entries` is empty.
#[must_use]
pub fn build_color_map(entries: &[PaletteEntry]) -> ColorMap {
    build_color_map_with(entries, &ColorMap::built_in())
}

fn build_color_map_with(entries: &[PaletteEntry], defaults: &ColorMap) -> ColorMap {
    if entries.is_empty() {
        return defaults.clone();
    }

    let mut map = ColorMap::default();
    for entry in entries {
        let label = entry.label.as_deref().map(str::trim).unwrap_or_default();
        let hex = entry.hex.as_deref().map(str::trim).unwrap_or_default();
        if label.is_empty() || hex.is_empty() {
            continue;
        }
        // Later duplicates win.
        map.insert(label, hex);
    }
    map
}

/// Single-tier lookup: `map[normalize(label)]`, else [`DEFAULT_COLOR`].
#[must_use]
pub fn hex_for<'a>(label: &str, map: &'a ColorMap) -> &'a str {
    map.get(label).unwrap_or(DEFAULT_COLOR)
}

/// Whether `label` names the currently selected color.
#[must_use]
pub fn is_selected(label: &str, selected: Option<&str>) -> bool {
    selected.is_some_and(|selected| normalize(label) == normalize(selected))
}

/// Built-in named colors plus the last-resort fallback, injected into a
/// [`ColorResolver`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorDefaults {
    pub named: ColorMap,
    pub fallback: String,
}

impl Default for ColorDefaults {
    fn default() -> Self {
        Self {
            named: ColorMap::built_in(),
            fallback: DEFAULT_COLOR.to_string(),
        }
    }
}

impl ColorDefaults {
    /// Built-in named colors with a custom fallback hex.
    #[must_use]
    pub fn with_fallback(fallback: impl Into<String>) -> Self {
        Self {
            fallback: fallback.into(),
            ..Self::default()
        }
    }
}

/// Resolves swatch colors against one palette.
#[derive(Debug, Clone)]
pub struct ColorResolver {
    palette: ColorMap,
    defaults: ColorDefaults,
}

impl ColorResolver {
    #[must_use]
    pub fn new(entries: &[PaletteEntry], defaults: ColorDefaults) -> Self {
        let palette = build_color_map_with(entries, &defaults.named);
        Self { palette, defaults }
    }

    /// Resolver over the built-in defaults only.
    #[must_use]
    pub fn built_in() -> Self {
        Self::new(&[], ColorDefaults::default())
    }

    #[must_use]
    pub fn palette(&self) -> &ColorMap {
        &self.palette
    }

    /// Palette hex, else built-in named hex, else the fallback gray.
    #[must_use]
    pub fn resolve(&self, label: &str) -> &str {
        self.palette
            .get(label)
            .or_else(|| self.defaults.named.get(label))
            .unwrap_or(self.defaults.fallback.as_str())
    }
}

impl Default for ColorResolver {
    fn default() -> Self {
        Self::built_in()
    }
}
