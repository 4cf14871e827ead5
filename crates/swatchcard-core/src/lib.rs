pub mod app_config;
pub mod color;
pub mod config;
pub mod normalize;
pub mod palette;
pub mod pricing;
pub mod products;
pub mod selection;
pub mod storefront;
pub mod swatches;
pub mod variants;

pub use app_config::AppConfig;
pub use color::{
    build_color_map, hex_for, is_hex_color, is_selected, normalize as normalize_label,
    ColorDefaults, ColorMap, ColorResolver, PaletteEntry, DEFAULT_COLOR,
};
pub use config::{load_app_config, load_app_config_from_env};
pub use normalize::{normalize_palette, normalize_product};
pub use palette::load_palette;
pub use pricing::is_on_sale;
pub use products::{ImageRef, Money, PriceRange, Product, SelectedOption, Variant};
pub use selection::{SelectionChange, SelectionController};
pub use swatches::{build_swatches, Swatch};
pub use variants::{extract_color_variants, find_variant_by_color};

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A card cannot be built from this input (e.g. a product with no variants).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A selection named a color no variant carries. Never surfaced by
    /// [`SelectionController::select`]; kept for logging.
    #[error("no variant matches color \"{label}\"")]
    VariantNotFound { label: String },

    #[error("no image available for variant {variant_id}")]
    NoImageAvailable { variant_id: String },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for env var {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read palette file {path}: {source}")]
    PaletteFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse palette file: {0}")]
    PaletteFileParse(#[from] serde_yaml::Error),

    #[error("palette validation error: {0}")]
    Validation(String),
}
