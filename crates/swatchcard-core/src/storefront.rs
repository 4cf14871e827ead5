//! Storefront API response shapes for product cards and the color palette.
//!
//! ## Observed shape
//!
//! ### Connections
//! Lists come wrapped in GraphQL connections: `variants { nodes [...] }`,
//! `images { nodes [...] }`, and `metaobjects { edges [ { node } ] }` for the
//! palette. `#[serde(default)]` covers stores that omit an empty connection.
//!
//! ### `hoverImage`
//! A variant metafield holding a file reference. The image sits three levels
//! down at `hoverImage.reference.image`, and every level may be `null` when
//! the metafield is unset or points at a non-image file.
//!
//! ### `compareAtPriceRange`
//! Present on every product; a minimum of `"0.0"` means no compare-at price.
//! Sale detection compares it numerically, so no special casing is needed.
//!
//! ### Palette metaobjects
//! Each node carries `label { value }` and `color { value }` fields. Either
//! field may be `null` on half-filled entries.

use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StorefrontProduct {
    /// Product GID, e.g. `"gid://shopify/Product/7981"`.
    pub id: String,
    #[serde(default)]
    pub vendor: Option<String>,
    pub title: String,
    pub handle: String,
    #[serde(default)]
    pub variants: Connection<StorefrontVariant>,
    #[serde(default)]
    pub images: Connection<StorefrontImage>,
    pub price_range: StorefrontPriceRange,
    #[serde(default)]
    pub compare_at_price_range: Option<StorefrontPriceRange>,
}

/// A GraphQL `nodes` connection.
#[derive(Debug, Deserialize)]
pub struct Connection<T> {
    #[serde(default = "Vec::new")]
    pub nodes: Vec<T>,
}

impl<T> Default for Connection<T> {
    fn default() -> Self {
        Self { nodes: Vec::new() }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StorefrontVariant {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub selected_options: Vec<StorefrontSelectedOption>,
    #[serde(default)]
    pub image: Option<StorefrontImage>,
    #[serde(default)]
    pub hover_image: Option<HoverImageMetafield>,
}

#[derive(Debug, Deserialize)]
pub struct StorefrontSelectedOption {
    pub name: String,
    pub value: String,
}

#[derive(Debug, Deserialize)]
pub struct HoverImageMetafield {
    #[serde(default)]
    pub reference: Option<MediaReference>,
}

#[derive(Debug, Deserialize)]
pub struct MediaReference {
    #[serde(default)]
    pub image: Option<StorefrontImage>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StorefrontImage {
    pub url: String,
    #[serde(default)]
    pub alt_text: Option<String>,
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StorefrontPriceRange {
    pub min_variant_price: StorefrontMoney,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StorefrontMoney {
    pub amount: String,
    pub currency_code: String,
}

/// Top-level palette query payload.
#[derive(Debug, Deserialize)]
pub struct ColorPaletteResponse {
    pub metaobjects: PaletteConnection,
}

#[derive(Debug, Default, Deserialize)]
pub struct PaletteConnection {
    #[serde(default)]
    pub edges: Vec<PaletteEdge>,
}

#[derive(Debug, Deserialize)]
pub struct PaletteEdge {
    #[serde(default)]
    pub node: Option<PaletteNode>,
}

#[derive(Debug, Deserialize)]
pub struct PaletteNode {
    #[serde(default)]
    pub label: Option<MetaobjectField>,
    #[serde(default)]
    pub color: Option<MetaobjectField>,
}

#[derive(Debug, Deserialize)]
pub struct MetaobjectField {
    #[serde(default)]
    pub value: Option<String>,
}
