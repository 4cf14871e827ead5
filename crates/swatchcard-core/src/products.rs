use serde::{Deserialize, Serialize};

use crate::pricing;

/// Width and height used when the storefront omits image dimensions.
pub const FALLBACK_IMAGE_DIMENSION: u32 = 72;

/// A storefront image. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRef {
    /// CDN URL, e.g. `"https://cdn.shopify.com/s/files/1/tee-blue.jpg"`.
    pub url: String,
    pub alt_text: Option<String>,
    pub width: Option<u32>,
    pub height: Option<u32>,
}

impl ImageRef {
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            alt_text: None,
            width: None,
            height: None,
        }
    }

    /// Returns the alt text, or `title` when the image has none.
    #[must_use]
    pub fn alt_or<'a>(&'a self, title: &'a str) -> &'a str {
        self.alt_text
            .as_deref()
            .filter(|alt| !alt.is_empty())
            .unwrap_or(title)
    }

    #[must_use]
    pub fn display_width(&self) -> u32 {
        self.width
            .filter(|w| *w > 0)
            .unwrap_or(FALLBACK_IMAGE_DIMENSION)
    }

    #[must_use]
    pub fn display_height(&self) -> u32 {
        self.height
            .filter(|h| *h > 0)
            .unwrap_or(FALLBACK_IMAGE_DIMENSION)
    }

    /// Height as a percentage of width, used to reserve the image box before
    /// either image has loaded.
    #[must_use]
    pub fn aspect_ratio_percent(&self) -> f64 {
        f64::from(self.display_height()) / f64::from(self.display_width()) * 100.0
    }
}

/// One `{name, value}` pair from a variant's selected options, e.g.
/// `{"Color", "Navy"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectedOption {
    pub name: String,
    pub value: String,
}

impl SelectedOption {
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// A purchasable configuration of a [`Product`]. Read-only to the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Variant {
    /// Storefront GID, e.g. `"gid://shopify/ProductVariant/42"`.
    pub id: String,
    /// Display title, e.g. `"Navy / M"`, or just the color for single-option
    /// products.
    pub title: String,
    pub selected_options: Vec<SelectedOption>,
    pub image: Option<ImageRef>,
    /// Secondary image linked through the variant's hover-image metafield.
    pub hover_image: Option<ImageRef>,
}

/// A decimal amount as the storefront returns it, e.g. `"40.00"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Money {
    pub amount: String,
    pub currency_code: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min_variant_price: Money,
}

/// The product data a card is rendered from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub vendor: Option<String>,
    pub title: String,
    pub handle: String,
    pub variants: Vec<Variant>,
    pub images: Vec<ImageRef>,
    pub price_range: PriceRange,
    /// Pre-sale comparison price range, if any.
    pub compare_at_price_range: Option<PriceRange>,
}

impl Product {
    /// Whether the card should carry a sale badge.
    #[must_use]
    pub fn is_on_sale(&self) -> bool {
        pricing::is_on_sale(&self.price_range, self.compare_at_price_range.as_ref())
    }

    /// Storefront-relative product page path, e.g. `"/products/classic-tee"`.
    #[must_use]
    pub fn path(&self) -> String {
        format!("/products/{}", self.handle)
    }
}
