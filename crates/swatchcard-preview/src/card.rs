//! One mounted product card: selection plus hover preview.

use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use swatchcard_core::{
    build_swatches, extract_color_variants, ColorResolver, ImageRef, Product, SelectionChange,
    SelectionController, Swatch,
};

use crate::error::PreviewError;
use crate::hover::{HoverPreviewController, HoverSnapshot};
use crate::loader::ImageLoader;

/// Everything the rendering layer needs to draw a card.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CardView {
    pub product_id: String,
    pub title: String,
    pub vendor: Option<String>,
    /// Product page path, e.g. `"/products/classic-tee"`.
    pub path: String,
    pub swatches: Vec<Swatch>,
    pub selected_label: String,
    /// `None` when no image resolves; the renderer draws a placeholder.
    pub base_image: Option<ImageRef>,
    pub base_alt: String,
    pub hover_alt: String,
    /// Height as a percentage of width for the image box.
    pub aspect_ratio_percent: f64,
    pub hover: HoverSnapshot,
    pub is_on_sale: bool,
    pub price: String,
    pub currency_code: String,
}

/// A product card with its own selection and hover state.
///
/// Built on mount with the first variant selected. Dropping the card, or
/// calling [`unmount`](Self::unmount), cancels any pending hover timer and
/// preload.
#[derive(Debug)]
pub struct ProductCard<L: ImageLoader> {
    product: Product,
    resolver: ColorResolver,
    selection: SelectionController,
    hover: HoverPreviewController<L>,
}

impl<L: ImageLoader> ProductCard<L> {
    /// Mounts a card and starts preloading the first variant's hover image.
    ///
    /// Must be called from within a Tokio runtime.
    ///
    /// # Errors
    ///
    /// Returns [`PreviewError::Core`] wrapping
    /// [`CoreError::InvalidInput`](swatchcard_core::CoreError::InvalidInput)
    /// if the product has no variants.
    pub fn mount(
        product: Product,
        resolver: ColorResolver,
        loader: Arc<L>,
        hover_delay: Duration,
    ) -> Result<Self, PreviewError> {
        let selection = SelectionController::from_product(&product)?;
        let mut hover = HoverPreviewController::new(loader, hover_delay);
        hover.set_hover_image(selection.hover_image().cloned());
        Ok(Self {
            product,
            resolver,
            selection,
            hover,
        })
    }

    #[must_use]
    pub fn product(&self) -> &Product {
        &self.product
    }

    #[must_use]
    pub fn selection(&self) -> &SelectionController {
        &self.selection
    }

    #[must_use]
    pub fn hover(&self) -> &HoverPreviewController<L> {
        &self.hover
    }

    /// Selects a color swatch and hands the new hover image to the preview
    /// controller. Unknown colors are ignored.
    pub fn select(&mut self, label: &str) -> Option<SelectionChange> {
        let change = self.selection.select(label)?;
        self.hover.set_hover_image(change.hover_image.clone());
        Some(change)
    }

    pub fn mouse_enter(&mut self) {
        self.hover.mouse_enter();
    }

    pub fn mouse_leave(&mut self) {
        self.hover.mouse_leave();
    }

    #[must_use]
    pub fn should_show_hover(&self) -> bool {
        self.hover.should_show_hover()
    }

    #[must_use]
    pub fn swatches(&self) -> Vec<Swatch> {
        let labels = extract_color_variants(self.selection.variants());
        build_swatches(
            &labels,
            Some(self.selection.selected_label()),
            &self.resolver,
        )
    }

    #[must_use]
    pub fn view(&self) -> CardView {
        let base_image = self.selection.display_image().ok().cloned();
        let base_alt = base_image
            .as_ref()
            .map_or(self.product.title.as_str(), |image| {
                image.alt_or(&self.product.title)
            })
            .to_string();
        let aspect_ratio_percent = base_image
            .as_ref()
            .map_or(100.0, ImageRef::aspect_ratio_percent);
        let price = &self.product.price_range.min_variant_price;

        CardView {
            product_id: self.product.id.clone(),
            title: self.product.title.clone(),
            vendor: self.product.vendor.clone(),
            path: self.product.path(),
            swatches: self.swatches(),
            selected_label: self.selection.selected_label().to_string(),
            hover_alt: format!("{base_alt} - hover"),
            base_alt,
            base_image,
            aspect_ratio_percent,
            hover: self.hover.snapshot(),
            is_on_sale: self.product.is_on_sale(),
            price: price.amount.clone(),
            currency_code: price.currency_code.clone(),
        }
    }

    /// Tears the card down. No state changes after this returns.
    pub fn unmount(mut self) {
        self.hover.shutdown();
    }
}
