//! Selected-variant state for one product card.

use crate::products::{ImageRef, Product, Variant};
use crate::variants::{position_by_color, resolved_color};
use crate::CoreError;

/// Emitted by [`SelectionController::select`] when the selection changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionChange {
    pub variant_id: String,
    /// Resolved color of the newly selected variant.
    pub label: String,
    /// `None` when neither the variant nor the product has an image.
    pub display_image: Option<ImageRef>,
    pub hover_image: Option<ImageRef>,
}

/// Holds the selected variant of one card and resolves its images.
///
/// Selection is synchronous: by the time [`select`](Self::select) returns,
/// both the state and the emitted image pair are final.
#[derive(Debug, Clone)]
pub struct SelectionController {
    variants: Vec<Variant>,
    images: Vec<ImageRef>,
    selected: usize,
}

impl SelectionController {
    /// Creates a controller with the first variant selected.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidInput`] if `variants` is empty.
    pub fn new(variants: Vec<Variant>, images: Vec<ImageRef>) -> Result<Self, CoreError> {
        if variants.is_empty() {
            return Err(CoreError::InvalidInput(
                "a product card needs at least one variant".to_string(),
            ));
        }
        Ok(Self {
            variants,
            images,
            selected: 0,
        })
    }

    /// # Errors
    ///
    /// Returns [`CoreError::InvalidInput`] if the product has no variants.
    pub fn from_product(product: &Product) -> Result<Self, CoreError> {
        Self::new(product.variants.clone(), product.images.clone())
    }

    #[must_use]
    pub fn variants(&self) -> &[Variant] {
        &self.variants
    }

    #[must_use]
    pub fn selected_variant(&self) -> &Variant {
        &self.variants[self.selected]
    }

    /// Resolved color of the selected variant.
    #[must_use]
    pub fn selected_label(&self) -> &str {
        resolved_color(self.selected_variant())
    }

    /// Selects the first variant matching `label`.
    ///
    /// An unmatched label leaves the selection untouched and returns `None`;
    /// late or stale UI events must not fail the card.
    pub fn select(&mut self, label: &str) -> Option<SelectionChange> {
        let Some(idx) = position_by_color(label, &self.variants) else {
            let err = CoreError::VariantNotFound {
                label: label.to_string(),
            };
            tracing::debug!(error = %err, "ignoring color selection");
            return None;
        };

        self.selected = idx;
        let variant = self.selected_variant();
        Some(SelectionChange {
            variant_id: variant.id.clone(),
            label: resolved_color(variant).to_string(),
            display_image: self.display_image().ok().cloned(),
            hover_image: self.hover_image().cloned(),
        })
    }

    /// The variant's image, else the product's first image.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::NoImageAvailable`] when neither exists; the
    /// rendering layer picks a placeholder.
    pub fn display_image(&self) -> Result<&ImageRef, CoreError> {
        let variant = self.selected_variant();
        variant
            .image
            .as_ref()
            .or_else(|| self.images.first())
            .ok_or_else(|| CoreError::NoImageAvailable {
                variant_id: variant.id.clone(),
            })
    }

    #[must_use]
    pub fn hover_image(&self) -> Option<&ImageRef> {
        self.selected_variant().hover_image.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::products::SelectedOption;

    fn image(url: &str) -> ImageRef {
        ImageRef::new(format!("https://cdn.example.com/{url}.jpg"))
    }

    fn make_variant(id: &str, title: &str, img: Option<ImageRef>, hover: Option<ImageRef>) -> Variant {
        Variant {
            id: id.to_string(),
            title: title.to_string(),
            selected_options: vec![],
            image: img,
            hover_image: hover,
        }
    }

    #[test]
    fn new_rejects_empty_variant_list() {
        let err = SelectionController::new(vec![], vec![image("p")]).unwrap_err();
        assert!(matches!(err, CoreError::InvalidInput(_)));
    }

    #[test]
    fn blue_red_scenario() {
        let variants = vec![
            make_variant("1", "Blue", Some(image("a")), None),
            make_variant("2", "Red", Some(image("b")), Some(image("c"))),
        ];
        let mut controller = SelectionController::new(variants, vec![]).unwrap();

        assert_eq!(controller.selected_label(), "Blue");
        assert_eq!(controller.display_image().unwrap(), &image("a"));
        assert!(controller.hover_image().is_none());

        let change = controller.select("red").expect("expected a change");
        assert_eq!(controller.selected_label(), "Red");
        assert_eq!(controller.display_image().unwrap(), &image("b"));
        assert_eq!(controller.hover_image(), Some(&image("c")));
        assert_eq!(
            change,
            SelectionChange {
                variant_id: "2".to_string(),
                label: "Red".to_string(),
                display_image: Some(image("b")),
                hover_image: Some(image("c")),
            }
        );
    }

    #[test]
    fn unmatched_select_is_a_no_op() {
        let variants = vec![
            make_variant("1", "Blue", Some(image("a")), None),
            make_variant("2", "Red", Some(image("b")), None),
        ];
        let mut controller = SelectionController::new(variants, vec![]).unwrap();
        controller.select("Red");
        let before = controller.selected_variant().clone();

        assert!(controller.select("ultraviolet").is_none());
        assert_eq!(controller.selected_variant(), &before);
        assert!(controller.select("ultraviolet").is_none());
        assert_eq!(controller.selected_variant(), &before);
    }

    #[test]
    fn select_matches_color_option_over_title() {
        let mut variant = make_variant("9", "Navy / M", Some(image("n")), None);
        variant.selected_options = vec![
            SelectedOption::new("Size", "M"),
            SelectedOption::new("Color", "Navy"),
        ];
        let variants = vec![make_variant("1", "Blue", None, None), variant];
        let mut controller = SelectionController::new(variants, vec![]).unwrap();

        let change = controller.select("NAVY").expect("expected a change");
        assert_eq!(change.variant_id, "9");
        assert_eq!(change.label, "Navy");
    }

    #[test]
    fn display_image_falls_back_to_first_product_image() {
        let variants = vec![make_variant("1", "Blue", None, None)];
        let controller =
            SelectionController::new(variants, vec![image("p1"), image("p2")]).unwrap();
        assert_eq!(controller.display_image().unwrap(), &image("p1"));
    }

    #[test]
    fn display_image_errors_when_nothing_to_show() {
        let variants = vec![make_variant("1", "Blue", None, None)];
        let controller = SelectionController::new(variants, vec![]).unwrap();
        let err = controller.display_image().unwrap_err();
        assert_eq!(
            err,
            CoreError::NoImageAvailable {
                variant_id: "1".to_string()
            }
        );
    }

    #[test]
    fn change_event_carries_none_when_no_image() {
        let variants = vec![
            make_variant("1", "Blue", Some(image("a")), None),
            make_variant("2", "Red", None, None),
        ];
        let mut controller = SelectionController::new(variants, vec![]).unwrap();
        let change = controller.select("Red").expect("expected a change");
        assert!(change.display_image.is_none());
        assert!(change.hover_image.is_none());
    }
}
